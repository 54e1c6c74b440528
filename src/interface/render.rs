use crate::models::{CriticalItem, Item, MethodComparison, OptimizationResult};
use crate::state::{Catalog, CatalogMode};

const RULE: &str = "--------------------";

/// Print one item with every field.
pub fn display_item(item: &Item) {
    println!("{}", RULE);
    println!("ID: {}", item.id);
    println!("Name: {}", item.name);
    println!("Category: {}", item.category);
    println!("Quantity: {}", item.quantity);
    println!("Location: {}", item.location);
    println!("Expiry date: {}", item.expiry_label());
    println!("Unit price: {:.2}", item.unit_price);
    println!("Ideal quantity: {}", item.ideal_quantity);
}

/// Print the whole catalog in its current order.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Stock is empty.");
        return;
    }

    let order = match catalog.mode() {
        CatalogMode::Sorted => "by name",
        CatalogMode::Unsorted => "insertion order",
    };
    println!();
    println!("=== Current stock ({} items, {}) ===", catalog.len(), order);
    for item in catalog.items() {
        display_item(item);
    }
    println!();
}

/// Print the restock queue with positions and deficits.
pub fn display_restock_queue(queue: &[&Item]) {
    if queue.is_empty() {
        println!("No items below their ideal quantity.");
        return;
    }

    println!();
    println!("=== Restock queue ({} items) ===", queue.len());
    for (i, item) in queue.iter().enumerate() {
        println!("{}", RULE);
        println!("Queue position: {}", i + 1);
        println!("ID: {}", item.id);
        println!("Name: {}", item.name);
        println!("Quantity: {}", item.quantity);
        println!("Ideal: {}", item.ideal_quantity);
        println!("Deficit: {}", item.deficit());
    }
    println!();
}

/// Print items by expiry date, soonest first.
pub fn display_expiry_view(view: &[&Item]) {
    if view.is_empty() {
        println!("Stock is empty.");
        return;
    }

    println!();
    println!("=== Expiry order (top expires first) ===");
    for (i, item) in view.iter().enumerate() {
        println!("{}", RULE);
        println!("Position: {}", i + 1);
        println!("ID: {}", item.id);
        println!("Name: {}", item.name);
        println!("Expiry: {}", item.expiry_label());
    }
    println!();
}

fn critical_line(critical: &CriticalItem, width: usize) -> String {
    format!(
        "  {:<width$}  qty {:>5}/{:<5}  deficit {:>5}  cost {:>7}  benefit {:>8}",
        critical.item.name,
        critical.item.quantity,
        critical.item.ideal_quantity,
        critical.deficit,
        critical.cost,
        critical.benefit,
        width = width
    )
}

fn name_width(critical: &[CriticalItem]) -> usize {
    critical
        .iter()
        .map(|c| c.item.name.len())
        .max()
        .unwrap_or(10)
}

/// Print the under-stocked items with their deficit, cost and benefit.
pub fn display_critical_items(critical: &[CriticalItem]) {
    if critical.is_empty() {
        println!("No critical items: everything is at or above its ideal quantity.");
        return;
    }

    println!();
    println!("=== Critical items ({}) ===", critical.len());
    let width = name_width(critical);
    for c in critical {
        println!("{}", critical_line(c, width));
    }
    let total_cost: u64 = critical.iter().map(|c| c.cost).sum();
    println!();
    println!("Cost to restock everything: {}", total_cost);
    println!();
}

/// Print one optimization result.
pub fn display_optimization(result: &OptimizationResult) {
    println!();
    println!("=== Restock plan ({}) ===", result.method);

    if result.critical_count == 0 {
        println!("No critical items to restock.");
        println!();
        return;
    }

    if result.selected.is_empty() {
        println!("No item fits in the budget.");
    } else {
        let width = name_width(&result.selected);
        for c in &result.selected {
            println!("{}", critical_line(c, width));
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Items considered: {}", result.critical_count);
    println!("Items selected: {}", result.selected_count);
    println!("Max benefit: {}", result.max_benefit);
    println!("Total cost: {:.2}", result.total_cost as f64);
    println!("Budget: {:.2}", result.budget);
    println!("Budget remaining: {:.2}", result.budget_remaining);
    println!();
}

/// Print all three results side by side and the consistency verdict.
pub fn display_comparison(comparison: &MethodComparison) {
    println!();
    println!("=== Method comparison (budget {:.2}) ===", comparison.budget);
    println!(
        "{:<10} {:>10} {:>10} {:>9} {:>12}",
        "method", "benefit", "cost", "selected", "remaining"
    );
    for result in &comparison.results {
        println!(
            "{:<10} {:>10} {:>10} {:>9} {:>12.2}",
            result.method.name(),
            result.max_benefit,
            result.total_cost,
            result.selected_count,
            result.budget_remaining
        );
    }

    for result in &comparison.results {
        if !result.selected.is_empty() {
            let names: Vec<&str> = result
                .selected
                .iter()
                .map(|c| c.item.name.as_str())
                .collect();
            println!("  {}: {}", result.method, names.join(", "));
        }
    }

    println!();
    if comparison.is_consistent() {
        println!("All methods agree.");
    } else {
        println!("Methods DISAGREE:");
        for violation in &comparison.violations {
            println!("  - {}", violation);
        }
    }
    println!();
}
