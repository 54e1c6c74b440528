#[macro_use]
extern crate assert_float_eq;

use proptest::prelude::*;

use stock_keeper_rs::error::StockError;
use stock_keeper_rs::models::{CriticalItem, Item, Method};
use stock_keeper_rs::planner::{
    compare_critical, compare_methods, extract_critical, optimize, optimize_critical,
};
use stock_keeper_rs::state::Catalog;

fn make_item(id: u32, name: &str, quantity: u32, ideal: u32, price: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: "Geral".to_string(),
        quantity,
        location: "A1".to_string(),
        expiry_date: None,
        unit_price: price,
        ideal_quantity: ideal,
    }
}

fn critical(id: u32, cost: u64, benefit: u64) -> CriticalItem {
    CriticalItem::new(make_item(id, &format!("item-{id}"), 0, 1, 1.0), 1, cost, benefit)
}

/// The textbook instance: costs 10/20/30, benefits 60/100/120.
fn textbook() -> Vec<CriticalItem> {
    vec![critical(1, 10, 60), critical(2, 20, 100), critical(3, 30, 120)]
}

/// Exhaustive search, valid when every cost is at least 1.
fn brute_force(entries: &[(u64, u64)], capacity: u64) -> u64 {
    let n = entries.len();
    (0u32..(1 << n))
        .filter_map(|mask| {
            let (cost, benefit) = entries
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0, 0), |(c, b), (_, (ec, eb))| (c + ec, b + eb));
            (cost <= capacity).then_some(benefit)
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn test_textbook_instance_agrees_across_methods() {
    for method in Method::ALL {
        let result = optimize_critical(&textbook(), 50.0, method).unwrap();
        assert_eq!(result.max_benefit, 220, "{method}");
        assert_eq!(result.total_cost, 50, "{method}");
        assert_eq!(result.selected_count, 2, "{method}");
        assert_eq!(result.selected_ids(), [2, 3], "{method}");
        assert_eq!(result.critical_count, 3, "{method}");
        assert_eq!(result.method, method);
    }

    let comparison = compare_critical(&textbook(), 50.0).unwrap();
    assert!(comparison.is_consistent());
}

#[test]
fn test_fractional_budget_is_truncated_but_reported() {
    let result = optimize_critical(&textbook(), 30.99, Method::Iterative).unwrap();
    assert_eq!(result.max_benefit, 160);
    assert_eq!(result.total_cost, 30);
    assert_float_absolute_eq!(result.budget, 30.99, 1e-9);
    assert_float_absolute_eq!(result.budget_remaining, 0.99, 1e-9);
}

#[test]
fn test_nothing_critical_gives_zero_result() {
    let catalog = Catalog::sorted(vec![
        make_item(1, "Gaze", 250, 250, 0.25),
        make_item(2, "Luva", 600, 500, 0.35),
    ]);
    assert!(extract_critical(&catalog).is_empty());

    for method in Method::ALL {
        let result = optimize(&catalog, 1_000.0, method).unwrap();
        assert_eq!(result.max_benefit, 0, "{method}");
        assert_eq!(result.total_cost, 0, "{method}");
        assert!(result.selected.is_empty(), "{method}");
        assert_eq!(result.critical_count, 0, "{method}");
        assert_eq!(result.budget_remaining, 1_000.0, "{method}");
    }
}

#[test]
fn test_zero_budget_gives_zero_benefit() {
    let catalog = Catalog::sorted(vec![
        make_item(1, "Soro", 0, 10, 4.8),
        // Deficit of one unit at 0.45: costs nothing after truncation.
        make_item(2, "Atadura", 299, 300, 0.45),
    ]);

    for method in Method::ALL {
        let result = optimize(&catalog, 0.0, method).unwrap();
        assert_eq!(result.max_benefit, 0, "{method}");
        assert!(result.selected.is_empty(), "{method}");
        assert_eq!(result.critical_count, 2, "{method}");
    }
}

#[test]
fn test_negative_budget_is_rejected() {
    let catalog = Catalog::sorted(vec![make_item(1, "Soro", 0, 10, 4.8)]);
    for method in Method::ALL {
        assert!(matches!(
            optimize(&catalog, -10.0, method),
            Err(StockError::InvalidArgument(_))
        ));
    }
    assert!(matches!(
        compare_methods(&catalog, -0.5),
        Err(StockError::InvalidArgument(_))
    ));
}

#[test]
fn test_catalog_optimization_end_to_end() {
    // Soro: deficit 45, cost floor(45 * 4.8) = 216
    // Cateter: deficit 50, cost 105
    // Termometro: deficit 4, cost 74
    let catalog = Catalog::sorted(vec![
        make_item(3, "Soro", 15, 60, 4.8),
        make_item(10, "Cateter", 0, 50, 2.1),
        make_item(4, "Termometro", 6, 10, 18.5),
    ]);

    let comparison = compare_methods(&catalog, 200.0).unwrap();
    assert!(comparison.is_consistent(), "{:?}", comparison.violations);

    let result = comparison.result(Method::Memoized).unwrap();
    assert_eq!(result.selected_ids(), [10, 4]);
    assert_eq!(result.total_cost, 179);
    assert_float_absolute_eq!(result.budget_remaining, 21.0, 1e-9);
    assert!(comparison.ensure_consistent().is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    /// Property: the three solvers return identical results, selection included,
    /// even with zero-cost and zero-benefit entries.
    #[test]
    fn methods_agree_on_random_inputs(
        entries in prop::collection::vec((0u64..40, 0u64..200), 0..11),
        budget in 0.0f64..150.0,
    ) {
        let list: Vec<CriticalItem> = entries
            .iter()
            .enumerate()
            .map(|(i, &(cost, benefit))| critical(i as u32, cost, benefit))
            .collect();

        let comparison = compare_critical(&list, budget).unwrap();
        prop_assert!(comparison.is_consistent(), "{:?}", comparison.violations);

        let ids: Vec<Vec<u32>> = comparison.results.iter().map(|r| r.selected_ids()).collect();
        prop_assert_eq!(&ids[0], &ids[1]);
        prop_assert_eq!(&ids[1], &ids[2]);
    }

    /// Property: with positive costs the result matches exhaustive search,
    /// and the selection is feasible and adds up.
    #[test]
    fn iterative_matches_brute_force(
        entries in prop::collection::vec((1u64..40, 0u64..200), 0..11),
        budget in 0.0f64..150.0,
    ) {
        let list: Vec<CriticalItem> = entries
            .iter()
            .enumerate()
            .map(|(i, &(cost, benefit))| critical(i as u32, cost, benefit))
            .collect();

        let result = optimize_critical(&list, budget, Method::Iterative).unwrap();
        prop_assert_eq!(result.max_benefit, brute_force(&entries, budget.floor() as u64));
        prop_assert!(result.total_cost as f64 <= budget);

        let benefit: u64 = result.selected.iter().map(|c| c.benefit).sum();
        prop_assert_eq!(benefit, result.max_benefit);
        prop_assert_eq!(result.selected_count, result.selected.len());
    }

    /// Property: whole-catalog comparisons never report a violation.
    #[test]
    fn compare_methods_never_disagrees(
        rows in prop::collection::vec((0u32..60, 1u32..60, 0u32..2_000), 0..10),
        budget in 0.0f64..300.0,
    ) {
        let items: Vec<Item> = rows
            .iter()
            .enumerate()
            .map(|(i, &(qty, ideal, cents))| {
                make_item(i as u32, &format!("item-{i:02}"), qty, ideal, f64::from(cents) / 100.0)
            })
            .collect();
        let catalog = Catalog::sorted(items);

        let comparison = compare_methods(&catalog, budget).unwrap();
        prop_assert!(comparison.is_consistent(), "{:?}", comparison.violations);
    }
}
