use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{Result, StockError};
use crate::models::{
    ConsistencyViolation, CriticalItem, Method, MethodComparison, OptimizationResult,
};
use crate::planner::constants::{
    MAX_RECURSION_DEPTH, MAX_TABLE_CELLS, RECURSIVE_WARN_THRESHOLD,
};
use crate::planner::criticality::extract_critical;
use crate::planner::knapsack::{self, Entry};
use crate::state::Catalog;

/// Reject budgets the solvers cannot use. Never clamps.
fn check_budget(budget: f64) -> Result<()> {
    if budget.is_nan() || budget.is_infinite() {
        return Err(StockError::InvalidArgument(format!(
            "budget must be a finite number, got {budget}"
        )));
    }
    if budget < 0.0 {
        return Err(StockError::InvalidArgument(format!(
            "budget must not be negative, got {budget}"
        )));
    }
    Ok(())
}

/// Pick which under-stocked items to restock within `budget`.
///
/// The budget is truncated to whole currency units before solving.
pub fn optimize(catalog: &Catalog, budget: f64, method: Method) -> Result<OptimizationResult> {
    let critical = extract_critical(catalog);
    optimize_critical(&critical, budget, method)
}

/// Same as [`optimize`] over an already extracted critical list.
pub fn optimize_critical(
    critical: &[CriticalItem],
    budget: f64,
    method: Method,
) -> Result<OptimizationResult> {
    check_budget(budget)?;

    if critical.is_empty() {
        debug!(%method, "no critical items, nothing to optimize");
        return Ok(OptimizationResult::empty(method, budget, 0));
    }

    if method != Method::Iterative && critical.len() > MAX_RECURSION_DEPTH {
        return Err(StockError::InvalidArgument(format!(
            "{method} solver handles at most {MAX_RECURSION_DEPTH} critical items, got {}; \
             use the iterative method",
            critical.len()
        )));
    }

    if method == Method::Recursive && critical.len() > RECURSIVE_WARN_THRESHOLD {
        warn!(
            items = critical.len(),
            "recursive solver is exponential in the item count; this may take a while"
        );
    }

    let entries: Vec<Entry> = critical
        .iter()
        .map(|c| Entry::new(c.cost, c.benefit))
        .collect();
    let capacity = budget.floor() as u64;

    if method == Method::Iterative {
        let cells = knapsack::table_cells(&entries, capacity);
        if cells > MAX_TABLE_CELLS {
            return Err(StockError::InvalidArgument(format!(
                "iterative table would need {cells} cells (limit {MAX_TABLE_CELLS}); \
                 lower the budget or use the memoized method"
            )));
        }
    }

    let started = Instant::now();
    let solution = knapsack::solve(method, &entries, capacity);
    debug!(%method, elapsed = ?started.elapsed(), "knapsack solved");

    let selected: Vec<CriticalItem> = solution
        .chosen
        .iter()
        .map(|&i| critical[i].clone())
        .collect();
    let total_cost = selected
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.cost));

    info!(
        %method,
        benefit = solution.value,
        total_cost,
        selected = selected.len(),
        considered = critical.len(),
        "restock optimized"
    );

    Ok(OptimizationResult {
        max_benefit: solution.value,
        selected_count: selected.len(),
        selected,
        total_cost,
        budget,
        budget_remaining: budget - total_cost as f64,
        method,
        critical_count: critical.len(),
    })
}

/// Run all three solvers on the same budget and cross-check them.
pub fn compare_methods(catalog: &Catalog, budget: f64) -> Result<MethodComparison> {
    let critical = extract_critical(catalog);
    compare_critical(&critical, budget)
}

/// Same as [`compare_methods`] over an already extracted critical list.
///
/// Disagreements are reported in [`MethodComparison::violations`], not
/// returned as an error.
pub fn compare_critical(critical: &[CriticalItem], budget: f64) -> Result<MethodComparison> {
    let results = Method::ALL
        .into_iter()
        .map(|method| optimize_critical(critical, budget, method))
        .collect::<Result<Vec<_>>>()?;

    let mut violations = Vec::new();
    if let Some((reference, others)) = results.split_first() {
        for other in others {
            violations.extend(diff(reference, other));
        }
    }

    for violation in &violations {
        warn!(budget, %violation, "optimization methods disagree");
    }

    Ok(MethodComparison {
        budget,
        results,
        violations,
    })
}

fn diff(reference: &OptimizationResult, other: &OptimizationResult) -> Vec<ConsistencyViolation> {
    let (r, o) = (reference.method, other.method);
    let mut found = Vec::new();

    if reference.max_benefit != other.max_benefit {
        found.push(ConsistencyViolation::MaxBenefit {
            reference: r,
            other: o,
            expected: reference.max_benefit,
            found: other.max_benefit,
        });
    }
    if reference.total_cost != other.total_cost {
        found.push(ConsistencyViolation::TotalCost {
            reference: r,
            other: o,
            expected: reference.total_cost,
            found: other.total_cost,
        });
    }
    if reference.selected_count != other.selected_count {
        found.push(ConsistencyViolation::SelectedCount {
            reference: r,
            other: o,
            expected: reference.selected_count,
            found: other.selected_count,
        });
    }

    let (expected, actual) = (reference.selected_ids(), other.selected_ids());
    if expected != actual {
        found.push(ConsistencyViolation::Selection {
            reference: r,
            other: o,
            expected,
            found: actual,
        });
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn critical(id: u32, cost: u64, benefit: u64) -> CriticalItem {
        let item = Item {
            id,
            name: format!("item-{id}"),
            category: "Geral".to_string(),
            quantity: 0,
            location: "A1".to_string(),
            expiry_date: None,
            unit_price: 1.0,
            ideal_quantity: 1,
        };
        CriticalItem::new(item, 1, cost, benefit)
    }

    #[test]
    fn test_negative_budget_is_invalid_argument() {
        for method in Method::ALL {
            let err = optimize_critical(&[], -0.01, method).unwrap_err();
            assert!(matches!(err, StockError::InvalidArgument(_)));
        }
        assert!(optimize_critical(&[], f64::NAN, Method::Iterative).is_err());
        assert!(optimize_critical(&[], f64::INFINITY, Method::Iterative).is_err());
    }

    #[test]
    fn test_long_lists_rejected_by_recursive_solvers() {
        let list: Vec<CriticalItem> = (0..50_000).map(|i| critical(i, 1, 1)).collect();
        for method in [Method::Recursive, Method::Memoized] {
            let err = optimize_critical(&list, 1.0, method).unwrap_err();
            assert!(matches!(err, StockError::InvalidArgument(_)), "{method}");
        }
        assert!(compare_critical(&list, 1.0).is_err());

        let result = optimize_critical(&list, 1.0, Method::Iterative).unwrap();
        assert_eq!(result.max_benefit, 1);
        assert_eq!(result.selected_ids(), [0]);
        assert_eq!(result.critical_count, 50_000);
    }

    #[test]
    fn test_list_at_depth_limit_still_solves() {
        let list: Vec<CriticalItem> = (0..MAX_RECURSION_DEPTH as u32)
            .map(|i| critical(i, 2, 3))
            .collect();
        let result = optimize_critical(&list, 5.0, Method::Memoized).unwrap();
        assert_eq!(result.max_benefit, 6);
        assert_eq!(result.selected_ids(), [0, 1]);
    }

    #[test]
    fn test_saturated_costs_do_not_overflow() {
        let list = vec![critical(1, u64::MAX, u64::MAX), critical(2, u64::MAX, u64::MAX)];
        let budget = u64::MAX as f64;

        let err = optimize_critical(&list, budget, Method::Iterative).unwrap_err();
        assert!(matches!(err, StockError::InvalidArgument(_)));

        for method in [Method::Recursive, Method::Memoized] {
            let result = optimize_critical(&list, budget, method).unwrap();
            assert_eq!(result.max_benefit, u64::MAX, "{method}");
            assert_eq!(result.total_cost, u64::MAX, "{method}");
            assert_eq!(result.selected_ids(), [1], "{method}");
        }
    }

    #[test]
    fn test_diff_reports_every_field() {
        let reference = OptimizationResult {
            max_benefit: 10,
            selected: vec![critical(1, 3, 10)],
            total_cost: 3,
            budget: 5.0,
            budget_remaining: 2.0,
            method: Method::Recursive,
            critical_count: 2,
            selected_count: 1,
        };
        let other = OptimizationResult {
            max_benefit: 9,
            selected: vec![critical(2, 2, 4), critical(3, 2, 5)],
            total_cost: 4,
            budget: 5.0,
            budget_remaining: 1.0,
            method: Method::Memoized,
            critical_count: 2,
            selected_count: 2,
        };

        let violations = diff(&reference, &other);
        assert_eq!(violations.len(), 4);
        assert!(diff(&reference, &reference).is_empty());
    }

    #[test]
    fn test_compare_on_empty_list_is_consistent() {
        let comparison = compare_critical(&[], 100.0).unwrap();
        assert!(comparison.is_consistent());
        assert_eq!(comparison.results.len(), 3);
        for result in &comparison.results {
            assert_eq!(result.max_benefit, 0);
            assert_eq!(result.critical_count, 0);
        }
    }

    #[test]
    fn test_selected_items_keep_their_records() {
        let list = vec![critical(7, 4, 30), critical(8, 9, 10)];
        let result = optimize_critical(&list, 5.0, Method::Memoized).unwrap();
        assert_eq!(result.selected, vec![list[0].clone()]);
        assert_eq!(result.critical_count, 2);
        assert_eq!(result.budget_remaining, 1.0);
    }
}
