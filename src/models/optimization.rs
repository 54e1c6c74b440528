use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::error::{Result, StockError};
use crate::models::CriticalItem;

/// Which knapsack solver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Plain double recursion, exponential time.
    Recursive,
    /// Top-down recursion with a (remaining items, remaining budget) cache.
    Memoized,
    /// Bottom-up table fill.
    Iterative,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Recursive, Method::Memoized, Method::Iterative];

    pub fn name(self) -> &'static str {
        match self {
            Method::Recursive => "recursive",
            Method::Memoized => "memoized",
            Method::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one restock optimization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub max_benefit: u64,

    /// Chosen items in catalog order.
    pub selected: Vec<CriticalItem>,

    pub total_cost: u64,

    /// Budget as given, before truncation.
    pub budget: f64,

    /// `budget - total_cost`; keeps the fractional part of the budget.
    pub budget_remaining: f64,

    pub method: Method,

    /// How many under-stocked items were considered.
    pub critical_count: usize,

    pub selected_count: usize,
}

impl OptimizationResult {
    /// The result for an empty critical list or a zero budget.
    pub fn empty(method: Method, budget: f64, critical_count: usize) -> Self {
        Self {
            max_benefit: 0,
            selected: Vec::new(),
            total_cost: 0,
            budget,
            budget_remaining: budget,
            method,
            critical_count,
            selected_count: 0,
        }
    }

    /// Ids of the selected items, in selection order.
    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected.iter().map(|c| c.item.id).collect()
    }
}

/// A disagreement found while cross-checking the three solvers.
///
/// In a correct build none of these should ever appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ConsistencyViolation {
    #[error("max benefit: {reference} found {expected}, {other} found {found}")]
    MaxBenefit {
        reference: Method,
        other: Method,
        expected: u64,
        found: u64,
    },

    #[error("total cost: {reference} found {expected}, {other} found {found}")]
    TotalCost {
        reference: Method,
        other: Method,
        expected: u64,
        found: u64,
    },

    #[error("selected count: {reference} found {expected}, {other} found {found}")]
    SelectedCount {
        reference: Method,
        other: Method,
        expected: usize,
        found: usize,
    },

    #[error("selection: {reference} chose ids {expected:?}, {other} chose ids {found:?}")]
    Selection {
        reference: Method,
        other: Method,
        expected: Vec<u32>,
        found: Vec<u32>,
    },
}

/// All three solvers run on the same budget, plus any disagreements.
#[derive(Debug, Clone, Serialize)]
pub struct MethodComparison {
    pub budget: f64,
    pub results: Vec<OptimizationResult>,
    pub violations: Vec<ConsistencyViolation>,
}

impl MethodComparison {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn result(&self, method: Method) -> Option<&OptimizationResult> {
        self.results.iter().find(|r| r.method == method)
    }

    /// Escalate findings into an error for callers that treat them as fatal.
    pub fn ensure_consistent(self) -> Result<Self> {
        if self.violations.is_empty() {
            Ok(self)
        } else {
            Err(StockError::ConsistencyViolation(self.violations))
        }
    }
}
