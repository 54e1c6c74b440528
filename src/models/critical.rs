use serde::Serialize;

use crate::models::Item;

/// An under-stocked item annotated for the restock optimizer.
///
/// Built fresh for every optimization run; see
/// [`crate::planner::extract_critical`] for how the numbers are derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalItem {
    pub item: Item,

    /// Units needed to reach the ideal quantity. Always positive.
    pub deficit: u32,

    /// Truncated price of buying the whole deficit.
    pub cost: u64,

    /// Truncated replenishment score.
    pub benefit: u64,
}

impl CriticalItem {
    pub fn new(item: Item, deficit: u32, cost: u64, benefit: u64) -> Self {
        Self {
            item,
            deficit,
            cost,
            benefit,
        }
    }
}
