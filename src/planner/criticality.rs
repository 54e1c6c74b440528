use crate::models::{CriticalItem, Item};
use crate::planner::constants::BENEFIT_SCALE;
use crate::state::Catalog;

/// Score one item, or `None` when it is at or above its ideal quantity.
///
/// `cost = floor(deficit * price)` and
/// `benefit = floor(deficit * price * (1 + criticality) * 10)`. Both saturate
/// at `u64::MAX`; the solvers add them with saturating arithmetic.
pub fn assess(item: &Item) -> Option<CriticalItem> {
    let deficit = item.deficit();
    if deficit == 0 {
        return None;
    }

    let spend = f64::from(deficit) * item.unit_price;
    let cost = spend.floor() as u64;
    let benefit = (spend * (1.0 + item.criticality()) * BENEFIT_SCALE).floor() as u64;

    Some(CriticalItem::new(item.clone(), deficit, cost, benefit))
}

/// Every under-stocked item in catalog order. Empty means nothing to restock.
pub fn extract_critical(catalog: &Catalog) -> Vec<CriticalItem> {
    catalog.items().iter().filter_map(assess).collect()
}
