mod catalog;
mod persistence;
pub mod sorting;

pub use catalog::{Catalog, CatalogMode};
pub use persistence::{load_items, parse_items};
