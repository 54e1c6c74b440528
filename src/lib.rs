pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;
pub mod stress;

pub use error::{Result, StockError};
pub use models::{CriticalItem, Item, Method, MethodComparison, OptimizationResult};
pub use state::{Catalog, CatalogMode};
