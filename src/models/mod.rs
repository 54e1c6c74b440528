mod critical;
mod item;
mod optimization;

pub use critical::CriticalItem;
pub use item::Item;
pub use optimization::{ConsistencyViolation, Method, MethodComparison, OptimizationResult};
