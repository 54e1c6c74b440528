pub mod constants;
pub mod criticality;
pub mod knapsack;
pub mod optimizer;

pub use constants::*;
pub use criticality::{assess, extract_critical};
pub use knapsack::{Entry, Solution};
pub use optimizer::{compare_critical, compare_methods, optimize, optimize_critical};
