pub mod generator;
pub mod output;
pub mod runner;

pub use generator::{random_budget, random_catalog};
pub use output::{print_summary, write_csv};
pub use runner::{run_stress, run_trial, StressConfig, StressReport, TrialResult};
