use thiserror::Error;

use crate::models::ConsistencyViolation;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid item '{name}': {reason}")]
    InvalidItem { name: String, reason: String },

    #[error("Optimization methods disagree: {}", summarize(.0))]
    ConsistencyViolation(Vec<ConsistencyViolation>),
}

fn summarize(violations: &[ConsistencyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, StockError>;
