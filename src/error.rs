// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Input must be even > 2, got odd value {0}")]
    NotEven(u64),

    #[error("Input must be even > 2, got {0}")]
    TooSmall(u64),

    #[error("Invalid search range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
