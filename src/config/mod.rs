// src/config/mod.rs

pub mod puzzle_config;

// Re-export main types for convenience
pub use puzzle_config::{
    GoldbachConfig, IntervalConfig, MersenneConfig, PalindromeConfig, PerfectConfig, PuzzleConfig,
};
