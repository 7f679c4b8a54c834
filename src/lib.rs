// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod integer_math;
pub mod queries;
