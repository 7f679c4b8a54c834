// src/core/mod.rs

pub mod search_range;
pub mod serialization;
pub mod witness_random;
