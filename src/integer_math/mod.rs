// src/integer_math/mod.rs

pub mod lucas_lehmer;
pub mod palindrome;
pub mod pattern;
pub mod primality;
pub mod repunit;
pub mod sieve;
