// src/integer_math/repunit.rs

use num::{BigUint, Zero};

/// Repunit with `n` ones, `(10^n - 1) / 9`. `n = 0` yields zero.
///
/// # Examples
/// ```
/// use num::BigUint;
/// use prime_puzzles::integer_math::repunit::generate_repunit;
///
/// assert_eq!(generate_repunit(5), BigUint::from(11111u32));
/// ```
pub fn generate_repunit(n: u32) -> BigUint {
    (BigUint::from(10u32).pow(n) - 1u32) / 9u32
}

pub fn is_repunit(value: &BigUint) -> bool {
    !value.is_zero() && value.to_str_radix(10).bytes().all(|b| b == b'1')
}
