// src/queries/interval.rs
//
// Problem 4: primes strictly between p1^2 and p2^2.

use log::info;
use num::BigUint;
use serde::Serialize;
use crate::core::serialization::json_converters;
use crate::integer_math::primality::PrimalityTester;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalPrimes {
    #[serde(serialize_with = "json_converters::serialize_biguint_pair")]
    pub interval: (BigUint, BigUint),
    #[serde(serialize_with = "json_converters::serialize_biguint_vec")]
    pub primes_found: Vec<BigUint>,
}

/// Ascending primes in `(p1^2, p2^2)`, at most `cap` of them.
pub fn interval_prime_search(p1: u64, p2: u64, cap: usize, tester: &PrimalityTester) -> IntervalPrimes {
    let lower = BigUint::from(p1).pow(2);
    let upper = BigUint::from(p2).pow(2);
    info!("Interval prime search in ({}, {}), cap {}", lower, upper, cap);

    let mut primes_found = Vec::new();
    let mut candidate = &lower + 1u32;
    while candidate < upper && primes_found.len() < cap {
        if tester.is_prime(&candidate) {
            primes_found.push(candidate.clone());
        }
        candidate += 1u32;
    }

    info!("Found {} primes", primes_found.len());
    IntervalPrimes {
        interval: (lower, upper),
        primes_found,
    }
}
