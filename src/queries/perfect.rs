// src/queries/perfect.rs
//
// Problem 6: Euclid's perfect number 2^(p-1) * (2^p - 1) for a Mersenne prime.

use log::info;
use num::{BigUint, One};
use serde::Serialize;
use crate::core::serialization::json_converters;
use crate::integer_math::primality::PrimalityTester;
use crate::queries::mersenne::mersenne_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfectNumberResult {
    pub p: u64,
    #[serde(serialize_with = "json_converters::serialize_option_biguint")]
    pub perfect_number: Option<BigUint>,
}

pub fn perfect_number(p: u64, tester: &PrimalityTester) -> PerfectNumberResult {
    let mersenne = mersenne_number(p);
    let perfect_number = if p > 0 && tester.is_prime(&mersenne) {
        Some((BigUint::one() << (p - 1)) * mersenne)
    } else {
        None
    };

    info!("Perfect number for p = {}: {}", p, perfect_number.is_some());
    PerfectNumberResult { p, perfect_number }
}
