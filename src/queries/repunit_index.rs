// src/queries/repunit_index.rs
//
// Problem 2: repunits R(N) for every prime N in a range.
//
// Only the index N is tested. R(N) itself is reported unverified: a prime
// index is necessary for a repunit prime but not sufficient (R(3) = 3 * 37).

use log::{info, warn};
use num::BigUint;
use serde::Serialize;
use crate::core::search_range::SearchRange;
use crate::core::serialization::json_converters;
use crate::integer_math::primality::PrimalityTester;
use crate::integer_math::repunit::generate_repunit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepunitEntry {
    #[serde(rename = "N")]
    pub n: u64,
    #[serde(serialize_with = "json_converters::serialize_biguint")]
    pub repunit: BigUint,
}

pub fn repunit_index_search(range: &SearchRange, tester: &PrimalityTester) -> Vec<RepunitEntry> {
    info!("Repunit-index search over N in [{}, {}]", range.start, range.end);

    let mut results = Vec::new();
    for n in range.iter() {
        if !tester.is_prime_u64(n) {
            continue;
        }
        let Ok(length) = u32::try_from(n) else {
            warn!("Repunit length {} is out of range, stopping", n);
            break;
        };
        results.push(RepunitEntry {
            n,
            repunit: generate_repunit(length),
        });
    }

    info!("Found {} prime repunit indices", results.len());
    results
}
