// src/queries/mod.rs
//
// Query Dispatcher: one entry point for the seven puzzle queries
//
// Query               Scans                        Result
// ─────────────────────────────────────────────────────────────────────
// PatternPrime        n in range                   first prime 12..n..21
// RepunitIndex        N in range                   R(N) for prime N
// Mersenne            p in range                   2^p - 1 prime
// IntervalPrimes      (p1^2, p2^2)                 first `cap` primes
// PalindromicPrime    odd-length palindromes       first prime
// PerfectNumber       single p                     2^(p-1)(2^p - 1)
// Goldbach            i in 2..n                    first prime pair
//
// No query depends on another's output. Each returns a serializable
// record; "not found" is a record with empty fields, never an error.
//
// Usage:
//   let config = PuzzleConfig::default();
//   let query = Query::Goldbach { n: 20 };
//   let outcome = run_query(&query, &config.primality)?;

pub mod goldbach;
pub mod interval;
pub mod mersenne;
pub mod palindromic;
pub mod pattern_prime;
pub mod perfect;
pub mod repunit_index;

use log::info;
use serde::Serialize;
use crate::config::PuzzleConfig;
use crate::core::search_range::SearchRange;
use crate::error::PuzzleResult;
use crate::integer_math::primality::PrimalityTester;

pub use goldbach::{goldbach_pair, GoldbachPair};
pub use interval::{interval_prime_search, IntervalPrimes};
pub use mersenne::{mersenne_search, MersenneEntry, MersenneMethod};
pub use palindromic::{palindromic_prime_search, PalindromicPrimeResult};
pub use pattern_prime::{pattern_prime_search, PatternPrimeResult};
pub use perfect::{perfect_number, PerfectNumberResult};
pub use repunit_index::{repunit_index_search, RepunitEntry};

/// A single puzzle query with all of its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    PatternPrime { range: SearchRange },
    RepunitIndex { range: SearchRange },
    Mersenne { range: SearchRange, method: MersenneMethod },
    IntervalPrimes { p1: u64, p2: u64, cap: usize },
    PalindromicPrime { min_digits: u32, max_candidates: u64 },
    PerfectNumber { p: u64 },
    Goldbach { n: u64 },
}

/// Result record of whichever query ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    PatternPrime(PatternPrimeResult),
    RepunitIndex(Vec<RepunitEntry>),
    Mersenne(Vec<MersenneEntry>),
    IntervalPrimes(IntervalPrimes),
    PalindromicPrime(PalindromicPrimeResult),
    PerfectNumber(PerfectNumberResult),
    Goldbach(GoldbachPair),
}

impl Query {
    /// Returns a human-readable name for the query
    pub fn name(&self) -> &str {
        match self {
            Self::PatternPrime { .. } => "Pattern-prime search",
            Self::RepunitIndex { .. } => "Repunit-index search",
            Self::Mersenne { .. } => "Mersenne search",
            Self::IntervalPrimes { .. } => "Interval prime search",
            Self::PalindromicPrime { .. } => "Palindromic-prime search",
            Self::PerfectNumber { .. } => "Perfect number",
            Self::Goldbach { .. } => "Goldbach-pair search",
        }
    }

    /// Every query, parameterised from configuration.
    pub fn all_from_config(config: &PuzzleConfig) -> Vec<Query> {
        let mersenne_method = if config.mersenne.use_lucas_lehmer {
            MersenneMethod::LucasLehmer
        } else {
            MersenneMethod::Oracle
        };

        vec![
            Query::PatternPrime { range: config.pattern },
            Query::RepunitIndex { range: config.repunit },
            Query::Mersenne { range: config.mersenne.range(), method: mersenne_method },
            Query::IntervalPrimes { p1: config.interval.p1, p2: config.interval.p2, cap: config.interval.cap },
            Query::PalindromicPrime {
                min_digits: config.palindrome.min_digits,
                max_candidates: config.palindrome.max_candidates,
            },
            Query::PerfectNumber { p: config.perfect.p },
            Query::Goldbach { n: config.goldbach.n },
        ]
    }
}

/// Runs one query against the given oracle.
///
/// Only the Goldbach query can fail, on odd or too-small input.
///
/// # Examples
/// ```
/// use prime_puzzles::integer_math::primality::PrimalityTester;
/// use prime_puzzles::queries::{run_query, GoldbachPair, Query, QueryOutcome};
///
/// let outcome = run_query(&Query::Goldbach { n: 20 }, &PrimalityTester::default()).unwrap();
/// assert_eq!(outcome, QueryOutcome::Goldbach(GoldbachPair { n: 20, pair: Some((3, 17)) }));
/// ```
pub fn run_query(query: &Query, tester: &PrimalityTester) -> PuzzleResult<QueryOutcome> {
    info!("Running query: {}", query.name());

    let outcome = match query {
        Query::PatternPrime { range } => QueryOutcome::PatternPrime(pattern_prime_search(range, tester)),
        Query::RepunitIndex { range } => QueryOutcome::RepunitIndex(repunit_index_search(range, tester)),
        Query::Mersenne { range, method } => QueryOutcome::Mersenne(mersenne_search(range, *method, tester)),
        Query::IntervalPrimes { p1, p2, cap } => {
            QueryOutcome::IntervalPrimes(interval_prime_search(*p1, *p2, *cap, tester))
        }
        Query::PalindromicPrime { min_digits, max_candidates } => {
            QueryOutcome::PalindromicPrime(palindromic_prime_search(*min_digits, *max_candidates, tester))
        }
        Query::PerfectNumber { p } => QueryOutcome::PerfectNumber(perfect_number(*p, tester)),
        Query::Goldbach { n } => QueryOutcome::Goldbach(goldbach_pair(*n, tester)?),
    };

    Ok(outcome)
}
