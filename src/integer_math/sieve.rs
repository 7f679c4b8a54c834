// src/integer_math/sieve.rs

use log::debug;
use std::ops::RangeInclusive;

/// Sieve of Eratosthenes over `0..=limit`.
///
/// Small and exact. Serves as the small-prime table for the Miller-Rabin
/// pre-filter and as the reference oracle the tests compare against.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    limit: u64,
    composite: Vec<bool>,
}

impl PrimeSieve {
    pub fn new(limit: u64) -> Self {
        debug!("Building prime sieve up to {}", limit);
        let size = limit as usize + 1;
        let mut composite = vec![false; size];
        composite[0] = true;
        if size > 1 {
            composite[1] = true;
        }

        let mut p = 2usize;
        while p * p < size {
            if !composite[p] {
                let mut multiple = p * p;
                while multiple < size {
                    composite[multiple] = true;
                    multiple += p;
                }
            }
            p += 1;
        }

        PrimeSieve { limit, composite }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns false for values beyond the sieve limit.
    pub fn is_prime(&self, n: u64) -> bool {
        n <= self.limit && !self.composite[n as usize]
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter(|(_, is_composite)| !**is_composite)
            .map(|(i, _)| i as u64)
    }

    pub fn primes_in(&self, range: RangeInclusive<u64>) -> Vec<u64> {
        let end = (*range.end()).min(self.limit);
        (*range.start()..=end).filter(|&n| self.is_prime(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let sieve = PrimeSieve::new(30);
        let primes: Vec<u64> = sieve.primes().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_zero_and_one_are_not_prime() {
        let sieve = PrimeSieve::new(1);
        assert!(!sieve.is_prime(0));
        assert!(!sieve.is_prime(1));
        assert_eq!(sieve.primes().count(), 0);
    }

    #[test]
    fn test_beyond_limit() {
        let sieve = PrimeSieve::new(10);
        assert!(!sieve.is_prime(11));
    }

    #[test]
    fn test_primes_in_range() {
        let sieve = PrimeSieve::new(200);
        assert_eq!(sieve.primes_in(100..=130), vec![101, 103, 107, 109, 113, 127]);
    }

    #[test]
    fn test_prime_count_below_ten_thousand() {
        // pi(10^4) = 1229
        let sieve = PrimeSieve::new(10_000);
        assert_eq!(sieve.primes().count(), 1229);
    }
}
