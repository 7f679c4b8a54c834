// src/config/puzzle_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::core::search_range::SearchRange;
use crate::integer_math::primality::PrimalityTester;

/// Search ranges and limits for every query, plus oracle tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Primality oracle tuning
    pub primality: PrimalityTester,

    /// Values of n scanned for a prime pattern number
    pub pattern: SearchRange,

    /// Repunit lengths scanned for prime indices
    pub repunit: SearchRange,

    pub mersenne: MersenneConfig,

    pub interval: IntervalConfig,

    pub palindrome: PalindromeConfig,

    pub perfect: PerfectConfig,

    pub goldbach: GoldbachConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MersenneConfig {
    pub start: u64,
    pub end: u64,

    /// Test 2^p - 1 with Lucas-Lehmer instead of the general oracle
    pub use_lucas_lehmer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Default p1 and p2 when the caller supplies none
    pub p1: u64,
    pub p2: u64,

    /// Maximum number of primes reported
    pub cap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalindromeConfig {
    /// Minimum digit count of the palindromic prime
    pub min_digits: u32,

    /// Prefixes tried before reporting not found
    pub max_candidates: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfectConfig {
    pub p: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldbachConfig {
    pub n: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            log_level: "info".to_string(),
            primality: PrimalityTester::default(),
            pattern: SearchRange { start: 1000, end: 3000 },
            repunit: SearchRange { start: 2, end: 50 },
            mersenne: MersenneConfig::default(),
            interval: IntervalConfig::default(),
            palindrome: PalindromeConfig::default(),
            perfect: PerfectConfig { p: 5 },
            goldbach: GoldbachConfig { n: 20 },
        }
    }
}

impl Default for MersenneConfig {
    fn default() -> Self {
        MersenneConfig {
            start: 2,
            end: 31,
            use_lucas_lehmer: false,
        }
    }
}

impl Default for IntervalConfig {
    fn default() -> Self {
        IntervalConfig {
            p1: 10,
            p2: 12,
            cap: 10,
        }
    }
}

impl Default for PalindromeConfig {
    fn default() -> Self {
        PalindromeConfig {
            min_digits: 10,
            max_candidates: 1_000_000,
        }
    }
}

impl MersenneConfig {
    pub fn range(&self) -> SearchRange {
        SearchRange { start: self.start, end: self.end }
    }
}

impl PuzzleConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("puzzles.toml").exists() {
            builder = builder.add_source(File::with_name("puzzles.toml"));
        } else if Path::new("puzzles.yaml").exists() {
            builder = builder.add_source(File::with_name("puzzles.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        } else {
            return Err(ConfigError::NotFound(path.as_ref().display().to_string()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = PuzzleConfig::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("primality.trial_division_max_bits", defaults.primality.trial_division_max_bits)?
            .set_default("primality.extra_rounds", defaults.primality.extra_rounds as u64)?
            .set_default("primality.seed", defaults.primality.seed)?
            .set_default("pattern.start", defaults.pattern.start)?
            .set_default("pattern.end", defaults.pattern.end)?
            .set_default("repunit.start", defaults.repunit.start)?
            .set_default("repunit.end", defaults.repunit.end)?
            .set_default("mersenne.start", defaults.mersenne.start)?
            .set_default("mersenne.end", defaults.mersenne.end)?
            .set_default("mersenne.use_lucas_lehmer", defaults.mersenne.use_lucas_lehmer)?
            .set_default("interval.p1", defaults.interval.p1)?
            .set_default("interval.p2", defaults.interval.p2)?
            .set_default("interval.cap", defaults.interval.cap as u64)?
            .set_default("palindrome.min_digits", defaults.palindrome.min_digits as u64)?
            .set_default("palindrome.max_candidates", defaults.palindrome.max_candidates)?
            .set_default("perfect.p", defaults.perfect.p)?
            .set_default("goldbach.n", defaults.goldbach.n)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: PUZZLES_, nesting: __)
        let builder = builder.add_source(
            Environment::with_prefix("PUZZLES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
