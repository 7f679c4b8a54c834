// src/main.rs

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, error};
use num::BigUint;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use prime_puzzles::config::PuzzleConfig;
use prime_puzzles::core::search_range::SearchRange;
use prime_puzzles::error::{PuzzleError, PuzzleResult};
use prime_puzzles::integer_math::pattern::next_pattern_number;
use prime_puzzles::integer_math::repunit::generate_repunit;
use prime_puzzles::queries::{run_query, MersenneMethod, Query};

#[derive(Parser)]
#[command(name = "prime-puzzles")]
#[command(about = "Primality, pattern-number and prime-search puzzles")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to puzzles.toml / puzzles.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First n whose pattern number 12...n...21 is prime
    Pattern(RangeArgs),

    /// Repunits R(N) for every prime N in range
    Repunit(RangeArgs),

    /// Prime exponents p with 2^p - 1 prime
    Mersenne {
        #[command(flatten)]
        range: RangeArgs,

        /// Use the Lucas-Lehmer test for 2^p - 1
        #[arg(long)]
        lucas_lehmer: bool,
    },

    /// Primes strictly between p1^2 and p2^2
    Interval {
        p1: Option<u64>,
        p2: Option<u64>,

        /// Maximum number of primes reported
        #[arg(long)]
        cap: Option<usize>,
    },

    /// Smallest palindromic prime with at least the given digit count
    Palindrome {
        #[arg(long)]
        min_digits: Option<u32>,

        #[arg(long)]
        max_candidates: Option<u64>,
    },

    /// Perfect number 2^(p-1)(2^p - 1) when 2^p - 1 is prime
    Perfect { p: Option<u64> },

    /// Smallest Goldbach pair for an even n > 2
    Goldbach { n: Option<u64> },

    /// Run every query with configured parameters
    All,

    /// Primality of a single (arbitrarily large) integer
    IsPrime { n: BigUint },

    /// Print the pattern number for n
    PatternNumber { n: u64 },

    /// Print the repunit with n ones
    RepunitNumber { n: u32 },
}

#[derive(Args)]
struct RangeArgs {
    #[arg(long)]
    start: Option<u64>,

    #[arg(long)]
    end: Option<u64>,
}

impl RangeArgs {
    fn resolve(&self, default: SearchRange) -> PuzzleResult<SearchRange> {
        SearchRange::new(self.start.unwrap_or(default.start), self.end.unwrap_or(default.end))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PuzzleConfig::load_from_file(path),
        None => PuzzleConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("PUZZLES_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("PUZZLES_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands, config: &PuzzleConfig) -> PuzzleResult<()> {
    let tester = &config.primality;

    let queries = match command {
        Commands::Pattern(range) => vec![Query::PatternPrime { range: range.resolve(config.pattern)? }],
        Commands::Repunit(range) => vec![Query::RepunitIndex { range: range.resolve(config.repunit)? }],
        Commands::Mersenne { range, lucas_lehmer } => {
            let method = if *lucas_lehmer || config.mersenne.use_lucas_lehmer {
                MersenneMethod::LucasLehmer
            } else {
                MersenneMethod::Oracle
            };
            vec![Query::Mersenne { range: range.resolve(config.mersenne.range())?, method }]
        }
        Commands::Interval { p1, p2, cap } => vec![Query::IntervalPrimes {
            p1: p1.unwrap_or(config.interval.p1),
            p2: p2.unwrap_or(config.interval.p2),
            cap: cap.unwrap_or(config.interval.cap),
        }],
        Commands::Palindrome { min_digits, max_candidates } => vec![Query::PalindromicPrime {
            min_digits: min_digits.unwrap_or(config.palindrome.min_digits),
            max_candidates: max_candidates.unwrap_or(config.palindrome.max_candidates),
        }],
        Commands::Perfect { p } => vec![Query::PerfectNumber { p: p.unwrap_or(config.perfect.p) }],
        Commands::Goldbach { n } => vec![Query::Goldbach { n: n.unwrap_or(config.goldbach.n) }],
        Commands::All => Query::all_from_config(config),
        Commands::IsPrime { n } => {
            let record = json!({
                "n": n.to_str_radix(10),
                "is_prime": tester.is_prime(n),
                "method": tester.method_for(n).name(),
            });
            return print_json(&record);
        }
        Commands::PatternNumber { n } => {
            return print_json(&json!({ "n": n, "pattern_number": next_pattern_number(*n).to_str_radix(10) }));
        }
        Commands::RepunitNumber { n } => {
            return print_json(&json!({ "N": n, "repunit": generate_repunit(*n).to_str_radix(10) }));
        }
    };

    let mut first_error: Option<PuzzleError> = None;
    for query in &queries {
        match run_query(query, tester) {
            Ok(outcome) => print_json(&outcome)?,
            Err(e) => {
                // Keep going so one bad parameter doesn't hide the other results
                error!("{} failed: {}", query.name(), e);
                print_json(&json!({ "error": e.to_string() }))?;
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> PuzzleResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
