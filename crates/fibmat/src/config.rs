//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibmat_core::memory_budget::parse_memory_limit;
use fibmat_core::Options;

/// fibmat: compute huge Fibonacci numbers by 2x2 matrix exponentiation.
#[derive(Parser, Debug)]
#[command(name = "fibmat", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute, with F(1) = F(2) = 1.
    #[arg(
        short,
        long,
        default_value_t = 10_000,
        env = "FIBMAT_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Print only the lowest K digits; keeps at least ceil(K/9) limbs.
    #[arg(long, default_value_t = 0, value_name = "K")]
    pub last_digits: usize,

    /// Keep at most L limbs (9 digits each) after every multiplication (0 = unlimited).
    #[arg(long, default_value_t = 0, value_name = "L")]
    pub max_limbs: usize,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Never abbreviate long numbers.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show limb and digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Also write the digits to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Show a progress bar on stderr.
    #[arg(long)]
    pub progress: bool,

    /// Memory limit (e.g., "8G", "512M"); refuse to start above it.
    #[arg(long, default_value = "", value_parser = parse_memory_limit, value_name = "SIZE")]
    pub memory_limit: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options from the truncation flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::with_max_limbs(self.max_limbs).with_last_digits(self.last_digits)
    }
}
