//! CLI output formatting and JSON reports.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use fibmat_core::{BigUint, FibResult};

/// Digits shown on each side of an abbreviated number.
const PREVIEW_DIGITS: usize = 50;

/// Format a decimal string for display, abbreviating past 100 digits unless verbose.
#[must_use]
pub fn format_digits(s: &str, verbose: bool) -> String {
    if !verbose && s.len() > 2 * PREVIEW_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &s[..PREVIEW_DIGITS],
            &s[s.len() - PREVIEW_DIGITS..],
            format_number(s.len() as u64)
        )
    } else {
        s.to_string()
    }
}

/// Format a `BigUint` for display, potentially abbreviating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    format_digits(&value.to_decimal_string(), verbose)
}

/// The digits to print for a result: the low `last_digits` digits, or the
/// whole value when `last_digits` is 0.
#[must_use]
pub fn result_digits(result: &FibResult, last_digits: usize) -> String {
    if last_digits > 0 {
        result.last_digits(last_digits)
    } else {
        result.value.to_decimal_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a signed index with thousand separators.
#[must_use]
pub fn format_index(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{}", format_number(n.unsigned_abs()))
}

/// Write digits to a file.
pub fn write_to_file(path: &Path, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{digits}")?;
    Ok(())
}

/// Machine-readable summary of one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub algorithm: &'static str,
    pub n: i64,
    /// Decimal digits printed (all of F(n), or its requested suffix).
    pub value: String,
    /// Number of digits in the retained value.
    pub digits: usize,
    /// Whether high-order limbs were dropped by the limb cap.
    pub truncated: bool,
    /// Low-order digits guaranteed exact, absent when unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_digits: Option<usize>,
    pub duration_ms: f64,
}

impl ResultReport {
    /// Build a report for `result`.
    #[must_use]
    pub fn new(
        algorithm: &'static str,
        n: i64,
        result: &FibResult,
        last_digits: usize,
        exact_digits: Option<usize>,
        duration: Duration,
    ) -> Self {
        Self {
            algorithm,
            n,
            value: result_digits(result, last_digits),
            digits: result.value.digit_count(),
            truncated: result.truncated,
            exact_digits,
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
