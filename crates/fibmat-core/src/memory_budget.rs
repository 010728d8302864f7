//! Memory budget estimation and validation.

use crate::constants::{LIMB_WIDTH, LOG10_PHI, MULTIPLY_SLACK};

/// Bytes per limb.
const LIMB_BYTES: usize = std::mem::size_of::<u64>();

/// Cells alive at the peak of one pow step: accumulator and base (4 each)
/// plus the product being built (4).
const CELLS_IN_FLIGHT: usize = 12;

/// Memory estimate for a Fibonacci computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Approximate number of decimal digits of F(n).
    pub digits: u64,
    /// Limbs per matrix cell at the end of the computation (after any cap).
    pub limbs: usize,
    /// Estimated memory for the result itself (in bytes).
    pub result_bytes: usize,
    /// Estimated memory for temporaries (in bytes).
    pub temp_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for computing F(n) with the given limb cap
    /// (0 = unlimited).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn estimate(n: u64, max_limbs: usize) -> Self {
        // F(n) ~ phi^n / sqrt(5)
        let digits = (n as f64 * LOG10_PHI).ceil().max(1.0) as u64;
        let full_limbs = (digits as usize).div_ceil(LIMB_WIDTH);
        let limbs = if max_limbs > 0 {
            full_limbs.min(max_limbs)
        } else {
            full_limbs
        };

        let result_bytes = limbs.saturating_mul(LIMB_BYTES);
        // every cell of the in-flight matrices plus one multiply scratch buffer
        let scratch_bytes = limbs
            .saturating_mul(2)
            .saturating_add(MULTIPLY_SLACK)
            .saturating_mul(LIMB_BYTES);
        let temp_bytes = result_bytes
            .saturating_mul(CELLS_IN_FLIGHT)
            .saturating_add(scratch_bytes);

        Self {
            digits,
            limbs,
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit
    /// (0 = unlimited).
    #[must_use]
    pub fn fits_in(&self, limit: usize) -> bool {
        limit == 0 || self.total_bytes <= limit
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means unlimited and parses to 0.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s:?} is too large"))
}
