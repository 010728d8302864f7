//! Calculation error and result types.

use crate::biguint::BigUint;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is below 1.
    #[error("invalid Fibonacci index {0}: index must be >= 1")]
    InvalidIndex(i64),
}

/// A computed Fibonacci value, possibly reduced by a limb cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibResult {
    /// F(n), or F(n) modulo `10^(9 * max_limbs)` when `truncated`.
    pub value: BigUint,
    /// Whether high-order limbs were dropped.
    pub truncated: bool,
}

impl FibResult {
    /// A full-precision result.
    #[must_use]
    pub fn exact(value: BigUint) -> Self {
        Self {
            value,
            truncated: false,
        }
    }

    /// The lowest `k` decimal digits.
    ///
    /// A truncated value is left-padded with zeros to `k` digits, since the
    /// true number is longer than what was kept. An exact value shorter than
    /// `k` digits is returned as is.
    #[must_use]
    pub fn last_digits(&self, k: usize) -> String {
        let digits = self.value.to_decimal_string();
        if digits.len() >= k {
            return digits[digits.len() - k..].to_string();
        }
        if self.truncated {
            format!("{digits:0>k$}")
        } else {
            digits
        }
    }
}
