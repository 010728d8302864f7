//! # fibmat-core
//!
//! Core library for fibmat: a radix-10^9 big unsigned integer, 2x2 matrix
//! exponentiation over it, and the Fibonacci engine built on top.

pub mod biguint;
pub mod calculator;
pub mod constants;
pub mod engine;
pub mod matrix_ops;
pub mod matrix_types;
pub mod memory_budget;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;

// Re-exports
pub use biguint::{BigUint, ParseBigUintError};
pub use calculator::{FibError, FibResult};
pub use constants::{exit_codes, LIMB_WIDTH, RADIX};
pub use engine::FibonacciEngine;
pub use matrix_ops::{
    matrix_multiply, matrix_pow, matrix_pow_with, matrix_square, PowResult, ALGORITHM,
};
pub use matrix_types::Matrix;
pub use observer::{ProgressObserver, ProgressSubject};
pub use options::Options;
pub use progress::ProgressUpdate;

/// Compute F(n) at full precision, with F(1) = F(2) = 1.
///
/// # Example
/// ```
/// assert_eq!(fibmat_core::nth_fibonacci(10).unwrap().to_string(), "55");
/// assert!(fibmat_core::nth_fibonacci(0).is_err());
/// ```
pub fn nth_fibonacci(n: i64) -> Result<BigUint, FibError> {
    FibonacciEngine::new().nth_fibonacci(n)
}

/// Full decimal rendering of `value`.
#[must_use]
pub fn to_decimal_string(value: &BigUint) -> String {
    value.to_decimal_string()
}

/// The least-significant limb of `value` modulo `10^k` (`k` clamped to 9).
#[must_use]
pub fn low_order_digits(value: &BigUint, k: usize) -> u64 {
    value.low_order_digits(k)
}
