//! Fibonacci via exponentiation of the Q matrix.
//!
//! `Q^k = [[F(k+1), F(k)], [F(k), F(k-1)]]`, so for n > 2 the engine
//! computes `M = Q^(n-2)` and returns `M[0][0] + M[0][1] = F(n-1) + F(n-2)`.

use tracing::debug;

use crate::biguint::BigUint;
use crate::calculator::{FibError, FibResult};
use crate::matrix_ops::{matrix_pow_with, PowResult, ALGORITHM};
use crate::matrix_types::Matrix;
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

/// Matrix exponentiation Fibonacci calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciEngine;

impl FibonacciEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(n) at full precision.
    pub fn nth_fibonacci(&self, n: i64) -> Result<BigUint, FibError> {
        self.calculate(n, &Options::default(), &NoOpObserver::new())
            .map(|result| result.value)
    }

    /// Compute F(n) under the truncation policy in `opts`, reporting progress.
    pub fn calculate(
        &self,
        n: i64,
        opts: &Options,
        observer: &dyn ProgressObserver,
    ) -> Result<FibResult, FibError> {
        if n < 1 {
            return Err(FibError::InvalidIndex(n));
        }
        if n <= 2 {
            observer.on_progress(&ProgressUpdate::done(ALGORITHM));
            return Ok(FibResult::exact(BigUint::one()));
        }

        let exponent = n.unsigned_abs() - 2;
        debug!(n, exponent, max_limbs = opts.max_limbs, "computing Q^(n-2)");

        let PowResult {
            matrix,
            mut truncated,
        } = matrix_pow_with(&Matrix::fibonacci_q(), exponent, opts, observer);

        let mut value = matrix.a + matrix.b;
        if let Some(cap) = opts.limb_cap() {
            truncated |= value.truncate_limbs(cap);
        }

        debug!(n, limbs = value.len(), truncated, "calculation finished");
        observer.on_progress(&ProgressUpdate::done(ALGORITHM));
        Ok(FibResult { value, truncated })
    }
}
