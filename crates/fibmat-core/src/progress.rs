//! Progress tracking types and utilities.

/// Progress update sent from the exponentiation loop to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Name of the algorithm producing this update.
    pub algorithm: &'static str,
    /// Estimated fraction of work done, in [0.0, 1.0].
    pub progress: f64,
    /// Exponent bits processed so far.
    pub current_step: u64,
    /// Total exponent bits.
    pub total_steps: u64,
    /// Largest limb count among the running matrices.
    pub limbs: usize,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update for step `current` of `total`.
    #[must_use]
    pub fn new(algorithm: &'static str, current: u64, total: u64, limbs: usize) -> Self {
        Self {
            algorithm,
            progress: work_fraction(current, total),
            current_step: current,
            total_steps: total,
            limbs,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            progress: 1.0,
            current_step: 0,
            total_steps: 0,
            limbs: 0,
            done: true,
        }
    }
}

/// Fraction of total work done after `step` of `total` exponent bits.
///
/// Operand length roughly doubles per squaring and schoolbook multiply is
/// quadratic, so step `i` costs about `4^i`: the fraction is
/// `(4^step - 1) / (4^total - 1)`.
#[must_use]
pub fn work_fraction(step: u64, total: u64) -> f64 {
    if total == 0 || step >= total {
        return 1.0;
    }
    let pow4 = |e: u64| 4f64.powi(i32::try_from(e).unwrap_or(i32::MAX));
    (pow4(step) - 1.0) / (pow4(total) - 1.0)
}
