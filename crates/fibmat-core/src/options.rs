//! Calculation options: the opt-in limb truncation policy.

use crate::constants::LIMB_WIDTH;

/// Options for a Fibonacci calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Limbs to retain after every matrix multiplication (0 = unlimited).
    ///
    /// A non-zero cap reduces every intermediate modulo `10^(9 * max_limbs)`,
    /// so the lowest `9 * max_limbs` digits of the result stay exact.
    pub max_limbs: usize,
}

impl Options {
    /// Options that keep at most `max_limbs` limbs (0 = unlimited).
    #[must_use]
    pub fn with_max_limbs(max_limbs: usize) -> Self {
        Self { max_limbs }
    }

    /// Make sure the lowest `digits` decimal digits come out exact.
    ///
    /// Sets the cap when none is configured and raises an explicit cap that
    /// is too small; `digits == 0` leaves the options unchanged.
    #[must_use]
    pub fn with_last_digits(mut self, digits: usize) -> Self {
        let required = limbs_for_digits(digits);
        if required > self.max_limbs {
            self.max_limbs = required;
        }
        self
    }

    /// The active limb cap, if any.
    #[must_use]
    pub fn limb_cap(&self) -> Option<usize> {
        (self.max_limbs > 0).then_some(self.max_limbs)
    }

    /// Number of low-order decimal digits guaranteed exact, `None` when unlimited.
    #[must_use]
    pub fn exact_digits(&self) -> Option<usize> {
        self.limb_cap().map(|cap| cap * LIMB_WIDTH)
    }
}

/// Limbs needed to hold `digits` decimal digits.
#[must_use]
pub fn limbs_for_digits(digits: usize) -> usize {
    digits.div_ceil(LIMB_WIDTH)
}
