//! 2x2 matrix over [`BigUint`].

use crate::biguint::BigUint;

/// 2x2 matrix of `BigUint` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl Matrix {
    /// Build a matrix from native row-major entries.
    #[must_use]
    pub fn from_u64(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self {
            a: BigUint::from(a),
            b: BigUint::from(b),
            c: BigUint::from(c),
            d: BigUint::from(d),
        }
    }

    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_u64(1, 0, 0, 1)
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self::from_u64(1, 1, 1, 0)
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Largest limb count among the four cells.
    #[must_use]
    pub fn max_limbs(&self) -> usize {
        [&self.a, &self.b, &self.c, &self.d]
            .into_iter()
            .map(BigUint::len)
            .max()
            .unwrap_or(0)
    }

    /// Reduce every cell to its lowest `max_limbs` limbs.
    /// Returns whether any cell lost limbs.
    pub fn truncate_limbs(&mut self, max_limbs: usize) -> bool {
        let mut truncated = false;
        for cell in [&mut self.a, &mut self.b, &mut self.c, &mut self.d] {
            truncated |= cell.truncate_limbs(max_limbs);
        }
        truncated
    }
}
