//! Matrix multiplication and square-and-multiply exponentiation.

use tracing::trace;

use crate::matrix_types::Matrix;
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

/// Algorithm name used in progress updates.
pub const ALGORITHM: &str = "MatrixExponentiation";

/// Outcome of [`matrix_pow_with`].
#[derive(Debug, Clone)]
pub struct PowResult {
    /// `base^exponent`, reduced by the truncation policy if one is active.
    pub matrix: Matrix,
    /// Whether the truncation policy dropped any limb along the way.
    pub truncated: bool,
}

/// Standard 2x2 product: `res[i][j] = x[i][0]*y[0][j] + x[i][1]*y[1][j]`.
#[must_use]
pub fn matrix_multiply(x: &Matrix, y: &Matrix) -> Matrix {
    Matrix {
        a: &x.a * &y.a + &x.b * &y.c,
        b: &x.a * &y.b + &x.b * &y.d,
        c: &x.c * &y.a + &x.d * &y.c,
        d: &x.c * &y.b + &x.d * &y.d,
    }
}

/// Square a 2x2 matrix into a fresh value.
#[must_use]
pub fn matrix_square(m: &Matrix) -> Matrix {
    matrix_multiply(m, m)
}

/// Raise `base` to `exponent` at full precision. `exponent == 0` gives the identity.
#[must_use]
pub fn matrix_pow(base: &Matrix, exponent: u64) -> Matrix {
    matrix_pow_with(base, exponent, &Options::default(), &NoOpObserver::new()).matrix
}

/// Binary exponentiation, least-significant exponent bit first.
///
/// With a limb cap in `opts`, the accumulator and the running base are
/// truncated after every multiplication. One progress update is emitted per
/// exponent bit.
pub fn matrix_pow_with(
    base: &Matrix,
    exponent: u64,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> PowResult {
    let total_steps = u64::from(u64::BITS - exponent.leading_zeros());
    let cap = opts.limb_cap();
    let mut truncated = false;
    let mut truncate = |m: &mut Matrix| {
        if let Some(cap) = cap {
            truncated |= m.truncate_limbs(cap);
        }
    };

    let mut result = Matrix::identity();
    let mut base = base.clone();
    let mut remaining = exponent;
    let mut step = 0u64;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = matrix_multiply(&result, &base);
            truncate(&mut result);
        }
        remaining >>= 1;
        // the square after the top bit would never be used
        if remaining > 0 {
            base = matrix_square(&base);
            truncate(&mut base);
        }
        step += 1;

        let limbs = result.max_limbs().max(base.max_limbs());
        trace!(step, total_steps, limbs, "exponent bit processed");
        observer.on_progress(&ProgressUpdate::new(ALGORITHM, step, total_steps, limbs));
    }

    PowResult {
        matrix: result,
        truncated,
    }
}
