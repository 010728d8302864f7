//! Radix-10^9 arbitrary-precision unsigned integer.
//!
//! Limbs are stored least-significant first. Zero is the empty limb vector
//! and no value carries a most-significant zero limb, so the derived
//! equality and hashing are numeric. Because the radix is a power of ten,
//! decimal rendering only has to zero-pad each limb.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::constants::{LIMB_WIDTH, MULTIPLY_SLACK, POWERS_OF_TEN, RADIX};

/// Error returned when parsing a decimal string into a [`BigUint`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigUintError {
    /// The input string was empty.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// The input contained something other than ASCII digits.
    #[error("invalid digit {0:?} in integer")]
    InvalidDigit(char),
}

/// Arbitrary-precision unsigned integer in radix `10^9`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<u64>,
}

impl BigUint {
    /// The additive identity (empty limb vector).
    pub const ZERO: Self = Self { limbs: Vec::new() };

    /// Decompose a native integer into limbs.
    #[must_use]
    pub fn from_u64(mut value: u64) -> Self {
        let mut limbs = Vec::with_capacity(3);
        while value > 0 {
            limbs.push(value % RADIX);
            value /= RADIX;
        }
        Self { limbs }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Number of limbs (0 for zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of decimal digits, without rendering the value. Zero has one digit.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(&top) => {
                let top_digits = POWERS_OF_TEN.iter().take_while(|&&p| p <= top).count();
                (self.limbs.len() - 1) * LIMB_WIDTH + top_digits
            }
        }
    }

    /// Full decimal rendering: no sign, no leading zeros, `"0"` for zero.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    /// Value of the least-significant limb modulo `10^k`.
    ///
    /// `k` is clamped to the limb width, so at most 9 digits are returned.
    #[must_use]
    pub fn low_order_digits(&self, k: usize) -> u64 {
        let modulus = POWERS_OF_TEN[k.min(LIMB_WIDTH)];
        self.limbs.first().map_or(0, |&low| low % modulus)
    }

    /// Keep only the lowest `max_limbs` limbs, i.e. reduce modulo
    /// `RADIX^max_limbs`. Returns whether any limb was dropped.
    pub fn truncate_limbs(&mut self, max_limbs: usize) -> bool {
        if self.limbs.len() <= max_limbs {
            return false;
        }
        self.limbs.truncate(max_limbs);
        self.trim();
        true
    }

    fn from_raw(limbs: Vec<u64>) -> Self {
        let mut value = Self { limbs };
        value.trim();
        debug_assert!(value.limbs.iter().all(|&limb| limb < RADIX));
        value
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

/// Lockstep limb addition with a running carry.
fn add_limbs(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut lhs = lhs.iter();
    let mut rhs = rhs.iter();
    let mut carry = 0u64;
    loop {
        let (x, y) = (lhs.next(), rhs.next());
        if x.is_none() && y.is_none() && carry == 0 {
            break;
        }
        let sum = carry + x.copied().unwrap_or(0) + y.copied().unwrap_or(0);
        out.push(sum % RADIX);
        carry = sum / RADIX;
    }
    out
}

/// Schoolbook convolution, normalizing carries upward after every product.
///
/// Every cell is below `RADIX` between products, so a cell never exceeds
/// `(RADIX - 1)^2 + RADIX` and a carried cell stays below `2 * RADIX`.
fn mul_limbs(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    let mut cells = vec![0u64; lhs.len() + rhs.len() + MULTIPLY_SLACK];
    let top = cells.len() - 1;
    for (i, &x) in lhs.iter().enumerate() {
        for (j, &y) in rhs.iter().enumerate() {
            let mut pos = i + j;
            cells[pos] += x * y;
            while pos < top && cells[pos] >= RADIX {
                cells[pos + 1] += cells[pos] / RADIX;
                cells[pos] %= RADIX;
                pos += 1;
            }
        }
    }
    cells
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        BigUint {
            limbs: add_limbs(&self.limbs, &other.limbs),
        }
    }
}

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        if other.is_zero() {
            return self;
        }
        &self + other
    }
}

impl Add<BigUint> for BigUint {
    type Output = BigUint;

    fn add(self, other: BigUint) -> BigUint {
        if self.is_zero() {
            return other;
        }
        self + &other
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::ZERO;
        }
        BigUint::from_raw(mul_limbs(&self.limbs, &other.limbs))
    }
}

impl Mul<BigUint> for BigUint {
    type Output = BigUint;

    fn mul(self, other: BigUint) -> BigUint {
        &self * &other
    }
}

impl Mul<&BigUint> for BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        &self * other
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((top, rest)) = self.limbs.split_last() else {
            return f.write_str("0");
        };
        write!(f, "{top}")?;
        for limb in rest.iter().rev() {
            write!(f, "{limb:0width$}", width = LIMB_WIDTH)?;
        }
        Ok(())
    }
}

impl FromStr for BigUint {
    type Err = ParseBigUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigUintError::Empty);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigUintError::InvalidDigit(c));
        }
        let limbs = s
            .as_bytes()
            .rchunks(LIMB_WIDTH)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |acc, &digit| acc * 10 + u64::from(digit - b'0'))
            })
            .collect();
        Ok(Self::from_raw(limbs))
    }
}
