//! Constants for limb arithmetic, progress reporting and exit codes.

/// Radix of a limb. Two limbs multiplied plus a normalized cell and a carry
/// stay well below `u64::MAX`.
pub const RADIX: u64 = 1_000_000_000;

/// Decimal digits per limb (`log10(RADIX)`).
pub const LIMB_WIDTH: usize = 9;

/// Extra cells in the multiplication scratch buffer beyond `len(a) + len(b)`.
pub const MULTIPLY_SLACK: usize = 3;

/// Powers of ten up to and including `RADIX`.
pub const POWERS_OF_TEN: [u64; LIMB_WIDTH + 1] = {
    let mut table = [1u64; LIMB_WIDTH + 1];
    let mut i = 1;
    while i <= LIMB_WIDTH {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// `log10` of the golden ratio; F(n) has about `n * LOG10_PHI` digits.
pub const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Process exit codes used by the `fibmat` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, formatting).
    pub const ERROR_GENERIC: i32 = 1;
    /// The requested Fibonacci index is below 1.
    pub const ERROR_INVALID_INDEX: i32 = 2;
    /// Invalid configuration or the memory estimate exceeds the limit.
    pub const ERROR_CONFIG: i32 = 4;
}
