//! Application errors and exit codes.

use fibmat_core::constants::exit_codes;
use fibmat_core::FibError;

/// Configuration errors detected before the computation starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The memory estimate is above `--memory-limit`.
    #[error("estimated memory ({estimate} bytes) exceeds limit ({limit} bytes); try --last-digits or --max-limbs")]
    MemoryLimitExceeded { estimate: usize, limit: usize },
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return match fib {
            FibError::InvalidIndex(_) => exit_codes::ERROR_INVALID_INDEX,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    exit_codes::ERROR_GENERIC
}
