//! Concrete observer implementations.

use std::cell::Cell;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress updates with temporal throttling.
pub struct LoggingObserver {
    last_reported: Cell<f64>,
    min_interval: Duration,
    last_time: Cell<Option<Instant>>,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            last_reported: Cell::new(0.0),
            min_interval: Duration::from_millis(min_interval_ms),
            last_time: Cell::new(None),
        }
    }

    fn throttled(&self, update: &ProgressUpdate) -> bool {
        if update.done {
            return false;
        }
        let too_soon = self
            .last_time
            .get()
            .is_some_and(|t| t.elapsed() < self.min_interval);
        too_soon || (update.progress - self.last_reported.get()) < PROGRESS_REPORT_THRESHOLD
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if self.throttled(update) {
            return;
        }
        if update.done {
            info!(algorithm = %update.algorithm, "Calculation complete");
        } else {
            debug!(
                algorithm = %update.algorithm,
                progress = format!("{:.1}%", update.progress * 100.0),
                step = update.current_step,
                total = update.total_steps,
                limbs = update.limbs,
                "Progress update"
            );
        }
        self.last_reported.set(update.progress);
        self.last_time.set(Some(Instant::now()));
    }
}

/// Null object pattern: discards every progress update.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
