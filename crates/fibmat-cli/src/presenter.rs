//! CLI result presenter and progress bar.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use fibmat_core::{FibResult, ProgressObserver, ProgressUpdate};

use crate::output::{format_digits, format_duration, format_index, format_number, result_digits};
use crate::ui;

/// Resolution of the progress bar.
const PROGRESS_TICKS: u64 = 1000;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Render the result block; in quiet mode only the digits.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        n: i64,
        result: &FibResult,
        last_digits: usize,
        duration: Duration,
    ) -> String {
        let digits = result_digits(result, last_digits);
        if self.quiet {
            return digits;
        }

        let mut lines = vec![
            ui::field("Algorithm", algorithm),
            ui::field("N", &format_index(n)),
            ui::field("Duration", &format_duration(duration)),
        ];

        if self.details {
            let kept = result.value.digit_count() as u64;
            lines.push(ui::field("Limbs", &format_number(result.value.len() as u64)));
            if result.truncated {
                lines.push(ui::field(
                    "Digits kept",
                    &format!(
                        "{} (low-order, of a longer number)",
                        format_number(kept)
                    ),
                ));
            } else {
                lines.push(ui::field("Result digits", &format_number(kept)));
            }
        }

        let shown = format_digits(&digits, self.verbose);
        if last_digits > 0 {
            lines.push(format!(
                "Last {last_digits} digits of F({}) = {shown}",
                format_index(n)
            ));
        } else if result.truncated {
            lines.push(format!("F({}) low-order digits = {shown}", format_index(n)));
        } else {
            lines.push(format!("F({}) = {shown}", format_index(n)));
        }
        lines.join("\n")
    }

    /// Print a calculation result.
    pub fn present_result(
        &self,
        algorithm: &str,
        n: i64,
        result: &FibResult,
        last_digits: usize,
        duration: Duration,
    ) {
        println!(
            "{}",
            self.render_result(algorithm, n, result, last_digits, duration)
        );
    }
}

/// Progress bar driven by the engine's progress updates.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// A progress bar drawn on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(PROGRESS_TICKS))
    }

    /// A reporter that tracks progress without drawing.
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_length(PROGRESS_TICKS);
        let style = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {percent:>3}% {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar }
    }

    /// Current position in ticks (out of 1000).
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar has been finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for CLIProgressReporter {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            self.bar.finish_and_clear();
            return;
        }
        let ticks = (update.progress.clamp(0.0, 1.0) * PROGRESS_TICKS as f64).round() as u64;
        self.bar.set_position(ticks);
        self.bar.set_message(format!(
            "bit {}/{} ({} limbs)",
            update.current_step,
            update.total_steps,
            format_number(update.limbs as u64)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibmat_core::BigUint;

    fn exact(v: u64) -> FibResult {
        FibResult::exact(BigUint::from(v))
    }

    #[test]
    fn presenter_quiet_prints_digits_only() {
        let presenter = CLIResultPresenter::new(false, true, false);
        let out = presenter.render_result("Matrix", 10, &exact(55), 0, Duration::from_millis(5));
        assert_eq!(out, "55");
    }

    #[test]
    fn presenter_quiet_last_digits() {
        let presenter = CLIResultPresenter::new(false, true, false);
        let out = presenter.render_result("Matrix", 20, &exact(6765), 2, Duration::ZERO);
        assert_eq!(out, "65");
    }

    #[test]
    fn presenter_normal_mode() {
        let presenter = CLIResultPresenter::new(false, false, false);
        let out = presenter.render_result(
            "MatrixExponentiation",
            30,
            &exact(832_040),
            0,
            Duration::from_millis(5),
        );
        assert!(out.contains("MatrixExponentiation"));
        assert!(out.contains("F(30) = 832040"));
        assert!(!out.contains("Limbs"));
    }

    #[test]
    fn presenter_details_mode() {
        let presenter = CLIResultPresenter::new(false, false, true);
        let out = presenter.render_result("Matrix", 30, &exact(832_040), 0, Duration::ZERO);
        assert!(out.contains("Limbs"));
        assert!(out.contains("Result digits"));
    }

    #[test]
    fn presenter_truncated_without_last_digits() {
        let presenter = CLIResultPresenter::new(false, false, true);
        let result = FibResult {
            value: BigUint::from(42u32),
            truncated: true,
        };
        let out = presenter.render_result("Matrix", 1_000, &result, 0, Duration::ZERO);
        assert!(out.contains("F(1,000) low-order digits = 42"));
        assert!(out.contains("Digits kept"));
    }

    #[test]
    fn presenter_last_digits_line() {
        let presenter = CLIResultPresenter::new(false, false, false);
        let result = FibResult {
            value: BigUint::from(42u32),
            truncated: true,
        };
        let out = presenter.render_result("Matrix", 1_000, &result, 5, Duration::ZERO);
        assert!(out.contains("Last 5 digits of F(1,000) = 00042"));
    }

    #[test]
    fn progress_reporter_tracks_position() {
        let reporter = CLIProgressReporter::hidden();
        reporter.on_progress(&ProgressUpdate::new("test", 10, 10, 4));
        assert_eq!(reporter.position(), PROGRESS_TICKS);
        assert!(!reporter.is_finished());

        reporter.on_progress(&ProgressUpdate::done("test"));
        assert!(reporter.is_finished());
    }

    #[test]
    fn progress_reporter_partial_progress() {
        let reporter = CLIProgressReporter::hidden();
        reporter.on_progress(&ProgressUpdate::new("test", 0, 10, 1));
        assert_eq!(reporter.position(), 0);
    }
}
