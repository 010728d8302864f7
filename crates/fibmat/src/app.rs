//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibmat_cli::output::{result_digits, write_to_file, ResultReport};
use fibmat_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use fibmat_cli::ui;
use fibmat_core::memory_budget::MemoryEstimate;
use fibmat_core::observers::LoggingObserver;
use fibmat_core::{FibonacciEngine, ProgressSubject, ALGORITHM};

use crate::config::AppConfig;
use crate::errors::ConfigError;

/// Minimum interval between progress log lines.
const LOG_INTERVAL_MS: u64 = 1000;

/// Uncapped results above this estimate get a warning suggesting a cap.
const LARGE_RESULT_WARNING_BYTES: usize = 1 << 30;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibmat_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();

    let estimate = MemoryEstimate::estimate(config.n.max(0).unsigned_abs(), opts.max_limbs);
    debug!(?estimate, ?opts, "memory estimate");
    if !estimate.fits_in(config.memory_limit) {
        return Err(ConfigError::MemoryLimitExceeded {
            estimate: estimate.total_bytes,
            limit: config.memory_limit,
        }
        .into());
    }
    if opts.limb_cap().is_none() && estimate.total_bytes > LARGE_RESULT_WARNING_BYTES {
        ui::print_warning(&format!(
            "F({}) needs about {} MB; consider --last-digits",
            config.n,
            estimate.total_bytes >> 20
        ));
    }

    let logging = LoggingObserver::new(LOG_INTERVAL_MS);
    let progress_bar = config.progress.then(CLIProgressReporter::new);
    let mut subject = ProgressSubject::new();
    subject.register(&logging);
    if let Some(bar) = &progress_bar {
        subject.register(bar);
    }

    let start = Instant::now();
    let result = FibonacciEngine::new().calculate(config.n, &opts, &subject)?;
    let duration = start.elapsed();
    info!(
        n = config.n,
        ?duration,
        limbs = result.value.len(),
        truncated = result.truncated,
        "F(n) computed"
    );

    if config.json {
        let report = ResultReport::new(
            ALGORITHM,
            config.n,
            &result,
            config.last_digits,
            opts.exact_digits(),
            duration,
        );
        println!("{}", report.to_json()?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.details);
        presenter.present_result(ALGORITHM, config.n, &result, config.last_digits, duration);
    }

    if let Some(path) = &config.output {
        write_to_file(path, &result_digits(&result, config.last_digits))
            .with_context(|| format!("failed to write result to {}", path.display()))?;
    }

    Ok(())
}
