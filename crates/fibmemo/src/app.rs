//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use fibmemo_core::{FibonacciCalculator, MemoCache};

use crate::config::AppConfig;
use crate::output::ResultPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let evaluation = config.evaluation()?;
    let calculator = FibonacciCalculator::with_evaluation(evaluation);
    info!(n = config.n, %evaluation, "computing Fibonacci number");

    let mut cache = MemoCache::new();
    let value = calculator.compute_with(config.n, &mut cache)?;

    let presenter = ResultPresenter::new(config.quiet, config.stats);
    presenter
        .present_result(&mut std::io::stdout().lock(), config.n, &value)
        .context("failed to write result")?;
    presenter
        .present_stats(&mut std::io::stderr().lock(), &cache.stats(), cache.len())
        .context("failed to write statistics")?;
    Ok(())
}
