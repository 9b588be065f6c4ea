//! Result rendering.

use std::io::{self, Write};

use fibmemo_core::MemoStats;
use num_bigint::BigUint;

/// The result line, e.g. `The 16th Fibonacci number is: 987`.
#[must_use]
pub fn format_result(n: i64, value: &BigUint) -> String {
    format!("The {n}th Fibonacci number is: {value}")
}

/// Writes results to stdout and statistics to stderr.
pub struct ResultPresenter {
    quiet: bool,
    stats: bool,
}

impl ResultPresenter {
    #[must_use]
    pub fn new(quiet: bool, stats: bool) -> Self {
        Self { quiet, stats }
    }

    /// Write the result for index `n`.
    pub fn present_result(
        &self,
        out: &mut impl Write,
        n: i64,
        value: &BigUint,
    ) -> io::Result<()> {
        if self.quiet {
            writeln!(out, "{value}")
        } else {
            writeln!(out, "{}", format_result(n, value))
        }
    }

    /// Write cache statistics if they were requested.
    pub fn present_stats(
        &self,
        out: &mut impl Write,
        stats: &MemoStats,
        cached: usize,
    ) -> io::Result<()> {
        if !self.stats {
            return Ok(());
        }
        writeln!(
            out,
            "calls: {}, hits: {}, inserts: {}, cached entries: {cached}",
            stats.calls, stats.hits, stats.inserts
        )
    }
}
