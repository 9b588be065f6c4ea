//! The `FibonacciCalculator` and its error type.
//!
//! `compute` evaluates with a cache created for that call alone.
//! `compute_with` threads a caller-owned cache through the evaluation,
//! which lets callers reuse work between top-level calls.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use tracing::debug;

use crate::constants::MAX_RECURSION_DEPTH;
use crate::memo::MemoCache;
use crate::{recursive, worklist};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is not a sequence position.
    #[error("invalid argument: index {0} is negative")]
    InvalidArgument(i64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// How the memoized recursion is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Native recursion. Indices above `MAX_RECURSION_DEPTH` are handed to
    /// the worklist.
    #[default]
    Recursive,
    /// Explicit stack, no depth limit.
    Worklist,
}

impl Evaluation {
    /// Names accepted by `from_str`.
    pub const NAMES: [&'static str; 2] = ["recursive", "worklist"];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Worklist => "worklist",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluation {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Self::Recursive),
            "worklist" => Ok(Self::Worklist),
            other => Err(FibError::Config(format!(
                "unknown evaluation: {other} (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Memoized Fibonacci calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciCalculator {
    evaluation: Evaluation,
}

impl FibonacciCalculator {
    /// Create a calculator using native recursion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_evaluation(evaluation: Evaluation) -> Self {
        Self { evaluation }
    }

    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Compute F(n) with a fresh, empty cache.
    pub fn compute(&self, n: i64) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        let mut cache = MemoCache::new();
        Ok(self.evaluate(index, &mut cache))
    }

    /// Compute F(n) using `cache`, storing every newly computed index in it.
    ///
    /// Existing entries are reused as-is and never overwritten.
    pub fn compute_with(&self, n: i64, cache: &mut MemoCache) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        Ok(self.evaluate(index, cache))
    }

    pub(crate) fn evaluate(&self, n: u64, cache: &mut MemoCache) -> BigUint {
        let before = cache.stats();
        let value = match self.evaluation {
            Evaluation::Recursive if n <= MAX_RECURSION_DEPTH => recursive::evaluate(n, cache),
            Evaluation::Recursive => {
                debug!(
                    n,
                    limit = MAX_RECURSION_DEPTH,
                    "index exceeds recursion limit, using worklist"
                );
                worklist::evaluate(n, cache)
            }
            Evaluation::Worklist => worklist::evaluate(n, cache),
        };
        let after = cache.stats();
        debug!(
            n,
            evaluation = %self.evaluation,
            calls = after.calls - before.calls,
            hits = after.hits - before.hits,
            inserts = after.inserts - before.inserts,
            cached = cache.len(),
            "computed Fibonacci number"
        );
        value
    }
}

/// Convert a caller-supplied index into a sequence position.
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n).map_err(|_| FibError::InvalidArgument(n))
}
