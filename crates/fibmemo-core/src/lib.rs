//! # fibmemo-core
//!
//! Memoized Fibonacci evaluation. Every index is computed at most once per
//! cache, giving linear time in n instead of the exponential cost of naive
//! recursion. Results are arbitrary precision.

pub mod calculator;
pub mod constants;
pub mod memo;
pub(crate) mod recursive;
pub mod shared;
pub(crate) mod worklist;

// Re-exports
pub use calculator::{validate_index, Evaluation, FibError, FibonacciCalculator};
pub use constants::{exit_codes, DEFAULT_INDEX, MAX_RECURSION_DEPTH};
pub use memo::{MemoCache, MemoStats};
pub use shared::SharedMemo;

use num_bigint::BigUint;

/// Compute F(n) with a fresh cache.
///
/// Convenience for callers that already hold a non-negative index. Use
/// `FibonacciCalculator` to pick the evaluation or to reuse a cache.
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibmemo_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut cache = MemoCache::new();
    FibonacciCalculator::new().evaluate(n, &mut cache)
}
