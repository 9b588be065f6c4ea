//! Memo table shared across top-level calls and threads.
//!
//! Lookups of indices that are already stored take a shared read lock.
//! A miss takes the write lock for the whole evaluation, so concurrent
//! misses are serialized and each index is still computed once.

use num_bigint::BigUint;
use parking_lot::RwLock;

use crate::calculator::{validate_index, Evaluation, FibError, FibonacciCalculator};
use crate::memo::{MemoCache, MemoStats};

/// Process-local memo table reused by every call made through it.
#[derive(Debug, Default)]
pub struct SharedMemo {
    calculator: FibonacciCalculator,
    cache: RwLock<MemoCache>,
}

impl SharedMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_evaluation(evaluation: Evaluation) -> Self {
        Self {
            calculator: FibonacciCalculator::with_evaluation(evaluation),
            cache: RwLock::new(MemoCache::new()),
        }
    }

    /// Compute F(n), reusing everything previously stored.
    pub fn compute(&self, n: i64) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        if index <= 1 {
            return Ok(BigUint::from(index));
        }
        if let Some(value) = self.cache.read().get(index) {
            return Ok(value.clone());
        }
        let mut cache = self.cache.write();
        Ok(self.calculator.evaluate(index, &mut cache))
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Counters for evaluations performed under the write lock.
    ///
    /// Reads served from the shared fast path are not counted.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.cache.read().stats()
    }

    /// Copy of the current table.
    #[must_use]
    pub fn snapshot(&self) -> MemoCache {
        self.cache.read().clone()
    }

    /// Drop every stored entry and reset the counters.
    pub fn clear(&self) {
        *self.cache.write() = MemoCache::new();
    }
}
