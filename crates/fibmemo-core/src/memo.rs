//! Memo table keyed by sequence index.

use std::borrow::Cow;
use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Counters describing how a `MemoCache` has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Number of evaluations entered, the top-level call included.
    pub calls: u64,
    /// Number of lookups answered from a stored entry.
    pub hits: u64,
    /// Number of entries stored.
    pub inserts: u64,
}

/// Mapping from index to F(index), filled lazily during evaluation.
///
/// Entries are only ever added. An index that is already present keeps
/// its value, whether it was computed or seeded by the caller. The base
/// indices 0 and 1 are answered directly and never stored.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    entries: HashMap<u64, BigUint>,
    stats: MemoStats,
}

impl MemoCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `n`, if any.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<&BigUint> {
        self.entries.get(&n)
    }

    #[must_use]
    pub fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `value` under `n` unless an entry already exists.
    ///
    /// Returns `true` if the value was stored. Base indices are rejected.
    /// Seeded entries are trusted as-is by later evaluations.
    pub fn seed(&mut self, n: u64, value: BigUint) -> bool {
        if n <= 1 || self.entries.contains_key(&n) {
            return false;
        }
        self.entries.insert(n, value);
        true
    }

    /// Stored indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Zero the counters, keeping the entries.
    pub fn reset_stats(&mut self) {
        self.stats = MemoStats::default();
    }

    pub(crate) fn record_call(&mut self) {
        self.stats.calls += 1;
    }

    pub(crate) fn record_hits(&mut self, hits: u64) {
        self.stats.hits += hits;
    }

    /// Stored value for `n`, counted as a hit when present.
    pub(crate) fn lookup(&mut self, n: u64) -> Option<&BigUint> {
        let found = self.entries.get(&n);
        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    /// F(n) if it is a base case or already stored, without touching the
    /// counters.
    pub(crate) fn known(&self, n: u64) -> Option<Cow<'_, BigUint>> {
        match n {
            0 => Some(Cow::Owned(BigUint::zero())),
            1 => Some(Cow::Owned(BigUint::one())),
            _ => self.entries.get(&n).map(Cow::Borrowed),
        }
    }

    /// Insert a freshly computed value and return the stored one.
    pub(crate) fn store(&mut self, n: u64, value: BigUint) -> &BigUint {
        let inserts = &mut self.stats.inserts;
        self.entries.entry(n).or_insert_with(|| {
            *inserts += 1;
            value
        })
    }
}

impl FromIterator<(u64, BigUint)> for MemoCache {
    /// Build a pre-populated cache. Base indices are skipped and the first
    /// value given for an index wins.
    fn from_iter<I: IntoIterator<Item = (u64, BigUint)>>(iter: I) -> Self {
        let mut cache = Self::new();
        for (n, value) in iter {
            cache.seed(n, value);
        }
        cache
    }
}
