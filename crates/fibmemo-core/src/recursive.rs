//! Memoized evaluation by native recursion.

use num_bigint::BigUint;

use crate::memo::MemoCache;

/// F(n), consulting and filling `cache`.
///
/// Recursion depth grows with `n`; callers bound it with
/// `MAX_RECURSION_DEPTH`.
pub(crate) fn evaluate(n: u64, cache: &mut MemoCache) -> BigUint {
    cache.record_call();
    if n <= 1 {
        return BigUint::from(n);
    }
    if let Some(value) = cache.lookup(n) {
        return value.clone();
    }
    let value = evaluate(n - 1, cache) + evaluate(n - 2, cache);
    cache.store(n, value).clone()
}
