//! Memoized evaluation driven by an explicit stack.
//!
//! Same memo table and the same one-computation-per-index guarantee as the
//! recursive form, with heap-bounded depth.

use std::borrow::Cow;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::memo::MemoCache;

/// F(n), consulting and filling `cache`.
///
/// Every index pushed onto the worklist is missing from the cache and is
/// stored exactly once when both of its predecessors are known.
pub(crate) fn evaluate(n: u64, cache: &mut MemoCache) -> BigUint {
    cache.record_call();
    if n <= 1 {
        return BigUint::from(n);
    }
    if let Some(value) = cache.lookup(n) {
        return value.clone();
    }

    let mut result = BigUint::zero();
    let mut pending = vec![n];
    while let Some(&k) = pending.last() {
        let step = match (cache.known(k - 1), cache.known(k - 2)) {
            (Some(a), Some(b)) => Ok((&*a + &*b, stored(&a) + stored(&b))),
            (None, _) => Err(k - 1),
            (Some(_), None) => Err(k - 2),
        };
        match step {
            Ok((value, hits)) => {
                pending.pop();
                cache.record_hits(hits);
                let value = cache.store(k, value);
                if k == n {
                    result = value.clone();
                }
            }
            Err(missing) => {
                cache.record_call();
                pending.push(missing);
            }
        }
    }
    result
}

fn stored(value: &Cow<'_, BigUint>) -> u64 {
    u64::from(matches!(value, Cow::Borrowed(_)))
}
