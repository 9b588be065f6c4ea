//! Property-based tests for memoized evaluation.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibmemo_core::{Evaluation, FibError, FibonacciCalculator, MemoCache};

/// F(n) by plain iteration, independent of the memo code.
fn reference(n: u64) -> BigUint {
    let mut a = BigUint::from(0u32);
    let mut b = BigUint::from(1u32);
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

fn calculator(worklist: bool) -> FibonacciCalculator {
    if worklist {
        FibonacciCalculator::with_evaluation(Evaluation::Worklist)
    } else {
        FibonacciCalculator::with_evaluation(Evaluation::Recursive)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// compute(n) matches the additive recurrence.
    #[test]
    fn matches_reference(n in 0i64..1500, worklist in any::<bool>()) {
        let value = calculator(worklist).compute(n).unwrap();
        prop_assert_eq!(value, reference(n as u64), "F({}) mismatch", n);
    }

    /// Both evaluations agree and leave identical tables.
    #[test]
    fn evaluations_agree(n in 0i64..1024) {
        let mut rec_cache = MemoCache::new();
        let mut stack_cache = MemoCache::new();
        let rec = calculator(false).compute_with(n, &mut rec_cache).unwrap();
        let stack = calculator(true).compute_with(n, &mut stack_cache).unwrap();
        prop_assert_eq!(rec, stack);
        prop_assert_eq!(rec_cache.indices(), stack_cache.indices());
    }

    /// Repeated top-level calls with fresh caches return the same value.
    #[test]
    fn idempotent(n in 0i64..500) {
        let calc = FibonacciCalculator::new();
        let first = calc.compute(n).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(&calc.compute(n).unwrap(), &first);
        }
    }

    /// After compute(n), every stored index k holds F(k) and 2..=n are all present.
    #[test]
    fn cache_holds_every_subproblem(n in 2u64..600, worklist in any::<bool>()) {
        let mut cache = MemoCache::new();
        calculator(worklist).compute_with(n as i64, &mut cache).unwrap();
        prop_assert_eq!(cache.indices(), (2..=n).collect::<Vec<_>>());
        for k in 2..=n {
            prop_assert_eq!(cache.get(k), Some(&reference(k)), "entry {}", k);
        }
    }

    /// A warm cache is left unchanged and saves calls.
    #[test]
    fn warm_cache_saves_calls(n in 3u64..600, warm_to in 2u64..600, worklist in any::<bool>()) {
        let warm_to = warm_to.min(n - 1);
        let calc = calculator(worklist);

        let mut cold = MemoCache::new();
        calc.compute_with(n as i64, &mut cold).unwrap();

        let mut warm: MemoCache = (2..=warm_to).map(|k| (k, reference(k))).collect();
        let seeded = warm.clone();
        let value = calc.compute_with(n as i64, &mut warm).unwrap();

        prop_assert_eq!(value, reference(n));
        prop_assert!(warm.stats().calls < cold.stats().calls);
        for k in seeded.indices() {
            prop_assert_eq!(warm.get(k), seeded.get(k));
        }
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn recurrence_holds(n in 0i64..1000) {
        let calc = FibonacciCalculator::new();
        let a = calc.compute(n).unwrap();
        let b = calc.compute(n + 1).unwrap();
        let c = calc.compute(n + 2).unwrap();
        prop_assert_eq!(a + b, c);
    }

    /// Any negative index is rejected without evaluating.
    #[test]
    fn negative_rejected(n in i64::MIN..0) {
        let mut cache = MemoCache::new();
        let result = FibonacciCalculator::new().compute_with(n, &mut cache);
        prop_assert_eq!(result, Err(FibError::InvalidArgument(n)));
        prop_assert!(cache.is_empty());
    }
}

#[test]
fn seeded_entries_are_trusted_not_recomputed() {
    // A wrong seed is reused as-is: the table is insert-only.
    let mut cache = MemoCache::new();
    cache.seed(5, BigUint::from(100u32));
    let value = FibonacciCalculator::new()
        .compute_with(6, &mut cache)
        .unwrap();
    assert_eq!(value, BigUint::from(103u32));
    assert_eq!(cache.get(5), Some(&BigUint::from(100u32)));
}
