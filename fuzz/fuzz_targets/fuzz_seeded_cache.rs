#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmemo_core::{fibonacci, FibonacciCalculator, MemoCache};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes pick n, the rest pick which correct entries to seed
    let index = u16::from_le_bytes([data[0], data[1]]) % 2_000;
    let n = u64::from(index);
    let mut cache: MemoCache = data[2..]
        .iter()
        .map(|&b| u64::from(b) * 8 % (n + 1))
        .map(|k| (k, fibonacci(k)))
        .collect();
    let seeded = cache.clone();

    let value = FibonacciCalculator::new()
        .compute_with(i64::from(index), &mut cache)
        .unwrap();

    assert_eq!(value, fibonacci(n));
    for k in seeded.indices() {
        assert_eq!(cache.get(k), seeded.get(k));
    }
    assert!(n < 2 || cache.contains(n), "missing entry for F({n})");
});
