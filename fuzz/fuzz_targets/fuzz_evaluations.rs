#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmemo_core::{Evaluation, FibError, FibonacciCalculator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let raw = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let recursive = FibonacciCalculator::with_evaluation(Evaluation::Recursive);
    let worklist = FibonacciCalculator::with_evaluation(Evaluation::Worklist);

    if raw < 0 {
        assert_eq!(recursive.compute(raw), Err(FibError::InvalidArgument(raw)));
        assert_eq!(worklist.compute(raw), Err(FibError::InvalidArgument(raw)));
        return;
    }

    // Cap n for speed
    let n = raw % 5_000;
    assert_eq!(
        recursive.compute(n).unwrap(),
        worklist.compute(n).unwrap(),
        "recursive != worklist at n={n}"
    );
});
