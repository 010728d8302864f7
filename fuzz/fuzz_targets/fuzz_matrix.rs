#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmat_core::observers::NoOpObserver;
use fibmat_core::{FibonacciEngine, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // First 8 bytes are n, the ninth picks a limb cap.
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    let n = i64::from_le_bytes(raw);
    let cap = usize::from(data[8] % 8) + 1;

    let engine = FibonacciEngine::new();
    let observer = NoOpObserver::new();

    // Capped runs are cheap for any index.
    let capped = engine.calculate(n, &Options::with_max_limbs(cap), &observer);
    match capped {
        Ok(result) => assert!(result.value.len() <= cap),
        Err(_) => assert!(n < 1),
    }

    // Full precision is checked against the capped run for small indices.
    let small = n.rem_euclid(20_000) + 1;
    let exact = engine.nth_fibonacci(small).unwrap();
    let capped = engine
        .calculate(small, &Options::with_max_limbs(cap), &observer)
        .unwrap();
    let mut reduced = exact;
    reduced.truncate_limbs(cap);
    assert_eq!(capped.value, reduced);
});
