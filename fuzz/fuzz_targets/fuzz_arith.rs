#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmat_core::BigUint;

// Split the input in two, read each half as decimal digits, and compare
// add/mul with num-bigint.
fuzz_target!(|data: &[u8]| {
    let digits: String = data.iter().map(|b| char::from(b'0' + b % 10)).collect();
    if digits.is_empty() {
        return;
    }
    let (left, right) = digits.split_at(digits.len() / 2);
    let right = if right.is_empty() { "0" } else { right };
    let left = if left.is_empty() { "0" } else { left };

    let a: BigUint = left.parse().unwrap();
    let b: BigUint = right.parse().unwrap();
    let ra: num_bigint::BigUint = left.parse().unwrap();
    let rb: num_bigint::BigUint = right.parse().unwrap();

    assert_eq!((&a + &b).to_decimal_string(), (&ra + &rb).to_string());
    assert_eq!((&a * &b).to_decimal_string(), (&ra * &rb).to_string());
});
