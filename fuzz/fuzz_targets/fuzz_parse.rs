#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmat_core::BigUint;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Whatever parses must print back without leading zeros.
    if let Ok(value) = s.parse::<BigUint>() {
        let printed = value.to_decimal_string();
        assert!(printed == "0" || !printed.starts_with('0'));
        assert_eq!(printed.parse::<BigUint>().unwrap(), value);
        assert_eq!(printed.len(), value.digit_count());
    }
});
