#![no_main]

use exact_fraction::{BigFraction, Fraction64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 8]| {
    let value = f64::from_le_bytes(data);
    let Ok(exact) = BigFraction::try_from_f64(value) else {
        assert!(!value.is_finite());
        return;
    };
    assert_eq!(exact.to_f64_exact(), Ok(value));

    // The fixed-width backing either holds the same value or reports overflow.
    if let Ok(fixed) = Fraction64::try_from_f64(value) {
        assert_eq!(fixed.widen(), exact);
    }
});
