#![no_main]

use exact_fraction::Fraction64;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, u16, u8, bool)| {
    let (numerator, denominator, radix, force) = data;
    // Keep the cycle length, bounded by the denominator, small enough for the harness.
    let Ok(value) = Fraction64::new(numerator, i64::from(denominator)) else {
        return;
    };
    let Ok(text) = value.to_repeating_digit_string(u32::from(radix % 35) + 2, force) else {
        return;
    };
    assert_eq!(text.matches('(').count(), text.matches(')').count());
    assert!(text.matches('(').count() <= 1);
    assert_eq!(text.starts_with('-'), value.is_negative());
});
