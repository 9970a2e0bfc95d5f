#![no_main]

use exact_fraction::{DivisionMode, Fraction64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, i64, i64, i64)| {
    let (an, ad, bn, bd) = data;
    let (Ok(a), Ok(b)) = (Fraction64::new(an, ad), Fraction64::new(bn, bd)) else {
        return;
    };
    for mode in DivisionMode::ALL {
        let Ok((q, r)) = a.div_rem(&b, mode) else {
            continue;
        };
        // Overflow is allowed on the way back; a wrong answer is not.
        let (wa, wb, wr) = (a.widen(), b.widen(), r.widen());
        let rebuilt = wb.checked_mul_int(&q.into()).and_then(|p| p.checked_add(&wr));
        assert_eq!(rebuilt, Ok(wa));
    }
});
