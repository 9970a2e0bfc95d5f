use std::fmt;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;

/// Convention for the integer quotient when operands may be negative.
///
/// Every mode satisfies `a = b·q + r`; they differ only in the sign taken by `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DivisionMode {
    /// `q = trunc(a/b)`; the remainder has the sign of the dividend.
    #[default]
    Truncated,
    /// `q = floor(a/b)`; the remainder has the sign of the divisor.
    Floored,
    /// The remainder is never negative.
    Euclidean,
}

impl DivisionMode {
    pub const ALL: [DivisionMode; 3] = [
        DivisionMode::Truncated,
        DivisionMode::Floored,
        DivisionMode::Euclidean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DivisionMode::Truncated => "truncated",
            DivisionMode::Floored => "floored",
            DivisionMode::Euclidean => "euclidean",
        }
    }

    /// Correction applied to a truncated quotient, given a non-zero truncated remainder and
    /// the signs of the cross-multiplied dividend and divisor.
    fn adjustment(self, dividend_negative: bool, divisor_negative: bool) -> i8 {
        match self {
            DivisionMode::Truncated => 0,
            DivisionMode::Floored if dividend_negative != divisor_negative => -1,
            DivisionMode::Floored => 0,
            DivisionMode::Euclidean => match (dividend_negative, divisor_negative) {
                (true, false) => -1,
                (true, true) => 1,
                _ => 0,
            },
        }
    }
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DivisionMode {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        DivisionMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| FractionError::invalid(format!("unknown division mode `{s}`")))
    }
}

impl<I: CheckedInt> Fraction<I> {
    /// Integer quotient `q` and fractional remainder `r` with `self = divisor·q + r`.
    pub fn div_rem(&self, divisor: &Self, mode: DivisionMode) -> Result<(I, Self)> {
        if divisor.is_zero() {
            return Err(FractionError::DivideByZero);
        }
        // a/b = (a.n·b.d) / (a.d·b.n); the signs follow a and b respectively.
        let num = self.numerator.try_mul(&divisor.denominator)?;
        let den = self.denominator.try_mul(&divisor.numerator)?;
        let (quotient, remainder) = num.try_div_rem(&den)?;
        if remainder.is_zero() {
            return Ok((quotient, Self::zero()));
        }

        let (quotient, remainder) = match mode.adjustment(num.is_negative(), den.is_negative()) {
            0 => (quotient, remainder),
            -1 => (quotient.try_sub(&I::one())?, remainder.try_add(&den)?),
            _ => (quotient.try_add(&I::one())?, remainder.try_sub(&den)?),
        };

        // r/den is the remainder of a/b; scaling by b puts it back in units of a.
        let remainder = Self::new(remainder, den)?.checked_mul(divisor)?;
        Ok((quotient, remainder))
    }

    pub fn quotient(&self, divisor: &Self, mode: DivisionMode) -> Result<I> {
        Ok(self.div_rem(divisor, mode)?.0)
    }

    pub fn remainder(&self, divisor: &Self, mode: DivisionMode) -> Result<Self> {
        Ok(self.div_rem(divisor, mode)?.1)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::{BigFraction, Fraction64};

    fn frac(n: i64, d: i64) -> Fraction64 {
        Fraction64::new(n, d).unwrap()
    }

    #[test]
    fn negative_five_quarters_by_one_half() {
        let a = frac(-5, 4);
        let b = frac(1, 2);
        assert_eq!(a.div_rem(&b, DivisionMode::Floored), Ok((-3, frac(1, 4))));
        assert_eq!(a.div_rem(&b, DivisionMode::Euclidean), Ok((-3, frac(1, 4))));
        assert_eq!(a.div_rem(&b, DivisionMode::Truncated), Ok((-2, frac(-1, 4))));
    }

    #[test]
    fn remainder_signs_per_mode() {
        let cases = [(7, -2), (-7, 2), (-7, -2), (7, 2)];
        for (a, b) in cases {
            let (a, b) = (frac(a, 3), frac(b, 5));
            let (_, r) = a.div_rem(&b, DivisionMode::Truncated).unwrap();
            assert_eq!(r.signum(), a.signum(), "truncated {a:?} {b:?}");
            let (_, r) = a.div_rem(&b, DivisionMode::Floored).unwrap();
            assert_eq!(r.signum(), b.signum(), "floored {a:?} {b:?}");
            let (_, r) = a.div_rem(&b, DivisionMode::Euclidean).unwrap();
            assert!(!r.is_negative(), "euclidean {a:?} {b:?}");
        }
    }

    #[test]
    fn euclidean_with_negative_divisor_takes_the_ceiling() {
        let a = BigFraction::new(BigInt::from(-7), BigInt::from(1)).unwrap();
        let b = BigFraction::new(BigInt::from(-2), BigInt::from(1)).unwrap();
        let (q, r) = a.div_rem(&b, DivisionMode::Euclidean).unwrap();
        assert_eq!(q, BigInt::from(4));
        assert_eq!(r, BigFraction::from_integer(BigInt::from(1)));
    }

    #[test]
    fn exact_division_ignores_the_mode() {
        for mode in DivisionMode::ALL {
            assert_eq!(frac(-3, 2).div_rem(&frac(1, 2), mode), Ok((-3, frac(0, 1))));
        }
    }

    #[test]
    fn zero_divisor_fails() {
        assert_eq!(
            frac(1, 2).div_rem(&frac(0, 1), DivisionMode::Floored),
            Err(FractionError::DivideByZero)
        );
    }

    #[test]
    fn identity_holds_for_every_mode() {
        let values = [frac(-5, 4), frac(7, 3), frac(-11, 6), frac(2, 9), frac(13, 1)];
        for a in values {
            for b in values {
                for mode in DivisionMode::ALL {
                    let (q, r) = a.div_rem(&b, mode).unwrap();
                    let rebuilt = b.checked_mul_int(&q).unwrap().checked_add(&r).unwrap();
                    assert_eq!(rebuilt, a, "{a:?} / {b:?} under {mode}");
                    let ratio = a.checked_div(&b).unwrap();
                    let split = r.checked_div(&b).unwrap().checked_add_int(&q).unwrap();
                    assert_eq!(split, ratio);
                }
            }
        }
    }

    #[test]
    fn modes_parse_from_text() {
        assert_eq!("Euclidean".parse::<DivisionMode>(), Ok(DivisionMode::Euclidean));
        assert!("round".parse::<DivisionMode>().is_err());
    }
}
