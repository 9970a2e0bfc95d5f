use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;
use crate::rounding::RoundingMode;

/// `rust_decimal` keeps at most this many fractional digits.
const MAX_DECIMAL_SCALE: u32 = 28;

/// One side of `numerator[/denominator]` as produced by a parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal<I = BigInt> {
    Integer(I),
    /// `unscaled · 10^-scale`; a negative scale multiplies (`1.5e3` is `15` at scale `-2`).
    Decimal { unscaled: I, scale: i32 },
    Fraction(Fraction<I>),
}

impl<I: CheckedInt> Fraction<I> {
    pub fn from_literal(literal: Literal<I>) -> Result<Self> {
        match literal {
            Literal::Integer(value) => Ok(Self::from_integer(value)),
            Literal::Decimal { unscaled, scale } => {
                let power = I::from_i128(10)?.try_pow(scale.unsigned_abs())?;
                if scale >= 0 {
                    Self::new(unscaled, power)
                } else {
                    Ok(Self::from_integer(unscaled.try_mul(&power)?))
                }
            }
            Literal::Fraction(fraction) => Ok(fraction),
        }
    }

    /// `numerator / denominator`, each side given as a literal.
    pub fn from_literals(numerator: Literal<I>, denominator: Literal<I>) -> Result<Self> {
        Self::from_ratio(&Self::from_literal(numerator)?, &Self::from_literal(denominator)?)
    }

    /// Rounds to `scale` fractional digits and converts to a [`Decimal`], failing with
    /// `NoExactValue` when the result does not fit its 96-bit mantissa.
    pub fn to_decimal(&self, scale: u32, mode: RoundingMode) -> Result<Decimal> {
        if scale > MAX_DECIMAL_SCALE {
            return Err(FractionError::invalid(format!(
                "decimal scale {scale} exceeds {MAX_DECIMAL_SCALE}"
            )));
        }
        let factor = I::from_i128(10)?.try_pow(scale)?;
        let scaled = self.checked_mul_int(&factor)?.round(mode)?;
        let mantissa = scaled.to_i128().ok_or(FractionError::NoExactValue)?;
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| FractionError::NoExactValue)
    }
}

impl<I: CheckedInt> TryFrom<Decimal> for Fraction<I> {
    type Error = FractionError;

    fn try_from(value: Decimal) -> Result<Self> {
        let scale = i32::try_from(value.scale()).map_err(|_| FractionError::Overflow)?;
        Self::from_literal(Literal::Decimal {
            unscaled: I::from_i128(value.mantissa())?,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigFraction, Fraction64};

    fn frac(n: i64, d: i64) -> Fraction64 {
        Fraction64::new(n, d).unwrap()
    }

    #[test]
    fn decimal_literals_scale_both_ways() {
        let value = Fraction64::from_literal(Literal::Decimal {
            unscaled: 125,
            scale: 2,
        });
        assert_eq!(value, Ok(frac(5, 4)));
        let value = Fraction64::from_literal(Literal::Decimal {
            unscaled: -15,
            scale: -2,
        });
        assert_eq!(value, Ok(frac(-1500, 1)));
        let value = Fraction64::from_literal(Literal::Decimal {
            unscaled: 1,
            scale: 19,
        });
        assert_eq!(value, Err(FractionError::Overflow));
    }

    #[test]
    fn both_sides_may_be_literals() {
        let value = Fraction64::from_literals(
            Literal::Decimal {
                unscaled: 15,
                scale: 1,
            },
            Literal::Integer(4),
        );
        assert_eq!(value, Ok(frac(3, 8)));
        let value = Fraction64::from_literals(
            Literal::Fraction(frac(1, 3)),
            Literal::Fraction(frac(2, 9)),
        );
        assert_eq!(value, Ok(frac(3, 2)));
        assert_eq!(
            Fraction64::from_literals(Literal::Integer(1), Literal::Integer(0)),
            Err(FractionError::DivideByZero)
        );
    }

    #[test]
    fn rust_decimal_round_trip() {
        let decimal = Decimal::new(-3125, 3);
        let value = BigFraction::try_from(decimal).unwrap();
        assert_eq!(value, BigFraction::new((-25).into(), 8.into()).unwrap());
        assert_eq!(value.to_decimal(3, RoundingMode::Unnecessary), Ok(decimal));
        assert_eq!(
            value.to_decimal(2, RoundingMode::Unnecessary),
            Err(FractionError::RoundingRequired)
        );
        assert_eq!(
            value.to_decimal(2, RoundingMode::HalfEven),
            Ok(Decimal::new(-312, 2))
        );
    }

    #[test]
    fn out_of_range_decimals_have_no_exact_value() {
        let huge = BigFraction::from_integer(BigInt::from(10).pow(30));
        assert_eq!(
            huge.to_decimal(0, RoundingMode::Unnecessary),
            Err(FractionError::NoExactValue)
        );
        assert!(matches!(
            frac(1, 3).to_decimal(29, RoundingMode::Down),
            Err(FractionError::InvalidArgument(_))
        ));
    }
}
