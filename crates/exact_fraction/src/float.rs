use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Pow, Signed};
use tracing::trace;

use crate::error::{FractionError, Result};
use crate::fraction::{BigFraction, Fraction};
use crate::int::CheckedInt;
use crate::rounding::RoundingMode;

pub trait IeeeFloat: Copy + fmt::Debug + FromStr {
    const MANTISSA_BITS: u32;
    const EXPONENT_BITS: u32;
    const EXPONENT_BIAS: i32;
    /// Decimal digits the format always carries; narrowing renders two more than this.
    const DECIMAL_DIGITS: u32;
    const NAN: Self;

    fn to_raw_bits(self) -> u64;
}

impl IeeeFloat for f64 {
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;
    const DECIMAL_DIGITS: u32 = 16;
    const NAN: Self = f64::NAN;

    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }
}

impl IeeeFloat for f32 {
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;
    const DECIMAL_DIGITS: u32 = 7;
    const NAN: Self = f32::NAN;

    fn to_raw_bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

/// `(-1)^negative · (mantissa << numerator_shift) / 2^denominator_shift`, already reduced.
#[derive(Debug, PartialEq, Eq)]
struct Dyadic {
    negative: bool,
    mantissa: u64,
    numerator_shift: u32,
    denominator_shift: u32,
}

/// Splits a float into its exact dyadic value; `None` for either zero.
fn decompose<F: IeeeFloat>(value: F) -> Result<Option<Dyadic>> {
    let bits = value.to_raw_bits();
    let width = F::MANTISSA_BITS;
    let exponent_mask = (1u64 << F::EXPONENT_BITS) - 1;

    let negative = (bits >> (width + F::EXPONENT_BITS)) & 1 == 1;
    let biased = (bits >> width) & exponent_mask;
    let mantissa = bits & ((1u64 << width) - 1);

    if biased == exponent_mask {
        return Err(FractionError::invalid(format!(
            "{value:?} is not a finite number"
        )));
    }
    if biased == 0 && mantissa == 0 {
        return Ok(None);
    }

    let dyadic = if biased == 0 {
        // Subnormal: value = mantissa / 2^(bias + width - 1).
        let anchor = (F::EXPONENT_BIAS + width as i32 - 1) as u32;
        let shared = mantissa.trailing_zeros().min(anchor);
        trace!(?value, anchor, "decomposing subnormal float");
        Dyadic {
            negative,
            mantissa: mantissa >> shared,
            numerator_shift: 0,
            denominator_shift: anchor - shared,
        }
    } else {
        let exponent = biased as i32 - F::EXPONENT_BIAS;
        let full = (1u64 << width) + mantissa;
        if exponent >= width as i32 {
            Dyadic {
                negative,
                mantissa: full,
                numerator_shift: (exponent - width as i32) as u32,
                denominator_shift: 0,
            }
        } else {
            let gap = (width as i32 - exponent) as u32;
            let shared = full.trailing_zeros().min(gap);
            Dyadic {
                negative,
                mantissa: full >> shared,
                numerator_shift: 0,
                denominator_shift: gap - shared,
            }
        }
    };
    Ok(Some(dyadic))
}

impl<I: CheckedInt> Fraction<I> {
    /// The exact value of a finite float. Both zeros map to the single zero fraction.
    ///
    /// Fails with `InvalidArgument` on NaN or an infinity, and with `Overflow` when a
    /// fixed-width backing cannot hold the numerator or the power-of-two denominator.
    pub fn try_from_float<F: IeeeFloat>(value: F) -> Result<Self> {
        let Some(dyadic) = decompose(value)? else {
            return Ok(Self::zero());
        };
        // Sign first, so the fixed-width minimum is reachable.
        let mantissa = i128::from(dyadic.mantissa);
        let signed = if dyadic.negative { -mantissa } else { mantissa };
        let numerator = I::from_i128(signed)?.try_shl(dyadic.numerator_shift)?;
        let denominator = I::one().try_shl(dyadic.denominator_shift)?;
        Self::reduce(numerator, denominator, true)
    }

    pub fn try_from_f64(value: f64) -> Result<Self> {
        Self::try_from_float(value)
    }

    pub fn try_from_f32(value: f32) -> Result<Self> {
        Self::try_from_float(value)
    }

    /// The nearest float after rounding to `DECIMAL_DIGITS + 2` significant digits. Values
    /// beyond the float's range come back infinite.
    pub fn to_float<F: IeeeFloat>(&self) -> Result<F> {
        if self.is_zero() {
            return Ok(parse_float("0"));
        }
        let (digits, exponent) = self.widen().to_significant(F::DECIMAL_DIGITS + 2)?;
        Ok(parse_float(&format!("{digits}e{exponent}")))
    }

    /// Like [`to_float`](Self::to_float), but fails with `NoExactValue` unless decomposing
    /// the float gives back exactly this fraction.
    pub fn to_float_exact<F: IeeeFloat>(&self) -> Result<F> {
        let value = self.to_float::<F>()?;
        match Self::try_from_float(value) {
            Ok(back) if back == *self => Ok(value),
            _ => Err(FractionError::NoExactValue),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        self.to_float()
    }

    pub fn to_f32(&self) -> Result<f32> {
        self.to_float()
    }

    pub fn to_f64_exact(&self) -> Result<f64> {
        self.to_float_exact()
    }

    pub fn to_f32_exact(&self) -> Result<f32> {
        self.to_float_exact()
    }
}

fn parse_float<F: IeeeFloat>(text: &str) -> F {
    // `digits e exponent` is always well formed; the parser saturates to infinity or zero.
    text.parse().unwrap_or(F::NAN)
}

impl BigFraction {
    /// `(m, k)` with `self ≈ m · 10^k`, where `|m|` has exactly `digits` decimal digits,
    /// rounded half-even. `digits` must be positive and `self` non-zero.
    pub(crate) fn to_significant(&self, digits: u32) -> Result<(BigInt, i64)> {
        let estimate = decimal_len(&self.numerator) - decimal_len(&self.denominator);
        let mut exponent = estimate - (i64::from(digits) - 1);
        let lower = BigInt::from(10u8).pow(digits - 1);

        let mut scaled = self.scaled_by_pow10(-exponent)?;
        if scaled.integer_part()?.abs() < lower {
            exponent -= 1;
            scaled = self.scaled_by_pow10(-exponent)?;
        }
        let mut rounded = scaled.round(RoundingMode::HalfEven)?;
        if rounded.abs() == &lower * 10u8 {
            rounded /= 10u8;
            exponent += 1;
        }
        Ok((rounded, exponent))
    }

    fn scaled_by_pow10(&self, exponent: i64) -> Result<Self> {
        let magnitude = u32::try_from(exponent.unsigned_abs())
            .map_err(|_| FractionError::invalid("decimal exponent out of range"))?;
        let factor = Self::from_integer(BigInt::from(10u8).pow(magnitude));
        if exponent >= 0 {
            self.checked_mul(&factor)
        } else {
            self.checked_div(&factor)
        }
    }
}

fn decimal_len(value: &BigInt) -> i64 {
    value.magnitude().to_string().len() as i64
}
