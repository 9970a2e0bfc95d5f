use std::fmt;

use crate::error::Result;
use crate::fraction::Fraction;
use crate::int::CheckedInt;
use crate::rounding::RoundingMode;

/// How `N/D` text treats whole numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatioStyle {
    /// Always `N/D`, so `3` renders as `3/1`.
    #[default]
    Full,
    /// Whole numbers render as `N`.
    OmitUnitDenominator,
}

impl<I: CheckedInt> Fraction<I> {
    pub fn to_ratio_string(&self, style: RatioStyle) -> String {
        match style {
            RatioStyle::OmitUnitDenominator if self.is_integer() => self.numerator.to_string(),
            _ => format!("{}/{}", self.numerator, self.denominator),
        }
    }

    /// `W N/D`, with the sign carried by the whole part only: `-7/2` renders as `-3 1/2`.
    /// Proper fractions render as `N/D` and whole numbers as `W`.
    pub fn to_mixed_string(&self) -> Result<String> {
        if self.is_integer() {
            return Ok(self.numerator.to_string());
        }
        let (whole, remainder) = self.numerator.try_div_rem(&self.denominator)?;
        if whole.is_zero() {
            return Ok(self.to_ratio_string(RatioStyle::Full));
        }
        Ok(format!("{whole} {}/{}", remainder.try_abs()?, self.denominator))
    }

    /// Fixed-point decimal `±I.FFFF` with exactly `scale` fractional digits.
    pub fn to_decimal_string(&self, scale: u32, mode: RoundingMode) -> Result<String> {
        let factor = I::from_i128(10)?.try_pow(scale)?;
        let scaled = self.checked_mul_int(&factor)?.round(mode)?;
        let text = scaled.to_str_radix(10);
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", text.as_str()),
        };
        if scale == 0 {
            return Ok(format!("{sign}{digits}"));
        }
        let scale = scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        Ok(format!("{sign}{whole}.{fraction}"))
    }
}

/// `N/D`; with a precision (`{:.3}`) the value is written as a half-even decimal instead.
impl<I: CheckedInt> fmt::Display for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => {
                // Scaled through the big backing so a fixed-width value cannot overflow here.
                let scale = u32::try_from(precision).unwrap_or(u32::MAX);
                match self.widen().to_decimal_string(scale, RoundingMode::HalfEven) {
                    Ok(text) => f.write_str(&text),
                    Err(_) => write!(f, "{}/{}", self.numerator, self.denominator),
                }
            }
            None => write!(f, "{}/{}", self.numerator, self.denominator),
        }
    }
}
