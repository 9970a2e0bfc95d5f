use std::fmt;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;

/// How to pick an integer when a value falls between two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest; ties away from zero.
    HalfUp,
    /// Nearest; ties toward zero.
    HalfDown,
    /// Nearest; ties to the even neighbour.
    HalfEven,
    /// Only integers are accepted; anything else is `RoundingRequired`.
    Unnecessary,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::Floor => "floor",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Unnecessary => "unnecessary",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| FractionError::invalid(format!("unknown rounding mode `{s}`")))
    }
}

impl<I: CheckedInt> Fraction<I> {
    /// Integers come back unchanged under every mode, `Unnecessary` included. Since the
    /// fraction is in lowest terms, an exact half can only occur when the denominator is 2.
    pub fn round(&self, mode: RoundingMode) -> Result<I> {
        if self.is_integer() {
            return Ok(self.numerator.clone());
        }
        let (truncated, remainder) = self.numerator.try_div_rem(&self.denominator)?;
        let away_from_zero = match mode {
            RoundingMode::Unnecessary => return Err(FractionError::RoundingRequired),
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            // Sign of the value, not of `truncated`: -1/2 truncates to 0.
            RoundingMode::Ceiling => self.is_positive(),
            RoundingMode::Floor => self.is_negative(),
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
                let two = I::one().try_add(&I::one())?;
                if self.denominator == two {
                    match mode {
                        RoundingMode::HalfUp => true,
                        RoundingMode::HalfDown => false,
                        _ => !truncated.try_rem(&two)?.is_zero(),
                    }
                } else {
                    // |r| > d/2, written so nothing can overflow.
                    let magnitude = remainder.try_abs()?;
                    magnitude > self.denominator.try_sub(&magnitude)?
                }
            }
        };
        if !away_from_zero {
            return Ok(truncated);
        }
        if self.is_negative() {
            truncated.try_sub(&I::one())
        } else {
            truncated.try_add(&I::one())
        }
    }

    pub fn floor(&self) -> Result<I> {
        self.round(RoundingMode::Floor)
    }

    pub fn ceil(&self) -> Result<I> {
        self.round(RoundingMode::Ceiling)
    }

    pub fn trunc(&self) -> Result<I> {
        self.round(RoundingMode::Down)
    }

    /// Rounds to the nearest multiple of `1/denominator`: `round(self · d, mode) / d`.
    pub fn round_to_denominator(&self, denominator: &I, mode: RoundingMode) -> Result<Self> {
        if !denominator.is_positive() {
            return Err(FractionError::invalid(format!(
                "denominator must be positive, got {denominator}"
            )));
        }
        let scaled = self.checked_mul_int(denominator)?.round(mode)?;
        Self::new(scaled, denominator.clone())
    }
}
