use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::error::{FractionError, Result};
use crate::int::CheckedInt;

/// An exact rational number in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "crate::serde_impl::RawFraction<I>",
        bound(deserialize = "I: CheckedInt + serde::Deserialize<'de>")
    )
)]
pub struct Fraction<I = BigInt> {
    pub(crate) numerator: I,
    pub(crate) denominator: I,
}

/// Arbitrary precision: arithmetic never overflows.
pub type BigFraction = Fraction<BigInt>;

/// Fixed width: every operation is overflow-checked and fails instead of wrapping.
pub type Fraction64 = Fraction<i64>;

impl<I: CheckedInt> Fraction<I> {
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        Self::reduce(numerator, denominator, false)
    }

    /// Reduction engine shared by every constructor.
    ///
    /// `reduced` lets callers that already know `gcd(|n|, d) == 1` skip the gcd pass; sign and
    /// zero are still canonicalized.
    pub(crate) fn reduce(numerator: I, denominator: I, reduced: bool) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivideByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }
        let (mut numerator, mut denominator) = (numerator, denominator);
        if !reduced {
            let g = numerator.try_gcd(&denominator)?;
            if g != I::one() {
                numerator = numerator.try_div(&g)?;
                denominator = denominator.try_div(&g)?;
            }
        }
        if denominator.is_negative() {
            numerator = numerator.try_neg()?;
            denominator = denominator.try_neg()?;
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Trusted constructor: the pair must already be canonical.
    pub(crate) fn from_canonical(numerator: I, denominator: I) -> Self {
        debug_assert!(denominator.is_positive());
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_integer(value: I) -> Self {
        Self::from_canonical(value, I::one())
    }

    pub fn zero() -> Self {
        Self::from_canonical(I::zero(), I::one())
    }

    pub fn one() -> Self {
        Self::from_canonical(I::one(), I::one())
    }

    pub fn numerator(&self) -> &I {
        &self.numerator
    }

    pub fn denominator(&self) -> &I {
        &self.denominator
    }

    pub fn into_parts(self) -> (I, I) {
        (self.numerator, self.denominator)
    }

    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == I::one()
    }

    /// `true` when `|self| < 1`.
    pub fn is_proper(&self) -> bool {
        match self.numerator.try_abs() {
            Ok(magnitude) => magnitude < self.denominator,
            // Only a fixed-width minimum lands here, and it exceeds every denominator.
            Err(_) => false,
        }
    }

    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self::from_canonical(self.numerator.try_neg()?, self.denominator.clone()))
    }

    pub fn checked_abs(&self) -> Result<Self> {
        Ok(Self::from_canonical(self.numerator.try_abs()?, self.denominator.clone()))
    }

    /// `1 / self`, failing with `DivideByZero` on zero.
    pub fn checked_recip(&self) -> Result<Self> {
        Self::reduce(self.denominator.clone(), self.numerator.clone(), true)
    }

    /// Returns `|self|` carrying the sign of `signum` (zero stays zero).
    pub fn with_sign(&self, signum: i32) -> Result<Self> {
        if signum == 0 || self.is_zero() {
            return Ok(Self::zero());
        }
        if (signum < 0) == self.is_negative() {
            Ok(self.clone())
        } else {
            self.checked_neg()
        }
    }

    pub fn integer_part(&self) -> Result<I> {
        self.numerator.try_div(&self.denominator)
    }

    /// `self - trunc(self)`, which keeps the sign of `self`.
    pub fn fractional_part(&self) -> Result<Self> {
        let remainder = self.numerator.try_rem(&self.denominator)?;
        Self::reduce(remainder, self.denominator.clone(), true)
    }

    /// The mediant `(a + c) / (b + d)`, which always lies strictly between two distinct
    /// fractions.
    pub fn mediant(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.numerator.try_add(&other.numerator)?,
            self.denominator.try_add(&other.denominator)?,
        )
    }

    /// Converts to the arbitrary-precision backing; never fails.
    pub fn widen(&self) -> BigFraction {
        Fraction::from_canonical(self.numerator.to_bigint(), self.denominator.to_bigint())
    }

    /// The value as an integer, or `NoExactValue` when the denominator is not 1.
    pub fn to_integer_exact(&self) -> Result<I> {
        if self.is_integer() {
            Ok(self.numerator.clone())
        } else {
            Err(FractionError::NoExactValue)
        }
    }
}

impl BigFraction {
    /// Converts to another backing, failing with `NoExactValue` when either component is out
    /// of the target range.
    pub fn narrow<J: CheckedInt>(&self) -> Result<Fraction<J>> {
        let numerator = J::from_bigint(&self.numerator).ok_or(FractionError::NoExactValue)?;
        let denominator = J::from_bigint(&self.denominator).ok_or(FractionError::NoExactValue)?;
        Ok(Fraction::from_canonical(numerator, denominator))
    }
}

impl<I: CheckedInt> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        I::cmp_ratio(
            &self.numerator,
            &self.denominator,
            &other.numerator,
            &other.denominator,
        )
    }
}

impl<I: CheckedInt> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: CheckedInt> Default for Fraction<I> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests;
