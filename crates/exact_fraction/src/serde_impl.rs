use serde::Deserialize;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;

#[doc(hidden)]
#[derive(Deserialize)]
pub struct RawFraction<I> {
    numerator: I,
    denominator: I,
}

impl<I: CheckedInt> TryFrom<RawFraction<I>> for Fraction<I> {
    type Error = FractionError;

    fn try_from(raw: RawFraction<I>) -> Result<Self> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}
