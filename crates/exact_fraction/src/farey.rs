use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FareyMode {
    /// Smallest sequence member strictly greater than the value.
    Next,
    /// Largest sequence member strictly less than the value.
    Prev,
    /// Sequence member nearest to the value (the value itself when it is a member).
    Closest,
}

impl FareyMode {
    fn mirrored(self) -> Self {
        match self {
            FareyMode::Next => FareyMode::Prev,
            FareyMode::Prev => FareyMode::Next,
            FareyMode::Closest => FareyMode::Closest,
        }
    }
}

impl fmt::Display for FareyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FareyMode::Next => "next",
            FareyMode::Prev => "prev",
            FareyMode::Closest => "closest",
        })
    }
}

impl FromStr for FareyMode {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(FareyMode::Next),
            "prev" | "previous" => Ok(FareyMode::Prev),
            "closest" | "nearest" => Ok(FareyMode::Closest),
            _ => Err(FractionError::invalid(format!("unknown farey mode `{s}`"))),
        }
    }
}

impl<I: CheckedInt> Fraction<I> {
    pub fn farey_next(&self, max_denominator: &I) -> Result<Self> {
        self.farey(max_denominator, FareyMode::Next)
    }

    pub fn farey_prev(&self, max_denominator: &I) -> Result<Self> {
        self.farey(max_denominator, FareyMode::Prev)
    }

    /// Best approximation with a denominator no larger than `max_denominator`.
    pub fn farey_closest(&self, max_denominator: &I) -> Result<Self> {
        self.farey(max_denominator, FareyMode::Closest)
    }

    pub fn farey(&self, max_denominator: &I, mode: FareyMode) -> Result<Self> {
        if !max_denominator.is_positive() {
            return Err(FractionError::invalid(format!(
                "farey order must be positive, got {max_denominator}"
            )));
        }
        let n = max_denominator;
        if mode == FareyMode::Closest && self.denominator <= *n {
            return Ok(self.clone());
        }
        if self.is_integer() {
            let scaled = self.numerator.try_mul(n)?;
            let numerator = match mode {
                FareyMode::Next => scaled.try_add(&I::one())?,
                _ => scaled.try_sub(&I::one())?,
            };
            return Self::new(numerator, n.clone());
        }
        if self.is_negative() {
            return self
                .checked_neg()?
                .farey(n, mode.mirrored())?
                .checked_neg();
        }
        if !self.is_proper() {
            let whole = self.integer_part()?;
            return self
                .fractional_part()?
                .farey(n, mode)?
                .checked_add_int(&whole);
        }
        self.farey_unit_interval(n, mode)
    }

    fn farey_unit_interval(&self, n: &I, mode: FareyMode) -> Result<Self> {
        let (p, q) = (&self.numerator, &self.denominator);
        let (mut a, mut b) = (I::zero(), I::one());
        let (mut c, mut d) = (I::one(), I::one());
        let mut steps = 0u64;

        loop {
            let mediant_den = b.try_add(&d)?;
            if mediant_den > *n {
                break;
            }
            let mediant_num = a.try_add(&c)?;
            // A tie means the mediant is the value itself; for Next it becomes the lower bound
            // so the search keeps closing in from above, otherwise the upper bound.
            let lower = match I::cmp_ratio(&mediant_num, &mediant_den, p, q) {
                Ordering::Less => true,
                Ordering::Equal => mode == FareyMode::Next,
                Ordering::Greater => false,
            };
            if lower {
                (a, b) = (mediant_num, mediant_den);
            } else {
                (c, d) = (mediant_num, mediant_den);
            }
            steps += 1;
        }
        trace!(steps, %mode, "farey search finished");

        let lower = Self::from_canonical(a, b);
        let upper = Self::from_canonical(c, d);
        match mode {
            FareyMode::Next => Ok(upper),
            FareyMode::Prev => Ok(lower),
            FareyMode::Closest => {
                // Against the midpoint (a·d + c·b) / 2bd, whose terms are bounded by the order.
                let (a, b) = (&lower.numerator, &lower.denominator);
                let (c, d) = (&upper.numerator, &upper.denominator);
                let mid_num = a.try_mul(d)?.try_add(&c.try_mul(b)?)?;
                let two = I::one().try_add(&I::one())?;
                let mid_den = two.try_mul(b)?.try_mul(d)?;
                if I::cmp_ratio(p, q, &mid_num, &mid_den) == Ordering::Greater {
                    Ok(upper)
                } else {
                    Ok(lower)
                }
            }
        }
    }
}
