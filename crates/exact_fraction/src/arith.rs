use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::int::CheckedInt;

type IntOp<I> = fn(&I, &I) -> Result<I>;

impl<I: CheckedInt> Fraction<I> {
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_integer() {
            return self.checked_add_int(&rhs.numerator);
        }
        if self.is_integer() {
            return rhs.checked_add_int(&self.numerator);
        }
        self.combine(rhs, I::try_add)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_integer() {
            return self.checked_sub_int(&rhs.numerator);
        }
        self.combine(rhs, I::try_sub)
    }

    /// `n/d + k = (n + d·k)/d`. Any factor shared by the new numerator and `d` would already
    /// divide `n`, so no gcd pass is needed.
    pub fn checked_add_int(&self, k: &I) -> Result<Self> {
        let numerator = self.numerator.try_add(&self.denominator.try_mul(k)?)?;
        Self::reduce(numerator, self.denominator.clone(), true)
    }

    pub fn checked_sub_int(&self, k: &I) -> Result<Self> {
        let numerator = self.numerator.try_sub(&self.denominator.try_mul(k)?)?;
        Self::reduce(numerator, self.denominator.clone(), true)
    }

    fn combine(&self, rhs: &Self, op: IntOp<I>) -> Result<Self> {
        let (n1, d1) = (&self.numerator, &self.denominator);
        let (n2, d2) = (&rhs.numerator, &rhs.denominator);
        if I::BOUNDED {
            // Work over lcm(d1, d2) rather than d1·d2 to keep intermediates in range.
            let g = d1.try_gcd(d2)?;
            let (s1, s2) = (d1.try_div(&g)?, d2.try_div(&g)?);
            let numerator = op(&n1.try_mul(&s2)?, &n2.try_mul(&s1)?)?;
            Self::new(numerator, s1.try_mul(d2)?)
        } else {
            let numerator = op(&n1.try_mul(d2)?, &n2.try_mul(d1)?)?;
            Self::new(numerator, d1.try_mul(d2)?)
        }
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        if I::BOUNDED {
            // (n1/d1)(n2/d2) = (n1/d2')(n2/d1') once gcd(n1, d2) and gcd(n2, d1) are cancelled;
            // the result is then already in lowest terms.
            let g1 = self.numerator.try_gcd(&rhs.denominator)?;
            let g2 = rhs.numerator.try_gcd(&self.denominator)?;
            let numerator = self
                .numerator
                .try_div(&g1)?
                .try_mul(&rhs.numerator.try_div(&g2)?)?;
            let denominator = self
                .denominator
                .try_div(&g2)?
                .try_mul(&rhs.denominator.try_div(&g1)?)?;
            Ok(Self::from_canonical(numerator, denominator))
        } else {
            Self::new(
                self.numerator.try_mul(&rhs.numerator)?,
                self.denominator.try_mul(&rhs.denominator)?,
            )
        }
    }

    pub fn checked_mul_int(&self, k: &I) -> Result<Self> {
        self.checked_mul(&Self::from_integer(k.clone()))
    }

    /// Builds the fraction `numerator / denominator` from two fractions.
    pub fn from_ratio(numerator: &Self, denominator: &Self) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivideByZero);
        }
        if I::BOUNDED {
            numerator.checked_mul(&denominator.checked_recip()?)
        } else {
            Self::new(
                numerator.numerator.try_mul(&denominator.denominator)?,
                numerator.denominator.try_mul(&denominator.numerator)?,
            )
        }
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Self::from_ratio(self, rhs)
    }

    /// `rhs / self`.
    pub fn divide_into(&self, rhs: &Self) -> Result<Self> {
        Self::from_ratio(rhs, self)
    }

    /// Raises to an integer power. `0^0 == 1`; a negative power of zero is `DivideByZero`.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        if exp < 0 {
            if self.is_zero() {
                return Err(FractionError::DivideByZero);
            }
            return self.checked_recip()?.pow_unsigned(exp.unsigned_abs());
        }
        self.pow_unsigned(exp.unsigned_abs())
    }

    fn pow_unsigned(&self, exp: u32) -> Result<Self> {
        if exp == 0 {
            return Ok(Self::one());
        }
        // Powers of coprime integers stay coprime.
        Ok(Self::from_canonical(
            self.numerator.try_pow(exp)?,
            self.denominator.try_pow(exp)?,
        ))
    }

    /// Largest fraction `g` such that both values are integer multiples of `g`:
    /// `gcd(a/b, c/d) = gcd(a, c) / lcm(b, d)`.
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        if self.is_zero() {
            return other.checked_abs();
        }
        if other.is_zero() {
            return self.checked_abs();
        }
        let numerator = self.numerator.try_gcd(&other.numerator)?;
        let denominator = self.denominator.try_lcm(&other.denominator)?;
        Ok(Self::from_canonical(numerator, denominator))
    }

    /// Smallest positive fraction that is an integer multiple of both values:
    /// `lcm(a/b, c/d) = lcm(a, c) / gcd(b, d)`. Zero when either side is zero.
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        let numerator = self.numerator.try_lcm(&other.numerator)?;
        let denominator = self.denominator.try_gcd(&other.denominator)?;
        Ok(Self::from_canonical(numerator, denominator))
    }

    pub fn try_sum<'a>(values: impl IntoIterator<Item = &'a Self>) -> Result<Self>
    where
        I: 'a,
    {
        values
            .into_iter()
            .try_fold(Self::zero(), |acc, value| acc.checked_add(value))
    }

    pub fn try_product<'a>(values: impl IntoIterator<Item = &'a Self>) -> Result<Self>
    where
        I: 'a,
    {
        values
            .into_iter()
            .try_fold(Self::one(), |acc, value| acc.checked_mul(value))
    }
}
