use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::error::{FractionError, Result};
use crate::fraction::{BigFraction, Fraction};
use crate::int::CheckedInt;

fn settle(result: Result<BigFraction>) -> BigFraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! big_binop {
    ($op:ident, $method:ident, $checked:ident, $op_assign:ident, $method_assign:ident) => {
        impl $op<&BigFraction> for &BigFraction {
            type Output = BigFraction;

            fn $method(self, rhs: &BigFraction) -> BigFraction {
                settle(self.$checked(rhs))
            }
        }

        impl $op<BigFraction> for BigFraction {
            type Output = BigFraction;

            fn $method(self, rhs: BigFraction) -> BigFraction {
                settle(self.$checked(&rhs))
            }
        }

        impl $op<&BigFraction> for BigFraction {
            type Output = BigFraction;

            fn $method(self, rhs: &BigFraction) -> BigFraction {
                settle(self.$checked(rhs))
            }
        }

        impl $op_assign<BigFraction> for BigFraction {
            fn $method_assign(&mut self, rhs: BigFraction) {
                *self = settle(self.$checked(&rhs));
            }
        }

        impl $op_assign<&BigFraction> for BigFraction {
            fn $method_assign(&mut self, rhs: &BigFraction) {
                *self = settle(self.$checked(rhs));
            }
        }
    };
}

big_binop!(Add, add, checked_add, AddAssign, add_assign);
big_binop!(Sub, sub, checked_sub, SubAssign, sub_assign);
big_binop!(Mul, mul, checked_mul, MulAssign, mul_assign);
// # Panics
// Division by a zero fraction panics, like integer division.
big_binop!(Div, div, checked_div, DivAssign, div_assign);

impl Neg for BigFraction {
    type Output = BigFraction;

    fn neg(self) -> BigFraction {
        let (numerator, denominator) = self.into_parts();
        Fraction::from_canonical(-numerator, denominator)
    }
}

impl Neg for &BigFraction {
    type Output = BigFraction;

    fn neg(self) -> BigFraction {
        Fraction::from_canonical(-&self.numerator, self.denominator.clone())
    }
}

impl Zero for BigFraction {
    fn zero() -> Self {
        Fraction::zero()
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for BigFraction {
    fn one() -> Self {
        Fraction::one()
    }
}

impl Sum for BigFraction {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Fraction::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a BigFraction> for BigFraction {
    fn sum<It: Iterator<Item = &'a BigFraction>>(iter: It) -> Self {
        iter.fold(Fraction::zero(), |acc, value| acc + value)
    }
}

impl Product for BigFraction {
    fn product<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Fraction::one(), |acc, value| acc * value)
    }
}

impl<'a> Product<&'a BigFraction> for BigFraction {
    fn product<It: Iterator<Item = &'a BigFraction>>(iter: It) -> Self {
        iter.fold(Fraction::one(), |acc, value| acc * value)
    }
}

impl<I: CheckedInt> From<I> for Fraction<I> {
    fn from(value: I) -> Self {
        Fraction::from_integer(value)
    }
}

macro_rules! big_from_primitive {
    ($($t:ty),*) => {$(
        impl From<$t> for BigFraction {
            fn from(value: $t) -> Self {
                Fraction::from_integer(BigInt::from(value))
            }
        }
    )*};
}

big_from_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<I: CheckedInt> TryFrom<f64> for Fraction<I> {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::try_from_f64(value)
    }
}

impl<I: CheckedInt> TryFrom<f32> for Fraction<I> {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self> {
        Self::try_from_f32(value)
    }
}

impl<I: CheckedInt> TryFrom<Ratio<I>> for Fraction<I> {
    type Error = FractionError;

    /// Re-reduces, since a `Ratio` built with `new_raw` may not be normalized.
    fn try_from(value: Ratio<I>) -> Result<Self> {
        Fraction::new(value.numer().clone(), value.denom().clone())
    }
}

impl<I: CheckedInt> Fraction<I> {
    /// The same value as a `num-rational` ratio.
    pub fn to_ratio(&self) -> Ratio<I> {
        Ratio::new_raw(self.numerator.clone(), self.denominator.clone())
    }
}

#[cfg(test)]
mod tests {
    use num_rational::BigRational;

    use super::*;

    fn big(n: i64, d: i64) -> BigFraction {
        BigFraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn operators_follow_the_checked_methods() {
        let a = big(1, 2);
        let b = big(1, 3);
        assert_eq!(&a + &b, big(5, 6));
        assert_eq!(&a - &b, big(1, 6));
        assert_eq!(&a * &b, big(1, 6));
        assert_eq!(&a / &b, big(3, 2));
        assert_eq!(-a.clone(), big(-1, 2));

        let mut acc = big(0, 1);
        acc += &a;
        acc *= big(4, 1);
        acc -= big(1, 1);
        acc /= &b;
        assert_eq!(acc, big(3, 1));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn dividing_by_zero_panics() {
        let _ = big(1, 2) / BigFraction::zero();
    }

    #[test]
    fn sums_and_products() {
        let values = vec![big(1, 2), big(1, 4), big(1, 8)];
        assert_eq!(values.iter().sum::<BigFraction>(), big(7, 8));
        assert_eq!(values.into_iter().product::<BigFraction>(), big(1, 64));
        assert!(<BigFraction as Zero>::zero().is_zero());
        assert!(<BigFraction as One>::one().is_one());
    }

    #[test]
    fn conversions() {
        assert_eq!(BigFraction::from(7u8), big(7, 1));
        assert_eq!(BigFraction::from(-7i64), big(-7, 1));
        assert_eq!(crate::Fraction64::from(-3i64).numerator(), &-3);
        assert_eq!(BigFraction::try_from(0.75f64), Ok(big(3, 4)));
        assert_eq!(BigFraction::try_from(-0.5f32), Ok(big(-1, 2)));
    }

    #[test]
    fn num_rational_interop() {
        let raw = BigRational::new_raw(BigInt::from(6), BigInt::from(-4));
        let value = BigFraction::try_from(raw).unwrap();
        assert_eq!(value, big(-3, 2));
        assert_eq!(value.to_ratio(), BigRational::new(BigInt::from(-3), BigInt::from(2)));

        let zero_den = Ratio::new_raw(1i64, 0i64);
        assert_eq!(
            crate::Fraction64::try_from(zero_den),
            Err(FractionError::DivideByZero)
        );
    }
}
