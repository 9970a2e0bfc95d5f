use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{FractionError, Result};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub trait CheckedInt: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// `true` when the type has a fixed range and operations may fail with `Overflow`.
    const BOUNDED: bool;

    fn zero() -> Self;
    fn one() -> Self;
    fn from_i128(value: i128) -> Result<Self>;
    fn to_i128(&self) -> Option<i128>;
    fn to_bigint(&self) -> BigInt;
    fn from_bigint(value: &BigInt) -> Option<Self>;

    fn is_zero(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn is_positive(&self) -> bool;

    fn try_add(&self, rhs: &Self) -> Result<Self>;
    fn try_sub(&self, rhs: &Self) -> Result<Self>;
    fn try_mul(&self, rhs: &Self) -> Result<Self>;
    /// Fails on the minimum value of a fixed-width type, which has no positive counterpart.
    fn try_neg(&self) -> Result<Self>;
    fn try_abs(&self) -> Result<Self>;
    fn try_pow(&self, exp: u32) -> Result<Self>;
    fn try_shl(&self, bits: u32) -> Result<Self>;
    /// Truncated division: `self == rhs * q + r` with `r` carrying the sign of `self`.
    fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)>;
    /// Non-negative greatest common divisor, `gcd(0, 0) == 0`.
    fn try_gcd(&self, rhs: &Self) -> Result<Self>;
    /// Lowercase digits, leading `-` for negative values. `radix` must lie in `2..=36`.
    fn to_str_radix(&self, radix: u32) -> String;

    /// Compares `a/b` with `c/d`. Both `b` and `d` must be positive.
    fn cmp_ratio(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering;

    fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.try_div_rem(rhs)?.0)
    }

    fn try_rem(&self, rhs: &Self) -> Result<Self> {
        Ok(self.try_div_rem(rhs)?.1)
    }

    fn try_lcm(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        let g = self.try_gcd(rhs)?;
        self.try_abs()?.try_div(&g)?.try_mul(&rhs.try_abs()?)
    }
}

macro_rules! impl_checked_primitive {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl CheckedInt for $t {
            const BOUNDED: bool = true;

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn from_i128(value: i128) -> Result<Self> {
                <$t>::try_from(value).map_err(|_| FractionError::Overflow)
            }

            fn to_i128(&self) -> Option<i128> {
                Some(i128::from(*self))
            }

            fn to_bigint(&self) -> BigInt {
                BigInt::from(*self)
            }

            fn from_bigint(value: &BigInt) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn is_negative(&self) -> bool {
                *self < 0
            }

            fn is_positive(&self) -> bool {
                *self > 0
            }

            fn try_add(&self, rhs: &Self) -> Result<Self> {
                self.checked_add(*rhs).ok_or(FractionError::Overflow)
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self> {
                self.checked_sub(*rhs).ok_or(FractionError::Overflow)
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self> {
                self.checked_mul(*rhs).ok_or(FractionError::Overflow)
            }

            fn try_neg(&self) -> Result<Self> {
                self.checked_neg().ok_or(FractionError::Overflow)
            }

            fn try_abs(&self) -> Result<Self> {
                self.checked_abs().ok_or(FractionError::Overflow)
            }

            fn try_pow(&self, exp: u32) -> Result<Self> {
                self.checked_pow(exp).ok_or(FractionError::Overflow)
            }

            fn try_shl(&self, bits: u32) -> Result<Self> {
                if *self == 0 {
                    return Ok(0);
                }
                if bits >= <$t>::BITS {
                    return Err(FractionError::Overflow);
                }
                let shifted = *self << bits;
                if shifted >> bits != *self {
                    return Err(FractionError::Overflow);
                }
                Ok(shifted)
            }

            fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
                if *rhs == 0 {
                    return Err(FractionError::DivideByZero);
                }
                // MIN / -1 is the only overflowing case.
                let quotient = self.checked_div(*rhs).ok_or(FractionError::Overflow)?;
                let remainder = self.checked_rem(*rhs).ok_or(FractionError::Overflow)?;
                Ok((quotient, remainder))
            }

            fn try_gcd(&self, rhs: &Self) -> Result<Self> {
                let (mut a, mut b) = (self.unsigned_abs(), rhs.unsigned_abs());
                while b != 0 {
                    (a, b) = (b, a % b);
                }
                <$t>::try_from(a).map_err(|_| FractionError::Overflow)
            }

            fn to_str_radix(&self, radix: u32) -> String {
                let radix = <$u>::from(radix);
                let mut magnitude = self.unsigned_abs();
                if magnitude == 0 {
                    return "0".to_string();
                }
                let mut digits = Vec::new();
                while magnitude > 0 {
                    digits.push(DIGITS[(magnitude % radix) as usize]);
                    magnitude /= radix;
                }
                if *self < 0 {
                    digits.push(b'-');
                }
                digits.iter().rev().map(|&digit| digit as char).collect()
            }

            fn cmp_ratio(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
                // Continued-fraction comparison: never multiplies, so it cannot overflow.
                let (mut a, mut b, mut c, mut d) = (*a, *b, *c, *d);
                loop {
                    let (q1, r1) = (a.div_euclid(b), a.rem_euclid(b));
                    let (q2, r2) = (c.div_euclid(d), c.rem_euclid(d));
                    if q1 != q2 {
                        return q1.cmp(&q2);
                    }
                    match (r1 == 0, r2 == 0) {
                        (true, true) => return Ordering::Equal,
                        (true, false) => return Ordering::Less,
                        (false, true) => return Ordering::Greater,
                        // r1/b against r2/d orders the same as d/r2 against b/r1.
                        (false, false) => (a, b, c, d) = (d, r2, b, r1),
                    }
                }
            }
        }
    )*};
}

impl_checked_primitive!(i32 => u32, i64 => u64, i128 => u128);

impl CheckedInt for BigInt {
    const BOUNDED: bool = false;

    fn zero() -> Self {
        <BigInt as Zero>::zero()
    }

    fn one() -> Self {
        BigInt::from(1u8)
    }

    fn from_i128(value: i128) -> Result<Self> {
        Ok(BigInt::from(value))
    }

    fn to_i128(&self) -> Option<i128> {
        ToPrimitive::to_i128(self)
    }

    fn to_bigint(&self) -> BigInt {
        self.clone()
    }

    fn from_bigint(value: &BigInt) -> Option<Self> {
        Some(value.clone())
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Signed::is_negative(self)
    }

    fn is_positive(&self) -> bool {
        Signed::is_positive(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn try_neg(&self) -> Result<Self> {
        Ok(-self)
    }

    fn try_abs(&self) -> Result<Self> {
        Ok(Signed::abs(self))
    }

    fn try_pow(&self, exp: u32) -> Result<Self> {
        Ok(num_traits::Pow::pow(self, exp))
    }

    fn try_shl(&self, bits: u32) -> Result<Self> {
        Ok(self << bits)
    }

    fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if Zero::is_zero(rhs) {
            return Err(FractionError::DivideByZero);
        }
        Ok(Integer::div_rem(self, rhs))
    }

    fn try_gcd(&self, rhs: &Self) -> Result<Self> {
        Ok(Integer::gcd(self, rhs))
    }

    fn to_str_radix(&self, radix: u32) -> String {
        BigInt::to_str_radix(self, radix)
    }

    fn cmp_ratio(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        (a * d).cmp(&(c * b))
    }
}
