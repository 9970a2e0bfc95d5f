use std::cmp::Ordering;
use std::collections::HashSet;

use num_bigint::BigInt;

use super::*;
use crate::{Fraction128, Fraction32, Fraction64};

fn frac(n: i64, d: i64) -> Fraction64 {
    Fraction64::new(n, d).unwrap()
}

fn big(n: i64, d: i64) -> BigFraction {
    BigFraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
}

#[test]
fn construction_reduces_and_normalizes_sign() {
    let value = frac(6, -4);
    assert_eq!((*value.numerator(), *value.denominator()), (-3, 2));
    let value = frac(-6, -4);
    assert_eq!((*value.numerator(), *value.denominator()), (3, 2));
    let value = big(100, 75);
    assert_eq!(value.into_parts(), (BigInt::from(4), BigInt::from(3)));
}

#[test]
fn zero_has_one_representation() {
    assert_eq!(frac(0, -7), Fraction64::zero());
    assert_eq!(frac(0, 3).into_parts(), (0, 1));
    assert_eq!(Fraction64::default(), Fraction64::zero());
    assert_eq!(Fraction64::new(5, 0), Err(FractionError::DivideByZero));
    assert_eq!(Fraction64::new(0, 0), Err(FractionError::DivideByZero));
}

#[test]
fn equal_values_are_equal_and_hash_alike() {
    let mut seen = HashSet::new();
    seen.insert(frac(1, 2));
    seen.insert(frac(2, 4));
    seen.insert(frac(-3, -6));
    assert_eq!(seen.len(), 1);
}

#[test]
fn minimum_numerators() {
    let min = Fraction64::new(i64::MIN, 1).unwrap();
    assert_eq!(min.numerator(), &i64::MIN);
    assert_eq!(min.checked_neg(), Err(FractionError::Overflow));
    assert_eq!(min.checked_abs(), Err(FractionError::Overflow));
    assert!(!min.is_proper());

    // Reduction divides by the gcd before the sign is moved.
    assert_eq!(Fraction64::new(i64::MIN, i64::MIN), Err(FractionError::Overflow));
    let value = Fraction64::new(i64::MIN, -2).unwrap();
    assert_eq!(value.into_parts(), (1 << 62, 1));
    assert_eq!(Fraction64::new(1, i64::MIN), Err(FractionError::Overflow));
    assert_eq!(Fraction64::new(2, i64::MIN).unwrap().into_parts(), (-1, 1 << 62));
}

#[test]
fn ordering_compares_values() {
    assert!(frac(1, 3) < frac(1, 2));
    assert!(frac(-1, 2) < frac(-1, 3));
    assert!(frac(-1, 2) < frac(0, 1));
    assert_eq!(frac(2, 4).cmp(&frac(1, 2)), Ordering::Equal);

    let near_max = Fraction64::new(i64::MAX, i64::MAX - 1).unwrap();
    let nearer = Fraction64::new(i64::MAX - 1, i64::MAX - 2).unwrap();
    assert!(near_max < nearer);

    let mut values = vec![frac(3, 4), frac(-5, 2), frac(1, 7), frac(0, 1), frac(5, 7)];
    values.sort();
    assert_eq!(
        values,
        vec![frac(-5, 2), frac(0, 1), frac(1, 7), frac(5, 7), frac(3, 4)]
    );
}

#[test]
fn predicates() {
    assert!(frac(3, 1).is_integer());
    assert!(!frac(3, 2).is_integer());
    assert!(frac(-1, 2).is_proper());
    assert!(!frac(-1, 1).is_proper());
    assert!(frac(0, 1).is_proper());
    assert_eq!(frac(-2, 3).signum(), -1);
    assert_eq!(frac(0, 3).signum(), 0);
    assert!(frac(2, 3).is_positive());
    assert!(frac(-2, 3).is_negative());
    assert!(Fraction64::zero().is_zero());
}

#[test]
fn integer_and_fractional_parts_truncate_toward_zero() {
    assert_eq!(frac(7, 2).integer_part(), Ok(3));
    assert_eq!(frac(7, 2).fractional_part(), Ok(frac(1, 2)));
    assert_eq!(frac(-7, 2).integer_part(), Ok(-3));
    assert_eq!(frac(-7, 2).fractional_part(), Ok(frac(-1, 2)));
    assert_eq!(frac(4, 1).fractional_part(), Ok(Fraction64::zero()));
}

#[test]
fn reciprocal_and_sign() {
    assert_eq!(frac(-2, 3).checked_recip(), Ok(frac(-3, 2)));
    assert_eq!(Fraction64::zero().checked_recip(), Err(FractionError::DivideByZero));
    assert_eq!(frac(2, 3).with_sign(-1), Ok(frac(-2, 3)));
    assert_eq!(frac(-2, 3).with_sign(5), Ok(frac(2, 3)));
    assert_eq!(frac(-2, 3).with_sign(-1), Ok(frac(-2, 3)));
    assert_eq!(frac(2, 3).with_sign(0), Ok(Fraction64::zero()));
}

#[test]
fn mediant_lies_between() {
    let a = frac(1, 3);
    let b = frac(1, 2);
    let m = a.mediant(&b).unwrap();
    assert_eq!(m, frac(2, 5));
    assert!(a < m && m < b);
    assert_eq!(frac(1, 2).mediant(&frac(1, 2)), Ok(frac(1, 2)));
}

#[test]
fn widening_and_narrowing() {
    let value = Fraction32::new(-7, 12).unwrap();
    let wide = value.widen();
    assert_eq!(wide, big(-7, 12));
    assert_eq!(wide.narrow::<i32>(), Ok(value));
    assert_eq!(wide.narrow::<i128>(), Ok(Fraction128::new(-7, 12).unwrap()));

    let huge = BigFraction::new(BigInt::from(1) << 40u32, BigInt::from(3)).unwrap();
    assert_eq!(huge.narrow::<i32>(), Err(FractionError::NoExactValue));
    assert!(huge.narrow::<i64>().is_ok());
}

#[test]
fn integer_values_convert_exactly() {
    assert_eq!(frac(-8, 2).to_integer_exact(), Ok(-4));
    assert_eq!(frac(1, 2).to_integer_exact(), Err(FractionError::NoExactValue));
}
