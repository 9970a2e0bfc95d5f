#![cfg(feature = "serde")]

use exact_fraction::{BigFraction, BigInt, Fraction64, FractionError};

#[test]
fn fixed_width_fractions_serialize_as_components() {
    let value = Fraction64::new(-6, 4).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"numerator":-3,"denominator":2}"#);
    let back: Fraction64 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn deserialization_reduces() {
    let value: Fraction64 = serde_json::from_str(r#"{"numerator":10,"denominator":-4}"#).unwrap();
    assert_eq!(value, Fraction64::new(-5, 2).unwrap());
}

#[test]
fn zero_denominators_are_rejected() {
    let err = serde_json::from_str::<Fraction64>(r#"{"numerator":1,"denominator":0}"#)
        .unwrap_err();
    assert!(err.to_string().contains(&FractionError::DivideByZero.to_string()));
}

#[test]
fn big_fractions_survive_a_round_trip() {
    let value = BigFraction::new(BigInt::from(1) << 100u32, BigInt::from(-3)).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    let back: BigFraction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
