mod arith;
mod division;
mod error;
mod farey;
mod float;
mod fmt;
mod fraction;
mod int;
mod literal;
mod ops;
mod repeating;
mod rounding;
#[cfg(feature = "serde")]
mod serde_impl;

pub use division::DivisionMode;
pub use error::{FractionError, Result};
pub use farey::FareyMode;
pub use float::IeeeFloat;
pub use fmt::RatioStyle;
pub use fraction::{BigFraction, Fraction, Fraction64};
pub use int::CheckedInt;
pub use literal::Literal;
pub use num_bigint::BigInt;
pub use rounding::RoundingMode;

pub type Fraction32 = Fraction<i32>;
pub type Fraction128 = Fraction<i128>;
