#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    #[error("division by zero")]
    DivideByZero,
    #[error("rounding necessary: value is not an integer")]
    RoundingRequired,
    /// Narrowing to an integer, float or decimal type that cannot hold the value exactly.
    #[error("no exact representation in the target type")]
    NoExactValue,
    #[error("integer overflow")]
    Overflow,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FractionError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T, E = FractionError> = std::result::Result<T, E>;
