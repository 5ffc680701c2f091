use thiserror::Error;

/// Failure modes surfaced by fraction construction, arithmetic, and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("can't divide by zero")]
    DivideByZero,
    #[error("invalid input")]
    InvalidInput,
    #[error("overflow")]
    Overflow,
}
