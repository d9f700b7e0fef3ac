use thiserror::Error;

/// Errors produced by fixed-point arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The result does not fit in the 128-bit scaled representation.
    #[error("Decimal arithmetic overflow")]
    Overflow,

    /// Subtraction would produce a negative value.
    #[error("Decimal arithmetic underflow: result would be negative")]
    NegativeResult,

    #[error("Division by zero")]
    DivisionByZero,

    /// A decimal string could not be parsed.
    #[error("Invalid decimal {input:?}: {reason}")]
    InvalidDecimal { input: String, reason: &'static str },
}
