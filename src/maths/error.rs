//! Errors of the exact integer helpers.
//!
//! Floating-point domain errors are never reported here; they produce NaN.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },
    #[error("division by zero in {op}")]
    DivisionByZero { op: &'static str },
    #[error("{op} requires a positive argument, got {value}")]
    NonPositive { op: &'static str, value: i64 },
}

pub type Result<T> = core::result::Result<T, MathError>;
