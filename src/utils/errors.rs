/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors raised by the numeric primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// An integer or floating-point result exceeded its representable range
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    /// An intermediate result left the real domain (e.g. a fractional power of a negative base)
    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    /// A denominator evaluated to zero
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Invalid argument passed to a numeric routine
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, MathError>;
