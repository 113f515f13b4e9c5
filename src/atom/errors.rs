/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for wavefunction evaluation

use thiserror::Error;

/// Result type for wavefunction evaluation
pub type Result<T> = std::result::Result<T, WavefunctionError>;

/// Error type for wavefunction-related operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WavefunctionError {
    /// Quantum numbers outside n ≥ 1, 0 ≤ l ≤ n-1, -l ≤ m ≤ l
    #[error("Invalid quantum numbers: {0}")]
    InvalidQuantumNumbers(String),

    /// Nuclear charge or Bohr radius unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Propagation of error from utils module
    #[error("Math error: {0}")]
    Math(#[from] crate::utils::errors::MathError),
}
