/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Quantum numbers of a bound hydrogen-like state

use super::errors::{Result, WavefunctionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Principal, angular-momentum and magnetic quantum numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumNumbers {
    /// Principal quantum number (n ≥ 1)
    pub n: i32,
    /// Angular-momentum quantum number (0 ≤ l ≤ n-1)
    pub l: i32,
    /// Magnetic quantum number (-l ≤ m ≤ l)
    pub m: i32,
}

impl QuantumNumbers {
    /// Create a validated set of quantum numbers
    pub fn new(n: i32, l: i32, m: i32) -> Result<Self> {
        validate_state(n, l, m)?;
        Ok(Self { n, l, m })
    }

    /// Number of radial coefficients, n - l
    pub fn radial_terms(&self) -> usize {
        (self.n - self.l) as usize
    }
}

impl fmt::Display for QuantumNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(n={}, l={}, m={})", self.n, self.l, self.m)
    }
}

/// Check the angular pair: l ≥ 0 and |m| ≤ l
pub fn validate_angular(l: i32, m: i32) -> Result<()> {
    if l < 0 {
        return Err(WavefunctionError::InvalidQuantumNumbers(format!(
            "l={} must be non-negative",
            l
        )));
    }
    // i32::MIN has no absolute value
    if m.checked_abs().map_or(true, |abs_m| abs_m > l) {
        return Err(WavefunctionError::InvalidQuantumNumbers(format!(
            "|m|={} must not exceed l={}",
            m.unsigned_abs(),
            l
        )));
    }
    Ok(())
}

/// Check the radial pair: n ≥ 1 and 0 ≤ l ≤ n-1
pub fn validate_radial(n: i32, l: i32) -> Result<()> {
    if n < 1 {
        return Err(WavefunctionError::InvalidQuantumNumbers(format!(
            "n={} must be at least 1",
            n
        )));
    }
    if l < 0 || l >= n {
        return Err(WavefunctionError::InvalidQuantumNumbers(format!(
            "l={} must lie in 0..={} for n={}",
            l,
            n - 1,
            n
        )));
    }
    Ok(())
}

/// Check the full triple
pub fn validate_state(n: i32, l: i32, m: i32) -> Result<()> {
    validate_radial(n, l)?;
    validate_angular(l, m)
}
