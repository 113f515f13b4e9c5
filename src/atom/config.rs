/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Evaluation context of a hydrogen-like atom
//!
//! The nuclear charge and Bohr radius are bound here and passed by reference
//! through every Z- or a0-dependent operation, so different ions can be
//! evaluated side by side.

use super::errors::{Result, WavefunctionError};
use super::quantum::QuantumNumbers;
use crate::radial;
use crate::utils::constants::{BOHR_RADIUS_ANGSTROM, BOHR_RADIUS_AU, HYDROGEN_CHARGE};
use crate::wavefunction;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A one-electron atom or ion with nuclear charge `z`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrogenLike {
    /// Nuclear charge in elementary-charge units
    pub z: u32,
    /// Bohr radius in the caller's length unit
    pub a0: f64,
}

impl Default for HydrogenLike {
    fn default() -> Self {
        Self {
            z: HYDROGEN_CHARGE,
            a0: BOHR_RADIUS_AU,
        }
    }
}

impl HydrogenLike {
    /// Create a validated context
    ///
    /// # Arguments
    ///
    /// * `z` - Nuclear charge (≥ 1)
    /// * `a0` - Bohr radius (finite, > 0)
    pub fn new(z: u32, a0: f64) -> Result<Self> {
        let atom = Self { z, a0 };
        atom.validate()?;
        Ok(atom)
    }

    /// Hydrogen in atomic units
    pub fn hydrogen() -> Self {
        Self::default()
    }

    /// Ion of charge `z` with lengths measured in Angstroms
    pub fn in_angstroms(z: u32) -> Result<Self> {
        Self::new(z, BOHR_RADIUS_ANGSTROM)
    }

    /// Check that the context can be used for evaluation
    pub fn validate(&self) -> Result<()> {
        if self.z == 0 {
            return Err(WavefunctionError::InvalidConfiguration(
                "nuclear charge must be at least 1".to_string(),
            ));
        }
        if !self.a0.is_finite() || self.a0 <= 0.0 {
            return Err(WavefunctionError::InvalidConfiguration(format!(
                "Bohr radius must be finite and positive, got {}",
                self.a0
            )));
        }
        Ok(())
    }

    /// The scale 2Z/(n·a0) shared by the radial seed and recurrence
    pub fn radial_scale(&self, n: i32) -> f64 {
        2.0 * f64::from(self.z) / (f64::from(n) * self.a0)
    }

    /// Leading radial coefficient b_0 for the state
    pub fn normalization_seed(&self, qn: QuantumNumbers) -> Result<f64> {
        radial::normalization_seed(self, qn.n, qn.l)
    }

    /// Radial polynomial coefficients b_0..b_{n-l-1} for the state
    pub fn coefficients(&self, qn: QuantumNumbers) -> Result<Vec<f64>> {
        radial::radial_coefficients(self, qn.n, qn.l)
    }

    /// Radial wavefunction R_{n,l}(r)
    pub fn radial(&self, qn: QuantumNumbers, r: f64) -> Result<f64> {
        radial::radial_wavefunction(self, qn.n, qn.l, r)
    }

    /// Real part of ψ
    pub fn psi_real(&self, qn: QuantumNumbers, r: f64, theta: f64, phi: f64) -> Result<f64> {
        wavefunction::psi_real(self, qn.n, qn.l, qn.m, r, theta, phi)
    }

    /// Imaginary part of ψ
    pub fn psi_imag(&self, qn: QuantumNumbers, r: f64, theta: f64, phi: f64) -> Result<f64> {
        wavefunction::psi_imag(self, qn.n, qn.l, qn.m, r, theta, phi)
    }

    /// ψ_{n,l,m}(r, θ, φ)
    pub fn psi(&self, qn: QuantumNumbers, r: f64, theta: f64, phi: f64) -> Result<Complex64> {
        wavefunction::psi(self, qn.n, qn.l, qn.m, r, theta, phi)
    }

    /// |ψ|² at a point
    pub fn probability_density(
        &self,
        qn: QuantumNumbers,
        r: f64,
        theta: f64,
        phi: f64,
    ) -> Result<f64> {
        wavefunction::probability_density(self, qn.n, qn.l, qn.m, r, theta, phi)
    }
}
