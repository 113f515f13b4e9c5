/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Full wavefunction ψ_{n,l,m}(r, θ, φ) = R_{n,l}(r)·Y_{l,m}(θ, φ)

use crate::angular::{spherical_harmonic, spherical_harmonic_imag, spherical_harmonic_real};
use crate::atom::{validate_state, HydrogenLike, Result};
use crate::radial::radial_wavefunction;
use num_complex::Complex64;

/// Real part of ψ_{n,l,m}(r, θ, φ)
///
/// # Arguments
///
/// * `atom` - Nuclear charge and Bohr radius
/// * `n`, `l`, `m` - Quantum numbers (n ≥ 1, 0 ≤ l < n, |m| ≤ l)
/// * `r` - Radial distance
/// * `theta` - Polar angle in radians
/// * `phi` - Azimuthal angle in radians
pub fn psi_real(
    atom: &HydrogenLike,
    n: i32,
    l: i32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
) -> Result<f64> {
    validate_state(n, l, m)?;
    Ok(radial_wavefunction(atom, n, l, r)? * spherical_harmonic_real(l, m, theta, phi)?)
}

/// Imaginary part of ψ_{n,l,m}(r, θ, φ)
pub fn psi_imag(
    atom: &HydrogenLike,
    n: i32,
    l: i32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
) -> Result<f64> {
    validate_state(n, l, m)?;
    Ok(radial_wavefunction(atom, n, l, r)? * spherical_harmonic_imag(l, m, theta, phi)?)
}

/// ψ_{n,l,m}(r, θ, φ) as a complex pair
///
/// The radial and angular factors are each evaluated once and combined
/// component-wise, giving the same bits as [`psi_real`] and [`psi_imag`].
pub fn psi(
    atom: &HydrogenLike,
    n: i32,
    l: i32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
) -> Result<Complex64> {
    validate_state(n, l, m)?;
    let radial = radial_wavefunction(atom, n, l, r)?;
    let angular = spherical_harmonic(l, m, theta, phi)?;
    Ok(Complex64::new(radial * angular.re, radial * angular.im))
}

/// Probability density |ψ|² at a point
pub fn probability_density(
    atom: &HydrogenLike,
    n: i32,
    l: i32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
) -> Result<f64> {
    let value = psi(atom, n, l, m, r, theta, phi)?;
    Ok(value.re * value.re + value.im * value.im)
}
