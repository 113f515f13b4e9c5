/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Azimuthal factor T_m(φ) and spherical harmonic Y_{l,m}(θ, φ)
//!
//! T_m(φ) = e^{imφ}/√(2π) and Y_{l,m} = S_{l,m}(θ)·T_m(φ). Each quantity is
//! exposed as its real projection, imaginary projection, and the pair.

use super::legendre::polar_factor;
use crate::atom::Result;
use crate::utils::constants::INV_SQRT_2PI;
use num_complex::Complex64;

/// Real part of T_m(φ): cos(mφ)/√(2π)
pub fn azimuthal_real(m: i32, phi: f64) -> f64 {
    INV_SQRT_2PI * (f64::from(m) * phi).cos()
}

/// Imaginary part of T_m(φ): sin(mφ)/√(2π)
pub fn azimuthal_imag(m: i32, phi: f64) -> f64 {
    INV_SQRT_2PI * (f64::from(m) * phi).sin()
}

/// T_m(φ) as a complex pair
pub fn azimuthal(m: i32, phi: f64) -> Complex64 {
    Complex64::new(azimuthal_real(m, phi), azimuthal_imag(m, phi))
}

/// Real part of Y_{l,m}(θ, φ)
pub fn spherical_harmonic_real(l: i32, m: i32, theta: f64, phi: f64) -> Result<f64> {
    Ok(polar_factor(l, m, theta)? * azimuthal_real(m, phi))
}

/// Imaginary part of Y_{l,m}(θ, φ)
pub fn spherical_harmonic_imag(l: i32, m: i32, theta: f64, phi: f64) -> Result<f64> {
    Ok(polar_factor(l, m, theta)? * azimuthal_imag(m, phi))
}

/// Y_{l,m}(θ, φ) as a complex pair
pub fn spherical_harmonic(l: i32, m: i32, theta: f64, phi: f64) -> Result<Complex64> {
    let s = polar_factor(l, m, theta)?;
    Ok(Complex64::new(
        s * azimuthal_real(m, phi),
        s * azimuthal_imag(m, phi),
    ))
}
