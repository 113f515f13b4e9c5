/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Radial wavefunction R_{n,l}(r) = r^l·e^{-Zr/(n·a0)}·Σ_j b_j·r^j
//!
//! The polynomial alternates in sign and, for large n with small l, its
//! terms grow far beyond the value they sum to. Horner's rule carries a
//! running bound Σ|b_j|·|r|^j next to the sum; once the rounding error that
//! bound allows exceeds [`PRECISION_TOLERANCE`] of the natural scale
//! (2Z/(n·a0))^{3/2}, the value is refused as `NumericOverflow`.

use super::coefficients::radial_coefficients;
use crate::atom::{HydrogenLike, Result, WavefunctionError};
use crate::utils::errors::MathError;
use crate::utils::math::integrate_simpson;
use std::cell::Cell;

/// Largest admissible rounding error relative to (2Z/(n·a0))^{3/2}
pub const PRECISION_TOLERANCE: f64 = 1e-4;

/// r^l·e^{-Zr/(n·a0)}, combined in log space for positive r
fn envelope(atom: &HydrogenLike, n: i32, l: i32, r: f64) -> f64 {
    let decay = f64::from(atom.z) * r / (f64::from(n) * atom.a0);
    if r > 0.0 {
        (f64::from(l) * r.ln() - decay).exp()
    } else {
        r.powi(l) * (-decay).exp()
    }
}

/// Evaluate the radial function from an already computed coefficient sequence
fn evaluate_series(atom: &HydrogenLike, n: i32, l: i32, b: &[f64], r: f64) -> Result<f64> {
    // Horner's rule over b_{n-l-1}..b_0
    let (polynomial, bound) = b
        .iter()
        .rev()
        .fold((0.0, 0.0), |(acc, mag): (f64, f64), &b_j| {
            (acc * r + b_j, mag * r.abs() + b_j.abs())
        });

    let prefactor = envelope(atom, n, l, r);
    let value = prefactor * polynomial;
    if !value.is_finite() {
        return Err(MathError::NumericOverflow(format!(
            "R_{},{}({}) is not representable",
            n, l, r
        ))
        .into());
    }

    let rounding = f64::EPSILON * b.len() as f64 * bound * prefactor.abs();
    if rounding > PRECISION_TOLERANCE * atom.radial_scale(n).powf(1.5) {
        return Err(MathError::NumericOverflow(format!(
            "R_{},{}({}) lost its precision to cancellation (error bound {:e})",
            n, l, r, rounding
        ))
        .into());
    }

    Ok(value)
}

/// Radial wavefunction R_{n,l}(r)
///
/// # Arguments
///
/// * `atom` - Nuclear charge and Bohr radius
/// * `n` - Principal quantum number (n ≥ 1)
/// * `l` - Angular-momentum quantum number (0 ≤ l ≤ n-1)
/// * `r` - Radial distance in units of `atom.a0`'s length unit
///
/// # Returns
///
/// R_{n,l}(r), or `NumericOverflow` when the state is out of double-precision
/// range or the series cancels below [`PRECISION_TOLERANCE`]
pub fn radial_wavefunction(atom: &HydrogenLike, n: i32, l: i32, r: f64) -> Result<f64> {
    let b = radial_coefficients(atom, n, l)?;
    evaluate_series(atom, n, l, &b, r)
}

/// Radius beyond which R² r² is negligible for the state
///
/// In terms of x = 2Zr/(n·a0) the integrand behaves like x^{2n}·e^{-x};
/// cutting at x = 4n + 60 leaves a tail far below double precision.
pub fn radial_extent(atom: &HydrogenLike, n: i32) -> f64 {
    (4.0 * f64::from(n) + 60.0) / atom.radial_scale(n)
}

/// ∫_0^{r_max} R_{n,l}(r)² r² dr by Simpson's rule
///
/// Equals 1 for a correctly seeded state once `r_max` covers the tail (see
/// [`radial_extent`]). The coefficient sequence is computed once and shared
/// by every quadrature node; the first node that fails aborts the integral
/// with its error.
pub fn radial_normalization(
    atom: &HydrogenLike,
    n: i32,
    l: i32,
    r_max: f64,
    intervals: usize,
) -> Result<f64> {
    let b = radial_coefficients(atom, n, l)?;
    let failure: Cell<Option<WavefunctionError>> = Cell::new(None);

    let integral = integrate_simpson(
        |r| match evaluate_series(atom, n, l, &b, r) {
            Ok(value) => value * value * r * r,
            Err(err) => {
                let first = failure.take();
                failure.set(first.or(Some(err)));
                0.0
            }
        },
        0.0,
        r_max,
        intervals,
    )?;

    match failure.into_inner() {
        Some(err) => Err(err),
        None => Ok(integral),
    }
}
