/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Radial polynomial coefficients b_0..b_{n-l-1}
//!
//! The seed b_0 follows from ∫ R² r² dr = 1. Writing b_j = b_0·s^j·c_j with
//! s = 2Z/(n·a0) and c_j = Π_{u<j} (u+l+1-n)/((u+1)(u+2l+2)), the integral
//! reduces to
//!
//! b_0 = s^{(2l+3)/2} / sqrt(Σ_j Σ_k (j+k+2l+2)!·c_j·c_k)
//!
//! The double sum alternates in sign and cancels badly in double precision
//! from n ≈ 15 on. It equals the Laguerre normalization in closed form,
//!
//! b_0 = s^{l+3/2}·sqrt((n-l-1)!/(2n·(n+l)!))·(n+l)!/((n-l-1)!·(2l+1)!)
//!
//! which is evaluated with log-factorials instead. Every later coefficient
//! follows from the forward recurrence b_{j+1} = b_j·s·(j+l+1-n)/((j+1)(j+2l+2)).

use crate::atom::{validate_radial, HydrogenLike, Result};
use crate::utils::errors::MathError;
use crate::utils::math::{ensure_factorial_range, ln_factorial};
use log::debug;

/// Rational factor (j+l+1-n)/((j+1)(j+2l+2)) linking c_j to c_{j+1}
fn step_ratio(n: i32, l: i32, j: usize) -> f64 {
    let j = j as f64;
    let (n, l) = (f64::from(n), f64::from(l));
    (j + l + 1.0 - n) / ((j + 1.0) * (j + 2.0 * l + 2.0))
}

/// Validate the state and the factorial range it needs
fn check_state(atom: &HydrogenLike, n: i32, l: i32) -> Result<()> {
    atom.validate()?;
    validate_radial(n, l)?;
    // (n+l)! is the largest factorial; n-l-1 and 2l+1 never exceed n+l
    ensure_factorial_range(i64::from(n) + i64::from(l), "n + l")?;
    Ok(())
}

/// Leading coefficient b_0 of the radial polynomial
///
/// # Arguments
///
/// * `atom` - Nuclear charge and Bohr radius
/// * `n` - Principal quantum number (n ≥ 1)
/// * `l` - Angular-momentum quantum number (0 ≤ l ≤ n-1)
///
/// # Returns
///
/// b_0, or `NumericOverflow` when n + l exceeds 170
pub fn normalization_seed(atom: &HydrogenLike, n: i32, l: i32) -> Result<f64> {
    check_state(atom, n, l)?;

    let (n_u, l_u) = (n as u32, l as u32);
    let ln_seed = (f64::from(l) + 1.5) * atom.radial_scale(n).ln()
        + 0.5 * ln_factorial(n_u + l_u)
        - 0.5 * ln_factorial(n_u - l_u - 1)
        - 0.5 * (2.0 * f64::from(n)).ln()
        - ln_factorial(2 * l_u + 1);
    let seed = ln_seed.exp();

    if !seed.is_finite() || seed == 0.0 {
        return Err(MathError::NumericOverflow(format!(
            "b_0 for n={}, l={} is not representable (ln b_0 = {})",
            n, l, ln_seed
        ))
        .into());
    }

    debug!("b_0(n={}, l={}, Z={}, a0={}) = {}", n, l, atom.z, atom.a0, seed);
    Ok(seed)
}

/// Full coefficient sequence b_0..b_{n-l-1}
///
/// The returned vector is owned by the caller; nothing is cached between
/// calls.
pub fn radial_coefficients(atom: &HydrogenLike, n: i32, l: i32) -> Result<Vec<f64>> {
    let seed = normalization_seed(atom, n, l)?;

    let terms = (n - l) as usize;
    let scale = atom.radial_scale(n);

    let mut b = Vec::with_capacity(terms);
    b.push(seed);
    for index in 0..terms - 1 {
        let next = b[index] * scale * step_ratio(n, l, index);
        if !next.is_finite() {
            return Err(MathError::NumericOverflow(format!(
                "b_{} for n={}, l={} is not representable",
                index + 1,
                n,
                l
            ))
            .into());
        }
        b.push(next);
    }

    Ok(b)
}
