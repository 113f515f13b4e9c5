/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Associated Legendre series and the polar factor S_{l,m}(θ)
//!
//! P_l^{|m|}(w) is evaluated from the expanded derivative of (w²-1)^l:
//!
//! P = Σ_{j=j0}^{l} C(l,j)·P(2j, t)·w^{2j-t} · (1-w²)^{|m|/2} / (2^l·l!)
//!
//! with t = l+|m| and j0 = ⌈t/2⌉. Terms are accumulated without the
//! alternating sign of the binomial expansion, so for l-|m| ≥ 2 the series
//! differs from the textbook Legendre function; the golden values of the
//! wavefunction are defined by this series.
//!
//! Each coefficient C(l,j)·P(2j,t)/(2^l·l!) = (2j)!/(j!·(l-j)!·(2j-t)!·2^l)
//! is formed from log-factorials, since C(l,j)·P(2j,t) alone leaves double
//! precision from l ≈ 120. Degrees are limited to l+|m| ≤ 170.

use crate::atom::{validate_angular, Result};
use crate::utils::errors::MathError;
use crate::utils::math::{ensure_factorial_range, ln_factorial};
use std::f64::consts::LN_2;

/// Associated Legendre series P_l^{|m|}(w)
///
/// # Arguments
///
/// * `l` - The degree (l ≥ 0)
/// * `m` - The order (|m| ≤ l); only |m| enters
/// * `w` - The argument, normally cos θ
///
/// # Returns
///
/// The series value, or `NumericDomain` when |w| > 1 with odd |m| (the
/// envelope (1-w²)^{|m|/2} would be complex)
pub fn associated_legendre(l: i32, m: i32, w: f64) -> Result<f64> {
    validate_angular(l, m)?;
    ensure_factorial_range(i64::from(l) + i64::from(m.unsigned_abs()), "l + |m|")?;

    if !w.is_finite() {
        return Err(MathError::NumericDomain(format!(
            "Legendre argument must be finite, got {}",
            w
        ))
        .into());
    }

    let degree = l as u32;
    let abs_m = m.unsigned_abs();
    let t = degree + abs_m;
    let j0 = (t + t % 2) / 2;

    let ln_scale = f64::from(degree) * LN_2;
    let mut series = 0.0;
    for j in j0..=degree {
        let coefficient = (ln_factorial(2 * j)
            - ln_factorial(j)
            - ln_factorial(degree - j)
            - ln_factorial(2 * j - t)
            - ln_scale)
            .exp();
        series += coefficient * w.powi((2 * j - t) as i32);
    }

    let base = 1.0 - w * w;
    let envelope = if abs_m % 2 == 0 {
        base.powi((abs_m / 2) as i32)
    } else if base < 0.0 {
        return Err(MathError::NumericDomain(format!(
            "(1 - w²)^({}/2) is not real for w={}",
            abs_m, w
        ))
        .into());
    } else {
        base.powf(f64::from(abs_m) / 2.0)
    };

    let value = series * envelope;
    if !value.is_finite() {
        return Err(MathError::NumericOverflow(format!(
            "P_{}^{}({}) is not representable",
            l, abs_m, w
        ))
        .into());
    }

    Ok(value)
}

/// Polar factor S_{l,m}(θ) = sqrt((2l+1)/2 · (l-|m|)!/(l+|m|)!) · P_l^{|m|}(cos θ)
pub fn polar_factor(l: i32, m: i32, theta: f64) -> Result<f64> {
    validate_angular(l, m)?;
    ensure_factorial_range(i64::from(l) + i64::from(m.unsigned_abs()), "l + |m|")?;

    let degree = l as u32;
    let abs_m = m.unsigned_abs();
    let ratio = (ln_factorial(degree - abs_m) - ln_factorial(degree + abs_m)).exp();
    let norm = ((2.0 * f64::from(l) + 1.0) / 2.0 * ratio).sqrt();

    Ok(norm * associated_legendre(l, m, theta.cos())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::WavefunctionError;
    use crate::utils::math::integrate_simpson;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_low_order_closed_forms() {
        for &w in &[-0.9_f64, -0.3, 0.0, 0.4, 1.0] {
            let s = (1.0 - w * w).sqrt();
            assert_relative_eq!(associated_legendre(0, 0, w).unwrap(), 1.0);
            assert_relative_eq!(associated_legendre(1, 0, w).unwrap(), w, epsilon = 1e-13);
            assert_relative_eq!(associated_legendre(1, 1, w).unwrap(), s, epsilon = 1e-13);
            assert_relative_eq!(
                associated_legendre(2, 1, w).unwrap(),
                3.0 * w * s,
                epsilon = 1e-13
            );
            assert_relative_eq!(
                associated_legendre(2, 2, w).unwrap(),
                3.0 * (1.0 - w * w),
                epsilon = 1e-13
            );
        }
    }

    #[test]
    fn test_series_without_alternating_sign() {
        // (360w² + 72)/48 · sqrt(1-w²)
        let w: f64 = 0.5;
        let expected = (360.0 * w * w + 72.0) / 48.0 * (1.0 - w * w).sqrt();
        assert_relative_eq!(associated_legendre(3, 1, w).unwrap(), expected, epsilon = 1e-13);
    }

    #[test]
    fn test_sign_of_m_is_irrelevant() {
        for l in 0..6 {
            for m in 1..=l {
                assert_eq!(
                    associated_legendre(l, m, 0.37).unwrap(),
                    associated_legendre(l, -m, 0.37).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_domain_error_for_odd_order_outside_unit_interval() {
        let err = associated_legendre(1, 1, 1.5).unwrap_err();
        assert!(matches!(
            err,
            WavefunctionError::Math(MathError::NumericDomain(_))
        ));
        // Even orders keep a real envelope
        assert_relative_eq!(
            associated_legendre(2, 2, 1.5).unwrap(),
            3.0 * (1.0 - 2.25),
            epsilon = 1e-12
        );
        assert!(associated_legendre(1, 0, f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_orders() {
        assert!(associated_legendre(-1, 0, 0.5).is_err());
        assert!(associated_legendre(2, 3, 0.5).is_err());
        assert!(polar_factor(1, -2, 0.5).is_err());
    }

    #[test]
    fn test_high_degree_stays_finite() {
        let value = associated_legendre(150, 0, 0.3).unwrap();
        assert!(value.is_finite());
        assert!(polar_factor(150, 3, 1.1).unwrap().is_finite());
        // Only j = l survives: (2l)!/(l!·2^l)
        let single = associated_legendre(120, 120, 0.0).unwrap();
        let expected = (ln_factorial(240) - ln_factorial(120) - 120.0 * LN_2).exp();
        assert_relative_eq!(single, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_degree_beyond_factorial_range() {
        for &(l, m) in &[(171, 0), (100, 80), (1 << 30, 1 << 30), (i32::MAX, 0)] {
            assert!(matches!(
                associated_legendre(l, m, 0.5),
                Err(WavefunctionError::Math(MathError::NumericOverflow(_)))
            ));
            assert!(matches!(
                polar_factor(l, m, 0.5),
                Err(WavefunctionError::Math(MathError::NumericOverflow(_)))
            ));
        }
    }

    #[test]
    fn test_polar_factor_golden() {
        assert_relative_eq!(polar_factor(2, 1, FRAC_PI_4).unwrap(), 0.968246, epsilon = 5e-7);
    }

    #[test]
    fn test_polar_factor_normalized_for_single_term_series() {
        for l in 0..5 {
            for m in (l - 1).max(0)..=l {
                let norm = integrate_simpson(
                    |theta| {
                        let s = polar_factor(l, m, theta).unwrap();
                        s * s * theta.sin()
                    },
                    0.0,
                    PI,
                    2000,
                )
                .unwrap();
                assert_relative_eq!(norm, 1.0, epsilon = 1e-8);
            }
        }
    }
}
