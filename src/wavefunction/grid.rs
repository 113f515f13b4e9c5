/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Batch evaluation over many spatial points
//!
//! Every point is independent, so the batch is spread over the rayon thread
//! pool. Quantum numbers and the atom context are checked once before the
//! fan-out.

use super::psi::psi;
use crate::atom::{HydrogenLike, QuantumNumbers, Result};
use log::debug;
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point in spherical coordinates (angles in radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPoint {
    /// Radial distance
    pub r: f64,
    /// Polar angle θ
    pub theta: f64,
    /// Azimuthal angle φ
    pub phi: f64,
}

impl SphericalPoint {
    /// Create a new spherical point
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    /// Convert Cartesian coordinates, with φ wrapped into [0, 2π)
    ///
    /// The origin maps to r = 0, θ = 0, φ = 0.
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        let r = (x * x + y * y + z * z).sqrt();
        if r == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }

        let theta = (z / r).clamp(-1.0, 1.0).acos();
        let mut phi = y.atan2(x);
        if phi < 0.0 {
            phi += 2.0 * PI;
        }

        Self::new(r, theta, phi)
    }

    /// Cartesian coordinates [x, y, z]
    pub fn to_cartesian(&self) -> [f64; 3] {
        let sin_theta = self.theta.sin();
        [
            self.r * sin_theta * self.phi.cos(),
            self.r * sin_theta * self.phi.sin(),
            self.r * self.theta.cos(),
        ]
    }
}

/// Evaluate ψ at every point, in input order
pub fn evaluate_points(
    atom: &HydrogenLike,
    qn: QuantumNumbers,
    points: &[SphericalPoint],
) -> Result<Vec<Complex64>> {
    atom.validate()?;
    QuantumNumbers::new(qn.n, qn.l, qn.m)?;

    debug!("Evaluating {} at {} points", qn, points.len());

    points
        .par_iter()
        .map(|p| psi(atom, qn.n, qn.l, qn.m, p.r, p.theta, p.phi))
        .collect()
}

/// Evaluate |ψ|² at every point, in input order
pub fn density_at_points(
    atom: &HydrogenLike,
    qn: QuantumNumbers,
    points: &[SphericalPoint],
) -> Result<Vec<f64>> {
    let values = evaluate_points(atom, qn, points)?;
    Ok(values
        .into_iter()
        .map(|v| v.re * v.re + v.im * v.im)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cartesian_roundtrip() {
        let p = SphericalPoint::from_cartesian(1.0, -2.0, 0.5);
        let [x, y, z] = p.to_cartesian();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(z, 0.5, epsilon = 1e-12);
        assert!(p.phi >= 0.0 && p.phi < 2.0 * PI);
    }

    #[test]
    fn test_origin_and_axis() {
        assert_eq!(
            SphericalPoint::from_cartesian(0.0, 0.0, 0.0),
            SphericalPoint::new(0.0, 0.0, 0.0)
        );
        let south = SphericalPoint::from_cartesian(0.0, 0.0, -3.0);
        assert_relative_eq!(south.r, 3.0);
        assert_relative_eq!(south.theta, PI);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let atom = HydrogenLike::default();
        let qn = QuantumNumbers::new(4, 2, -1).unwrap();
        let points: Vec<SphericalPoint> = (0..200)
            .map(|i| {
                let t = i as f64 * 0.05;
                SphericalPoint::new(0.1 + t, 0.3 * t, 0.7 * t)
            })
            .collect();

        let batch = evaluate_points(&atom, qn, &points).unwrap();
        assert_eq!(batch.len(), points.len());
        for (value, p) in batch.iter().zip(&points) {
            let single = psi(&atom, 4, 2, -1, p.r, p.theta, p.phi).unwrap();
            assert_eq!(*value, single);
        }

        let density = density_at_points(&atom, qn, &points).unwrap();
        for (d, v) in density.iter().zip(&batch) {
            assert_relative_eq!(*d, v.norm_sqr(), epsilon = 1e-18);
        }
    }

    #[test]
    fn test_batch_rejects_invalid_state() {
        let atom = HydrogenLike::default();
        let qn = QuantumNumbers { n: 2, l: 2, m: 0 };
        let points = [SphericalPoint::new(1.0, 0.0, 0.0)];
        assert!(evaluate_points(&atom, qn, &points).is_err());
    }
}
