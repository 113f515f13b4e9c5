/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Full hydrogen-like wavefunction
//!
//! ψ_{n,l,m}(r, θ, φ) = R_{n,l}(r)·Y_{l,m}(θ, φ), evaluated point by point or
//! over a batch of points in parallel.

pub mod grid;
mod psi;

pub use grid::{density_at_points, evaluate_points, SphericalPoint};
pub use psi::{probability_density, psi, psi_imag, psi_real};
