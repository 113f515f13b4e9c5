/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # hydrogen-wf
//!
//! Normalized, time-independent wavefunctions of hydrogen-like atoms.
//!
//! ψ_{n,l,m}(r, θ, φ) = R_{n,l}(r)·Y_{l,m}(θ, φ) is evaluated from closed-form
//! series: an associated Legendre series for the polar factor, e^{imφ}/√(2π)
//! for the azimuthal factor, and a polynomial-times-exponential radial
//! function whose coefficients come from a recurrence seeded by the
//! normalization integral.
//!
//! ```
//! use hydrogen_wf::{HydrogenLike, QuantumNumbers};
//!
//! let atom = HydrogenLike::default();
//! let state = QuantumNumbers::new(3, 2, -2).unwrap();
//! let value = atom.psi(state, 1.5, std::f64::consts::PI / 5.0, std::f64::consts::PI / 7.0).unwrap();
//! assert!((value.re - 0.001024).abs() < 5e-7);
//! ```

pub mod angular;
pub mod atom;
pub mod cli;
pub mod radial;
pub mod utils;
pub mod wavefunction;

pub use atom::{HydrogenLike, QuantumNumbers, Result, WavefunctionError};
pub use num_complex::Complex64;
pub use utils::MathError;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
