/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the wavefunction modules
//!
//! Combinatorics, quadrature, physical constants and the numeric error type.

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{MathError, Result};
pub use math::{comb, factorial, integrate_simpson, ln_factorial, perm, MAX_FACTORIAL_F64};
