/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Radial part of the wavefunction
//!
//! The b-coefficient recurrence seeded by the normalization integral, the
//! radial function built from it, and a quadrature check of its norm.

mod coefficients;
mod radial_function;

pub use coefficients::{normalization_seed, radial_coefficients};
pub use radial_function::{radial_extent, radial_normalization, radial_wavefunction};
