/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Angular part of the wavefunction
//!
//! The associated Legendre series, the polar factor S_{l,m}(θ), the
//! azimuthal factor T_m(φ) and their product, the spherical harmonic.

mod harmonic;
mod legendre;

pub use harmonic::{
    azimuthal, azimuthal_imag, azimuthal_real, spherical_harmonic, spherical_harmonic_imag,
    spherical_harmonic_real,
};
pub use legendre::{associated_legendre, polar_factor};
