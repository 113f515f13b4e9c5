/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants and evaluation defaults

/// Bohr radius in Angstroms
pub const BOHR_RADIUS_ANGSTROM: f64 = 0.529177;

/// Bohr radius in atomic units
pub const BOHR_RADIUS_AU: f64 = 1.0;

/// Nuclear charge of hydrogen
pub const HYDROGEN_CHARGE: u32 = 1;

/// 1/√(2π), the normalization of the azimuthal factor
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
