/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hydrogen-like atom context and quantum numbers
//!
//! This module defines the evaluation context (`HydrogenLike`), the validated
//! `QuantumNumbers` triple and the error type shared by the angular, radial
//! and wavefunction modules.

pub mod config;
pub mod errors;
pub mod quantum;

pub use config::HydrogenLike;
pub use errors::{Result, WavefunctionError};
pub use quantum::{validate_angular, validate_radial, validate_state, QuantumNumbers};
