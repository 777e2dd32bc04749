//! Equation of state for seawater.
//!
//! The density computation in [`crate::density`] composes two thermodynamic
//! routines: conversion of in-situ temperature to potential temperature, and
//! density at a given pressure. Both are exposed through [`SeawaterEos`] so
//! the composition does not depend on a particular formulation.
//!
//! # Units
//!
//! - Absolute salinity: g/kg
//! - Temperature: °C (ITS-90)
//! - Sea pressure: dbar (absolute pressure minus 10.1325 dbar)
//! - Density: kg/m³

mod unesco;

pub use unesco::Unesco80;

/// Reference-composition factor relating Absolute to Practical Salinity.
///
/// `SA = U_PS · SP` for seawater of Reference Composition, in g/kg.
pub const U_PS: f64 = 35.16504 / 35.0;

/// Offset subtracted from density to form the anomaly σ (kg/m³).
pub const SIGMA_OFFSET: f64 = 1000.0;

/// Convert Absolute Salinity (g/kg) to Practical Salinity.
pub fn practical_from_absolute(sa: f64) -> f64 {
    sa / U_PS
}

/// Convert Practical Salinity to Absolute Salinity (g/kg).
pub fn absolute_from_practical(sp: f64) -> f64 {
    sp * U_PS
}

/// Pointwise thermodynamic routines needed for potential density.
pub trait SeawaterEos {
    /// Potential temperature (°C) referenced to `p_ref`.
    ///
    /// # Arguments
    /// * `sa` - Absolute salinity (g/kg)
    /// * `t` - In-situ temperature (°C)
    /// * `p` - Sea pressure of the sample (dbar)
    /// * `p_ref` - Reference sea pressure (dbar)
    fn potential_temperature(&self, sa: f64, t: f64, p: f64, p_ref: f64) -> f64;

    /// In-situ density (kg/m³) of seawater at temperature `t` and pressure `p`.
    fn density(&self, sa: f64, t: f64, p: f64) -> f64;
}
