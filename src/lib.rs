//! # ocean-scales
//!
//! Two small oceanographic diagnostics over gridded data:
//! - Seawater potential density from salinity, temperature and pressure
//!   fields, with scalar/vector/grid broadcasting of the pressure arguments
//! - Integral length scale of an N-dimensional volume from its averaged
//!   biased autocovariance
//!
//! Both are pure functions of their inputs. Enable the `parallel` feature to
//! compute sampled autocovariances on rayon's thread pool.

pub mod analysis;
pub mod density;
pub mod eos;
pub mod error;
pub mod field;

// Re-export main types for convenience
pub use analysis::{
    AutocovarianceCurve, LengthScaleConfig, LengthScaleEstimate, biased_autocovariance,
    estimate_length_scale, length_scale,
};
pub use density::{
    potential_density, potential_density_anomaly, potential_density_from_args,
    potential_density_with,
};
pub use eos::{SeawaterEos, Unesco80};
pub use error::{Result, ScaleError};
pub use field::{Field, Orientation, Shape, broadcast_to};
