//! Autocovariance analysis and integral length scales.
//!
//! This module provides tools for:
//! - Computing the biased autocovariance of a series over all lags
//! - Averaging autocovariance curves sampled across a gridded volume
//! - Estimating the integral (decorrelation) length scale of the volume
//!
//! # Mathematical Background
//!
//! Biased autocovariance of a series xₙ, n = 0..N-1, with mean x̄:
//! ```text
//! c(k) = (1/N) Σₙ (xₙ - x̄)(xₙ₊ₖ - x̄),   |k| < N
//! ```
//!
//! Normalising by N rather than N - |k| trades bias for lower variance at
//! large lags. The length scale is `k* · Δx`, where k* is the first lag at
//! which the averaged c(k) returns to zero.
//!
//! # Example
//!
//! ```
//! use ndarray::Array3;
//! use ocean_scales::analysis::{LengthScaleConfig, estimate_length_scale};
//!
//! // (time, y, x) volume of a period-12 oscillation
//! let data = Array3::from_shape_fn((240, 5, 30), |(t, _, _)| {
//!     (2.0 * std::f64::consts::PI * t as f64 / 12.0).cos()
//! });
//!
//! let config = LengthScaleConfig::default().with_spacing(60.0);
//! let estimate = estimate_length_scale(&data, &config).unwrap();
//!
//! assert_eq!(estimate.n_curves, 5 * 10);
//! assert_eq!(estimate.scale, 3.0 * 60.0);
//! ```

mod autocovariance;
mod length_scale;

pub use autocovariance::{AutocovarianceCurve, biased_autocovariance};
pub use length_scale::{
    LengthScaleConfig, LengthScaleEstimate, estimate_length_scale, length_scale,
};
