//! Error types for density and length-scale computations.
//!
//! Every check fails fast: no partial results are returned and nothing is
//! retried internally.

use thiserror::Error;

use crate::field::Shape;

/// Errors raised while validating inputs or evaluating a diagnostic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    /// Wrong number of arguments for a variable-arity entry point.
    #[error("Wrong number of arguments: expected {expected}, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// An input could not be reconciled with the target shape.
    #[error("Shape mismatch for {name}: expected {expected}, got {actual}")]
    ShapeMismatch {
        name: &'static str,
        expected: Shape,
        actual: Shape,
    },

    /// The reference pressure field holds more than one distinct value.
    #[error("reference pressures differ, must be unique")]
    NonUniqueReferencePressure,

    /// Lag axis outside the dimensions of the volume.
    #[error("Invalid axis {axis} for a {ndim}-dimensional array")]
    InvalidAxis { axis: usize, ndim: usize },

    /// Sample spacing must be finite and positive.
    #[error("Invalid sample spacing: {0}")]
    InvalidSpacing(f64),

    /// Relative zero tolerance must lie in `[0, 1)`.
    #[error("Invalid zero tolerance: {0}, expected a value in [0, 1)")]
    InvalidTolerance(f64),

    /// Input has no samples along some dimension.
    #[error("Input array is empty")]
    EmptyInput,

    /// The averaged autocovariance never returns to zero.
    #[error("Autocovariance never returns to zero (non-finite data?)")]
    NoDecorrelation,

    /// Array could not be laid out in the requested shape.
    #[error("Array layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),

    /// Fourier transform rejected its buffers.
    #[error("FFT error: {0}")]
    Fft(String),
}

impl From<realfft::FftError> for ScaleError {
    fn from(err: realfft::FftError) -> Self {
        Self::Fft(err.to_string())
    }
}

impl ScaleError {
    /// Create a shape mismatch error for the named argument.
    pub fn shape_mismatch(name: &'static str, expected: Shape, actual: Shape) -> Self {
        Self::ShapeMismatch {
            name,
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScaleError>;
