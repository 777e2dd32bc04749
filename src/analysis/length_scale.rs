//! Integral length scale from averaged autocovariance.
//!
//! The lag axis is moved to the front and the remaining dimensions are
//! sampled on a coarse grid (about ten points per dimension). The biased
//! autocovariance of every sampled series is averaged, and the scale is the
//! lag at which the averaged curve first returns to zero, times the sample
//! spacing.

use log::debug;
use ndarray::{ArrayBase, ArrayView3, ArrayViewD, Axis, CowArray, Data, Dimension, Ix3, s};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::autocovariance::{AutocovarianceCurve, AutocovariancePlan, CurveAccumulator};
use crate::error::{Result, ScaleError};

/// Configuration for [`estimate_length_scale`].
#[derive(Debug, Clone, Copy)]
pub struct LengthScaleConfig {
    /// Axis along which the autocovariance is computed (zero-based).
    pub axis: usize,
    /// Distance between consecutive samples along `axis`.
    pub spacing: f64,
    /// Target number of sampled indices along each remaining dimension.
    pub samples_per_axis: usize,
    /// Zero-match tolerance relative to the zero-lag covariance, in `[0, 1)`.
    pub zero_tolerance: f64,
}

impl Default for LengthScaleConfig {
    /// First axis, unit spacing, 10 samples per axis, 5% tolerance.
    fn default() -> Self {
        Self {
            axis: 0,
            spacing: 1.0,
            samples_per_axis: 10,
            zero_tolerance: 0.05,
        }
    }
}

impl LengthScaleConfig {
    /// Set the lag axis.
    pub fn with_axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    /// Set the sample spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the number of sampled indices per remaining dimension.
    pub fn with_samples_per_axis(mut self, samples_per_axis: usize) -> Self {
        self.samples_per_axis = samples_per_axis;
        self
    }

    /// Set the relative zero-match tolerance.
    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }
}

/// Result of a length-scale estimate.
#[derive(Debug, Clone)]
pub struct LengthScaleEstimate {
    /// Decorrelation length: `lag * spacing`
    pub scale: f64,
    /// Lag (in samples) at which the averaged curve returns to zero
    pub lag: usize,
    /// Number of autocovariance curves averaged
    pub n_curves: usize,
    /// Averaged autocovariance curve
    pub curve: AutocovarianceCurve,
}

/// Integral length scale of `data` along `axis` (zero-based).
///
/// Uses the default sampling grid and tolerance; see [`estimate_length_scale`].
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use ocean_scales::analysis::length_scale;
///
/// // Four columns of a period-20 signal sampled every 0.5 m
/// let data = Array2::from_shape_fn((200, 4), |(i, _)| {
///     (2.0 * std::f64::consts::PI * i as f64 / 20.0).sin()
/// });
/// let scale = length_scale(&data, 0, 0.5).unwrap();
/// assert!((scale - 2.5).abs() <= 0.5);
/// ```
pub fn length_scale<S, D>(data: &ArrayBase<S, D>, axis: usize, spacing: f64) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let config = LengthScaleConfig::default()
        .with_axis(axis)
        .with_spacing(spacing);
    estimate_length_scale(data, &config).map(|estimate| estimate.scale)
}

/// Estimate the integral length scale of `data`, returning the diagnostics.
///
/// # Errors
/// * [`ScaleError::InvalidAxis`] if `config.axis` is not an axis of `data`
/// * [`ScaleError::InvalidSpacing`] if the spacing is not finite and positive
/// * [`ScaleError::InvalidTolerance`] if the zero tolerance is outside `[0, 1)`
/// * [`ScaleError::EmptyInput`] if `data` has no elements
/// * [`ScaleError::NoDecorrelation`] if the averaged curve never reaches zero
pub fn estimate_length_scale<S, D>(
    data: &ArrayBase<S, D>,
    config: &LengthScaleConfig,
) -> Result<LengthScaleEstimate>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let view = data.view().into_dyn();
    if config.axis >= view.ndim() {
        return Err(ScaleError::InvalidAxis {
            axis: config.axis,
            ndim: view.ndim(),
        });
    }
    if !(config.spacing.is_finite() && config.spacing > 0.0) {
        return Err(ScaleError::InvalidSpacing(config.spacing));
    }
    if !(0.0..1.0).contains(&config.zero_tolerance) {
        return Err(ScaleError::InvalidTolerance(config.zero_tolerance));
    }
    if view.is_empty() {
        return Err(ScaleError::EmptyInput);
    }

    let volume = lag_axis_first(view, config.axis)?;
    let (n_lags, dim2, dim3) = volume.dim();

    let samples = config.samples_per_axis.max(1);
    let points = sample_grid(dim2, dim3, samples);
    debug!(
        "length scale: {} series of {} samples from a {}x{} grid",
        points.len(),
        n_lags,
        dim2,
        dim3
    );

    let plan = AutocovariancePlan::new(n_lags);
    let accumulator = accumulate_curves(volume.view(), &points, &plan)?;
    let n_curves = accumulator.count();
    let curve = accumulator.mean();

    let lag = curve
        .decorrelation_lag(config.zero_tolerance)
        .ok_or(ScaleError::NoDecorrelation)?;

    Ok(LengthScaleEstimate {
        scale: lag as f64 * config.spacing,
        lag,
        n_curves,
        curve,
    })
}

/// Move `axis` to the front and view the rest as two dimensions.
///
/// Missing dimensions have size 1. Inputs of up to three dimensions are
/// borrowed; dimensions past the third are folded into the third in
/// column-major order (the first of them varies fastest), which copies.
fn lag_axis_first(view: ArrayViewD<'_, f64>, axis: usize) -> Result<CowArray<'_, f64, Ix3>> {
    let ndim = view.ndim();
    let order: Vec<usize> = std::iter::once(axis)
        .chain((0..ndim).filter(|&a| a != axis))
        .collect();
    let mut permuted = view.permuted_axes(order);

    if ndim <= 3 {
        while permuted.ndim() < 3 {
            let last = Axis(permuted.ndim());
            permuted = permuted.insert_axis(last);
        }
        return Ok(CowArray::from(permuted.into_dimensionality::<Ix3>()?));
    }

    let shape = permuted.shape().to_vec();
    let folded = shape[2..].iter().product::<usize>();

    // A row-major fold of the reversed trailing axes is column-major in the originals
    let mut reversed: Vec<usize> = (0..ndim).collect();
    reversed[2..].reverse();
    let volume = permuted
        .permuted_axes(reversed)
        .to_shape((shape[0], shape[1], folded))?
        .into_owned();
    Ok(CowArray::from(volume))
}

/// Indices `(i, j)` sampled with strides `ceil(dim / samples)`.
fn sample_grid(dim2: usize, dim3: usize, samples: usize) -> Vec<(usize, usize)> {
    let jump2 = dim2.div_ceil(samples).max(1);
    let jump3 = dim3.div_ceil(samples).max(1);

    (0..dim2)
        .step_by(jump2)
        .flat_map(|i| (0..dim3).step_by(jump3).map(move |j| (i, j)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn accumulate_curves(
    volume: ArrayView3<'_, f64>,
    points: &[(usize, usize)],
    plan: &AutocovariancePlan,
) -> Result<CurveAccumulator> {
    let n = volume.len_of(Axis(0));
    points
        .iter()
        .try_fold(CurveAccumulator::new(n), |mut acc, &(i, j)| {
            acc.add_series(plan, &volume.slice(s![.., i, j]).to_vec())?;
            Ok(acc)
        })
}

/// Per-series covariances computed concurrently, then summed.
#[cfg(feature = "parallel")]
fn accumulate_curves(
    volume: ArrayView3<'_, f64>,
    points: &[(usize, usize)],
    plan: &AutocovariancePlan,
) -> Result<CurveAccumulator> {
    let n = volume.len_of(Axis(0));
    points
        .par_iter()
        .try_fold(
            || CurveAccumulator::new(n),
            |mut acc, &(i, j)| {
                acc.add_series(plan, &volume.slice(s![.., i, j]).to_vec())?;
                Ok(acc)
            },
        )
        .try_reduce(|| CurveAccumulator::new(n), |a, b| Ok(a.merge(b)))
}
