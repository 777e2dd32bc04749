//! Biased autocovariance and curve averaging.
//!
//! Autocovariances are evaluated in O(n log n) as the inverse transform of
//! the power spectrum of the zero-padded, mean-removed series.

use std::sync::Arc;

use realfft::num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use crate::error::Result;

/// Biased autocovariance of `series` over lags `-(n-1)..=(n-1)`.
///
/// The mean is removed and every lag is normalised by `n`, not `n - |k|`.
/// Entry `n - 1 + k` holds lag `k`; the sequence is symmetric about it.
/// An empty series yields an empty sequence.
///
/// # Example
/// ```
/// use ocean_scales::analysis::biased_autocovariance;
///
/// let c = biased_autocovariance(&[1.0, -1.0, 1.0, -1.0]).unwrap();
/// assert_eq!(c.len(), 7);
/// assert!((c[3] - 1.0).abs() < 1e-12);   // variance
/// assert!((c[4] + 0.75).abs() < 1e-12);  // lag 1: -3/4
/// ```
pub fn biased_autocovariance(series: &[f64]) -> Result<Vec<f64>> {
    AutocovariancePlan::new(series.len()).compute(series)
}

/// Forward and inverse real FFTs sized for series of `n_samples` points.
///
/// Plans are shared between threads, so one plan serves every series of a
/// volume.
#[derive(Clone)]
pub(crate) struct AutocovariancePlan {
    n_samples: usize,
    forward: Arc<dyn RealToComplex<f64>>,
    inverse: Arc<dyn ComplexToReal<f64>>,
}

impl AutocovariancePlan {
    pub(crate) fn new(n_samples: usize) -> Self {
        // At least 2n - 1 points so the circular correlation does not wrap
        let len = (2 * n_samples).next_power_of_two().max(2);
        let mut planner = RealFftPlanner::<f64>::new();
        Self {
            n_samples,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    /// Two-sided biased autocovariance of `series`.
    pub(crate) fn compute(&self, series: &[f64]) -> Result<Vec<f64>> {
        let n = self.n_samples;
        debug_assert_eq!(series.len(), n);
        if n == 0 {
            return Ok(Vec::new());
        }

        let mean = series.iter().sum::<f64>() / n as f64;
        let mut padded = self.forward.make_input_vec();
        for (slot, &x) in padded.iter_mut().zip(series) {
            *slot = x - mean;
        }

        let mut spectrum = self.forward.make_output_vec();
        self.forward.process(&mut padded, &mut spectrum)?;
        for bin in spectrum.iter_mut() {
            *bin = Complex::new(bin.norm_sqr(), 0.0);
        }

        let mut circular = self.inverse.make_output_vec();
        self.inverse.process(&mut spectrum, &mut circular)?;

        // The inverse transform is unnormalised
        let scale = (circular.len() * n) as f64;
        let one_sided = &circular[..n];

        Ok(one_sided[1..]
            .iter()
            .rev()
            .chain(one_sided)
            .map(|c| c / scale)
            .collect())
    }
}

/// Autocovariance values paired with their integer lags.
#[derive(Clone, Debug, PartialEq)]
pub struct AutocovarianceCurve {
    lags: Vec<isize>,
    values: Vec<f64>,
}

impl AutocovarianceCurve {
    /// Biased autocovariance curve of a single series.
    pub fn from_series(series: &[f64]) -> Result<Self> {
        biased_autocovariance(series).map(Self::from_values)
    }

    /// Wrap a symmetric two-sided sequence of odd length `2n - 1`.
    fn from_values(values: Vec<f64>) -> Self {
        let max_lag = (values.len() / 2) as isize;
        Self {
            lags: (-max_lag..=max_lag).collect(),
            values,
        }
    }

    /// Lags `-(n-1)..=(n-1)`.
    pub fn lags(&self) -> &[isize] {
        &self.lags
    }

    /// Covariance at each lag.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Length of the series the curve was computed from.
    pub fn n_samples(&self) -> usize {
        self.values.len().div_ceil(2)
    }

    /// Covariance at lag `lag`, if within range.
    pub fn at_lag(&self, lag: isize) -> Option<f64> {
        let index = lag.checked_add(self.n_samples() as isize - 1)?;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.values.get(i).copied())
    }

    /// Covariance at lag zero (the variance).
    pub fn variance(&self) -> f64 {
        self.at_lag(0).unwrap_or(0.0)
    }

    /// First non-negative lag at which the curve returns to zero.
    ///
    /// Lags are scanned outward from zero. A lag matches once its covariance
    /// is within `tolerance · c(0)` of zero or has dropped below zero; on a
    /// crossing the neighbour closer to zero is returned. A curve with zero
    /// variance matches at lag 0. Returns `None` if nothing matches, which
    /// only happens for non-finite data.
    pub fn decorrelation_lag(&self, tolerance: f64) -> Option<usize> {
        let threshold = tolerance * self.variance().abs();
        let one_sided = &self.values[self.n_samples().saturating_sub(1)..];

        let k = one_sided.iter().position(|&c| c <= threshold)?;
        if k > 0 && one_sided[k] < -threshold && one_sided[k - 1].abs() < one_sided[k].abs() {
            Some(k - 1)
        } else {
            Some(k)
        }
    }
}

/// Running elementwise sum of equal-length autocovariance sequences.
#[derive(Clone, Debug)]
pub(crate) struct CurveAccumulator {
    sum: Vec<f64>,
    count: usize,
}

impl CurveAccumulator {
    /// Accumulator for series of `n_samples` points.
    pub(crate) fn new(n_samples: usize) -> Self {
        Self {
            sum: vec![0.0; (2 * n_samples).saturating_sub(1)],
            count: 0,
        }
    }

    /// Add the autocovariance of `series`, computed with `plan`.
    pub(crate) fn add_series(&mut self, plan: &AutocovariancePlan, series: &[f64]) -> Result<()> {
        let curve = plan.compute(series)?;
        debug_assert_eq!(curve.len(), self.sum.len());
        for (s, c) in self.sum.iter_mut().zip(&curve) {
            *s += c;
        }
        self.count += 1;
        Ok(())
    }

    /// Combine two partial sums.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub(crate) fn merge(mut self, other: Self) -> Self {
        for (s, o) in self.sum.iter_mut().zip(&other.sum) {
            *s += o;
        }
        self.count += other.count;
        self
    }

    /// Number of curves added.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Equal-weight mean of the accumulated curves.
    pub(crate) fn mean(self) -> AutocovarianceCurve {
        let count = self.count.max(1) as f64;
        AutocovarianceCurve::from_values(self.sum.into_iter().map(|s| s / count).collect())
    }
}
