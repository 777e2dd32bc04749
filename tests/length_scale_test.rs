//! Integration tests for the integral length scale.
//!
//! Tests the full estimate: axis permutation, grid sampling, curve
//! averaging and the zero-crossing search.

use ndarray::{Array1, Array2, Array3, ArrayD, IxDyn};
use ocean_scales::{
    LengthScaleConfig, ScaleError, biased_autocovariance, estimate_length_scale, length_scale,
};
use std::f64::consts::PI;

/// Sinusoid of the given period in samples, with a phase per realisation.
fn wave(i: usize, period: f64, phase: f64) -> f64 {
    (2.0 * PI * i as f64 / period + phase).sin()
}

#[test]
fn test_quarter_period_of_sinusoid() {
    let _ = env_logger::builder().is_test(true).try_init();

    // 10 full periods of P = 40 samples, dx = 0.25 m
    let dx = 0.25;
    let data = Array2::from_shape_fn((400, 6), |(i, j)| wave(i, 40.0, 0.3 * j as f64));
    let scale = length_scale(&data, 0, dx).unwrap();

    let expected = 40.0 / 4.0 * dx;
    assert!(
        (scale - expected).abs() <= dx,
        "expected ~{expected}, got {scale}"
    );
}

#[test]
fn test_scale_proportional_to_period() {
    let short = Array1::from_shape_fn(480, |i| wave(i, 24.0, 0.0));
    let long = Array1::from_shape_fn(480, |i| wave(i, 48.0, 0.0));

    let s_short = length_scale(&short, 0, 1.0).unwrap();
    let s_long = length_scale(&long, 0, 1.0).unwrap();

    assert_eq!(s_short, 6.0);
    assert_eq!(s_long, 12.0);
}

#[test]
fn test_every_column_sampled_when_fewer_than_ten() {
    for s2 in 1..10 {
        let data = Array2::from_shape_fn((64, s2), |(i, j)| wave(i, 16.0, j as f64));
        let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();
        assert_eq!(estimate.n_curves, s2);
    }
}

#[test]
fn test_coarse_sampling_of_large_grid() {
    // ceil(95 / 10) = 10 -> 10 rows; ceil(12 / 10) = 2 -> 6 columns
    let data = Array3::from_shape_fn((32, 95, 12), |(i, _, _)| wave(i, 8.0, 0.0));
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();
    assert_eq!(estimate.n_curves, 10 * 6);
}

#[test]
fn test_averaged_curve_is_mean_of_sampled_curves() {
    let data = Array2::from_shape_fn((20, 3), |(i, j)| ((i * (j + 2)) % 7) as f64);
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();

    let curves: Vec<Vec<f64>> = (0..3)
        .map(|j| biased_autocovariance(&data.column(j).to_vec()).unwrap())
        .collect();

    assert_eq!(estimate.curve.lags().len(), 2 * 20 - 1);
    for (k, &value) in estimate.curve.values().iter().enumerate() {
        let mean = curves.iter().map(|c| c[k]).sum::<f64>() / 3.0;
        assert!((value - mean).abs() < 1e-12);
    }
}

#[test]
fn test_lag_axis_can_be_any_dimension() {
    let along_first = Array3::from_shape_fn((200, 3, 4), |(t, _, _)| wave(t, 20.0, 0.0));
    let along_last = Array3::from_shape_fn((3, 4, 200), |(_, _, t)| wave(t, 20.0, 0.0));

    let a = length_scale(&along_first, 0, 1.0).unwrap();
    let b = length_scale(&along_last, 2, 1.0).unwrap();
    assert_eq!(a, 5.0);
    assert_eq!(a, b);
}

#[test]
fn test_higher_dimensional_input() {
    let data = ArrayD::from_shape_fn(IxDyn(&[3, 160, 2, 2]), |idx| wave(idx[1], 16.0, 0.0));
    let estimate =
        estimate_length_scale(&data, &LengthScaleConfig::default().with_axis(1)).unwrap();

    assert_eq!(estimate.scale, 4.0);
    // Remaining (3, 2, 2) viewed as 3 x 4
    assert_eq!(estimate.n_curves, 12);
}

#[test]
fn test_trailing_dimensions_sampled_column_major() {
    // Remaining (1, 3, 7) is viewed as 1 x 21 with j = i3 + 3 * i4, so
    // stride 3 visits i3 = 0 only: period 16 everywhere
    let data = ArrayD::from_shape_fn(IxDyn(&[64, 1, 3, 7]), |idx| {
        let period = if idx[2] == 0 { 16.0 } else { 40.0 };
        wave(idx[0], period, 0.0)
    });
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();

    assert_eq!(estimate.n_curves, 7);
    assert_eq!(estimate.lag, 4);
}

#[test]
fn test_long_records() {
    // One month of minute data in 100 series
    let n = 32_768;
    let data = Array3::from_shape_fn((n, 10, 10), |(t, j, i)| {
        wave(t, 1440.0, 0.1 * (i + j) as f64)
    });
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default().with_spacing(60.0))
        .unwrap();

    assert_eq!(estimate.n_curves, 100);
    assert_eq!(estimate.curve.values().len(), 2 * n - 1);

    // cos(2πk/1440) first drops below 5% at k = 349, just short of a quarter day
    assert_eq!(estimate.lag, 349);
    assert_eq!(estimate.scale, 349.0 * 60.0);
}

#[test]
fn test_zero_data_is_well_defined() {
    let data = Array2::<f64>::zeros((100, 5));
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();

    assert!(estimate.curve.values().iter().all(|&c| c == 0.0));
    assert_eq!(estimate.lag, 0);
    assert_eq!(estimate.scale, 0.0);
}

#[test]
fn test_single_series() {
    let data = Array1::from_shape_fn(120, |i| wave(i, 12.0, 0.0));
    let estimate = estimate_length_scale(&data, &LengthScaleConfig::default()).unwrap();
    assert_eq!(estimate.n_curves, 1);
    assert_eq!(estimate.lag, 3);
}

#[test]
fn test_invalid_axis() {
    let data = Array1::<f64>::zeros(10);
    assert_eq!(
        length_scale(&data, 1, 1.0),
        Err(ScaleError::InvalidAxis { axis: 1, ndim: 1 })
    );
}

#[test]
fn test_zero_tolerance_outside_unit_interval_rejected() {
    let data = Array1::from_shape_fn(120, |i| wave(i, 12.0, 0.0));

    let config = LengthScaleConfig::default().with_zero_tolerance(-0.05);
    assert_eq!(
        estimate_length_scale(&data, &config).unwrap_err(),
        ScaleError::InvalidTolerance(-0.05)
    );

    let config = LengthScaleConfig::default().with_zero_tolerance(f64::NAN);
    assert!(matches!(
        estimate_length_scale(&data, &config),
        Err(ScaleError::InvalidTolerance(t)) if t.is_nan()
    ));
}

#[test]
fn test_negative_spacing_rejected() {
    let data = Array1::<f64>::zeros(10);
    assert_eq!(
        length_scale(&data, 0, -2.0),
        Err(ScaleError::InvalidSpacing(-2.0))
    );
}
