//! Shape reconciliation for scalar, vector and full-grid arguments.

use log::trace;

use super::{Field, Shape};
use crate::error::{Result, ScaleError};

/// Broadcast `field` to `target`.
///
/// Accepted forms:
/// - `1×1` scalar: filled to the full shape
/// - `1×cols` row vector: replicated down the rows
/// - `rows×1` column vector: replicated across the columns
/// - `rows×cols`: returned unchanged
///
/// Anything else fails with [`ScaleError::ShapeMismatch`] naming `name`.
///
/// # Example
/// ```
/// use ocean_scales::field::{Field, Shape, broadcast_to};
///
/// let p = Field::from_column(&[0.0, 10.0]);
/// let full = broadcast_to(&p, Shape::new(2, 3), "p").unwrap();
/// assert_eq!(full.get(1, 2), 10.0);
/// ```
pub fn broadcast_to(field: &Field, target: Shape, name: &'static str) -> Result<Field> {
    let shape = field.shape();

    if shape == target {
        return Ok(field.clone());
    }

    if shape == Shape::new(1, 1) {
        trace!("{name}: scalar filled to {target}");
        return Ok(Field::filled(target, field.get(0, 0)));
    }

    if shape.rows == 1 && shape.cols == target.cols {
        trace!("{name}: row vector replicated down {} rows", target.rows);
        return Ok(Field::from_fn(target, |_, j| field.get(0, j)));
    }

    if shape.cols == 1 && shape.rows == target.rows {
        trace!("{name}: column vector replicated across {} columns", target.cols);
        return Ok(Field::from_fn(target, |i, _| field.get(i, 0)));
    }

    Err(ScaleError::shape_mismatch(name, target, shape))
}

/// The single distinct value held by `field`.
///
/// Values are compared exactly. A `1×1` field is always unique, NaN
/// included, so a missing scalar propagates to the result. NaN never
/// equals another value, so a larger field containing NaN is not unique.
/// Fails with [`ScaleError::NonUniqueReferencePressure`] otherwise.
pub fn unique_value(field: &Field) -> Result<f64> {
    let mut values = field.values();
    let first = values.next().ok_or(ScaleError::EmptyInput)?;
    if field.shape().len() == 1 {
        return Ok(first);
    }

    if first.is_nan() || values.any(|v| v != first) {
        return Err(ScaleError::NonUniqueReferencePressure);
    }
    Ok(first)
}
