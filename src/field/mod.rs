//! Two-dimensional gridded fields.
//!
//! A [`Field`] holds one physical quantity (salinity, temperature, pressure)
//! sampled over a `rows × cols` grid. Scalars, row vectors and column vectors
//! are fields of shape `1×1`, `1×N` and `M×1`; [`broadcast_to`] reconciles
//! them with a full grid.
//!
//! # Example
//!
//! ```
//! use ocean_scales::field::{Field, Shape};
//!
//! let sa = Field::from_rows(&[vec![34.0, 34.5, 35.0], vec![34.2, 34.7, 35.1]]).unwrap();
//! assert_eq!(sa.shape(), Shape::new(2, 3));
//!
//! let p = Field::from(100.0);
//! assert!(p.is_scalar());
//! ```

mod broadcast;
mod orientation;

pub use broadcast::{broadcast_to, unique_value};
pub use orientation::Orientation;

use std::fmt;

use faer::Mat;

use crate::error::{Result, ScaleError};

/// Grid dimensions of a [`Field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows (profiles)
    pub rows: usize,
    /// Number of columns (samples)
    pub cols: usize,
}

impl Shape {
    /// Create a shape from row and column counts.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape with rows and columns swapped.
    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Total number of grid points.
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// True if the shape holds no grid points.
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A 2-D numeric field backed by a dense `faer` matrix.
#[derive(Clone, Debug)]
pub struct Field {
    data: Mat<f64>,
}

impl Field {
    /// Wrap an existing matrix.
    pub fn new(data: Mat<f64>) -> Self {
        Self { data }
    }

    /// A `1×1` field.
    pub fn scalar(value: f64) -> Self {
        Self::filled(Shape::new(1, 1), value)
    }

    /// A field of the given shape with every point set to `value`.
    pub fn filled(shape: Shape, value: f64) -> Self {
        Self::from_fn(shape, |_, _| value)
    }

    /// Build a field by evaluating `f(row, col)` at every grid point.
    pub fn from_fn(shape: Shape, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self {
            data: Mat::from_fn(shape.rows, shape.cols, f),
        }
    }

    /// A `1×N` row vector.
    pub fn from_row(values: &[f64]) -> Self {
        Self::from_fn(Shape::new(1, values.len()), |_, j| values[j])
    }

    /// An `M×1` column vector.
    pub fn from_column(values: &[f64]) -> Self {
        Self::from_fn(Shape::new(values.len(), 1), |i, _| values[i])
    }

    /// Build a field from row-major nested vectors.
    ///
    /// Fails with [`ScaleError::ShapeMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        for row in rows {
            if row.len() != n_cols {
                return Err(ScaleError::shape_mismatch(
                    "row",
                    Shape::new(1, n_cols),
                    Shape::new(1, row.len()),
                ));
            }
        }
        Ok(Self::from_fn(Shape::new(rows.len(), n_cols), |i, j| {
            rows[i][j]
        }))
    }

    /// Grid dimensions.
    pub fn shape(&self) -> Shape {
        Shape::new(self.data.nrows(), self.data.ncols())
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// True for a `1×1` field.
    pub fn is_scalar(&self) -> bool {
        self.shape() == Shape::new(1, 1)
    }

    /// True for a single-row field.
    pub fn is_row(&self) -> bool {
        self.nrows() == 1
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// Values in column-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let (rows, cols) = (self.nrows(), self.ncols());
        (0..cols).flat_map(move |j| (0..rows).map(move |i| self.data[(i, j)]))
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.shape().transposed(), |i, j| self.data[(j, i)])
    }

    /// Apply `f` to every grid point.
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(self.shape(), |i, j| f(self.data[(i, j)]))
    }

    /// Borrow the backing matrix.
    pub fn as_mat(&self) -> &Mat<f64> {
        &self.data
    }

    /// Consume the field, returning the backing matrix.
    pub fn into_mat(self) -> Mat<f64> {
        self.data
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Mat<f64>> for Field {
    fn from(data: Mat<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_of_vector_forms() {
        assert_eq!(Field::scalar(1.0).shape(), Shape::new(1, 1));
        assert_eq!(Field::from_row(&[1.0, 2.0, 3.0]).shape(), Shape::new(1, 3));
        assert_eq!(Field::from_column(&[1.0, 2.0]).shape(), Shape::new(2, 1));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = Field::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(ScaleError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_transpose() {
        let f = Field::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let ft = f.transpose();

        assert_eq!(ft.shape(), Shape::new(3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(f.get(i, j), ft.get(j, i));
            }
        }
    }

    #[test]
    fn test_values_are_column_major() {
        let f = Field::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let values: Vec<f64> = f.values().collect();
        assert_eq!(values, vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::new(4, 7).to_string(), "4x7");
        assert!(Shape::new(0, 3).is_empty());
    }
}
