//! Canonical (profiles × samples) layout for per-call computations.
//!
//! A single-row field is turned into a column on entry and the result is
//! turned back on exit. The orientation lives only for the duration of the
//! call that created it.

use log::debug;

use super::Field;

/// Layout of the caller's fields relative to the canonical column layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Fields are already in canonical layout.
    Canonical,
    /// Fields were a single row and are computed on transposed copies.
    Transposed,
}

impl Orientation {
    /// Orientation implied by the reference field `field`.
    pub fn of(field: &Field) -> Self {
        if field.is_row() && !field.is_scalar() {
            Self::Transposed
        } else {
            Self::Canonical
        }
    }

    /// Bring a caller-layout field into canonical layout.
    pub fn normalize(self, field: Field) -> Field {
        match self {
            Self::Canonical => field,
            Self::Transposed => field.transpose(),
        }
    }

    /// Bring a canonical-layout result back into caller layout.
    pub fn restore(self, field: Field) -> Field {
        // Transposition is its own inverse
        self.normalize(field)
    }

    /// Run `compute` on `fields` in canonical layout and restore its result.
    ///
    /// # Example
    /// ```
    /// use ocean_scales::field::{Field, Orientation, Shape};
    ///
    /// let row = Field::from_row(&[1.0, 2.0, 3.0]);
    /// let out = Orientation::scoped(&row, [row.clone()], |[f]| {
    ///     assert_eq!(f.shape(), Shape::new(3, 1));
    ///     Ok::<_, ()>(f.map(|v| 2.0 * v))
    /// })
    /// .unwrap();
    /// assert_eq!(out.shape(), Shape::new(1, 3));
    /// ```
    pub fn scoped<const N: usize, E>(
        reference: &Field,
        fields: [Field; N],
        compute: impl FnOnce([Field; N]) -> Result<Field, E>,
    ) -> Result<Field, E> {
        let orientation = Self::of(reference);
        if orientation == Self::Transposed {
            debug!(
                "single-row input of {} samples, computing on columns",
                reference.ncols()
            );
        }

        let canonical = fields.map(|f| orientation.normalize(f));
        compute(canonical).map(|result| orientation.restore(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Shape;

    #[test]
    fn test_orientation_of() {
        assert_eq!(
            Orientation::of(&Field::from_row(&[1.0, 2.0])),
            Orientation::Transposed
        );
        assert_eq!(
            Orientation::of(&Field::from_column(&[1.0, 2.0])),
            Orientation::Canonical
        );
        assert_eq!(Orientation::of(&Field::scalar(1.0)), Orientation::Canonical);
    }

    #[test]
    fn test_scoped_restores_caller_layout() {
        let row = Field::from_row(&[1.0, 2.0, 3.0, 4.0]);
        let out = Orientation::scoped(&row, [row.clone(), row.clone()], |[a, b]| {
            assert_eq!(a.shape(), Shape::new(4, 1));
            assert_eq!(b.shape(), Shape::new(4, 1));
            Ok::<_, ()>(Field::from_fn(a.shape(), |i, j| a.get(i, j) + b.get(i, j)))
        })
        .unwrap();

        assert_eq!(out.shape(), Shape::new(1, 4));
        assert_eq!(out.get(0, 3), 8.0);
    }

    #[test]
    fn test_scoped_leaves_grids_untouched() {
        let grid = Field::filled(Shape::new(2, 3), 1.0);
        let out = Orientation::scoped(&grid, [grid.clone()], |[g]| {
            assert_eq!(g.shape(), Shape::new(2, 3));
            Ok::<_, ()>(g)
        })
        .unwrap();
        assert_eq!(out.shape(), Shape::new(2, 3));
    }
}
