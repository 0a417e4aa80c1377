use core::fmt::Debug;
use num_traits::{Num, One, Zero};

use crate::error::MatrixError;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `Complex<f32>` / `Complex<f64>`
/// with the `complex` feature. `Zero::zero()` is the default element value.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for (usize, usize) {}
}

/// Position accepted by `at` / `at_mut` and by `Index`.
///
/// Implemented for a linear row-major offset (`usize`) and for a
/// `(row, column)` pair.
///
/// ```
/// use primmatrix::FixedMatrix;
///
/// let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m.at(4), Ok(&5));
/// assert_eq!(m.at((1, 1)), Ok(&5));
/// assert_eq!(m[4], m[(1, 1)]);
/// ```
pub trait MatrixIndex: Copy + sealed::Sealed {
    /// Row-major offset, validated against a `rows x columns` shape.
    fn checked_offset(self, rows: usize, columns: usize) -> Result<usize, MatrixError>;

    /// Row-major offset without shape validation.
    fn offset(self, columns: usize) -> usize;
}

impl MatrixIndex for usize {
    #[inline]
    fn checked_offset(self, rows: usize, columns: usize) -> Result<usize, MatrixError> {
        let size = rows * columns;
        if self >= size {
            return Err(MatrixError::index_out_of_bounds(self, size));
        }
        Ok(self)
    }

    #[inline]
    fn offset(self, _columns: usize) -> usize {
        self
    }
}

impl MatrixIndex for (usize, usize) {
    #[inline]
    fn checked_offset(self, rows: usize, columns: usize) -> Result<usize, MatrixError> {
        let (row, column) = self;
        if row >= rows || column >= columns {
            return Err(MatrixError::row_column_out_of_bounds(
                row, column, rows, columns,
            ));
        }
        Ok(row * columns + column)
    }

    #[inline]
    fn offset(self, columns: usize) -> usize {
        self.0 * columns + self.1
    }
}

/// Read-only access to a matrix-like type.
///
/// Lets generic routines operate over both `FixedMatrix` and `DenseMatrix`.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
