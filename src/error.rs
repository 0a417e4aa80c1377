//! Error vocabulary shared by [`FixedMatrix`](crate::FixedMatrix) and
//! `DenseMatrix`.
//!
//! Every fallible operation in the crate returns [`MatrixError`]. Errors are
//! plain `Copy` values; nothing is allocated when one is raised.

use core::fmt;

use crate::splice::Splice;

/// Binary operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    /// Conversion between a `DenseMatrix` and a `FixedMatrix` of another shape.
    Conversion,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Conversion => "conversion",
        };
        f.write_str(name)
    }
}

/// Operands of a binary operation whose shapes are incompatible.
///
/// Shapes are `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMismatch {
    pub operation: Operation,
    pub lhs: (usize, usize),
    pub rhs: (usize, usize),
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shape mismatch in {}: {}x{} and {}x{}",
            self.operation, self.lhs.0, self.lhs.1, self.rhs.0, self.rhs.1
        )
    }
}

/// Errors raised by matrix construction, checked access and arithmetic.
///
/// ```
/// use primmatrix::{DenseMatrix, MatrixError};
///
/// let err = DenseMatrix::from_slice(2, 3, &[1, 2, 3]).unwrap_err();
/// assert_eq!(
///     err,
///     MatrixError::InitializerSizeMismatch { initializer_size: 3, matrix_size: 6 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixError {
    /// Requested row or column count is zero.
    InvalidShape { rows: usize, columns: usize },
    /// A flat-sequence constructor received no elements.
    EmptySource,
    /// Initializer length differs from `rows * columns`.
    InitializerSizeMismatch {
        initializer_size: usize,
        matrix_size: usize,
    },
    /// Linear index is `>= size()`.
    IndexOutOfBounds { index: usize, matrix_size: usize },
    /// Row or column is past the matrix bounds.
    RowColumnOutOfBounds {
        row: usize,
        column: usize,
        matrix_rows: usize,
        matrix_columns: usize,
    },
    ShapeMismatch(ShapeMismatch),
    /// Splice region is empty or extends past the matrix.
    SpliceOutOfBounds {
        splice: Splice,
        matrix_rows: usize,
        matrix_columns: usize,
    },
}

impl MatrixError {
    #[cfg(feature = "alloc")]
    pub(crate) fn invalid_shape(rows: usize, columns: usize) -> Self {
        Self::InvalidShape { rows, columns }.reported()
    }

    pub(crate) fn initializer_size(initializer_size: usize, matrix_size: usize) -> Self {
        Self::InitializerSizeMismatch {
            initializer_size,
            matrix_size,
        }
        .reported()
    }

    pub(crate) fn index_out_of_bounds(index: usize, matrix_size: usize) -> Self {
        Self::IndexOutOfBounds { index, matrix_size }.reported()
    }

    pub(crate) fn row_column_out_of_bounds(
        row: usize,
        column: usize,
        matrix_rows: usize,
        matrix_columns: usize,
    ) -> Self {
        Self::RowColumnOutOfBounds {
            row,
            column,
            matrix_rows,
            matrix_columns,
        }
        .reported()
    }

    #[cfg(feature = "alloc")]
    pub(crate) fn shape_mismatch(
        operation: Operation,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch(ShapeMismatch { operation, lhs, rhs }).reported()
    }

    #[cfg(feature = "alloc")]
    pub(crate) fn empty_source() -> Self {
        Self::EmptySource.reported()
    }

    pub(crate) fn splice_out_of_bounds(
        splice: Splice,
        matrix_rows: usize,
        matrix_columns: usize,
    ) -> Self {
        Self::SpliceOutOfBounds {
            splice,
            matrix_rows,
            matrix_columns,
        }
        .reported()
    }

    fn reported(self) -> Self {
        log::debug!("{self}");
        self
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidShape { rows, columns } => {
                write!(f, "invalid matrix shape {rows}x{columns}: both dimensions must be at least 1")
            }
            MatrixError::EmptySource => write!(f, "cannot build a matrix from an empty sequence"),
            MatrixError::InitializerSizeMismatch {
                initializer_size,
                matrix_size,
            } => write!(
                f,
                "initializer of length {initializer_size} does not match matrix size {matrix_size}"
            ),
            MatrixError::IndexOutOfBounds { index, matrix_size } => {
                write!(f, "index {index} out of bounds for matrix of size {matrix_size}")
            }
            MatrixError::RowColumnOutOfBounds {
                row,
                column,
                matrix_rows,
                matrix_columns,
            } => write!(
                f,
                "position ({row}, {column}) out of bounds for {matrix_rows}x{matrix_columns} matrix"
            ),
            MatrixError::ShapeMismatch(mismatch) => mismatch.fmt(f),
            MatrixError::SpliceOutOfBounds {
                splice,
                matrix_rows,
                matrix_columns,
            } => write!(
                f,
                "splice {splice} out of bounds for {matrix_rows}x{matrix_columns} matrix"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

impl From<ShapeMismatch> for MatrixError {
    fn from(mismatch: ShapeMismatch) -> Self {
        MatrixError::ShapeMismatch(mismatch)
    }
}

/// Result type for fallible matrix operations.
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MatrixError::InvalidShape { rows: 0, columns: 3 };
        assert_eq!(
            format!("{e}"),
            "invalid matrix shape 0x3: both dimensions must be at least 1"
        );

        let e = MatrixError::index_out_of_bounds(11, 10);
        assert_eq!(format!("{e}"), "index 11 out of bounds for matrix of size 10");

        let e = MatrixError::row_column_out_of_bounds(2, 0, 2, 3);
        assert_eq!(format!("{e}"), "position (2, 0) out of bounds for 2x3 matrix");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn shape_mismatch_display() {
        let e = MatrixError::shape_mismatch(Operation::Multiplication, (2, 3), (2, 2));
        assert_eq!(format!("{e}"), "shape mismatch in multiplication: 2x3 and 2x2");
    }

    #[test]
    fn from_shape_mismatch() {
        let mismatch = ShapeMismatch {
            operation: Operation::Addition,
            lhs: (1, 2),
            rhs: (2, 1),
        };
        let e: MatrixError = mismatch.into();
        assert_eq!(e, MatrixError::ShapeMismatch(mismatch));
    }

    #[test]
    fn splice_display() {
        let e = MatrixError::SpliceOutOfBounds {
            splice: Splice::new(1, 1, 3, 1),
            matrix_rows: 3,
            matrix_columns: 3,
        };
        assert_eq!(
            format!("{e}"),
            "splice [1..4, 1..2] out of bounds for 3x3 matrix"
        );
    }
}
