pub mod aliases;
mod ops;
mod splice;
mod util;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, Operation, Result};
use crate::traits::{MatrixIndex, MatrixMut, MatrixRef, Scalar};
use crate::FixedMatrix;

/// Layout of a matrix built from a flat sequence by [`DenseMatrix::from_flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The sequence becomes a single row (`1 x N`).
    Horizontal,
    /// The sequence becomes a single column (`N x 1`).
    Vertical,
}

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage: element `(row, col)` lives at
/// `row * columns + col`. Dimensions are set at construction and never
/// change; both are at least 1. Implements [`MatrixRef`] and [`MatrixMut`].
///
/// # Examples
///
/// ```
/// use primmatrix::DenseMatrix;
///
/// let a = DenseMatrix::from_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.columns(), 2);
///
/// let b = DenseMatrix::<f64>::identity(3).unwrap();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

/// Number of elements of a `rows x columns` matrix, or `InvalidShape`.
fn checked_size(rows: usize, columns: usize) -> Result<usize> {
    if rows == 0 || columns == 0 {
        return Err(MatrixError::invalid_shape(rows, columns));
    }
    rows.checked_mul(columns)
        .ok_or_else(|| MatrixError::invalid_shape(rows, columns))
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Create a `rows x columns` matrix of zeros.
    ///
    /// ```
    /// use primmatrix::{DenseMatrix, MatrixError};
    /// let m = DenseMatrix::<i32>::new(2, 3).unwrap();
    /// assert_eq!(m.size(), 6);
    /// assert_eq!(m[(1, 2)], 0);
    ///
    /// assert_eq!(
    ///     DenseMatrix::<i32>::new(0, 3),
    ///     Err(MatrixError::InvalidShape { rows: 0, columns: 3 })
    /// );
    /// ```
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::fill(rows, columns, T::zero())
    }

    /// Create a `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        Self::identity_with(size, T::one())
    }

    /// Square matrix with `diagonal` on the main diagonal and zero elsewhere.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let m = DenseMatrix::identity_with(3, 2.5_f64).unwrap();
    /// assert_eq!(m[(1, 1)], 2.5);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn identity_with(size: usize, diagonal: T) -> Result<Self> {
        let mut m = Self::new(size, size)?;
        for i in 0..size {
            m[(i, i)] = diagonal;
        }
        Ok(m)
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Create a matrix with every element set to `value`.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let m = DenseMatrix::fill(2, 3, 7.0_f64).unwrap();
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(rows: usize, columns: usize, value: T) -> Result<Self> {
        let size = checked_size(rows, columns)?;
        Ok(Self {
            data: vec![value; size],
            rows,
            columns,
        })
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let m = DenseMatrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_slice(rows: usize, columns: usize, slice: &[T]) -> Result<Self> {
        let size = checked_size(rows, columns)?;
        if slice.len() != size {
            return Err(MatrixError::initializer_size(slice.len(), size));
        }
        Ok(Self {
            data: slice.to_vec(),
            rows,
            columns,
        })
    }
}

impl<T> DenseMatrix<T> {
    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// ```
    /// use primmatrix::{DenseMatrix, MatrixError};
    /// let m = DenseMatrix::from_vec(5, 2, (0..10).collect()).unwrap();
    /// assert_eq!(
    ///     m.at(11),
    ///     Err(MatrixError::IndexOutOfBounds { index: 11, matrix_size: 10 })
    /// );
    /// ```
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let size = checked_size(rows, columns)?;
        if data.len() != size {
            return Err(MatrixError::initializer_size(data.len(), size));
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Build a single-row or single-column matrix from a flat sequence.
    ///
    /// ```
    /// use primmatrix::{DenseMatrix, MatrixError, Orientation};
    /// let v = DenseMatrix::from_flat(vec![1, 2, 3], Orientation::Vertical).unwrap();
    /// assert_eq!((v.rows(), v.columns()), (3, 1));
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(
    ///     DenseMatrix::from_flat(empty, Orientation::Horizontal),
    ///     Err(MatrixError::EmptySource)
    /// );
    /// ```
    pub fn from_flat(data: Vec<T>, orientation: Orientation) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrixError::empty_source());
        }
        let (rows, columns) = match orientation {
            Orientation::Horizontal => (1, data.len()),
            Orientation::Vertical => (data.len(), 1),
        };
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m, DenseMatrix::identity(3).unwrap());
    /// ```
    pub fn from_fn(rows: usize, columns: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        let size = checked_size(rows, columns)?;
        let mut data = Vec::with_capacity(size);
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Bounds-checked access by linear offset or `(row, column)`.
    ///
    /// ```
    /// use primmatrix::{DenseMatrix, MatrixError};
    /// let m = DenseMatrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.at((1, 2)), Ok(&6));
    /// assert_eq!(
    ///     m.at((0, 3)),
    ///     Err(MatrixError::RowColumnOutOfBounds {
    ///         row: 0,
    ///         column: 3,
    ///         matrix_rows: 2,
    ///         matrix_columns: 3,
    ///     })
    /// );
    /// ```
    pub fn at<I: MatrixIndex>(&self, index: I) -> Result<&T> {
        let offset = index.checked_offset(self.rows, self.columns)?;
        Ok(&self.data[offset])
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut<I: MatrixIndex>(&mut self, index: I) -> Result<&mut T> {
        let offset = index.checked_offset(self.rows, self.columns)?;
        Ok(&mut self.data[offset])
    }

    /// View the matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Assemble a matrix whose shape is already known to be valid.
    pub(crate) fn from_parts(data: Vec<T>, rows: usize, columns: usize) -> Self {
        debug_assert_eq!(data.len(), rows * columns);
        Self {
            data,
            rows,
            columns,
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DenseMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.columns
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.columns + col]
    }
}

impl<T> MatrixMut<T> for DenseMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.columns + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

// Unchecked access: only the backing buffer bound applies.
impl<T, I: MatrixIndex> Index<I> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.data[index.offset(self.columns)]
    }
}

impl<T, I: MatrixIndex> IndexMut<I> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.data[index.offset(self.columns)]
    }
}

// ── Conversions: FixedMatrix ↔ DenseMatrix ──────────────────────────

impl<T: Scalar, const R: usize, const C: usize> From<FixedMatrix<T, R, C>> for DenseMatrix<T> {
    /// Convert a fixed-size `FixedMatrix` into a `DenseMatrix`.
    ///
    /// ```
    /// use primmatrix::{FixedMatrix, DenseMatrix};
    /// let m = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let d: DenseMatrix<f64> = m.into();
    /// assert_eq!(d.rows(), 2);
    /// assert_eq!(d[(1, 1)], 4.0);
    /// ```
    fn from(m: FixedMatrix<T, R, C>) -> Self {
        Self::from(&m)
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<&FixedMatrix<T, R, C>> for DenseMatrix<T> {
    fn from(m: &FixedMatrix<T, R, C>) -> Self {
        Self::from_parts(m.as_slice().to_vec(), R, C)
    }
}

impl<T: Scalar, const R: usize, const C: usize> TryFrom<&DenseMatrix<T>> for FixedMatrix<T, R, C> {
    type Error = MatrixError;

    /// Try to convert a `DenseMatrix` into a fixed-size `FixedMatrix`.
    ///
    /// Fails if the runtime dimensions don't match `R x C`.
    ///
    /// ```
    /// use primmatrix::{FixedMatrix, DenseMatrix};
    /// let d = DenseMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let m: FixedMatrix<f64, 2, 2> = (&d).try_into().unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    fn try_from(d: &DenseMatrix<T>) -> Result<Self> {
        if d.shape() != (R, C) {
            return Err(MatrixError::shape_mismatch(
                Operation::Conversion,
                (R, C),
                d.shape(),
            ));
        }
        FixedMatrix::from_slice(d.as_slice())
    }
}
