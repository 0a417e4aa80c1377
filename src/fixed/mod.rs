pub mod aliases;
mod ops;
mod splice;
mod util;

use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::traits::{MatrixIndex, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "alloc")]
pub(crate) use util::write_aligned;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`, stack-allocated, no-std compatible.
/// The shape is part of the type, so addition, subtraction, multiplication
/// and splicing are shape-checked by the compiler.
///
/// # Examples
///
/// ```
/// use primmatrix::FixedMatrix;
///
/// let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.columns(), 2);
///
/// let b: FixedMatrix<f64, 3, 3> = FixedMatrix::identity();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
///
/// A matrix with a zero dimension cannot be built:
///
/// ```compile_fail
/// use primmatrix::FixedMatrix;
/// let m: FixedMatrix<i32, 0, 3> = FixedMatrix::zeros();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    const NON_EMPTY: () = assert!(R != 0 && C != 0, "FixedMatrix dimensions must be non-zero");

    /// Create a matrix from row arrays.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Total number of elements, `R * C`.
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    /// Bounds-checked access by linear offset or `(row, column)`.
    ///
    /// ```
    /// use primmatrix::{FixedMatrix, MatrixError};
    ///
    /// let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.at((1, 0)), Ok(&4));
    /// assert_eq!(
    ///     m.at(6),
    ///     Err(MatrixError::IndexOutOfBounds { index: 6, matrix_size: 6 })
    /// );
    /// ```
    pub fn at<I: MatrixIndex>(&self, index: I) -> Result<&T> {
        let offset = index.checked_offset(R, C)?;
        Ok(&self.as_slice()[offset])
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut<I: MatrixIndex>(&mut self, index: I) -> Result<&mut T> {
        let offset = index.checked_offset(R, C)?;
        Ok(&mut self.as_mut_slice()[offset])
    }
}

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(value: T) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [[value; C]; R],
        }
    }

    /// Create a matrix from a flat row-major slice of exactly `R * C` elements.
    ///
    /// ```
    /// use primmatrix::{FixedMatrix, MatrixError};
    ///
    /// let m: FixedMatrix<i32, 2, 2> = FixedMatrix::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    ///
    /// let err = FixedMatrix::<i32, 2, 2>::from_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     MatrixError::InitializerSizeMismatch { initializer_size: 3, matrix_size: 4 }
    /// );
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        if slice.len() != R * C {
            return Err(MatrixError::initializer_size(slice.len(), R * C));
        }
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(slice);
        Ok(m)
    }

    /// Aggregate-style construction: elements are taken in row-major order,
    /// missing trailing elements are zero.
    ///
    /// Fails with `InitializerSizeMismatch` if more than `R * C` elements are
    /// supplied.
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    ///
    /// let m: FixedMatrix<i32, 2, 3> = FixedMatrix::from_row_major([1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4, 0, 0]);
    ///
    /// assert!(FixedMatrix::<i32, 1, 2>::from_row_major([1, 2, 3]).is_err());
    /// ```
    pub fn from_row_major<I: IntoIterator<Item = T>>(elements: I) -> Result<Self> {
        let mut out = Self::zeros();
        let mut elements = elements.into_iter();
        for slot in out.as_mut_slice().iter_mut() {
            match elements.next() {
                Some(value) => *slot = value,
                None => return Ok(out),
            }
        }
        let extra = elements.count();
        if extra > 0 {
            return Err(MatrixError::initializer_size(R * C + extra, R * C));
        }
        Ok(out)
    }
}

impl<T: Scalar, const N: usize> FixedMatrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn identity() -> Self {
        Self::identity_with(T::one())
    }

    /// Square matrix with `diagonal` on the main diagonal and zero elsewhere.
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    /// let m: FixedMatrix<i32, 2, 2> = FixedMatrix::identity_with(5);
    /// assert_eq!(m, FixedMatrix::new([[5, 0], [0, 5]]));
    /// ```
    pub fn identity_with(diagonal: T) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = diagonal;
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> MatrixRef<T> for FixedMatrix<T, R, C> {
    #[inline]
    fn nrows(&self) -> usize {
        R
    }

    #[inline]
    fn ncols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> MatrixMut<T> for FixedMatrix<T, R, C> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row][col]
    }
}

// Unchecked access: only the backing array bound applies.
impl<T, I: MatrixIndex, const R: usize, const C: usize> Index<I> for FixedMatrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.as_slice()[index.offset(C)]
    }
}

impl<T, I: MatrixIndex, const R: usize, const C: usize> IndexMut<I> for FixedMatrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.as_mut_slice()[index.offset(C)]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_identity() {
        let z: FixedMatrix<f64, 3, 3> = FixedMatrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: FixedMatrix<f64, 3, 3> = FixedMatrix::identity();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn new_and_index() {
        let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.size(), 6);
        for (index, expected) in (1..=6).enumerate() {
            assert_eq!(m[index], expected);
            assert_eq!(m.at(index), Ok(&expected));
        }
        assert_eq!(m[(1, 2)], 6);
    }

    #[test]
    fn row_column_matches_linear() {
        let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
        let mut index = 0;
        for row in 0..m.rows() {
            for column in 0..m.columns() {
                assert_eq!(m.at((row, column)), m.at(index));
                index += 1;
            }
        }
    }

    #[test]
    fn at_out_of_bounds() {
        let m: FixedMatrix<i32, 2, 3> = FixedMatrix::zeros();
        assert_eq!(
            m.at(6),
            Err(MatrixError::IndexOutOfBounds {
                index: 6,
                matrix_size: 6
            })
        );
        assert_eq!(
            m.at((2, 0)),
            Err(MatrixError::RowColumnOutOfBounds {
                row: 2,
                column: 0,
                matrix_rows: 2,
                matrix_columns: 3
            })
        );
    }

    #[test]
    fn at_mut_writes() {
        let mut m: FixedMatrix<i32, 2, 2> = FixedMatrix::zeros();
        *m.at_mut((0, 1)).unwrap() = 5;
        *m.at_mut(3).unwrap() = 7;
        assert_eq!(m, FixedMatrix::new([[0, 5], [0, 7]]));
        assert!(m.at_mut((0, 2)).is_err());
    }

    #[test]
    fn index_mut() {
        let mut m: FixedMatrix<f64, 2, 2> = FixedMatrix::zeros();
        m[(0, 1)] = 5.0;
        m[2] = 3.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn default_is_zero() {
        let m: FixedMatrix<i32, 2, 3> = FixedMatrix::default();
        assert!(m.iter().all(|&x| x == 0));
    }

    #[test]
    fn from_row_major_partial_and_exact() {
        let m: FixedMatrix<i32, 2, 3> = FixedMatrix::from_row_major([1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m, FixedMatrix::new([[1, 2, 3], [4, 5, 6]]));

        let empty: FixedMatrix<i32, 2, 3> = FixedMatrix::from_row_major([]).unwrap();
        assert_eq!(empty, FixedMatrix::zeros());
    }

    #[test]
    fn from_row_major_too_many() {
        let err = FixedMatrix::<i32, 2, 2>::from_row_major(1..=7).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InitializerSizeMismatch {
                initializer_size: 7,
                matrix_size: 4
            }
        );
    }

    #[test]
    fn copy_is_independent() {
        let a = FixedMatrix::new([[1, 2], [3, 4]]);
        let mut b = a;
        b[(0, 0)] = 9;
        assert_eq!(a[(0, 0)], 1);
        assert_eq!(b[(0, 0)], 9);
    }

    #[test]
    fn matrix_ref_trait() {
        let m = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);

        fn trace_generic<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + *m.get(i, i);
            }
            sum
        }

        assert_eq!(trace_generic(&m), 5.0);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m: FixedMatrix<f64, 2, 2> = FixedMatrix::zeros();

        fn set_diag<T: Scalar>(m: &mut impl MatrixMut<T>, val: T) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }

        set_diag(&mut m, 7.0);
        assert_eq!(m[(0, 0)], 7.0);
        assert_eq!(m[(1, 1)], 7.0);
        assert_eq!(m[(0, 1)], 0.0);
    }
}
