use crate::error::{MatrixError, Result};
use crate::splice::Splice;
use crate::traits::Scalar;
use crate::FixedMatrix;

/// Compile-time bounds of a splice against an `R x C` source.
struct SpliceBounds<
    const R: usize,
    const C: usize,
    const ROW: usize,
    const COL: usize,
    const ROWS: usize,
    const COLS: usize,
>;

impl<
        const R: usize,
        const C: usize,
        const ROW: usize,
        const COL: usize,
        const ROWS: usize,
        const COLS: usize,
    > SpliceBounds<R, C, ROW, COL, ROWS, COLS>
{
    const IN_BOUNDS: () = assert!(
        ROW + ROWS <= R && COL + COLS <= C,
        "splice extends past the source matrix"
    );
}

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Extract the `ROWS x COLS` sub-matrix whose top-left corner is
    /// `(ROW, COL)`.
    ///
    /// The region is checked at compile time.
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    /// let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let b = m.splice::<1, 1, 2, 2>();
    /// assert_eq!(b, FixedMatrix::new([[5, 6], [8, 9]]));
    /// ```
    ///
    /// ```compile_fail
    /// use primmatrix::FixedMatrix;
    /// let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let b = m.splice::<2, 0, 2, 1>();
    /// ```
    pub fn splice<const ROW: usize, const COL: usize, const ROWS: usize, const COLS: usize>(
        &self,
    ) -> FixedMatrix<T, ROWS, COLS> {
        let () = SpliceBounds::<R, C, ROW, COL, ROWS, COLS>::IN_BOUNDS;
        self.copy_region(ROW, COL)
    }

    /// Extract a `ROWS x COLS` sub-matrix starting at a run-time position.
    ///
    /// The extent is fixed by the type; the position is validated against
    /// the source and reported as `SpliceOutOfBounds` when the region does
    /// not fit.
    ///
    /// ```
    /// use primmatrix::{FixedMatrix, MatrixError, Splice};
    /// let m = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let col: FixedMatrix<i32, 2, 1> = m.splice_at(0, 2).unwrap();
    /// assert_eq!(col, FixedMatrix::new([[3], [6]]));
    ///
    /// let err = m.splice_at::<2, 2>(0, 2).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     MatrixError::SpliceOutOfBounds {
    ///         splice: Splice::new(0, 2, 2, 2),
    ///         matrix_rows: 2,
    ///         matrix_columns: 3,
    ///     }
    /// );
    /// ```
    pub fn splice_at<const ROWS: usize, const COLS: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Result<FixedMatrix<T, ROWS, COLS>> {
        let splice = Splice::new(row, col, ROWS, COLS);
        if !splice.fits(R, C) {
            return Err(MatrixError::splice_out_of_bounds(splice, R, C));
        }
        Ok(self.copy_region(row, col))
    }

    fn copy_region<const ROWS: usize, const COLS: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> FixedMatrix<T, ROWS, COLS> {
        let mut out = FixedMatrix::<T, ROWS, COLS>::zeros();
        for (r, out_row) in out.data.iter_mut().enumerate() {
            out_row.copy_from_slice(&self.data[row + r][col..col + COLS]);
        }
        out
    }
}
