use alloc::vec::Vec;

use crate::error::{MatrixError, Result};
use crate::splice::Splice;

use super::DenseMatrix;

impl<T: Clone> DenseMatrix<T> {
    /// Copy the region described by `splice` into a new matrix.
    ///
    /// The region must be non-empty and lie entirely inside the source,
    /// otherwise `SpliceOutOfBounds` is returned.
    ///
    /// ```
    /// use primmatrix::{DenseMatrix, MatrixError, Splice};
    /// let m = DenseMatrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    /// let b = m.splice(Splice::new(1, 1, 2, 2)).unwrap();
    /// assert_eq!(b.as_slice(), &[5, 6, 8, 9]);
    ///
    /// assert_eq!(
    ///     m.splice(Splice::new(2, 0, 2, 1)),
    ///     Err(MatrixError::SpliceOutOfBounds {
    ///         splice: Splice::new(2, 0, 2, 1),
    ///         matrix_rows: 3,
    ///         matrix_columns: 3,
    ///     })
    /// );
    /// ```
    pub fn splice(&self, splice: Splice) -> Result<Self> {
        if !splice.fits(self.rows, self.columns) {
            return Err(MatrixError::splice_out_of_bounds(
                splice,
                self.rows,
                self.columns,
            ));
        }
        let mut data = Vec::with_capacity(splice.row_count * splice.column_count);
        for row in self.iter_rows().skip(splice.row_begin).take(splice.row_count) {
            data.extend_from_slice(&row[splice.column_begin..splice.column_end()]);
        }
        Ok(Self::from_parts(
            data,
            splice.row_count,
            splice.column_count,
        ))
    }
}
