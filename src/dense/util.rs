use alloc::vec::Vec;
use core::fmt;

use crate::fixed::write_aligned;

use super::DenseMatrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> DenseMatrix<T> {
    /// Apply a function to every element, producing a new matrix of the
    /// same shape.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let m = DenseMatrix::from_slice(2, 2, &[1_i32, 4, 9, 16]).unwrap();
    /// let r = m.map(|x| x as f64 * 0.5);
    /// assert_eq!(r[(0, 0)], 0.5);
    /// assert_eq!(r[(1, 1)], 8.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DenseMatrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        DenseMatrix::from_parts(data, self.rows, self.columns)
    }
}

// ── Iteration ───────────────────────────────────────────────────────

impl<T> DenseMatrix<T> {
    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// View row `i` as a slice.
    ///
    /// Panics if `i >= rows()`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.columns..(i + 1) * self.columns]
    }

    /// Iterate over rows, each as a slice of length `columns()`.
    #[inline]
    pub fn iter_rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.columns)
    }
}

impl<'a, T> IntoIterator for &'a DenseMatrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DenseMatrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DenseMatrix<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aligned(f, self.iter_rows(), &mut alloc::vec![0usize; self.columns])
    }
}
