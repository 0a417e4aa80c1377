use core::fmt::{self, Write as _};

use crate::traits::Scalar;
use crate::FixedMatrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    /// let m: FixedMatrix<f64, 3, 3> = FixedMatrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, FixedMatrix::identity());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut m = Self::zeros();
        for (i, row) in m.data.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        m
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    /// let m = FixedMatrix::new([[1, 2], [3, 4]]);
    /// let r = m.map(|x| x as f64 / 2.0);
    /// assert_eq!(r[(1, 1)], 2.0);
    /// ```
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> FixedMatrix<U, R, C> {
        let mut out = FixedMatrix::<U, R, C>::zeros();
        for (o, &x) in out.iter_mut().zip(self.iter()) {
            *o = f(x);
        }
        out
    }
}

// ── Slice access ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// View row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate over rows, each as an array `&[T; C]`.
    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T; C]> {
        self.data.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a FixedMatrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut FixedMatrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aligned(f, self.data.iter().map(|row| &row[..]), &mut [0usize; C])
    }
}

/// Write `rows` one per line as `[a  b  c]`, right-aligning each column.
///
/// `widths` holds one slot per column and is used as scratch space.
pub(crate) fn write_aligned<'a, T, I>(
    f: &mut fmt::Formatter<'_>,
    rows: I,
    widths: &mut [usize],
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a [T]> + Clone,
{
    for row in rows.clone() {
        for (w, x) in widths.iter_mut().zip(row) {
            *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{x}")));
        }
    }

    for (i, row) in rows.enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "[")?;
        for (j, (x, width)) in row.iter().zip(widths.iter().copied()).enumerate() {
            if j > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{x:>width$}")?;
        }
        write!(f, "]")?;
    }
    Ok(())
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
