use core::fmt;

/// Rectangular sub-region of a matrix: starting row/column and extent.
///
/// A splice is only meaningful against a concrete matrix shape; see
/// [`Splice::fits`].
///
/// ```
/// use primmatrix::Splice;
///
/// let s = Splice::new(1, 0, 2, 3);
/// assert!(s.fits(3, 3));
/// assert!(!s.fits(2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Splice {
    pub row_begin: usize,
    pub column_begin: usize,
    pub row_count: usize,
    pub column_count: usize,
}

impl Splice {
    pub const fn new(
        row_begin: usize,
        column_begin: usize,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        Self {
            row_begin,
            column_begin,
            row_count,
            column_count,
        }
    }

    /// One past the last row covered.
    #[inline]
    pub const fn row_end(&self) -> usize {
        self.row_begin.saturating_add(self.row_count)
    }

    /// One past the last column covered.
    #[inline]
    pub const fn column_end(&self) -> usize {
        self.column_begin.saturating_add(self.column_count)
    }

    /// Whether the region is non-empty and lies inside a `rows x columns` matrix.
    pub const fn fits(&self, rows: usize, columns: usize) -> bool {
        // Written as subtractions so huge extents cannot overflow.
        self.row_count != 0
            && self.column_count != 0
            && self.row_begin <= rows
            && self.row_count <= rows - self.row_begin
            && self.column_begin <= columns
            && self.column_count <= columns - self.column_begin
    }
}

impl fmt::Display for Splice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{}]",
            self.row_begin,
            self.row_end(),
            self.column_begin,
            self.column_end()
        )
    }
}
