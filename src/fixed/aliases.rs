//! Pre-defined type aliases for common fixed matrix shapes.

use crate::FixedMatrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = FixedMatrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = FixedMatrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = FixedMatrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = FixedMatrix<T, 4, 4>;

// ── Rectangular matrix aliases ─────────────────────────────────────

/// 2×3 matrix.
pub type Matrix2x3<T> = FixedMatrix<T, 2, 3>;
/// 3×2 matrix.
pub type Matrix3x2<T> = FixedMatrix<T, 3, 2>;
/// 3×4 matrix.
pub type Matrix3x4<T> = FixedMatrix<T, 3, 4>;
/// 4×3 matrix.
pub type Matrix4x3<T> = FixedMatrix<T, 4, 3>;

// ── Row / column shapes ────────────────────────────────────────────

/// Single-row (horizontal) matrix.
pub type RowMatrix<T, const N: usize> = FixedMatrix<T, 1, N>;
/// Single-column (vertical) matrix.
pub type ColumnMatrix<T, const N: usize> = FixedMatrix<T, N, 1>;
