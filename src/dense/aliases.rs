//! Pre-defined type aliases for common `DenseMatrix` element types.

use super::DenseMatrix;

/// Dense matrix with `f32` elements.
pub type DenseMatrixf32 = DenseMatrix<f32>;
/// Dense matrix with `f64` elements.
pub type DenseMatrixf64 = DenseMatrix<f64>;
/// Dense matrix with `i32` elements.
pub type DenseMatrixi32 = DenseMatrix<i32>;
/// Dense matrix with `i64` elements.
pub type DenseMatrixi64 = DenseMatrix<i64>;
/// Dense matrix with `u32` elements.
pub type DenseMatrixu32 = DenseMatrix<u32>;
/// Dense matrix with `u64` elements.
pub type DenseMatrixu64 = DenseMatrix<u64>;

// ── Complex aliases (behind `complex` feature) ──────────────────────

/// Dense matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type DenseMatrixz32 = DenseMatrix<num_complex::Complex<f32>>;
/// Dense matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type DenseMatrixz64 = DenseMatrix<num_complex::Complex<f64>>;
