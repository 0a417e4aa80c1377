//! # primmatrix
//!
//! Dense matrices of primitive numeric elements, no-std compatible. Two
//! flavours share one vocabulary of operations:
//!
//! - [`FixedMatrix<T, R, C>`] carries its shape in the type. Storage is an
//!   inline `[[T; C]; R]`, shape errors in arithmetic are compile errors, and
//!   zero-sized shapes are rejected at compile time.
//! - [`DenseMatrix<T>`] (requires `alloc`, included with `std`) fixes its
//!   shape at construction from run-time values. Storage is a `Vec<T>`.
//!   Arithmetic has checked `try_*` forms returning [`MatrixError`]; the
//!   operators panic with the same message on a shape mismatch.
//!
//! Both store elements row-major: element `(row, column)` lives at offset
//! `row * columns + column`.
//!
//! ## Quick start
//!
//! ```
//! use primmatrix::{DenseMatrix, FixedMatrix};
//!
//! let a = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
//! let b = FixedMatrix::new([[1, 2], [3, 4], [5, 6]]);
//! assert_eq!(a * b, FixedMatrix::new([[22, 28], [49, 64]]));
//!
//! let d = DenseMatrix::from(a);
//! let t = d.transpose();
//! assert_eq!(t.shape(), (3, 2));
//! assert!(d.try_add(&t).is_err());
//! ```
//!
//! Mismatched fixed shapes do not compile:
//!
//! ```compile_fail
//! use primmatrix::FixedMatrix;
//! let a = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
//! let b = FixedMatrix::new([[1, 2], [3, 4]]);
//! let _ = a + b;
//! ```
//!
//! ```compile_fail
//! use primmatrix::FixedMatrix;
//! let a = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
//! let _ = a * a;
//! ```
//!
//! ## Modules
//!
//! - [`fixed`]: `FixedMatrix`, its arithmetic, compile-time splices and
//!   shape aliases ([`Matrix2`], [`RowMatrix`], ...).
//! - [`dense`]: `DenseMatrix`, checked arithmetic, run-time splices and
//!   element-type aliases ([`DenseMatrixf64`], ...).
//! - [`splice`]: [`Splice`], a rectangular region descriptor.
//! - [`error`]: [`MatrixError`] and the [`Result`] alias.
//! - [`traits`]: [`Scalar`] element bound, [`MatrixIndex`] positions and
//!   the [`MatrixRef`] / [`MatrixMut`] access traits.
//!
//! ## Logging
//!
//! Every error the crate constructs is emitted at `debug` level through the
//! [`log`](https://docs.rs/log) facade. Install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. `std::error::Error` for `MatrixError` |
//! | `alloc`   | via std  | `DenseMatrix` (heap-allocated, runtime-sized) |
//! | `libm`    | no       | Pure-Rust float fallback for `num-traits` on no-std |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dense;
pub mod error;
pub mod fixed;
pub mod splice;
pub mod traits;

pub use error::{MatrixError, Operation, Result, ShapeMismatch};
pub use fixed::aliases::{
    ColumnMatrix, Matrix1, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3,
    RowMatrix,
};
pub use fixed::FixedMatrix;
pub use splice::Splice;
pub use traits::{MatrixIndex, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "alloc")]
pub use dense::{
    DenseMatrix, DenseMatrixf32, DenseMatrixf64, DenseMatrixi32, DenseMatrixi64, DenseMatrixu32,
    DenseMatrixu64, Orientation,
};
#[cfg(all(feature = "alloc", feature = "complex"))]
pub use dense::{DenseMatrixz32, DenseMatrixz64};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
