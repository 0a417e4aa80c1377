use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MatrixError, Operation, Result};
use crate::traits::Scalar;

use super::DenseMatrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    fn ensure_same_shape(&self, rhs: &Self, operation: Operation) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::shape_mismatch(
                operation,
                self.shape(),
                rhs.shape(),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        DenseMatrix::from_parts(data, self.rows, self.columns)
    }

    /// Element-wise sum, or `ShapeMismatch` unless both shapes are equal.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let a = DenseMatrix::from_slice(2, 3, &[1, 2, 1, 4, 5, 6]).unwrap();
    /// let b = DenseMatrix::from_slice(2, 3, &[6, 5, 1, 3, 2, 1]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[7, 7, 2, 7, 7, 7]);
    /// assert!(a.try_add(&a.transpose()).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_shape(rhs, Operation::Addition)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference, or `ShapeMismatch` unless both shapes are equal.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_shape(rhs, Operation::Subtraction)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product: (M×N) * (N×P) → (M×P).
    ///
    /// Fails with `ShapeMismatch` when `self.columns() != rhs.rows()`.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let a = DenseMatrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let b = DenseMatrix::from_slice(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c.shape(), (2, 2));
    /// assert_eq!(c.as_slice(), &[22, 28, 49, 64]);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.columns != rhs.rows {
            return Err(MatrixError::shape_mismatch(
                Operation::Multiplication,
                self.shape(),
                rhs.shape(),
            ));
        }
        let m = self.rows;
        let n = self.columns;
        let p = rhs.columns;
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self.data[i * n + k] * rhs.data[k * p + j];
                }
                data.push(sum);
            }
        }
        Ok(DenseMatrix::from_parts(data, m, p))
    }

    /// In-place sum. On error the receiver is left unchanged.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.ensure_same_shape(rhs, Operation::Addition)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// In-place difference. On error the receiver is left unchanged.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.ensure_same_shape(rhs, Operation::Subtraction)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Replace `self` with `self * rhs`. On error the receiver is left unchanged.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let mut a = DenseMatrix::from_slice(1, 2, &[1, 2]).unwrap();
    /// let b = DenseMatrix::from_slice(2, 3, &[1, 0, 1, 0, 1, 1]).unwrap();
    /// a.try_mul_assign(&b).unwrap();
    /// assert_eq!(a.shape(), (1, 3));
    /// assert_eq!(a.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    /// Transpose: (M×N) → (N×M). The source is left untouched.
    ///
    /// ```
    /// use primmatrix::DenseMatrix;
    /// let a = DenseMatrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&self) -> Self {
        let m = self.rows;
        let n = self.columns;
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(self.data[i * n + j]);
            }
        }
        DenseMatrix::from_parts(data, n, m)
    }
}

/// Unwrap the result of a checked operator, panicking with the error message.
#[track_caller]
fn expect_shape<V>(result: Result<V>) -> V {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────
//
// Operators panic on a shape mismatch; use the `try_*` methods to get the
// error instead.

macro_rules! impl_elementwise_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $try:ident, $try_assign:ident) => {
        impl<T: Scalar> $Op<&DenseMatrix<T>> for &DenseMatrix<T> {
            type Output = DenseMatrix<T>;

            #[track_caller]
            fn $method(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
                expect_shape(self.$try(rhs))
            }
        }

        impl<T: Scalar> $Op<&DenseMatrix<T>> for DenseMatrix<T> {
            type Output = DenseMatrix<T>;

            #[track_caller]
            fn $method(mut self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
                expect_shape(self.$try_assign(rhs));
                self
            }
        }

        impl<T: Scalar> $Op<DenseMatrix<T>> for DenseMatrix<T> {
            type Output = DenseMatrix<T>;

            #[track_caller]
            fn $method(self, rhs: DenseMatrix<T>) -> DenseMatrix<T> {
                self.$method(&rhs)
            }
        }

        impl<T: Scalar> $Op<DenseMatrix<T>> for &DenseMatrix<T> {
            type Output = DenseMatrix<T>;

            #[track_caller]
            fn $method(self, rhs: DenseMatrix<T>) -> DenseMatrix<T> {
                self.$method(&rhs)
            }
        }

        impl<T: Scalar> $OpAssign<&DenseMatrix<T>> for DenseMatrix<T> {
            #[track_caller]
            fn $assign(&mut self, rhs: &DenseMatrix<T>) {
                expect_shape(self.$try_assign(rhs));
            }
        }

        impl<T: Scalar> $OpAssign for DenseMatrix<T> {
            #[track_caller]
            fn $assign(&mut self, rhs: Self) {
                expect_shape(self.$try_assign(&rhs));
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, try_add, try_add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, try_sub, try_sub_assign);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for DenseMatrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = T::zero() - *x;
        }
        self
    }
}

impl<T: Scalar> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> DenseMatrix<T> {
        self.map(|x| T::zero() - x)
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    #[track_caller]
    fn mul(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        expect_shape(self.try_mul(rhs))
    }
}

impl<T: Scalar> Mul for DenseMatrix<T> {
    type Output = Self;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&DenseMatrix<T>> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    #[track_caller]
    fn mul(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    #[track_caller]
    fn mul(self, rhs: DenseMatrix<T>) -> DenseMatrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> MulAssign<&DenseMatrix<T>> for DenseMatrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: &DenseMatrix<T>) {
        expect_shape(self.try_mul_assign(rhs));
    }
}

impl<T: Scalar> MulAssign for DenseMatrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: Self) {
        expect_shape(self.try_mul_assign(&rhs));
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for DenseMatrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: T) -> DenseMatrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for DenseMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_dense {
    ($($t:ty),*) => {
        $(
            impl Mul<DenseMatrix<$t>> for $t {
                type Output = DenseMatrix<$t>;
                fn mul(self, rhs: DenseMatrix<$t>) -> DenseMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&DenseMatrix<$t>> for $t {
                type Output = DenseMatrix<$t>;
                fn mul(self, rhs: &DenseMatrix<$t>) -> DenseMatrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_dense!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "complex")]
impl_scalar_mul_dense!(num_complex::Complex<f32>, num_complex::Complex<f64>);
