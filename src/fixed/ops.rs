use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::FixedMatrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for FixedMatrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for FixedMatrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a + b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Sub for FixedMatrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for FixedMatrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for FixedMatrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &FixedMatrix<T, R, C> {
    type Output = FixedMatrix<T, R, C>;

    fn neg(self) -> FixedMatrix<T, R, C> {
        (*self).neg()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&FixedMatrix<T, R, C>>
    for FixedMatrix<T, R, C>
{
    fn add_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&FixedMatrix<T, R, C>>
    for FixedMatrix<T, R, C>
{
    fn sub_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (R×K) * (K×P) → (R×P) ──────────────────

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<FixedMatrix<T, K, P>>
    for FixedMatrix<T, R, K>
{
    type Output = FixedMatrix<T, R, P>;

    fn mul(self, rhs: FixedMatrix<T, K, P>) -> FixedMatrix<T, R, P> {
        let mut out = FixedMatrix::<T, R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..K {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

/// `a *= b` for square `b`, so the receiver keeps its type.
impl<T: Scalar, const R: usize, const C: usize> MulAssign<FixedMatrix<T, C, C>>
    for FixedMatrix<T, R, C>
{
    fn mul_assign(&mut self, rhs: FixedMatrix<T, C, C>) {
        *self = *self * rhs;
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for FixedMatrix<T, R, C> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for FixedMatrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// FixedMatrix is Copy, so &FixedMatrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<FixedMatrix<T, R, C>>
            for &FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;
            fn $method(self, rhs: FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;
            fn $method(self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&FixedMatrix<T, R, C>>
            for &FixedMatrix<T, R, C>
        {
            type Output = FixedMatrix<T, R, C>;
            fn $method(self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<FixedMatrix<T, K, P>>
    for &FixedMatrix<T, R, K>
{
    type Output = FixedMatrix<T, R, P>;
    fn mul(self, rhs: FixedMatrix<T, K, P>) -> FixedMatrix<T, R, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&FixedMatrix<T, K, P>>
    for FixedMatrix<T, R, K>
{
    type Output = FixedMatrix<T, R, P>;
    fn mul(self, rhs: &FixedMatrix<T, K, P>) -> FixedMatrix<T, R, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&FixedMatrix<T, K, P>>
    for &FixedMatrix<T, R, K>
{
    type Output = FixedMatrix<T, R, P>;
    fn mul(self, rhs: &FixedMatrix<T, K, P>) -> FixedMatrix<T, R, P> {
        (*self).mul(*rhs)
    }
}

// ── Reference variant for scalar multiplication ─────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for &FixedMatrix<T, R, C> {
    type Output = FixedMatrix<T, R, C>;
    fn mul(self, rhs: T) -> FixedMatrix<T, R, C> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<FixedMatrix<$t, R, C>> for $t {
                type Output = FixedMatrix<$t, R, C>;

                fn mul(self, rhs: FixedMatrix<$t, R, C>) -> FixedMatrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&FixedMatrix<$t, R, C>> for $t {
                type Output = FixedMatrix<$t, R, C>;

                fn mul(self, rhs: &FixedMatrix<$t, R, C>) -> FixedMatrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "complex")]
impl_scalar_mul!(num_complex::Complex<f32>, num_complex::Complex<f64>);

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Transpose: (R×C) → (C×R).
    ///
    /// ```
    /// use primmatrix::FixedMatrix;
    /// let a = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let t = a.transpose();
    /// assert_eq!(t, FixedMatrix::new([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> FixedMatrix<T, C, R> {
        let mut out = FixedMatrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}
