#![cfg(feature = "complex")]

use num_complex::Complex;
use primmatrix::{DenseMatrix, DenseMatrixz64, FixedMatrix, Matrix2};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

// ── Fixed ────────────────────────────────────────────────────────────

#[test]
fn complex_fixed_add_sub() {
    let a = FixedMatrix::new([[c(1.0, 1.0), c(2.0, 0.0)], [c(0.0, -1.0), c(3.0, 2.0)]]);
    let b = FixedMatrix::new([[c(0.0, 1.0), c(1.0, 1.0)], [c(2.0, 0.0), c(-3.0, 0.0)]]);
    let s = a + b;
    assert_eq!(s[(0, 0)], c(1.0, 2.0));
    assert_eq!(s[(1, 1)], c(0.0, 2.0));
    assert_eq!(s - b, a);
}

#[test]
fn complex_fixed_multiply() {
    // [[i, 1], [0, i]] squared = [[-1, 2i], [0, -1]]
    let a: Matrix2<C> = FixedMatrix::new([[c(0.0, 1.0), c(1.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]]);
    let sq = a * a;
    assert_eq!(sq, FixedMatrix::new([[c(-1.0, 0.0), c(0.0, 2.0)], [c(0.0, 0.0), c(-1.0, 0.0)]]));
}

#[test]
fn complex_identity_default_is_zero() {
    let id = Matrix2::<C>::identity();
    assert_eq!(id[(0, 0)], c(1.0, 0.0));
    assert_eq!(id[(0, 1)], C::default());
    assert_eq!(FixedMatrix::<C, 2, 3>::default().as_slice(), &[C::default(); 6]);
}

#[test]
fn complex_scalar_both_sides() {
    let a = FixedMatrix::new([[c(1.0, 0.0), c(0.0, 1.0)]]);
    let i = c(0.0, 1.0);
    assert_eq!(i * a, a * i);
    assert_eq!((i * a).as_slice(), &[c(0.0, 1.0), c(-1.0, 0.0)]);
}

// ── Dense ────────────────────────────────────────────────────────────

#[test]
fn complex_dense_multiply() {
    let a = DenseMatrix::from_slice(1, 2, &[c(1.0, 1.0), c(2.0, -1.0)]).unwrap();
    let b = DenseMatrix::from_slice(2, 1, &[c(1.0, -1.0), c(0.0, 1.0)]).unwrap();
    // (1+i)(1-i) + (2-i)(i) = 2 + (1 + 2i) = 3 + 2i
    let p = &a * &b;
    assert_eq!(p.shape(), (1, 1));
    assert_eq!(p[0], c(3.0, 2.0));
}

#[test]
fn complex_dense_scalar_and_neg() {
    let a: DenseMatrixz64 = DenseMatrix::from_slice(2, 1, &[c(1.0, 2.0), c(-3.0, 0.5)]).unwrap();
    let two = c(2.0, 0.0);
    assert_eq!(two * &a, &a * two);
    let n = -&a;
    assert_eq!(n[(0, 0)], c(-1.0, -2.0));
    assert_eq!(&n + &a, DenseMatrix::new(2, 1).unwrap());
}

#[test]
fn complex_dense_transpose_is_not_conjugate() {
    let a = DenseMatrix::from_slice(1, 2, &[c(1.0, 1.0), c(0.0, -2.0)]).unwrap();
    let t = a.transpose();
    assert_eq!(t.shape(), (2, 1));
    assert_eq!(t[(1, 0)], c(0.0, -2.0));
}
