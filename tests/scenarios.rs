#![cfg(feature = "alloc")]

use primmatrix::{
    ColumnMatrix, DenseMatrix, DenseMatrixf64, FixedMatrix, Matrix2, MatrixError, MatrixMut,
    MatrixRef, Operation, Orientation, RowMatrix, Scalar, ShapeMismatch, Splice,
};

// ── Dense arithmetic ─────────────────────────────────────────────────

#[test]
fn dense_addition() {
    let a = DenseMatrix::from_slice(2, 3, &[1, 2, 1, 4, 5, 6]).unwrap();
    let b = DenseMatrix::from_slice(2, 3, &[6, 5, 1, 3, 2, 1]).unwrap();
    let c = a + b;
    assert_eq!(c.shape(), (2, 3));
    assert_eq!(c.as_slice(), &[7, 7, 2, 7, 7, 7]);
}

#[test]
fn dense_multiplication() {
    let a = DenseMatrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    let b = DenseMatrix::from_slice(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
    let c = a * b;
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[22, 28, 49, 64]);
}

#[test]
fn dense_initializer_too_short() {
    assert_eq!(
        DenseMatrix::from_slice(2, 3, &[1, 2, 3]),
        Err(MatrixError::InitializerSizeMismatch {
            initializer_size: 3,
            matrix_size: 6
        })
    );
}

#[test]
fn dense_linear_index_out_of_bounds() {
    let m = DenseMatrix::from_vec(5, 2, (0..10).collect::<Vec<i32>>()).unwrap();
    assert_eq!(
        m.at(11),
        Err(MatrixError::IndexOutOfBounds {
            index: 11,
            matrix_size: 10
        })
    );
}

#[test]
fn dense_zero_dimension_rejected() {
    assert_eq!(
        DenseMatrixf64::new(0, 2),
        Err(MatrixError::InvalidShape { rows: 0, columns: 2 })
    );
    assert!(DenseMatrixf64::new(2, 0).is_err());
}

#[test]
fn dense_compound_assign_in_sequence() {
    let mut m = DenseMatrix::<i64>::identity(2).unwrap();
    let step = DenseMatrix::from_slice(2, 2, &[1, 1, 0, 1]).unwrap();
    for _ in 0..3 {
        m *= &step;
    }
    assert_eq!(m.as_slice(), &[1, 3, 0, 1]);
    m += &step;
    m -= DenseMatrix::identity(2).unwrap();
    assert_eq!(m.as_slice(), &[1, 4, 0, 1]);
    m *= 3;
    assert_eq!(m.as_slice(), &[3, 12, 0, 3]);
}

#[test]
fn dense_mismatch_reports_operation_and_shapes() {
    let row = DenseMatrix::from_flat(vec![1.0, 2.0, 3.0], Orientation::Horizontal).unwrap();
    let column = DenseMatrix::from_flat(vec![1.0, 2.0, 3.0], Orientation::Vertical).unwrap();

    let err = row.try_sub(&column).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ShapeMismatch(ShapeMismatch {
            operation: Operation::Subtraction,
            lhs: (1, 3),
            rhs: (3, 1)
        })
    );
    assert_eq!(err.to_string(), "shape mismatch in subtraction: 1x3 and 3x1");

    // Outer and inner products are both conformant.
    assert_eq!((&row * &column).as_slice(), &[14.0]);
    assert_eq!((&column * &row).shape(), (3, 3));
}

#[test]
fn errors_are_std_errors() {
    fn boxed() -> Result<DenseMatrix<u8>, Box<dyn std::error::Error>> {
        Ok(DenseMatrix::new(0, 1)?)
    }
    let err = boxed().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid matrix shape 0x1: both dimensions must be at least 1"
    );
}

// ── Fixed matrices ───────────────────────────────────────────────────

#[test]
fn fixed_arithmetic() {
    let a = FixedMatrix::new([[1, 2, 1], [4, 5, 6]]);
    let b = FixedMatrix::new([[6, 5, 1], [3, 2, 1]]);
    assert_eq!((a + b).as_slice(), &[7, 7, 2, 7, 7, 7]);
    assert_eq!(a + b - b, a);

    let a = FixedMatrix::new([[1, 2, 3], [4, 5, 6]]);
    let b = FixedMatrix::new([[1, 2], [3, 4], [5, 6]]);
    let c: Matrix2<i32> = a * b;
    assert_eq!(c, FixedMatrix::new([[22, 28], [49, 64]]));
}

#[test]
fn fixed_row_times_column() {
    let r: RowMatrix<i32, 3> = FixedMatrix::new([[1, 2, 3]]);
    let c: ColumnMatrix<i32, 3> = r.transpose();
    assert_eq!(r * c, FixedMatrix::new([[14]]));
    assert_eq!((c * r).rows(), 3);
}

#[test]
fn fixed_bounds_checked_access() {
    let mut m = FixedMatrix::<i32, 5, 2>::from_row_major(0..10).unwrap();
    assert_eq!(m.at(9), Ok(&9));
    assert_eq!(
        m.at(10),
        Err(MatrixError::IndexOutOfBounds {
            index: 10,
            matrix_size: 10
        })
    );
    assert_eq!(
        m.at((0, 2)),
        Err(MatrixError::RowColumnOutOfBounds {
            row: 0,
            column: 2,
            matrix_rows: 5,
            matrix_columns: 2
        })
    );
    *m.at_mut((4, 1)).unwrap() = -1;
    assert_eq!(m[9], -1);
}

#[test]
fn fixed_and_dense_round_trip() {
    let f = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let d = DenseMatrix::from(f);
    let back: FixedMatrix<f64, 2, 2> = (&d).try_into().unwrap();
    assert_eq!(back, f);

    let wrong: Result<FixedMatrix<f64, 1, 4>, _> = (&d).try_into();
    assert!(matches!(
        wrong,
        Err(MatrixError::ShapeMismatch(ShapeMismatch {
            operation: Operation::Conversion,
            ..
        }))
    ));
}

// ── Splices ──────────────────────────────────────────────────────────

#[test]
fn splices_of_both_kinds_agree() {
    let f: FixedMatrix<i32, 4, 4> = FixedMatrix::from_fn(|i, j| (10 * i + j) as i32);
    let d = DenseMatrix::from(f);

    let fixed_block = f.splice::<1, 2, 3, 2>();
    let dense_block = d.splice(Splice::new(1, 2, 3, 2)).unwrap();
    assert_eq!(DenseMatrix::from(fixed_block), dense_block);
    assert_eq!(dense_block.as_slice(), &[12, 13, 22, 23, 32, 33]);

    let runtime: FixedMatrix<i32, 3, 2> = f.splice_at(1, 2).unwrap();
    assert_eq!(runtime, fixed_block);
    assert!(f.splice_at::<3, 2>(2, 2).is_err());
    assert!(d.splice(Splice::new(2, 2, 3, 2)).is_err());
}

// ── Generic access ───────────────────────────────────────────────────

fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
    let mut sum = T::zero();
    for i in 0..m.nrows().min(m.ncols()) {
        sum = sum + *m.get(i, i);
    }
    sum
}

fn scale_diagonal<T: Scalar>(m: &mut impl MatrixMut<T>, s: T) {
    for i in 0..m.nrows().min(m.ncols()) {
        let x = m.get_mut(i, i);
        *x = *x * s;
    }
}

#[test]
fn generic_routines_over_both_kinds() {
    let mut f = FixedMatrix::new([[1, 2], [3, 4]]);
    let mut d = DenseMatrix::from(f);
    assert_eq!(trace(&f), 5);
    assert_eq!(trace(&d), 5);

    scale_diagonal(&mut f, 2);
    scale_diagonal(&mut d, 2);
    assert_eq!(DenseMatrix::from(f), d);
    assert_eq!(d.as_slice(), &[2, 2, 3, 8]);
}

#[test]
fn display_output() {
    let d = DenseMatrix::from_slice(2, 2, &[1, -20, 300, 4]).unwrap();
    assert_eq!(d.to_string(), "[  1  -20]\n[300    4]");
}
