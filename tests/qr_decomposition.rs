use titan_linalg::{LinAlgError, Matrix, QrDecomposition};

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            max = max.max((a.get(i, j) - b.get(i, j)).abs());
        }
    }
    max
}

fn assert_qr_roundtrip(a: &Matrix) {
    let QrDecomposition { q, r } = QrDecomposition::decompose(a).expect("decompose ok");

    let qr = q.multiply(&r).expect("matmul ok");
    assert!(max_abs_diff(&qr, a) < 1e-9, "Q*R != A, diff {}", max_abs_diff(&qr, a));

    let qtq = q.transpose().multiply(&q).expect("matmul ok");
    assert!(max_abs_diff(&qtq, &Matrix::identity(a.rows())) < 1e-12);

    for i in 0..r.rows() {
        for j in 0..i.min(r.cols()) {
            assert!(r.get(i, j).abs() < 1e-9, "r[{}][{}] = {}", i, j, r.get(i, j));
        }
    }
}

#[test]
fn roundtrip_classic_3x3() {
    let a = Matrix::from_rows(vec![
        vec![12.0, -51.0, 4.0],
        vec![6.0, 167.0, -68.0],
        vec![-4.0, 24.0, -41.0],
    ])
    .expect("matrix ok");
    assert_qr_roundtrip(&a);

    // First column has norm 14, so |r00| must land there.
    let QrDecomposition { q: _, r } = QrDecomposition::decompose(&a).expect("decompose ok");
    assert!((r.get(0, 0).abs() - 14.0).abs() < 1e-9);
}

#[test]
fn roundtrip_4x4() {
    let a = Matrix::from_rows(vec![
        vec![2.0, -1.0, 0.0, 3.0],
        vec![4.0, 1.0, -2.0, 1.0],
        vec![-2.0, 5.0, 1.0, 0.0],
        vec![1.0, 2.0, 8.0, -3.0],
    ])
    .expect("matrix ok");
    assert_qr_roundtrip(&a);
}

#[test]
fn roundtrip_tall_rectangular() {
    let a = Matrix::from_rows(vec![
        vec![1.0, 2.0],
        vec![3.0, 4.0],
        vec![5.0, 6.0],
        vec![7.0, 8.0],
    ])
    .expect("matrix ok");
    assert_qr_roundtrip(&a);
}

#[test]
fn roundtrip_column_with_leading_zero() {
    // Leading zero exercises the reflector's full-column rebuild.
    let a = Matrix::from_rows(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ])
    .expect("matrix ok");
    assert_qr_roundtrip(&a);
}

#[test]
fn wide_matrix_rejected() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("matrix ok");
    assert!(matches!(
        QrDecomposition::decompose(&a),
        Err(LinAlgError::DimensionMismatch(_))
    ));
}
