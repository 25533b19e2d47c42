use titan_linalg::{householder, Matrix, Vector};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            max = max.max((a.get(i, j) - b.get(i, j)).abs());
        }
    }
    max
}

#[test]
fn reflector_invariants() {
    let x = Vector::try_new(vec![1.0, 2.0, 3.0]).expect("vector ok");
    let h = householder::transform(&x);

    let id = Matrix::identity(3);
    assert!(max_abs_diff(&h.transpose().multiply(&h).expect("matmul ok"), &id) < 1e-12);
    assert!(h.is_involutory(1e-12));
    assert!(h.is_symmetric(1e-12));
    assert!(approx_eq(h.determinant().expect("det ok"), -1.0, 1e-12));
    // n-1 eigenvalues at +1 and one at -1 leave trace = n - 2.
    assert!(approx_eq(h.trace().expect("trace ok"), 1.0, 1e-12));
}

#[test]
fn reflection_zeroes_trailing_entries() {
    let x = Vector::try_new(vec![1.0, 2.0, 3.0]).expect("vector ok");
    let h = householder::transform(&x);
    let hx = h.vector_multiply(&x).expect("matvec ok");
    let norm = x.norm();
    assert!(approx_eq(hx.get(0), -norm, 1e-12 * norm.max(1.0)));
    assert!(hx.get(1).abs() < 1e-12);
    assert!(hx.get(2).abs() < 1e-12);
    // Reflections preserve length.
    assert!(approx_eq(hx.norm(), norm, 1e-12 * norm.max(1.0)));
}

#[test]
fn cancellation_resistance_across_sixteen_orders() {
    // One huge component next to unit ones: the stable sign choice must
    // still zero the trailing entries relative to the vector magnitude.
    let x = Vector::try_new(vec![1e16, 1.0, 1.0]).expect("vector ok");
    let norm = x.norm();
    let h = householder::transform(&x);
    let hx = h.vector_multiply(&x).expect("matvec ok");

    assert!(hx.get(1).abs() <= 1e-14 * norm, "hx[1] = {}", hx.get(1));
    assert!(hx.get(2).abs() <= 1e-14 * norm, "hx[2] = {}", hx.get(2));
    assert!(approx_eq(hx.get(0), -norm, 1e-14 * norm));

    // The reflector itself stays orthogonal in absolute terms.
    let id = Matrix::identity(3);
    assert!(max_abs_diff(&h.transpose().multiply(&h).expect("matmul ok"), &id) < 1e-12);
    assert!(h.is_involutory(1e-12));
}

#[test]
fn zero_vector_degenerates_to_identity() {
    let h = householder::transform(&Vector::zeros(4));
    assert_eq!(h, Matrix::identity(4));
}
