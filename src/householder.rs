//! Householder reflections.
//!
//! `transform(x)` builds the orthogonal, involutory reflector `H` with
//! `H*x = (-sign(x0)*||x||, 0, ..., 0)^T`. The reflection target carries the
//! sign opposite to `x0`, so the reflection vector is formed by a same-sign
//! sum rather than a difference of nearly equal magnitudes; this keeps the
//! reflector accurate even when the components of `x` span many orders.
#![allow(clippy::needless_range_loop)]

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Reflector for the full space of `x`. A (numerically) zero input is
/// already aligned with every axis, so it maps to the identity.
pub fn transform(x: &Vector) -> Matrix {
    let n = x.len();
    let norm = x.norm();
    if norm == 0.0 {
        return Matrix::identity(n);
    }

    // alpha = -sign(x0) * ||x||, with sign(0) taken as +1.
    let alpha = if x.get(0) >= 0.0 { -norm } else { norm };

    // v = x - alpha * e1; |v0| = |x0| + ||x||, never a cancelling difference.
    let mut v = x.as_slice().to_vec();
    v[0] -= alpha;
    let vtv: f64 = v.iter().map(|c| c * c).sum();
    if vtv == 0.0 {
        return Matrix::identity(n);
    }

    // H = I - 2*v*v^T / (v^T*v)
    let scale = 2.0 / vtv;
    let mut h = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let outer = scale * v[i] * v[j];
            h[i][j] = if i == j { 1.0 - outer } else { -outer };
        }
    }
    Matrix::from_rows_unchecked(h)
}

/// Reflector for the trailing `x.len()` coordinates of an `n`-dimensional
/// space, embedded in the identity. QR factorization and Hessenberg
/// reduction compose these block reflectors.
pub fn transform_embedded(x: &Vector, n: usize) -> Matrix {
    let k = n - x.len();
    let h = transform(x);
    let mut full = Matrix::identity(n);
    for i in 0..x.len() {
        for j in 0..x.len() {
            full.data[k + i][k + j] = h.data[i][j];
        }
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_onto_first_axis() {
        let x = Vector::try_new(vec![3.0, 4.0]).unwrap();
        let h = transform(&x);
        let hx = h.vector_multiply(&x).unwrap();
        assert!((hx.get(0) - (-5.0)).abs() < 1e-12);
        assert!(hx.get(1).abs() < 1e-12);
    }

    #[test]
    fn negative_leading_component_flips_target_sign() {
        let x = Vector::try_new(vec![-3.0, 4.0]).unwrap();
        let h = transform(&x);
        let hx = h.vector_multiply(&x).unwrap();
        assert!((hx.get(0) - 5.0).abs() < 1e-12);
        assert!(hx.get(1).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_maps_to_identity() {
        let h = transform(&Vector::zeros(3));
        assert_eq!(h, Matrix::identity(3));
    }

    #[test]
    fn embedded_reflector_leaves_leading_block_alone() {
        let x = Vector::try_new(vec![1.0, 1.0]).unwrap();
        let h = transform_embedded(&x, 4);
        assert_eq!(h.rows(), 4);
        for j in 0..4 {
            assert_eq!(h.get(0, j), if j == 0 { 1.0 } else { 0.0 });
            assert_eq!(h.get(1, j), if j == 1 { 1.0 } else { 0.0 });
        }
    }
}
