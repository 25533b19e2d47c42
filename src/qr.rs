//! QR decomposition via Householder reflections.

use crate::error::LinAlgError;
use crate::householder;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Orthogonal / upper-triangular factor pair, `A = Q*R`.
#[derive(Clone, Debug)]
pub struct QrDecomposition {
    pub q: Matrix,
    pub r: Matrix,
}

impl QrDecomposition {
    /// Factor a matrix with `rows >= cols`. Each step reflects the current
    /// sub-diagonal column onto its leading axis; the reflectors, embedded
    /// in identity blocks, compose into the accumulated `Q`.
    pub fn decompose(a: &Matrix) -> Result<Self, LinAlgError> {
        let m = a.rows();
        let n = a.cols();
        if m < n {
            return Err(LinAlgError::DimensionMismatch(format!(
                "QR decomposition requires rows >= columns, got {}x{}",
                m, n
            )));
        }

        let mut q = Matrix::identity(m);
        let mut r = a.clone();
        for k in 0..n.min(m.saturating_sub(1)) {
            let x = Vector::from_raw((k..m).map(|i| r.data[i][k]).collect());
            let hk = householder::transform_embedded(&x, m);
            r = hk.multiply(&r)?;
            // Each reflector is symmetric, so composing them in application
            // order yields Q with Q^T * A = R.
            q = q.multiply(&hk)?;
        }
        Ok(Self { q, r })
    }
}
