//! Column vectors for the dense linear algebra kernels.

use crate::error::LinAlgError;

/// Ordered sequence of real numbers. Conceptually a single-column matrix,
/// but exposes dot product and Euclidean norm directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create from raw values; rejects empty and non-finite input.
    pub fn try_new(data: Vec<f64>) -> Result<Self, LinAlgError> {
        if data.is_empty() {
            return Err(LinAlgError::invalid_argument("vector cannot be empty"));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(LinAlgError::invalid_argument("vector entries must be finite"));
        }
        Ok(Self { data })
    }

    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    // Internal constructor for computed results (may carry NaN placeholders).
    pub(crate) fn from_raw(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Dot product of two vectors of the same length.
    pub fn dot(&self, other: &Vector) -> Result<f64, LinAlgError> {
        if self.len() != other.len() {
            return Err(LinAlgError::DimensionMismatch(format!(
                "dot product requires equal lengths, got {} and {}",
                self.len(),
                other.len()
            )));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean (2-) norm.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn scalar_multiply(&self, k: f64) -> Vector {
        Vector {
            data: self.data.iter().map(|v| v * k).collect(),
        }
    }

    /// Elementwise difference of two vectors of the same length.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, LinAlgError> {
        if self.len() != other.len() {
            return Err(LinAlgError::DimensionMismatch(format!(
                "subtraction requires equal lengths, got {} and {}",
                self.len(),
                other.len()
            )));
        }
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product_basic() {
        let a = Vector::try_new(vec![1.0, 2.0, 3.0]).unwrap();
        let b = Vector::try_new(vec![4.0, 5.0, 6.0]).unwrap();
        assert_eq!(a.dot(&b).unwrap(), 32.0);
    }

    #[test]
    fn dot_product_length_mismatch() {
        let a = Vector::try_new(vec![1.0, 2.0]).unwrap();
        let b = Vector::try_new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            a.dot(&b),
            Err(LinAlgError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn norm_3_4() {
        let v = Vector::try_new(vec![3.0, 4.0]).unwrap();
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Vector::try_new(vec![1.0, f64::NAN]),
            Err(LinAlgError::InvalidArgument(_))
        ));
    }
}
