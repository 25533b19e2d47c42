//! Dense real matrices with value-producing algebra.
//!
//! Every operation returns a new `Matrix`; nothing mutates in place. Square
//! matrices additionally support trace, determinant, linear solves, and the
//! structural predicates used by the decomposition kernels.
#![allow(clippy::needless_range_loop)]

use crate::error::LinAlgError;
use crate::solve::LuDecomposition;
use crate::vector::Vector;

/// Rectangular array of finite real numbers, row-major, 0-based indices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    pub(crate) data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Create from a literal 2-D array; rejects empty, ragged, and
    /// non-finite input.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, LinAlgError> {
        if data.is_empty() || data[0].is_empty() {
            return Err(LinAlgError::invalid_argument("matrix cannot be empty"));
        }
        let cols = data[0].len();
        if data.iter().any(|row| row.len() != cols) {
            return Err(LinAlgError::invalid_argument(
                "matrix rows must all have the same length",
            ));
        }
        if data.iter().any(|row| row.iter().any(|v| !v.is_finite())) {
            return Err(LinAlgError::invalid_argument(
                "matrix entries must be finite",
            ));
        }
        Ok(Self {
            rows: data.len(),
            cols,
            data,
        })
    }

    // Internal constructor for computed results (may carry NaN placeholders).
    pub(crate) fn from_rows_unchecked(data: Vec<Vec<f64>>) -> Self {
        let rows = data.len();
        let cols = if rows == 0 { 0 } else { data[0].len() };
        Self { rows, cols, data }
    }

    /// Identity matrix of the given order.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![vec![0.0; n]; n];
        for i in 0..n {
            data[i][i] = 1.0;
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Elementwise sum of two matrices of identical dimensions.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinAlgError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinAlgError::DimensionMismatch(format!(
                "addition requires identical dimensions, got {}x{} and {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(r1, r2)| r1.iter().zip(r2.iter()).map(|(a, b)| a + b).collect())
            .collect();
        Ok(Matrix::from_rows_unchecked(data))
    }

    /// Elementwise difference of two matrices of identical dimensions.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, LinAlgError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinAlgError::DimensionMismatch(format!(
                "subtraction requires identical dimensions, got {}x{} and {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(r1, r2)| r1.iter().zip(r2.iter()).map(|(a, b)| a - b).collect())
            .collect();
        Ok(Matrix::from_rows_unchecked(data))
    }

    /// Matrix product; requires `self.cols == other.rows`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, LinAlgError> {
        if self.cols != other.rows {
            return Err(LinAlgError::DimensionMismatch(format!(
                "multiplication requires {}x{} * {}x{} inner dimensions to agree",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut data = vec![vec![0.0; other.cols]; self.rows];
        for i in 0..self.rows {
            for j in 0..other.cols {
                data[i][j] = (0..self.cols).map(|k| self.data[i][k] * other.data[k][j]).sum();
            }
        }
        Ok(Matrix::from_rows_unchecked(data))
    }

    /// Matrix-vector product; requires `self.cols == v.len()`.
    pub fn vector_multiply(&self, v: &Vector) -> Result<Vector, LinAlgError> {
        if self.cols != v.len() {
            return Err(LinAlgError::DimensionMismatch(format!(
                "matrix-vector product requires {} columns to match vector length {}",
                self.cols,
                v.len()
            )));
        }
        let data = self
            .data
            .iter()
            .map(|row| row.iter().zip(v.as_slice()).map(|(a, b)| a * b).sum())
            .collect();
        Ok(Vector::from_raw(data))
    }

    pub fn scalar_multiply(&self, k: f64) -> Matrix {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|v| v * k).collect())
            .collect();
        Matrix::from_rows_unchecked(data)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![vec![0.0; self.rows]; self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j][i] = self.data[i][j];
            }
        }
        Matrix::from_rows_unchecked(data)
    }

    /// Sum of the diagonal; square matrices only.
    pub fn trace(&self) -> Result<f64, LinAlgError> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare(format!(
                "trace requires a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok((0..self.rows).map(|i| self.data[i][i]).sum())
    }

    /// Determinant; square matrices only. Orders 1-3 use the direct
    /// formulas; anything larger goes through partially pivoted LU
    /// elimination. A singular matrix yields (numerically near) zero,
    /// never an error.
    pub fn determinant(&self) -> Result<f64, LinAlgError> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare(format!(
                "determinant requires a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        let d = &self.data;
        Ok(match self.rows {
            1 => d[0][0],
            2 => d[0][0] * d[1][1] - d[0][1] * d[1][0],
            3 => {
                d[0][0] * (d[1][1] * d[2][2] - d[1][2] * d[2][1])
                    - d[0][1] * (d[1][0] * d[2][2] - d[1][2] * d[2][0])
                    + d[0][2] * (d[1][0] * d[2][1] - d[1][1] * d[2][0])
            }
            _ => LuDecomposition::decompose(self)?.determinant(),
        })
    }

    /// Solve `self * x = b` through the LU path. Hold a [`LuDecomposition`]
    /// instead when solving against the same matrix repeatedly.
    pub fn solve(&self, b: &Vector) -> Result<Vector, LinAlgError> {
        LuDecomposition::decompose(self)?.solve(b)
    }

    /// Matrix inverse through the LU path; singular input is an error.
    pub fn inverse(&self) -> Result<Matrix, LinAlgError> {
        LuDecomposition::decompose(self)?.inverse()
    }

    /// Extract column `j` as a vector.
    pub fn column(&self, j: usize) -> Vector {
        Vector::from_raw(self.data.iter().map(|row| row[j]).collect())
    }

    /// Copy of the `nrows x ncols` block whose top-left corner is
    /// `(row0, col0)`.
    pub fn submatrix(&self, row0: usize, col0: usize, nrows: usize, ncols: usize) -> Matrix {
        let data = (row0..row0 + nrows)
            .map(|i| self.data[i][col0..col0 + ncols].to_vec())
            .collect();
        Matrix::from_rows_unchecked(data)
    }

    /// True iff the matrix equals its transpose within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in i + 1..self.cols {
                if (self.data[i][j] - self.data[j][i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is its own inverse: `A*A = I` within `tol`.
    pub fn is_involutory(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let Ok(product) = self.multiply(self) else {
            return false;
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                let expected = if i == j { 1.0 } else { 0.0 };
                if (product.data[i][j] - expected).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
