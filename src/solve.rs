//! LU factorization with partial pivoting; linear solves and inverses.
//!
//! The factors back `Matrix::determinant` beyond order 3 and the shifted
//! solves inside the eigensolver's inverse iteration. Row swaps pick the
//! largest remaining pivot in each column and flip the determinant sign.
#![allow(clippy::needless_range_loop)]

use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Packed LU factors of a square matrix: multipliers of the unit
/// lower-triangular factor below the diagonal, the upper factor on and
/// above it, plus the row permutation that was applied.
#[derive(Clone, Debug)]
pub struct LuDecomposition {
    lu: Vec<Vec<f64>>,
    perm: Vec<usize>,
    sign: f64,
    singular: bool,
    n: usize,
}

impl LuDecomposition {
    /// Factor a square matrix. Singular input still factors (the flag is
    /// set and the determinant reads zero); only `solve`/`inverse` reject it.
    pub fn decompose(a: &Matrix) -> Result<Self, LinAlgError> {
        if !a.is_square() {
            return Err(LinAlgError::NotSquare(format!(
                "LU decomposition requires a square matrix, got {}x{}",
                a.rows(),
                a.cols()
            )));
        }
        let n = a.rows();
        let mut lu = a.data.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;
        let mut singular = false;

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_val = lu[k][k].abs();
            for i in k + 1..n {
                if lu[i][k].abs() > pivot_val {
                    pivot_val = lu[i][k].abs();
                    pivot_row = i;
                }
            }
            if pivot_val == 0.0 {
                // Column exhausted: nothing to eliminate below this pivot.
                singular = true;
                continue;
            }
            if pivot_row != k {
                lu.swap(k, pivot_row);
                perm.swap(k, pivot_row);
                sign = -sign;
            }
            for i in k + 1..n {
                let factor = lu[i][k] / lu[k][k];
                lu[i][k] = factor;
                for j in k + 1..n {
                    lu[i][j] -= factor * lu[k][j];
                }
            }
        }

        Ok(Self {
            lu,
            perm,
            sign,
            singular,
            n,
        })
    }

    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Signed product of the pivots; exactly zero for a singular input.
    pub fn determinant(&self) -> f64 {
        if self.singular {
            return 0.0;
        }
        self.sign * (0..self.n).map(|i| self.lu[i][i]).product::<f64>()
    }

    /// Solve `A * x = b` by forward/back substitution against the factors.
    pub fn solve(&self, b: &Vector) -> Result<Vector, LinAlgError> {
        if b.len() != self.n {
            return Err(LinAlgError::DimensionMismatch(format!(
                "solve requires a length-{} right-hand side, got {}",
                self.n,
                b.len()
            )));
        }
        if self.singular {
            return Err(LinAlgError::singular(
                "linear system is singular to working precision",
            ));
        }
        // Permuted right-hand side, then Ly = Pb with unit diagonal.
        let mut y = vec![0.0; self.n];
        for i in 0..self.n {
            let mut sum = b.get(self.perm[i]);
            for j in 0..i {
                sum -= self.lu[i][j] * y[j];
            }
            y[i] = sum;
        }
        // Ux = y.
        let mut x = vec![0.0; self.n];
        for i in (0..self.n).rev() {
            let mut sum = y[i];
            for j in i + 1..self.n {
                sum -= self.lu[i][j] * x[j];
            }
            x[i] = sum / self.lu[i][i];
        }
        Ok(Vector::from_raw(x))
    }

    /// Inverse assembled column-by-column from basis-vector solves.
    pub fn inverse(&self) -> Result<Matrix, LinAlgError> {
        if self.singular {
            return Err(LinAlgError::singular(
                "cannot invert a singular matrix",
            ));
        }
        let mut data = vec![vec![0.0; self.n]; self.n];
        for j in 0..self.n {
            let mut e = vec![0.0; self.n];
            e[j] = 1.0;
            let x = self.solve(&Vector::from_raw(e))?;
            for i in 0..self.n {
                data[i][j] = x.get(i);
            }
        }
        Ok(Matrix::from_rows_unchecked(data))
    }
}
