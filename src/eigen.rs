//! Iterative eigenvalue/eigenvector engine for dense real matrices.
//!
//! The solver reduces the input to upper Hessenberg form with Householder
//! similarity transforms (symmetric input lands in tridiagonal form along
//! the same path), then runs shifted QR iteration, deflating converged 1x1
//! and 2x2 trailing blocks until the spectrum is exhausted. 2x2 blocks are
//! solved in closed form.
//!
//! Complex-conjugate eigenvalue pairs of a real matrix are surfaced as
//! `f64::NAN` placeholders in the eigenvalue list, with matching NaN columns
//! in the eigenvector matrix; the remaining real eigenpairs are unaffected.
//!
//! Eigenvectors for finite eigenvalues come from inverse iteration: repeated
//! solves against the LU-factored matrix `A - (lambda + eps)*I`, renormalizing
//! each pass. The slightly perturbed shift keeps the system invertible while
//! staying an excellent eigenvalue estimate, so the iteration converges in a
//! handful of passes.
#![allow(clippy::needless_range_loop)]

use num_complex::Complex64;
use rand::distributions::Distribution;
use rand_distr::Normal;

use crate::error::LinAlgError;
use crate::householder;
use crate::matrix::Matrix;
use crate::qr::QrDecomposition;
use crate::solve::LuDecomposition;
use crate::vector::Vector;

/// Iteration budget per unconverged trailing block.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Relative magnitude below which a sub-diagonal entry deflates.
pub const DEFAULT_DEFLATION_TOLERANCE: f64 = 1e-12;

// Inverse-iteration tuning.
const SHIFT_EPS: f64 = 1e-8;
const RESIDUAL_TOL: f64 = 1e-8;
const CLUSTER_TOL: f64 = 1e-8;
const MAX_SHIFT_RETRIES: usize = 4;

/// Eigenvalues paired with an eigenvector matrix; column `i` holds a unit
/// eigenvector for eigenvalue `i`. No ordering beyond that pairing is
/// guaranteed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenDecomposition {
    pub eigenvalues: Vec<f64>,
    pub eigenvectors: Matrix,
}

/// Tunable QR-algorithm driver; `Default` matches the documented constants.
#[derive(Clone, Debug)]
pub struct EigenSolver {
    pub max_iterations: usize,
    pub deflation_tolerance: f64,
}

impl Default for EigenSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            deflation_tolerance: DEFAULT_DEFLATION_TOLERANCE,
        }
    }
}

/// Decompose with the default solver settings.
pub fn decompose(a: &Matrix) -> Result<EigenDecomposition, LinAlgError> {
    EigenSolver::default().decompose(a)
}

impl EigenSolver {
    /// Full decomposition: eigenvalues plus column-aligned eigenvectors.
    pub fn decompose(&self, a: &Matrix) -> Result<EigenDecomposition, LinAlgError> {
        let eigenvalues = self.eigenvalues(a)?;
        let eigenvectors = self.eigenvectors(a, &eigenvalues)?;
        Ok(EigenDecomposition {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Eigenvalues via shifted QR iteration on the Hessenberg form.
    pub fn eigenvalues(&self, a: &Matrix) -> Result<Vec<f64>, LinAlgError> {
        if !a.is_square() {
            return Err(LinAlgError::NotSquare(format!(
                "eigenvalue decomposition requires a square matrix, got {}x{}",
                a.rows(),
                a.cols()
            )));
        }
        let n = a.rows();
        let mut h = hessenberg(a)?;
        let mut values: Vec<f64> = Vec::with_capacity(n);
        let mut p = n;

        while p > 0 {
            if p == 1 {
                values.push(h.data[0][0]);
                break;
            }
            let mut iterations = 0usize;
            loop {
                if self.subdiagonal_negligible(&h, p - 1) {
                    values.push(h.data[p - 1][p - 1]);
                    p -= 1;
                    debug_log!("eigen: deflated 1x1 block after {} iterations, {} row(s) left", iterations, p);
                    break;
                }
                if p == 2 || self.subdiagonal_negligible(&h, p - 2) {
                    let (l1, l2) = eig2x2(
                        h.data[p - 2][p - 2],
                        h.data[p - 2][p - 1],
                        h.data[p - 1][p - 2],
                        h.data[p - 1][p - 1],
                    );
                    values.push(project_real(l2));
                    values.push(project_real(l1));
                    p -= 2;
                    debug_log!("eigen: deflated 2x2 block after {} iterations, {} row(s) left", iterations, p);
                    break;
                }
                if iterations >= self.max_iterations {
                    return Err(LinAlgError::NonConvergence(format!(
                        "QR iteration exceeded {} iterations on a {}x{} block",
                        self.max_iterations, p, p
                    )));
                }
                iterations += 1;

                let shift = if iterations % 10 == 0 {
                    // Stalled; an ad-hoc shift breaks the symmetric cycles a
                    // Wilkinson shift cannot.
                    h.data[p - 1][p - 1] + 0.75 * h.data[p - 1][p - 2].abs()
                } else {
                    wilkinson_shift(&h, p)
                };

                // A_{k+1} = R*Q + shift*I where Q*R = A_k - shift*I.
                let mut block = h.submatrix(0, 0, p, p);
                for i in 0..p {
                    block.data[i][i] -= shift;
                }
                let QrDecomposition { q, r } = QrDecomposition::decompose(&block)?;
                let mut next = r.multiply(&q)?;
                for i in 0..p {
                    next.data[i][i] += shift;
                }
                for i in 0..p {
                    for j in 0..p {
                        h.data[i][j] = next.data[i][j];
                    }
                }
            }
        }

        // Deflation emits trailing blocks first; report top-down instead.
        values.reverse();
        Ok(values)
    }

    fn subdiagonal_negligible(&self, h: &Matrix, i: usize) -> bool {
        let scale = h.data[i - 1][i - 1].abs() + h.data[i][i].abs();
        let bound = if scale == 0.0 {
            self.deflation_tolerance
        } else {
            self.deflation_tolerance * scale
        };
        h.data[i][i - 1].abs() <= bound
    }

    fn eigenvectors(&self, a: &Matrix, values: &[f64]) -> Result<Matrix, LinAlgError> {
        let n = a.rows();
        let mut columns: Vec<Vector> = Vec::with_capacity(values.len());
        for (idx, &lambda) in values.iter().enumerate() {
            if !lambda.is_finite() {
                columns.push(Vector::from_raw(vec![f64::NAN; n]));
                continue;
            }
            // Numerically equal eigenvalues already solved: orthogonalize
            // against their vectors so duplicates span the eigenspace.
            let cluster: Vec<usize> = (0..idx)
                .filter(|&j| {
                    values[j].is_finite()
                        && (values[j] - lambda).abs() <= CLUSTER_TOL * lambda.abs().max(1.0)
                })
                .collect();
            let v = self.inverse_iteration(a, lambda, &cluster, &columns)?;
            columns.push(v);
        }

        let mut data = vec![vec![0.0; values.len()]; n];
        for (j, col) in columns.iter().enumerate() {
            for i in 0..n {
                data[i][j] = col.get(i);
            }
        }
        Ok(Matrix::from_rows_unchecked(data))
    }

    fn inverse_iteration(
        &self,
        a: &Matrix,
        lambda: f64,
        cluster: &[usize],
        prior: &[Vector],
    ) -> Result<Vector, LinAlgError> {
        let n = a.rows();
        let scale = lambda.abs().max(1.0);
        let mut eps = SHIFT_EPS * scale;
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut rng = rand::thread_rng();

        for _attempt in 0..MAX_SHIFT_RETRIES {
            let mut shifted = a.clone();
            for i in 0..n {
                shifted.data[i][i] -= lambda + eps;
            }
            let lu = match LuDecomposition::decompose(&shifted) {
                Ok(lu) if !lu.is_singular() => lu,
                _ => {
                    // Shift landed exactly on the eigenvalue; nudge harder.
                    eps *= 10.0;
                    continue;
                }
            };

            // A random start is almost surely not orthogonal to the target
            // eigendirection.
            let mut v = Vector::from_raw((0..n).map(|_| normal.sample(&mut rng)).collect());
            let norm = v.norm();
            if norm == 0.0 {
                let mut e = vec![0.0; n];
                e[0] = 1.0;
                v = Vector::from_raw(e);
            } else {
                v = v.scalar_multiply(1.0 / norm);
            }

            let mut converged = false;
            for _ in 0..self.max_iterations {
                let mut w = match lu.solve(&v) {
                    Ok(w) => w,
                    Err(_) => break,
                };
                if w.as_slice().iter().any(|c| !c.is_finite()) {
                    break;
                }
                for &j in cluster {
                    let proj = w.dot(&prior[j])?;
                    w = w.subtract(&prior[j].scalar_multiply(proj))?;
                }
                let wnorm = w.norm();
                if wnorm == 0.0 {
                    break;
                }
                let w = w.scalar_multiply(1.0 / wnorm);
                let aw = a.vector_multiply(&w)?;
                let residual = (0..n)
                    .map(|i| (aw.get(i) - lambda * w.get(i)).powi(2))
                    .sum::<f64>()
                    .sqrt();
                v = w;
                if residual <= RESIDUAL_TOL * scale {
                    converged = true;
                    break;
                }
            }
            if converged {
                return Ok(v);
            }
            eps *= 10.0;
        }

        Err(LinAlgError::NonConvergence(format!(
            "inverse iteration failed to converge for eigenvalue {}",
            lambda
        )))
    }
}

/// Householder similarity reduction to upper Hessenberg form. The transform
/// preserves eigenvalues, and symmetric input comes out tridiagonal.
fn hessenberg(a: &Matrix) -> Result<Matrix, LinAlgError> {
    let n = a.rows();
    let mut h = a.clone();
    if n < 3 {
        return Ok(h);
    }
    for k in 0..n - 2 {
        let x: Vec<f64> = (k + 1..n).map(|i| h.data[i][k]).collect();
        if x[1..].iter().all(|&c| c == 0.0) {
            // Column already in Hessenberg form.
            continue;
        }
        let pk = householder::transform_embedded(&Vector::from_raw(x), n);
        // P*A*P; the reflector is symmetric and involutory.
        h = pk.multiply(&h)?.multiply(&pk)?;
    }
    Ok(h)
}

/// Closed-form eigenvalues of a 2x2 block, scaled by the block's 1-norm to
/// resist overflow. Real roots come back with a zero imaginary part; the
/// larger-magnitude root is computed first and the other recovered from the
/// product of roots to dodge cancellation.
fn eig2x2(a: f64, b: f64, c: f64, d: f64) -> (Complex64, Complex64) {
    let s = a.abs() + b.abs() + c.abs() + d.abs();
    if s == 0.0 {
        return (Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0));
    }
    let (a, b, c, d) = (a / s, b / s, c / s, d / s);
    let half_tr = 0.5 * (a + d);
    let det = a * d - b * c;
    let disc = half_tr * half_tr - det;
    if disc >= 0.0 {
        let root = disc.sqrt();
        let l1 = if half_tr >= 0.0 {
            half_tr + root
        } else {
            half_tr - root
        };
        let l2 = if l1 == 0.0 { 0.0 } else { det / l1 };
        (Complex64::new(s * l1, 0.0), Complex64::new(s * l2, 0.0))
    } else {
        let im = (-disc).sqrt();
        (
            Complex64::new(s * half_tr, s * im),
            Complex64::new(s * half_tr, -(s * im)),
        )
    }
}

/// Real part of a real root; NaN placeholder for a member of a
/// complex-conjugate pair.
fn project_real(z: Complex64) -> f64 {
    if z.im == 0.0 {
        z.re
    } else {
        f64::NAN
    }
}

/// Wilkinson shift: the eigenvalue of the trailing 2x2 block closest to the
/// corner entry. A conjugate pair yields its shared real part, which still
/// separates the rows above the block.
fn wilkinson_shift(h: &Matrix, p: usize) -> f64 {
    let (l1, l2) = eig2x2(
        h.data[p - 2][p - 2],
        h.data[p - 2][p - 1],
        h.data[p - 1][p - 2],
        h.data[p - 1][p - 1],
    );
    let d = h.data[p - 1][p - 1];
    if l1.im != 0.0 {
        return l1.re;
    }
    if (l1.re - d).abs() <= (l2.re - d).abs() {
        l1.re
    } else {
        l2.re
    }
}
