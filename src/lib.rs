//! Titan dense linear algebra: real matrices, Householder reflections,
//! QR decomposition, and an iterative QR-algorithm eigensolver.
//!
//! All operations are synchronous and value-producing over immutable
//! inputs; the only internal iteration (the eigensolver) is bounded by a
//! per-block budget, so every call terminates.
//!
//! ```
//! use titan_linalg::{eigen, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap();
//! let ed = eigen::decompose(&a).unwrap();
//! let mut values = ed.eigenvalues.clone();
//! values.sort_by(|x, y| x.partial_cmp(y).unwrap());
//! assert!((values[0] - 2.0).abs() < 1e-9);
//! assert!((values[1] - 3.0).abs() < 1e-9);
//! ```
#[macro_use]
pub mod debug; // gated debug logging (TITAN_DEBUG=1) provides debug_log! macro

pub mod eigen;
pub mod error;
pub mod householder;
pub mod matrix;
pub mod qr;
pub mod solve;
pub mod vector;

pub use eigen::{EigenDecomposition, EigenSolver};
pub use error::LinAlgError;
pub use matrix::Matrix;
pub use qr::QrDecomposition;
pub use solve::LuDecomposition;
pub use vector::Vector;
