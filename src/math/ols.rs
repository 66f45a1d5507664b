//! Least squares solver.
//!
//! The trend fit is a single small regression problem:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly for a tall design
//!   matrix (34 rows, 4 columns). Nalgebra's `QR::solve` is intended for
//!   square systems and will panic for non-square matrices.
//! - With a 34x4 system, SVD cost is negligible; the solve runs once per
//!   program invocation.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails. The
    // offset-year cubic design is well-conditioned, so the first tolerance
    // is expected to succeed; the ladder guards degenerate inputs in tests.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_is_exact_on_noiseless_cubic() {
        // y = 1 - 2t + 0.5t^2 + 0.03t^3 on t = 0..9
        let coeffs = [1.0, -2.0, 0.5, 0.03];
        let n = 10;
        let mut x = DMatrix::zeros(n, 4);
        let mut y = DVector::zeros(n);
        for i in 0..n {
            let t = i as f64;
            for j in 0..4 {
                x[(i, j)] = t.powi(j as i32);
            }
            y[i] = crate::math::horner(&coeffs, t);
        }

        let beta = solve_least_squares(&x, &y).unwrap();
        for j in 0..4 {
            assert!((beta[j] - coeffs[j]).abs() < 1e-8, "coeff {j}: {}", beta[j]);
        }
    }
}
