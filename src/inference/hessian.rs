//! inference::hessian — observed-information covariance utilities.
//!
//! Purpose
//! -------
//! Turn the numerical Hessian of a log-likelihood at its maximum into a
//! covariance matrix and standard errors. This module handles conversion
//! between `ndarray` and `nalgebra` types and inverts the observed
//! information `J(θ̂) = -∇²ℓ(θ̂)` through a truncated symmetric
//! eigendecomposition.
//!
//! Key behaviors
//! -------------
//! - Call [`loglik_hessian`] on the fitted model to obtain `∇²ℓ(θ̂)`.
//! - Copy `J(θ̂)` into a `nalgebra::DMatrix` (`fill_dmatrix`) for
//!   eigen-based linear algebra.
//! - Form the Moore–Penrose pseudoinverse `J⁺`, dropping eigenvalues at or
//!   below [`EIGEN_EPS`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Hessians arrive symmetrized from the finite-difference layer; this
//!   module does not re-symmetrize.
//! - Hessians are on the **total** log-likelihood scale, so `J⁺` is the
//!   asymptotic covariance of `θ̂` directly (no division by `n`).
//! - A direction whose eigenvalue is truncated contributes zero variance;
//!   callers that need to detect weak identification check
//!   [`positive_definite`] separately.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{finite_diff::loglik_hessian, LogLikelihood, Theta},
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Eigenvalues of the observed information at or below this are treated as zero.
pub const EIGEN_EPS: f64 = 1e-10;

/// calc_covariance — asymptotic covariance of `θ̂` from observed information.
///
/// Parameters
/// ----------
/// - `f`: the fitted [`LogLikelihood`].
/// - `theta_hat`: parameter vector at which `J(θ̂)` is evaluated.
/// - `data`: model data.
///
/// Returns
/// -------
/// `OptResult<(Array2<f64>, bool)>`
///   The `n×n` pseudoinverse `J⁺` and whether every eigenvalue of `J(θ̂)`
///   exceeded [`EIGEN_EPS`] (i.e. `J` was positive definite).
///
/// Errors
/// ------
/// - Any error from [`loglik_hessian`] (model errors, non-finite curvature).
pub fn calc_covariance<F: LogLikelihood>(
    f: &F, theta_hat: &Theta, data: &F::Data,
) -> OptResult<(Array2<f64>, bool)> {
    let n = theta_hat.len();
    let obs_info = -loglik_hessian(f, theta_hat, data)?;
    let mut obs_info_nalg = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(&obs_info, &mut obs_info_nalg);
    let pd = positive_definite(&obs_info_nalg);
    Ok((pseudo_inverse(obs_info_nalg, n), pd))
}

/// Square roots of the diagonal of a covariance matrix.
pub fn standard_errors(cov: &Array2<f64>) -> Array1<f64> {
    cov.diag().mapv(|v| v.max(0.0).sqrt())
}

/// Whether all eigenvalues of a symmetric matrix exceed [`EIGEN_EPS`].
pub fn positive_definite(matrix: &DMatrix<f64>) -> bool {
    matrix.clone().symmetric_eigenvalues().iter().all(|&lambda| lambda > EIGEN_EPS)
}

// ---- Helper methods ----

/// Copy a square `ndarray` matrix into a preallocated `DMatrix`, column by column.
fn fill_dmatrix(obs_info: &Array2<f64>, obs_info_nalg: &mut DMatrix<f64>) {
    let n = obs_info.ncols();
    for j in 0..n {
        for i in j..n {
            if j == i {
                obs_info_nalg[(i, i)] = obs_info[[i, i]];
            } else {
                obs_info_nalg[(i, j)] = obs_info[[i, j]];
                obs_info_nalg[(j, i)] = obs_info[[j, i]];
            }
        }
    }
}

/// Truncated pseudoinverse `J⁺ = Σ_{λ_k > EIGEN_EPS} q_k q_kᵀ / λ_k`.
fn pseudo_inverse(obs_info_nalg: DMatrix<f64>, n: usize) -> Array2<f64> {
    let eigen_decomp = obs_info_nalg.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;
    let mut cov = Array2::<f64>::zeros((n, n));
    for (k, &lambda) in eigenvals.iter().enumerate() {
        if lambda <= EIGEN_EPS {
            continue;
        }
        for i in 0..n {
            for j in 0..n {
                cov[[i, j]] += q[(i, k)] * q[(j, k)] / lambda;
            }
        }
    }
    cov
}
