//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the simplex solver used by the
//! log-likelihood optimizer. These helpers hide Argmin's generic wiring
//! and apply crate-level options (simplex scale, cost tolerance) so that
//! higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Lay out the initial simplex around `θ₀`: vertex 0 is `θ₀` itself and
//!   vertex `k` scales coordinate `k-1` by `1 + simplex_scale`.
//! - Apply the optional standard-deviation tolerance from [`MLEOptions`].
//! - Leave the maximum iteration count to the runner/executor layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - `θ₀` has been validated (finite) by the caller.
//! - A zero coordinate cannot be scaled; it is shifted by `simplex_scale`
//!   instead so every vertex stays distinct.
//! - Invalid tolerances rejected by Argmin's `with_sd_tolerance` surface as
//!   [`OptError`](crate::optimization::errors::OptError) via `From<Error>`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{NelderMeadSolver, Theta},
    },
};

/// Build the `n + 1` vertices of the starting simplex around `theta0`.
///
/// Vertex `k ≥ 1` equals `theta0` except for coordinate `k-1`, which is
/// multiplied by `1 + scale` (or shifted by `scale` when it is exactly 0).
pub fn initial_simplex(theta0: &Theta, scale: f64) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for k in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[k] = if vertex[k] == 0.0 { scale } else { vertex[k] * (1.0 + scale) };
        vertices.push(vertex);
    }
    vertices
}

/// build_nelder_mead — construct a Nelder–Mead solver around `theta0`.
///
/// Parameters
/// ----------
/// - `theta0`: `&Theta`
///   Starting point; becomes the first simplex vertex.
/// - `opts`: `&MLEOptions`
///   Consults `opts.simplex_scale` for the vertex layout and
///   `opts.tols.tol_cost` for the standard-deviation stopping rule.
///
/// Returns
/// -------
/// `OptResult<NelderMeadSolver>`
///   Solver ready to hand to [`run_nelder_mead`](super::run::run_nelder_mead).
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`) when Argmin rejects the
///   tolerance.
pub fn build_nelder_mead(theta0: &Theta, opts: &MLEOptions) -> OptResult<NelderMeadSolver> {
    let solver = NelderMeadSolver::new(initial_simplex(theta0, opts.simplex_scale));
    match opts.tols.tol_cost {
        Some(tol) => Ok(solver.with_sd_tolerance(tol)?),
        None => Ok(solver),
    }
}
