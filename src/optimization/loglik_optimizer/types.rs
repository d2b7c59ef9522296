//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! log-likelihood optimizer, so the rest of the optimization code can stay
//! agnostic to `ndarray` and Argmin generics.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, gradients,
//!   Hessians, and scalar costs (`Theta`, `Grad`, `Hessian`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose the pre-wired Nelder–Mead solver alias and the Argmin state type
//!   it runs on.
//! - Define [`INFEASIBLE_COST`], the finite cost reported for parameters
//!   outside a model's admissible region.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors and matrices are `ndarray` containers over `f64`.
//! - `Cost` is always a scalar `f64` in negative log-likelihood space; the
//!   adapter handles the sign flip from `ℓ(θ)`.
//! - [`INFEASIBLE_COST`] stays far below `f64::MAX.sqrt()`, so the simplex
//!   standard deviation computed over a mix of feasible and infeasible
//!   vertices never overflows to `inf`/`NaN`.
//!
//! Testing notes
//! -------------
//! - Type aliases and constants only; exercised through the adapter,
//!   builder, and runner tests.
use argmin::{core::IterState, solver::neldermead::NelderMead};
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ(θ)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Dense Hessian matrix; `n × n` for `n = Theta.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Nelder–Mead simplex solver specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;

/// Argmin state carried by derivative-free solvers over `Theta`.
pub type SimplexState = IterState<Theta, (), (), (), (), Cost>;

/// Cost assigned to parameters outside the admissible region.
pub const INFEASIBLE_COST: Cost = 1e100;
