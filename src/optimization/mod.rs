//! optimization — MLE stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting: an Argmin-backed
//! log-likelihood optimizer plus a single error/result surface. Callers
//! implement a log-likelihood, choose tolerances, and obtain fitted
//! parameters and diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), including simplex configuration and stopping
//!   criteria.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize a log-likelihood `ℓ(θ)` by minimizing
//!   an internal cost `c(θ) = -ℓ(θ)`; user-facing outcomes are expressed in
//!   terms of `ℓ`.
//! - Parameters, gradients, and Hessians use the `ndarray`-based aliases
//!   (`Theta`, `Grad`, `Hessian`); mapping to structured model parameters
//!   such as Weibull `(β, η)` is the model layer's job.
//! - This module does no I/O and no logging; the analysis orchestrator
//!   reports progress through `tracing`.

pub mod errors;
pub mod loglik_optimizer;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
}
