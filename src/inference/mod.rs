//! inference — observed-information covariance and Fisher-matrix bounds.
//!
//! Purpose
//! -------
//! Provide post-estimation uncertainty quantification for a fitted
//! [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood).
//! The classical covariance is the pseudoinverse of the observed information
//! `J = −∇²ℓ(θ̂)`; the Weibull-specific layer turns it into log-normal bounds
//! on `(β, η)`.
//!
//! Key behaviors
//! -------------
//! - [`calc_covariance`] differentiates the model gradient numerically,
//!   symmetrizes, and inverts through a symmetric eigendecomposition,
//!   dropping near-zero eigenvalues.
//! - [`fisher_bounds`] validates the confidence level, computes the exact
//!   normal quantile, and reports bounds alongside `cov(β̂, η̂)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are in natural units; there is no reparameterization between
//!   the optimizer and the reported covariance.
//! - Nothing here logs; failures are returned as values.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the pseudoinverse on a known Gaussian log-likelihood,
//!   the flat-direction case, normal quantiles, and the bracketing and
//!   widening behavior of the Weibull bounds.

pub mod fisher;
pub mod hessian;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::fisher::{FisherBounds, fisher_bounds, normal_quantile};
pub use self::hessian::{calc_covariance, standard_errors};

pub mod prelude {
    pub use super::fisher::{FisherBounds, fisher_bounds};
    pub use super::hessian::calc_covariance;
}
