//! weibull::models — likelihood and maximum-likelihood estimation.
//!
//! - [`likelihood`]: censored Weibull log-likelihood, its gradient, and the
//!   search region, as a [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood).
//! - [`mle`]: deterministic multi-start Nelder–Mead refinement.

pub mod likelihood;
pub mod mle;

pub use self::likelihood::WeibullLikelihood;
pub use self::mle::{AttemptOutcome, MleAttempt, MleFit, fit_mle, multi_start_points};
