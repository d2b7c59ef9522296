//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. Points the model marks as
//! infeasible are short-circuited to [`INFEASIBLE_COST`] without calling
//! `value`, and a non-finite `ℓ(θ)` is mapped to the same sentinel so the
//! simplex ordering never sees `NaN`.
use crate::optimization::loglik_optimizer::{
    traits::LogLikelihood,
    types::{Cost, INFEASIBLE_COST, Theta},
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// - Returns [`INFEASIBLE_COST`] when `f.feasible(θ)` is `false`.
    /// - Returns [`INFEASIBLE_COST`] when `ℓ(θ)` is not finite.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        if !self.f.feasible(theta, self.data) {
            return Ok(INFEASIBLE_COST);
        }
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Ok(INFEASIBLE_COST);
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}
