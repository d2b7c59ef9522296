//! Censored two-parameter Weibull log-likelihood.
//!
//! With `z = t/η`, failures contribute `ln β - β ln η + (β - 1) ln t - z^β`
//! and right-censored units contribute their log-survival `-z^β`:
//!
//! ```text
//! ℓ(β, η) = Σ_fail [ln β - β ln η + (β-1) ln t - z^β] - Σ_cens z^β
//! ```
//!
//! The parameter vector is `θ = (β, η)` in natural units. The admissible
//! region is `0.2 < β ≤ 15`, `η > 0`; the optimizer never evaluates `ℓ`
//! outside it.
//!
//! Gradient:
//!
//! ```text
//! ∂ℓ/∂β = Σ_fail [1/β + ln z] - Σ_all z^β ln z
//! ∂ℓ/∂η = (β/η) (Σ_all z^β - r)          r = number of failures
//! ```
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{Cost, Grad, INFEASIBLE_COST, LogLikelihood, Theta},
    },
    weibull::core::data::LifeData,
};
use ndarray::array;

/// Shape values at or below this are outside the search region.
pub const BETA_LOWER_EXCLUSIVE: f64 = 0.2;
/// Largest admissible shape value.
pub const BETA_UPPER: f64 = 15.0;

/// Censoring-aware Weibull likelihood over `θ = (β, η)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeibullLikelihood;

impl WeibullLikelihood {
    /// Whether `(β, η)` lies in the search region `0.2 < β ≤ 15`, `η > 0`.
    pub fn in_region(beta: f64, eta: f64) -> bool {
        beta > BETA_LOWER_EXCLUSIVE && beta <= BETA_UPPER && eta > 0.0 && eta.is_finite()
    }

    /// ℓ(β, η) without region checks.
    pub fn log_likelihood(beta: f64, eta: f64, data: &LifeData) -> f64 {
        let ln_beta = beta.ln();
        let ln_eta = eta.ln();
        data.observations()
            .map(|obs| {
                let cumulative_hazard = (obs.time / eta).powf(beta);
                if obs.censored {
                    -cumulative_hazard
                } else {
                    ln_beta - beta * ln_eta + (beta - 1.0) * obs.time.ln() - cumulative_hazard
                }
            })
            .sum()
    }

    /// The optimizer's cost at `(β, η)`: `-ℓ` inside the region, otherwise
    /// (or when `ℓ` is not finite) [`INFEASIBLE_COST`].
    pub fn negative_log_likelihood(beta: f64, eta: f64, data: &LifeData) -> f64 {
        if !Self::in_region(beta, eta) {
            return INFEASIBLE_COST;
        }
        let ll = Self::log_likelihood(beta, eta, data);
        if ll.is_finite() { -ll } else { INFEASIBLE_COST }
    }
}

impl LogLikelihood for WeibullLikelihood {
    type Data = LifeData;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        Ok(Self::log_likelihood(theta[0], theta[1], data))
    }

    /// `θ` must be `(β, η)` with finite entries.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        if theta.len() != 2 {
            return Err(OptError::ThetaLengthMismatch { expected: 2, actual: theta.len() });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        Ok(())
    }

    fn feasible(&self, theta: &Theta, _data: &Self::Data) -> bool {
        Self::in_region(theta[0], theta[1])
    }

    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let (beta, eta) = (theta[0], theta[1]);
        let mut d_beta = 0.0;
        let mut sum_hazard = 0.0;
        let mut failures = 0.0;
        for obs in data.observations() {
            let ln_z = (obs.time / eta).ln();
            let cumulative_hazard = (obs.time / eta).powf(beta);
            d_beta -= cumulative_hazard * ln_z;
            sum_hazard += cumulative_hazard;
            if !obs.censored {
                d_beta += 1.0 / beta + ln_z;
                failures += 1.0;
            }
        }
        let d_eta = beta / eta * (sum_hazard - failures);
        Ok(array![d_beta, d_eta])
    }
}
