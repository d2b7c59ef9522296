//! inference::fisher — Fisher-matrix confidence bounds for `(β, η)`.
//!
//! Purpose
//! -------
//! Provide likelihood-based bounds as an alternative to the approximate
//! intervals on the analysis record. The observed information at the MLE is
//! the negated Hessian of the censored log-likelihood, differentiated
//! numerically from its analytic gradient; its pseudoinverse is the
//! asymptotic covariance of `(β̂, η̂)`.
//!
//! Key behaviors
//! -------------
//! - Bounds are log-normal, `θ · exp(±z · se/θ)`, so they stay positive.
//! - `z = Φ⁻¹((1 + CL)/2)` is the exact normal quantile from `statrs`.
//! - The covariance `cov(β̂, η̂)` is reported alongside the bounds.
//!
//! Invariants & assumptions
//! ------------------------
//! - `(β, η)` should be the MLE; at other points the curvature is still
//!   computed but has no sampling interpretation.
//! - A flat direction (information eigenvalue ≤ `EIGEN_EPS`) yields zero
//!   variance and is flagged with `information_positive_definite == false`.
use crate::{
    inference::hessian::{calc_covariance, standard_errors},
    weibull::{
        core::data::LifeData,
        errors::{AnalysisResult, WeibullError},
        models::likelihood::WeibullLikelihood,
    },
};
use ndarray::array;
use statrs::distribution::{ContinuousCDF, Normal};

/// Fisher-matrix bounds on `(β, η)` at one confidence level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherBounds {
    pub confidence_level: f64,
    pub z: f64,
    pub beta_se: f64,
    pub eta_se: f64,
    pub beta_eta_covariance: f64,
    pub beta_lower: f64,
    pub beta_upper: f64,
    pub eta_lower: f64,
    pub eta_upper: f64,
    pub information_positive_definite: bool,
}

/// Two-sided standard-normal quantile `Φ⁻¹((1 + CL)/2)`.
///
/// # Errors
/// `WeibullError::InvalidConfidenceLevel` unless `0 < CL < 1`.
pub fn normal_quantile(confidence_level: f64) -> AnalysisResult<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(WeibullError::InvalidConfidenceLevel { value: confidence_level });
    }
    let standard = Normal::new(0.0, 1.0)
        .map_err(|_| WeibullError::InvalidConfidenceLevel { value: confidence_level })?;
    Ok(standard.inverse_cdf(0.5 * (1.0 + confidence_level)))
}

/// fisher_bounds — observed-information bounds at `(β, η)`.
///
/// Parameters
/// ----------
/// - `data`: the life data the estimate was fitted to.
/// - `beta`, `eta`: the estimate (normally `WeibullResult::beta/eta`).
/// - `confidence_level`: two-sided level in `(0, 1)`.
///
/// Errors
/// ------
/// - `WeibullError::InvalidConfidenceLevel` for a level outside `(0, 1)`.
/// - `WeibullError::InvalidShape` / `InvalidScale` for non-positive parameters.
/// - `WeibullError::Optimizer` when the curvature is not finite.
///
/// Examples
/// --------
/// ```rust
/// # use weibull_reliability::inference::fisher::fisher_bounds;
/// # use weibull_reliability::weibull::{analyze, core::{LifeData, TimeUnit}};
/// let times = [105.0, 230.0, 310.0, 450.0, 600.0, 720.0];
/// let res = analyze(&times, None, 0.95).unwrap();
/// let data = LifeData::new(&times, None, TimeUnit::Hours).unwrap();
/// let fb = fisher_bounds(&data, res.beta(), res.eta(), 0.95).unwrap();
/// assert!(fb.beta_lower < res.beta() && res.beta() < fb.beta_upper);
/// ```
pub fn fisher_bounds(
    data: &LifeData, beta: f64, eta: f64, confidence_level: f64,
) -> AnalysisResult<FisherBounds> {
    let z = normal_quantile(confidence_level)?;
    if !beta.is_finite() || beta <= 0.0 {
        return Err(WeibullError::InvalidShape { value: beta });
    }
    if !eta.is_finite() || eta <= 0.0 {
        return Err(WeibullError::InvalidScale { value: eta });
    }

    let (cov, pd) = calc_covariance(&WeibullLikelihood, &array![beta, eta], data)?;
    let se = standard_errors(&cov);
    let (beta_se, eta_se) = (se[0], se[1]);
    let beta_factor = (z * beta_se / beta).exp();
    let eta_factor = (z * eta_se / eta).exp();

    Ok(FisherBounds {
        confidence_level,
        z,
        beta_se,
        eta_se,
        beta_eta_covariance: cov[[0, 1]],
        beta_lower: beta / beta_factor,
        beta_upper: beta * beta_factor,
        eta_lower: eta / eta_factor,
        eta_upper: eta * eta_factor,
        information_positive_definite: pd,
    })
}
