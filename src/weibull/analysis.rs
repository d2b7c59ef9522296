//! Analysis orchestrator: validated input in, one immutable result out.
//!
//! Purpose
//! -------
//! Sequence the estimators of a Weibull life-data analysis and assemble the
//! [`WeibullResult`] record:
//!
//! 1. rank-regression seed from the failures,
//! 2. multi-start MLE refinement over all observations,
//! 3. life metrics from the refined `(β, η)`,
//! 4. probability-plot R²,
//! 5. approximate confidence intervals.
//!
//! Key behaviors
//! -------------
//! - Input validation happens before any estimation work; there are no
//!   partial results.
//! - If every MLE attempt is rejected, or the data hold no failures, the
//!   seed is reported, the result is flagged with `mle_converged() == false`,
//!   and a `tracing` warning is emitted. No error is raised.
//! - `log_likelihood()` is always ℓ evaluated at the reported `(β, η)`,
//!   never the optimizer's infeasibility sentinel.
//! - This is the only place in the crate that logs.
use crate::weibull::{
    core::{
        confidence::approximate_intervals,
        data::LifeData,
        goodness::r_squared,
        options::AnalysisOptions,
        regression::rank_regression_seed,
        reliability::WeibullDistribution,
        units::TimeUnit,
    },
    errors::AnalysisResult,
    models::{
        likelihood::WeibullLikelihood,
        mle::{AttemptOutcome, fit_mle},
    },
};
use tracing::{debug, warn};

/// Outcome of one Weibull life-data analysis.
///
/// All life metrics and intervals are computed from the refined `(β, η)`.
/// The record does not keep its input data.
#[derive(Debug, Clone, PartialEq)]
pub struct WeibullResult {
    distribution: WeibullDistribution,
    mttf: f64,
    median_life: f64,
    b10_life: f64,
    b50_life: f64,
    b90_life: f64,
    r_squared: f64,
    confidence_level: f64,
    beta_lower: f64,
    beta_upper: f64,
    eta_lower: f64,
    eta_upper: f64,
    sample_size: usize,
    failure_count: usize,
    log_likelihood: f64,
    mle_converged: bool,
}

impl WeibullResult {
    /// Shape parameter `β`.
    pub fn beta(&self) -> f64 {
        self.distribution.beta()
    }

    /// Scale parameter `η` (characteristic life).
    pub fn eta(&self) -> f64 {
        self.distribution.eta()
    }

    /// Location parameter; always 0 for the two-parameter model.
    pub fn gamma(&self) -> f64 {
        0.0
    }

    pub fn mttf(&self) -> f64 {
        self.mttf
    }

    pub fn median_life(&self) -> f64 {
        self.median_life
    }

    pub fn b10_life(&self) -> f64 {
        self.b10_life
    }

    pub fn b50_life(&self) -> f64 {
        self.b50_life
    }

    pub fn b90_life(&self) -> f64 {
        self.b90_life
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn beta_lower(&self) -> f64 {
        self.beta_lower
    }

    pub fn beta_upper(&self) -> f64 {
        self.beta_upper
    }

    pub fn eta_lower(&self) -> f64 {
        self.eta_lower
    }

    pub fn eta_upper(&self) -> f64 {
        self.eta_upper
    }

    /// Total number of observations, censored units included.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of non-censored observations.
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Censored log-likelihood at the reported `(β, η)`. Can be non-finite
    /// only when the seed is reported for data whose scaled powers overflow.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// `false` when no MLE attempt was accepted and the rank-regression
    /// seed was reported instead.
    pub fn mle_converged(&self) -> bool {
        self.mle_converged
    }

    /// The fitted distribution, for evaluating curves after the analysis.
    pub fn distribution(&self) -> WeibullDistribution {
        self.distribution
    }

    /// Whether both intervals are finite and non-empty.
    pub fn has_confidence_interval(&self) -> bool {
        let bounds = [self.beta_lower, self.beta_upper, self.eta_lower, self.eta_upper];
        bounds.iter().all(|b| b.is_finite())
            && self.beta_lower < self.beta_upper
            && self.eta_lower < self.eta_upper
    }
}

/// analyze — run a full analysis on raw times with default optimizer settings.
///
/// Parameters
/// ----------
/// - `times`: observed times, one per unit (finite, > 0, at least three).
/// - `censored`: optional right-censoring flags; `None` means all failures.
/// - `confidence_level`: level for the reported intervals (0.90, 0.95, or
///   0.99; other values use the 95% quantile).
///
/// Errors
/// ------
/// - `WeibullError::InsufficientData` for fewer than three times.
/// - `WeibullError::CensorLengthMismatch`, `NonFiniteTime`,
///   `NonPositiveTime` for invalid input.
///
/// Limits
/// ------
/// Metrics derived from `η` are plain `f64` products. For times within a few
/// orders of magnitude of `f64::MAX`, MTTF, the B-lives, and the upper `η`
/// bound can overflow to `+∞`; `has_confidence_interval()` then reports
/// `false`. Rescaling times (see [`TimeUnit`]) avoids this.
///
/// Examples
/// --------
/// ```rust
/// # use weibull_reliability::weibull::analyze;
/// let res = analyze(&[105.0, 230.0, 310.0, 450.0, 600.0], None, 0.95).unwrap();
/// assert!(res.beta() > 0.0 && res.eta() > 0.0);
/// assert!(res.b10_life() < res.b50_life() && res.b50_life() < res.b90_life());
/// ```
pub fn analyze(
    times: &[f64], censored: Option<&[bool]>, confidence_level: f64,
) -> AnalysisResult<WeibullResult> {
    let data = LifeData::new(times, censored, TimeUnit::default())?;
    analyze_data(&data, &AnalysisOptions::with_confidence_level(confidence_level))
}

/// analyze_data — run a full analysis on validated life data.
///
/// # Errors
/// Only if a life metric rejects the fitted parameters, which validated
/// data and the bounded search rule out in practice.
pub fn analyze_data(data: &LifeData, opts: &AnalysisOptions) -> AnalysisResult<WeibullResult> {
    debug!(
        sample_size = data.len(),
        failures = data.failure_count(),
        unit = data.unit().label(),
        "Starting Weibull analysis"
    );

    let seed = rank_regression_seed(data);
    debug!(beta = seed.beta, eta = seed.eta, fallback = seed.fallback, "Rank regression seed");

    let fit = fit_mle(data, &seed, &opts.mle_opts);
    for (index, attempt) in fit.attempts.iter().enumerate() {
        match &attempt.outcome {
            AttemptOutcome::Converged { beta, eta, neg_log_likelihood, iterations } => debug!(
                attempt = index,
                start_beta = attempt.start_beta,
                start_eta = attempt.start_eta,
                beta,
                eta,
                nll = neg_log_likelihood,
                iterations,
                "MLE attempt converged"
            ),
            AttemptOutcome::NotConverged { status, iterations } => debug!(
                attempt = index,
                start_beta = attempt.start_beta,
                start_eta = attempt.start_eta,
                status = %status,
                iterations,
                "MLE attempt did not converge"
            ),
            AttemptOutcome::Infeasible { beta, eta } => debug!(
                attempt = index,
                beta,
                eta,
                "MLE attempt left the search region"
            ),
            AttemptOutcome::Failed(err) => debug!(
                attempt = index,
                error = %err,
                "MLE attempt failed"
            ),
        }
    }
    if data.failure_count() == 0 {
        warn!(
            beta = fit.beta,
            eta = fit.eta,
            "No failures observed; the likelihood has no maximizer, reporting the rank regression seed"
        );
    } else if !fit.converged {
        warn!(
            beta = fit.beta,
            eta = fit.eta,
            "No MLE attempt was accepted; reporting the rank regression seed"
        );
    }

    let distribution = WeibullDistribution::new(fit.beta, fit.eta)?;
    let ci = approximate_intervals(
        fit.beta,
        fit.eta,
        data.len(),
        data.min_time(),
        opts.confidence_level,
    );

    Ok(WeibullResult {
        distribution,
        mttf: distribution.mttf(),
        median_life: distribution.median_life(),
        b10_life: distribution.b_life(0.10)?,
        b50_life: distribution.b_life(0.50)?,
        b90_life: distribution.b_life(0.90)?,
        r_squared: r_squared(data),
        confidence_level: opts.confidence_level,
        beta_lower: ci.beta_lower,
        beta_upper: ci.beta_upper,
        eta_lower: ci.eta_lower,
        eta_upper: ci.eta_upper,
        sample_size: data.len(),
        failure_count: data.failure_count(),
        log_likelihood: WeibullLikelihood::log_likelihood(fit.beta, fit.eta, data),
        mle_converged: fit.converged,
    })
}
