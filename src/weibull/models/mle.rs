//! Multi-start maximum-likelihood refinement of a rank-regression seed.
//!
//! Purpose
//! -------
//! Refine `(β₀, η₀)` by maximizing the censored Weibull likelihood with the
//! Nelder–Mead simplex from three deterministic starting points, and keep
//! the best admissible result.
//!
//! Key behaviors
//! -------------
//! - Starts: `(β₀, η₀)`, `(min(1.5β₀, 4), 1.1η₀)`, `(max(0.7β₀, 0.5), 0.9η₀)`.
//! - Attempts run sequentially. One counts only when the simplex converged
//!   (hitting the iteration cap does not), no error was raised, and the
//!   estimate is finite and inside the search region.
//! - The lowest negative log-likelihood wins; ties keep the earlier attempt.
//! - If no attempt counts, the seed itself is returned with
//!   `converged == false`. This is a degradation, not an error.
//! - With no failures the censored likelihood has no maximizer (it rises
//!   towards 0 as `η → ∞`), so no attempt is run and the seed is returned
//!   with `converged == false` and an empty attempt list.
//!
//! Invariants & assumptions
//! ------------------------
//! - The reported `(β, η)` is never re-clamped after the search.
//! - Every attempt is recorded in [`MleFit::attempts`] so the caller can
//!   report what happened; this module itself does not log.
use crate::{
    optimization::{
        errors::OptError,
        loglik_optimizer::{MLEOptions, maximize},
    },
    weibull::{
        core::{data::LifeData, regression::RegressionSeed},
        models::likelihood::WeibullLikelihood,
    },
};
use ndarray::array;

const SECOND_START_BETA_FACTOR: f64 = 1.5;
const SECOND_START_BETA_CAP: f64 = 4.0;
const SECOND_START_ETA_FACTOR: f64 = 1.1;
const THIRD_START_BETA_FACTOR: f64 = 0.7;
const THIRD_START_BETA_FLOOR: f64 = 0.5;
const THIRD_START_ETA_FACTOR: f64 = 0.9;

/// What a single multi-start attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Converged inside the search region; eligible to win.
    Converged { beta: f64, eta: f64, neg_log_likelihood: f64, iterations: usize },
    /// Stopped without meeting the simplex tolerance.
    NotConverged { status: String, iterations: usize },
    /// Converged to a point outside the search region.
    Infeasible { beta: f64, eta: f64 },
    /// The optimizer raised an error.
    Failed(OptError),
}

/// One multi-start attempt: its starting point and outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct MleAttempt {
    pub start_beta: f64,
    pub start_eta: f64,
    pub outcome: AttemptOutcome,
}

impl MleAttempt {
    /// Negative log-likelihood if this attempt is eligible.
    pub fn accepted_nll(&self) -> Option<f64> {
        match self.outcome {
            AttemptOutcome::Converged { neg_log_likelihood, .. } => Some(neg_log_likelihood),
            _ => None,
        }
    }
}

/// Result of the multi-start search.
#[derive(Debug, Clone, PartialEq)]
pub struct MleFit {
    pub beta: f64,
    pub eta: f64,
    pub neg_log_likelihood: f64,
    /// `false` when every attempt was rejected and the seed was kept.
    pub converged: bool,
    /// Index into `attempts` of the winning attempt, if any.
    pub best_attempt: Option<usize>,
    pub attempts: Vec<MleAttempt>,
}

/// The three deterministic starting points derived from a seed.
pub fn multi_start_points(seed: &RegressionSeed) -> [(f64, f64); 3] {
    let (b0, e0) = (seed.beta, seed.eta);
    [
        (b0, e0),
        ((b0 * SECOND_START_BETA_FACTOR).min(SECOND_START_BETA_CAP), e0 * SECOND_START_ETA_FACTOR),
        ((b0 * THIRD_START_BETA_FACTOR).max(THIRD_START_BETA_FLOOR), e0 * THIRD_START_ETA_FACTOR),
    ]
}

/// fit_mle — multi-start Nelder–Mead refinement of `seed` on `data`.
///
/// Parameters
/// ----------
/// - `data`: validated life data (failures and suspensions).
/// - `seed`: rank-regression starting point.
/// - `opts`: simplex settings shared by every attempt.
///
/// Returns
/// -------
/// [`MleFit`] with the winning estimate, or the seed when nothing counted
/// or the data hold no failures.
pub fn fit_mle(data: &LifeData, seed: &RegressionSeed, opts: &MLEOptions) -> MleFit {
    if data.failure_count() == 0 {
        return seed_fit(data, seed, Vec::new());
    }
    let attempts: Vec<MleAttempt> = multi_start_points(seed)
        .iter()
        .map(|&(start_beta, start_eta)| MleAttempt {
            start_beta,
            start_eta,
            outcome: run_attempt(data, start_beta, start_eta, opts),
        })
        .collect();

    let mut best: Option<(usize, f64, f64, f64)> = None;
    for (index, attempt) in attempts.iter().enumerate() {
        if let AttemptOutcome::Converged { beta, eta, neg_log_likelihood, .. } = attempt.outcome {
            let better = match best {
                Some((_, _, _, best_nll)) => neg_log_likelihood < best_nll,
                None => true,
            };
            if better {
                best = Some((index, beta, eta, neg_log_likelihood));
            }
        }
    }

    match best {
        Some((index, beta, eta, neg_log_likelihood)) => MleFit {
            beta,
            eta,
            neg_log_likelihood,
            converged: true,
            best_attempt: Some(index),
            attempts,
        },
        None => seed_fit(data, seed, attempts),
    }
}

fn seed_fit(data: &LifeData, seed: &RegressionSeed, attempts: Vec<MleAttempt>) -> MleFit {
    MleFit {
        beta: seed.beta,
        eta: seed.eta,
        neg_log_likelihood: WeibullLikelihood::negative_log_likelihood(seed.beta, seed.eta, data),
        converged: false,
        best_attempt: None,
        attempts,
    }
}

fn run_attempt(data: &LifeData, beta0: f64, eta0: f64, opts: &MLEOptions) -> AttemptOutcome {
    let outcome = match maximize(&WeibullLikelihood, array![beta0, eta0], data, opts) {
        Ok(outcome) => outcome,
        Err(err) => return AttemptOutcome::Failed(err),
    };
    if !outcome.converged {
        return AttemptOutcome::NotConverged {
            status: outcome.status,
            iterations: outcome.iterations,
        };
    }
    let (beta, eta) = (outcome.theta_hat[0], outcome.theta_hat[1]);
    let neg_log_likelihood = WeibullLikelihood::negative_log_likelihood(beta, eta, data);
    if !WeibullLikelihood::in_region(beta, eta) || !neg_log_likelihood.is_finite() {
        return AttemptOutcome::Infeasible { beta, eta };
    }
    AttemptOutcome::Converged { beta, eta, neg_log_likelihood, iterations: outcome.iterations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        optimization::loglik_optimizer::Tolerances,
        weibull::core::{regression::rank_regression_seed, units::TimeUnit},
    };
    use approx::assert_relative_eq;

    fn complete(times: &[f64]) -> LifeData {
        LifeData::new(times, None, TimeUnit::Hours).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Starting points follow the scaled/capped layout.
    fn multi_start_points_layout() {
        let seed = RegressionSeed { beta: 3.0, eta: 100.0, fallback: false };

        let pts = multi_start_points(&seed);

        assert_eq!(pts[0], (3.0, 100.0));
        assert_eq!(pts[1].0, 4.0);
        assert_relative_eq!(pts[1].1, 110.0, epsilon = 1e-12);
        assert_relative_eq!(pts[2].0, 2.1, epsilon = 1e-12);
        assert_relative_eq!(pts[2].1, 90.0, epsilon = 1e-12);

        let low = RegressionSeed { beta: 0.6, eta: 10.0, fallback: false };
        assert_eq!(multi_start_points(&low)[2].0, 0.5);
    }

    #[test]
    // Purpose
    // -------
    // On complete data the η score equation gives η^β = Σ t^β / n at the
    // optimum; the fitted pair must satisfy it.
    //
    // Given
    // -----
    // - Ten complete failures.
    //
    // Expect
    // ------
    // - Converged fit, best attempt recorded, η = (Σ t^β / n)^(1/β).
    fn fit_satisfies_scale_score_equation() {
        let data = complete(&[55.0, 187.0, 216.0, 240.0, 244.0, 335.0, 361.0, 373.0, 375.0, 386.0]);
        let seed = rank_regression_seed(&data);

        let fit = fit_mle(&data, &seed, &MLEOptions::default());

        assert!(fit.converged);
        assert!(fit.best_attempt.is_some());
        assert_eq!(fit.attempts.len(), 3);
        let mean_power: f64 =
            data.times().iter().map(|t| t.powf(fit.beta)).sum::<f64>() / data.len() as f64;
        assert_relative_eq!(fit.eta, mean_power.powf(1.0 / fit.beta), max_relative = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // The winning NLL is no worse than any accepted attempt and no worse
    // than the seed.
    fn winner_has_lowest_nll() {
        let data = LifeData::new(
            &[120.0, 340.0, 95.0, 410.0, 410.0],
            Some(&[false, false, false, true, true]),
            TimeUnit::Hours,
        )
        .unwrap();
        let seed = rank_regression_seed(&data);

        let fit = fit_mle(&data, &seed, &MLEOptions::default());

        assert!(fit.converged);
        for attempt in &fit.attempts {
            if let Some(nll) = attempt.accepted_nll() {
                assert!(fit.neg_log_likelihood <= nll);
            }
        }
        assert!(
            fit.neg_log_likelihood
                <= WeibullLikelihood::negative_log_likelihood(seed.beta, seed.eta, &data)
        );
    }

    #[test]
    // Purpose
    // -------
    // With a one-iteration cap no attempt converges, so the seed is reported
    // unchanged and flagged.
    fn no_converged_attempt_falls_back_to_seed() {
        let data = complete(&[10.0, 35.0, 60.0, 90.0]);
        let seed = rank_regression_seed(&data);
        let opts =
            MLEOptions::new(Tolerances::new(Some(1e-12), Some(1)).unwrap(), 0.05, false).unwrap();

        let fit = fit_mle(&data, &seed, &opts);

        assert!(!fit.converged);
        assert_eq!(fit.best_attempt, None);
        assert_eq!((fit.beta, fit.eta), (seed.beta, seed.eta));
        assert!(fit
            .attempts
            .iter()
            .all(|a| matches!(a.outcome, AttemptOutcome::NotConverged { .. })));
        assert_eq!(
            fit.neg_log_likelihood,
            WeibullLikelihood::negative_log_likelihood(seed.beta, seed.eta, &data)
        );
    }

    #[test]
    // Purpose
    // -------
    // All-censored data have no finite MLE, so the seed is kept and flagged
    // without running the simplex.
    //
    // Given
    // -----
    // - Three suspensions and no failures.
    //
    // Expect
    // ------
    // - Seed (2.0, mean) reported, `converged == false`, no attempts.
    fn all_censored_keeps_seed_without_attempts() {
        let data = LifeData::new(&[100.0, 200.0, 300.0], Some(&[true, true, true]), TimeUnit::Hours)
            .unwrap();
        let seed = rank_regression_seed(&data);

        let fit = fit_mle(&data, &seed, &MLEOptions::default());

        assert!(seed.fallback);
        assert!(!fit.converged);
        assert!(fit.attempts.is_empty());
        assert_eq!(fit.best_attempt, None);
        assert_eq!((fit.beta, fit.eta), (2.0, 200.0));
    }

    #[test]
    // Purpose
    // -------
    // Two runs on the same input are bit-identical.
    fn fit_is_deterministic() {
        let data = complete(&[150.0, 220.0, 310.0, 480.0, 505.0, 640.0]);
        let seed = rank_regression_seed(&data);

        let a = fit_mle(&data, &seed, &MLEOptions::default());
        let b = fit_mle(&data, &seed, &MLEOptions::default());

        assert_eq!(a, b);
    }
}
