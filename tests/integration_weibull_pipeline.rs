//! Integration tests for the Weibull analysis pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: validated life data, rank-regression
//!   seed, multi-start MLE, life metrics, R², and confidence bounds.
//! - Pin the documented behavior on complete, censored, and degenerate
//!   samples through the public API only.
//!
//! Coverage
//! --------
//! - `weibull::analysis`: `analyze` / `analyze_data` on complete and
//!   right-censored samples, determinism, and validation errors.
//! - `weibull::core`: probability-plot points, the fitted line, function
//!   curves, and mission reliability on the fitted distribution.
//! - `inference::fisher`: observed-information bounds at the fitted MLE.
//!
//! Exclusions
//! ----------
//! - Optimizer internals (simplex construction, tolerance validation) and
//!   the individual estimator formulas; unit tests cover those.
//! - Python bindings.
use approx::assert_relative_eq;
use weibull_reliability::{
    inference::fisher::fisher_bounds,
    optimization::loglik_optimizer::{MLEOptions, Tolerances},
    weibull::{
        analyze, analyze_data,
        core::{
            AnalysisOptions, LifeData, Observation, TimeUnit, probability_plot,
            rank_regression_seed, z_value,
        },
        errors::{ErrorKind, WeibullError},
        models::likelihood::WeibullLikelihood,
    },
};

const TIMES: [f64; 5] = [100.0, 200.0, 300.0, 400.0, 500.0];

/// Purpose
/// -------
/// Build life data in hours from parallel time/flag slices.
fn life_data(times: &[f64], censored: Option<&[bool]>) -> LifeData {
    LifeData::new(times, censored, TimeUnit::Hours).unwrap()
}

#[test]
// Purpose
// -------
// Five complete failures produce a fully populated, consistent record.
//
// Given
// -----
// - times = [100, 200, 300, 400, 500], no censoring, CL = 0.95.
//
// Expect
// ------
// - sample_size = failure_count = 5, finite positive (β, η), converged MLE.
// - R² in [0, 1], ordered B-lives, MTTF inside the observed range.
// - Approximate intervals bracket the estimate.
fn complete_sample_produces_consistent_record() {
    // Arrange
    let censored = [false; 5];

    // Act
    let res = analyze(&TIMES, Some(&censored), 0.95).unwrap();

    // Assert
    assert_eq!(res.sample_size(), 5);
    assert_eq!(res.failure_count(), 5);
    assert!(res.beta().is_finite() && res.beta() > 0.0);
    assert!(res.eta().is_finite() && res.eta() > 0.0);
    assert!(res.mle_converged());
    assert!((0.0..=1.0).contains(&res.r_squared()));
    assert!(res.b10_life() < res.b50_life() && res.b50_life() < res.b90_life());
    assert!(res.mttf() > 100.0 && res.mttf() < 500.0);
    assert!(res.has_confidence_interval());
    assert!(res.beta_lower() <= res.beta() && res.beta() <= res.beta_upper());
    assert!(res.eta_lower() <= res.eta() && res.eta() <= res.eta_upper());
}

#[test]
// Purpose
// -------
// Censored units enter the likelihood through survival terms only and are
// excluded from the probability-plot R².
//
// Given
// -----
// - times = [100, 200, 300, 400, 500] with the last two censored.
//
// Expect
// ------
// - failure_count = 3, sample_size = 5.
// - R² equals the R² of the three failures analyzed alone.
// - The reported log-likelihood equals the hand-computed censored sum at
//   the reported (β, η).
fn censored_sample_uses_survival_terms() {
    // Arrange
    let censored = [false, false, false, true, true];

    // Act
    let res = analyze(&TIMES, Some(&censored), 0.95).unwrap();
    let failures_only = analyze(&TIMES[..3], None, 0.95).unwrap();

    // Assert
    assert_eq!(res.failure_count(), 3);
    assert_eq!(res.sample_size(), 5);
    assert_eq!(res.r_squared(), failures_only.r_squared());

    let (beta, eta) = (res.beta(), res.eta());
    let failure = |t: f64| beta.ln() - beta * eta.ln() + (beta - 1.0) * t.ln() - (t / eta).powf(beta);
    let survival = |t: f64| -(t / eta).powf(beta);
    let expected =
        failure(100.0) + failure(200.0) + failure(300.0) + survival(400.0) + survival(500.0);
    assert_relative_eq!(res.log_likelihood(), expected, max_relative = 1e-10);

    // Suspensions past the last failure stretch the characteristic life.
    assert!(res.eta() > failures_only.eta());
}

#[test]
// Purpose
// -------
// An untabulated level uses the 95% quantile, so the intervals match the
// CL = 0.95 record exactly while the level itself is reported as given.
fn untabulated_level_uses_95_percent_quantile() {
    let at_80 = analyze(&TIMES, None, 0.80).unwrap();
    let at_95 = analyze(&TIMES, None, 0.95).unwrap();
    let at_90 = analyze(&TIMES, None, 0.90).unwrap();

    assert_eq!(z_value(0.80), z_value(0.95));
    assert_eq!(z_value(0.80), 1.960);
    assert_eq!(at_80.confidence_level(), 0.80);
    assert_eq!(at_80.beta_upper(), at_95.beta_upper());
    assert_eq!(at_80.eta_upper(), at_95.eta_upper());
    assert_eq!(at_80.beta_lower(), at_95.beta_lower());
    assert!(at_90.beta_upper() < at_95.beta_upper());
}

#[test]
// Purpose
// -------
// Identical input gives a bit-identical record.
fn analysis_is_deterministic() {
    let times = [55.0, 187.0, 216.0, 240.0, 244.0, 335.0, 361.0, 373.0, 375.0, 386.0];
    let censored = [false, false, false, false, true, false, false, true, false, true];

    let a = analyze(&times, Some(&censored), 0.95).unwrap();
    let b = analyze(&times, Some(&censored), 0.95).unwrap();

    assert_eq!(a, b);
}

#[test]
// Purpose
// -------
// Input validation errors are raised before any estimation and carry the
// expected classification.
fn invalid_input_is_rejected() {
    let too_few = analyze(&[100.0, 200.0], None, 0.95).unwrap_err();
    assert_eq!(too_few, WeibullError::InsufficientData { found: 2, required: 3 });
    assert_eq!(too_few.kind(), ErrorKind::InsufficientData);

    let negative = analyze(&[100.0, -5.0, 300.0], None, 0.95).unwrap_err();
    assert_eq!(negative.kind(), ErrorKind::InvalidArgument);

    let mismatch = analyze(&TIMES, Some(&[false, true]), 0.95).unwrap_err();
    assert!(matches!(mismatch, WeibullError::CensorLengthMismatch { times: 5, flags: 2 }));

    let nan = analyze(&[100.0, f64::NAN, 300.0], None, 0.95).unwrap_err();
    assert!(matches!(nan, WeibullError::NonFiniteTime { index: 1, .. }));
}

#[test]
// Purpose
// -------
// With a single failure the seed falls back to (2.0, mean of all times) and
// R² is zero; the analysis still returns a record.
fn single_failure_uses_fallback_seed() {
    let data = life_data(&[100.0, 200.0, 300.0], Some(&[false, true, true]));

    let seed = rank_regression_seed(&data);
    let res = analyze_data(&data, &AnalysisOptions::default()).unwrap();

    assert!(seed.fallback);
    assert_eq!(seed.beta, 2.0);
    assert_relative_eq!(seed.eta, 200.0, epsilon = 1e-12);
    assert_eq!(res.r_squared(), 0.0);
    assert_eq!(res.failure_count(), 1);
    assert!(res.beta() > 0.0 && res.eta() > 0.0);
}

#[test]
// Purpose
// -------
// An all-censored sample has no finite MLE; the record carries the fallback
// seed and says so instead of reporting an arbitrary converged point.
//
// Given
// -----
// - times = [100, 200, 300], every unit censored.
//
// Expect
// ------
// - failure_count = 0, R² = 0, (β, η) = (2.0, mean time), not converged.
// - Life metrics stay finite and positive.
fn all_censored_sample_reports_seed() {
    let res = analyze(&[100.0, 200.0, 300.0], Some(&[true, true, true]), 0.95).unwrap();

    assert_eq!(res.sample_size(), 3);
    assert_eq!(res.failure_count(), 0);
    assert_eq!(res.r_squared(), 0.0);
    assert!(!res.mle_converged());
    assert_eq!(res.beta(), 2.0);
    assert_relative_eq!(res.eta(), 200.0, epsilon = 1e-12);
    for value in [res.mttf(), res.b10_life(), res.b90_life(), res.log_likelihood()] {
        assert!(value.is_finite());
    }
    assert!(res.mttf() > 0.0 && res.b10_life() > 0.0);
    assert!(res.has_confidence_interval());
}

#[test]
// Purpose
// -------
// When no attempt may converge, the record reports the seed and flags it.
//
// Given
// -----
// - An optimizer capped at one iteration.
//
// Expect
// ------
// - mle_converged() == false and (β, η) equal to the rank-regression seed.
fn capped_optimizer_reports_seed() {
    let data = life_data(&TIMES, None);
    let tols = Tolerances::new(Some(1e-12), Some(1)).unwrap();
    let opts = AnalysisOptions::new(0.95, MLEOptions::new(tols, 0.05, false).unwrap());

    let res = analyze_data(&data, &opts).unwrap();
    let seed = rank_regression_seed(&data);

    assert!(!res.mle_converged());
    assert_eq!(res.beta(), seed.beta);
    assert_eq!(res.eta(), seed.eta);
    assert_relative_eq!(
        res.log_likelihood(),
        WeibullLikelihood::log_likelihood(seed.beta, seed.eta, &data),
        max_relative = 1e-12
    );
}

#[test]
// Purpose
// -------
// The fitted distribution supports plotting and mission reliability after
// the analysis.
//
// Expect
// ------
// - R(0) = 1 and R is non-increasing on the curve grid.
// - Probability-plot points cover the failures only, in time order.
// - The fitted line passes through y = 0 at x = ln η.
fn fitted_distribution_curves_and_plot() {
    let observations = [
        Observation::failure(120.0),
        Observation::failure(340.0),
        Observation::failure(95.0),
        Observation::suspension(410.0),
        Observation::suspension(410.0),
    ];
    let data = LifeData::from_observations(&observations, TimeUnit::Cycles).unwrap();
    let res = analyze_data(&data, &AnalysisOptions::default()).unwrap();
    let dist = res.distribution();

    assert_eq!(dist.reliability(0.0).unwrap(), 1.0);
    let curves = dist.curves(data.curve_horizon(), 50).unwrap();
    assert_eq!(curves.times.len(), 50);
    assert_relative_eq!(curves.times[49], 1.5 * 410.0, max_relative = 1e-12);
    for w in curves.reliability.windows(2) {
        assert!(w[1] <= w[0]);
    }

    let points = probability_plot(&data);
    let plotted: Vec<f64> = points.iter().map(|p| p.time).collect();
    assert_eq!(plotted, vec![95.0, 120.0, 340.0]);
    assert!(points.windows(2).all(|w| w[0].median_rank < w[1].median_rank));

    let ln_eta = res.eta().ln();
    let [(_, y0), (_, y1)] = dist.linearized_line(ln_eta, ln_eta + 1.0);
    assert_relative_eq!(y0, 0.0, epsilon = 1e-12);
    assert_relative_eq!(y1, res.beta(), epsilon = 1e-12);

    let mission = dist.reliability_at(&[100.0, 200.0, 400.0]).unwrap();
    assert!(mission[0] > mission[1] && mission[1] > mission[2]);
}

#[test]
// Purpose
// -------
// Fisher-matrix bounds at the fitted MLE bracket the estimate, tighten
// with more data, and reject invalid levels.
fn fisher_bounds_at_fitted_mle() {
    let small = life_data(&[150.0, 220.0, 310.0, 480.0, 505.0, 640.0], None);
    let large_times: Vec<f64> =
        [150.0, 220.0, 310.0, 480.0, 505.0, 640.0].iter().flat_map(|&t| [t, t * 1.03]).collect();
    let large = life_data(&large_times, None);

    let fit_small = analyze_data(&small, &AnalysisOptions::default()).unwrap();
    let fit_large = analyze_data(&large, &AnalysisOptions::default()).unwrap();
    let fb_small = fisher_bounds(&small, fit_small.beta(), fit_small.eta(), 0.95).unwrap();
    let fb_large = fisher_bounds(&large, fit_large.beta(), fit_large.eta(), 0.95).unwrap();

    assert!(fb_small.information_positive_definite);
    assert!(fb_small.beta_lower < fit_small.beta() && fit_small.beta() < fb_small.beta_upper);
    assert!(fb_small.eta_lower < fit_small.eta() && fit_small.eta() < fb_small.eta_upper);
    assert!(fb_large.eta_se / fit_large.eta() < fb_small.eta_se / fit_small.eta());

    let err = fisher_bounds(&small, fit_small.beta(), fit_small.eta(), 1.5).unwrap_err();
    assert_eq!(err, WeibullError::InvalidConfidenceLevel { value: 1.5 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
