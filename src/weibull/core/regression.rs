//! Rank-regression seed for the Weibull MLE.
//!
//! Purpose
//! -------
//! Produce a quick, robust `(β₀, η₀)` starting point from failure times alone
//! by ordinary least squares on Weibull-plot coordinates (median rank
//! regression, Y on X).
//!
//! Key behaviors
//! -------------
//! - Fewer than 2 failures, or a degenerate fit (all failures identical,
//!   non-finite slope/intercept, non-positive slope), falls back to
//!   `(2.0, mean of all times)`.
//! - Otherwise the fit is clamped to `β ∈ [0.5, 4.0]` and
//!   `η ∈ [0.5 · min failure, 2 · max failure]`.
//! - The returned [`RegressionSeed`] records which path produced it.
use crate::weibull::core::{data::LifeData, ranks::linearize};

pub const FALLBACK_BETA: f64 = 2.0;
pub const SEED_BETA_MIN: f64 = 0.5;
pub const SEED_BETA_MAX: f64 = 4.0;
pub const SEED_ETA_MIN_FACTOR: f64 = 0.5;
pub const SEED_ETA_MAX_FACTOR: f64 = 2.0;

/// Starting point for the likelihood search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSeed {
    pub beta: f64,
    pub eta: f64,
    /// `true` when the crude `(2.0, mean)` fallback was used.
    pub fallback: bool,
}

/// Median-rank regression seed from the failures in `data`.
///
/// # Examples
/// ```rust
/// # use weibull_reliability::weibull::core::{data::LifeData, units::TimeUnit};
/// # use weibull_reliability::weibull::core::regression::rank_regression_seed;
/// let data = LifeData::new(&[50.0, 80.0, 120.0], Some(&[false, true, true]), TimeUnit::Hours)
///     .unwrap();
/// let seed = rank_regression_seed(&data);
/// assert!(seed.fallback);
/// assert_eq!((seed.beta, seed.eta), (2.0, 250.0 / 3.0));
/// ```
pub fn rank_regression_seed(data: &LifeData) -> RegressionSeed {
    let fallback = RegressionSeed { beta: FALLBACK_BETA, eta: data.mean_time(), fallback: true };

    let failures = data.failure_times();
    if failures.len() < 2 {
        return fallback;
    }
    let min_failure = failures[0];
    let max_failure = failures[failures.len() - 1];
    if min_failure == max_failure {
        return fallback;
    }

    let (x, y) = linearize(&failures);
    let Some((slope, intercept)) = least_squares(&x, &y) else {
        return fallback;
    };
    if !(slope.is_finite() && intercept.is_finite()) || slope <= 0.0 {
        return fallback;
    }

    let eta = (-intercept / slope).exp();
    RegressionSeed {
        beta: slope.clamp(SEED_BETA_MIN, SEED_BETA_MAX),
        eta: eta.clamp(SEED_ETA_MIN_FACTOR * min_failure, SEED_ETA_MAX_FACTOR * max_failure),
        fallback: false,
    }
}

/// OLS fit `y = slope · x + intercept`; `None` when `x` has no spread.
fn least_squares(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let (sxy, sxx) = x.iter().zip(y).fold((0.0, 0.0), |(sxy, sxx), (&xi, &yi)| {
        let dx = xi - x_mean;
        (sxy + dx * (yi - y_mean), sxx + dx * dx)
    });
    if sxx <= 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, y_mean - slope * x_mean))
}
