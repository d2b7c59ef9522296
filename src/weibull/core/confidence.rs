//! Approximate two-sided confidence intervals for `(β, η)`.
//!
//! Uses the large-sample variance approximations for complete Weibull data,
//! `Var(β̂) ≈ 1.109 β² / n` and `Var(η̂) ≈ 0.608 η² / n`, with `n` the total
//! sample size, and a normal quantile from a three-entry table. Levels other
//! than 0.90, 0.95, and 0.99 use the 95% quantile.
//!
//! Lower bounds are floored at 0.1 for `β` and at a tenth of the smallest
//! observed time for `η`, so intervals stay positive on small samples.

const BETA_VARIANCE_FACTOR: f64 = 1.109;
const ETA_VARIANCE_FACTOR: f64 = 0.608;
const BETA_LOWER_FLOOR: f64 = 0.1;
const ETA_LOWER_FLOOR_FACTOR: f64 = 0.1;

/// Interval bounds at a given confidence level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceIntervals {
    pub level: f64,
    pub z: f64,
    pub beta_lower: f64,
    pub beta_upper: f64,
    pub eta_lower: f64,
    pub eta_upper: f64,
}

/// Two-sided standard-normal quantile for the supported levels.
///
/// `0.90 → 1.645`, `0.95 → 1.960`, `0.99 → 2.576`; anything else → `1.960`.
pub fn z_value(confidence_level: f64) -> f64 {
    if confidence_level == 0.90 {
        1.645
    } else if confidence_level == 0.99 {
        2.576
    } else {
        1.960
    }
}

/// Approximate intervals around `(β, η)` for a sample of `n` units whose
/// smallest observed time is `min_time`.
pub fn approximate_intervals(
    beta: f64, eta: f64, n: usize, min_time: f64, confidence_level: f64,
) -> ConfidenceIntervals {
    let n = n as f64;
    let z = z_value(confidence_level);
    let beta_half = z * (BETA_VARIANCE_FACTOR * beta * beta / n).sqrt();
    let eta_half = z * (ETA_VARIANCE_FACTOR * eta * eta / n).sqrt();
    ConfidenceIntervals {
        level: confidence_level,
        z,
        beta_lower: (beta - beta_half).max(BETA_LOWER_FLOOR),
        beta_upper: beta + beta_half,
        eta_lower: (eta - eta_half).max(ETA_LOWER_FLOOR_FACTOR * min_time),
        eta_upper: eta + eta_half,
    }
}
