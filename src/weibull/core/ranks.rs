//! Median ranks and Weibull-plot coordinates.
//!
//! Bernard's approximation assigns the `i`-th of `n` ordered failures the
//! cumulative failure probability `F_i = (i - 0.3) / (n + 0.4)` (1-based).
//! In Weibull-plot coordinates `x = ln t` and `y = ln(-ln(1 - F))` a Weibull
//! sample falls on a straight line with slope `β`.
//!
//! Rank regression and the R² metric both work on failure-only data; censored
//! units never receive a rank here.
use crate::weibull::core::data::LifeData;

/// One failure on a Weibull probability plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityPoint {
    pub time: f64,
    pub median_rank: f64,
    pub x: f64,
    pub y: f64,
}

/// Bernard median ranks `(i - 0.3) / (n + 0.4)` for `i = 1..=n`.
///
/// # Examples
/// ```rust
/// # use weibull_reliability::weibull::core::ranks::bernard_median_ranks;
/// let f = bernard_median_ranks(3);
/// assert!((f[0] - 0.7 / 3.4).abs() < 1e-15);
/// ```
pub fn bernard_median_ranks(n: usize) -> Vec<f64> {
    let denom = n as f64 + 0.4;
    (1..=n).map(|i| (i as f64 - 0.3) / denom).collect()
}

/// Weibull-plot coordinates `(x, y)` of ascending-sorted failure times.
pub fn linearize(sorted_failures: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let ranks = bernard_median_ranks(sorted_failures.len());
    let x = sorted_failures.iter().map(|t| t.ln()).collect();
    let y = ranks.iter().map(|&f| (-(-f).ln_1p()).ln()).collect();
    (x, y)
}

/// Probability-plot points for every failure in `data`, in ascending time.
pub fn probability_plot(data: &LifeData) -> Vec<ProbabilityPoint> {
    let failures = data.failure_times();
    let ranks = bernard_median_ranks(failures.len());
    let (x, y) = linearize(&failures);
    failures
        .iter()
        .zip(ranks)
        .zip(x.into_iter().zip(y))
        .map(|((&time, median_rank), (x, y))| ProbabilityPoint { time, median_rank, x, y })
        .collect()
}
