//! Goodness of fit on the Weibull probability plot.
//!
//! R² is the squared Pearson correlation between `x = ln t` and
//! `y = ln(-ln(1 - F))` over failures only, re-ranked among themselves.
//! It measures how straight the plot is and does not depend on the fitted
//! `(β, η)`. Fewer than two failures, or a non-finite correlation (e.g.
//! identical failure times), give 0.
use crate::weibull::core::{data::LifeData, ranks::linearize};

/// Squared Pearson correlation of the failure-only probability plot, in `[0, 1]`.
pub fn r_squared(data: &LifeData) -> f64 {
    let failures = data.failure_times();
    if failures.len() < 2 || failures[0] == failures[failures.len() - 1] {
        return 0.0;
    }
    let (x, y) = linearize(&failures);
    let r = pearson(&x, &y);
    let r2 = r * r;
    if r2.is_finite() { r2.min(1.0) } else { 0.0 }
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let (sxy, sxx, syy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (&xi, &yi)| {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
    });
    sxy / (sxx * syy).sqrt()
}
