//! Analysis options — configuration for a Weibull life-data analysis.
//!
//! Purpose
//! -------
//! Collect the knobs of a single analysis in one place: the confidence level
//! reported on the result and the optimizer settings used by every
//! multi-start MLE attempt.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`AnalysisOptions`] assumes `MLEOptions` was validated by its own
//!   constructor; it adds no cross-field checks.
//! - `confidence_level` is not validated here. The approximate intervals map
//!   any level outside {0.90, 0.95, 0.99} to z = 1.960 and the result echoes
//!   the requested level; only Fisher-matrix bounds require `0 < level < 1`.
use crate::optimization::loglik_optimizer::MLEOptions;

/// Confidence level used when none is specified.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// AnalysisOptions — per-call configuration of [`analyze_data`](crate::weibull::analyze_data).
///
/// Fields
/// ------
/// - `confidence_level`: `f64`
///   Two-sided level for the parameter intervals (e.g. 0.90, 0.95, 0.99).
/// - `mle_opts`: [`MLEOptions`]
///   Simplex tolerances, iteration cap, and initial simplex scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub confidence_level: f64,
    pub mle_opts: MLEOptions,
}

impl AnalysisOptions {
    pub fn new(confidence_level: f64, mle_opts: MLEOptions) -> Self {
        Self { confidence_level, mle_opts }
    }

    /// Default optimizer settings at the given confidence level.
    pub fn with_confidence_level(confidence_level: f64) -> Self {
        Self { confidence_level, mle_opts: MLEOptions::default() }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::with_confidence_level(DEFAULT_CONFIDENCE_LEVEL)
    }
}
