//! weibull — censored two-parameter Weibull life-data analysis.
//!
//! Purpose
//! -------
//! Fit `(β, η)` to failure and right-censored (suspension) times and report
//! the life metrics a reliability engineer reads off a Weibull plot.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds validated input ([`LifeData`]), the closed-form
//!   estimators (median-rank regression, probability-plot R², approximate
//!   intervals) and the fitted distribution's functions.
//! - [`models`] holds the censored likelihood and the multi-start
//!   Nelder–Mead refinement built on
//!   [`optimization::loglik_optimizer`](crate::optimization::loglik_optimizer).
//! - [`analysis`] sequences both into one immutable [`WeibullResult`].
//!
//! Conventions
//! -----------
//! - `β` is the shape, `η` the scale (characteristic life), and the location
//!   `γ` is fixed at 0.
//! - Times are positive, in the caller's [`TimeUnit`]; no rescaling happens.
//! - `censored[i] == true` means unit `i` was still running at `times[i]`.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use weibull_reliability::weibull::prelude::*;
//!
//! let res = analyze(
//!     &[120.0, 340.0, 95.0, 410.0, 410.0],
//!     Some(&[false, false, false, true, true]),
//!     0.95,
//! )
//! .unwrap();
//! let r = res.distribution().reliability(100.0).unwrap();
//! assert!(r > 0.0 && r < 1.0);
//! ```

pub mod analysis;
pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::analysis::{WeibullResult, analyze, analyze_data};
pub use self::core::{
    AnalysisOptions, LifeData, Observation, ProbabilityPoint, ReliabilityCurves, TimeUnit,
    WeibullDistribution, probability_plot,
};
pub use self::errors::{AnalysisResult, ErrorKind, WeibullError};

pub mod prelude {
    pub use super::analysis::{WeibullResult, analyze, analyze_data};
    pub use super::core::{AnalysisOptions, LifeData, TimeUnit, WeibullDistribution};
    pub use super::errors::{AnalysisResult, WeibullError};
}
