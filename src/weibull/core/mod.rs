//! weibull::core — data containers and closed-form estimators.
//!
//! - [`data`]: validated life data ([`LifeData`], [`Observation`]).
//! - [`units`]: time-unit metadata ([`TimeUnit`]).
//! - [`options`]: per-analysis configuration ([`AnalysisOptions`]).
//! - [`ranks`]: Bernard median ranks and probability-plot coordinates.
//! - [`regression`]: median-rank regression seed for the MLE.
//! - [`reliability`]: R, h, f, F and life metrics of a fitted distribution.
//! - [`goodness`]: probability-plot R².
//! - [`confidence`]: approximate parameter intervals.
//!
//! Everything here is a pure function of its inputs; nothing logs.

pub mod confidence;
pub mod data;
pub mod goodness;
pub mod options;
pub mod ranks;
pub mod regression;
pub mod reliability;
pub mod units;

pub use self::confidence::{ConfidenceIntervals, approximate_intervals, z_value};
pub use self::data::{LifeData, Observation};
pub use self::goodness::r_squared;
pub use self::options::AnalysisOptions;
pub use self::ranks::{ProbabilityPoint, bernard_median_ranks, probability_plot};
pub use self::regression::{RegressionSeed, rank_regression_seed};
pub use self::reliability::{ReliabilityCurves, WeibullDistribution};
pub use self::units::TimeUnit;
