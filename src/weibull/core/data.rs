//! Life-data containers for Weibull analysis.
//!
//! Purpose
//! -------
//! Provide a small, validated container for observed lifetimes and their
//! censoring status. This module centralizes input validation so the
//! estimators downstream can assume clean, strictly positive data.
//!
//! Key behaviors
//! -------------
//! - [`LifeData`] enforces the analysis invariants (at least
//!   [`MIN_OBSERVATIONS`] observations, finite and strictly positive times,
//!   censor flags aligned with times).
//! - [`Observation`] is the per-unit view `(time, censored)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `censored = true` means the unit survived past `time` (right-censored);
//!   `false` means it failed at `time`.
//! - Missing censor flags mean every unit failed.
//! - Validation stops at the first offending element and reports its index.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and follows the caller's input order; only
//!   [`LifeData::failure_times`] is sorted.
//! - Units are described via [`TimeUnit`] and never rescale values.
use crate::weibull::{
    core::units::TimeUnit,
    errors::{AnalysisResult, MIN_OBSERVATIONS, WeibullError},
};
use ndarray::Array1;

/// Multiplier on the largest observed time used as the default curve horizon.
pub const CURVE_HORIZON_FACTOR: f64 = 1.5;

/// A single tested unit: its observed time and whether it was censored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub time: f64,
    pub censored: bool,
}

impl Observation {
    pub fn failure(time: f64) -> Self {
        Self { time, censored: false }
    }

    pub fn suspension(time: f64) -> Self {
        Self { time, censored: true }
    }
}

/// `LifeData` — validated lifetimes with censoring flags and unit metadata.
///
/// Fields
/// ------
/// - `times`: `Array1<f64>`
///   Observed times in input order; finite and strictly positive.
/// - `censored`: `Vec<bool>`
///   Right-censoring flags, parallel to `times`.
/// - `unit`: [`TimeUnit`]
///   Interpretation of the time axis.
///
/// Invariants
/// ----------
/// - `times.len() >= MIN_OBSERVATIONS` and `times.len() == censored.len()`.
/// - All times are finite and `> 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeData {
    times: Array1<f64>,
    censored: Vec<bool>,
    unit: TimeUnit,
}

impl LifeData {
    /// Construct validated life data from raw times and optional censor flags.
    ///
    /// Parameters
    /// ----------
    /// - `times`: `&[f64]`
    ///   Observed times, one per unit.
    /// - `censored`: `Option<&[bool]>`
    ///   Right-censoring flags; `None` treats every unit as a failure.
    /// - `unit`: [`TimeUnit`]
    ///
    /// Errors
    /// ------
    /// - `WeibullError::InsufficientData`
    ///   Fewer than [`MIN_OBSERVATIONS`] times.
    /// - `WeibullError::CensorLengthMismatch`
    ///   Flags supplied with a different length than `times`.
    /// - `WeibullError::NonFiniteTime` / `WeibullError::NonPositiveTime`
    ///   First time that is NaN/±∞ or ≤ 0, with its index.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use weibull_reliability::weibull::core::data::LifeData;
    /// # use weibull_reliability::weibull::core::units::TimeUnit;
    /// let data = LifeData::new(&[120.0, 340.0, 95.0], Some(&[false, true, false]), TimeUnit::Hours)
    ///     .unwrap();
    /// assert_eq!(data.failure_count(), 2);
    /// assert_eq!(data.failure_times(), vec![95.0, 120.0]);
    /// ```
    pub fn new(times: &[f64], censored: Option<&[bool]>, unit: TimeUnit) -> AnalysisResult<Self> {
        if times.len() < MIN_OBSERVATIONS {
            return Err(WeibullError::InsufficientData {
                found: times.len(),
                required: MIN_OBSERVATIONS,
            });
        }

        let censored = match censored {
            Some(flags) if flags.len() != times.len() => {
                return Err(WeibullError::CensorLengthMismatch {
                    times: times.len(),
                    flags: flags.len(),
                });
            }
            Some(flags) => flags.to_vec(),
            None => vec![false; times.len()],
        };

        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(WeibullError::NonFiniteTime { index, value });
            }
            if value <= 0.0 {
                return Err(WeibullError::NonPositiveTime { index, value });
            }
        }

        Ok(LifeData { times: Array1::from(times.to_vec()), censored, unit })
    }

    /// Construct validated life data from per-unit observations.
    ///
    /// # Errors
    /// Same as [`LifeData::new`].
    pub fn from_observations(observations: &[Observation], unit: TimeUnit) -> AnalysisResult<Self> {
        let times: Vec<f64> = observations.iter().map(|o| o.time).collect();
        let flags: Vec<bool> = observations.iter().map(|o| o.censored).collect();
        Self::new(&times, Some(&flags), unit)
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn censored(&self) -> &[bool] {
        &self.censored
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false` for validated data; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Observations in input order.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.times
            .iter()
            .zip(self.censored.iter())
            .map(|(&time, &censored)| Observation { time, censored })
    }

    /// Times of non-censored units, sorted ascending.
    pub fn failure_times(&self) -> Vec<f64> {
        let mut failures: Vec<f64> =
            self.observations().filter(|o| !o.censored).map(|o| o.time).collect();
        failures.sort_by(f64::total_cmp);
        failures
    }

    pub fn failure_count(&self) -> usize {
        self.censored.iter().filter(|&&c| !c).count()
    }

    pub fn censored_count(&self) -> usize {
        self.len() - self.failure_count()
    }

    /// Smallest observed time, censored units included.
    pub fn min_time(&self) -> f64 {
        self.times.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest observed time, censored units included.
    pub fn max_time(&self) -> f64 {
        self.times.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean of all observed times, censored units included.
    pub fn mean_time(&self) -> f64 {
        self.times.sum() / self.len() as f64
    }

    /// Default upper limit for reliability/hazard curves.
    pub fn curve_horizon(&self) -> f64 {
        CURVE_HORIZON_FACTOR * self.max_time()
    }
}
