//! Errors for Weibull life-data analysis (input validation, distribution
//! arguments, and inference failures).
//!
//! This module defines the analysis error type, [`WeibullError`], used across
//! the Rust core and the optional Python bindings. It implements
//! `Display`/`Error` and, with `python-bindings`, converts to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Observed times must be **strictly positive and finite**.
//! - Failure of every multi-start MLE attempt is **not** an error: the
//!   analysis reports the rank-regression seed and flags it on the result.
//! - Optimizer/backend errors are wrapped in [`WeibullError::Optimizer`]; they
//!   only surface from the Fisher-matrix inference path.
use crate::optimization::errors::OptError;

/// Minimum number of observations accepted by an analysis.
pub const MIN_OBSERVATIONS: usize = 3;

pub type AnalysisResult<T> = Result<T, WeibullError>;

/// Coarse classification of [`WeibullError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fewer than [`MIN_OBSERVATIONS`] observations were supplied.
    InsufficientData,
    /// An argument was outside its domain.
    InvalidArgument,
    /// Observed-information inference could not be completed.
    Inference,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeibullError {
    // ---- Input/data validation ----
    InsufficientData { found: usize, required: usize },

    NonFiniteTime { index: usize, value: f64 },

    NonPositiveTime { index: usize, value: f64 },

    CensorLengthMismatch { times: usize, flags: usize },

    // ---- Distribution arguments ----
    InvalidTime { value: f64 },

    InvalidShape { value: f64 },

    InvalidScale { value: f64 },

    InvalidFraction { value: f64, reason: &'static str },

    InvalidGrid { t_max: f64, points: usize, reason: &'static str },

    // ---- Inference ----
    InvalidConfidenceLevel { value: f64 },

    Optimizer(OptError),
}

impl WeibullError {
    /// Classify the error as insufficient data, invalid argument, or inference failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeibullError::InsufficientData { .. } => ErrorKind::InsufficientData,
            WeibullError::Optimizer(_) => ErrorKind::Inference,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl std::error::Error for WeibullError {}

impl std::fmt::Display for WeibullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            WeibullError::InsufficientData { found, required } => {
                write!(f, "At least {required} observations are required; got {found}.")
            }
            WeibullError::NonFiniteTime { index, value } => {
                write!(f, "Time at index {index} is non-finite: {value}")
            }
            WeibullError::NonPositiveTime { index, value } => {
                write!(f, "Time at index {index} is non-positive: {value}")
            }
            WeibullError::CensorLengthMismatch { times, flags } => {
                write!(f, "Censoring flags must match times in length: {times} times, {flags} flags")
            }
            // ---- Distribution arguments ----
            WeibullError::InvalidTime { value } => {
                write!(f, "Time must be finite and >= 0; got: {value}")
            }
            WeibullError::InvalidShape { value } => {
                write!(f, "Weibull shape (beta) must be finite and > 0; got: {value}")
            }
            WeibullError::InvalidScale { value } => {
                write!(f, "Weibull scale (eta) must be finite and > 0; got: {value}")
            }
            WeibullError::InvalidFraction { value, reason } => {
                write!(f, "Fraction must lie strictly between 0 and 1; got: {value}. {reason}")
            }
            WeibullError::InvalidGrid { t_max, points, reason } => {
                write!(f, "Invalid curve grid (t_max = {t_max}, points = {points}): {reason}")
            }
            // ---- Inference ----
            WeibullError::InvalidConfidenceLevel { value } => {
                write!(f, "Confidence level must lie strictly between 0 and 1; got: {value}")
            }
            WeibullError::Optimizer(err) => {
                write!(f, "Optimizer error: {err}")
            }
        }
    }
}

impl From<OptError> for WeibullError {
    fn from(err: OptError) -> Self {
        WeibullError::Optimizer(err)
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<WeibullError> for pyo3::PyErr {
    fn from(err: WeibullError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
