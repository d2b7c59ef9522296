//! weibull_reliability — censored Weibull life-data analysis with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the analysis to Python via the `_weibull_reliability` extension module when
//! the `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`weibull`] (data, estimators, and the
//!   analysis orchestrator), [`optimization`] (the derivative-free likelihood
//!   maximizer), and [`inference`] (observed-information covariance and
//!   Fisher-matrix bounds).
//! - Define the `WeibullAnalysis` `#[pyclass]` and the `#[pymodule]`
//!   initializer for the Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; the Python
//!   glue performs only input conversion and error mapping.
//! - Errors from core Rust code are rich error types internally and become
//!   `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use weibull_reliability::weibull::analyze;
//!
//! let res = analyze(&[105.0, 230.0, 310.0, 450.0, 600.0], None, 0.95).unwrap();
//! println!("beta={:.3} eta={:.1} B10={:.1}", res.beta(), res.eta(), res.b10_life());
//! ```
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_weibull_pipeline.rs`.

pub mod inference;
pub mod optimization;
pub mod weibull;

#[cfg(feature = "python-bindings")]
mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    inference::fisher::fisher_bounds,
    utils::{extract_censor_flags, extract_f64_array},
    weibull::{
        analysis::{WeibullResult, analyze_data},
        core::{data::LifeData, options::AnalysisOptions, units::TimeUnit},
    },
};

/// WeibullAnalysis — Python-facing wrapper for one life-data analysis.
///
/// Purpose
/// -------
/// Run [`analyze_data`] on Python inputs and expose the resulting
/// [`WeibullResult`] as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `WeibullAnalysis(times, censored=None, confidence_level=0.95)`:
/// - `times`: one-dimensional array-like of positive, finite `float64`.
/// - `censored`: optional sequence of `bool`, one per time.
/// - `confidence_level`: level for the approximate intervals.
///
/// Notes
/// -----
/// - The validated input is kept so `fisher_bounds` and `probability_plot`
///   can be evaluated after construction.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "weibull_reliability.analysis")]
pub struct WeibullAnalysis {
    data: LifeData,
    inner: WeibullResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl WeibullAnalysis {
    #[new]
    #[pyo3(
        text_signature = "(times, /, censored=None, confidence_level=0.95)",
        signature = (times, censored = None, confidence_level = 0.95)
    )]
    pub fn new<'py>(
        py: Python<'py>, times: &Bound<'py, PyAny>, censored: Option<&Bound<'py, PyAny>>,
        confidence_level: f64,
    ) -> PyResult<Self> {
        let arr = extract_f64_array(py, times)?;
        let times = arr.as_slice().map_err(|_| {
            PyValueError::new_err("times must be a 1-D contiguous float64 array or sequence")
        })?;
        let flags = censored.map(extract_censor_flags).transpose()?;

        let data = LifeData::new(times, flags.as_deref(), TimeUnit::default())?;
        let inner = analyze_data(&data, &AnalysisOptions::with_confidence_level(confidence_level))?;
        Ok(WeibullAnalysis { data, inner })
    }

    #[getter]
    pub fn beta(&self) -> f64 {
        self.inner.beta()
    }

    #[getter]
    pub fn eta(&self) -> f64 {
        self.inner.eta()
    }

    #[getter]
    pub fn gamma(&self) -> f64 {
        self.inner.gamma()
    }

    #[getter]
    pub fn mttf(&self) -> f64 {
        self.inner.mttf()
    }

    #[getter]
    pub fn median_life(&self) -> f64 {
        self.inner.median_life()
    }

    #[getter]
    pub fn b10_life(&self) -> f64 {
        self.inner.b10_life()
    }

    #[getter]
    pub fn b50_life(&self) -> f64 {
        self.inner.b50_life()
    }

    #[getter]
    pub fn b90_life(&self) -> f64 {
        self.inner.b90_life()
    }

    #[getter]
    pub fn r_squared(&self) -> f64 {
        self.inner.r_squared()
    }

    #[getter]
    pub fn confidence_level(&self) -> f64 {
        self.inner.confidence_level()
    }

    #[getter]
    pub fn beta_bounds(&self) -> (f64, f64) {
        (self.inner.beta_lower(), self.inner.beta_upper())
    }

    #[getter]
    pub fn eta_bounds(&self) -> (f64, f64) {
        (self.inner.eta_lower(), self.inner.eta_upper())
    }

    #[getter]
    pub fn sample_size(&self) -> usize {
        self.inner.sample_size()
    }

    #[getter]
    pub fn failure_count(&self) -> usize {
        self.inner.failure_count()
    }

    #[getter]
    pub fn log_likelihood(&self) -> f64 {
        self.inner.log_likelihood()
    }

    #[getter]
    pub fn mle_converged(&self) -> bool {
        self.inner.mle_converged()
    }

    /// R(t) of the fitted distribution.
    pub fn reliability(&self, t: f64) -> PyResult<f64> {
        Ok(self.inner.distribution().reliability(t)?)
    }

    /// `(time, median_rank, x, y)` rows of the probability plot.
    pub fn probability_plot(&self) -> Vec<(f64, f64, f64, f64)> {
        crate::weibull::core::ranks::probability_plot(&self.data)
            .into_iter()
            .map(|p| (p.time, p.median_rank, p.x, p.y))
            .collect()
    }

    /// Fisher-matrix `((β_lo, β_hi), (η_lo, η_hi))` at `confidence_level`.
    #[pyo3(signature = (confidence_level = 0.95))]
    pub fn fisher_bounds(&self, confidence_level: f64) -> PyResult<((f64, f64), (f64, f64))> {
        let fb = fisher_bounds(&self.data, self.inner.beta(), self.inner.eta(), confidence_level)?;
        Ok(((fb.beta_lower, fb.beta_upper), (fb.eta_lower, fb.eta_upper)))
    }
}

/// _weibull_reliability — PyO3 module initializer for the Python extension.
///
/// Registers the `analysis` submodule under the parent module and in
/// `sys.modules` so dotted imports work from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _weibull_reliability<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let analysis_mod = PyModule::new(py, "analysis")?;
    analysis_mod.add_class::<WeibullAnalysis>()?;
    m.add_submodule(&analysis_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?
        .getattr("modules")?
        .set_item("weibull_reliability.analysis", analysis_mod)?;
    Ok(())
}
