//! Python input conversion helpers for the PyO3 bindings.
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Borrow a contiguous `float64` view of `raw_data`, copying only when the
/// input is not already a contiguous NumPy array or pandas Series.
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Censoring flags from any sequence of Python booleans.
pub fn extract_censor_flags(raw_flags: &Bound<'_, PyAny>) -> PyResult<Vec<bool>> {
    raw_flags
        .extract::<Vec<bool>>()
        .map_err(|_| PyTypeError::new_err("censored must be a sequence of bool"))
}
