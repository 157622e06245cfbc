//! Type conversion utilities for FFI boundary
//!
//! Converts Python keyword arguments and dicts into Rust configuration types.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::path::PathBuf;

use crate::runner::Options;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
///
/// # Errors
/// Returns PyValueError if the field is missing, or the conversion error if
/// the value has the wrong type.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!("Missing required field '{}'", key))
        })?
        .extract()
}

/// Extract an optional field; `None` when missing or explicitly `None`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a Python dict to runner Options
///
/// # Errors
///
/// - PyValueError if `filename` is missing
/// - UsageError if `filename` is empty
/// - TypeError if a value has the wrong type
pub fn parse_options(py_options: &Bound<'_, PyDict>) -> PyResult<Options> {
    let filename: PathBuf = extract_required(py_options, "filename")?;
    let first_frame: usize = extract_with_default(py_options, "first_frame", 0)?;
    let max_frames: Option<usize> = extract_optional(py_options, "max_frames")?;

    let options = Options {
        filename,
        first_frame,
        max_frames,
    };
    options.validate()?;
    Ok(options)
}

/// Runner options
///
/// # Example (from Python)
///
/// ```python
/// from gmxpy_core_rs import Options
///
/// options = Options(filename="traj.trr", max_frames=100)
/// print(options.to_json())
/// ```
#[pyclass(name = "Options", frozen)]
#[derive(Debug, Clone)]
pub struct PyOptions {
    inner: Options,
}

#[pymethods]
impl PyOptions {
    #[new]
    #[pyo3(signature = (**kwargs))]
    fn new(py: Python<'_>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let empty = PyDict::new_bound(py);
        let inner = parse_options(kwargs.unwrap_or(&empty))?;
        Ok(PyOptions { inner })
    }

    /// Parse options from a JSON object string
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Ok(PyOptions {
            inner: Options::from_json(json)?,
        })
    }

    #[getter]
    fn filename(&self) -> PathBuf {
        self.inner.filename.clone()
    }

    #[getter]
    fn first_frame(&self) -> usize {
        self.inner.first_frame
    }

    #[getter]
    fn max_frames(&self) -> Option<usize> {
        self.inner.max_frames
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Options(filename={:?}, first_frame={}, max_frames={})",
            self.inner.filename.display().to_string(),
            self.inner.first_frame,
            self.inner
                .max_frames
                .map(|n| n.to_string())
                .unwrap_or_else(|| "None".to_string())
        )
    }
}

impl PyOptions {
    pub fn options(&self) -> &Options {
        &self.inner
    }
}
