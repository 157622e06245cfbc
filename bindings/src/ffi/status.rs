//! PyO3 wrapper for Status

use pyo3::prelude::*;

use crate::status::Status;

/// Python view of a boundary [`Status`]
///
/// # Example (from Python)
///
/// ```python
/// from gmxpy_core_rs import Status
///
/// assert not Status().success()
/// assert Status(True).success()
///
/// status = Status(False, "could not open topol.tpr")
/// if not status:
///     print(status.message)
/// ```
#[pyclass(name = "Status", frozen)]
#[derive(Debug, Clone, Default)]
pub struct PyStatus {
    inner: Status,
}

#[pymethods]
impl PyStatus {
    #[new]
    #[pyo3(signature = (success = false, message = None))]
    fn new(success: bool, message: Option<String>) -> Self {
        let inner = match message {
            Some(message) if !success => Status::failure(message),
            _ => Status::new(success),
        };
        PyStatus { inner }
    }

    /// True if the operation succeeded
    fn success(&self) -> bool {
        self.inner.success()
    }

    /// Diagnostic message of a failed operation, or None
    #[getter]
    fn message(&self) -> Option<String> {
        self.inner.message().map(str::to_string)
    }

    /// JSON form: `{"success": bool, "message": str}`
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __bool__(&self) -> bool {
        self.inner.success()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        match self.inner.message() {
            Some(message) => format!("Status({}, {:?})", py_bool(self.inner.success()), message),
            None => format!("Status({})", py_bool(self.inner.success())),
        }
    }

    fn __copy__(&self) -> Self {
        self.clone()
    }

    fn __deepcopy__(&self, _memo: &Bound<'_, PyAny>) -> Self {
        self.clone()
    }
}

impl PyStatus {
    pub fn status(&self) -> &Status {
        &self.inner
    }
}

impl From<Status> for PyStatus {
    fn from(inner: Status) -> Self {
        PyStatus { inner }
    }
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Parse a Status from its JSON form
#[pyfunction]
#[pyo3(name = "status_from_json")]
pub fn py_status_from_json(json: &str) -> PyResult<PyStatus> {
    let status: Status = serde_json::from_str(json).map_err(|e| {
        pyo3::exceptions::PyValueError::new_err(format!("Invalid status JSON: {}", e))
    })?;
    Ok(status.into())
}
