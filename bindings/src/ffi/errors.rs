//! Python exception types
//!
//! ```text
//! Exception
//! └── GmxError
//!     ├── UsageError
//!     ├── ApiError
//!     ├── FeatureNotAvailableError
//!     └── EngineError
//! ```

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;

use crate::errors::BindingError;

create_exception!(gmxpy_core_rs, GmxError, PyException, "Base class for binding errors.");
create_exception!(gmxpy_core_rs, UsageError, GmxError, "The API was used incorrectly.");
create_exception!(gmxpy_core_rs, ApiError, GmxError, "An internal API contract was violated.");
create_exception!(
    gmxpy_core_rs,
    FeatureNotAvailableError,
    GmxError,
    "The requested feature is not available."
);
create_exception!(gmxpy_core_rs, EngineError, GmxError, "An engine call reported failure.");

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> Self {
        let message = err.to_string();
        match err {
            BindingError::Usage(_) => UsageError::new_err(message),
            BindingError::Api(_) => ApiError::new_err(message),
            BindingError::FeatureNotAvailable(_) => FeatureNotAvailableError::new_err(message),
            BindingError::Engine(_) => EngineError::new_err(message),
        }
    }
}

/// Register the exception hierarchy on the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("GmxError", py.get_type_bound::<GmxError>())?;
    m.add("UsageError", py.get_type_bound::<UsageError>())?;
    m.add("ApiError", py.get_type_bound::<ApiError>())?;
    m.add(
        "FeatureNotAvailableError",
        py.get_type_bound::<FeatureNotAvailableError>(),
    )?;
    m.add("EngineError", py.get_type_bound::<EngineError>())?;
    Ok(())
}
