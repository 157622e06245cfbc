//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the boundary contract to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Status, Module, Options, and the exception types
//! 2. **Values, not references**: Python receives copies of Rust state
//! 3. **No surprise exceptions**: `Status` and `Module.info()` never raise
//! 4. **Typed errors**: every `BindingError` maps onto a Python exception

pub mod errors;
pub mod module;
pub mod status;
pub mod types;

use pyo3::prelude::*;

/// Add every class, function, and exception to the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<status::PyStatus>()?;
    m.add_class::<module::PyGmxModule>()?;
    m.add_class::<types::PyOptions>()?;
    m.add_function(wrap_pyfunction!(status::py_status_from_json, m)?)?;
    errors::register(m)?;
    Ok(())
}
