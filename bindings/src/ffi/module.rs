//! PyO3 wrapper for modules
//!
//! `Module` is the Python-facing base class. It can wrap a copyable Rust
//! module, and Python code may subclass it and override `info()`.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};
use tracing::warn;

use crate::errors::BindingError;
use crate::module::{CopyableModule, GmxModule};

/// Base class for engine modules exposed to Python
///
/// Provides enough interface to bind with runners. Subclasses may add more.
///
/// # Example (from Python)
///
/// ```python
/// from gmxpy_core_rs import Module
///
/// class Restraint(Module):
///     def __init__(self, k):
///         super().__init__()
///         self.k = k
///
///     def info(self):
///         return f"Restraint(k={self.k})"
///
/// assert Module().info() == ""
/// assert str(Restraint(500.0)) == "Restraint(k=500.0)"
/// ```
#[pyclass(name = "Module", subclass)]
#[derive(Debug, Clone, Default)]
pub struct PyGmxModule {
    inner: Option<Box<dyn CopyableModule>>,
}

#[pymethods]
impl PyGmxModule {
    /// Arguments belong to subclass `__init__` methods and are ignored here
    #[new]
    #[pyo3(signature = (*_args, **_kwargs))]
    fn new(_args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>) -> Self {
        PyGmxModule::default()
    }

    /// Some useful information on the type or state of the module
    fn info(&self) -> String {
        self.inner
            .as_ref()
            .map(|module| module.info())
            .unwrap_or_default()
    }

    fn __str__(slf: &Bound<'_, Self>) -> String {
        dispatch_info(slf)
    }

    fn __repr__(slf: &Bound<'_, Self>) -> String {
        let type_name = slf
            .get_type()
            .getattr("__name__")
            .and_then(|name| name.extract::<String>())
            .unwrap_or_else(|_| "Module".to_string());
        format!("<{} info={:?}>", type_name, dispatch_info(slf))
    }

    fn __copy__(slf: &Bound<'_, Self>) -> PyResult<PyObject> {
        copy_module(slf, None)
    }

    fn __deepcopy__(slf: &Bound<'_, Self>, memo: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        copy_module(slf, Some(memo))
    }
}

impl PyGmxModule {
    /// Expose a Rust module to Python
    pub fn wrap<M>(module: M) -> Self
    where
        M: GmxModule + Clone + 'static,
    {
        PyGmxModule {
            inner: Some(Box::new(module)),
        }
    }

    pub fn from_boxed(module: Box<dyn CopyableModule>) -> Self {
        PyGmxModule {
            inner: Some(module),
        }
    }
}

/// Call `info()` through Python so subclass overrides are honored
///
/// A raising or non-string override yields an empty string.
fn dispatch_info(slf: &Bound<'_, PyGmxModule>) -> String {
    match slf
        .call_method0("info")
        .and_then(|value| value.extract::<String>())
    {
        Ok(info) => info,
        Err(err) => {
            warn!(error = %err, "Module.info() failed; reporting empty string");
            String::new()
        }
    }
}

/// Copy a module without slicing Python subclasses
///
/// The copy is created through the instance's own type, gets a clone of the
/// wrapped Rust module, and receives the instance `__dict__` (deep-copied
/// when a memo is given).
fn copy_module(
    slf: &Bound<'_, PyGmxModule>,
    memo: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyObject> {
    let py = slf.py();
    let cls = slf.get_type();
    let copy = cls.call_method1("__new__", (&cls,))?;

    let inner = slf.borrow().inner.clone();
    let target = copy.downcast::<PyGmxModule>().map_err(|_| {
        BindingError::Api(format!(
            "{}.__new__ did not return a Module instance",
            cls.getattr("__name__")
                .and_then(|name| name.extract::<String>())
                .unwrap_or_else(|_| "Module".to_string())
        ))
    })?;
    target.borrow_mut().inner = inner;

    if let Ok(state) = slf.getattr("__dict__") {
        let state = match memo {
            Some(memo) => py
                .import_bound("copy")?
                .call_method1("deepcopy", (state, memo))?,
            None => state,
        };
        copy.getattr("__dict__")?
            .call_method1("update", (state,))?;
    }

    Ok(copy.unbind())
}
