//! Error taxonomy for the binding layer
//!
//! Status and Module never raise. The higher-level file and runner helpers
//! return `Result<_, BindingError>`, and the FFI layer maps each variant onto
//! a Python exception type.

use crate::status::Status;
use thiserror::Error;

/// Errors raised by binding helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The caller used the API incorrectly
    #[error("{0}")]
    Usage(String),

    /// An internal contract was violated
    ///
    /// Raised at the Python boundary when runtime objects break the shape the
    /// bindings rely on, e.g. a `Module` subclass whose `__new__` returns a
    /// foreign object during a copy.
    #[error("{0}")]
    Api(String),

    /// The requested port or feature does not exist yet
    #[error("{0}")]
    FeatureNotAvailable(String),

    /// An engine call reported failure
    #[error("Engine call failed: {0}")]
    Engine(Status),
}

impl BindingError {
    pub fn usage(message: impl Into<String>) -> Self {
        BindingError::Usage(message.into())
    }

    pub fn feature_not_available(message: impl Into<String>) -> Self {
        BindingError::FeatureNotAvailable(message.into())
    }

    /// Status describing this error, for callers that report by value
    pub fn status(&self) -> Status {
        match self {
            BindingError::Engine(status) => status.clone(),
            other => Status::failure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display_includes_message() {
        let err = BindingError::Engine(Status::failure("bad magic number"));
        assert_eq!(err.to_string(), "Engine call failed: failure: bad magic number");
    }

    #[test]
    fn test_status_from_usage_error() {
        let status = BindingError::usage("wrong mode").status();
        assert!(!status.success());
        assert_eq!(status.message(), Some("wrong mode"));
    }
}
