//! Status - Generic return value for boundary operations
//!
//! Every call that crosses from the engine into the scripting runtime (or back)
//! reports its outcome as a [`Status`]. Callers only need the success bit to
//! decide how to continue; the optional message is carried along for logs and
//! error reports.
//!
//! # Critical Invariants
//!
//! - **Fail-safe default**: `Status::default().success() == false`
//! - **Immutability**: a Status never changes after construction
//! - **Adapter fidelity**: `native_to_status(&s).success() == s.success()`

use crate::errors::BindingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-native result type.
///
/// Anything the engine hands back that can answer "did it work?" qualifies.
/// Engines with richer diagnostics may also report a message.
pub trait NativeStatus {
    /// Success predicate of the native value
    fn success(&self) -> bool;

    /// Diagnostic text, if the engine provides one
    fn message(&self) -> Option<String> {
        None
    }
}

impl NativeStatus for bool {
    fn success(&self) -> bool {
        *self
    }
}

impl<T, E: fmt::Display> NativeStatus for Result<T, E> {
    fn success(&self) -> bool {
        self.is_ok()
    }

    fn message(&self) -> Option<String> {
        self.as_ref().err().map(|e| e.to_string())
    }
}

/// Outcome of a boundary operation
///
/// # Example
/// ```
/// use gmxpy_core_rs::Status;
///
/// assert!(!Status::default().success());
/// assert!(Status::new(true).success());
///
/// let failed = Status::failure("could not open file");
/// assert_eq!(failed.message(), Some("could not open file"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Status {
    /// Create a status from a raw success flag
    pub fn new(success: bool) -> Self {
        Self {
            success,
            message: None,
        }
    }

    /// Successful status
    pub fn ok() -> Self {
        Self::new(true)
    }

    /// Failed status with a diagnostic message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Adapt an engine-native status value
    ///
    /// Keeps the success bit and whatever message the engine offers.
    pub fn from_native<S: NativeStatus + ?Sized>(native: &S) -> Self {
        Self {
            success: native.success(),
            message: native.message(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Convert into a `Result` for callers that propagate errors with `?`
    ///
    /// # Example
    /// ```
    /// use gmxpy_core_rs::{BindingError, Status};
    ///
    /// assert!(Status::ok().into_result().is_ok());
    /// assert!(matches!(
    ///     Status::failure("nope").into_result(),
    ///     Err(BindingError::Engine(_))
    /// ));
    /// ```
    pub fn into_result(self) -> Result<(), BindingError> {
        if self.success {
            Ok(())
        } else {
            Err(BindingError::Engine(self))
        }
    }
}

impl NativeStatus for Status {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

impl From<bool> for Status {
    fn from(success: bool) -> Self {
        Self::new(success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.success, &self.message) {
            (true, _) => write!(f, "success"),
            (false, Some(message)) => write!(f, "failure: {}", message),
            (false, None) => write!(f, "failure"),
        }
    }
}

/// Map an engine-native status onto the boundary [`Status`]
///
/// This is the single narrowing point between engine results and the
/// orchestrator. Anything beyond the success bit and message is dropped here.
pub fn native_to_status<S: NativeStatus + ?Sized>(native: &S) -> Status {
    Status::from_native(native)
}
