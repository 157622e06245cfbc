//! gmxpy Core - Rust boundary layer
//!
//! Contract objects that let a scripting runtime drive and introspect
//! components of a native molecular simulation engine.
//!
//! # Architecture
//!
//! - **status**: Uniform success/failure value for boundary operations
//! - **module**: Polymorphic module trait with an explicit copy policy
//! - **errors**: Error taxonomy for the higher-level helpers
//! - **engine**: Engine collaborator traits (passed explicitly, never global)
//! - **runner**: Frame-stepping runner and its caching module
//! - **fileio**: Run input and trajectory file handles
//!
//! # Critical Invariants
//!
//! 1. A default Status is a failure
//! 2. Status and `info()` never raise; failures travel by value
//! 3. Copyable modules never slice: boxed copies keep their concrete type

// Module declarations
pub mod engine;
pub mod errors;
pub mod fileio;
pub mod module;
pub mod runner;
pub mod status;

// Re-exports for convenience
pub use engine::{Engine, Frame, FrameReader, SimulationParameters};
pub use errors::BindingError;
pub use module::{BaseModule, CopyableModule, GmxModule, ModuleSet};
pub use runner::{CachingFrameModule, Options, TrajectoryRunner};
pub use status::{native_to_status, NativeStatus, Status};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn gmxpy_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
