//! File I/O - run input and trajectory access
//!
//! High-level handles over engine file formats:
//!
//! - **tpr**: read-only run input files and the simulation input node
//! - **trajectory**: frame-by-frame trajectory reading through a runner
//!
//! Only read access is supported.

pub mod tpr;
pub mod trajectory;

pub use tpr::{read_tpr, NodeOutput, SimulationInput, TprFile, TprSource};
pub use trajectory::{Frames, TrajectoryFile};

use crate::errors::BindingError;
use std::fmt;

/// File access mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Read,
}

impl FileMode {
    /// Parse a mode string; `None` for anything but `"r"`
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "r" => Some(FileMode::Read),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Read => "r",
        }
    }

    pub(crate) fn require_read(mode: &str, message: &str) -> Result<Self, BindingError> {
        Self::parse(mode).ok_or_else(|| BindingError::usage(message))
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
