//! Run input (TPR) files
//!
//! A [`TprFile`] only records which file to read. The engine is consulted
//! when the handle is loaded, and the loaded handle is dropped again on
//! `close()`. [`read_tpr`] wraps a file into a [`SimulationInput`] node whose
//! `output()` exposes the parameters port.

use super::FileMode;
use crate::engine::{Engine, SimulationParameters};
use crate::errors::BindingError;
use crate::status::native_to_status;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const NOT_IMPLEMENTED: &str = "property not implemented.";

/// Loaded run input
#[derive(Debug, Clone, PartialEq)]
struct TprHandle {
    params: SimulationParameters,
}

/// Handle to a simulation run input file
#[derive(Debug, Clone, PartialEq)]
pub struct TprFile {
    filename: PathBuf,
    mode: FileMode,
    handle: Option<TprHandle>,
}

impl TprFile {
    /// Associate a handle with `filename`
    ///
    /// # Errors
    ///
    /// - `Usage` if `filename` is empty
    /// - `Usage` if `mode` is anything but `"r"`
    ///
    /// # Example
    /// ```
    /// use gmxpy_core_rs::fileio::TprFile;
    ///
    /// let tpr = TprFile::open("topol.tpr", "r").unwrap();
    /// assert_eq!(tpr.to_string(), "gmx.fileio.TprFile('topol.tpr', 'r')");
    /// assert!(TprFile::open("topol.tpr", "w").is_err());
    /// ```
    pub fn open(filename: impl Into<PathBuf>, mode: &str) -> Result<Self, BindingError> {
        let filename = filename.into();
        if filename.as_os_str().is_empty() {
            return Err(BindingError::usage(
                "TprFile objects must be associated with a file.",
            ));
        }
        let mode = FileMode::require_read(mode, "TPR files only support read-only access.")?;
        Ok(Self {
            filename,
            mode,
            handle: None,
        })
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Read the file through the engine, keeping the handle until `close()`
    pub fn load<E: Engine>(&mut self, engine: &E) -> Result<&SimulationParameters, BindingError> {
        let params = engine.read_run_input(&self.filename).map_err(|native| {
            let status = native_to_status(&native);
            warn!(filename = %self.filename.display(), %status, "failed to read run input");
            BindingError::Engine(status)
        })?;
        debug!(filename = %self.filename.display(), parameters = params.len(), "run input loaded");
        Ok(&self.handle.insert(TprHandle { params }).params)
    }

    /// Parameters of the loaded handle
    pub fn params(&self) -> Option<&SimulationParameters> {
        self.handle.as_ref().map(|h| &h.params)
    }

    pub fn close(&mut self) {
        self.handle = None;
    }
}

impl fmt::Display for TprFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gmx.fileio.TprFile('{}', '{}')",
            self.filename.display(),
            self.mode
        )
    }
}

/// Anything `read_tpr` accepts
#[derive(Debug, Clone)]
pub enum TprSource {
    File(TprFile),
    Path(PathBuf),
}

impl From<TprFile> for TprSource {
    fn from(file: TprFile) -> Self {
        TprSource::File(file)
    }
}

impl From<PathBuf> for TprSource {
    fn from(path: PathBuf) -> Self {
        TprSource::Path(path)
    }
}

impl From<&Path> for TprSource {
    fn from(path: &Path) -> Self {
        TprSource::Path(path.to_path_buf())
    }
}

impl From<&str> for TprSource {
    fn from(path: &str) -> Self {
        TprSource::Path(PathBuf::from(path))
    }
}

impl From<String> for TprSource {
    fn from(path: String) -> Self {
        TprSource::Path(PathBuf::from(path))
    }
}

/// Get a simulation input object from a TPR file or file name
///
/// # Errors
///
/// `Usage` if no usable file name is given.
///
/// # Example
/// ```
/// use gmxpy_core_rs::fileio::read_tpr;
///
/// let input = read_tpr("topol.tpr").unwrap();
/// assert_eq!(input.tprfile().filename().to_str(), Some("topol.tpr"));
/// assert!(read_tpr("").is_err());
/// ```
pub fn read_tpr(source: impl Into<TprSource>) -> Result<SimulationInput, BindingError> {
    let tprfile = match source.into() {
        TprSource::File(file) => file,
        TprSource::Path(path) => TprFile::open(path, "r")
            .map_err(|_| BindingError::usage("TPR object or file name is required."))?,
    };
    Ok(SimulationInput { tprfile })
}

/// Simulation input node backed by a TPR file
#[derive(Debug, Clone)]
pub struct SimulationInput {
    tprfile: TprFile,
}

impl SimulationInput {
    pub fn tprfile(&self) -> &TprFile {
        &self.tprfile
    }

    /// Output ports of the node
    pub fn output(&self) -> NodeOutput<'_> {
        NodeOutput {
            tprfile: &self.tprfile,
        }
    }
}

/// Output ports of a [`SimulationInput`]
///
/// Only `parameters` is available. The other ports exist so callers can
/// discover them, and report `FeatureNotAvailable`.
#[derive(Debug, Clone, Copy)]
pub struct NodeOutput<'a> {
    tprfile: &'a TprFile,
}

impl NodeOutput<'_> {
    /// Simulation parameters, read fresh from the file
    ///
    /// The file is opened for the duration of the read and closed again.
    pub fn parameters<E: Engine>(&self, engine: &E) -> Result<SimulationParameters, BindingError> {
        let mut file = self.tprfile.clone();
        let params = file.load(engine)?.clone();
        file.close();
        Ok(params)
    }

    pub fn structure(&self) -> Result<(), BindingError> {
        Err(BindingError::feature_not_available(NOT_IMPLEMENTED))
    }

    pub fn topology(&self) -> Result<(), BindingError> {
        Err(BindingError::feature_not_available(NOT_IMPLEMENTED))
    }

    pub fn state(&self) -> Result<(), BindingError> {
        Err(BindingError::feature_not_available(NOT_IMPLEMENTED))
    }
}
