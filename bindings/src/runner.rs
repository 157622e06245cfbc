//! Trajectory runner
//!
//! A runner binds one module, is initialized with [`Options`], and then steps
//! through the input one frame at a time:
//!
//! 1. `initialize()` opens the trajectory through the engine
//! 2. `next()` finishes the current frame and analyzes the next one
//! 3. When input runs out, `next()` returns false and the reader is released
//!
//! The module outlives the runner and keeps its cache, so it can be handed to
//! a new runner later.

use crate::engine::{Engine, Frame, FrameReader};
use crate::errors::BindingError;
use crate::module::GmxModule;
use crate::status::{native_to_status, Status};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};
use uuid::Uuid;

// ============================================================================
// Options
// ============================================================================

/// Runner configuration
///
/// # Example
/// ```
/// use gmxpy_core_rs::Options;
///
/// let options = Options::from_json(r#"{"filename": "traj.trr", "max_frames": 10}"#).unwrap();
/// assert_eq!(options.first_frame, 0);
/// assert_eq!(options.max_frames, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Trajectory file to read
    pub filename: PathBuf,

    /// Number of leading frames to skip
    #[serde(default)]
    pub first_frame: usize,

    /// Stop after this many frames (all frames if unset)
    #[serde(default)]
    pub max_frames: Option<usize>,
}

impl Options {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            first_frame: 0,
            max_frames: None,
        }
    }

    /// Parse and validate options from a JSON object
    pub fn from_json(json: &str) -> Result<Self, BindingError> {
        let options: Options = serde_json::from_str(json)
            .map_err(|e| BindingError::usage(format!("Invalid runner options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), BindingError> {
        if self.filename.as_os_str().is_empty() {
            return Err(BindingError::usage("Runner options require a filename."));
        }
        Ok(())
    }
}

// ============================================================================
// Caching module
// ============================================================================

/// Module that keeps the most recently analyzed frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CachingFrameModule {
    frame: Option<Frame>,
    frames_analyzed: usize,
}

impl CachingFrameModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest frame, if any has been analyzed
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn frames_analyzed(&self) -> usize {
        self.frames_analyzed
    }

    fn analyze_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
        self.frames_analyzed += 1;
    }
}

impl GmxModule for CachingFrameModule {
    fn info(&self) -> String {
        match &self.frame {
            Some(frame) => format!(
                "CachingFrameModule(frames={}, step={}, time={}, atoms={})",
                self.frames_analyzed,
                frame.step,
                frame.time,
                frame.num_atoms()
            ),
            None => format!("CachingFrameModule(frames={})", self.frames_analyzed),
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Steps a [`CachingFrameModule`] through a trajectory
pub struct TrajectoryRunner<'a, E: Engine> {
    engine: &'a E,
    module: &'a mut CachingFrameModule,
    reader: Option<Box<dyn FrameReader>>,
    session: Option<Uuid>,
    remaining: Option<usize>,
}

impl<'a, E: Engine> TrajectoryRunner<'a, E> {
    pub fn new(engine: &'a E, module: &'a mut CachingFrameModule) -> Self {
        Self {
            engine,
            module,
            reader: None,
            session: None,
            remaining: None,
        }
    }

    /// Open the input described by `options`
    ///
    /// Returns a failed status (never panics) if the options are invalid or
    /// the engine cannot open the file. Re-initializing discards any reader
    /// from a previous session.
    pub fn initialize(&mut self, options: &Options) -> Status {
        self.release();
        self.session = None;

        if let Err(e) = options.validate() {
            return e.status();
        }

        let session = Uuid::new_v4();
        let mut reader = match self.engine.open_trajectory(&options.filename) {
            Ok(reader) => reader,
            Err(native) => {
                let status = native_to_status(&native);
                warn!(
                    %session,
                    filename = %options.filename.display(),
                    %status,
                    "failed to open trajectory"
                );
                return status;
            }
        };

        for skipped in 0..options.first_frame {
            if reader.read_frame().is_none() {
                debug!(%session, skipped, "trajectory ended while skipping leading frames");
                break;
            }
        }

        debug!(
            %session,
            filename = %options.filename.display(),
            first_frame = options.first_frame,
            max_frames = ?options.max_frames,
            "runner initialized"
        );

        self.reader = Some(reader);
        self.session = Some(session);
        self.remaining = options.max_frames;
        Status::ok()
    }

    /// Advance to the next frame
    ///
    /// Returns true if a new frame was analyzed into the module.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.remaining == Some(0) {
            self.release();
            return false;
        }

        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        match reader.read_frame() {
            Some(frame) => {
                self.module.analyze_frame(frame);
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                true
            }
            None => {
                self.release();
                false
            }
        }
    }

    /// Session id of the last successful initialization
    ///
    /// Cleared as soon as a new initialization starts.
    pub fn session(&self) -> Option<Uuid> {
        self.session
    }

    pub fn is_initialized(&self) -> bool {
        self.reader.is_some()
    }

    pub fn module(&self) -> &CachingFrameModule {
        &*self.module
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            debug!(
                session = ?self.session,
                frames = self.module.frames_analyzed(),
                "runner released"
            );
        }
        self.remaining = None;
    }
}
