//! Trajectory files
//!
//! A [`TrajectoryFile`] opened for reading owns a [`CachingFrameModule`].
//! `select()` implicitly creates a runner bound to that module and returns an
//! iterator. Each step of the iterator advances the runner and yields the
//! frame the module just cached. When the input is exhausted (or the iterator
//! is dropped) the runner is released; the module keeps its cache and can be
//! driven again by a later `select()`.

use super::FileMode;
use crate::engine::{Engine, Frame};
use crate::errors::BindingError;
use crate::runner::{CachingFrameModule, Options, TrajectoryRunner};
use std::path::{Path, PathBuf};

/// Trajectory data source
#[derive(Debug, Clone)]
pub struct TrajectoryFile {
    filename: PathBuf,
    mode: FileMode,
    module: CachingFrameModule,
}

impl TrajectoryFile {
    /// Prepare `filename` for the requested access mode
    ///
    /// # Errors
    ///
    /// - `Usage` if `filename` is empty
    /// - `Usage` for any mode other than `"r"`
    pub fn open(filename: impl Into<PathBuf>, mode: &str) -> Result<Self, BindingError> {
        let filename = filename.into();
        if filename.as_os_str().is_empty() {
            return Err(BindingError::usage(
                "TrajectoryFile objects must be associated with a file.",
            ));
        }
        let mode = FileMode::require_read(mode, "Trajectory file access mode not supported.")?;
        Ok(Self {
            filename,
            mode,
            module: CachingFrameModule::new(),
        })
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// The module caching frames for this file
    pub fn module(&self) -> &CachingFrameModule {
        &self.module
    }

    /// Read all frames
    pub fn select<'a, E: Engine>(&'a mut self, engine: &'a E) -> Result<Frames<'a, E>, BindingError> {
        let options = Options::new(self.filename.clone());
        self.select_with(engine, &options)
    }

    /// Read frames using explicit runner options
    ///
    /// `options.filename` is overridden by this file's name.
    pub fn select_with<'a, E: Engine>(
        &'a mut self,
        engine: &'a E,
        options: &Options,
    ) -> Result<Frames<'a, E>, BindingError> {
        let options = Options {
            filename: self.filename.clone(),
            ..options.clone()
        };
        options.validate()?;
        let mut runner = TrajectoryRunner::new(engine, &mut self.module);
        runner.initialize(&options).into_result()?;
        Ok(Frames { runner })
    }
}

/// Iterator over frames produced by a runner
pub struct Frames<'a, E: Engine> {
    runner: TrajectoryRunner<'a, E>,
}

impl<E: Engine> Iterator for Frames<'_, E> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.runner.next() {
            self.runner.module().frame().cloned()
        } else {
            None
        }
    }
}
