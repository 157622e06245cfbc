//! In-memory engine shared by the integration tests

#![allow(dead_code)]

use gmxpy_core_rs::{Engine, Frame, FrameReader, NativeStatus, SimulationParameters};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Engine-native status with more detail than the boundary keeps
#[derive(Debug, Clone, PartialEq)]
pub struct FakeStatus {
    pub code: i32,
    pub detail: String,
}

impl NativeStatus for FakeStatus {
    fn success(&self) -> bool {
        self.code == 0
    }

    fn message(&self) -> Option<String> {
        if self.code == 0 {
            None
        } else {
            Some(self.detail.clone())
        }
    }
}

#[derive(Default)]
pub struct FakeEngine {
    run_inputs: HashMap<PathBuf, SimulationParameters>,
    trajectories: HashMap<PathBuf, Vec<Frame>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run_input(mut self, path: &str, params: SimulationParameters) -> Self {
        self.run_inputs.insert(PathBuf::from(path), params);
        self
    }

    pub fn with_trajectory(mut self, path: &str, frames: Vec<Frame>) -> Self {
        self.trajectories.insert(PathBuf::from(path), frames);
        self
    }
}

fn missing(path: &Path) -> FakeStatus {
    FakeStatus {
        code: 2,
        detail: format!("File not found: {}", path.display()),
    }
}

struct VecReader {
    frames: std::vec::IntoIter<Frame>,
}

impl FrameReader for VecReader {
    fn read_frame(&mut self) -> Option<Frame> {
        self.frames.next()
    }
}

impl Engine for FakeEngine {
    type Status = FakeStatus;

    fn read_run_input(&self, path: &Path) -> Result<SimulationParameters, FakeStatus> {
        self.run_inputs.get(path).cloned().ok_or_else(|| missing(path))
    }

    fn open_trajectory(&self, path: &Path) -> Result<Box<dyn FrameReader>, FakeStatus> {
        let frames = self.trajectories.get(path).ok_or_else(|| missing(path))?;
        Ok(Box::new(VecReader {
            frames: frames.clone().into_iter(),
        }))
    }
}

/// Frame `i` of a small synthetic trajectory
pub fn frame(i: i64) -> Frame {
    Frame {
        step: i * 100,
        time: i as f64 * 0.2,
        positions: vec![[i as f64, 0.0, 0.0], [0.0, i as f64, 1.5]],
    }
}

pub fn frames(n: i64) -> Vec<Frame> {
    (0..n).map(frame).collect()
}

pub fn sample_parameters() -> SimulationParameters {
    let mut params = SimulationParameters::default();
    params.set("init-step", 0);
    params.set("nsteps", 50_000);
    params.set("dt", 0.002);
    params.set("integrator", "md");
    params
}
