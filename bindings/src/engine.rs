//! Engine collaborator interface
//!
//! The simulation engine is an external library. The binding never reaches
//! into global engine state; every operation that needs the engine takes it
//! as a parameter, which also lets tests substitute an in-memory engine.

use crate::status::NativeStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// One trajectory frame as delivered by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Integration step the frame was written at
    pub step: i64,
    /// Simulation time in ps
    pub time: f64,
    /// Atom positions in nm
    pub positions: Vec<[f64; 3]>,
}

impl Frame {
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
}

/// Run input parameters read from a TPR file
///
/// Keys follow the engine's mdp option names (`"init-step"`, `"nsteps"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationParameters {
    values: Map<String, Value>,
}

impl SimulationParameters {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a parameter, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Copy of all parameters as a plain key/value map
    pub fn extract(&self) -> Map<String, Value> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Frame-at-a-time reader over an open trajectory
pub trait FrameReader {
    /// Next frame, or `None` once the input is exhausted
    fn read_frame(&mut self) -> Option<Frame>;
}

/// Engine operations the binding layer consumes
pub trait Engine {
    /// The engine's own result type
    type Status: NativeStatus;

    /// Read simulation parameters from a run input file
    fn read_run_input(&self, path: &Path) -> Result<SimulationParameters, Self::Status>;

    /// Open a trajectory file for sequential reading
    fn open_trajectory(&self, path: &Path) -> Result<Box<dyn FrameReader>, Self::Status>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameters_set_and_extract() {
        let mut params = SimulationParameters::default();
        assert!(params.is_empty());

        assert_eq!(params.set("init-step", 0), None);
        assert_eq!(params.set("init-step", 100), Some(json!(0)));

        let extracted = params.extract();
        assert_eq!(extracted.get("init-step"), Some(&json!(100)));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_parameters_serialize_as_plain_object() {
        let mut params = SimulationParameters::default();
        params.set("nsteps", 5000);
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"nsteps": 5000}));
    }
}
