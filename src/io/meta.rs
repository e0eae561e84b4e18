//! Sidecar describing a raw dataset file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::simulation::SimulationResult;
use crate::Result;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    pub n_frames: usize,
    pub height: usize,
    pub width: usize,
    pub signal_photons: u64,
    pub noise_events: u64,
}

impl Metadata {

    pub fn of(result: &SimulationResult) -> Self {
        let [n_frames, height, width] = result.dataset.shape();
        Self {
            n_frames, height, width,
            signal_photons: result.signal_photons,
            noise_events: result.noise_events,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }
}
