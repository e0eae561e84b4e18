pub use crate::error::{Error, Result};
pub use crate::params::SimulationParameters;
pub use crate::dataset::{Dataset, SENTINEL, TOF_LIMIT};
pub use crate::detector::Pixel;
pub use crate::simulation::{run, drive, CancelToken, Schedule, Simulation, SimulationResult, Step};
pub use crate::preview::sampled_trajectory;

pub use geometry::{Point, Vector, VelocityVec};
