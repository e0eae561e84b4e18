//! Configuration file parser for simulation parameters
//!
//! Physical quantities are written with their units, as strings, and parsed by
//! `uom`:
//!
//! ```toml
//! initial_position = ["-1 m", "2 m", "1.5 m"]
//! initial_velocity = ["1 m/s", "0 m/s", "1 m/s"]
//! frame_duration   = "0.055 ms"
//! aperture_diameter = "25 mm"
//! laser_peak_power = "10 mW"
//! dark_count_rate  = "100 Hz"
//! ```
//!
//! Any field left out takes its default value.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

use geometry::{Point, VelocityVec};
use units::{Length, Velocity};

use crate::params::SimulationParameters;
use crate::Result;

pub(crate) fn deserialize_uom<'d, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'d>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    String::deserialize(deserializer)?
        .parse::<T>()
        .map_err(de::Error::custom)
}

fn deserialize_uom_3d<'d, D, T>(deserializer: D) -> std::result::Result<(T, T, T), D::Error>
where
    D: Deserializer<'d>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let (x, y, z) = <(String, String, String)>::deserialize(deserializer)?;
    tr_tup_res((x.parse(), y.parse(), z.parse()))
        .map_err(de::Error::custom)
}

pub(crate) fn deserialize_point<'d, D: Deserializer<'d>>(deserializer: D) -> std::result::Result<Point, D::Error> {
    let (x, y, z) = deserialize_uom_3d::<D, Length>(deserializer)?;
    Ok(Point::new(x, y, z))
}

pub(crate) fn deserialize_velocity<'d, D: Deserializer<'d>>(deserializer: D) -> std::result::Result<VelocityVec, D::Error> {
    let (x, y, z) = deserialize_uom_3d::<D, Velocity>(deserializer)?;
    Ok(VelocityVec::new(x, y, z))
}

/// Transpose 3-tuple of `Result`
///
/// `Ok` if all elements `Ok`; if any element is an `Err` return the first one.
fn tr_tup_res<O, E>((x,y,z): (std::result::Result<O, E>, std::result::Result<O, E>, std::result::Result<O, E>)) -> std::result::Result<(O, O, O), E> {
    Ok((x?, y?, z?))
}

pub fn parse_config(text: &str) -> Result<SimulationParameters> {
    Ok(toml::from_str(text)?)
}

pub fn read_config_file(path: &Path) -> Result<SimulationParameters> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}
