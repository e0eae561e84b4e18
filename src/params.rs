//! The immutable parameter snapshot which drives one simulation run

use serde::Deserialize;

use geometry::{Point, VelocityVec};
use units::{
    Frequency, Length, Power, Time,
    degree, hertz, m, m_, m_s_, s_, us, watt, watt_, hertz_,
    todo::{Bandwidthf64, Irradiancef64, Ratiof64},
};

use crate::config::simulation::{
    deserialize_point, deserialize_uom, deserialize_velocity,
};
use crate::{Error, Result};

/// Everything needed to run one simulation. Built once, passed by value, never
/// updated while a run is in progress.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {

    /// Position of the ball at time zero
    #[serde(deserialize_with = "deserialize_point")]
    pub initial_position: Point,

    /// Velocity of the ball at time zero
    #[serde(deserialize_with = "deserialize_velocity")]
    pub initial_velocity: VelocityVec,

    /// Diffuse reflectivity of the ball surface
    pub reflectivity: Ratiof64,

    /// Fraction of vertical speed kept after a bounce
    pub restitution: Ratiof64,

    /// Sensor width in pixels
    pub width: usize,

    /// Sensor height in pixels
    pub height: usize,

    /// Horizontal field of view, in degrees
    pub fov_degrees: f64,

    /// Duration of a single frame: both the integration timestep and the noise
    /// integration window
    #[serde(deserialize_with = "deserialize_uom")]
    pub frame_duration: Time,

    pub quantum_efficiency: Ratiof64,

    #[serde(deserialize_with = "deserialize_uom")]
    pub aperture_diameter: Length,

    pub system_efficiency: Ratiof64,

    /// Optical filter bandwidth in nm
    pub filter_bandwidth: Bandwidthf64,

    #[serde(deserialize_with = "deserialize_uom")]
    pub dark_count_rate: Frequency,

    /// Solar spectral irradiance in W m⁻² nm⁻¹
    pub solar_irradiance: Irradiancef64,

    #[serde(deserialize_with = "deserialize_uom")]
    pub laser_peak_power: Power,

    /// Number of frames to simulate. Zero is allowed and gives an empty dataset.
    pub n_frames: usize,

    /// Height of the camera above the ground. The camera sits at `x = z = 0`,
    /// looking along `+z`.
    #[serde(deserialize_with = "deserialize_uom")]
    pub camera_height: Length,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_position:   Point::from_f64s_in_m(-1.0, 2.0, 1.5),
            initial_velocity:   VelocityVec::from_f64s_in_m_s(1.0, 0.0, 1.0),
            reflectivity:       0.01,
            restitution:        0.8,
            width:              32,
            height:             32,
            fov_degrees:        50.0,
            frame_duration:     us(55.0),
            quantum_efficiency: 0.3,
            aperture_diameter:  m(0.025),
            system_efficiency:  0.6,
            filter_bandwidth:   10.0,
            dark_count_rate:    hertz(100.0),
            solar_irradiance:   0.01,
            laser_peak_power:   watt(0.01),
            n_frames:           100_000,
            camera_height:      m(1.0),
        }
    }
}

impl SimulationParameters {

    /// Number of cells in the dataset this run will produce
    pub fn dataset_len(&self) -> usize { self.n_frames * self.width * self.height }

    /// Reject any parameter set that would produce NaNs, panics or a corrupted
    /// dataset. Called before any computation takes place.
    pub fn validate(&self) -> Result<()> {
        let p = self;
        let vectors = [
            ("initial_position.x", m_(p.initial_position.x)),
            ("initial_position.y", m_(p.initial_position.y)),
            ("initial_position.z", m_(p.initial_position.z)),
            ("initial_velocity.x", m_s_(p.initial_velocity.x)),
            ("initial_velocity.y", m_s_(p.initial_velocity.y)),
            ("initial_velocity.z", m_s_(p.initial_velocity.z)),
            ("camera_height"     , m_(p.camera_height)),
        ];
        for (name, value) in vectors {
            finite(name, value)?;
        }

        unit_interval("reflectivity"      , p.reflectivity)?;
        unit_interval("restitution"       , p.restitution)?;
        unit_interval("quantum_efficiency", p.quantum_efficiency)?;
        unit_interval("system_efficiency" , p.system_efficiency)?;

        non_negative("aperture_diameter", m_    (p.aperture_diameter))?;
        non_negative("filter_bandwidth" ,        p.filter_bandwidth  )?;
        non_negative("dark_count_rate"  , hertz_(p.dark_count_rate)  )?;
        non_negative("solar_irradiance" ,        p.solar_irradiance  )?;
        non_negative("laser_peak_power" , watt_ (p.laser_peak_power) )?;

        let dt = s_(p.frame_duration);
        finite("frame_duration", dt)?;
        if dt <= 0.0 {
            return Err(Error::invalid("frame_duration", dt, "must be positive"));
        }

        let fov = p.fov_degrees;
        finite("fov_degrees", fov)?;
        if fov <= 0.0 || fov >= 180.0 {
            return Err(Error::invalid("fov_degrees", fov, "must lie strictly between 0 and 180"));
        }

        if p.width  == 0 { return Err(Error::invalid("width" , 0.0, "must be at least one pixel")) }
        if p.height == 0 { return Err(Error::invalid("height", 0.0, "must be at least one pixel")) }
        if p.n_frames.checked_mul(p.width).and_then(|n| n.checked_mul(p.height)).is_none() {
            return Err(Error::invalid("n_frames", p.n_frames as f64, "dataset size overflows usize"));
        }
        Ok(())
    }

    /// Horizontal field of view as a `uom` angle
    pub fn fov(&self) -> units::Angle { degree(self.fov_degrees) }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() { Ok(()) }
    else                 { Err(Error::invalid(name, value, "must be finite")) }
}

fn unit_interval(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if (0.0..=1.0).contains(&value) { Ok(()) }
    else                            { Err(Error::invalid(name, value, "must lie in [0, 1]")) }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value >= 0.0 { Ok(()) }
    else            { Err(Error::invalid(name, value, "must not be negative")) }
}
