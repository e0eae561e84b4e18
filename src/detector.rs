//! Pinhole projection onto the sensor and quantization of time of flight

use geometry::Point;
use units::{Length, Time, C, m, m_, ns, radian_, ratio_};

use crate::dataset::TOF_LIMIT;
use crate::SimulationParameters;

/// Width of one time-of-flight bin
pub fn tof_bin_width() -> Time { ns(0.256) }

/// A pixel on the sensor: `row` counts down from the top, `col` from the left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub row: usize,
    pub col: usize,
}

/// Round half up, `floor(x + 0.5)`, so `-0.5` goes to `0` and `2.5` to `3`.
fn round_half_up(x: f64) -> f64 { (x + 0.5).floor() }

/// Camera at `(0, camera_height, 0)` looking along `+z`, with `+y` up.
#[derive(Clone, Debug)]
pub struct Detector {
    pub width: usize,
    pub height: usize,
    /// Focal length expressed in pixels
    f_pixel: f64,
    centre_row: f64,
    centre_col: f64,
    camera_height: Length,
}

impl Detector {

    pub fn new(p: &SimulationParameters) -> Self {
        let half_fov = radian_(p.fov()) / 2.0;
        Self {
            width:         p.width,
            height:        p.height,
            f_pixel:       (p.width as f64 / 2.0) / half_fov.tan(),
            centre_row:    p.height as f64 / 2.0,
            centre_col:    p.width  as f64 / 2.0,
            camera_height: p.camera_height,
        }
    }

    pub fn position(&self) -> Point { Point::new(m(0.0), self.camera_height, m(0.0)) }

    /// Straight-line distance from the camera to `p`
    pub fn distance(&self, p: Point) -> Length { self.position().distance_to(p) }

    /// Unrounded `(row, col)` of the image of `p`. Not necessarily on the
    /// sensor, nor even finite.
    pub fn project(&self, p: Point) -> (f64, f64) {
        let (x, y, z) = (m_(p.x), m_(p.y - self.camera_height), m_(p.z));
        let row = self.centre_row - self.f_pixel * (y / z);
        let col = self.centre_col + self.f_pixel * (x / z);
        (row, col)
    }

    /// The pixel onto which `p` is imaged, if it lands on the sensor
    pub fn pixel(&self, p: Point) -> Option<Pixel> {
        let (row, col) = self.project(p);
        let (row, col) = (round_half_up(row), round_half_up(col));
        // NaN fails both comparisons
        let on_sensor = (0.0..self.height as f64).contains(&row)
                     && (0.0..self.width  as f64).contains(&col);
        on_sensor.then(|| Pixel { row: row as usize, col: col as usize })
    }
}

/// Round-trip time of flight for a target at `distance`
pub fn time_of_flight(distance: Length) -> Time { distance * 2.0 / C }

/// Index of the ToF bin containing the round trip to `distance`. Not
/// necessarily storable: see `storable_tof_bin`.
pub fn tof_bin(distance: Length) -> f64 {
    ratio_(time_of_flight(distance) / tof_bin_width()).floor()
}

/// The ToF bin for `distance`, if it lies strictly within `(0, 8000)`
pub fn storable_tof_bin(distance: Length) -> Option<u16> {
    let bin = tof_bin(distance);
    (bin > 0.0 && bin < TOF_LIMIT as f64).then(|| bin as u16)
}

/// Distance of a target whose round trip falls at the start of `bin`
pub fn bin_to_distance(bin: u16) -> Length {
    tof_bin_width() * bin as f64 * C / 2.0
}
