use std::ops::Mul;
use units::{Length, Time, Velocity, m, m_s};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Vector {

    pub fn new(x: Length, y: Length, z: Length) -> Self { Self { x, y, z } }

    pub fn from_f64s_in_m(x: f64, y: f64, z: f64) -> Self { Self::new(m(x), m(y), m(z)) }

    pub fn magnitude(&self) -> Length {
        let &Self { x, y, z } = self;
        (x*x + y*y + z*z).sqrt()
    }

}

/// Velocity of a point-like body. Multiplying by a `Time` gives the
/// displacement over that time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityVec {
    pub x: Velocity,
    pub y: Velocity,
    pub z: Velocity,
}

impl VelocityVec {
    pub fn new(x: Velocity, y: Velocity, z: Velocity) -> Self { Self { x, y, z } }

    /// Construct from `f64`s which are interpreted as speeds in m/s
    pub fn from_f64s_in_m_s(x: f64, y: f64, z: f64) -> Self { Self::new(m_s(x), m_s(y), m_s(z)) }
}

impl Mul<Time> for VelocityVec {
    type Output = Vector;
    fn mul(self, dt: Time) -> Self::Output {
        Vector {
            x: self.x * dt,
            y: self.y * dt,
            z: self.z * dt,
        }
    }
}
