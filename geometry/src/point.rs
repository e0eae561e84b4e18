use std::ops::{Add, AddAssign, Sub};
use units::{Length, m};
use crate::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Point {
    pub fn new(x: Length, y: Length, z: Length) -> Self { Self { x, y, z } }

    pub fn origin() -> Self { Self::new(m(0.0), m(0.0), m(0.0)) }

    /// Construct from `f64`s which are interpreted as lengths in metres
    pub fn from_f64s_in_m(x: f64, y: f64, z: f64) -> Self { Self::new(m(x), m(y), m(z)) }

    pub fn distance_to(&self, other: Point) -> Length { (*self - other).magnitude() }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add<Vector> for Point {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use units::{assert_uom_eq, mm};
    use units::uom::si::length::meter;
    use proptest::prelude::*;

    #[test]
    fn point_minus_point_is_vector() {
        let lhs      = Point ::new(m(3.0), mm( 20.0), m( 8.0));
        let rhs      = Point ::new(m(2.0), m (  4.0), mm(20.0));
        let expected = Vector::new(m(1.0), mm(-3980.0), mm(7980.0));
        let result: Vector = lhs - rhs;
        assert_uom_eq!(meter, result.x, expected.x, ulps <= 1);
        assert_uom_eq!(meter, result.y, expected.y, r2nd <= 1e-12);
        assert_uom_eq!(meter, result.z, expected.z, r2nd <= 1e-12);
    }

    #[test]
    fn add_assign_vector_moves_point() {
        let mut p = Point::from_f64s_in_m(1.0, 2.0, 3.0);
        p += Vector::from_f64s_in_m(0.5, -2.0, 0.0);
        assert_eq!(p, Point::from_f64s_in_m(1.5, 0.0, 3.0));
    }

    proptest! {
        #[test]
        fn displacement_leads_from_one_point_to_the_other(
            a in (-100.0 .. (100.0 as f64), -100.0 .. (100.0 as f64), -100.0 .. (100.0 as f64)),
            b in (-100.0 .. (100.0 as f64), -100.0 .. (100.0 as f64), -100.0 .. (100.0 as f64)),
        ) {
            let a = Point::from_f64s_in_m(a.0, a.1, a.2);
            let b = Point::from_f64s_in_m(b.0, b.1, b.2);
            let there = a + (b - a);
            assert_uom_eq!(meter, there.x, b.x, abs <= 1e-12);
            assert_uom_eq!(meter, there.y, b.y, abs <= 1e-12);
            assert_uom_eq!(meter, there.z, b.z, abs <= 1e-12);
            assert_uom_eq!(meter, a.distance_to(b), b.distance_to(a), abs <= 1e-12);
        }
    }

    #[test]
    fn distance_between_points() {
        let a = Point::from_f64s_in_m(0.0, 1.0, 0.0);
        let b = Point::from_f64s_in_m(3.0, 5.0, 0.0);
        assert_uom_eq!(meter, a.distance_to(b), m(5.0), ulps <= 1);
    }
}
