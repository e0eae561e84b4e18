//! Ballistic motion of the ball, with restitution at the ground plane `y = 0`

use geometry::{Point, VelocityVec};
use units::{Length, Time, G, m};

/// Position and velocity of the ball
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Point,
    pub velocity: VelocityVec,
}

impl Ball {

    pub fn new(position: Point, velocity: VelocityVec) -> Self { Self { position, velocity } }

    /// Advance by one timestep.
    ///
    /// The translation uses the velocity from *before* gravity is applied. If
    /// the new height is at or below the ground, it is clamped to exactly zero
    /// and the vertical velocity is reversed and scaled by `restitution`.
    /// Horizontal motion is unaffected by bounces.
    pub fn step(&mut self, dt: Time, restitution: f64) {
        self.position += self.velocity * dt;
        self.velocity.y -= G * dt;

        let ground: Length = m(0.0);
        if self.position.y <= ground {
            self.position.y = ground;
            self.velocity.y = -self.velocity.y * restitution;
        }
    }
}

/// Endless sequence of positions, one per timestep, starting with the position
/// *after* the first step.
#[derive(Clone, Debug)]
pub struct Trajectory {
    ball: Ball,
    dt: Time,
    restitution: f64,
}

impl Trajectory {
    pub fn new(ball: Ball, dt: Time, restitution: f64) -> Self { Self { ball, dt, restitution } }

    /// The current state of the ball, i.e. as of the most recently yielded position
    pub fn ball(&self) -> Ball { self.ball }
}

impl Iterator for Trajectory {
    type Item = Point;
    fn next(&mut self) -> Option<Point> {
        self.ball.step(self.dt, self.restitution);
        Some(self.ball.position)
    }
}

/// Positions at the end of each of the first `n_frames` timesteps
pub fn integrate(start: Ball, dt: Time, restitution: f64, n_frames: usize) -> Vec<Point> {
    Trajectory::new(start, dt, restitution).take(n_frames).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use proptest::prelude::*;
    use units::{m_, m_s, m_s_, us};

    fn dropped_from(height: f64) -> Ball {
        Ball::new(Point::from_f64s_in_m(0.0, height, 1.0),
                  VelocityVec::from_f64s_in_m_s(0.0, 0.0, 0.0))
    }

    #[test]
    fn no_frames_no_positions() {
        assert!(integrate(dropped_from(2.0), us(55.0), 0.8, 0).is_empty());
    }

    #[test]
    fn translation_precedes_gravity() {
        let ball = Ball::new(Point::from_f64s_in_m(0.0, 10.0, 0.0),
                             VelocityVec::from_f64s_in_m_s(2.0, 0.0, -1.0));
        let positions = integrate(ball, units::s(0.5), 1.0, 2);
        // First step: velocity is still zero vertically, so no drop yet
        assert_eq!(m_(positions[0].y), 10.0);
        assert_eq!(m_(positions[0].x), 1.0);
        assert_eq!(m_(positions[0].z), -0.5);
        // Second step uses v_y = -4.9 m/s
        assert_float_eq!(m_(positions[1].y), 10.0 - 4.9 * 0.5, abs <= 1e-12);
    }

    #[test]
    fn integration_is_deterministic() {
        let start = Ball::new(Point::from_f64s_in_m(-1.0, 2.0, 1.5),
                              VelocityVec::from_f64s_in_m_s(1.0, 0.0, 1.0));
        let a = integrate(start, us(55.0), 0.8, 50_000);
        let b = integrate(start, us(55.0), 0.8, 50_000);
        assert_eq!(a, b);
    }

    #[test]
    fn horizontal_motion_survives_bounces() {
        let start = Ball::new(Point::from_f64s_in_m(0.0, 0.1, 0.0),
                              VelocityVec::from_f64s_in_m_s(1.0, 0.0, 2.0));
        let dt = us(100.0);
        let n = 20_000; // 2 s: several bounces
        let last = *integrate(start, dt, 0.5, n).last().unwrap();
        assert_float_eq!(m_(last.x), 2.0, r2nd <= 1e-9);
        assert_float_eq!(m_(last.z), 4.0, r2nd <= 1e-9);
    }

    // With perfect restitution the ball should keep coming back to its release
    // height, up to the small errors introduced by the finite timestep.
    #[test]
    fn perfectly_elastic_ball_returns_to_release_height() {
        let positions = integrate(dropped_from(2.0), us(55.0), 1.0, 60_000);
        let heights = positions.iter().map(|p| m_(p.y)).collect::<Vec<_>>();

        assert!(heights[1] < heights[0]);
        assert!(heights.iter().any(|&y| y == 0.0), "ball never reached the ground");

        let apexes = heights.windows(3)
            .filter(|w| w[1] > w[0] && w[1] >= w[2])
            .map(|w| w[1])
            .collect::<Vec<_>>();
        assert!(apexes.len() >= 2, "expected several bounces, found {}", apexes.len());
        for apex in apexes {
            assert_float_eq!(apex, 2.0, abs <= 5e-3);
        }
    }

    proptest! {
        #[test]
        fn ground_bounce_law(
            restitution in 0.0 ..= (1.0 as f64),
            fraction    in 0.0 ..  (1.0 as f64),
            v_down      in 0.5 .. (10.0 as f64),
            dt_us       in 10.0 .. (1000.0 as f64),
        ) {
            let dt = us(dt_us);
            // Start low enough for this step to end at or below the ground
            let height = fraction * v_down * units::s_(dt);
            let mut ball = Ball::new(Point::from_f64s_in_m(0.0, height, 1.0),
                                     VelocityVec::new(m_s(0.0), m_s(-v_down), m_s(0.0)));
            let v_before = -v_down - 9.8 * units::s_(dt);
            ball.step(dt, restitution);
            prop_assert_eq!(m_(ball.position.y), 0.0);
            let v_after = m_s_(ball.velocity.y);
            prop_assert!(v_after >= 0.0);
            float_eq::assert_float_eq!(v_after, restitution * v_before.abs(), abs <= 1e-9);
        }
    }
}
