//! Downsampled trajectory for visualization
//!
//! Runs exactly the same physics as a full simulation, so the end point is
//! right, but records only a bounded number of positions.

use geometry::Point;

use crate::trajectory::{Ball, Trajectory};
use crate::{Result, SimulationParameters};

/// Upper bound on the number of strided positions; the final position comes on top
pub const MAX_PREVIEW_POINTS: usize = 30_000;

/// Record one position every `stride` frames
pub fn stride(n_frames: usize, max_points: usize) -> usize {
    n_frames.div_ceil(max_points).max(1)
}

/// Trajectory positions at frames `0, stride, 2 × stride, ...`, always followed
/// by the position after the last frame, even when the stride already landed
/// on it.
pub fn sampled_trajectory(params: &SimulationParameters) -> Result<Vec<Point>> {
    params.validate()?;
    Ok(sample(params, MAX_PREVIEW_POINTS))
}

fn sample(params: &SimulationParameters, max_points: usize) -> Vec<Point> {
    let n_frames = params.n_frames;
    if n_frames == 0 { return vec![] }

    let step = stride(n_frames, max_points);
    let start = Ball::new(params.initial_position, params.initial_velocity);
    let mut points = Vec::with_capacity(n_frames / step + 2);
    let mut trajectory = Trajectory::new(start, params.frame_duration, params.restitution);
    for (frame, position) in trajectory.by_ref().take(n_frames).enumerate() {
        if frame % step == 0 { points.push(position) }
    }
    points.push(trajectory.ball().position);
    points
}
