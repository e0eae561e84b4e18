//! Background light and dark counts, scattered uniformly over the dataset

use log::{debug, warn};
use rand::Rng;

use units::todo::Photonsf64;

use crate::dataset::{Dataset, TOF_LIMIT};
use crate::utils::group_digits;

/// Upper bound on the number of noise events drawn in one run
pub const MAX_NOISE_EVENTS: u64 = 1_000_000;

/// What happened during one noise pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseSummary {
    /// Number of events implied by the expected rate, before capping
    pub requested: u64,
    /// Number of events actually drawn: `requested`, capped at `MAX_NOISE_EVENTS`
    pub drawn: u64,
    /// Number of drawn events which landed in a vacant cell
    pub written: u64,
}

impl NoiseSummary {
    pub fn capped(&self) -> bool { self.drawn < self.requested }
}

/// Total number of noise events for a run with `expected_per_frame` events in
/// each of `n_frames` frames. Nonsensical expectations give no events.
pub fn noise_event_count(expected_per_frame: Photonsf64, n_frames: usize) -> u64 {
    let total = (expected_per_frame * n_frames as f64).floor();
    if total.is_finite() && total > 0.0 { total as u64 } else { 0 }
}

/// Scatter noise events uniformly over the whole of `dataset`, each with a
/// uniformly distributed ToF in `[1, TOF_LIMIT)`.
///
/// Cells which already hold a value are left untouched and the colliding event
/// is lost: no resampling takes place.
pub fn inject<R: Rng + ?Sized>(dataset: &mut Dataset, expected_per_frame: Photonsf64, rng: &mut R) -> NoiseSummary {
    let [n_frames, height, width] = dataset.shape();
    let requested = noise_event_count(expected_per_frame, n_frames);
    let drawn = if requested > MAX_NOISE_EVENTS {
        warn!("High noise count ({}) capped to {}", group_digits(requested), group_digits(MAX_NOISE_EVENTS));
        MAX_NOISE_EVENTS
    } else {
        requested
    };

    let mut written = 0;
    if !dataset.is_empty() {
        for _ in 0..drawn {
            let frame = rng.gen_range(0..n_frames);
            let row   = rng.gen_range(0..height);
            let col   = rng.gen_range(0..width);
            let tof   = rng.gen_range(1..TOF_LIMIT);
            if dataset.occupy([frame, row, col], tof) { written += 1 }
        }
    }
    debug!("Noise: {} drawn, {} written, {} lost to collisions",
           group_digits(drawn), group_digits(written), group_digits(drawn - written));
    NoiseSummary { requested, drawn, written }
}
