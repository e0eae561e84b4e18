//! Frame-by-frame photon detection, driven in batches
//!
//! A run has two passes. The signal pass advances the ball one frame at a time,
//! decides whether a laser return is detected in that frame, and if so writes
//! its quantized time of flight into the pixel onto which the ball is imaged.
//! The noise pass then scatters background events over the cells that are
//! still vacant.
//!
//! The signal pass is split into batches: `Simulation::step` processes one
//! batch and returns, so that the caller regains control (to report progress,
//! check for cancellation, ...) between batches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::Rng;

use units::{Energy, Time, ns};

use crate::dataset::Dataset;
use crate::detector::{Detector, Pixel, storable_tof_bin};
use crate::noise::{self, NoiseSummary};
use crate::radiometry::Radiometry;
use crate::trajectory::Ball;
use crate::utils::group_digits;
use crate::{Result, Error, SimulationParameters};

/// Duration of a single laser pulse
pub fn pulse_width() -> Time { ns(0.5) }

/// Tunable constants of the batch scheduler
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule {
    /// Number of frames processed per call to `Simulation::step`
    pub chunk_size: usize,
    /// Percentage of the progress range taken by the signal pass. The noise
    /// pass takes the rest.
    pub signal_share: f64,
}

impl Default for Schedule {
    fn default() -> Self { Self { chunk_size: 5000, signal_share: 95.0 } }
}

/// Outcome of one call to `Simulation::step`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A batch was processed; progress (percent) so far
    Continue(u8),
    /// All frames have been processed: call `Simulation::finish`
    SignalDone,
}

/// The product of a complete run
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub dataset: Dataset,
    /// Number of successful detection trials, including those whose pixel or
    /// ToF bin fell outside the dataset and therefore were not written
    pub signal_photons: u64,
    /// Number of noise events drawn (after capping), including those lost to
    /// collisions with occupied cells
    pub noise_events: u64,
    /// Pixel of every signal event written to the dataset, in frame order
    pub signal_coordinates: Vec<Pixel>,
}

/// State of a run in progress. Exclusively owns the dataset until `finish`
/// hands it over.
pub struct Simulation<R> {
    rng: R,
    schedule: Schedule,
    restitution: f64,
    dt: Time,
    pulse_energy: Energy,
    radiometry: Radiometry,
    detector: Detector,
    ball: Ball,
    n_frames: usize,
    next_frame: usize,
    dataset: Dataset,
    signal_photons: u64,
    signal_coordinates: Vec<Pixel>,
}

impl<R: Rng> Simulation<R> {

    /// Validate `params` and prepare a run. Nothing is simulated until `step`
    /// is called.
    pub fn new(params: &SimulationParameters, rng: R) -> Result<Self> {
        Self::with_schedule(params, rng, Schedule::default())
    }

    pub fn with_schedule(params: &SimulationParameters, rng: R, schedule: Schedule) -> Result<Self> {
        params.validate()?;
        if schedule.chunk_size == 0 {
            return Err(Error::invalid("chunk_size", 0.0, "must be at least one frame"));
        }
        if !(0.0..=100.0).contains(&schedule.signal_share) {
            return Err(Error::invalid("signal_share", schedule.signal_share, "must lie in [0, 100]"));
        }
        let p = params;
        info!("Simulating {} frames of {}×{} pixels",
              group_digits(p.n_frames), p.width, p.height);
        Ok(Self {
            rng,
            schedule,
            restitution:   p.restitution,
            dt:            p.frame_duration,
            pulse_energy:  p.laser_peak_power * pulse_width(),
            radiometry:    Radiometry::new(p),
            detector:      Detector::new(p),
            ball:          Ball::new(p.initial_position, p.initial_velocity),
            n_frames:      p.n_frames,
            next_frame:    0,
            dataset:       Dataset::new(p.n_frames, p.height, p.width),
            signal_photons: 0,
            signal_coordinates: vec![],
        })
    }

    pub fn frames_processed(&self) -> usize { self.next_frame }

    pub fn signal_pass_done(&self) -> bool { self.next_frame >= self.n_frames }

    /// Progress of the signal pass, in percent of the whole run. Never reaches
    /// 100: that is reserved for the completed run.
    pub fn progress(&self) -> u8 {
        let fraction = if self.n_frames == 0 { 1.0 }
                       else { self.next_frame as f64 / self.n_frames as f64 };
        (fraction * self.schedule.signal_share).round().min(99.0) as u8
    }

    /// Process the next batch of frames
    pub fn step(&mut self) -> Step {
        if self.signal_pass_done() { return Step::SignalDone }
        let end = (self.next_frame + self.schedule.chunk_size).min(self.n_frames);
        for frame in self.next_frame..end {
            self.process_frame(frame);
        }
        self.next_frame = end;
        debug!("Processed {} / {} frames", group_digits(end), group_digits(self.n_frames));
        Step::Continue(self.progress())
    }

    fn process_frame(&mut self, frame: usize) {
        self.ball.step(self.dt, self.restitution);
        let position = self.ball.position;
        let distance = self.detector.distance(position);
        let expected = self.radiometry.received_photons(self.pulse_energy, distance);

        // Single-photon approximation: only sensible while `expected` << 1
        if self.rng.gen::<f64>() < expected {
            self.signal_photons += 1;
            if let (Some(pixel), Some(tof)) = (self.detector.pixel(position), storable_tof_bin(distance)) {
                let Pixel { row, col } = pixel;
                if self.dataset.occupy([frame, row, col], tof) {
                    self.signal_coordinates.push(pixel);
                }
            }
        }
    }

    /// Run any remaining batches, then the noise pass, and hand over the
    /// result.
    pub fn finish(mut self) -> SimulationResult {
        while self.step() != Step::SignalDone {}
        let expected_per_frame = self.radiometry.background_noise(self.dt);
        let NoiseSummary { drawn, .. } = noise::inject(&mut self.dataset, expected_per_frame, &mut self.rng);
        info!("Simulation complete. Signal photons: {}, Noise events: {}",
              group_digits(self.signal_photons), group_digits(drawn));
        SimulationResult {
            dataset: self.dataset,
            signal_photons: self.signal_photons,
            noise_events: drawn,
            signal_coordinates: self.signal_coordinates,
        }
    }
}

/// Shared flag by which a run can be asked to stop at its next batch boundary
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self { Self::default() }
    pub fn cancel(&self) { self.0.store(true, Ordering::Relaxed) }
    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::Relaxed) }
}

/// Run a whole simulation with the default `Schedule`.
///
/// `progress` receives a non-decreasing sequence of percentages, ending with
/// exactly one `100` on completion. `cancel` is checked between batches; if it
/// has been set, the run stops and no result is produced.
pub fn run<R: Rng>(
    params: &SimulationParameters,
    rng: R,
    progress: impl FnMut(u8),
    cancel: &CancelToken,
) -> Result<SimulationResult> {
    drive(Simulation::new(params, rng)?, progress, cancel)
}

/// Take a prepared simulation (possibly with a custom `Schedule`) through to
/// completion, as described in `run`.
pub fn drive<R: Rng>(
    mut sim: Simulation<R>,
    mut progress: impl FnMut(u8),
    cancel: &CancelToken,
) -> Result<SimulationResult> {
    loop {
        if cancel.is_cancelled() {
            info!("Cancelled after {} frames", group_digits(sim.frames_processed()));
            return Err(Error::Cancelled);
        }
        match sim.step() {
            Step::Continue(percent) => progress(percent),
            Step::SignalDone        => break,
        }
    }
    let result = sim.finish();
    progress(100);
    Ok(result)
}
