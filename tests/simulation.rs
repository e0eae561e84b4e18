//! End-to-end properties of complete simulation runs

use proptest::prelude::*;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

use tofsim::{
    run, CancelToken, SimulationParameters, SimulationResult, SENTINEL, TOF_LIMIT,
    counts::{ground_truth_counts, photon_counts},
    noise::MAX_NOISE_EVENTS,
};
use units::{hertz, watt};

fn simulate(params: &SimulationParameters, seed: u64) -> SimulationResult {
    run(params, Isaac64Rng::seed_from_u64(seed), |_| (), &CancelToken::new()).unwrap()
}

fn params(n_frames: usize, width: usize, height: usize) -> SimulationParameters {
    SimulationParameters { n_frames, width, height, ..Default::default() }
}

/// Neither laser returns nor noise
fn dark(p: SimulationParameters) -> SimulationParameters {
    SimulationParameters {
        laser_peak_power: watt(0.0),
        solar_irradiance: 0.0,
        dark_count_rate: hertz(0.0),
        ..p
    }
}

#[test]
fn zero_frames_gives_empty_result() {
    let mut progress = vec![];
    let result = run(&params(0, 32, 32), Isaac64Rng::seed_from_u64(0),
                     |p| progress.push(p), &CancelToken::new()).unwrap();
    assert!(result.dataset.is_empty());
    assert_eq!(result.signal_photons, 0);
    assert_eq!(result.noise_events, 0);
    assert!(result.signal_coordinates.is_empty());
    assert_eq!(progress, vec![100]);
}

#[test]
fn nothing_happens_in_the_dark() {
    let result = simulate(&dark(params(3_000, 8, 6)), 1);
    assert_eq!(result.dataset.len(), 3_000 * 8 * 6);
    assert!(result.dataset.values().all(|v| v == SENTINEL));
    assert_eq!((result.signal_photons, result.noise_events), (0, 0));
}

#[test]
fn saturated_detection_counts_every_frame() {
    // With the default parameters more than one photon is expected per pulse
    // throughout the first 10000 frames, so every trial succeeds, even though
    // the ball starts outside the field of view.
    let p = SimulationParameters { solar_irradiance: 0.0, ..params(10_000, 32, 32) };
    let result = simulate(&p, 2);
    assert_eq!(result.signal_photons, 10_000);
    assert!(!result.signal_coordinates.is_empty());
    assert!((result.signal_coordinates.len() as u64) < result.signal_photons);
}

#[test]
fn noise_is_capped_for_bright_backgrounds() {
    // Default background is ~2e5 events per frame
    let result = simulate(&params(10_000, 32, 32), 3);
    assert_eq!(result.noise_events, MAX_NOISE_EVENTS);
    assert!(result.dataset.n_occupied() as u64 <= result.signal_coordinates.len() as u64 + MAX_NOISE_EVENTS);
}

#[test]
fn signal_events_survive_noise() {
    let p = params(10_000, 32, 32);
    let result = simulate(&p, 4);
    let photons = photon_counts(&result.dataset);
    let truth = ground_truth_counts(&result.signal_coordinates, p.height, p.width);
    assert!(truth.sum() > 0);
    for (t, n) in truth.iter().zip(photons.iter()) {
        assert!(t <= n);
    }
}

#[test]
fn progress_is_monotonic_and_ends_at_100() {
    let mut progress = vec![];
    run(&params(23_000, 8, 8), Isaac64Rng::seed_from_u64(5),
        |p| progress.push(p), &CancelToken::new()).unwrap();
    assert_eq!(progress, vec![21, 41, 62, 83, 95, 100]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let p = params(6_000, 16, 16);
    assert_eq!(simulate(&p, 6), simulate(&p, 6));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]
    #[test]
    fn dataset_invariants(
        seed         in any::<u64>(),
        n_frames     in 0 .. 3_000_usize,
        width        in 1 .. 24_usize,
        height       in 1 .. 24_usize,
        reflectivity in 0.0 ..= (1.0 as f64),
        restitution  in 0.0 ..= (1.0 as f64),
        fov_degrees  in 10.0 .. (170.0 as f64),
    ) {
        let p = SimulationParameters {
            reflectivity, restitution, fov_degrees,
            ..params(n_frames, width, height)
        };
        let mut progress = vec![];
        let result = run(&p, Isaac64Rng::seed_from_u64(seed),
                         |p| progress.push(p), &CancelToken::new()).unwrap();

        prop_assert_eq!(result.dataset.len(), n_frames * width * height);
        prop_assert_eq!(result.dataset.shape(), [n_frames, height, width]);
        for v in result.dataset.values().filter(|&v| v != SENTINEL) {
            prop_assert!(v < TOF_LIMIT);
        }
        prop_assert!(result.signal_coordinates.len() as u64 <= result.signal_photons);
        prop_assert!(result.signal_photons <= n_frames as u64);
        prop_assert!(result.noise_events <= MAX_NOISE_EVENTS);
        for pixel in &result.signal_coordinates {
            prop_assert!(pixel.row < height && pixel.col < width);
        }

        prop_assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(progress.last(), Some(&100));
        prop_assert_eq!(progress.iter().filter(|&&p| p == 100).count(), 1);
    }
}
