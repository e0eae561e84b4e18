mod cli;
mod progress;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let mut params = match &args.config {
        Some(path) => read_config_file(path)?,
        None       => SimulationParameters::default(),
    };
    args.apply_overrides(&mut params);
    params.validate()?;

    match &args.command {
        Command::Run { out, seed, counts } => simulate(&params, out, *seed, *counts),
        Command::Preview { out } => {
            let points = sampled_trajectory(&params)?;
            ensure_parent_exists(out)?;
            io::write_points(&points, out)?;
            info!("Wrote {} trajectory points to {}", group_digits(points.len()), out.display());
            Ok(())
        }
    }
}

fn simulate(params: &SimulationParameters, out: &Path, seed: Option<u64>, counts: bool) -> Result<(), Box<dyn Error>> {
    // Before starting the potentially long computation, make sure that we can
    // write the result to the requested destination.
    ensure_parent_exists(out)?;
    info!("Writing dataset to {}", out.display());

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut timing = timing::Progress::new();
    let bar = Progress::new(params.n_frames);
    let result = run(params, rng, |percent| bar.update(percent), &CancelToken::new())
        .map_err(|e| { bar.abandon(); e })?;
    timing.done_with_message("Simulated");

    io::write_result(&result, out)?;
    if counts {
        let [_, height, width] = result.dataset.shape();
        let photons = photon_counts(&result.dataset);
        let truth   = ground_truth_counts(&result.signal_coordinates, height, width);
        io::raw::write(as_image(&photons), &out.with_extension("counts.raw"))?;
        io::raw::write(as_image(&truth  ), &out.with_extension("truth.raw" ))?;
    }
    timing.done_with_message("Wrote output");

    info!("{} signal photons ({} localized), {} noise events",
          group_digits(result.signal_photons),
          group_digits(result.signal_coordinates.len()),
          group_digits(result.noise_events));
    Ok(())
}

/// If the directory where results will be written does not exist yet, make it
fn ensure_parent_exists(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) => std::fs::create_dir_all(dir),
        None      => Ok(()),
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::error::Error;
use std::path::Path;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use tofsim::{
    run, sampled_trajectory, CancelToken, SimulationParameters,
    config::simulation::read_config_file,
    counts::{as_image, ground_truth_counts, photon_counts},
    io,
    utils::{group_digits, timing},
};
use cli::{Cli, Command};
use progress::Progress;
