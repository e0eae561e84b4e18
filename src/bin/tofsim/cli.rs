/// Command line interface for `tofsim` executable
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    name = "tofsim",
    about = "Simulate a single-photon ToF sensor watching a bouncing ball",
)]
pub (super) struct Cli {
    /// TOML file with simulation parameters. Missing fields take default values
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate [overrides config]
    #[clap(short = 'n', long, global = true)]
    pub frames: Option<usize>,

    /// Initial ball position, e.g. '-1 m, 2 m, 150 cm' [overrides config]
    #[clap(long, global = true, value_parser = parse_triplet::<Length>)]
    pub position: Option<(Length, Length, Length)>,

    /// Initial ball velocity, e.g. '1 m/s, 0 m/s, 1 m/s' [overrides config]
    #[clap(long, global = true, value_parser = parse_triplet::<Velocity>)]
    pub velocity: Option<(Velocity, Velocity, Velocity)>,

    #[clap(subcommand)]
    pub (super) command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub (super) enum Command {

    /// Generate the full photon-counting dataset
    Run {
        /// Raw u16 output file. Its shape is written to `<out>.toml`
        #[clap(short, long, default_value = "tennis_tof_physics.bin")]
        out: PathBuf,

        /// Seed for the random number generator. Random if not given
        #[clap(short, long)]
        seed: Option<u64>,

        /// Also write per-pixel photon-count and ground-truth maps as raw f32 images
        #[clap(long)]
        counts: bool,
    },

    /// Write a downsampled trajectory of the ball, one `x y z` line per point
    Preview {
        #[clap(short, long, default_value = "trajectory.txt")]
        out: PathBuf,
    },
}

impl Cli {
    pub (super) fn apply_overrides(&self, params: &mut SimulationParameters) {
        if let Some(n) = self.frames { params.n_frames = n }
        if let Some((x, y, z)) = self.position { params.initial_position = Point::new(x, y, z) }
        if let Some((x, y, z)) = self.velocity { params.initial_velocity = VelocityVec::new(x, y, z) }
    }
}
// ----- Imports -----------------------------------------------------------------------------------------
use std::path::PathBuf;
use units::{Length, Velocity};
use tofsim::{
    Point, SimulationParameters, VelocityVec,
    utils::parse_triplet,
};
