//! Reading and writing simulation output
//!
//! A dataset is written as a headerless raw file of `u16`s (see `raw`), and
//! its shape travels alongside it in a small TOML sidecar (see `meta`).

pub mod raw;
pub mod meta;

use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufWriter, Write};

use geometry::Point;
use units::m_;

use crate::dataset::Dataset;
use crate::simulation::SimulationResult;
use crate::Result;

pub use meta::Metadata;

/// Path of the sidecar describing the dataset in `path`: `<path>.toml`
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".toml");
    PathBuf::from(name)
}

/// Write the dataset in raw form to `path` and its metadata to the sidecar
pub fn write_result(result: &SimulationResult, path: &Path) -> Result<()> {
    raw::write(result.dataset.values(), path)?;
    Metadata::of(result).write(&sidecar_path(path))?;
    Ok(())
}

/// Load a dataset written by `write_result`
pub fn read_dataset(path: &Path) -> Result<(Dataset, Metadata)> {
    let meta = Metadata::read(&sidecar_path(path))?;
    let values = raw::read::<u16>(path)?.collect::<std::io::Result<Vec<_>>>()?;
    let dataset = Dataset::from_raw(meta.n_frames, meta.height, meta.width, values)?;
    Ok((dataset, meta))
}

/// Write preview points as one whitespace-separated `x y z` line (in metres)
/// per point
pub fn write_points(points: &[Point], path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for p in points {
        writeln!(out, "{} {} {}", m_(p.x), m_(p.y), m_(p.z))?;
    }
    out.flush()?;
    Ok(())
}
