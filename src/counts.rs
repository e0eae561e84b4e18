//! Per-pixel event counts, summed over all frames

use ndarray::{Array2, Axis};

use crate::dataset::{Dataset, TOF_LIMIT};
use crate::detector::Pixel;

/// `height × width` map of the number of frames in which each pixel recorded
/// an event of any kind (signal or noise)
pub fn photon_counts(dataset: &Dataset) -> Array2<u32> {
    dataset.view()
        .map(|&v| u32::from(v < TOF_LIMIT))
        .sum_axis(Axis(0))
}

/// `height × width` map of the number of signal events recorded in each pixel
pub fn ground_truth_counts(coordinates: &[Pixel], height: usize, width: usize) -> Array2<u32> {
    let mut counts = Array2::zeros((height, width));
    for &Pixel { row, col } in coordinates {
        if let Some(n) = counts.get_mut((row, col)) { *n += 1 }
    }
    counts
}

/// Flatten a count map into row-major `f32`s, suitable for `io::raw::write`
pub fn as_image(counts: &Array2<u32>) -> impl Iterator<Item = f32> + '_ {
    counts.iter().map(|&n| n as f32)
}
