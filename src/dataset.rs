//! Dense `[frame][row][col]` grid of quantized time-of-flight values

use ndarray::Array3;

use crate::{Error, Result};

/// Cell value meaning "no event recorded"
pub const SENTINEL: u16 = 8001;

/// Exclusive upper bound of the values which may be stored in a cell
pub const TOF_LIMIT: u16 = 8000;

/// Index of a single cell: `[frame, row, col]`
pub type CellIndex = [usize; 3];

/// Every cell starts out as `SENTINEL` and is written at most once: the first
/// writer wins, later writes to the same cell are refused.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    data: Array3<u16>,
}

impl Dataset {

    /// An empty (all-`SENTINEL`) dataset
    pub fn new(n_frames: usize, height: usize, width: usize) -> Self {
        Self { data: Array3::from_elem((n_frames, height, width), SENTINEL) }
    }

    /// Wrap `values` laid out frame-major, row-major within each frame
    pub fn from_raw(n_frames: usize, height: usize, width: usize, values: Vec<u16>) -> Result<Self> {
        let len = values.len();
        Array3::from_shape_vec((n_frames, height, width), values)
            .map(|data| Self { data })
            .map_err(|_| Error::ShapeMismatch { shape: [n_frames, height, width], len })
    }

    /// `[n_frames, height, width]`
    pub fn shape(&self) -> [usize; 3] {
        let (f, h, w) = self.data.dim();
        [f, h, w]
    }

    pub fn n_frames(&self) -> usize { self.shape()[0] }
    pub fn height  (&self) -> usize { self.shape()[1] }
    pub fn width   (&self) -> usize { self.shape()[2] }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn get(&self, index: CellIndex) -> Option<u16> { self.data.get(index).copied() }

    pub fn is_vacant(&self, index: CellIndex) -> bool { self.get(index) == Some(SENTINEL) }

    /// Store `value` in the cell at `index`, but only if the cell still holds
    /// `SENTINEL`. Returns whether the value was stored.
    ///
    /// # Panics
    /// If `value` is not below `TOF_LIMIT`.
    pub fn occupy(&mut self, index: CellIndex, value: u16) -> bool {
        assert!(value < TOF_LIMIT, "ToF value {value} out of range");
        match self.data.get_mut(index) {
            Some(cell) if *cell == SENTINEL => { *cell = value; true }
            _ => false,
        }
    }

    /// All cell values, in storage order
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ { self.data.iter().copied() }

    /// The non-`SENTINEL` cells as `([frame, row, col], value)`
    pub fn events(&self) -> impl Iterator<Item = (CellIndex, u16)> + '_ {
        self.data.indexed_iter()
            .filter(|(_, v)| **v != SENTINEL)
            .map(|((f, r, c), &v)| ([f, r, c], v))
    }

    pub fn n_occupied(&self) -> usize { self.data.iter().filter(|&&v| v != SENTINEL).count() }

    pub fn view(&self) -> ndarray::ArrayView3<'_, u16> { self.data.view() }

    /// Hand over the underlying buffer, frame-major, row-major within frames
    pub fn into_raw_vec(self) -> Vec<u16> { self.data.into_raw_vec() }

    /// Raw little-endian bytes: `2 × n_frames × width × height` of them
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.values().flat_map(u16::to_le_bytes).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn new_dataset_is_all_sentinel() {
        let d = Dataset::new(3, 4, 5);
        assert_eq!(d.len(), 60);
        assert_eq!(d.shape(), [3, 4, 5]);
        assert!(d.values().all(|v| v == SENTINEL));
        assert_eq!(d.n_occupied(), 0);
    }

    #[test]
    fn zero_frames_means_empty() {
        let d = Dataset::new(0, 32, 32);
        assert!(d.is_empty());
        assert!(d.to_le_bytes().is_empty());
    }

    #[test]
    fn first_writer_wins() {
        let mut d = Dataset::new(2, 2, 2);
        assert!( d.occupy([1, 0, 1], 123));
        assert!(!d.occupy([1, 0, 1], 456));
        assert_eq!(d.get([1, 0, 1]), Some(123));
        assert!(!d.is_vacant([1, 0, 1]));
        assert!( d.is_vacant([0, 0, 1]));
    }

    #[test]
    fn out_of_bounds_write_is_refused() {
        let mut d = Dataset::new(2, 2, 2);
        assert!(!d.occupy([2, 0, 0], 1));
        assert!(!d.is_vacant([0, 2, 0]));
    }

    #[test]
    #[should_panic]
    fn refuse_out_of_range_value() {
        Dataset::new(1, 1, 1).occupy([0, 0, 0], TOF_LIMIT);
    }

    #[test]
    fn layout_is_frame_major_then_row_major() {
        let (frames, height, width) = (2, 3, 4);
        let mut d = Dataset::new(frames, height, width);
        d.occupy([1, 2, 3], 7);
        d.occupy([0, 1, 0], 9);
        let raw = d.clone().into_raw_vec();
        assert_eq!(raw[1 * height * width + 2 * width + 3], 7);
        assert_eq!(raw[0 * height * width + 1 * width + 0], 9);
        assert_eq!(d.events().collect::<Vec<_>>(), vec![([0, 1, 0], 9), ([1, 2, 3], 7)]);
    }

    #[test]
    fn bytes_are_little_endian() {
        let mut d = Dataset::new(1, 1, 2);
        d.occupy([0, 0, 1], 0x0102);
        assert_eq!(d.to_le_bytes(), vec![0x41, 0x1F, 0x02, 0x01]); // 8001 = 0x1F41
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Dataset::from_raw(2, 2, 2, vec![SENTINEL; 8]).is_ok());
        assert!(matches!(Dataset::from_raw(2, 2, 2, vec![SENTINEL; 7]),
                         Err(Error::ShapeMismatch { len: 7, .. })));
    }
}
