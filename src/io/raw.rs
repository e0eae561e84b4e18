//! Read / write numeric arrays as raw little-endian binary, with no header

use std::fs::File;
use std::io::{Write, Read, BufWriter, BufReader};

/// Values which can be stored in raw files
pub trait RawValue: Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy + 'static;
    fn to_le(self) -> Self::Bytes;
    fn from_le(bytes: Self::Bytes) -> Self;
}

impl RawValue for u16 {
    type Bytes = [u8; 2];
    fn to_le(self) -> Self::Bytes { self.to_le_bytes() }
    fn from_le(bytes: Self::Bytes) -> Self { u16::from_le_bytes(bytes) }
}

impl RawValue for f32 {
    type Bytes = [u8; 4];
    fn to_le(self) -> Self::Bytes { self.to_le_bytes() }
    fn from_le(bytes: Self::Bytes) -> Self { f32::from_le_bytes(bytes) }
}

pub fn write<T: RawValue>(data: impl Iterator<Item = T>, path: &std::path::Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut buf = BufWriter::new(file);
    for datum in data {
        buf.write_all(datum.to_le().as_ref())?;
    }
    buf.flush()
}

type IORes<T> = std::io::Result<T>;
pub fn read<'a, T: RawValue + 'a>(path: &std::path::Path) -> IORes<impl Iterator<Item = IORes<T>> + 'a> {
    let file = File::open(path)?;
    let mut buf = BufReader::new(file);
    let mut buffer = T::Bytes::default();

    Ok(std::iter::from_fn(move || {
        use std::io::ErrorKind::UnexpectedEof;
        match buf.read_exact(buffer.as_mut()) {
            Ok(()) => Some(Ok(T::from_le(buffer))),
            Err(e) if e.kind() == UnexpectedEof => None,
            Err(e) => Some(Err(e)),
        }
    }))
}
