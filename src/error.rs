//! Error type shared by the whole crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    #[error("simulation cancelled")]
    Cancelled,

    #[error("dataset of shape {shape:?} cannot hold {len} values")]
    ShapeMismatch { shape: [usize; 3], len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not write metadata: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Error::InvalidParameter { name, value, reason }
    }
}
