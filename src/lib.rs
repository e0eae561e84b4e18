mod exports;
pub use exports::*;

mod error;
pub mod params;
pub mod config;
pub mod trajectory;
pub mod radiometry;
pub mod detector;
pub mod dataset;
pub mod simulation;
pub mod noise;
pub mod preview;
pub mod counts;
pub mod io;
pub mod utils;
