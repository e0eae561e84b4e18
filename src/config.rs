//! Parsing of TOML configuration files

pub mod simulation;
