//! faultsim configuration
//!
//! This crate handles parsing and validation of `faultsim.toml` files, which
//! name the netlist, vector and report files of a run and select report and
//! simulation options.

pub mod config;
pub mod error;

pub use config::{Config, ReportSection, RunSection, SimulationSection, DEFAULT_OUTPUT};
pub use error::{ConfigError, Result};

use std::path::Path;

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "faultsim.toml";

/// Parse a configuration from a file path
pub fn from_path(path: impl AsRef<Path>) -> Result<Config> {
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
    from_str(&contents)
}

/// Parse a configuration from a string and validate it
pub fn from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
