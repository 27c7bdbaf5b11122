//! Error types for configuration parsing and validation

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file
    #[error("I/O error: {0}")]
    Io(String),

    /// TOML parsing error
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
