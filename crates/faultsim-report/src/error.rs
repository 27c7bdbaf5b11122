//! Error types for report rendering

use thiserror::Error;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be created or written
    #[error("failed to write report '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
