//! faultsim report - renders coverage results
//!
//! The text format matches the statistics file of the classic fault
//! simulator; the JSON format carries the same data for tooling.

pub mod error;
pub mod json;
pub mod text;

pub use error::{ReportError, Result};

use faultsim_sim::CoverageReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Output format of the report file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Include the detected/undetected fault listings
    pub fault_lists: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            fault_lists: true,
        }
    }
}

/// Render a report into any writer
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &CoverageReport,
    options: &ReportOptions,
) -> Result<()> {
    match options.format {
        ReportFormat::Text => text::write_text(writer, report, options.fault_lists),
        ReportFormat::Json => json::write_json(writer, report, options.fault_lists),
    }
}

/// Render a report into a file, replacing any existing content
pub fn write_report_file(
    path: impl AsRef<Path>,
    report: &CoverageReport,
    options: &ReportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    write_report(&mut writer, report, options)?;
    writer.flush().map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Statistics file '{}' generated successfully", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.format, ReportFormat::Text);
        assert!(options.fault_lists);
    }
}
