//! Configuration structure definitions

use crate::error::{ConfigError, Result};
use faultsim_report::{ReportFormat, ReportOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report path used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "fault_stats.txt";

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input and output files
    #[serde(default)]
    pub run: RunSection,

    /// Report rendering
    #[serde(default)]
    pub report: ReportSection,

    /// Simulation diagnostics
    #[serde(default)]
    pub simulation: SimulationSection,
}

/// Input and output files of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Structural Verilog netlist
    #[serde(default)]
    pub netlist: Option<PathBuf>,

    /// Test vector file
    #[serde(default)]
    pub vectors: Option<PathBuf>,

    /// Report file
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Report rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub format: ReportFormat,

    /// Include detected/undetected fault listings
    #[serde(default = "default_true")]
    pub fault_lists: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            fault_lists: true,
        }
    }
}

/// Simulation diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    /// Warn about gates that consume signals driven later in the netlist
    #[serde(default = "default_true")]
    pub check_declaration_order: bool,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            check_declaration_order: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("run.netlist", &self.run.netlist),
            ("run.vectors", &self.run.vectors),
            ("run.output", &self.run.output),
        ];
        for (key, path) in paths {
            if let Some(path) = path {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::Validation(format!("{key} must not be empty")));
                }
            }
        }
        Ok(())
    }

    /// Report path, falling back to [`DEFAULT_OUTPUT`]
    pub fn output_path(&self) -> &Path {
        self.run
            .output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT))
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.report.format,
            fault_lists: self.report.fault_lists,
        }
    }

    /// Resolve relative paths against the directory holding the config file
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.run.netlist,
            &mut self.run.vectors,
            &mut self.run.output,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
