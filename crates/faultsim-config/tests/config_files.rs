//! Integration tests for configuration loading

use faultsim_config::{from_path, from_str, ConfigError};
use faultsim_report::ReportFormat;
use std::path::Path;

#[test]
fn test_complete_config() {
    let toml = r#"
        [run]
        netlist = "c17.v"
        vectors = "c17.vec"
        output = "c17_stats.txt"

        [report]
        format = "text"
        fault_lists = false

        [simulation]
        check_declaration_order = false
    "#;

    let config = from_str(toml).unwrap();
    assert_eq!(config.output_path(), Path::new("c17_stats.txt"));
    assert_eq!(config.report.format, ReportFormat::Text);
    assert!(!config.report.fault_lists);
    assert!(!config.simulation.check_declaration_order);
}

#[test]
fn test_config_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faultsim.toml");
    std::fs::write(
        &path,
        "[run]\nnetlist = \"adder.v\"\n\n[report]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = from_path(&path).unwrap().relative_to(dir.path());
    assert_eq!(config.run.netlist, Some(dir.path().join("adder.v")));
    assert_eq!(config.report_options().format, ReportFormat::Json);
}

#[test]
fn test_unknown_key_rejected() {
    let err = from_str("[run]\nnetlst = \"c17.v\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_format_rejected() {
    let err = from_str("[report]\nformat = \"xml\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_empty_output_rejected() {
    let err = from_str("[run]\noutput = \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}
