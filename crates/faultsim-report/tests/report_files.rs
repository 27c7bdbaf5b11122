//! Report rendering tests

use faultsim_netlist::{GateInstance, GateKind, NetlistDesc};
use faultsim_report::{write_report, write_report_file, ReportFormat, ReportOptions};
use faultsim_sim::{Circuit, CoverageReport, FaultSimulator, VectorSet};

fn and_report(rows: Vec<Vec<bool>>) -> CoverageReport {
    let desc = NetlistDesc::new()
        .with_inputs(["a", "b"])
        .with_outputs(["y"])
        .with_gate(GateInstance::new(GateKind::And, "g1", "y", ["a", "b"]));
    let mut circuit = Circuit::from_netlist(&desc).unwrap();
    FaultSimulator::new(&mut circuit)
        .run(&VectorSet::from_rows(rows))
        .unwrap()
}

fn render(report: &CoverageReport, options: &ReportOptions) -> String {
    let mut buffer = Vec::new();
    write_report(&mut buffer, report, options).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_text_report_layout() {
    let report = and_report(vec![vec![false, false]]);
    let text = render(&report, &ReportOptions::default());

    let expected = "\
Fault Simulation Statistics
=============================

Circuit Details:
- Primary Inputs: 2
- Primary Outputs: 1
- Gates: 3

Faults:
- Total Collapsed Faults: 6

Simulation Results:
- Test Vectors Applied: 1
- Detected Faults: 3
- Undetected Faults: 3
- Fault Coverage: 50.00%

List of Detected Faults:
- Node: a, Stuck-at-1
- Node: b, Stuck-at-1
- Node: y, Stuck-at-1

List of Undetected Faults:
- Node: a, Stuck-at-0
- Node: b, Stuck-at-0
- Node: y, Stuck-at-0
";
    assert_eq!(text, expected);
}

#[test]
fn test_text_report_without_lists() {
    let report = and_report(vec![vec![false, false], vec![true, true]]);
    let options = ReportOptions {
        format: ReportFormat::Text,
        fault_lists: false,
    };
    let text = render(&report, &options);

    assert!(text.ends_with("- Fault Coverage: 100.00%\n"));
    assert!(!text.contains("List of Detected Faults"));
}

#[test]
fn test_zero_vector_report() {
    let report = and_report(Vec::new());
    let text = render(&report, &ReportOptions::default());

    assert!(text.contains("- Test Vectors Applied: 0\n"));
    assert!(text.contains("- Fault Coverage: 0.00%\n"));
    assert!(text.contains("List of Detected Faults:\n\nList of Undetected Faults:\n"));
}

#[test]
fn test_json_report_file() {
    let report = and_report(vec![vec![true, true]]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    let options = ReportOptions {
        format: ReportFormat::Json,
        fault_lists: true,
    };

    write_report_file(&path, &report, &options).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["total_faults"], 6);
    assert_eq!(value["detected"], 3);
    assert_eq!(value["coverage"], 50.0);
    assert_eq!(value["detected_faults"][0]["node_name"], "a");
    assert_eq!(value["detected_faults"][0]["stuck_at_value"], 0);

    let parsed: CoverageReport = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_json_coverage_has_two_decimals() {
    let desc = faultsim_netlist::from_str(
        "module c17 (N1, N2, N3, N6, N7, N22, N23);
  input N1, N2, N3, N6, N7;
  output N22, N23;
  nand NAND2_1 (N10, N1, N3);
  nand NAND2_2 (N11, N3, N6);
  nand NAND2_3 (N16, N2, N11);
  nand NAND2_4 (N19, N11, N7);
  nand NAND2_5 (N22, N10, N16);
  nand NAND2_6 (N23, N16, N19);
endmodule",
    )
    .unwrap();
    let mut circuit = Circuit::from_netlist(&desc).unwrap();
    let report = FaultSimulator::new(&mut circuit)
        .run(&VectorSet::from_rows([vec![false; 5], vec![true; 5]]))
        .unwrap();
    let options = ReportOptions {
        format: ReportFormat::Json,
        fault_lists: false,
    };

    let json = render(&report, &options);
    assert!(json.contains("\"coverage\": 86.36,"), "{json}");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["coverage"], 86.36);
}

#[test]
fn test_json_without_lists_keeps_schema() {
    let report = and_report(vec![vec![true, true]]);
    let options = ReportOptions {
        format: ReportFormat::Json,
        fault_lists: false,
    };
    let value: serde_json::Value = serde_json::from_str(&render(&report, &options)).unwrap();
    assert_eq!(value["detected_faults"], serde_json::json!([]));
    assert_eq!(value["undetected"], 3);
}

#[test]
fn test_unwritable_path() {
    let report = and_report(Vec::new());
    let err = write_report_file(
        "/nonexistent/dir/stats.txt",
        &report,
        &ReportOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, faultsim_report::ReportError::Io { .. }));
}
