//! Command-line tests for the faultsim binary

use std::path::Path;
use std::process::{Command, Output};

const C17: &str = "\
module c17 (N1, N2, N3, N6, N7, N22, N23);
  input N1, N2, N3, N6, N7;
  output N22, N23;
  wire N10, N11, N16, N19;
  nand NAND2_1 (N10, N1, N3);
  nand NAND2_2 (N11, N3, N6);
  nand NAND2_3 (N16, N2, N11);
  nand NAND2_4 (N19, N11, N7);
  nand NAND2_5 (N22, N10, N16);
  nand NAND2_6 (N23, N16, N19);
endmodule
";

fn faultsim(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_faultsim"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run faultsim")
}

fn write_inputs(dir: &Path, vectors: &str) {
    std::fs::write(dir.join("c17.v"), C17).unwrap();
    std::fs::write(dir.join("c17.vec"), vectors).unwrap();
}

#[test]
fn test_run_writes_default_report() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "0 0 0 0 0\n1 1 1 1 1\n");

    let output = faultsim(dir.path(), &["run", "c17.v", "c17.vec"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("86.36%"));

    let report = std::fs::read_to_string(dir.path().join("fault_stats.txt")).unwrap();
    assert!(report.starts_with("Fault Simulation Statistics\n"));
    assert!(report.contains("- Total Collapsed Faults: 22\n"));
    assert!(report.contains("- Detected Faults: 19\n"));
    assert!(report.contains("- Node: N23, Stuck-at-0\n"));
}

#[test]
fn test_run_json_to_named_output() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "0 0 0 0 0\n");

    let output = faultsim(
        dir.path(),
        &["run", "c17.v", "c17.vec", "-o", "stats.json", "--format", "json"],
    );
    assert!(output.status.success(), "{:?}", output);

    let contents = std::fs::read_to_string(dir.path().join("stats.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["total_faults"], 22);
    assert_eq!(value["vectors_applied"], 1);
}

#[test]
fn test_run_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "1 0 1 0 1\n");
    std::fs::write(
        dir.path().join("faultsim.toml"),
        "[run]\nnetlist = \"c17.v\"\nvectors = \"c17.vec\"\noutput = \"c17_stats.txt\"\n\n[report]\nfault_lists = false\n",
    )
    .unwrap();

    let output = faultsim(dir.path(), &["run"]);
    assert!(output.status.success(), "{:?}", output);

    let report = std::fs::read_to_string(dir.path().join("c17_stats.txt")).unwrap();
    assert!(report.contains("- Test Vectors Applied: 1\n"));
    assert!(!report.contains("List of Detected Faults"));
}

#[test]
fn test_arity_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "0 1 0\n");

    let output = faultsim(dir.path(), &["run", "c17.v", "c17.vec"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("fault_stats.txt").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Fault simulation aborted"));
}

#[test]
fn test_missing_netlist_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("c17.vec"), "0 0 0 0 0\n").unwrap();

    let output = faultsim(dir.path(), &["run", "missing.v", "c17.vec"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse Verilog file"));
}

#[test]
fn test_faults_listing() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "");

    let output = faultsim(dir.path(), &["faults", "c17.v"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 22);
    assert_eq!(lines[0], "N1 sa0");
    assert_eq!(lines[1], "N1 sa1");
}

#[test]
fn test_info_reports_unresolved_inputs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("dangling.v"),
        "module top (a, y);\n  input a;\n  output y;\n  and g1 (y, a, ghost);\nendmodule\n",
    )
    .unwrap();

    let output = faultsim(dir.path(), &["info", "dangling.v"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Module:          top"));
    assert!(stdout.contains("Faults:          4"));
    assert!(stdout.contains("g1 <- ghost"));
}
