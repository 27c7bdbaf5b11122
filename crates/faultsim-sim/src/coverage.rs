//! Fault coverage aggregation
//!
//! Collects the counts and fault listings handed to the report writer.

use crate::circuit::Circuit;
use crate::fault::FaultDescriptor;
use serde::{Deserialize, Serialize, Serializer};

/// Coverage percentage; 0.0 for an empty fault list
pub fn coverage_percent(detected: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        detected as f64 / total as f64 * 100.0
    }
}

fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}

/// Final results of a fault simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Module name, if declared
    pub module: Option<String>,
    pub primary_inputs: usize,
    pub primary_outputs: usize,
    /// Node count, primary inputs included
    pub nodes: usize,
    pub total_faults: usize,
    pub vectors_applied: usize,
    pub detected: usize,
    pub undetected: usize,
    /// Fault coverage as percentage, serialized with two decimals
    #[serde(serialize_with = "serialize_two_decimals")]
    pub coverage: f64,
    /// Detected faults in fault-list order
    pub detected_faults: Vec<FaultDescriptor>,
    /// Undetected faults in fault-list order
    pub undetected_faults: Vec<FaultDescriptor>,
}

impl CoverageReport {
    /// Tally the circuit's fault list after `vectors_applied` vectors
    pub fn from_circuit(circuit: &Circuit, vectors_applied: usize) -> Self {
        let (detected, undetected): (Vec<_>, Vec<_>) =
            circuit.faults().iter().partition(|f| f.is_detected());

        let total_faults = circuit.num_faults();
        CoverageReport {
            module: circuit.name().map(str::to_string),
            primary_inputs: circuit.primary_inputs().len(),
            primary_outputs: circuit.primary_outputs().len(),
            nodes: circuit.num_nodes(),
            total_faults,
            vectors_applied,
            detected: detected.len(),
            undetected: undetected.len(),
            coverage: coverage_percent(detected.len(), total_faults),
            detected_faults: detected.iter().map(|f| f.descriptor()).collect(),
            undetected_faults: undetected.iter().map(|f| f.descriptor()).collect(),
        }
    }

    /// Coverage with two decimals, e.g. "50.00"
    pub fn coverage_display(&self) -> String {
        format!("{:.2}", self.coverage)
    }
}
