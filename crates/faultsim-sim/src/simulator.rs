//! Pattern-driven fault simulator
//!
//! Applies test vectors strictly in order. For each vector the whole circuit
//! is propagated first, then every fault is checked against the fresh node
//! values. Detection accumulates across the run and is never cleared.
//!
//! # Example
//!
//! ```
//! use faultsim_netlist::{GateInstance, GateKind, NetlistDesc};
//! use faultsim_sim::{Circuit, FaultSimulator, VectorSet};
//!
//! let desc = NetlistDesc::new()
//!     .with_inputs(["a", "b"])
//!     .with_outputs(["y"])
//!     .with_gate(GateInstance::new(GateKind::And, "g1", "y", ["a", "b"]));
//! let mut circuit = Circuit::from_netlist(&desc).unwrap();
//!
//! let vectors = VectorSet::from_rows([vec![false, false], vec![true, true]]);
//! let report = FaultSimulator::new(&mut circuit).run(&vectors).unwrap();
//! assert_eq!(report.detected, 6);
//! ```

use crate::circuit::Circuit;
use crate::coverage::CoverageReport;
use crate::error::SimError;
use crate::vectors::VectorSet;
use tracing::{debug, info};

/// Drives vectors through a circuit and accumulates fault detection
pub struct FaultSimulator<'c> {
    circuit: &'c mut Circuit,
    vectors_applied: usize,
}

impl<'c> FaultSimulator<'c> {
    /// Create a simulator, generating the fault list if it does not exist yet
    pub fn new(circuit: &'c mut Circuit) -> Self {
        circuit.generate_faults();
        Self {
            circuit,
            vectors_applied: 0,
        }
    }

    /// Check that every vector drives exactly the circuit's primary inputs
    ///
    /// An empty set never mismatches.
    pub fn check_arity(&self, vectors: &VectorSet) -> Result<(), SimError> {
        let expected = self.circuit.primary_inputs().len();
        if !vectors.is_empty() && vectors.width != expected {
            return Err(SimError::ArityMismatch {
                expected,
                found: vectors.width,
            });
        }
        Ok(())
    }

    /// Propagate one vector and run fault detection on the result
    ///
    /// Returns the number of faults this vector detected for the first time.
    pub fn apply_vector(&mut self, vector: &[bool]) -> Result<usize, SimError> {
        self.circuit.propagate(vector)?;
        let newly_detected = self.circuit.detect_faults();
        self.vectors_applied += 1;

        debug!(
            vector = self.vectors_applied,
            newly_detected,
            total_detected = self.circuit.num_detected(),
            "applied test vector"
        );
        Ok(newly_detected)
    }

    /// Apply a whole vector set and report coverage
    ///
    /// The arity precondition is checked once, before any vector is applied;
    /// on mismatch the circuit is left untouched.
    pub fn run(mut self, vectors: &VectorSet) -> Result<CoverageReport, SimError> {
        self.check_arity(vectors)?;

        info!(
            vectors = vectors.len(),
            faults = self.circuit.num_faults(),
            "running fault simulation"
        );
        for vector in vectors.iter() {
            self.apply_vector(&vector.bits)?;
        }

        Ok(self.coverage())
    }

    pub fn vectors_applied(&self) -> usize {
        self.vectors_applied
    }

    /// Coverage after the vectors applied so far
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::from_circuit(&*self.circuit, self.vectors_applied)
    }

    pub fn circuit(&self) -> &Circuit {
        &*self.circuit
    }
}
