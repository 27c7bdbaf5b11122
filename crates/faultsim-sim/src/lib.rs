//! faultsim core - combinational stuck-at fault simulation
//!
//! Data flows strictly forward:
//!
//! ```text
//! NetlistDesc → Circuit::from_netlist → Circuit::generate_faults
//!     → per vector: Circuit::propagate → Circuit::detect_faults
//!     → CoverageReport
//! ```
//!
//! [`FaultSimulator`] drives the per-vector loop and enforces the vector
//! arity precondition once, before any vector is applied.
//!
//! Detection uses a controllability rule: a fault is marked detected when the
//! fault-free value at its site is the complement of its stuck value. The
//! difference is not required to reach a primary output.

pub mod circuit;
pub mod coverage;
pub mod error;
pub mod fault;
pub mod logic;
pub mod simulator;
pub mod vectors;

pub use circuit::{Circuit, ForwardReference, Node, NodeId, UnresolvedInput};
pub use coverage::{coverage_percent, CoverageReport};
pub use error::{CircuitError, SimError, VectorError};
pub use fault::{Fault, FaultDescriptor, FaultId, StuckAt};
pub use logic::{evaluate_gate, LogicValue};
pub use simulator::FaultSimulator;
pub use vectors::{TestVector, VectorSet};
