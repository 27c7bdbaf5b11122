//! Single stuck-at fault model
//!
//! Every node carries exactly two faults: stuck-at-0 at slot 0 and
//! stuck-at-1 at slot 1. Primary inputs are included. No equivalence
//! collapsing is performed, so a circuit with `n` nodes always has `2n`
//! faults.

use crate::circuit::{Circuit, NodeId};
use crate::logic::LogicValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Unique identifier for a fault in the circuit's flat fault list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaultId(pub u32);

impl FaultId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Value a faulty signal is stuck at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StuckAt {
    Zero,
    One,
}

impl StuckAt {
    /// Both polarities in fault-slot order
    pub const ALL: [StuckAt; 2] = [StuckAt::Zero, StuckAt::One];

    /// Numeric stuck value (0 or 1)
    pub fn value(self) -> u8 {
        match self {
            StuckAt::Zero => 0,
            StuckAt::One => 1,
        }
    }

    /// The fault-free value that exposes this fault at its site
    pub fn exciting_value(self) -> LogicValue {
        match self {
            StuckAt::Zero => LogicValue::One,
            StuckAt::One => LogicValue::Zero,
        }
    }
}

/// A single stuck-at fault on a node's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    node: NodeId,
    node_name: String,
    stuck_at: StuckAt,
    detected: bool,
}

impl Fault {
    pub(crate) fn new(node: NodeId, node_name: String, stuck_at: StuckAt) -> Self {
        Self {
            node,
            node_name,
            stuck_at,
            detected: false,
        }
    }

    /// Output signal name of the faulty node
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn stuck_at(&self) -> StuckAt {
        self.stuck_at
    }

    pub fn stuck_at_value(&self) -> u8 {
        self.stuck_at.value()
    }

    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Whether a fault-free value at the site differs from the stuck value
    ///
    /// `Unknown` never excites a fault.
    pub fn is_excited_by(&self, value: LogicValue) -> bool {
        value == self.stuck_at.exciting_value()
    }

    /// Mark detected; detection is never cleared once set
    pub(crate) fn mark_detected(&mut self) -> bool {
        let newly = !self.detected;
        self.detected = true;
        newly
    }

    pub fn descriptor(&self) -> FaultDescriptor {
        FaultDescriptor {
            node_name: self.node_name.clone(),
            stuck_at_value: self.stuck_at.value(),
        }
    }
}

/// Fault identity as exposed to reports
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaultDescriptor {
    pub node_name: String,
    pub stuck_at_value: u8,
}

impl fmt::Display for FaultDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sa{}", self.node_name, self.stuck_at_value)
    }
}

impl Circuit {
    /// Attach the stuck-at-0/stuck-at-1 pair to every node
    ///
    /// Faults are appended in node order, so fault `2i` is node `i`
    /// stuck-at-0 and fault `2i + 1` is node `i` stuck-at-1. Calling this on a
    /// circuit that already has its fault list leaves it (and any detection
    /// state) untouched. Returns the fault count.
    pub fn generate_faults(&mut self) -> usize {
        if self.faults.is_empty() && !self.nodes.is_empty() {
            let mut faults = Vec::with_capacity(self.nodes.len() * 2);
            for node in &mut self.nodes {
                let mut slots = [FaultId(0); 2];
                for (slot, stuck_at) in StuckAt::ALL.into_iter().enumerate() {
                    slots[slot] = FaultId(faults.len() as u32);
                    faults.push(Fault::new(node.id, node.output.clone(), stuck_at));
                }
                node.faults = Some(slots);
            }
            self.faults = faults;
            debug!(faults = self.faults.len(), "generated stuck-at fault list");
        }
        self.faults.len()
    }

    /// The flat fault list in generation order
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    pub fn fault(&self, id: FaultId) -> Option<&Fault> {
        self.faults.get(id.index())
    }

    pub fn num_faults(&self) -> usize {
        self.faults.len()
    }

    pub fn num_detected(&self) -> usize {
        self.faults.iter().filter(|f| f.is_detected()).count()
    }

    /// Mark every fault excited by the current node values
    ///
    /// Runs after [`Circuit::propagate`] for each vector. Returns the number
    /// of faults detected for the first time.
    pub fn detect_faults(&mut self) -> usize {
        let nodes = &self.nodes;
        let mut newly_detected = 0;
        for fault in &mut self.faults {
            let value = nodes[fault.node.index()].value;
            if fault.is_excited_by(value) && fault.mark_detected() {
                newly_detected += 1;
            }
        }
        newly_detected
    }
}
