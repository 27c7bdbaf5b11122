//! Netlist representation handed from the parser to the circuit builder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate kinds understood by the simulator
///
/// Primary inputs are modeled as zero-input nodes of kind
/// [`GateKind::PrimaryInput`]. [`GateKind::Output`] is part of the
/// vocabulary only; primary outputs are plain signal references and no node
/// is ever built with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    PrimaryInput,
    Output,
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
    Buffer,
}

impl GateKind {
    /// Map a Verilog primitive keyword to a gate kind
    ///
    /// Only gate primitives are recognized; `input`/`output` are
    /// declarations, not gates, and return `None`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "and" => Some(GateKind::And),
            "or" => Some(GateKind::Or),
            "not" => Some(GateKind::Not),
            "nand" => Some(GateKind::Nand),
            "nor" => Some(GateKind::Nor),
            "xor" => Some(GateKind::Xor),
            "xnor" => Some(GateKind::Xnor),
            "buf" => Some(GateKind::Buffer),
            _ => None,
        }
    }

    /// Verilog keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            GateKind::PrimaryInput => "input",
            GateKind::Output => "output",
            GateKind::And => "and",
            GateKind::Or => "or",
            GateKind::Not => "not",
            GateKind::Nand => "nand",
            GateKind::Nor => "nor",
            GateKind::Xor => "xor",
            GateKind::Xnor => "xnor",
            GateKind::Buffer => "buf",
        }
    }

    /// Number of inputs a gate of this kind takes
    pub fn arity(self) -> usize {
        match self {
            GateKind::PrimaryInput | GateKind::Output => 0,
            GateKind::Not | GateKind::Buffer => 1,
            GateKind::And
            | GateKind::Or
            | GateKind::Nand
            | GateKind::Nor
            | GateKind::Xor
            | GateKind::Xnor => 2,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One gate instantiation as authored in the netlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateInstance {
    pub kind: GateKind,
    /// Instance name (e.g., "NAND2_1")
    pub name: String,
    /// Signal driven by this gate
    pub output: String,
    /// Input signal references in port order
    pub inputs: Vec<String>,
}

impl GateInstance {
    pub fn new(
        kind: GateKind,
        name: impl Into<String>,
        output: impl Into<String>,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            output: output.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

/// A parsed combinational module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlistDesc {
    /// Module name, if a `module` header was present
    pub module_name: Option<String>,
    /// Primary input names in declaration order
    pub primary_inputs: Vec<String>,
    /// Primary output names in declaration order
    pub primary_outputs: Vec<String>,
    /// Gate instances in declaration order
    pub instances: Vec<GateInstance>,
}

impl NetlistDesc {
    /// Create an empty netlist
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.primary_inputs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_outputs(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.primary_outputs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_gate(mut self, gate: GateInstance) -> Self {
        self.instances.push(gate);
        self
    }
}
