//! Gate-Level Logic Evaluation
//!
//! Three-valued evaluation of the two-input gate primitives.
//!
//! The resolution policy is not textbook ternary logic:
//!
//! - AND/OR/NAND/NOR resolve every combination other than the controlling
//!   one to a definite value, so `AND(0, X) = 0` but also `AND(1, X) = 0`.
//! - XOR/XNOR compare the three-valued symbols directly, so `XOR(X, 0) = 1`.
//! - NOT and BUF are the only gates that propagate `X`.

use faultsim_netlist::GateKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value carried by a signal during simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogicValue {
    Zero,
    One,
    /// Uninitialized, or driven through an unresolved reference
    #[default]
    Unknown,
}

impl LogicValue {
    /// Convert a vector bit to a logic value
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            LogicValue::One
        } else {
            LogicValue::Zero
        }
    }

    /// Complement; `Unknown` stays `Unknown`
    pub fn complement(self) -> Self {
        match self {
            LogicValue::Zero => LogicValue::One,
            LogicValue::One => LogicValue::Zero,
            LogicValue::Unknown => LogicValue::Unknown,
        }
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicValue::Zero => write!(f, "0"),
            LogicValue::One => write!(f, "1"),
            LogicValue::Unknown => write!(f, "X"),
        }
    }
}

/// Evaluate a gate over its input values
///
/// Missing inputs read as `Unknown`. Primary inputs are assigned, not
/// evaluated, so `PrimaryInput` (and the unused `Output` marker) evaluate to
/// `Unknown`.
pub fn evaluate_gate(kind: GateKind, inputs: &[LogicValue]) -> LogicValue {
    let a = inputs.first().copied().unwrap_or_default();
    let b = inputs.get(1).copied().unwrap_or_default();
    let one = LogicValue::One;

    match kind {
        GateKind::And => LogicValue::from_bit(a == one && b == one),
        GateKind::Or => LogicValue::from_bit(a == one || b == one),
        GateKind::Nand => LogicValue::from_bit(!(a == one && b == one)),
        GateKind::Nor => LogicValue::from_bit(!(a == one || b == one)),
        GateKind::Xor => LogicValue::from_bit(a != b),
        GateKind::Xnor => LogicValue::from_bit(a == b),
        GateKind::Not => a.complement(),
        GateKind::Buffer => a,
        GateKind::PrimaryInput | GateKind::Output => LogicValue::Unknown,
    }
}
