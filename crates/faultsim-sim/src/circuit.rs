//! Circuit graph
//!
//! An arena of nodes owned by the [`Circuit`]; fanin and fanout edges are
//! plain [`NodeId`] indices into that arena. Primary inputs become
//! zero-input nodes of kind [`GateKind::PrimaryInput`] placed ahead of the
//! gate instances, and node order is declaration order.
//!
//! Node order doubles as evaluation order. The builder does not sort: a
//! netlist whose drivers are not declared before their consumers simulates
//! with `Unknown` on the forward-referenced inputs.
//! [`Circuit::forward_references`] reports such edges.

use crate::error::{CircuitError, SimError};
use crate::fault::{Fault, FaultId};
use crate::logic::{evaluate_gate, LogicValue};
use faultsim_netlist::{GateKind, NetlistDesc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Unique identifier for a node in the circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A primary input or gate in the circuit graph
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) output: String,
    pub(crate) kind: GateKind,
    /// Input signal references as authored
    pub(crate) inputs: Vec<String>,
    /// Resolved drivers, one slot per input; `None` where resolution missed
    pub(crate) fanins: Vec<Option<NodeId>>,
    /// Consumers of this node's output
    pub(crate) fanouts: IndexSet<NodeId>,
    pub(crate) value: LogicValue,
    /// Stuck-at-0 and stuck-at-1 slots, once the fault list exists
    pub(crate) faults: Option<[FaultId; 2]>,
}

impl Node {
    fn new(id: NodeId, kind: GateKind, name: &str, output: &str, inputs: &[String]) -> Self {
        Self {
            id,
            name: name.to_string(),
            output: output.to_string(),
            kind,
            inputs: inputs.to_vec(),
            fanins: Vec::with_capacity(inputs.len()),
            fanouts: IndexSet::new(),
            value: LogicValue::Unknown,
            faults: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output signal name
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn fanins(&self) -> &[Option<NodeId>] {
        &self.fanins
    }

    pub fn fanouts(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.fanouts.iter().copied()
    }

    pub fn fanout_count(&self) -> usize {
        self.fanouts.len()
    }

    /// Value from the most recent propagation pass
    pub fn value(&self) -> LogicValue {
        self.value
    }

    pub fn faults(&self) -> Option<[FaultId; 2]> {
        self.faults
    }

    pub fn is_primary_input(&self) -> bool {
        self.kind == GateKind::PrimaryInput
    }
}

/// A fanin edge whose driver is declared at or after its consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardReference {
    pub node: String,
    pub signal: String,
    pub driver: String,
}

/// An input reference that did not resolve to any node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedInput {
    pub node: String,
    pub signal: String,
}

/// A combinational circuit: node arena, port lists and fault list
#[derive(Debug, Clone)]
pub struct Circuit {
    pub(crate) name: Option<String>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) primary_inputs: Vec<String>,
    pub(crate) primary_outputs: Vec<String>,
    /// Primary-input node per position in `primary_inputs`
    pub(crate) input_nodes: Vec<NodeId>,
    /// Instance names and output names, both pointing at the owning node
    pub(crate) aliases: IndexMap<String, NodeId>,
    pub(crate) faults: Vec<Fault>,
}

impl Circuit {
    /// Build and link the circuit graph from a parsed netlist
    ///
    /// One `PrimaryInput` node is created per primary input, followed by one
    /// node per gate instance. Each input reference is then resolved by
    /// exact match against any node's name or output name. A miss leaves the
    /// fanin slot empty; it is not an error.
    pub fn from_netlist(desc: &NetlistDesc) -> Result<Self, CircuitError> {
        let mut nodes = Vec::with_capacity(desc.primary_inputs.len() + desc.instances.len());

        for name in &desc.primary_inputs {
            let id = NodeId(nodes.len() as u32);
            nodes.push(Node::new(id, GateKind::PrimaryInput, name, name, &[]));
        }
        for gate in &desc.instances {
            if gate.inputs.len() > 2 {
                return Err(CircuitError::TooManyInputs {
                    node: gate.name.clone(),
                    count: gate.inputs.len(),
                });
            }
            let id = NodeId(nodes.len() as u32);
            nodes.push(Node::new(id, gate.kind, &gate.name, &gate.output, &gate.inputs));
        }

        let aliases = build_alias_index(&nodes)?;
        let input_nodes = (0..desc.primary_inputs.len())
            .map(|i| NodeId(i as u32))
            .collect();

        let mut circuit = Self {
            name: desc.module_name.clone(),
            nodes,
            primary_inputs: desc.primary_inputs.clone(),
            primary_outputs: desc.primary_outputs.clone(),
            input_nodes,
            aliases,
            faults: Vec::new(),
        };
        circuit.link();
        Ok(circuit)
    }

    /// Resolve every input reference into fanin and fanout edges
    fn link(&mut self) {
        let mut unresolved = 0usize;
        for consumer in 0..self.nodes.len() {
            let resolved: Vec<Option<NodeId>> = self.nodes[consumer]
                .inputs
                .iter()
                .map(|signal| self.aliases.get(signal).copied())
                .collect();

            for (signal, driver) in self.nodes[consumer].inputs.iter().zip(&resolved) {
                if driver.is_none() {
                    debug!(node = %self.nodes[consumer].name, %signal, "unresolved fanin");
                    unresolved += 1;
                }
            }
            for driver in resolved.iter().flatten() {
                self.nodes[driver.index()]
                    .fanouts
                    .insert(NodeId(consumer as u32));
            }
            self.nodes[consumer].fanins = resolved;
        }

        if unresolved > 0 {
            warn!(
                count = unresolved,
                "input references did not resolve and will evaluate as unknown"
            );
        }
    }

    /// Module name, if the netlist declared one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Nodes in declaration (and evaluation) order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Look up a node by instance name or output name
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.aliases.get(name).map(|id| &self.nodes[id.index()])
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn primary_inputs(&self) -> &[String] {
        &self.primary_inputs
    }

    pub fn primary_outputs(&self) -> &[String] {
        &self.primary_outputs
    }

    /// Assign a vector to the primary inputs and evaluate every gate once
    ///
    /// `vector[i]` drives the `i`-th primary input; a vector of any other
    /// width is rejected before any value changes. Gate values are cleared to
    /// `Unknown` first, so a fanin that has not been evaluated yet in this
    /// pass reads as `Unknown`, never as a stale value from the previous
    /// vector.
    pub fn propagate(&mut self, vector: &[bool]) -> Result<(), SimError> {
        if vector.len() != self.input_nodes.len() {
            return Err(SimError::ArityMismatch {
                expected: self.input_nodes.len(),
                found: vector.len(),
            });
        }

        for node in &mut self.nodes {
            node.value = LogicValue::Unknown;
        }
        for (id, &bit) in self.input_nodes.iter().zip(vector) {
            self.nodes[id.index()].value = LogicValue::from_bit(bit);
        }

        for index in 0..self.nodes.len() {
            let node = &self.nodes[index];
            if node.is_primary_input() {
                continue;
            }
            // At most two fanins; absent slots read Unknown
            let mut inputs = [LogicValue::Unknown; 2];
            for (slot, fanin) in inputs.iter_mut().zip(&node.fanins) {
                if let Some(id) = fanin {
                    *slot = self.nodes[id.index()].value;
                }
            }
            let value = evaluate_gate(node.kind, &inputs);
            self.nodes[index].value = value;
        }
        Ok(())
    }

    /// Current value of a signal by name
    pub fn value_of(&self, name: &str) -> Option<LogicValue> {
        self.node_by_name(name).map(Node::value)
    }

    /// Current primary output values; outputs with no driver read `Unknown`
    pub fn primary_output_values(&self) -> Vec<(String, LogicValue)> {
        self.primary_outputs
            .iter()
            .map(|name| (name.clone(), self.value_of(name).unwrap_or_default()))
            .collect()
    }

    /// Fanin edges that violate declaration-order-as-topological-order
    pub fn forward_references(&self) -> Vec<ForwardReference> {
        let mut found = Vec::new();
        for node in &self.nodes {
            for (signal, fanin) in node.inputs.iter().zip(&node.fanins) {
                if let Some(driver) = fanin {
                    if driver.index() >= node.id.index() {
                        found.push(ForwardReference {
                            node: node.name.clone(),
                            signal: signal.clone(),
                            driver: self.nodes[driver.index()].name.clone(),
                        });
                    }
                }
            }
        }
        found
    }

    /// Input references that resolved to no node
    pub fn unresolved_inputs(&self) -> Vec<UnresolvedInput> {
        let mut found = Vec::new();
        for node in &self.nodes {
            for (signal, fanin) in node.inputs.iter().zip(&node.fanins) {
                if fanin.is_none() {
                    found.push(UnresolvedInput {
                        node: node.name.clone(),
                        signal: signal.clone(),
                    });
                }
            }
        }
        found
    }
}

/// Map both aliases of every node to its id
///
/// A node may use the same string as name and output (every primary input
/// does). Any other collision is a duplicate.
fn build_alias_index(nodes: &[Node]) -> Result<IndexMap<String, NodeId>, CircuitError> {
    let mut aliases = IndexMap::with_capacity(nodes.len() * 2);
    for node in nodes {
        for alias in [&node.name, &node.output] {
            match aliases.get(alias.as_str()) {
                Some(&existing) if existing != node.id => {
                    return Err(CircuitError::DuplicateName(alias.clone()));
                }
                Some(_) => {}
                None => {
                    aliases.insert(alias.clone(), node.id);
                }
            }
        }
    }
    Ok(aliases)
}
