use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

use crate::circuit::Circuit;
use crate::error::CycleError;

/// The dependency graph of a circuit: for every node, the IDs of the nodes
/// whose values it consumes. Nodes keep the order in which they were
/// declared, which makes scheduling deterministic.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    order: Vec<String>,
    predecessors: AHashMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the dependency map of a circuit. Every node gets an entry,
    /// including nodes without incoming edges; edges pointing at a target
    /// that is not part of the circuit are left to validation to reject.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut map = Self::default();
        for node in &circuit.nodes {
            if !map.predecessors.contains_key(node.id()) {
                map.order.push(node.id().to_string());
                map.predecessors.insert(node.id().to_string(), Vec::new());
            }
        }
        for edge in &circuit.edges {
            if let Some(preds) = map.predecessors.get_mut(edge.target_node_id.as_str()) {
                preds.push(edge.source_node_id.clone());
            }
        }
        map
    }

    /// Sets the predecessor list of a node. A node seen for the first time
    /// is appended to the declaration order; a known node keeps its
    /// position and has its predecessors replaced.
    pub fn insert(&mut self, node_id: impl Into<String>, predecessors: Vec<String>) {
        let node_id = node_id.into();
        if let Some(existing) = self.predecessors.get_mut(&node_id) {
            *existing = predecessors;
        } else {
            self.order.push(node_id.clone());
            self.predecessors.insert(node_id, predecessors);
        }
    }

    /// Node IDs in declaration order.
    pub fn node_ids(&self) -> &[String] {
        &self.order
    }

    /// The predecessor IDs of a node, in edge declaration order. Unknown
    /// nodes have no predecessors.
    pub fn predecessors(&self, node_id: &str) -> &[String] {
        self.predecessors
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Linearizes a dependency map with Kahn's algorithm.
///
/// The returned order contains every node exactly once and places each node
/// after all of its predecessors. Nodes that become ready at the same time
/// are emitted in declaration order, so the schedule for a given circuit is
/// stable across runs and processes. If no complete order exists the graph
/// contains at least one cycle and [`CycleError`] is returned.
pub fn topological_order(deps: &DependencyMap) -> Result<Vec<String>, CycleError> {
    let mut in_degree: AHashMap<&str, usize> = AHashMap::with_capacity(deps.len());
    for node_id in deps.node_ids() {
        in_degree.insert(node_id.as_str(), deps.predecessors(node_id).len());
    }

    // Reverse adjacency, deduplicated per listing node: releasing a source
    // decrements each dependent once, so a predecessor listed twice keeps
    // one unit of in-degree forever and is reported as a cycle below.
    let mut dependents: AHashMap<&str, Vec<&str>> = AHashMap::with_capacity(deps.len());
    for node_id in deps.node_ids() {
        let mut seen: AHashSet<&str> = AHashSet::new();
        for source in deps.predecessors(node_id) {
            if seen.insert(source.as_str()) {
                dependents
                    .entry(source.as_str())
                    .or_default()
                    .push(node_id.as_str());
            }
        }
    }

    let mut queue: VecDeque<&str> = deps
        .node_ids()
        .iter()
        .filter(|id| deps.predecessors(id.as_str()).is_empty())
        .map(|id| id.as_str())
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(deps.len());
    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        if let Some(targets) = dependents.get(current) {
            for target in targets {
                if let Some(degree) = in_degree.get_mut(target) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(target);
                    }
                }
            }
        }
    }

    if order.len() != deps.len() {
        return Err(CycleError);
    }
    Ok(order)
}
