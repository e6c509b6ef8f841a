use ahash::AHashSet;
use itertools::Itertools;

use crate::circuit::model::Circuit;
use crate::error::ValidationError;
use crate::eval::schedule::{DependencyMap, topological_order};

/// Checks a circuit's structural integrity without evaluating it.
///
/// The checks run in a fixed order and the first violation is returned:
/// at least one node, unique node IDs, edge endpoints that exist, and a
/// dependency graph free of cycles. A circuit that passes is guaranteed
/// to be schedulable.
pub fn validate(circuit: &Circuit) -> Result<(), ValidationError> {
    if circuit.nodes.is_empty() {
        return Err(ValidationError::NoNodes);
    }

    if let Some(duplicate) = circuit.nodes.iter().map(|n| n.id()).duplicates().next() {
        return Err(ValidationError::DuplicateNodeId(duplicate.to_string()));
    }

    let known_ids: AHashSet<&str> = circuit.nodes.iter().map(|n| n.id()).collect();
    for edge in &circuit.edges {
        if !known_ids.contains(edge.source_node_id.as_str()) {
            return Err(ValidationError::UnknownEdgeSource(
                edge.source_node_id.clone(),
            ));
        }
        if !known_ids.contains(edge.target_node_id.as_str()) {
            return Err(ValidationError::UnknownEdgeTarget(
                edge.target_node_id.clone(),
            ));
        }
    }

    topological_order(&DependencyMap::from_circuit(circuit))?;

    Ok(())
}

impl Circuit {
    /// Shorthand for [`validate`] on this circuit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}
