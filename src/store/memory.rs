use ahash::{AHashMap, AHashSet};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{
    CircuitStore, NOT_FOUND_TITLE, RECURSIVE_REFERENCE_TITLE, REFERENCED_CIRCUIT_TITLE,
};
use crate::circuit::{Circuit, Edge, Node};
use crate::error::StoreError;

/// An in-memory [`CircuitStore`] keyed by circuit ID.
///
/// Records are held flat: nested circuit references carry only the
/// referenced ID and are resolved into snapshots on every read.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    circuits: AHashMap<String, Circuit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    /// Resolves the nested references of a stored record into a snapshot.
    ///
    /// `resolving` carries the circuit IDs on the current resolution path.
    /// Hitting one of them again means a reference cycle, which is broken
    /// with a shallow stand-in instead of recursing forever. The ID is
    /// removed again on the way out so sibling branches still resolve it
    /// in full.
    fn hydrate(
        &self,
        circuit_id: &str,
        resolving: &mut AHashSet<String>,
    ) -> Result<Circuit, StoreError> {
        if resolving.contains(circuit_id) {
            return Ok(Circuit::new(circuit_id, RECURSIVE_REFERENCE_TITLE));
        }

        let record = self
            .circuits
            .get(circuit_id)
            .ok_or_else(|| StoreError::CircuitNotFound(circuit_id.to_string()))?;

        resolving.insert(circuit_id.to_string());
        let mut circuit = record.clone();
        for node in &mut circuit.nodes {
            if let Node::Circuit {
                id,
                circuit_id: Some(referenced_id),
                circuit: snapshot,
            } = node
            {
                match self.hydrate(referenced_id, resolving) {
                    Ok(nested) => *snapshot = Some(Arc::new(nested)),
                    Err(err) => {
                        warn!(
                            node = %id,
                            referenced = %referenced_id,
                            error = %err,
                            "failed to resolve nested circuit"
                        );
                        *snapshot = Some(Arc::new(Circuit::new(
                            referenced_id.clone(),
                            NOT_FOUND_TITLE,
                        )));
                    }
                }
            }
        }
        resolving.remove(circuit_id);

        Ok(circuit)
    }
}

// Stored records stay flat; snapshots are rebuilt on every read.
fn flatten(circuit: &mut Circuit) {
    for node in &mut circuit.nodes {
        if let Node::Circuit {
            circuit: snapshot, ..
        } = node
        {
            *snapshot = None;
        }
    }
}

impl CircuitStore for MemoryStore {
    fn create_circuit(&mut self, mut circuit: Circuit) -> Result<(), StoreError> {
        if self.circuits.contains_key(&circuit.id) {
            return Err(StoreError::DuplicateCircuit(circuit.id));
        }
        flatten(&mut circuit);
        debug!(circuit = %circuit.id, title = %circuit.title, "storing circuit");
        self.circuits.insert(circuit.id.clone(), circuit);
        Ok(())
    }

    fn add_node(&mut self, circuit_id: &str, mut node: Node) -> Result<(), StoreError> {
        let circuit = self
            .circuits
            .get_mut(circuit_id)
            .ok_or_else(|| StoreError::CircuitNotFound(circuit_id.to_string()))?;
        if circuit.node(node.id()).is_some() {
            return Err(StoreError::DuplicateNode {
                circuit_id: circuit_id.to_string(),
                node_id: node.id().to_string(),
            });
        }
        if let Node::Circuit {
            circuit: snapshot, ..
        } = &mut node
        {
            *snapshot = None;
        }
        circuit.nodes.push(node);
        Ok(())
    }

    fn add_edge(&mut self, circuit_id: &str, edge: Edge) -> Result<(), StoreError> {
        let circuit = self
            .circuits
            .get_mut(circuit_id)
            .ok_or_else(|| StoreError::CircuitNotFound(circuit_id.to_string()))?;
        if circuit.edges.iter().any(|e| e.id == edge.id) {
            return Err(StoreError::DuplicateEdge {
                circuit_id: circuit_id.to_string(),
                edge_id: edge.id,
            });
        }
        circuit.edges.push(edge);
        Ok(())
    }

    fn get_circuit(&self, circuit_id: &str) -> Result<Circuit, StoreError> {
        let mut resolving = AHashSet::new();
        self.hydrate(circuit_id, &mut resolving)
    }

    fn get_all_circuits(&self) -> Result<Vec<Circuit>, StoreError> {
        let mut circuits: Vec<Circuit> = self
            .circuits
            .values()
            .cloned()
            .map(|mut circuit| {
                // Listings hand out placeholders instead of resolving.
                for node in &mut circuit.nodes {
                    if let Node::Circuit {
                        circuit_id: Some(referenced_id),
                        circuit: snapshot,
                        ..
                    } = node
                    {
                        *snapshot = Some(Arc::new(Circuit::new(
                            referenced_id.clone(),
                            REFERENCED_CIRCUIT_TITLE,
                        )));
                    }
                }
                circuit
            })
            .collect();
        circuits.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(circuits)
    }

    fn update_circuit(&mut self, mut circuit: Circuit) -> Result<(), StoreError> {
        if !self.circuits.contains_key(&circuit.id) {
            return Err(StoreError::CircuitNotFound(circuit.id));
        }
        flatten(&mut circuit);
        self.circuits.insert(circuit.id.clone(), circuit);
        Ok(())
    }

    fn delete_circuit(&mut self, circuit_id: &str) -> Result<(), StoreError> {
        self.circuits
            .remove(circuit_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::CircuitNotFound(circuit_id.to_string()))
    }
}
