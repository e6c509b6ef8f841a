use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::circuit::{Circuit, Edge, EvaluationResult, InputNodeValue, Node};
use crate::error::{ServiceError, ValidationError};
use crate::store::CircuitStore;

/// The command layer tying circuit construction to a backing store.
///
/// Node and edge creation go through here so rules that span the whole
/// circuit (endpoints that exist, no self-loops, no duplicate
/// connections) are enforced before anything is persisted. Created
/// entities receive server-assigned UUIDs.
pub struct CircuitService<S: CircuitStore> {
    store: S,
}

impl<S: CircuitStore> CircuitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an empty circuit with a fresh ID and returns it.
    pub fn create_circuit(&mut self, title: &str) -> Result<Circuit, ServiceError> {
        if title.is_empty() {
            return Err(ServiceError::EmptyTitle);
        }
        let circuit = Circuit::new(Uuid::new_v4().to_string(), title);
        debug!(circuit = %circuit.id, title = %circuit.title, "creating circuit");
        self.store.create_circuit(circuit.clone())?;
        Ok(circuit)
    }

    /// Fetches a circuit with nested references resolved.
    pub fn get_circuit(&self, circuit_id: &str) -> Result<Circuit, ServiceError> {
        if circuit_id.is_empty() {
            return Err(ServiceError::EmptyCircuitId);
        }
        Ok(self.store.get_circuit(circuit_id)?)
    }

    /// Lists all circuits ordered by title.
    pub fn get_all_circuits(&self) -> Result<Vec<Circuit>, ServiceError> {
        Ok(self.store.get_all_circuits()?)
    }

    pub fn create_input_node(
        &mut self,
        circuit_id: &str,
        title: &str,
    ) -> Result<Node, ServiceError> {
        self.add_node(circuit_id, Node::input(Uuid::new_v4().to_string(), title))
    }

    pub fn create_output_node(
        &mut self,
        circuit_id: &str,
        title: &str,
    ) -> Result<Node, ServiceError> {
        self.add_node(circuit_id, Node::output(Uuid::new_v4().to_string(), title))
    }

    pub fn create_and_node(&mut self, circuit_id: &str) -> Result<Node, ServiceError> {
        self.add_node(circuit_id, Node::and(Uuid::new_v4().to_string()))
    }

    pub fn create_or_node(&mut self, circuit_id: &str) -> Result<Node, ServiceError> {
        self.add_node(circuit_id, Node::or(Uuid::new_v4().to_string()))
    }

    pub fn create_not_node(&mut self, circuit_id: &str) -> Result<Node, ServiceError> {
        self.add_node(circuit_id, Node::not(Uuid::new_v4().to_string()))
    }

    /// Creates a node referencing another stored circuit. The referenced
    /// circuit must exist at creation time; the returned node carries its
    /// resolved snapshot, while the stored record keeps only the ID.
    pub fn create_circuit_node(
        &mut self,
        circuit_id: &str,
        referenced_circuit_id: &str,
    ) -> Result<Node, ServiceError> {
        if circuit_id.is_empty() {
            return Err(ServiceError::EmptyCircuitId);
        }
        if referenced_circuit_id.is_empty() {
            return Err(ServiceError::EmptyReferencedCircuitId);
        }
        let referenced = self
            .store
            .get_circuit(referenced_circuit_id)
            .map_err(ServiceError::ReferencedCircuitNotFound)?;
        self.add_node(
            circuit_id,
            Node::Circuit {
                id: Uuid::new_v4().to_string(),
                circuit_id: Some(referenced_circuit_id.to_string()),
                circuit: Some(Arc::new(referenced)),
            },
        )
    }

    /// Connects two nodes of a circuit. Both endpoints must exist, an edge
    /// may not loop a node onto itself, and a source/target pair may only
    /// be connected once.
    pub fn create_edge(
        &mut self,
        circuit_id: &str,
        source_node_id: &str,
        target_node_id: &str,
    ) -> Result<Edge, ServiceError> {
        if circuit_id.is_empty() {
            return Err(ServiceError::EmptyCircuitId);
        }
        if source_node_id.is_empty() {
            return Err(ServiceError::EmptySourceNodeId);
        }
        if target_node_id.is_empty() {
            return Err(ServiceError::EmptyTargetNodeId);
        }
        if source_node_id == target_node_id {
            return Err(ServiceError::SelfLoopEdge);
        }

        let circuit = self.store.get_circuit(circuit_id)?;
        if circuit.node(source_node_id).is_none() {
            return Err(ServiceError::SourceNodeNotInCircuit(
                source_node_id.to_string(),
            ));
        }
        if circuit.node(target_node_id).is_none() {
            return Err(ServiceError::TargetNodeNotInCircuit(
                target_node_id.to_string(),
            ));
        }
        if circuit
            .edges
            .iter()
            .any(|e| e.source_node_id == source_node_id && e.target_node_id == target_node_id)
        {
            return Err(ServiceError::EdgeAlreadyExists {
                source_node_id: source_node_id.to_string(),
                target_node_id: target_node_id.to_string(),
            });
        }

        let edge = Edge::new(Uuid::new_v4().to_string(), source_node_id, target_node_id);
        self.store.add_edge(circuit_id, edge.clone())?;
        Ok(edge)
    }

    /// Evaluates a circuit against the provided input values.
    pub fn evaluate_circuit(
        &self,
        circuit: &Circuit,
        inputs: &[InputNodeValue],
    ) -> EvaluationResult {
        debug!(circuit = %circuit.id, inputs = inputs.len(), "evaluating circuit");
        circuit.evaluate(inputs)
    }

    /// Validates a circuit without evaluating it.
    pub fn validate_circuit(&self, circuit: &Circuit) -> Result<(), ValidationError> {
        circuit.validate()
    }

    fn add_node(&mut self, circuit_id: &str, node: Node) -> Result<Node, ServiceError> {
        if circuit_id.is_empty() {
            return Err(ServiceError::EmptyCircuitId);
        }
        self.store.add_node(circuit_id, node.clone())?;
        Ok(node)
    }
}
