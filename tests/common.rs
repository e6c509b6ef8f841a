//! Common test utilities for building circuits and input value sets.
use kairo::prelude::*;

/// Creates the simple two-input AND circuit used by basic tests.
///
/// Logic: `A AND B -> Result`
#[allow(dead_code)]
pub fn create_and_circuit() -> Circuit {
    let mut circuit = Circuit::new("c-and", "AND circuit");
    circuit.nodes = vec![
        Node::input("a", "A"),
        Node::input("b", "B"),
        Node::and("gate"),
        Node::output("out", "Result"),
    ];
    circuit.edges = vec![
        Edge::new("e1", "a", "gate"),
        Edge::new("e2", "b", "gate"),
        Edge::new("e3", "gate", "out"),
    ];
    circuit
}

/// Creates the single-input NOT circuit.
///
/// Logic: `NOT A -> Result`
#[allow(dead_code)]
pub fn create_not_circuit() -> Circuit {
    let mut circuit = Circuit::new("c-not", "NOT circuit");
    circuit.nodes = vec![
        Node::input("a", "A"),
        Node::not("gate"),
        Node::output("out", "Result"),
    ];
    circuit.edges = vec![
        Edge::new("e1", "a", "gate"),
        Edge::new("e2", "gate", "out"),
    ];
    circuit
}

/// Creates a circuit from nodes and `(source, target)` pairs, generating
/// the edge IDs.
#[allow(dead_code)]
pub fn create_circuit(nodes: Vec<Node>, edges: &[(&str, &str)]) -> Circuit {
    let mut circuit = Circuit::new("c-test", "Test circuit");
    circuit.nodes = nodes;
    circuit.edges = edges
        .iter()
        .enumerate()
        .map(|(i, (source, target))| Edge::new(format!("e{}", i + 1), *source, *target))
        .collect();
    circuit
}

/// Creates input value bindings from `(node ID, value)` pairs.
#[allow(dead_code)]
pub fn create_inputs(pairs: &[(&str, bool)]) -> Vec<InputNodeValue> {
    pairs
        .iter()
        .map(|(node_id, value)| InputNodeValue::new(*node_id, *value))
        .collect()
}
