//! Tests for dependency mapping and topological scheduling.
mod common;
use common::*;
use kairo::prelude::*;

#[test]
fn test_dependency_map_from_circuit() {
    let circuit = create_and_circuit();
    let deps = DependencyMap::from_circuit(&circuit);

    assert_eq!(deps.len(), 4);
    assert_eq!(deps.node_ids(), ["a", "b", "gate", "out"]);
    assert_eq!(deps.predecessors("gate"), ["a", "b"]);
    assert_eq!(deps.predecessors("out"), ["gate"]);
    assert!(deps.predecessors("a").is_empty());
    // Unknown nodes have no predecessors rather than panicking.
    assert!(deps.predecessors("ghost").is_empty());
}

#[test]
fn test_schedule_orders_sources_before_targets() {
    // Diamond: a feeds two NOT gates which feed an OR.
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::not("n1"),
            Node::not("n2"),
            Node::or("join"),
            Node::output("out", "Out"),
        ],
        &[
            ("a", "n1"),
            ("a", "n2"),
            ("n1", "join"),
            ("n2", "join"),
            ("join", "out"),
        ],
    );

    let order = topological_order(&DependencyMap::from_circuit(&circuit)).unwrap();
    assert_eq!(order.len(), circuit.node_count());

    let position = |id: &str| order.iter().position(|n| n == id).unwrap();
    for edge in &circuit.edges {
        assert!(
            position(&edge.source_node_id) < position(&edge.target_node_id),
            "edge {} -> {} out of order in {:?}",
            edge.source_node_id,
            edge.target_node_id,
            order
        );
    }
}

#[test]
fn test_schedule_is_deterministic() {
    let circuit = create_and_circuit();
    let deps = DependencyMap::from_circuit(&circuit);

    // Ready nodes are emitted in declaration order, so the full schedule
    // of this circuit is fixed.
    let order = topological_order(&deps).unwrap();
    assert_eq!(order, ["a", "b", "gate", "out"]);

    for _ in 0..10 {
        assert_eq!(topological_order(&deps).unwrap(), order);
    }
}

#[test]
fn test_disconnected_nodes_keep_declaration_order() {
    let circuit = create_circuit(
        vec![Node::input("x", "X"), Node::input("y", "Y"), Node::input("z", "Z")],
        &[],
    );
    let order = topological_order(&DependencyMap::from_circuit(&circuit)).unwrap();
    assert_eq!(order, ["x", "y", "z"]);
}

#[test]
fn test_cycle_detected() {
    let mut deps = DependencyMap::new();
    deps.insert("g1", vec!["g2".to_string()]);
    deps.insert("g2", vec!["g1".to_string()]);

    let err = topological_order(&deps).unwrap_err();
    assert_eq!(err.to_string(), "circuit contains cycles");
}

#[test]
fn test_cycle_with_clean_entry_detected() {
    // A valid prefix exists (the input node) but the gate loop can never
    // be released.
    let circuit = create_circuit(
        vec![Node::input("a", "A"), Node::and("g1"), Node::and("g2")],
        &[("a", "g1"), ("g1", "g2"), ("g2", "g1")],
    );
    assert!(topological_order(&DependencyMap::from_circuit(&circuit)).is_err());
}

#[test]
fn test_duplicate_parallel_edges_reported_as_cycle() {
    // Two edges between the same pair leave one unit of in-degree that is
    // never released; the schedule comes up short and reports a cycle.
    let circuit = create_circuit(
        vec![Node::input("a", "A"), Node::and("gate")],
        &[("a", "gate"), ("a", "gate")],
    );
    let err = topological_order(&DependencyMap::from_circuit(&circuit)).unwrap_err();
    assert_eq!(err.to_string(), "circuit contains cycles");
}

#[test]
fn test_insert_replaces_predecessors() {
    let mut deps = DependencyMap::new();
    deps.insert("gate", vec!["a".to_string()]);
    deps.insert("a", Vec::new());
    deps.insert("gate", vec!["b".to_string()]);

    assert_eq!(deps.len(), 2);
    // Re-inserting keeps the original declaration position.
    assert_eq!(deps.node_ids(), ["gate", "a"]);
    assert_eq!(deps.predecessors("gate"), ["b"]);
}

#[test]
fn test_empty_map_schedules_empty() {
    let deps = DependencyMap::new();
    assert!(deps.is_empty());
    assert_eq!(topological_order(&deps).unwrap(), Vec::<String>::new());
}
