//! Tests for the evaluation engine and its failure envelope.
mod common;
use common::*;
use kairo::error::EvaluationError;
use kairo::prelude::*;

#[test]
fn test_and_gate_truth() {
    let circuit = create_and_circuit();

    let result = circuit.evaluate(&create_inputs(&[("a", true), ("b", true)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(true));

    let result = circuit.evaluate(&create_inputs(&[("a", true), ("b", false)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_or_gate_truth() {
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::input("b", "B"),
            Node::or("gate"),
            Node::output("out", "Result"),
        ],
        &[("a", "gate"), ("b", "gate"), ("gate", "out")],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", false), ("b", true)]));
    assert_eq!(result.output("out"), Some(true));

    let result = circuit.evaluate(&create_inputs(&[("a", false), ("b", false)]));
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_not_gate_truth() {
    let circuit = create_not_circuit();

    let result = circuit.evaluate(&create_inputs(&[("a", false)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(true));

    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_composite_circuit() {
    // (A AND B) OR (NOT C)
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::input("b", "B"),
            Node::input("c", "C"),
            Node::and("and"),
            Node::not("not"),
            Node::or("or"),
            Node::output("out", "Result"),
        ],
        &[
            ("a", "and"),
            ("b", "and"),
            ("c", "not"),
            ("and", "or"),
            ("not", "or"),
            ("or", "out"),
        ],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", false), ("b", true), ("c", false)]));
    assert_eq!(result.output("out"), Some(true));

    let result = circuit.evaluate(&create_inputs(&[("a", false), ("b", true), ("c", true)]));
    assert_eq!(result.output("out"), Some(false));

    let result = circuit.evaluate(&create_inputs(&[("a", true), ("b", true), ("c", true)]));
    assert_eq!(result.output("out"), Some(true));
}

#[test]
fn test_input_feeding_output_directly() {
    let circuit = create_circuit(
        vec![Node::input("a", "A"), Node::output("out", "Result")],
        &[("a", "out")],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(true));
}

#[test]
fn test_outputs_reported_in_declaration_order() {
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::output("first", "First"),
            Node::output("second", "Second"),
        ],
        &[("a", "first"), ("a", "second")],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert!(result.success);
    let ids: Vec<&str> = result.outputs.iter().map(|o| o.node_id.as_str()).collect();
    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn test_empty_and_gate_yields_false() {
    // A gate with no incoming edges evaluates to false, not to the
    // boolean identity element.
    let circuit = create_circuit(
        vec![Node::and("gate"), Node::output("out", "Result")],
        &[("gate", "out")],
    );

    let result = circuit.evaluate(&[]);
    assert!(result.success);
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_empty_or_gate_yields_false() {
    let circuit = create_circuit(
        vec![Node::or("gate"), Node::output("out", "Result")],
        &[("gate", "out")],
    );

    let result = circuit.evaluate(&[]);
    assert!(result.success);
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_not_gate_arity_quirk_yields_false() {
    // A NOT gate with anything other than exactly one input silently
    // evaluates to false instead of failing.
    let two_inputs = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::input("b", "B"),
            Node::not("gate"),
            Node::output("out", "Result"),
        ],
        &[("a", "gate"), ("b", "gate"), ("gate", "out")],
    );
    let result = two_inputs.evaluate(&create_inputs(&[("a", true), ("b", true)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(false));

    let no_inputs = create_circuit(
        vec![Node::not("gate"), Node::output("out", "Result")],
        &[("gate", "out")],
    );
    let result = no_inputs.evaluate(&[]);
    assert!(result.success);
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_missing_input_value_fails() {
    let circuit = create_and_circuit();

    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert!(!result.success);
    assert!(result.outputs.is_empty());
    assert_eq!(
        result.error.as_deref(),
        Some("missing value for input node: b")
    );
}

#[test]
fn test_value_bound_to_non_input_rejected() {
    let circuit = create_and_circuit();

    let result = circuit.evaluate(&create_inputs(&[
        ("a", true),
        ("b", true),
        ("gate", true),
    ]));
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("provided input 'gate' is not an input node")
    );

    // Unknown IDs are rejected the same way.
    let result = circuit.evaluate(&create_inputs(&[("ghost", true)]));
    assert!(!result.success);
    assert!(result.error.unwrap().contains("'ghost' is not an input node"));
}

#[test]
fn test_duplicate_binding_keeps_last_value() {
    let circuit = create_and_circuit();

    let result = circuit.evaluate(&create_inputs(&[
        ("a", false),
        ("b", true),
        ("a", true),
    ]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(true));
}

#[test]
fn test_output_requires_exactly_one_input() {
    let overfed = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::input("b", "B"),
            Node::output("out", "Result"),
        ],
        &[("a", "out"), ("b", "out")],
    );
    let result = overfed.evaluate(&create_inputs(&[("a", true), ("b", true)]));
    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(error.contains("failed to evaluate node out"));
    assert!(error.contains("output node must have exactly one input"));
}

#[test]
fn test_disconnected_output_fails_instead_of_defaulting() {
    let circuit = create_circuit(
        vec![Node::input("a", "A"), Node::output("out", "Result")],
        &[],
    );
    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert!(!result.success);
    assert!(
        result
            .error
            .unwrap()
            .contains("output node must have exactly one input")
    );
}

#[test]
fn test_structural_failure_reported_in_envelope() {
    let empty = Circuit::new("c-empty", "Empty");
    let result = empty.evaluate(&[]);
    assert!(!result.success);
    assert!(result.outputs.is_empty());
    assert_eq!(result.error.as_deref(), Some("circuit has no nodes"));

    let cyclic = create_circuit(
        vec![Node::and("g1"), Node::and("g2")],
        &[("g1", "g2"), ("g2", "g1")],
    );
    let result = cyclic.evaluate(&[]);
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("circuit validation failed: circuit contains cycles")
    );
}

#[test]
fn test_try_eval_returns_typed_errors() {
    let circuit = create_and_circuit();
    let evaluator = Evaluator::new(&circuit);

    let err = evaluator
        .try_eval(&create_inputs(&[("a", true)]))
        .unwrap_err();
    assert!(matches!(err, EvaluationError::MissingInputValue(_)));

    let err = evaluator
        .try_eval(&create_inputs(&[("gate", true)]))
        .unwrap_err();
    assert!(matches!(err, EvaluationError::NotAnInputNode(_)));

    let outputs = evaluator
        .try_eval(&create_inputs(&[("a", true), ("b", true)]))
        .unwrap();
    assert_eq!(outputs, vec![NodeOutput::new("out", true)]);
}

#[test]
fn test_nested_circuit_passes_value_through() {
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::circuit("nested", "some-other-circuit"),
            Node::output("out", "Result"),
        ],
        &[("a", "nested"), ("nested", "out")],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", true)]));
    assert!(result.success);
    assert_eq!(result.output("out"), Some(true));

    let result = circuit.evaluate(&create_inputs(&[("a", false)]));
    assert_eq!(result.output("out"), Some(false));
}

#[test]
fn test_nested_circuit_requires_exactly_one_input() {
    let circuit = create_circuit(
        vec![
            Node::input("a", "A"),
            Node::input("b", "B"),
            Node::circuit("nested", "some-other-circuit"),
            Node::output("out", "Result"),
        ],
        &[("a", "nested"), ("b", "nested"), ("nested", "out")],
    );

    let result = circuit.evaluate(&create_inputs(&[("a", true), ("b", false)]));
    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(error.contains("failed to evaluate node nested"));
    assert!(error.contains("circuit node must have exactly one input"));
}

#[test]
fn test_evaluation_is_repeatable() {
    // Runs keep no state behind: the same evaluator gives independent
    // answers for different input sets.
    let circuit = create_and_circuit();
    let evaluator = Evaluator::new(&circuit);

    for _ in 0..3 {
        let result = evaluator.eval(&create_inputs(&[("a", true), ("b", true)]));
        assert_eq!(result.output("out"), Some(true));

        let result = evaluator.eval(&create_inputs(&[("a", false), ("b", true)]));
        assert_eq!(result.output("out"), Some(false));
    }
}

#[test]
fn test_concurrent_evaluations_share_circuit() {
    let circuit = create_and_circuit();

    std::thread::scope(|scope| {
        let all_true = scope.spawn(|| circuit.evaluate(&create_inputs(&[("a", true), ("b", true)])));
        let one_false =
            scope.spawn(|| circuit.evaluate(&create_inputs(&[("a", true), ("b", false)])));

        assert_eq!(all_true.join().unwrap().output("out"), Some(true));
        assert_eq!(one_false.join().unwrap().output("out"), Some(false));
    });
}
