use crate::circuit::{Circuit, Node};
use crate::error::EvaluationError;

/// Computes one node's boolean value from the values of its predecessors,
/// in the order their edges were declared.
pub(super) fn apply(node: &Node, inputs: &[bool]) -> Result<bool, EvaluationError> {
    match node {
        Node::Input { id, .. } => Err(EvaluationError::Internal(format!(
            "gate evaluation invoked on input node {id}"
        ))),
        Node::Output { id, .. } => {
            if inputs.len() != 1 {
                return Err(EvaluationError::OutputArity {
                    node_id: id.clone(),
                    count: inputs.len(),
                });
            }
            Ok(inputs[0])
        }
        Node::And { .. } => Ok(eval_and(inputs)),
        Node::Or { .. } => Ok(eval_or(inputs)),
        Node::Not { .. } => Ok(eval_not(inputs)),
        Node::Circuit { id, circuit, .. } => nested_pass_through(id, circuit.as_deref(), inputs),
    }
}

fn eval_and(inputs: &[bool]) -> bool {
    // An And with no inputs is false here, not the boolean identity.
    if inputs.is_empty() {
        return false;
    }
    inputs.iter().all(|v| *v)
}

fn eval_or(inputs: &[bool]) -> bool {
    inputs.iter().any(|v| *v)
}

fn eval_not(inputs: &[bool]) -> bool {
    // Arity violations yield false rather than an error.
    match inputs {
        [value] => !*value,
        _ => false,
    }
}

/// A circuit node currently passes its single incoming value through
/// unchanged; the referenced circuit's own gates are not run. A future
/// strategy that feeds the value into the nested circuit's inputs and
/// reads back its outputs replaces only this function.
fn nested_pass_through(
    node_id: &str,
    _nested: Option<&Circuit>,
    inputs: &[bool],
) -> Result<bool, EvaluationError> {
    if inputs.len() != 1 {
        return Err(EvaluationError::NestedCircuitArity {
            node_id: node_id.to_string(),
            count: inputs.len(),
        });
    }
    Ok(inputs[0])
}
