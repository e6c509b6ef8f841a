use ahash::AHashMap;
use tracing::debug;

mod engine;
pub mod schedule;

pub use schedule::{DependencyMap, topological_order};

use crate::circuit::{Circuit, EvaluationResult, InputNodeValue, Node, NodeOutput};
use crate::error::EvaluationError;

/// Evaluates a circuit against runtime input values.
///
/// An `Evaluator` borrows its circuit and can be used repeatedly and safely
/// across multiple threads to run different input sets. Each run keeps its
/// working state local, so concurrent runs never observe each other.
pub struct Evaluator<'c> {
    circuit: &'c Circuit,
}

impl<'c> Evaluator<'c> {
    pub fn new(circuit: &'c Circuit) -> Self {
        Self { circuit }
    }

    /// Runs the circuit and folds any failure into the reported envelope.
    ///
    /// This never panics and never returns a bare error: a failed run comes
    /// back with `success` unset and the failure message in `error`, which
    /// is the shape editor frontends consume directly. Use
    /// [`try_eval`](Self::try_eval) to branch on the typed error instead.
    pub fn eval(&self, inputs: &[InputNodeValue]) -> EvaluationResult {
        match self.try_eval(inputs) {
            Ok(outputs) => EvaluationResult::success(outputs),
            Err(err) => EvaluationResult::failure(err.to_string()),
        }
    }

    /// Runs the circuit, returning the computed output values or the typed
    /// error that stopped the run.
    ///
    /// The run validates the circuit, computes a deterministic schedule,
    /// seeds it with the provided input values and then evaluates every
    /// node in dependency order. Output values are returned in node
    /// declaration order.
    pub fn try_eval(&self, inputs: &[InputNodeValue]) -> Result<Vec<NodeOutput>, EvaluationError> {
        self.circuit.validate()?;

        let node_map: AHashMap<&str, &Node> =
            self.circuit.nodes.iter().map(|n| (n.id(), n)).collect();
        let deps = DependencyMap::from_circuit(self.circuit);
        let order = topological_order(&deps)?;
        debug!(circuit = %self.circuit.id, nodes = order.len(), "evaluation schedule computed");

        // Seed the run with the provided values. A value bound to anything
        // but an input node is rejected; a duplicate binding keeps the last
        // value.
        let mut computed: AHashMap<&str, bool> = AHashMap::with_capacity(node_map.len());
        for input in inputs {
            match node_map.get_key_value(input.node_id.as_str()) {
                Some((id, Node::Input { .. })) => {
                    computed.insert(*id, input.value);
                }
                _ => return Err(EvaluationError::NotAnInputNode(input.node_id.clone())),
            }
        }

        for node_id in &order {
            let Some(node) = node_map.get(node_id.as_str()).copied() else {
                return Err(EvaluationError::Internal(format!(
                    "scheduled node {node_id} is not part of the circuit"
                )));
            };

            if node.is_input() {
                if !computed.contains_key(node.id()) {
                    return Err(EvaluationError::MissingInputValue(node.id().to_string()));
                }
                continue;
            }

            let preds = deps.predecessors(node_id);
            let mut values = Vec::with_capacity(preds.len());
            for source in preds {
                let value = computed.get(source.as_str()).copied().ok_or_else(|| {
                    EvaluationError::ValueNotComputed {
                        node_id: node_id.clone(),
                        source_id: source.clone(),
                    }
                })?;
                values.push(value);
            }

            let value = engine::apply(node, &values)?;
            computed.insert(node.id(), value);
        }

        let mut outputs = Vec::new();
        for node in &self.circuit.nodes {
            if node.is_output() {
                match computed.get(node.id()) {
                    Some(value) => outputs.push(NodeOutput::new(node.id(), *value)),
                    None => {
                        return Err(EvaluationError::OutputNotEvaluated(node.id().to_string()));
                    }
                }
            }
        }
        Ok(outputs)
    }
}

impl Circuit {
    /// Validates, schedules and evaluates this circuit in one call.
    pub fn evaluate(&self, inputs: &[InputNodeValue]) -> EvaluationResult {
        Evaluator::new(self).eval(inputs)
    }
}
