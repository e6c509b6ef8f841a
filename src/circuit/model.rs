use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The complete definition of a boolean logic circuit: a set of nodes and
/// the directed edges connecting them. This is the canonical structure for
/// validation, scheduling and evaluation, and also the wire format used by
/// editors and storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Circuit {
    /// Creates an empty circuit with the given identity.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Looks up a node by its ID.
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A single element of a circuit. The variant decides how the node behaves
/// during evaluation; the `type` tag in the serialized form carries the
/// variant name in upper case (`INPUT`, `OUTPUT`, `AND`, `OR`, `NOT`,
/// `CIRCUIT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Node {
    /// An externally driven boolean source. Its value must be supplied at
    /// evaluation time.
    Input { id: String, title: String },

    /// A terminal that reports the value of its single incoming edge.
    Output { id: String, title: String },

    /// Logical conjunction of all incoming values.
    And { id: String },

    /// Logical disjunction of all incoming values.
    Or { id: String },

    /// Logical negation of its single incoming value.
    Not { id: String },

    /// A reference to another circuit embedded as a node. The wire form
    /// carries only the referenced circuit's ID; `circuit` is a runtime
    /// snapshot filled in by a store during hydration and never serialized.
    Circuit {
        id: String,
        #[serde(rename = "circuitID", default, skip_serializing_if = "Option::is_none")]
        circuit_id: Option<String>,
        #[serde(skip)]
        circuit: Option<Arc<Circuit>>,
    },
}

impl Node {
    pub fn input(id: impl Into<String>, title: impl Into<String>) -> Self {
        Node::Input {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn output(id: impl Into<String>, title: impl Into<String>) -> Self {
        Node::Output {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn and(id: impl Into<String>) -> Self {
        Node::And { id: id.into() }
    }

    pub fn or(id: impl Into<String>) -> Self {
        Node::Or { id: id.into() }
    }

    pub fn not(id: impl Into<String>) -> Self {
        Node::Not { id: id.into() }
    }

    /// Creates a node referencing another circuit. The snapshot stays
    /// unresolved until a store hydrates it.
    pub fn circuit(id: impl Into<String>, circuit_id: impl Into<String>) -> Self {
        Node::Circuit {
            id: id.into(),
            circuit_id: Some(circuit_id.into()),
            circuit: None,
        }
    }

    /// The node's unique ID within its circuit.
    pub fn id(&self) -> &str {
        match self {
            Node::Input { id, .. }
            | Node::Output { id, .. }
            | Node::And { id }
            | Node::Or { id }
            | Node::Not { id }
            | Node::Circuit { id, .. } => id,
        }
    }

    /// The display title, for node kinds that carry one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Node::Input { title, .. } | Node::Output { title, .. } => Some(title),
            _ => None,
        }
    }

    /// The upper-case kind tag used in the serialized form.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Input { .. } => "INPUT",
            Node::Output { .. } => "OUTPUT",
            Node::And { .. } => "AND",
            Node::Or { .. } => "OR",
            Node::Not { .. } => "NOT",
            Node::Circuit { .. } => "CIRCUIT",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Node::Input { .. })
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Node::Output { .. })
    }
}

/// A directed connection carrying the source node's computed value to the
/// target node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    #[serde(rename = "sourceNodeID")]
    pub source_node_id: String,
    #[serde(rename = "targetNodeID")]
    pub target_node_id: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source_node_id: impl Into<String>,
        target_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_node_id: source_node_id.into(),
            target_node_id: target_node_id.into(),
        }
    }
}

/// A boolean value bound to an input node for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputNodeValue {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub value: bool,
}

impl InputNodeValue {
    pub fn new(node_id: impl Into<String>, value: bool) -> Self {
        Self {
            node_id: node_id.into(),
            value,
        }
    }
}

/// The computed value of one output node after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOutput {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub value: bool,
}

impl NodeOutput {
    pub fn new(node_id: impl Into<String>, value: bool) -> Self {
        Self {
            node_id: node_id.into(),
            value,
        }
    }
}

/// The outcome envelope of an evaluation run. Evaluation never panics and
/// never returns a bare error: failures are reported through `success` and
/// the human-readable `error` field, matching what editor frontends expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub success: bool,
    #[serde(default)]
    pub outputs: Vec<NodeOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationResult {
    pub fn success(outputs: Vec<NodeOutput>) -> Self {
        Self {
            success: true,
            outputs,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            outputs: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Convenience lookup of a single output value by node ID.
    pub fn output(&self, node_id: &str) -> Option<bool> {
        self.outputs
            .iter()
            .find(|o| o.node_id == node_id)
            .map(|o| o.value)
    }
}
