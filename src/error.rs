use thiserror::Error;

/// Error returned by the scheduler when the dependency graph cannot be
/// linearized because at least one dependency cycle exists.
#[derive(Error, Debug, Clone)]
#[error("circuit contains cycles")]
pub struct CycleError;

/// Errors that can occur while checking a circuit's structural integrity.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("circuit has no nodes")]
    NoNodes,

    #[error("duplicate node ID: {0}")]
    DuplicateNodeId(String),

    #[error("edge references non-existent source node: {0}")]
    UnknownEdgeSource(String),

    #[error("edge references non-existent target node: {0}")]
    UnknownEdgeTarget(String),

    #[error("circuit validation failed: {0}")]
    Cycle(#[from] CycleError),
}

/// Errors that can occur while evaluating a circuit against a set of
/// input values.
#[derive(Error, Debug, Clone)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error("provided input '{0}' is not an input node")]
    NotAnInputNode(String),

    #[error("missing value for input node: {0}")]
    MissingInputValue(String),

    #[error("failed to evaluate node {node_id}: output node must have exactly one input (got {count})")]
    OutputArity { node_id: String, count: usize },

    #[error("failed to evaluate node {node_id}: circuit node must have exactly one input (got {count})")]
    NestedCircuitArity { node_id: String, count: usize },

    #[error("output node {0} was not evaluated, check circuit connections")]
    OutputNotEvaluated(String),

    #[error("internal evaluation error: input value for node {node_id} from source {source_id} not computed")]
    ValueNotComputed { node_id: String, source_id: String },

    #[error("internal evaluation error: {0}")]
    Internal(String),
}

/// Errors that can occur when converting a custom editor format into a
/// kairo [`Circuit`](crate::circuit::Circuit).
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("invalid circuit definition: {0}")]
    Invalid(String),
}

/// Errors surfaced by a [`CircuitStore`](crate::store::CircuitStore)
/// implementation.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("circuit with id {0} not found")]
    CircuitNotFound(String),

    #[error("circuit with id {0} already exists")]
    DuplicateCircuit(String),

    #[error("circuit {circuit_id} already contains node {node_id}")]
    DuplicateNode {
        circuit_id: String,
        node_id: String,
    },

    #[error("circuit {circuit_id} already contains edge {edge_id}")]
    DuplicateEdge {
        circuit_id: String,
        edge_id: String,
    },
}

/// Errors that can occur in the [`CircuitService`](crate::service::CircuitService)
/// command layer, wrapping storage failures and argument checks.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("circuit title cannot be empty")]
    EmptyTitle,

    #[error("circuit ID cannot be empty")]
    EmptyCircuitId,

    #[error("source node ID cannot be empty")]
    EmptySourceNodeId,

    #[error("target node ID cannot be empty")]
    EmptyTargetNodeId,

    #[error("referenced circuit ID cannot be empty")]
    EmptyReferencedCircuitId,

    #[error("source and target nodes cannot be the same")]
    SelfLoopEdge,

    #[error("source node {0} not found in circuit")]
    SourceNodeNotInCircuit(String),

    #[error("target node {0} not found in circuit")]
    TargetNodeNotInCircuit(String),

    #[error("edge already exists between nodes {source_node_id} and {target_node_id}")]
    EdgeAlreadyExists {
        source_node_id: String,
        target_node_id: String,
    },

    #[error("referenced circuit not found: {0}")]
    ReferencedCircuitNotFound(#[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
