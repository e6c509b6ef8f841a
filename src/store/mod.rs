mod memory;

pub use memory::MemoryStore;

use crate::circuit::{Circuit, Edge, Node};
use crate::error::StoreError;

/// Title carried by the shallow stand-in that breaks a reference cycle
/// during hydration.
pub const RECURSIVE_REFERENCE_TITLE: &str = "Recursive Reference";

/// Title carried by the stand-in for a nested reference whose circuit
/// cannot be fetched.
pub const NOT_FOUND_TITLE: &str = "Not Found";

/// Title carried by the unresolved placeholders handed out by bulk
/// listings, which skip nested resolution.
pub const REFERENCED_CIRCUIT_TITLE: &str = "Referenced Circuit";

/// Persistence boundary for circuits.
///
/// Implementations store circuits as flat records; nested circuit
/// references are resolved on read. [`get_circuit`](Self::get_circuit)
/// returns a fully hydrated snapshot where every reachable circuit node
/// carries its referenced circuit, with reference cycles broken by
/// shallow stand-ins so a snapshot is always finite.
pub trait CircuitStore {
    /// Stores a new circuit record.
    fn create_circuit(&mut self, circuit: Circuit) -> Result<(), StoreError>;

    /// Adds a node to an existing circuit.
    fn add_node(&mut self, circuit_id: &str, node: Node) -> Result<(), StoreError>;

    /// Adds an edge to an existing circuit.
    fn add_edge(&mut self, circuit_id: &str, edge: Edge) -> Result<(), StoreError>;

    /// Fetches one circuit with nested references resolved.
    fn get_circuit(&self, circuit_id: &str) -> Result<Circuit, StoreError>;

    /// Lists all circuits ordered by title, without resolving nested
    /// references.
    fn get_all_circuits(&self) -> Result<Vec<Circuit>, StoreError>;

    /// Replaces a stored circuit record wholesale.
    fn update_circuit(&mut self, circuit: Circuit) -> Result<(), StoreError>;

    /// Removes a circuit record.
    fn delete_circuit(&mut self, circuit_id: &str) -> Result<(), StoreError>;
}
