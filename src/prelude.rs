//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kairo crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! // Use the prelude to get easy access to all the core types.
//! use kairo::prelude::*;
//!
//! # fn run_example() -> Result<(), ServiceError> {
//! // Assemble a circuit through the service layer.
//! let mut service = CircuitService::new(MemoryStore::new());
//! let circuit = service.create_circuit("Half adder carry")?;
//! let a = service.create_input_node(&circuit.id, "A")?;
//! let b = service.create_input_node(&circuit.id, "B")?;
//! let gate = service.create_and_node(&circuit.id)?;
//! let carry = service.create_output_node(&circuit.id, "Carry")?;
//! service.create_edge(&circuit.id, a.id(), gate.id())?;
//! service.create_edge(&circuit.id, b.id(), gate.id())?;
//! service.create_edge(&circuit.id, gate.id(), carry.id())?;
//!
//! // Fetch the stored circuit and evaluate it.
//! let circuit = service.get_circuit(&circuit.id)?;
//! let result = service.evaluate_circuit(
//!     &circuit,
//!     &[
//!         InputNodeValue::new(a.id(), true),
//!         InputNodeValue::new(b.id(), true),
//!     ],
//! );
//! assert!(result.success);
//! assert_eq!(result.output(carry.id()), Some(true));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Core model types
pub use crate::circuit::{
    Circuit, Edge, EvaluationResult, InputNodeValue, IntoCircuit, Node, NodeOutput, validate,
};

// Scheduling and evaluation
pub use crate::eval::{DependencyMap, Evaluator, topological_order};

// Storage and the command layer
pub use crate::service::CircuitService;
pub use crate::store::{CircuitStore, MemoryStore};

// Error types
pub use crate::error::{
    ConversionError, CycleError, EvaluationError, ServiceError, StoreError, ValidationError,
};
