//! # Kairo - Boolean Logic Circuit Engine
//!
//! **Kairo** models boolean logic circuits the way node-based editors draw
//! them: inputs, gates and outputs connected by directed edges. A circuit is
//! plain data; validation, deterministic scheduling and evaluation are pure
//! functions over it, so the same drawing always produces the same answer.
//!
//! ## Core Workflow
//!
//! The engine is designed to be editor-agnostic. It operates on a canonical
//! [`Circuit`](circuit::Circuit) model. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's circuit format into your own
//!     Rust structs, or deserialize the canonical model directly.
//! 2.  **Convert to Kairo's Model**: Implement the
//!     [`IntoCircuit`](circuit::IntoCircuit) trait for your structs to
//!     provide a translation layer into a `Circuit`.
//! 3.  **Validate**: Run [`validate`](circuit::validate()) to reject empty
//!     circuits, duplicate node IDs, dangling edges and dependency cycles
//!     before anything is evaluated.
//! 4.  **Evaluate**: Create an [`Evaluator`](eval::Evaluator) and run it
//!     repeatedly against different input value sets; or let a
//!     [`CircuitService`](service::CircuitService) backed by a
//!     [`CircuitStore`](store::CircuitStore) manage construction, storage
//!     and evaluation for you.
//!
//! ## Quick Start
//!
//! The following example builds and evaluates a two-input AND circuit.
//!
//! ```rust
//! use kairo::prelude::*;
//!
//! let mut circuit = Circuit::new("c-demo", "AND demo");
//! circuit.nodes.push(Node::input("a", "A"));
//! circuit.nodes.push(Node::input("b", "B"));
//! circuit.nodes.push(Node::and("gate"));
//! circuit.nodes.push(Node::output("out", "Result"));
//! circuit.edges.push(Edge::new("e1", "a", "gate"));
//! circuit.edges.push(Edge::new("e2", "b", "gate"));
//! circuit.edges.push(Edge::new("e3", "gate", "out"));
//!
//! let result = circuit.evaluate(&[
//!     InputNodeValue::new("a", true),
//!     InputNodeValue::new("b", false),
//! ]);
//!
//! assert!(result.success);
//! assert_eq!(result.output("out"), Some(false));
//! ```
//!
//! Evaluation never panics: structural problems and missing input values
//! come back inside the [`EvaluationResult`](circuit::EvaluationResult)
//! envelope as a human-readable error.

pub mod circuit;
pub mod error;
pub mod eval;
pub mod prelude;
pub mod service;
pub mod store;
