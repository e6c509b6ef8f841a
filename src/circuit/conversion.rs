use super::model::Circuit;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a kairo `Circuit`.
///
/// This is the primary extension point for making kairo editor-agnostic. By
/// implementing this trait on your own definition structs, you provide a
/// translation layer that lets the validator and evaluator process circuits
/// drawn in any frontend format.
///
/// # Example
///
/// ```rust,no_run
/// use kairo::prelude::*;
/// use kairo::error::ConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct EditorGate { id: String, kind: String }
/// struct EditorSheet { gates: Vec<EditorGate> }
///
/// // 2. Implement `IntoCircuit` for your top-level struct.
/// impl IntoCircuit for EditorSheet {
///     fn into_circuit(self) -> Result<Circuit, ConversionError> {
///         let mut circuit = Circuit::new("sheet-1", "Imported sheet");
///         for gate in self.gates {
///             let node = match gate.kind.as_str() {
///                 "and" => Node::and(gate.id),
///                 "or" => Node::or(gate.id),
///                 "not" => Node::not(gate.id),
///                 other => {
///                     return Err(ConversionError::Invalid(format!(
///                         "unknown gate kind '{other}'"
///                     )));
///                 }
///             };
///             circuit.nodes.push(node);
///         }
///
///         // Convert your edges here as well.
///         Ok(circuit)
///     }
/// }
/// ```
pub trait IntoCircuit {
    /// Consumes the object and converts it into an evaluatable circuit.
    fn into_circuit(self) -> Result<Circuit, ConversionError>;
}
