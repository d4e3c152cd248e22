//! # Domain Layer
//!
//! Pure consensus logic for the witness registry: the hardfork-gated
//! evaluators and the versioned properties resolver. No I/O here; all
//! external interaction goes through the `ports` module.

pub mod errors;
pub mod properties;
pub mod registry;

pub use errors::{EvaluatorError, EvaluatorResult};
pub use properties::resolve_properties;
pub use registry::{apply_chain_properties_update, apply_witness_update, WitnessRecord};
