//! # Witness Registry Subsystem (lc-01)
//!
//! The Witness Registry subsystem owns the per-witness configuration
//! record: signing key, endpoint URL, and the versioned chain-properties
//! payload a witness publishes. It applies the two operations that carry
//! witness configuration and enforces their hardfork-gated consensus rules.
//!
//! ## Responsibilities
//!
//! - Apply `WitnessUpdate`: set signing key and URL, lazily creating the
//!   record, with the URL-length bound soft before HF1 and hard after.
//! - Apply `ChainPropertiesUpdate`: validate the versioned payload against
//!   the active hardfork set and store it.
//! - Reject payload/field combinations that are invalid for the current
//!   protocol epoch with a typed [`EvaluatorError`].
//!
//! ## Determinism
//!
//! Every rule is a pure function of the operation and the [`ChainContext`]
//! passed in. Replaying the same operations against the same schedule
//! yields byte-identical witness records on every replica.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): evaluators and the properties resolver,
//!   no I/O dependencies.
//! - **Ports Layer** (`ports/`): the `WitnessStore` persistence trait.
//! - **Adapters Layer** (`adapters/`): in-memory store and chain state for
//!   tests and embedded use.
//!
//! [`ChainContext`]: shared_types::ChainContext

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{
    apply_chain_properties_update, apply_witness_update, resolve_properties, EvaluatorError,
    EvaluatorResult, WitnessRecord,
};
pub use ports::WitnessStore;

pub use adapters::{MemoryChainState, MemoryWitnessStore};
