//! # Ports Layer
//!
//! Abstract interfaces between the witness registry domain and its
//! collaborators.

pub mod outbound;

pub use outbound::WitnessStore;
