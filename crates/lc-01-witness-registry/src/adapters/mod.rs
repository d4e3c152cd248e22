//! # Adapters Layer
//!
//! Concrete implementations of the ports for tests and embedded use.

pub mod memory;

pub use memory::{MemoryChainState, MemoryWitnessStore};
