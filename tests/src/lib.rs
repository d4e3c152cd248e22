//! # Ledger-Chain Test Suite
//!
//! Unified test crate for properties that span more than one subsystem:
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem apply-pipeline properties
//!     ├── pipeline.rs   # Witness evaluators + history indexer together
//!     └── replay.rs     # Byte-identical replay across all indices
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lc-tests
//! ```

#![allow(dead_code)]

pub mod integration;
