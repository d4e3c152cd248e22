//! # Account History Subsystem (lc-02)
//!
//! The Account History subsystem answers "which operations affected this
//! account, in order". For every operation the apply pipeline delivers, it
//! computes the set of semantically impacted accounts and appends one
//! sequence-numbered history entry per qualifying account, all pointing at
//! a single shared, immutable operation record.
//!
//! ## Responsibilities
//!
//! - Extract the impacted-account set from every [`Operation`] variant via
//!   one exhaustive dispatch (`impacted_accounts`).
//! - Persist at most one [`OperationRecord`] per applied operation,
//!   regardless of how many accounts it impacts.
//! - Maintain the per-account, zero-based, gapless sequence of
//!   [`AccountHistoryEntry`] rows.
//! - Honour the operator-configured tracked account ranges and the
//!   content-category filter.
//!
//! ## Determinism
//!
//! The whole pipeline is a pure function of the notification stream and
//! the chain context: replaying the same operations produces byte-identical
//! records and entries on every replica. Virtual operations flow through
//! unchanged apart from their provenance flag.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): impact extraction, filtering, and the
//!   indexing algorithm, no I/O dependencies.
//! - **Ports Layer** (`ports/`): the `HistoryStore` SPI and the
//!   `AccountHistoryApi` query trait.
//! - **Adapters Layer** (`adapters/`): in-memory multi-index store.
//!
//! [`Operation`]: shared_types::Operation

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{
    encode_operation, impacted_accounts, is_tracked_content, AccountHistoryEntry,
    AccountHistoryIndexer, AppliedOperation, HistoryError, HistoryResult, IndexConfig,
    OperationRecord, OperationRecordId, TrackedRanges,
};

pub use ports::{AccountHistoryApi, HistoryStore};

pub use adapters::MemoryHistoryStore;
