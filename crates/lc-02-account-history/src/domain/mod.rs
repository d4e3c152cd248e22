//! # Domain Layer
//!
//! Pure indexing logic: impact extraction, range/content filtering, the
//! record entities, and the indexing algorithm. All storage access goes
//! through the `ports` module.

pub mod entities;
pub mod errors;
pub mod filter;
pub mod impact;
pub mod indexer;

pub use entities::{
    encode_operation, AccountHistoryEntry, AppliedOperation, OperationRecord, OperationRecordId,
};
pub use errors::{HistoryError, HistoryResult};
pub use filter::{is_tracked_content, IndexConfig, TrackedRanges};
pub use impact::impacted_accounts;
pub use indexer::AccountHistoryIndexer;
