//! Error types for the account history subsystem.
//!
//! The indexer is defined never to fail under valid input: these errors
//! surface storage faults and codec bugs, both of which indicate a defect
//! in the surrounding pipeline. The caller must treat them as fatal to the
//! enclosing block application, not as recoverable consensus conditions.

use crate::domain::entities::OperationRecordId;

/// Failures surfaced by the history store or the record codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// An operation payload failed to encode or decode.
    #[error("codec error: {0}")]
    Codec(String),

    /// A history entry referenced a record that does not exist.
    #[error("operation record not found: {0}")]
    MissingRecord(OperationRecordId),

    /// Malformed tracked-range configuration entry.
    #[error("invalid track-account-range entry {entry:?}: {message}")]
    InvalidRange { entry: String, message: String },
}

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
