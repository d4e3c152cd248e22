//! # Outbound Ports (Driven Ports)
//!
//! The persistence SPI required by the account history indexer. The
//! backing engine is expected to provide ordered multi-index access:
//! records unique on their assigned id, entries unique on
//! `(account, sequence)` with an efficient highest-sequence lookup.
//!
//! Writes happen on the single apply thread; multi-reader discipline for
//! concurrent query access is the storage layer's concern, not this
//! port's.

use shared_types::AccountName;

use crate::domain::entities::{AccountHistoryEntry, OperationRecord, OperationRecordId};
use crate::domain::errors::HistoryResult;

/// Abstract interface over the two history indices.
pub trait HistoryStore: Send + Sync {
    /// Persist one operation record, returning its monotonically assigned
    /// id. Called at most once per applied operation.
    fn insert_operation(&mut self, record: OperationRecord) -> HistoryResult<OperationRecordId>;

    /// Fetch a record by id.
    fn get_operation(&self, id: OperationRecordId) -> HistoryResult<Option<OperationRecord>>;

    /// Highest existing sequence for `account`, or `None` if the account
    /// has no history yet.
    fn max_sequence(&self, account: &AccountName) -> HistoryResult<Option<u32>>;

    /// Append one history entry. The `(account, sequence)` key must be
    /// fresh and `entry.op` must reference an existing record; violating
    /// either indicates a pipeline bug.
    fn insert_entry(&mut self, entry: AccountHistoryEntry) -> HistoryResult<()>;
}
