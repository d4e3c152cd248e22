//! # Outbound Ports (Driven Ports)
//!
//! SPIs required by the witness registry subsystem.

use shared_types::AccountName;

use crate::domain::registry::WitnessRecord;

/// Abstract interface for witness record persistence.
///
/// The backing index is unique on `owner`. Writes happen on the single
/// apply thread; concurrent readers are the storage layer's concern, so
/// the port itself is a plain single-writer interface.
pub trait WitnessStore: Send + Sync {
    /// Fetch the record for `owner`, if one exists.
    fn get(&self, owner: &AccountName) -> Option<WitnessRecord>;

    /// Insert or replace the record keyed by its `owner` field.
    fn put(&mut self, record: WitnessRecord);
}
