//! # Inbound Ports (Driving Ports)
//!
//! The query surface consumed by external read APIs. RPC framing and
//! JSON serialization of the results live upstream; this trait only
//! reconstructs decoded applied operations from the indices.

use shared_types::AccountName;

use crate::domain::entities::AppliedOperation;
use crate::domain::errors::HistoryResult;

/// Read access to an account's operation history.
pub trait AccountHistoryApi {
    /// Entries for `account` with sequence >= `start`, ascending, at most
    /// `limit` of them, each paired with its sequence number.
    fn get_account_history(
        &self,
        account: &AccountName,
        start: u32,
        limit: u32,
    ) -> HistoryResult<Vec<(u32, AppliedOperation)>>;
}
