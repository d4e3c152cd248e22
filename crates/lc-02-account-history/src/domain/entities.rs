//! # History Entities
//!
//! The two persisted record types and the query-surface DTO. An
//! `OperationRecord` is written at most once per applied operation and
//! shared by reference from every history entry it produced; entries are
//! append-only and never renumbered.

use serde::{Deserialize, Serialize};

use shared_types::{AccountName, BlockNum, Operation, Timestamp, TransactionId};

use crate::domain::errors::{HistoryError, HistoryResult};

/// Opaque identity of a persisted operation record, assigned monotonically
/// by the store.
pub type OperationRecordId = u64;

/// One immutable record of an applied operation: provenance plus the
/// canonically serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Id of the enclosing transaction (all zeroes for virtual operations).
    pub trx_id: TransactionId,
    /// Block the operation was applied in.
    pub block: BlockNum,
    /// Position of the transaction within the block.
    pub trx_in_block: u32,
    /// Position of the operation within the transaction.
    pub op_in_trx: u16,
    /// Whether this was a ledger-generated virtual operation.
    pub virtual_op: bool,
    /// Head block time at application.
    pub timestamp: Timestamp,
    /// The operation, bincode-encoded. Losslessly round-trips the
    /// `Operation` union.
    pub serialized_op: Vec<u8>,
}

impl OperationRecord {
    /// Decode the stored operation payload.
    pub fn decode_op(&self) -> HistoryResult<Operation> {
        bincode::deserialize(&self.serialized_op).map_err(|e| HistoryError::Codec(e.to_string()))
    }
}

/// Canonically encode an operation for storage.
pub fn encode_operation(op: &Operation) -> HistoryResult<Vec<u8>> {
    bincode::serialize(op).map_err(|e| HistoryError::Codec(e.to_string()))
}

/// One row of an account's history: `(account, sequence)` is the unique
/// key, `op` points at the shared operation record.
///
/// For a given account, sequences are contiguous, zero-based, and strictly
/// increasing; rows are never mutated or deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHistoryEntry {
    pub account: AccountName,
    pub sequence: u32,
    pub op: OperationRecordId,
}

/// The decoded query-surface DTO handed to external read APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedOperation {
    pub trx_id: TransactionId,
    pub block: BlockNum,
    pub trx_in_block: u32,
    pub op_in_trx: u16,
    pub virtual_op: bool,
    pub timestamp: Timestamp,
    /// The decoded operation.
    pub op: Operation,
}

impl AppliedOperation {
    /// Reconstruct the DTO from a persisted record.
    pub fn from_record(record: &OperationRecord) -> HistoryResult<Self> {
        Ok(Self {
            trx_id: record.trx_id,
            block: record.block,
            trx_in_block: record.trx_in_block,
            op_in_trx: record.op_in_trx,
            virtual_op: record.virtual_op,
            timestamp: record.timestamp,
            op: record.decode_op()?,
        })
    }
}
