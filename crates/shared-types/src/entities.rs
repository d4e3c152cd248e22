//! # Core Domain Entities
//!
//! Identifier aliases and the apply-pipeline notification DTO used across
//! all Ledger-Chain subsystems.

use serde::{Deserialize, Serialize};

use crate::operations::Operation;

/// An account name. Lexicographic `String` ordering is the canonical
/// ordering used by the tracked-range filter.
pub type AccountName = String;

/// A 20-byte transaction identifier (RIPEMD-160 of the signed transaction).
pub type TransactionId = [u8; 20];

/// A 32-byte Ed25519 public key (witness block-signing key).
pub type PublicKey = [u8; 32];

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// A block height.
pub type BlockNum = u32;

/// The "operation applied" event emitted once per operation by the upstream
/// apply pipeline.
///
/// Virtual operations (ledger-generated events such as reward payouts) flow
/// through the same notification with `virtual_op` set; downstream consumers
/// must treat them identically otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationNotification {
    /// The applied operation.
    pub op: Operation,
    /// Id of the enclosing transaction (all zeroes for virtual operations).
    pub trx_id: TransactionId,
    /// Block the operation was applied in.
    pub block: BlockNum,
    /// Position of the transaction within the block.
    pub trx_in_block: u32,
    /// Position of the operation within the transaction.
    pub op_in_trx: u16,
    /// Whether this is a ledger-generated virtual operation.
    pub virtual_op: bool,
}
