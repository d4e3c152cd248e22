//! # Shared Types Crate
//!
//! This crate contains the domain entities shared by every Ledger-Chain
//! subsystem: identifier aliases, the closed [`Operation`] union, the
//! versioned witness [`properties`] payloads, the hardfork activation
//! schedule, and the [`ChainContext`] capability trait through which
//! subsystems read chain state.
//!
//! ## Clusters
//!
//! - **Identity**: `AccountName`, `TransactionId`, `PublicKey`
//! - **Operations**: `Operation`, `OperationNotification`
//! - **Witness configuration**: `VersionedChainProperties` and friends
//! - **Consensus gating**: `Hardfork`, `HardforkSchedule`, `ChainContext`
//!
//! Everything here is deterministic and replay-safe: no wall-clock reads,
//! no randomness, no I/O.

pub mod context;
pub mod entities;
pub mod hardforks;
pub mod operations;
pub mod properties;

pub use context::ChainContext;
pub use entities::{AccountName, BlockNum, OperationNotification, PublicKey, Timestamp, TransactionId};
pub use hardforks::{Hardfork, HardforkSchedule};
pub use operations::{ChainPropertiesUpdateOperation, Operation, WitnessUpdateOperation};
pub use properties::{
    ChainProperties18, ChainProperties19, ChainProperties21, ChainProperties22,
    VersionedChainProperties, MAX_DELEGATED_VESTING_INTEREST_RATE_PRE_HF21,
    MAX_WITNESS_URL_LENGTH, MIN_CURATION_PERCENT_PRE_HF21, PERCENT_100,
};
