//! # Chain State Capability Trait
//!
//! Components never hold a global database handle. Instead the apply
//! pipeline passes a [`ChainContext`] exposing exactly the chain-state
//! reads the evaluators and the indexer need, so each component is
//! testable against a few lines of fixture instead of a full ledger.

use crate::entities::{AccountName, BlockNum, Timestamp};
use crate::hardforks::Hardfork;

/// Read access to the chain state an operation is being applied against.
///
/// Implementations must be deterministic functions of replayable state:
/// the head block and the hardfork schedule. All methods are cheap lookups.
pub trait ChainContext {
    /// Height of the current head block.
    fn head_block_num(&self) -> BlockNum;

    /// Timestamp of the current head block.
    fn head_block_time(&self) -> Timestamp;

    /// Whether `hardfork` has activated, per the schedule and head time.
    fn has_hardfork(&self, hardfork: Hardfork) -> bool;

    /// Whether `name` refers to an existing account.
    fn account_exists(&self, name: &AccountName) -> bool;
}
