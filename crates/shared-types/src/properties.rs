//! # Versioned Chain Properties
//!
//! Witness-submitted configuration payloads, versioned by protocol epoch.
//! Evolution is forward-only: a witness migrates to a newer shape by
//! submitting it, never back. Validation of these payloads against the
//! active hardfork set lives in the witness registry crate; this module is
//! just the data.

use serde::{Deserialize, Serialize};

/// 100% expressed in basis points.
pub const PERCENT_100: u16 = 10_000;

/// Hard upper bound on a witness URL once HF1 is active. Before HF1 an
/// oversized URL is accepted with a warning.
pub const MAX_WITNESS_URL_LENGTH: usize = 255;

/// Ceiling on `max_delegated_vesting_interest_rate` while HF21 (delegated
/// interest) is not yet active.
pub const MAX_DELEGATED_VESTING_INTEREST_RATE_PRE_HF21: u16 = 8_000;

/// Floor on `min_curation_percent` while HF21 (curation bounds) is not yet
/// active.
pub const MIN_CURATION_PERCENT_PRE_HF21: u16 = 2_500;

/// The legacy properties shape, also embedded inline in `WitnessUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProperties18 {
    /// Fee burned when creating an account, in base units.
    pub account_creation_fee: u64,
    /// Maximum serialized block size in bytes.
    pub maximum_block_size: u32,
    /// Interest rate on savings balances, basis points.
    pub sbd_interest_rate: u16,
}

impl Default for ChainProperties18 {
    fn default() -> Self {
        Self {
            account_creation_fee: 3_000,
            maximum_block_size: 65_536,
            sbd_interest_rate: 1_000,
        }
    }
}

/// Version-19 shape: adds delegation and curation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProperties19 {
    pub account_creation_fee: u64,
    pub maximum_block_size: u32,
    pub sbd_interest_rate: u16,
    /// Interest a delegator may charge a delegatee, basis points.
    pub max_delegated_vesting_interest_rate: u16,
    /// Lower bound an author may set on the curation share, basis points.
    pub min_curation_percent: u16,
    /// Upper bound an author may set on the curation share, basis points.
    pub max_curation_percent: u16,
}

impl Default for ChainProperties19 {
    fn default() -> Self {
        Self {
            account_creation_fee: 3_000,
            maximum_block_size: 65_536,
            sbd_interest_rate: 1_000,
            max_delegated_vesting_interest_rate: 8_000,
            min_curation_percent: 2_500,
            max_curation_percent: PERCENT_100,
        }
    }
}

/// Version-21 shape: adds reward-split and vote regeneration parameters.
/// Only valid once HF21 is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProperties21 {
    pub account_creation_fee: u64,
    pub maximum_block_size: u32,
    pub sbd_interest_rate: u16,
    pub max_delegated_vesting_interest_rate: u16,
    pub min_curation_percent: u16,
    pub max_curation_percent: u16,
    /// Share of inflation directed to the worker fund, basis points.
    pub worker_reward_percent: u16,
    /// Share of inflation directed to witnesses, basis points.
    pub witness_reward_percent: u16,
    /// Full voting-power regenerations per day.
    pub vote_regeneration_per_day: u32,
}

impl Default for ChainProperties21 {
    fn default() -> Self {
        Self {
            account_creation_fee: 3_000,
            maximum_block_size: 65_536,
            sbd_interest_rate: 1_000,
            max_delegated_vesting_interest_rate: 8_000,
            min_curation_percent: 2_500,
            max_curation_percent: PERCENT_100,
            worker_reward_percent: 1_000,
            witness_reward_percent: 1_000,
            vote_regeneration_per_day: 1,
        }
    }
}

/// Version-22 shape: adds per-operation cost tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProperties22 {
    pub account_creation_fee: u64,
    pub maximum_block_size: u32,
    pub sbd_interest_rate: u16,
    pub max_delegated_vesting_interest_rate: u16,
    pub min_curation_percent: u16,
    pub max_curation_percent: u16,
    pub worker_reward_percent: u16,
    pub witness_reward_percent: u16,
    pub vote_regeneration_per_day: u32,
    /// Bandwidth cost multiplier for discouraged operations.
    pub unwanted_operation_cost: u64,
    /// Bandwidth cost multiplier for unlimited operations.
    pub unlimit_operation_cost: u64,
}

impl Default for ChainProperties22 {
    fn default() -> Self {
        Self {
            account_creation_fee: 3_000,
            maximum_block_size: 65_536,
            sbd_interest_rate: 1_000,
            max_delegated_vesting_interest_rate: 8_000,
            min_curation_percent: 2_500,
            max_curation_percent: PERCENT_100,
            worker_reward_percent: 1_000,
            witness_reward_percent: 1_000,
            vote_regeneration_per_day: 1,
            unwanted_operation_cost: 100,
            unlimit_operation_cost: 100,
        }
    }
}

/// The versioned union of chain-properties payloads.
///
/// Exactly one version is current for a given witness at any time. Shapes
/// without bespoke validation rules (V18, V22) pass through the resolver
/// unchanged; this forward-compatible escape hatch is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VersionedChainProperties {
    V18(ChainProperties18),
    V19(ChainProperties19),
    V21(ChainProperties21),
    V22(ChainProperties22),
}

impl Default for VersionedChainProperties {
    fn default() -> Self {
        Self::V18(ChainProperties18::default())
    }
}
