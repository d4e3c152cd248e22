//! # Witness Registry Evaluator
//!
//! Applies the two operations that carry witness configuration. Each
//! evaluator's side effects are confined to a single witness record; there
//! are no cross-witness effects.

use serde::{Deserialize, Serialize};
use tracing::warn;

use shared_types::{
    AccountName, ChainContext, ChainPropertiesUpdateOperation, Hardfork, PublicKey, Timestamp,
    VersionedChainProperties, WitnessUpdateOperation, MAX_WITNESS_URL_LENGTH,
};

use crate::domain::errors::{EvaluatorError, EvaluatorResult};
use crate::domain::properties::resolve_properties;
use crate::ports::WitnessStore;

/// One registered block producer, keyed uniquely by owner account name.
///
/// Created lazily the first time the owner submits a witness operation and
/// never deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessRecord {
    /// Owning account; the unique key.
    pub owner: AccountName,
    /// Head block time when the record was created.
    pub created: Timestamp,
    /// Block-signing key.
    pub signing_key: PublicKey,
    /// Endpoint URL published by the witness.
    pub url: String,
    /// Current versioned chain-properties payload.
    pub props: VersionedChainProperties,
}

impl WitnessRecord {
    fn new(owner: AccountName, created: Timestamp) -> Self {
        Self {
            owner,
            created,
            signing_key: PublicKey::default(),
            url: String::new(),
            props: VersionedChainProperties::default(),
        }
    }
}

/// Apply a `WitnessUpdate` operation.
///
/// The URL length bound is asymmetric around HF1: once HF1 is active an
/// oversized URL is a hard consensus violation; before activation it is
/// accepted unconditionally and only logged. That asymmetry is consensus
/// behaviour and must survive replay exactly.
///
/// After HF18 the inline `props` field is no longer written; the versioned
/// `ChainPropertiesUpdate` channel supersedes it.
pub fn apply_witness_update(
    ctx: &dyn ChainContext,
    store: &mut dyn WitnessStore,
    op: &WitnessUpdateOperation,
) -> EvaluatorResult<()> {
    if !ctx.account_exists(&op.owner) {
        return Err(EvaluatorError::UnknownAccount(op.owner.clone()));
    }

    if ctx.has_hardfork(Hardfork::Hf1) {
        if op.url.len() > MAX_WITNESS_URL_LENGTH {
            return Err(EvaluatorError::ConsensusRuleViolation {
                field: "url",
                message: format!("length {} exceeds {}", op.url.len(), MAX_WITNESS_URL_LENGTH),
            });
        }
    } else if op.url.len() > MAX_WITNESS_URL_LENGTH {
        warn!(
            owner = %op.owner,
            block = ctx.head_block_num() + 1,
            "witness URL is too long"
        );
    }

    let has_hf18 = ctx.has_hardfork(Hardfork::Hf18);

    let mut record = store
        .get(&op.owner)
        .unwrap_or_else(|| WitnessRecord::new(op.owner.clone(), ctx.head_block_time()));
    record.url = op.url.clone();
    record.signing_key = op.block_signing_key;
    if !has_hf18 {
        record.props = VersionedChainProperties::V18(op.props.clone());
    }
    store.put(record);

    Ok(())
}

/// Apply a `ChainPropertiesUpdate` operation.
///
/// Delegates payload validation to the versioned properties resolver; on
/// success the witness record's props are replaced in place, creating the
/// record lazily with the same rule as `apply_witness_update`.
pub fn apply_chain_properties_update(
    ctx: &dyn ChainContext,
    store: &mut dyn WitnessStore,
    op: &ChainPropertiesUpdateOperation,
) -> EvaluatorResult<()> {
    if !ctx.account_exists(&op.owner) {
        return Err(EvaluatorError::UnknownAccount(op.owner.clone()));
    }

    let props = resolve_properties(ctx, &op.props)?;

    let mut record = store
        .get(&op.owner)
        .unwrap_or_else(|| WitnessRecord::new(op.owner.clone(), ctx.head_block_time()));
    record.props = props;
    store.put(record);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryChainState, MemoryWitnessStore};
    use shared_types::{ChainProperties18, ChainProperties19, HardforkSchedule};

    fn witness_update(owner: &str, url: &str) -> WitnessUpdateOperation {
        WitnessUpdateOperation {
            owner: owner.to_string(),
            url: url.to_string(),
            block_signing_key: [0xAB; 32],
            props: ChainProperties18 {
                account_creation_fee: 5_000,
                ..Default::default()
            },
        }
    }

    #[test]
    fn unknown_owner_is_rejected() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 100);
        let mut store = MemoryWitnessStore::new();

        let err = apply_witness_update(&ctx, &mut store, &witness_update("ghost", "url")).unwrap_err();
        assert_eq!(err, EvaluatorError::UnknownAccount("ghost".to_string()));
        assert!(store.get(&"ghost".to_string()).is_none());
    }

    #[test]
    fn first_update_creates_record_at_head_time() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 1_234).with_account("alice");
        let mut store = MemoryWitnessStore::new();

        apply_witness_update(&ctx, &mut store, &witness_update("alice", "https://alice.example")).unwrap();

        let record = store.get(&"alice".to_string()).unwrap();
        assert_eq!(record.created, 1_234);
        assert_eq!(record.url, "https://alice.example");
        assert_eq!(record.signing_key, [0xAB; 32]);
    }

    #[test]
    fn second_update_keeps_creation_time() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 1_000).with_account("alice");
        let mut store = MemoryWitnessStore::new();
        apply_witness_update(&ctx, &mut store, &witness_update("alice", "one")).unwrap();

        let later = MemoryChainState::new(HardforkSchedule::new(), 20, 2_000).with_account("alice");
        apply_witness_update(&later, &mut store, &witness_update("alice", "two")).unwrap();

        let record = store.get(&"alice".to_string()).unwrap();
        assert_eq!(record.created, 1_000);
        assert_eq!(record.url, "two");
    }

    #[test]
    fn oversized_url_soft_before_hf1_hard_after() {
        let long_url = "x".repeat(300);

        // Inactive HF1: accepted, never rejected regardless of size.
        let pre = MemoryChainState::new(HardforkSchedule::new(), 10, 100).with_account("alice");
        let mut store = MemoryWitnessStore::new();
        apply_witness_update(&pre, &mut store, &witness_update("alice", &long_url)).unwrap();
        assert_eq!(store.get(&"alice".to_string()).unwrap().url.len(), 300);

        // Active HF1: same input, hard rejection.
        let post = MemoryChainState::new(HardforkSchedule::new().schedule(Hardfork::Hf1, 50), 10, 100)
            .with_account("alice");
        let err = apply_witness_update(&post, &mut store, &witness_update("alice", &long_url)).unwrap_err();
        match err {
            EvaluatorError::ConsensusRuleViolation { field, .. } => assert_eq!(field, "url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn inline_props_written_only_before_hf18() {
        let op = witness_update("alice", "url");

        let pre = MemoryChainState::new(HardforkSchedule::new(), 10, 100).with_account("alice");
        let mut store = MemoryWitnessStore::new();
        apply_witness_update(&pre, &mut store, &op).unwrap();
        assert_eq!(
            store.get(&"alice".to_string()).unwrap().props,
            VersionedChainProperties::V18(op.props.clone())
        );

        // After HF18 the inline channel is dead: props remain untouched.
        let post = MemoryChainState::new(HardforkSchedule::new().schedule(Hardfork::Hf18, 50), 10, 100)
            .with_account("alice");
        let mut store = MemoryWitnessStore::new();
        let versioned = ChainPropertiesUpdateOperation {
            owner: "alice".to_string(),
            props: VersionedChainProperties::V19(ChainProperties19::default()),
        };
        apply_chain_properties_update(&post, &mut store, &versioned).unwrap();
        apply_witness_update(&post, &mut store, &op).unwrap();
        assert_eq!(
            store.get(&"alice".to_string()).unwrap().props,
            versioned.props
        );
    }

    #[test]
    fn properties_update_creates_record_lazily() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 777).with_account("bob");
        let mut store = MemoryWitnessStore::new();

        let op = ChainPropertiesUpdateOperation {
            owner: "bob".to_string(),
            props: VersionedChainProperties::V19(ChainProperties19::default()),
        };
        apply_chain_properties_update(&ctx, &mut store, &op).unwrap();

        let record = store.get(&"bob".to_string()).unwrap();
        assert_eq!(record.created, 777);
        assert_eq!(record.props, op.props);
        assert!(record.url.is_empty());
    }

    #[test]
    fn properties_update_rejects_unknown_owner() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 100);
        let mut store = MemoryWitnessStore::new();
        let op = ChainPropertiesUpdateOperation {
            owner: "ghost".to_string(),
            props: VersionedChainProperties::default(),
        };
        assert_eq!(
            apply_chain_properties_update(&ctx, &mut store, &op).unwrap_err(),
            EvaluatorError::UnknownAccount("ghost".to_string())
        );
    }

    #[test]
    fn rejected_payload_leaves_record_unchanged() {
        let ctx = MemoryChainState::new(HardforkSchedule::new(), 10, 100).with_account("alice");
        let mut store = MemoryWitnessStore::new();
        apply_witness_update(&ctx, &mut store, &witness_update("alice", "url")).unwrap();
        let before = store.get(&"alice".to_string()).unwrap();

        let bad = ChainPropertiesUpdateOperation {
            owner: "alice".to_string(),
            props: VersionedChainProperties::V19(ChainProperties19 {
                max_delegated_vesting_interest_rate: u16::MAX,
                ..Default::default()
            }),
        };
        assert!(apply_chain_properties_update(&ctx, &mut store, &bad).is_err());
        assert_eq!(store.get(&"alice".to_string()).unwrap(), before);
    }
}
