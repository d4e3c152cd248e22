//! The two subsystems working against one apply stream: evaluator
//! rejections must leave history untouched, and accepted witness
//! operations must show up both in the registry and in the owner's
//! history.

#[cfg(test)]
mod tests {
    use crate::integration::{user_note, TestNode};
    use lc_01_witness_registry::{EvaluatorError, WitnessStore};
    use lc_02_account_history::AccountHistoryApi;
    use shared_types::{
        ChainProperties18, ChainProperties21, ChainPropertiesUpdateOperation, Hardfork,
        HardforkSchedule, Operation, VersionedChainProperties, WitnessUpdateOperation,
    };

    fn node_with_accounts() -> TestNode {
        let chain = lc_01_witness_registry::MemoryChainState::new(
            HardforkSchedule::new()
                .schedule(Hardfork::Hf1, 0)
                .schedule(Hardfork::Hf18, 0)
                .schedule_hf21(crate::integration::slot_time(1_000)),
            0,
            crate::integration::GENESIS_TIME,
        )
        .with_account("alice")
        .with_account("bob");
        TestNode::new(chain)
    }

    fn witness_update(owner: &str) -> Operation {
        Operation::WitnessUpdate(WitnessUpdateOperation {
            owner: owner.to_string(),
            url: format!("https://{owner}.example"),
            block_signing_key: [0x11; 32],
            props: ChainProperties18::default(),
        })
    }

    #[test]
    fn accepted_witness_update_lands_in_registry_and_history() {
        let mut node = node_with_accounts();
        node.apply(&user_note(witness_update("alice"), 1, 0)).unwrap();

        let record = node.witnesses.get(&"alice".to_string()).unwrap();
        assert_eq!(record.url, "https://alice.example");
        assert_eq!(record.created, crate::integration::slot_time(1));

        let history = node
            .history
            .get_account_history(&"alice".to_string(), 0, 10)
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].1.op, witness_update("alice"));
    }

    #[test]
    fn rejected_operation_writes_no_history() {
        let mut node = node_with_accounts();

        // V21 payload long before HF21 activates.
        let premature = Operation::ChainPropertiesUpdate(ChainPropertiesUpdateOperation {
            owner: "alice".to_string(),
            props: VersionedChainProperties::V21(ChainProperties21::default()),
        });
        let err = node.apply(&user_note(premature, 1, 0)).unwrap_err();
        assert!(matches!(err, EvaluatorError::PrematureFeatureUse { .. }));

        assert!(node.witnesses.is_empty());
        assert!(node
            .history
            .get_account_history(&"alice".to_string(), 0, 10)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_owner_rejected_before_any_write() {
        let mut node = node_with_accounts();
        let err = node.apply(&user_note(witness_update("ghost"), 1, 0)).unwrap_err();
        assert_eq!(err, EvaluatorError::UnknownAccount("ghost".to_string()));
        assert!(node.witnesses.is_empty());
        assert_eq!(node.history.operation_count(), 0);
    }

    #[test]
    fn transfers_and_witness_ops_interleave_in_one_history() {
        let mut node = node_with_accounts();
        node.apply(&user_note(witness_update("alice"), 1, 0)).unwrap();
        node.apply(&user_note(
            Operation::Transfer {
                from: "alice".into(),
                to: "bob".into(),
                amount: 10,
            },
            2,
            0,
        ))
        .unwrap();

        let history = node
            .history
            .get_account_history(&"alice".to_string(), 0, 10)
            .unwrap();
        let sequences: Vec<u32> = history.iter().map(|(s, _)| *s).collect();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(node.history.operation_count(), 2);
    }
}
