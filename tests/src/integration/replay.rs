//! Replay determinism: applying the same operation sequence twice must
//! leave byte-identical witness registry, operation records, and account
//! history on both runs.

#[cfg(test)]
mod tests {
    use crate::integration::{slot_time, user_note, TestNode, GENESIS_TIME};
    use lc_01_witness_registry::{MemoryChainState, WitnessStore};
    use lc_02_account_history::AccountHistoryApi;
    use shared_types::{
        ChainProperties18, ChainProperties19, ChainPropertiesUpdateOperation, Hardfork,
        HardforkSchedule, Operation, OperationNotification, VersionedChainProperties,
        WitnessUpdateOperation,
    };

    fn chain() -> MemoryChainState {
        MemoryChainState::new(
            HardforkSchedule::new()
                .schedule(Hardfork::Hf1, slot_time(2))
                .schedule(Hardfork::Hf18, slot_time(4))
                .schedule_hf21(slot_time(6)),
            0,
            GENESIS_TIME,
        )
        .with_account("alice")
        .with_account("bob")
        .with_account("charlie")
    }

    /// A stream that crosses every hardfork boundary mid-way.
    fn stream() -> Vec<OperationNotification> {
        let mut notes = vec![
            user_note(
                Operation::WitnessUpdate(WitnessUpdateOperation {
                    owner: "alice".to_string(),
                    // Oversized: soft-accepted at block 1, pre-HF1.
                    url: "u".repeat(300),
                    block_signing_key: [0x01; 32],
                    props: ChainProperties18::default(),
                }),
                1,
                0,
            ),
            user_note(
                Operation::Transfer {
                    from: "alice".into(),
                    to: "bob".into(),
                    amount: 5,
                },
                2,
                0,
            ),
            user_note(
                Operation::WitnessUpdate(WitnessUpdateOperation {
                    owner: "bob".to_string(),
                    url: "https://bob".to_string(),
                    block_signing_key: [0x02; 32],
                    props: ChainProperties18::default(),
                }),
                5,
                0,
            ),
            user_note(
                Operation::ChainPropertiesUpdate(ChainPropertiesUpdateOperation {
                    owner: "alice".to_string(),
                    props: VersionedChainProperties::V19(ChainProperties19::default()),
                }),
                7,
                0,
            ),
        ];
        notes.push(OperationNotification {
            op: Operation::CurationReward {
                curator: "charlie".into(),
                reward: 3,
            },
            trx_id: [0; 20],
            block: 8,
            trx_in_block: 0,
            op_in_trx: 0,
            virtual_op: true,
        });
        notes
    }

    fn fingerprint(node: &TestNode) -> Vec<u8> {
        let mut bytes = Vec::new();
        for owner in ["alice", "bob", "charlie"] {
            if let Some(record) = node.witnesses.get(&owner.to_string()) {
                bytes.extend(bincode::serialize(&record).unwrap());
            }
            let history = node
                .history
                .get_account_history(&owner.to_string(), 0, u32::MAX)
                .unwrap();
            bytes.extend(bincode::serialize(&history).unwrap());
        }
        bytes
    }

    #[test]
    fn two_runs_produce_byte_identical_state() {
        let run = || {
            let mut node = TestNode::new(chain());
            for note in stream() {
                node.apply(&note).unwrap();
            }
            node
        };

        assert_eq!(fingerprint(&run()), fingerprint(&run()));
    }

    #[test]
    fn hardfork_boundaries_replay_identically() {
        let mut node = TestNode::new(chain());
        for note in stream() {
            node.apply(&note).unwrap();
        }

        // The oversized URL applied at block 1 survived (pre-HF1 soft path)
        // and the same payload would now be rejected: state still reflects
        // the historical outcome, not the current rule.
        let alice = node.witnesses.get(&"alice".to_string()).unwrap();
        assert_eq!(alice.url.len(), 300);
        // The block-5 registration ran post-HF18, so bob's record kept the
        // default props rather than the inline channel.
        let bob = node.witnesses.get(&"bob".to_string()).unwrap();
        assert_eq!(bob.props, VersionedChainProperties::default());
        // Alice's block-7 versioned submission (post-HF18) took effect.
        assert!(matches!(alice.props, VersionedChainProperties::V19(_)));
    }
}
