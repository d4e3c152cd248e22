//! Cross-subsystem integration tests and the shared apply-pipeline
//! harness they drive.

use lc_01_witness_registry::{
    apply_chain_properties_update, apply_witness_update, EvaluatorResult, MemoryChainState,
    MemoryWitnessStore,
};
use lc_02_account_history::{AccountHistoryIndexer, MemoryHistoryStore};
use shared_types::{BlockNum, Operation, OperationNotification, Timestamp};

pub mod pipeline;
pub mod replay;

/// Three-second block slots from a fixed genesis instant.
pub const GENESIS_TIME: Timestamp = 1_600_000_000;

pub fn slot_time(block: BlockNum) -> Timestamp {
    GENESIS_TIME + block as u64 * 3
}

/// A miniature node: chain state, both stores, and the indexer, applying
/// notifications the way the real pipeline does — witness operations hit
/// their evaluators first, then every operation flows to the indexer.
pub struct TestNode {
    pub chain: MemoryChainState,
    pub witnesses: MemoryWitnessStore,
    pub history: MemoryHistoryStore,
    pub indexer: AccountHistoryIndexer,
}

impl TestNode {
    pub fn new(chain: MemoryChainState) -> Self {
        Self {
            chain,
            witnesses: MemoryWitnessStore::new(),
            history: MemoryHistoryStore::new(),
            indexer: AccountHistoryIndexer::track_all(),
        }
    }

    /// Apply one notification: evaluator side effects, then indexing.
    /// An evaluator rejection aborts the operation before any history
    /// write, mirroring the all-or-nothing rule.
    pub fn apply(&mut self, note: &OperationNotification) -> EvaluatorResult<()> {
        self.chain.advance_head(note.block, slot_time(note.block));

        match &note.op {
            Operation::WitnessUpdate(op) => {
                apply_witness_update(&self.chain, &mut self.witnesses, op)?;
            }
            Operation::ChainPropertiesUpdate(op) => {
                apply_chain_properties_update(&self.chain, &mut self.witnesses, op)?;
            }
            _ => {}
        }

        self.indexer
            .on_operation(&self.chain, &mut self.history, note)
            .expect("history indexing must not fail on valid input");
        Ok(())
    }
}

/// A user-submitted notification with derived provenance.
pub fn user_note(op: Operation, block: BlockNum, trx_in_block: u32) -> OperationNotification {
    OperationNotification {
        op,
        trx_id: [block as u8; 20],
        block,
        trx_in_block,
        op_in_trx: 0,
        virtual_op: false,
    }
}
