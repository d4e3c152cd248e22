//! # Account History Indexer
//!
//! Consumes "operation applied" notifications and writes the per-account
//! history rows. The operation record is created lazily: the first
//! qualifying account triggers the single insert, every further account
//! reuses the returned id. No qualifying account, no record.
//!
//! Runs on the single apply thread, synchronously with the caller. Either
//! every write commits or the surrounding block application rolls the whole
//! batch back; an `Err` from here means a storage fault or a pipeline bug
//! and must abort the block, it is never a consensus condition.

use tracing::trace;

use shared_types::{ChainContext, OperationNotification};

use crate::domain::entities::{encode_operation, AccountHistoryEntry, OperationRecord, OperationRecordId};
use crate::domain::errors::HistoryResult;
use crate::domain::filter::{is_tracked_content, IndexConfig};
use crate::domain::impact::impacted_accounts;
use crate::ports::HistoryStore;

/// The history-indexing half of the operation-application pipeline.
#[derive(Debug, Clone, Default)]
pub struct AccountHistoryIndexer {
    config: IndexConfig,
}

impl AccountHistoryIndexer {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Index every account and every operation category.
    pub fn track_all() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Process one applied operation.
    ///
    /// Exactly-once, in delivery order: the caller invokes this once per
    /// notification, and sequences assigned here are final.
    pub fn on_operation(
        &self,
        ctx: &dyn ChainContext,
        store: &mut dyn HistoryStore,
        note: &OperationNotification,
    ) -> HistoryResult<()> {
        if self.config.filter_content && !is_tracked_content(&note.op) {
            return Ok(());
        }

        let impacted = impacted_accounts(&note.op);

        // Shared across all accounts impacted by this operation; created on
        // first use and immutable afterwards.
        let mut record_id: Option<OperationRecordId> = None;

        for account in &impacted {
            if !self.config.tracked.is_tracked(account) {
                continue;
            }

            let id = match record_id {
                Some(id) => id,
                None => {
                    let id = store.insert_operation(OperationRecord {
                        trx_id: note.trx_id,
                        block: note.block,
                        trx_in_block: note.trx_in_block,
                        op_in_trx: note.op_in_trx,
                        virtual_op: note.virtual_op,
                        timestamp: ctx.head_block_time(),
                        serialized_op: encode_operation(&note.op)?,
                    })?;
                    record_id = Some(id);
                    id
                }
            };

            let sequence = match store.max_sequence(account)? {
                Some(max) => max + 1,
                None => 0,
            };
            store.insert_entry(AccountHistoryEntry {
                account: account.clone(),
                sequence,
                op: id,
            })?;

            trace!(
                account = %account,
                sequence,
                block = note.block,
                trx_id = %hex::encode(note.trx_id),
                virtual_op = note.virtual_op,
                "indexed operation"
            );
        }

        Ok(())
    }
}
