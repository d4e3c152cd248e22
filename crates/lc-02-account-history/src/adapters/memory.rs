//! In-memory implementation of the history store: two ordered maps
//! mirroring the persistent layout (records by id, entries by
//! `(account, sequence)`).

use std::collections::BTreeMap;

use shared_types::AccountName;

use crate::domain::entities::{
    AccountHistoryEntry, AppliedOperation, OperationRecord, OperationRecordId,
};
use crate::domain::errors::{HistoryError, HistoryResult};
use crate::ports::{AccountHistoryApi, HistoryStore};

/// In-memory `HistoryStore` and `AccountHistoryApi`.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    next_id: OperationRecordId,
    records: BTreeMap<OperationRecordId, OperationRecord>,
    entries: BTreeMap<(AccountName, u32), OperationRecordId>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored operation records.
    pub fn operation_count(&self) -> usize {
        self.records.len()
    }

    /// All entries for `account` in ascending sequence order.
    pub fn entries_for(&self, account: &str) -> Vec<AccountHistoryEntry> {
        self.entries
            .range((account.to_string(), 0)..=(account.to_string(), u32::MAX))
            .map(|((account, sequence), op)| AccountHistoryEntry {
                account: account.clone(),
                sequence: *sequence,
                op: *op,
            })
            .collect()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn insert_operation(&mut self, record: OperationRecord) -> HistoryResult<OperationRecordId> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, record);
        Ok(id)
    }

    fn get_operation(&self, id: OperationRecordId) -> HistoryResult<Option<OperationRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn max_sequence(&self, account: &AccountName) -> HistoryResult<Option<u32>> {
        Ok(self
            .entries
            .range((account.clone(), 0)..=(account.clone(), u32::MAX))
            .next_back()
            .map(|((_, sequence), _)| *sequence))
    }

    fn insert_entry(&mut self, entry: AccountHistoryEntry) -> HistoryResult<()> {
        if !self.records.contains_key(&entry.op) {
            return Err(HistoryError::MissingRecord(entry.op));
        }
        let key = (entry.account, entry.sequence);
        if self.entries.contains_key(&key) {
            return Err(HistoryError::Storage(format!(
                "duplicate history key ({}, {})",
                key.0, key.1
            )));
        }
        self.entries.insert(key, entry.op);
        Ok(())
    }
}

impl AccountHistoryApi for MemoryHistoryStore {
    fn get_account_history(
        &self,
        account: &AccountName,
        start: u32,
        limit: u32,
    ) -> HistoryResult<Vec<(u32, AppliedOperation)>> {
        let mut out = Vec::new();
        for ((_, sequence), id) in self
            .entries
            .range((account.clone(), start)..=(account.clone(), u32::MAX))
            .take(limit as usize)
        {
            let record = self
                .records
                .get(id)
                .ok_or(HistoryError::MissingRecord(*id))?;
            out.push((*sequence, AppliedOperation::from_record(record)?));
        }
        Ok(out)
    }
}
