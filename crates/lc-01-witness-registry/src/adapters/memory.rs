//! In-memory implementations of the witness registry ports.

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{AccountName, BlockNum, ChainContext, Hardfork, HardforkSchedule, Timestamp};

use crate::domain::registry::WitnessRecord;
use crate::ports::WitnessStore;

/// In-memory implementation of `WitnessStore`.
#[derive(Debug, Default)]
pub struct MemoryWitnessStore {
    records: BTreeMap<AccountName, WitnessRecord>,
}

impl MemoryWitnessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered witnesses.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WitnessStore for MemoryWitnessStore {
    fn get(&self, owner: &AccountName) -> Option<WitnessRecord> {
        self.records.get(owner).cloned()
    }

    fn put(&mut self, record: WitnessRecord) {
        self.records.insert(record.owner.clone(), record);
    }
}

/// In-memory chain state: a hardfork schedule, a head block, and the set of
/// known accounts. Deterministic by construction, which makes it usable
/// both as a test fixture and as the context for replay harnesses.
#[derive(Debug, Clone)]
pub struct MemoryChainState {
    schedule: HardforkSchedule,
    head_block_num: BlockNum,
    head_block_time: Timestamp,
    accounts: BTreeSet<AccountName>,
}

impl MemoryChainState {
    pub fn new(schedule: HardforkSchedule, head_block_num: BlockNum, head_block_time: Timestamp) -> Self {
        Self {
            schedule,
            head_block_num,
            head_block_time,
            accounts: BTreeSet::new(),
        }
    }

    /// Register an existing account.
    pub fn with_account(mut self, name: &str) -> Self {
        self.accounts.insert(name.to_string());
        self
    }

    /// Advance the head block. Hardfork activation follows automatically
    /// from the schedule and the new head time.
    pub fn advance_head(&mut self, block_num: BlockNum, block_time: Timestamp) {
        self.head_block_num = block_num;
        self.head_block_time = block_time;
    }
}

impl ChainContext for MemoryChainState {
    fn head_block_num(&self) -> BlockNum {
        self.head_block_num
    }

    fn head_block_time(&self) -> Timestamp {
        self.head_block_time
    }

    fn has_hardfork(&self, hardfork: Hardfork) -> bool {
        self.schedule.is_active(hardfork, self.head_block_time)
    }

    fn account_exists(&self, name: &AccountName) -> bool {
        self.accounts.contains(name)
    }
}
