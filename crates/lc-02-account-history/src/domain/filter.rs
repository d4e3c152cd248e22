//! # Index Filters
//!
//! Operator-side configuration restricting what gets indexed: optional
//! account-name intervals (`track-account-range`) and the content-category
//! allow-list (`filter-posting-ops`). Filtering affects only which history
//! entries are written; it never alters consensus state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shared_types::{AccountName, Operation};

use crate::domain::errors::{HistoryError, HistoryResult};

/// A set of inclusive `[from, to]` account-name intervals.
///
/// Empty means "track every account". Intervals are keyed by their lower
/// bound and assumed non-overlapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedRanges {
    ranges: BTreeMap<AccountName, AccountName>,
}

impl TrackedRanges {
    /// Track everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add one inclusive interval.
    pub fn with_range(mut self, from: &str, to: &str) -> Self {
        self.ranges.insert(from.to_string(), to.to_string());
        self
    }

    /// Parse configured interval strings, each an independent JSON pair
    /// like `["alice","bob"]`. A malformed entry names itself in the error.
    pub fn from_json_pairs<I, S>(entries: I) -> HistoryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranges = BTreeMap::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (from, to): (String, String) =
                serde_json::from_str(entry).map_err(|e| HistoryError::InvalidRange {
                    entry: entry.to_string(),
                    message: e.to_string(),
                })?;
            ranges.insert(from, to);
        }
        Ok(Self { ranges })
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `account` should be indexed: vacuously true when no ranges
    /// are configured, otherwise true iff some interval contains it.
    pub fn is_tracked(&self, account: &str) -> bool {
        if self.ranges.is_empty() {
            return true;
        }
        match self
            .ranges
            .range::<str, _>((std::ops::Bound::Unbounded, std::ops::Bound::Included(account)))
            .next_back()
        {
            Some((_, to)) => account <= to.as_str(),
            None => false,
        }
    }
}

/// Configuration of the account history indexer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Optional account-name intervals; empty tracks all accounts.
    pub tracked: TrackedRanges,
    /// When set, only allow-listed operation categories are indexed.
    pub filter_content: bool,
}

/// The content-filter allow-list: balance-moving and account-shape
/// operations survive filtering, posting/voting traffic does not.
pub fn is_tracked_content(op: &Operation) -> bool {
    matches!(
        op,
        Operation::Transfer { .. }
            | Operation::TransferToVesting { .. }
            | Operation::AccountCreate { .. }
            | Operation::AccountUpdate { .. }
            | Operation::TransferToSavings { .. }
            | Operation::TransferFromSavings { .. }
            | Operation::CancelTransferFromSavings { .. }
            | Operation::EscrowTransfer { .. }
            | Operation::EscrowDispute { .. }
            | Operation::EscrowRelease { .. }
            | Operation::EscrowApprove { .. }
    )
}
