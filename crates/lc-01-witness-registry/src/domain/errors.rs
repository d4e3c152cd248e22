//! Error types for the witness registry subsystem.

use shared_types::{AccountName, Hardfork};

/// Failures that abort the application of a witness-configuration
/// operation.
///
/// Every variant is fatal to the enclosing operation: the caller rejects
/// the whole operation and leaves ledger state unchanged. None of these is
/// a warning; the only soft path (pre-HF1 oversized URL) is logged, not
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluatorError {
    /// The referenced owner account does not exist.
    #[error("unknown account: {0}")]
    UnknownAccount(AccountName),

    /// A hardfork-gated bound was violated. Names the offending field and
    /// the bound that failed.
    #[error("consensus rule violation: {field} {message}")]
    ConsensusRuleViolation {
        field: &'static str,
        message: String,
    },

    /// A payload shape was submitted before the hardfork that introduces it.
    #[error("{feature} requires hardfork {hardfork:?}")]
    PrematureFeatureUse {
        feature: &'static str,
        hardfork: Hardfork,
    },
}

/// Result type for evaluator operations.
pub type EvaluatorResult<T> = Result<T, EvaluatorError>;
