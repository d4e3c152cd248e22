//! # Versioned Properties Resolver
//!
//! Validates a witness-submitted chain-properties payload against the
//! currently active hardfork set. Pure: no side effects, no storage access.
//!
//! The rule table, by payload version:
//!
//! | Version | Gate                    | Rule while gate inactive            |
//! |---------|-------------------------|-------------------------------------|
//! | V19     | `Hf21DelegatedInterest` | delegated interest rate ≤ legacy cap|
//! | V19     | `Hf21CurationBounds`    | legacy floor ≤ min ≤ max curation   |
//! | V21     | `Hf21`                  | shape rejected outright             |
//! | other   | —                       | pass-through                        |
//!
//! Bounds switch at the activation instant, not gradually: the stricter
//! legacy bound applies up to the activation time, the relaxed bound from
//! it onward.

use shared_types::{
    ChainContext, Hardfork, VersionedChainProperties,
    MAX_DELEGATED_VESTING_INTEREST_RATE_PRE_HF21, MIN_CURATION_PERCENT_PRE_HF21,
};

use crate::domain::errors::{EvaluatorError, EvaluatorResult};

/// Validate `submitted` against the hardfork set active in `ctx` and return
/// the normalized payload ready to store.
///
/// Versions without bespoke rules (V18, V22) are accepted as-is. This
/// forward-compatible pass-through is intentional: a payload shape gains
/// validation here when a protocol epoch gives it bounds, and is otherwise
/// stored verbatim.
pub fn resolve_properties(
    ctx: &dyn ChainContext,
    submitted: &VersionedChainProperties,
) -> EvaluatorResult<VersionedChainProperties> {
    match submitted {
        VersionedChainProperties::V19(props) => {
            if !ctx.has_hardfork(Hardfork::Hf21DelegatedInterest)
                && props.max_delegated_vesting_interest_rate
                    > MAX_DELEGATED_VESTING_INTEREST_RATE_PRE_HF21
            {
                return Err(EvaluatorError::ConsensusRuleViolation {
                    field: "max_delegated_vesting_interest_rate",
                    message: format!(
                        "{} exceeds pre-HF21 ceiling {}",
                        props.max_delegated_vesting_interest_rate,
                        MAX_DELEGATED_VESTING_INTEREST_RATE_PRE_HF21
                    ),
                });
            }
            if !ctx.has_hardfork(Hardfork::Hf21CurationBounds) {
                if props.min_curation_percent < MIN_CURATION_PERCENT_PRE_HF21 {
                    return Err(EvaluatorError::ConsensusRuleViolation {
                        field: "min_curation_percent",
                        message: format!(
                            "{} below pre-HF21 floor {}",
                            props.min_curation_percent, MIN_CURATION_PERCENT_PRE_HF21
                        ),
                    });
                }
                if props.min_curation_percent > props.max_curation_percent {
                    return Err(EvaluatorError::ConsensusRuleViolation {
                        field: "min_curation_percent",
                        message: format!(
                            "{} exceeds max_curation_percent {}",
                            props.min_curation_percent, props.max_curation_percent
                        ),
                    });
                }
            }
            Ok(submitted.clone())
        }
        VersionedChainProperties::V21(_) => {
            if !ctx.has_hardfork(Hardfork::Hf21) {
                return Err(EvaluatorError::PrematureFeatureUse {
                    feature: "chain_properties_21",
                    hardfork: Hardfork::Hf21,
                });
            }
            Ok(submitted.clone())
        }
        // Forward-compatible pass-through for shapes without bespoke rules.
        VersionedChainProperties::V18(_) | VersionedChainProperties::V22(_) => {
            Ok(submitted.clone())
        }
    }
}
