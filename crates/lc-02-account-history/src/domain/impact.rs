//! # Operation Impact Extractor
//!
//! One total, exhaustive dispatch over the `Operation` union yielding the
//! set of accounts causally affected by each variant. Set semantics: no
//! duplicates, and callers must not rely on iteration order (the `BTreeSet`
//! order is a determinism aid, not a contract).
//!
//! There is deliberately no wildcard arm. Adding an operation variant
//! fails compilation here until it is given a rule; the rule for a variant
//! with no special-cased participants is its required-authority accounts.
//! A handful of variants impact no account at all by design (their fill
//! events carry the history) and contribute an empty set, not an error.

use std::collections::BTreeSet;

use shared_types::{AccountName, Operation};

/// The set of accounts semantically affected by `op`.
///
/// Deterministic, side-effect free, and total: every variant has a defined
/// mapping and extraction never fails.
pub fn impacted_accounts(op: &Operation) -> BTreeSet<AccountName> {
    let mut impacted = BTreeSet::new();

    match op {
        // Account lifecycle
        Operation::AccountCreate {
            creator,
            new_account_name,
            ..
        } => {
            impacted.insert(new_account_name.clone());
            impacted.insert(creator.clone());
        }
        Operation::AccountUpdate { account } => {
            impacted.insert(account.clone());
        }
        Operation::DeclineVotingRights { account, .. } => {
            impacted.insert(account.clone());
        }

        // Content
        Operation::Comment {
            author,
            parent_author,
            ..
        } => {
            impacted.insert(author.clone());
            if let Some(parent) = parent_author {
                impacted.insert(parent.clone());
            }
        }
        Operation::DeleteComment { author, .. } => {
            impacted.insert(author.clone());
        }
        Operation::Vote { voter, author, .. } => {
            impacted.insert(voter.clone());
            impacted.insert(author.clone());
        }

        // Transfers & vesting
        Operation::Transfer { from, to, .. } => {
            impacted.insert(from.clone());
            impacted.insert(to.clone());
        }
        Operation::TransferToVesting { from, to, .. } => {
            impacted.insert(from.clone());
            // Self-vesting names no target; an explicit target equal to the
            // sender collapses to one account.
            if let Some(to) = to {
                if to != from {
                    impacted.insert(to.clone());
                }
            }
        }
        Operation::WithdrawVesting { account, .. } => {
            impacted.insert(account.clone());
        }
        Operation::DelegateVestingShares {
            delegator,
            delegatee,
            ..
        } => {
            impacted.insert(delegator.clone());
            impacted.insert(delegatee.clone());
        }
        Operation::Convert { owner, .. } => {
            impacted.insert(owner.clone());
        }

        // Savings
        Operation::TransferToSavings { from, to, .. } => {
            impacted.insert(from.clone());
            impacted.insert(to.clone());
        }
        Operation::TransferFromSavings { from, to, .. } => {
            impacted.insert(from.clone());
            impacted.insert(to.clone());
        }
        Operation::CancelTransferFromSavings { from, .. } => {
            impacted.insert(from.clone());
        }

        // Escrow: all three parties, whoever acted
        Operation::EscrowTransfer {
            from, to, agent, ..
        }
        | Operation::EscrowApprove {
            from, to, agent, ..
        }
        | Operation::EscrowDispute {
            from, to, agent, ..
        }
        | Operation::EscrowRelease {
            from, to, agent, ..
        } => {
            impacted.insert(from.clone());
            impacted.insert(to.clone());
            impacted.insert(agent.clone());
        }

        // Witness
        Operation::WitnessUpdate(inner) => {
            impacted.insert(inner.owner.clone());
        }
        Operation::ChainPropertiesUpdate(inner) => {
            impacted.insert(inner.owner.clone());
        }
        Operation::AccountWitnessVote {
            account, witness, ..
        } => {
            impacted.insert(account.clone());
            impacted.insert(witness.clone());
        }
        Operation::AccountWitnessProxy { account, proxy } => {
            impacted.insert(account.clone());
            impacted.insert(proxy.clone());
        }
        Operation::FeedPublish { publisher, .. } => {
            impacted.insert(publisher.clone());
        }
        Operation::Pow { worker_account, .. } => {
            impacted.insert(worker_account.clone());
        }

        // Market
        Operation::LimitOrderCreate { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::LimitOrderCancel { owner, .. } => {
            impacted.insert(owner.clone());
        }
        // Impacts no account by design; the fill events carry the history.
        Operation::CallOrderUpdate { .. } => {}
        Operation::BidCollateral { bidder, .. } => {
            impacted.insert(bidder.clone());
        }

        // Recovery: the subject account, whoever initiated
        Operation::RequestAccountRecovery {
            account_to_recover, ..
        }
        | Operation::RecoverAccount {
            account_to_recover, ..
        }
        | Operation::ChangeRecoveryAccount {
            account_to_recover, ..
        } => {
            impacted.insert(account_to_recover.clone());
        }

        // Assets
        Operation::AssetUpdate { new_issuer, .. } => {
            if let Some(new_issuer) = new_issuer {
                impacted.insert(new_issuer.clone());
            }
        }
        Operation::AssetIssue {
            issue_to_account, ..
        } => {
            impacted.insert(issue_to_account.clone());
        }
        Operation::OverrideTransfer {
            issuer, from, to, ..
        } => {
            impacted.insert(to.clone());
            impacted.insert(from.clone());
            impacted.insert(issuer.clone());
        }

        // Extensibility: exactly the declared signer set, bypassing any
        // field-based rule.
        Operation::Custom { required_auths, .. } => {
            impacted.extend(required_auths.iter().cloned());
        }

        // Virtual operations
        Operation::AuthorReward { author, .. } => {
            impacted.insert(author.clone());
        }
        Operation::CurationReward { curator, .. } => {
            impacted.insert(curator.clone());
        }
        Operation::CommentBenefactorReward {
            benefactor, author, ..
        } => {
            impacted.insert(benefactor.clone());
            impacted.insert(author.clone());
        }
        Operation::LiquidityReward { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::Interest { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::FillConvertRequest { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::FillOrder {
            current_owner,
            open_owner,
            ..
        } => {
            impacted.insert(current_owner.clone());
            impacted.insert(open_owner.clone());
        }
        Operation::FillCallOrder { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::FillSettlementOrder { owner, .. } => {
            impacted.insert(owner.clone());
        }
        Operation::FillVestingWithdraw {
            from_account,
            to_account,
            ..
        } => {
            impacted.insert(from_account.clone());
            impacted.insert(to_account.clone());
        }
        Operation::ExecuteBid { bidder, .. } => {
            impacted.insert(bidder.clone());
        }
        Operation::ShutdownWitness { owner } => {
            impacted.insert(owner.clone());
        }
        Operation::ReturnVestingDelegation { account, .. } => {
            impacted.insert(account.clone());
        }
    }

    impacted
}
