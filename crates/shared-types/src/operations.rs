//! # The Operation Union
//!
//! Every kind of ledger mutation — user-submitted or virtually generated —
//! is one variant of the closed [`Operation`] enum. The enum is versioned
//! by the protocol as a whole: adding a variant is a hardfork, so the union
//! is deliberately closed and downstream dispatch is exhaustive.
//!
//! Amount fields are base-unit integers; asset/precision bookkeeping lives
//! in the economic engine, not here.

use serde::{Deserialize, Serialize};

use crate::entities::{AccountName, PublicKey};
use crate::properties::{ChainProperties18, VersionedChainProperties};

/// Payload of `Operation::WitnessUpdate`.
///
/// Registers or updates a block producer. The inline `props` channel is the
/// legacy (pre-HF18) way of submitting chain parameters; after HF18 it is
/// ignored in favour of [`ChainPropertiesUpdateOperation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessUpdateOperation {
    pub owner: AccountName,
    pub url: String,
    pub block_signing_key: PublicKey,
    pub props: ChainProperties18,
}

/// Payload of `Operation::ChainPropertiesUpdate`.
///
/// Submits a versioned chain-properties payload for the owner's witness
/// record. Validation is hardfork-gated; see the witness registry crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainPropertiesUpdateOperation {
    pub owner: AccountName,
    pub props: VersionedChainProperties,
}

/// The closed union of every operation kind the ledger applies.
///
/// Variants marked *(virtual)* are generated by the ledger itself and never
/// appear in user-submitted transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    // =========================================================================
    // ACCOUNT LIFECYCLE
    // =========================================================================
    /// Create a new account funded by `creator`.
    AccountCreate {
        creator: AccountName,
        new_account_name: AccountName,
        fee: u64,
    },
    /// Update keys/metadata of an existing account.
    AccountUpdate { account: AccountName },
    /// Permanently decline the ability to vote.
    DeclineVotingRights { account: AccountName, decline: bool },

    // =========================================================================
    // CONTENT
    // =========================================================================
    /// Post or edit a comment. `parent_author` is absent for root posts.
    Comment {
        author: AccountName,
        parent_author: Option<AccountName>,
        permlink: String,
    },
    /// Delete a comment.
    DeleteComment { author: AccountName, permlink: String },
    /// Vote on a comment.
    Vote {
        voter: AccountName,
        author: AccountName,
        permlink: String,
        weight: i16,
    },

    // =========================================================================
    // TRANSFERS & VESTING
    // =========================================================================
    /// Move liquid funds from one account to another.
    Transfer {
        from: AccountName,
        to: AccountName,
        amount: u64,
    },
    /// Convert liquid funds into vesting shares. `to` absent means self.
    TransferToVesting {
        from: AccountName,
        to: Option<AccountName>,
        amount: u64,
    },
    /// Begin powering down vesting shares.
    WithdrawVesting {
        account: AccountName,
        vesting_shares: u64,
    },
    /// Delegate vesting shares to another account.
    DelegateVestingShares {
        delegator: AccountName,
        delegatee: AccountName,
        vesting_shares: u64,
    },
    /// Request conversion between the two liquid assets.
    Convert {
        owner: AccountName,
        request_id: u32,
        amount: u64,
    },

    // =========================================================================
    // SAVINGS
    // =========================================================================
    /// Move funds into the time-locked savings balance.
    TransferToSavings {
        from: AccountName,
        to: AccountName,
        amount: u64,
    },
    /// Schedule a withdrawal from savings.
    TransferFromSavings {
        from: AccountName,
        to: AccountName,
        request_id: u32,
        amount: u64,
    },
    /// Cancel a pending savings withdrawal.
    CancelTransferFromSavings { from: AccountName, request_id: u32 },

    // =========================================================================
    // ESCROW
    // =========================================================================
    /// Open an escrow between `from` and `to`, mediated by `agent`.
    EscrowTransfer {
        from: AccountName,
        to: AccountName,
        agent: AccountName,
        escrow_id: u32,
        amount: u64,
    },
    /// Approve (or reject) participation in an escrow.
    EscrowApprove {
        from: AccountName,
        to: AccountName,
        agent: AccountName,
        who: AccountName,
        escrow_id: u32,
        approve: bool,
    },
    /// Raise an escrow dispute, handing control to the agent.
    EscrowDispute {
        from: AccountName,
        to: AccountName,
        agent: AccountName,
        who: AccountName,
        escrow_id: u32,
    },
    /// Release escrowed funds to `receiver`.
    EscrowRelease {
        from: AccountName,
        to: AccountName,
        agent: AccountName,
        who: AccountName,
        receiver: AccountName,
        escrow_id: u32,
        amount: u64,
    },

    // =========================================================================
    // WITNESS
    // =========================================================================
    /// Register or update a witness (signing key, URL, legacy props).
    WitnessUpdate(WitnessUpdateOperation),
    /// Submit versioned chain properties for a witness.
    ChainPropertiesUpdate(ChainPropertiesUpdateOperation),
    /// Vote for (or withdraw a vote from) a witness.
    AccountWitnessVote {
        account: AccountName,
        witness: AccountName,
        approve: bool,
    },
    /// Delegate witness voting to a proxy account.
    AccountWitnessProxy {
        account: AccountName,
        proxy: AccountName,
    },
    /// Publish a price feed.
    FeedPublish { publisher: AccountName, base: u64, quote: u64 },
    /// Legacy proof-of-work account mining.
    Pow { worker_account: AccountName, nonce: u64 },

    // =========================================================================
    // MARKET
    // =========================================================================
    /// Place a limit order.
    LimitOrderCreate {
        owner: AccountName,
        order_id: u32,
        amount_to_sell: u64,
        min_to_receive: u64,
    },
    /// Cancel a limit order.
    LimitOrderCancel { owner: AccountName, order_id: u32 },
    /// Adjust a margin position's collateral and debt. Impacts no account
    /// history by design: the fill events carry the history.
    CallOrderUpdate {
        funding_account: AccountName,
        delta_collateral: i64,
        delta_debt: i64,
    },
    /// Bid collateral during a settlement auction.
    BidCollateral { bidder: AccountName, amount: u64 },

    // =========================================================================
    // RECOVERY
    // =========================================================================
    /// Ask one's recovery partner to initiate account recovery.
    RequestAccountRecovery {
        recovery_account: AccountName,
        account_to_recover: AccountName,
    },
    /// Complete an account recovery with the new owner authority.
    RecoverAccount { account_to_recover: AccountName },
    /// Change which account may initiate future recoveries.
    ChangeRecoveryAccount {
        account_to_recover: AccountName,
        new_recovery_account: AccountName,
    },

    // =========================================================================
    // ASSETS
    // =========================================================================
    /// Update a user-issued asset; may hand it to a new issuer.
    AssetUpdate {
        issuer: AccountName,
        new_issuer: Option<AccountName>,
        symbol: String,
    },
    /// Issue units of a user-issued asset to an account.
    AssetIssue {
        issuer: AccountName,
        issue_to_account: AccountName,
        symbol: String,
        amount: u64,
    },
    /// Issuer-forced transfer of a user-issued asset.
    OverrideTransfer {
        issuer: AccountName,
        from: AccountName,
        to: AccountName,
        symbol: String,
        amount: u64,
    },

    // =========================================================================
    // EXTENSIBILITY
    // =========================================================================
    /// Opaque application-defined payload. Authorized by exactly the listed
    /// accounts, which are also the accounts it impacts.
    Custom {
        required_auths: Vec<AccountName>,
        id: u16,
        data: Vec<u8>,
    },

    // =========================================================================
    // VIRTUAL OPERATIONS (ledger-generated)
    // =========================================================================
    /// *(virtual)* Author share of a comment payout.
    AuthorReward { author: AccountName, reward: u64 },
    /// *(virtual)* Curator share of a comment payout.
    CurationReward { curator: AccountName, reward: u64 },
    /// *(virtual)* Benefactor share of a comment payout.
    CommentBenefactorReward {
        benefactor: AccountName,
        author: AccountName,
        reward: u64,
    },
    /// *(virtual)* Liquidity mining reward.
    LiquidityReward { owner: AccountName, payout: u64 },
    /// *(virtual)* Interest paid on a savings balance.
    Interest { owner: AccountName, interest: u64 },
    /// *(virtual)* A conversion request came due and was filled.
    FillConvertRequest {
        owner: AccountName,
        request_id: u32,
        amount_out: u64,
    },
    /// *(virtual)* Two limit orders matched.
    FillOrder {
        current_owner: AccountName,
        open_owner: AccountName,
        current_pays: u64,
        open_pays: u64,
    },
    /// *(virtual)* A margin call order was filled.
    FillCallOrder { owner: AccountName, debt: u64 },
    /// *(virtual)* A settlement order was filled.
    FillSettlementOrder { owner: AccountName, amount: u64 },
    /// *(virtual)* One step of a vesting withdrawal was paid out.
    FillVestingWithdraw {
        from_account: AccountName,
        to_account: AccountName,
        withdrawn: u64,
    },
    /// *(virtual)* A collateral bid was executed.
    ExecuteBid { bidder: AccountName, collateral: u64 },
    /// *(virtual)* A witness missed too many blocks and was shut down.
    ShutdownWitness { owner: AccountName },
    /// *(virtual)* An expired vesting delegation returned to the delegator.
    ReturnVestingDelegation {
        account: AccountName,
        vesting_shares: u64,
    },
}
