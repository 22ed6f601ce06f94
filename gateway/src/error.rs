//! Error types for the Gateway contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: attestation not signed by the protocol signer")]
    UnauthorizedSigner,

    // ========================================================================
    // State Errors
    // ========================================================================

    #[error("Contract is paused")]
    ContractPaused,

    #[error("Contract is not paused")]
    ContractNotPaused,

    #[error("Chain not enabled: {chain_id}")]
    ChainNotEnabled { chain_id: u64 },

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Token not enabled: {token}")]
    TokenNotEnabled { token: String },

    #[error("Fee chain is disabled")]
    FeeChainDisabled,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    #[error("No pending signer rotation")]
    NoPendingSigner,

    #[error("No pending emergency withdrawal for token: {token}")]
    NoPendingWithdrawal { token: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Source chain ID cannot be used as destination")]
    SameChainId,

    #[error("Incompatible chains: claim source must be a remote chain")]
    IncompatibleChains,

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Minimum transfer amount is {min_amount}")]
    BelowMinimumAmount { min_amount: Uint128 },

    #[error("Transaction identifier must not be empty")]
    EmptyTxHash,

    #[error("Claim reward must be nonzero unless the caller is the recipient")]
    ZeroClaimReward,

    #[error("Invalid signature: expected 65 bytes, got {got}")]
    InvalidSignatureLength { got: usize },

    #[error("Invalid signature 'v' value")]
    InvalidSignatureV,

    #[error("Invalid signature 's' value")]
    InvalidSignatureS,

    #[error("Invalid signer address: {reason}")]
    InvalidSignerAddress { reason: String },

    #[error("Native coin cannot be a wrapped representation")]
    WrappedNative,

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid block: height {height} is in the future")]
    BlockInFuture { height: u64 },

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Duplicate attestation: fingerprint already consumed")]
    DuplicateAttestation,

    // ========================================================================
    // Invariant Errors
    // ========================================================================

    #[error("Fee and reward exceed transfer amount")]
    FeeExceedsAmount,

    #[error("Claim reward exceeds transfer amount")]
    RewardExceedsAmount,

    #[error("Insufficient tracked liquidity for token: {token}")]
    InsufficientLiquidity { token: String },

    #[error("Nothing to recover for token: {token}")]
    NothingToRecover { token: String },
}
