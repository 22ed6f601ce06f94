//! Message definitions for the Gateway contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address; defaults to the instantiating sender when omitted.
    /// Expected to be a multi-party approval wallet.
    pub owner: Option<String>,
    /// This chain's bridge ID
    pub this_chain_id: u64,
    /// Remote chain whose attestations are honored for fee settlement;
    /// must differ from `this_chain_id`
    pub fee_chain_id: u64,
    /// Denom playing the native-coin role (e.g. "uluna")
    pub native_denom: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfer Protocol (outbound)
    // ========================================================================
    /// Bridge attached native funds to `recipient` on `dest_chain`.
    /// Exactly one coin of the configured native denom must be attached.
    TransferNative {
        dest_chain: u64,
        recipient: String,
        /// Earmarked reimbursement for whoever submits the claim on the
        /// remote chain; paid out of the claimed amount, not withheld here
        reward: Uint128,
    },
    /// CW20 hook entry point; the inner message must be [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Claim Protocol (inbound)
    // ========================================================================
    /// Release attested funds. The attestation binds the exact argument
    /// tuple; any deviation fails signature verification.
    Claim {
        /// Chain the paired transfer originated on
        src_chain: u64,
        token: String,
        amount: Uint128,
        /// Gasless claim reward paid to the submitting caller
        reward: Uint128,
        recipient: String,
        /// Opaque transaction identifier from the source chain; non-empty
        tx_hash: Binary,
        /// 65-byte r ‖ s ‖ v attestation signature
        signature: Binary,
    },

    // ========================================================================
    // Fee Settlement
    // ========================================================================
    /// Sweep accumulated fees for `token` into the balance ledger, once per
    /// signed attestation of a recent block height.
    SettleFees {
        token: String,
        block_height: u64,
        signature: Binary,
    },

    // ========================================================================
    // Token Registry (owner-only)
    // ========================================================================
    /// Enable or disable a destination chain
    UpdateChain { chain_id: u64, enabled: bool },
    /// Create or overwrite a registry entry. Total write: every field is
    /// set on every call.
    UpdateToken {
        chain_id: u64,
        token: String,
        symbol: String,
        min_amount: Uint128,
        /// Fixed per-transfer fee carve reserved for gasless claim rewards
        claim_reward: Uint128,
        /// Fee-curve threshold, not a hard transfer cap
        max_amount: Uint128,
        min_fee_ppm: u64,
        max_fee_ppm: u64,
        enabled: bool,
        wrapped: bool,
    },
    /// Re-set the display symbol without touching other fields
    UpdateTokenSymbol {
        chain_id: u64,
        token: String,
        symbol: String,
    },
    /// Change which remote chain's attestations settle fees
    UpdateFeeChain { chain_id: u64 },

    // ========================================================================
    // Administrative Safety Valves (owner-only)
    // ========================================================================
    /// Pause the gateway (stops transfers, claims, and settlement)
    Pause {},
    /// Resume the gateway
    Unpause {},
    /// Phase one of ownership transfer: record the candidate
    TransferOwnershipRequest { candidate: String },
    /// Phase two: commit the recorded candidate as the new owner
    TransferOwnership {},
    /// Phase one of signer rotation: record the candidate signer
    /// (0x-hex 20-byte address)
    UpdateSignerRequest { candidate: String },
    /// Phase two: commit the candidate signer. Requires pause so in-flight
    /// claims cannot race the rotation.
    UpdateSigner {},
    /// Phase one of emergency withdrawal: record a destination for `token`
    EmergencyWithdrawRequest { token: String, destination: String },
    /// Phase two: transfer the entire actual custodied balance of `token`
    /// to the recorded destination. Requires pause.
    EmergencyWithdraw { token: String },
    /// Recover funds sent to the contract outside the transfer path: the
    /// difference between the actual custodied balance and the tracked
    /// ledger. Not pause-gated; cannot touch tracked funds.
    Chargeback {
        chain_id: u64,
        token: String,
        destination: String,
    },
}

/// Inner message for CW20 `Send` deposits
#[cw_serde]
pub enum ReceiveMsg {
    /// Bridge the received CW20 tokens to `recipient` on `dest_chain`
    Bridge {
        dest_chain: u64,
        recipient: String,
        reward: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Whether a destination chain is enabled
    #[returns(ChainEnabledResponse)]
    ChainEnabled { chain_id: u64 },

    /// Registry entry for a (chain, token) pair
    #[returns(TokenResponse)]
    Token { chain_id: u64, token: String },

    /// All registry entries under a chain, cursor-paginated
    #[returns(TokensResponse)]
    Tokens {
        chain_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Tracked custodied balance for a token
    #[returns(BalanceResponse)]
    Balance { token: String },

    /// Accumulated unsettled fees for a token
    #[returns(FeeResponse)]
    Fee { token: String },

    /// Current protocol signer, if set
    #[returns(SignerResponse)]
    Signer {},

    /// Pending signer rotation candidate, if any
    #[returns(SignerResponse)]
    PendingSigner {},

    /// Pending ownership transfer candidate, if any
    #[returns(PendingOwnerResponse)]
    PendingOwner {},

    /// Pending emergency withdrawal destination for a token, if any
    #[returns(PendingWithdrawalResponse)]
    PendingWithdrawal { token: String },

    /// Whether a 32-byte attestation fingerprint has been consumed
    #[returns(FingerprintUsedResponse)]
    FingerprintUsed { fingerprint: Binary },

    /// Compute the withholding a transfer would incur, without executing it
    #[returns(SimulateTransferFeeResponse)]
    SimulateTransferFee {
        chain_id: u64,
        token: String,
        amount: Uint128,
        reward: Uint128,
    },
}

// ============================================================================
// Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub this_chain_id: u64,
    pub fee_chain_id: u64,
    pub native_denom: String,
    pub paused: bool,
}

#[cw_serde]
pub struct ChainEnabledResponse {
    pub chain_id: u64,
    pub enabled: bool,
}

#[cw_serde]
pub struct TokenResponse {
    pub chain_id: u64,
    pub token: String,
    pub symbol: String,
    pub min_amount: Uint128,
    pub claim_reward: Uint128,
    pub max_amount: Uint128,
    pub min_fee_ppm: u64,
    pub max_fee_ppm: u64,
    pub enabled: bool,
    pub wrapped: bool,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub token: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct FeeResponse {
    pub token: String,
    pub fee: Uint128,
}

#[cw_serde]
pub struct SignerResponse {
    /// Lowercase 0x-hex 20-byte address, or None when unset
    pub signer: Option<String>,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub candidate: Option<Addr>,
}

#[cw_serde]
pub struct PendingWithdrawalResponse {
    pub token: String,
    pub destination: Option<Addr>,
}

#[cw_serde]
pub struct FingerprintUsedResponse {
    pub used: bool,
}

#[cw_serde]
pub struct SimulateTransferFeeResponse {
    /// Rate-based fee component
    pub curve_fee: Uint128,
    /// Fixed claim-reward carve from the token config
    pub reward_carve: Uint128,
    /// Total withheld into the fee ledger
    pub total_fee: Uint128,
    /// Amount the transfer event would carry
    pub net_amount: Uint128,
}
