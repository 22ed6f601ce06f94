//! State definitions for the Gateway contract.
//!
//! This module defines all storage structures and state maps: the core
//! configuration, the per-(chain, token) registry, the accounting ledger,
//! the replay guard, and the pending two-phase admin actions.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address; expected to be a multi-party approval wallet, but any
    /// address capable of invoking owner-gated entry points qualifies
    pub owner: Addr,
    /// This chain's bridge ID; can never be enabled as a destination
    pub this_chain_id: u64,
    /// Remote chain whose attestations are honored for fee settlement
    pub fee_chain_id: u64,
    /// Denom playing the native-coin role in the token registry
    pub native_denom: String,
    /// Whether the gateway is currently paused
    pub paused: bool,
}

/// Per-(destination chain, token) registry entry.
///
/// Every field is overwritten on each registry update; there is no partial
/// update apart from the symbol, which is re-settable on its own.
#[cw_serde]
pub struct TokenConfig {
    /// Display symbol, informational only
    pub symbol: String,
    /// Inclusive lower bound on a single transfer's gross amount
    pub min_amount: Uint128,
    /// Fixed per-transfer fee carve reserved for gasless claim rewards
    pub claim_reward: Uint128,
    /// Fee-curve threshold; NOT a hard cap on transfer size
    pub max_amount: Uint128,
    /// Fee rate in parts per million for amounts below `max_amount`
    pub min_fee_ppm: u64,
    /// Fee rate in parts per million for amounts at or above `max_amount`
    pub max_fee_ppm: u64,
    /// Whether this token accepts transfers and claims
    pub enabled: bool,
    /// Whether this is a bridge-minted representation (mint on claim,
    /// burn on transfer-out); never valid for the native denom
    pub wrapped: bool,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Destination chain enablement
/// Key: chain ID, Value: enabled
pub const CHAINS: Map<u64, bool> = Map::new("chains");

/// Token registry
/// Key: (destination chain ID, token identifier), Value: TokenConfig
pub const TOKENS: Map<(u64, &str), TokenConfig> = Map::new("tokens");

// ============================================================================
// Accounting Ledger
// ============================================================================

/// Funds currently custodied or owed on this chain, per token.
/// For wrapped tokens this is only a transient fee-routing register.
pub const BALANCES: Map<&str, Uint128> = Map::new("balances");

/// Protocol revenue awaiting settlement, per token
pub const FEES: Map<&str, Uint128> = Map::new("fees");

// ============================================================================
// Oracle State & Replay Guard
// ============================================================================

/// Current protocol signer as a lowercase 0x-hex 20-byte address.
/// Unset until the first signer rotation completes; every attested call
/// fails until then.
pub const SIGNER: Item<String> = Item::new("signer");

/// Pending signer rotation target
pub const SIGNER_CANDIDATE: Item<String> = Item::new("signer_candidate");

/// Consumed attestation fingerprints (claim and fee settlement share this
/// set). Append-only; entries are never removed.
pub const USED_FINGERPRINTS: Map<&[u8], bool> = Map::new("used_fingerprints");

// ============================================================================
// Pending Two-Phase Actions
// ============================================================================

/// Pending ownership transfer candidate
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Pending emergency withdrawal destinations
/// Key: token identifier, Value: destination address
pub const PENDING_WITHDRAWALS: Map<&str, Addr> = Map::new("pending_withdrawals");
