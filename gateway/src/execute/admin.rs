//! Administrative safety valves (owner-only).
//!
//! This module handles:
//! - Pause/unpause
//! - Two-phase ownership transfer (request/commit)
//! - Two-phase signer rotation (request/commit, commit requires pause)
//! - Two-phase emergency withdrawal (request/commit, commit requires pause)
//! - Chargeback of untracked incoming funds

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{
    BALANCES, CONFIG, FEES, PENDING_OWNER, PENDING_WITHDRAWALS, SIGNER, SIGNER_CANDIDATE,
};
use crate::verify::normalize_signer_address;

use super::{ensure_owner, token_asset};

// ============================================================================
// Pause/Unpause
// ============================================================================

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;
    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;
    if !config.paused {
        return Err(ContractError::ContractNotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Record an ownership transfer candidate.
pub fn execute_transfer_ownership_request(
    deps: DepsMut,
    info: MessageInfo,
    candidate: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let candidate_addr = deps.api.addr_validate(&candidate)?;
    PENDING_OWNER.save(deps.storage, &candidate_addr)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership_request")
        .add_attribute("candidate", candidate_addr))
}

/// Commit the recorded candidate as the new owner.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let candidate = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    config.owner = candidate.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("new_owner", candidate))
}

// ============================================================================
// Signer Rotation
// ============================================================================

/// Record a signer rotation candidate.
pub fn execute_update_signer_request(
    deps: DepsMut,
    info: MessageInfo,
    candidate: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let normalized = normalize_signer_address(&candidate)?;
    SIGNER_CANDIDATE.save(deps.storage, &normalized)?;

    Ok(Response::new()
        .add_attribute("method", "update_signer_request")
        .add_attribute("candidate", normalized))
}

/// Commit the candidate signer. Requires pause so in-flight claims cannot
/// race the rotation.
pub fn execute_update_signer(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;
    if !config.paused {
        return Err(ContractError::ContractNotPaused);
    }

    let candidate = SIGNER_CANDIDATE
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingSigner)?;

    SIGNER.save(deps.storage, &candidate)?;
    SIGNER_CANDIDATE.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "update_signer")
        .add_attribute("signer", candidate))
}

// ============================================================================
// Emergency Withdrawal
// ============================================================================

/// Record an emergency withdrawal destination for a token.
pub fn execute_emergency_withdraw_request(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let destination_addr = deps.api.addr_validate(&destination)?;
    PENDING_WITHDRAWALS.save(deps.storage, &token, &destination_addr)?;

    Ok(Response::new()
        .add_attribute("method", "emergency_withdraw_request")
        .add_attribute("caller", info.sender)
        .add_attribute("token", token)
        .add_attribute("destination", destination_addr))
}

/// Transfer the entire actual custodied balance of `token` to the recorded
/// destination. Requires pause.
///
/// The tracked ledger is intentionally not reconciled here: zeroing it could
/// misstate obligations if only part of the custody was actually stuck. The
/// owner reconciles separately after recovery.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;
    if !config.paused {
        return Err(ContractError::ContractNotPaused);
    }

    let destination = PENDING_WITHDRAWALS
        .may_load(deps.storage, &token)?
        .ok_or(ContractError::NoPendingWithdrawal {
            token: token.clone(),
        })?;

    let asset = token_asset(deps.as_ref(), &config, &token)?;
    let custodied = asset.query_balance(deps.as_ref(), &env)?;
    if custodied.is_zero() {
        return Err(ContractError::NothingToRecover { token });
    }

    PENDING_WITHDRAWALS.remove(deps.storage, &token);

    Ok(Response::new()
        .add_message(asset.transfer_msg(&destination, custodied)?)
        .add_attribute("method", "emergency_withdraw")
        .add_attribute("caller", info.sender)
        .add_attribute("token", token)
        .add_attribute("destination", destination)
        .add_attribute("amount", custodied.to_string()))
}

// ============================================================================
// Chargeback
// ============================================================================

/// Recover funds sent to the contract outside the transfer path.
///
/// Only the difference between the actual custodied balance and the tracked
/// `balances + fees` can leave; tracked funds are untouchable here by
/// construction, so no pause gate is needed.
pub fn execute_chargeback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u64,
    token: String,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let destination_addr = deps.api.addr_validate(&destination)?;

    // The token must be registered under the given chain; chargeback is not
    // a path for arbitrary assets the gateway has never dealt in
    if !crate::state::TOKENS.has(deps.storage, (chain_id, &token)) {
        return Err(ContractError::TokenNotRegistered {
            token: token.clone(),
        });
    }

    let asset = token_asset(deps.as_ref(), &config, &token)?;
    let custodied = asset.query_balance(deps.as_ref(), &env)?;

    let balance = BALANCES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    let fees = FEES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    let tracked = balance + fees;

    let untracked = custodied.saturating_sub(tracked);
    if untracked.is_zero() {
        return Err(ContractError::NothingToRecover { token });
    }

    Ok(Response::new()
        .add_message(asset.transfer_msg(&destination_addr, untracked)?)
        .add_attribute("method", "chargeback")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("destination", destination_addr)
        .add_attribute("amount", untracked.to_string()))
}
