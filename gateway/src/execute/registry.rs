//! Chain and token registry handlers (owner-only).
//!
//! Registry entries are never deleted; disabling is a flag flip. Token
//! writes are total: every field is overwritten on every call, except the
//! symbol which is additionally re-settable on its own.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{TokenConfig, CHAINS, CONFIG, TOKENS};

use super::ensure_owner;

pub fn execute_update_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    enabled: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    // No same-chain bridging
    if chain_id == config.this_chain_id {
        return Err(ContractError::SameChainId);
    }

    CHAINS.save(deps.storage, chain_id, &enabled)?;

    Ok(Response::new()
        .add_attribute("method", "update_chain")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("enabled", enabled.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_update_token(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    token: String,
    symbol: String,
    min_amount: Uint128,
    claim_reward: Uint128,
    max_amount: Uint128,
    min_fee_ppm: u64,
    max_fee_ppm: u64,
    enabled: bool,
    wrapped: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let chain_enabled = CHAINS.may_load(deps.storage, chain_id)?.unwrap_or(false);
    if !chain_enabled {
        return Err(ContractError::ChainNotEnabled { chain_id });
    }

    // The native coin has no mintable contract behind it
    if wrapped && token == config.native_denom {
        return Err(ContractError::WrappedNative);
    }

    let token_config = TokenConfig {
        symbol: symbol.clone(),
        min_amount,
        claim_reward,
        max_amount,
        min_fee_ppm,
        max_fee_ppm,
        enabled,
        wrapped,
    };
    TOKENS.save(deps.storage, (chain_id, &token), &token_config)?;

    Ok(Response::new()
        .add_attribute("method", "update_token")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("symbol", symbol)
        .add_attribute("enabled", enabled.to_string())
        .add_attribute("wrapped", wrapped.to_string()))
}

pub fn execute_update_token_symbol(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    token: String,
    symbol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let mut token_config = TOKENS
        .may_load(deps.storage, (chain_id, &token))?
        .ok_or(ContractError::TokenNotRegistered {
            token: token.clone(),
        })?;
    token_config.symbol = symbol.clone();
    TOKENS.save(deps.storage, (chain_id, &token), &token_config)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_symbol")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("symbol", symbol))
}

pub fn execute_update_fee_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    if chain_id == config.this_chain_id {
        return Err(ContractError::SameChainId);
    }

    config.fee_chain_id = chain_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_fee_chain")
        .add_attribute("fee_chain_id", chain_id.to_string()))
}
