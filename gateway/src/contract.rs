//! Gateway Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_chargeback, execute_claim, execute_emergency_withdraw,
    execute_emergency_withdraw_request, execute_pause, execute_receive, execute_settle_fees,
    execute_transfer_native, execute_transfer_ownership, execute_transfer_ownership_request,
    execute_unpause, execute_update_chain, execute_update_fee_chain, execute_update_signer,
    execute_update_signer_request, execute_update_token, execute_update_token_symbol,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_balance, query_chain_enabled, query_config, query_fee, query_fingerprint_used,
    query_pending_owner, query_pending_signer, query_pending_withdrawal, query_signer,
    query_simulate_transfer_fee, query_token, query_tokens,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender,
    };

    if msg.fee_chain_id == msg.this_chain_id {
        return Err(ContractError::SameChainId);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "native denom must not be empty".to_string(),
        });
    }

    let config = Config {
        owner,
        this_chain_id: msg.this_chain_id,
        fee_chain_id: msg.fee_chain_id,
        native_denom: msg.native_denom,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    // The protocol signer starts unset; attested calls fail until the first
    // signer rotation completes

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("this_chain_id", config.this_chain_id.to_string())
        .add_attribute("fee_chain_id", config.fee_chain_id.to_string())
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfer protocol
        ExecuteMsg::TransferNative {
            dest_chain,
            recipient,
            reward,
        } => execute_transfer_native(deps, env, info, dest_chain, recipient, reward),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Claim protocol
        ExecuteMsg::Claim {
            src_chain,
            token,
            amount,
            reward,
            recipient,
            tx_hash,
            signature,
        } => execute_claim(
            deps, env, info, src_chain, token, amount, reward, recipient, tx_hash, signature,
        ),

        // Fee settlement
        ExecuteMsg::SettleFees {
            token,
            block_height,
            signature,
        } => execute_settle_fees(deps, env, info, token, block_height, signature),

        // Token registry
        ExecuteMsg::UpdateChain { chain_id, enabled } => {
            execute_update_chain(deps, info, chain_id, enabled)
        }
        ExecuteMsg::UpdateToken {
            chain_id,
            token,
            symbol,
            min_amount,
            claim_reward,
            max_amount,
            min_fee_ppm,
            max_fee_ppm,
            enabled,
            wrapped,
        } => execute_update_token(
            deps,
            info,
            chain_id,
            token,
            symbol,
            min_amount,
            claim_reward,
            max_amount,
            min_fee_ppm,
            max_fee_ppm,
            enabled,
            wrapped,
        ),
        ExecuteMsg::UpdateTokenSymbol {
            chain_id,
            token,
            symbol,
        } => execute_update_token_symbol(deps, info, chain_id, token, symbol),
        ExecuteMsg::UpdateFeeChain { chain_id } => execute_update_fee_chain(deps, info, chain_id),

        // Administrative safety valves
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::TransferOwnershipRequest { candidate } => {
            execute_transfer_ownership_request(deps, info, candidate)
        }
        ExecuteMsg::TransferOwnership {} => execute_transfer_ownership(deps, info),
        ExecuteMsg::UpdateSignerRequest { candidate } => {
            execute_update_signer_request(deps, info, candidate)
        }
        ExecuteMsg::UpdateSigner {} => execute_update_signer(deps, info),
        ExecuteMsg::EmergencyWithdrawRequest { token, destination } => {
            execute_emergency_withdraw_request(deps, info, token, destination)
        }
        ExecuteMsg::EmergencyWithdraw { token } => {
            execute_emergency_withdraw(deps, env, info, token)
        }
        ExecuteMsg::Chargeback {
            chain_id,
            token,
            destination,
        } => execute_chargeback(deps, env, info, chain_id, token, destination),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ChainEnabled { chain_id } => {
            to_json_binary(&query_chain_enabled(deps, chain_id)?)
        }
        QueryMsg::Token { chain_id, token } => to_json_binary(&query_token(deps, chain_id, token)?),
        QueryMsg::Tokens {
            chain_id,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(deps, chain_id, start_after, limit)?),
        QueryMsg::Balance { token } => to_json_binary(&query_balance(deps, token)?),
        QueryMsg::Fee { token } => to_json_binary(&query_fee(deps, token)?),
        QueryMsg::Signer {} => to_json_binary(&query_signer(deps)?),
        QueryMsg::PendingSigner {} => to_json_binary(&query_pending_signer(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
        QueryMsg::PendingWithdrawal { token } => {
            to_json_binary(&query_pending_withdrawal(deps, token)?)
        }
        QueryMsg::FingerprintUsed { fingerprint } => {
            to_json_binary(&query_fingerprint_used(deps, fingerprint)?)
        }
        QueryMsg::SimulateTransferFee {
            chain_id,
            token,
            amount,
            reward,
        } => to_json_binary(&query_simulate_transfer_fee(
            deps, chain_id, token, amount, reward,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
