//! Outbound transfer handlers.
//!
//! Transfers take user funds into custody (or burn them, for bridge-minted
//! tokens), withhold the protocol fee into the fee ledger, and emit the
//! event the off-chain relay watches for.

use cosmwasm_std::{from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use common::AssetInfo;

use crate::error::ContractError;
use crate::fee::compute_withholding;
use crate::msg::ReceiveMsg;
use crate::state::{Config, BALANCES, CHAINS, CONFIG, FEES, TOKENS};

use super::ensure_not_paused;

/// Execute handler for bridging attached native funds.
pub fn execute_transfer_native(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    dest_chain: u64,
    recipient: String,
    reward: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidFunds {
            reason: "only one coin allowed per transfer".to_string(),
        });
    }
    let coin = &info.funds[0];
    if coin.denom != config.native_denom {
        return Err(ContractError::InvalidFunds {
            reason: format!("expected {}, got {}", config.native_denom, coin.denom),
        });
    }

    let token = config.native_denom.clone();
    let sender = info.sender.clone();
    process_transfer(
        deps,
        &config,
        token,
        coin.amount,
        dest_chain,
        recipient,
        reward,
        sender,
    )
}

/// Execute handler for CW20 deposits arriving through the `Send` hook.
pub fn execute_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // The calling contract is the token being bridged
    let token = info.sender.to_string();
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = cw20_msg.amount;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match receive_msg {
        ReceiveMsg::Bridge {
            dest_chain,
            recipient,
            reward,
        } => process_transfer(
            deps, &config, token, amount, dest_chain, recipient, reward, sender,
        ),
    }
}

/// Shared transfer path for native and CW20 deposits.
///
/// Validation is fail-fast and atomic: any failure reverts the whole call.
#[allow(clippy::too_many_arguments)]
fn process_transfer(
    deps: DepsMut,
    config: &Config,
    token: String,
    amount: Uint128,
    dest_chain: u64,
    recipient: String,
    reward: Uint128,
    sender: Addr,
) -> Result<Response, ContractError> {
    ensure_not_paused(config)?;

    let chain_enabled = CHAINS.may_load(deps.storage, dest_chain)?.unwrap_or(false);
    if !chain_enabled {
        return Err(ContractError::ChainNotEnabled {
            chain_id: dest_chain,
        });
    }

    let token_config = TOKENS
        .may_load(deps.storage, (dest_chain, &token))?
        .filter(|t| t.enabled)
        .ok_or(ContractError::TokenNotEnabled {
            token: token.clone(),
        })?;

    if amount < token_config.min_amount {
        return Err(ContractError::BelowMinimumAmount {
            min_amount: token_config.min_amount,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let withholding = compute_withholding(&token_config, amount, reward)?;

    // Accrue the fee ledger; credit the balance ledger only for tokens the
    // contract actually custodies. Burned wrapped supply is the obligation.
    let accrued_fees = FEES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    FEES.save(deps.storage, &token, &(accrued_fees + withholding.total))?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if token_config.wrapped {
        let asset = AssetInfo::Cw20 {
            contract_addr: deps.api.addr_validate(&token)?,
        };
        if let Some(burn) = asset.burn_msg(amount)? {
            messages.push(burn);
        }
    } else {
        let balance = BALANCES
            .may_load(deps.storage, &token)?
            .unwrap_or(Uint128::zero());
        BALANCES.save(deps.storage, &token, &(balance + withholding.net_amount))?;
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "transfer")
        .add_attribute("src_chain", config.this_chain_id.to_string())
        .add_attribute("dest_chain", dest_chain.to_string())
        .add_attribute("amount", withholding.net_amount.to_string())
        .add_attribute("reward", reward.to_string())
        .add_attribute("symbol", token_config.symbol)
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("fee", withholding.total.to_string()))
}
