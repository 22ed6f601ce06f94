//! Inbound claim handler.
//!
//! A claim presents an oracle attestation that a paired transfer happened on
//! a remote chain. The attestation fingerprint is consumed exactly once:
//! it is marked in the replay guard before any funds-moving message is
//! constructed, so a recursive or repeated claim can never release twice.

use cosmwasm_std::{Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, claim_fingerprint};
use crate::state::{BALANCES, CHAINS, CONFIG, SIGNER, TOKENS, USED_FINGERPRINTS};
use crate::verify::recover_signer;

use super::token_asset;

#[allow(clippy::too_many_arguments)]
pub fn execute_claim(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    src_chain: u64,
    token: String,
    amount: Uint128,
    reward: Uint128,
    recipient: String,
    tx_hash: Binary,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    super::ensure_not_paused(&config)?;

    if src_chain == config.this_chain_id {
        return Err(ContractError::IncompatibleChains);
    }
    let chain_enabled = CHAINS.may_load(deps.storage, src_chain)?.unwrap_or(false);
    if !chain_enabled {
        return Err(ContractError::ChainNotEnabled {
            chain_id: src_chain,
        });
    }

    let token_config = TOKENS
        .may_load(deps.storage, (src_chain, &token))?
        .filter(|t| t.enabled)
        .ok_or(ContractError::TokenNotEnabled {
            token: token.clone(),
        })?;

    let fingerprint = claim_fingerprint(
        src_chain,
        config.this_chain_id,
        amount.u128(),
        reward.u128(),
        &token,
        &recipient,
        tx_hash.as_slice(),
    );
    if USED_FINGERPRINTS
        .may_load(deps.storage, &fingerprint)?
        .is_some()
    {
        return Err(ContractError::DuplicateAttestation);
    }

    let signer = SIGNER
        .may_load(deps.storage)?
        .ok_or(ContractError::UnauthorizedSigner)?;
    let recovered = recover_signer(deps.as_ref(), &fingerprint, signature.as_slice())?;
    if recovered != signer {
        return Err(ContractError::UnauthorizedSigner);
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if tx_hash.is_empty() {
        return Err(ContractError::EmptyTxHash);
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    // Self-claims may skip the relayer reward; anyone else must be paid
    if reward.is_zero() && info.sender != recipient_addr {
        return Err(ContractError::ZeroClaimReward);
    }
    if reward > amount {
        return Err(ContractError::RewardExceedsAmount);
    }

    // Consume the fingerprint before any value moves
    USED_FINGERPRINTS.save(deps.storage, &fingerprint, &true)?;

    let asset = token_asset(deps.as_ref(), &config, &token)?;
    let recipient_amount = amount - reward;

    let mut messages: Vec<CosmosMsg> = vec![];
    if token_config.wrapped {
        if !recipient_amount.is_zero() {
            if let Some(mint) = asset.mint_msg(&recipient_addr, recipient_amount)? {
                messages.push(mint);
            }
        }
        if !reward.is_zero() {
            if let Some(mint) = asset.mint_msg(&info.sender, reward)? {
                messages.push(mint);
            }
        }
    } else {
        let balance = BALANCES
            .may_load(deps.storage, &token)?
            .unwrap_or(Uint128::zero());
        let remaining =
            balance
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientLiquidity {
                    token: token.clone(),
                })?;
        BALANCES.save(deps.storage, &token, &remaining)?;

        if !recipient_amount.is_zero() {
            messages.push(asset.transfer_msg(&recipient_addr, recipient_amount)?);
        }
        if !reward.is_zero() {
            messages.push(asset.transfer_msg(&info.sender, reward)?);
        }
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "claim")
        .add_attribute("src_chain", src_chain.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("reward", reward.to_string())
        .add_attribute("fingerprint", bytes32_to_hex(&fingerprint)))
}
