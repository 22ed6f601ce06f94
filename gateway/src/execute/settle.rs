//! Fee settlement handler.
//!
//! Settlement re-buckets accumulated protocol fees into the balance ledger,
//! once per signed attestation of a recent block height. No value leaves the
//! contract; the sweep only marks revenue as reconciled.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, fee_fingerprint};
use crate::state::{BALANCES, CHAINS, CONFIG, FEES, SIGNER, TOKENS, USED_FINGERPRINTS};
use crate::verify::recover_signer;

pub fn execute_settle_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    block_height: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    super::ensure_not_paused(&config)?;

    // Only the future bound is enforced; there is no staleness floor
    if block_height > env.block.height {
        return Err(ContractError::BlockInFuture {
            height: block_height,
        });
    }

    let fingerprint = fee_fingerprint(block_height, config.this_chain_id, &token);

    let signer = SIGNER
        .may_load(deps.storage)?
        .ok_or(ContractError::UnauthorizedSigner)?;
    let recovered = recover_signer(deps.as_ref(), &fingerprint, signature.as_slice())?;
    if recovered != signer {
        return Err(ContractError::UnauthorizedSigner);
    }

    let fee_chain_enabled = CHAINS
        .may_load(deps.storage, config.fee_chain_id)?
        .unwrap_or(false);
    if !fee_chain_enabled {
        return Err(ContractError::FeeChainDisabled);
    }

    let token_config = TOKENS
        .may_load(deps.storage, (config.fee_chain_id, &token))?
        .filter(|t| t.enabled)
        .ok_or(ContractError::TokenNotEnabled {
            token: token.clone(),
        })?;

    if USED_FINGERPRINTS
        .may_load(deps.storage, &fingerprint)?
        .is_some()
    {
        return Err(ContractError::DuplicateAttestation);
    }
    USED_FINGERPRINTS.save(deps.storage, &fingerprint, &true)?;

    let swept = FEES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    FEES.save(deps.storage, &token, &Uint128::zero())?;

    // Wrapped supply is not custodied, so the sweep skips the balance credit
    if !token_config.wrapped {
        let balance = BALANCES
            .may_load(deps.storage, &token)?
            .unwrap_or(Uint128::zero());
        BALANCES.save(deps.storage, &token, &(balance + swept))?;
    }

    Ok(Response::new()
        .add_attribute("method", "settle_fees")
        .add_attribute("src_chain", config.this_chain_id.to_string())
        .add_attribute("fee_chain", config.fee_chain_id.to_string())
        .add_attribute("amount", swept.to_string())
        .add_attribute("symbol", token_config.symbol)
        .add_attribute("caller", info.sender)
        .add_attribute("fingerprint", bytes32_to_hex(&fingerprint)))
}
