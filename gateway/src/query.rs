//! Query message handlers. All read-only and side-effect free.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::fee::compute_withholding;
use crate::msg::{
    BalanceResponse, ChainEnabledResponse, ConfigResponse, FeeResponse, FingerprintUsedResponse,
    PendingOwnerResponse, PendingWithdrawalResponse, SignerResponse, SimulateTransferFeeResponse,
    TokenResponse, TokensResponse,
};
use crate::state::{
    BALANCES, CHAINS, CONFIG, FEES, PENDING_OWNER, PENDING_WITHDRAWALS, SIGNER, SIGNER_CANDIDATE,
    TOKENS, USED_FINGERPRINTS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        this_chain_id: config.this_chain_id,
        fee_chain_id: config.fee_chain_id,
        native_denom: config.native_denom,
        paused: config.paused,
    })
}

pub fn query_chain_enabled(deps: Deps, chain_id: u64) -> StdResult<ChainEnabledResponse> {
    let enabled = CHAINS.may_load(deps.storage, chain_id)?.unwrap_or(false);
    Ok(ChainEnabledResponse { chain_id, enabled })
}

pub fn query_token(deps: Deps, chain_id: u64, token: String) -> StdResult<TokenResponse> {
    let config = TOKENS
        .may_load(deps.storage, (chain_id, &token))?
        .ok_or_else(|| StdError::not_found("token config"))?;
    Ok(TokenResponse {
        chain_id,
        token,
        symbol: config.symbol,
        min_amount: config.min_amount,
        claim_reward: config.claim_reward,
        max_amount: config.max_amount,
        min_fee_ppm: config.min_fee_ppm,
        max_fee_ppm: config.max_fee_ppm,
        enabled: config.enabled,
        wrapped: config.wrapped,
    })
}

pub fn query_tokens(
    deps: Deps,
    chain_id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .prefix(chain_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, config) = item?;
            Ok(TokenResponse {
                chain_id,
                token,
                symbol: config.symbol,
                min_amount: config.min_amount,
                claim_reward: config.claim_reward,
                max_amount: config.max_amount,
                min_fee_ppm: config.min_fee_ppm,
                max_fee_ppm: config.max_fee_ppm,
                enabled: config.enabled,
                wrapped: config.wrapped,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_balance(deps: Deps, token: String) -> StdResult<BalanceResponse> {
    let balance = BALANCES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    Ok(BalanceResponse { token, balance })
}

pub fn query_fee(deps: Deps, token: String) -> StdResult<FeeResponse> {
    let fee = FEES
        .may_load(deps.storage, &token)?
        .unwrap_or(Uint128::zero());
    Ok(FeeResponse { token, fee })
}

pub fn query_signer(deps: Deps) -> StdResult<SignerResponse> {
    Ok(SignerResponse {
        signer: SIGNER.may_load(deps.storage)?,
    })
}

pub fn query_pending_signer(deps: Deps) -> StdResult<SignerResponse> {
    Ok(SignerResponse {
        signer: SIGNER_CANDIDATE.may_load(deps.storage)?,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    Ok(PendingOwnerResponse {
        candidate: PENDING_OWNER.may_load(deps.storage)?,
    })
}

pub fn query_pending_withdrawal(deps: Deps, token: String) -> StdResult<PendingWithdrawalResponse> {
    let destination = PENDING_WITHDRAWALS.may_load(deps.storage, &token)?;
    Ok(PendingWithdrawalResponse { token, destination })
}

pub fn query_fingerprint_used(deps: Deps, fingerprint: Binary) -> StdResult<FingerprintUsedResponse> {
    let used = USED_FINGERPRINTS
        .may_load(deps.storage, fingerprint.as_slice())?
        .is_some();
    Ok(FingerprintUsedResponse { used })
}

pub fn query_simulate_transfer_fee(
    deps: Deps,
    chain_id: u64,
    token: String,
    amount: Uint128,
    reward: Uint128,
) -> StdResult<SimulateTransferFeeResponse> {
    let config = TOKENS
        .may_load(deps.storage, (chain_id, &token))?
        .ok_or_else(|| StdError::not_found("token config"))?;

    let withholding = compute_withholding(&config, amount, reward)
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(SimulateTransferFeeResponse {
        curve_fee: withholding.curve_fee,
        reward_carve: withholding.reward_carve,
        total_fee: withholding.total,
        net_amount: withholding.net_amount,
    })
}
