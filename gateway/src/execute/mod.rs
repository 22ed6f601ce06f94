//! Execute message handlers.

mod admin;
mod claim;
mod registry;
mod settle;
mod transfer;

pub use admin::{
    execute_chargeback, execute_emergency_withdraw, execute_emergency_withdraw_request,
    execute_pause, execute_transfer_ownership, execute_transfer_ownership_request,
    execute_unpause, execute_update_signer, execute_update_signer_request,
};
pub use claim::execute_claim;
pub use registry::{
    execute_update_chain, execute_update_fee_chain, execute_update_token,
    execute_update_token_symbol,
};
pub use settle::execute_settle_fees;
pub use transfer::{execute_receive, execute_transfer_native};

use cosmwasm_std::{Deps, MessageInfo};

use common::AssetInfo;

use crate::error::ContractError;
use crate::state::Config;

/// Reject callers other than the owner.
pub(crate) fn ensure_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Reject calls while the gateway is paused.
pub(crate) fn ensure_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

/// Resolve a token identifier to its asset representation: the configured
/// native denom, or a valid CW20 contract address.
pub(crate) fn token_asset(
    deps: Deps,
    config: &Config,
    token: &str,
) -> Result<AssetInfo, ContractError> {
    if token == config.native_denom {
        Ok(AssetInfo::Native {
            denom: config.native_denom.clone(),
        })
    } else {
        let contract_addr = deps.api.addr_validate(token)?;
        Ok(AssetInfo::Cw20 { contract_addr })
    }
}
