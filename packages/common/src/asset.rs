//! Asset abstraction over native coins and CW20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Deps, Env, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// A token kind: either the chain's native coin or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Build a message transferring `amount` of this asset to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Build a mint message for a CW20 this contract is the minter of.
    ///
    /// Native coins cannot be minted; callers must only reach this for CW20.
    pub fn mint_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<Option<CosmosMsg>> {
        match self {
            AssetInfo::Native { .. } => Ok(None),
            AssetInfo::Cw20 { contract_addr } => Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }))),
        }
    }

    /// Build a burn message for CW20 tokens held by this contract.
    pub fn burn_msg(&self, amount: Uint128) -> StdResult<Option<CosmosMsg>> {
        match self {
            AssetInfo::Native { .. } => Ok(None),
            AssetInfo::Cw20 { contract_addr } => Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
                funds: vec![],
            }))),
        }
    }

    /// Query the contract's own custodied balance of this asset.
    pub fn query_balance(&self, deps: Deps, env: &Env) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => {
                let coin = deps
                    .querier
                    .query_balance(env.contract.address.clone(), denom)?;
                Ok(coin.amount)
            }
            AssetInfo::Cw20 { contract_addr } => {
                query_cw20_balance(&deps.querier, contract_addr, &env.contract.address)
            }
        }
    }
}

/// An asset with an attached amount.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn transfer_msg(&self, recipient: &Addr) -> StdResult<CosmosMsg> {
        self.info.transfer_msg(recipient, self.amount)
    }
}

fn query_cw20_balance(
    querier: &QuerierWrapper,
    contract_addr: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        contract_addr,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(res.balance)
}
