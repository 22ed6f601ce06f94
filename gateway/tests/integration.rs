//! Integration tests for the Gateway contract using cw-multi-test.
//!
//! These tests cover instantiation, the token registry, and the outbound
//! transfer path for native and CW20 tokens.

use cosmwasm_std::{coins, to_json_binary, Addr, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg};
use cw_multi_test::{App, ContractWrapper, Executor};

use gateway::msg::{
    BalanceResponse, ConfigResponse, ExecuteMsg, FeeResponse, InstantiateMsg, QueryMsg,
    ReceiveMsg, SimulateTransferFeeResponse, TokenResponse, TokensResponse,
};
use gateway::ContractError;

const THIS_CHAIN: u64 = 1;
const REMOTE_CHAIN: u64 = 2;
const NATIVE_DENOM: &str = "uluna";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &owner, coins(10_000_000_000, NATIVE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, NATIVE_DENOM))
            .unwrap();
    });

    let code_id = app.store_code(contract_gateway());
    let gateway_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: Some(owner.to_string()),
                this_chain_id: THIS_CHAIN,
                fee_chain_id: REMOTE_CHAIN,
                native_denom: NATIVE_DENOM.to_string(),
            },
            &[],
            "gateway",
            Some(owner.to_string()),
        )
        .unwrap();

    // Enable the remote chain and register the native token under it
    app.execute_contract(
        owner.clone(),
        gateway_addr.clone(),
        &ExecuteMsg::UpdateChain {
            chain_id: REMOTE_CHAIN,
            enabled: true,
        },
        &[],
    )
    .unwrap();

    register_native_token(&mut app, &owner, &gateway_addr);

    (app, gateway_addr, owner, user)
}

/// Reference fixture parameters: 0.5 minimum, 0.1 carve, 2.0 curve
/// threshold, 1000/2000 ppm rates (micro units).
fn register_native_token(app: &mut App, owner: &Addr, gateway_addr: &Addr) {
    app.execute_contract(
        owner.clone(),
        gateway_addr.clone(),
        &ExecuteMsg::UpdateToken {
            chain_id: REMOTE_CHAIN,
            token: NATIVE_DENOM.to_string(),
            symbol: "LUNC".to_string(),
            min_amount: Uint128::new(500_000),
            claim_reward: Uint128::new(100_000),
            max_amount: Uint128::new(2_000_000),
            min_fee_ppm: 1000,
            max_fee_ppm: 2000,
            enabled: true,
            wrapped: false,
        },
        &[],
    )
    .unwrap();
}

fn query_tracked_balance(app: &App, gateway_addr: &Addr, token: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            gateway_addr,
            &QueryMsg::Balance {
                token: token.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn query_tracked_fee(app: &App, gateway_addr: &Addr, token: &str) -> Uint128 {
    let res: FeeResponse = app
        .wrap()
        .query_wasm_smart(
            gateway_addr,
            &QueryMsg::Fee {
                token: token.to_string(),
            },
        )
        .unwrap();
    res.fee
}

fn attr_value(res: &cw_multi_test::AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("attribute {} not found", key))
}

// ============================================================================
// Instantiation Tests
// ============================================================================

#[test]
fn test_instantiate() {
    let (app, gateway_addr, owner, _user) = setup();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&gateway_addr, &QueryMsg::Config {})
        .unwrap();

    assert_eq!(config.owner, owner);
    assert_eq!(config.this_chain_id, THIS_CHAIN);
    assert_eq!(config.fee_chain_id, REMOTE_CHAIN);
    assert_eq!(config.native_denom, NATIVE_DENOM);
    assert!(!config.paused);
}

#[test]
fn test_instantiate_rejects_same_fee_chain() {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let code_id = app.store_code(contract_gateway());

    let err = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: None,
                this_chain_id: THIS_CHAIN,
                fee_chain_id: THIS_CHAIN,
                native_denom: NATIVE_DENOM.to_string(),
            },
            &[],
            "gateway",
            Some(owner.to_string()),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::SameChainId
    );
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_update_chain_rejects_own_chain() {
    let (mut app, gateway_addr, owner, _user) = setup();

    let err = app
        .execute_contract(
            owner,
            gateway_addr,
            &ExecuteMsg::UpdateChain {
                chain_id: THIS_CHAIN,
                enabled: true,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::SameChainId
    );
}

#[test]
fn test_update_chain_requires_owner() {
    let (mut app, gateway_addr, _owner, user) = setup();

    let err = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::UpdateChain {
                chain_id: 9,
                enabled: true,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );
}

#[test]
fn test_update_token_rejects_disabled_chain() {
    let (mut app, gateway_addr, owner, _user) = setup();

    let err = app
        .execute_contract(
            owner,
            gateway_addr,
            &ExecuteMsg::UpdateToken {
                chain_id: 9,
                token: NATIVE_DENOM.to_string(),
                symbol: "LUNC".to_string(),
                min_amount: Uint128::zero(),
                claim_reward: Uint128::zero(),
                max_amount: Uint128::new(1),
                min_fee_ppm: 0,
                max_fee_ppm: 0,
                enabled: true,
                wrapped: false,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ChainNotEnabled { chain_id: 9 }
    );
}

#[test]
fn test_update_token_rejects_wrapped_native() {
    let (mut app, gateway_addr, owner, _user) = setup();

    let err = app
        .execute_contract(
            owner,
            gateway_addr,
            &ExecuteMsg::UpdateToken {
                chain_id: REMOTE_CHAIN,
                token: NATIVE_DENOM.to_string(),
                symbol: "LUNC".to_string(),
                min_amount: Uint128::zero(),
                claim_reward: Uint128::zero(),
                max_amount: Uint128::new(1),
                min_fee_ppm: 0,
                max_fee_ppm: 0,
                enabled: true,
                wrapped: true,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::WrappedNative
    );
}

#[test]
fn test_update_token_symbol_only() {
    let (mut app, gateway_addr, owner, _user) = setup();

    app.execute_contract(
        owner,
        gateway_addr.clone(),
        &ExecuteMsg::UpdateTokenSymbol {
            chain_id: REMOTE_CHAIN,
            token: NATIVE_DENOM.to_string(),
            symbol: "LUNC2".to_string(),
        },
        &[],
    )
    .unwrap();

    let token: TokenResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::Token {
                chain_id: REMOTE_CHAIN,
                token: NATIVE_DENOM.to_string(),
            },
        )
        .unwrap();
    assert_eq!(token.symbol, "LUNC2");
    // Other fields untouched
    assert_eq!(token.min_amount, Uint128::new(500_000));
    assert_eq!(token.min_fee_ppm, 1000);
}

/// An unregistered token is reported as such, distinct from a registered
/// but disabled one.
#[test]
fn test_update_token_symbol_requires_registration() {
    let (mut app, gateway_addr, owner, _user) = setup();

    let err = app
        .execute_contract(
            owner,
            gateway_addr,
            &ExecuteMsg::UpdateTokenSymbol {
                chain_id: REMOTE_CHAIN,
                token: "terra1ghost".to_string(),
                symbol: "GST".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::TokenNotRegistered {
            token: "terra1ghost".to_string()
        }
    );
}

#[test]
fn test_tokens_pagination() {
    let (mut app, gateway_addr, owner, _user) = setup();

    for i in 0..3 {
        app.execute_contract(
            owner.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::UpdateToken {
                chain_id: REMOTE_CHAIN,
                token: format!("terra1token{}", i),
                symbol: format!("TK{}", i),
                min_amount: Uint128::zero(),
                claim_reward: Uint128::zero(),
                max_amount: Uint128::new(1),
                min_fee_ppm: 0,
                max_fee_ppm: 0,
                enabled: true,
                wrapped: false,
            },
            &[],
        )
        .unwrap();
    }

    let page: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::Tokens {
                chain_id: REMOTE_CHAIN,
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(page.tokens.len(), 2);

    let rest: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::Tokens {
                chain_id: REMOTE_CHAIN,
                start_after: Some(page.tokens[1].token.clone()),
                limit: None,
            },
        )
        .unwrap();
    // uluna + 3 registered tokens in total
    assert_eq!(rest.tokens.len(), 2);
}

// ============================================================================
// Transfer Tests (native)
// ============================================================================

/// Golden fixture: 1.0 at the floor rate with a 0.1 carve nets 899000 and
/// accrues 101000 of fees (micro units).
#[test]
fn test_transfer_native_golden_numbers() {
    let (mut app, gateway_addr, _owner, user) = setup();

    let res = app
        .execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
                reward: Uint128::new(100_000),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap();

    assert_eq!(attr_value(&res, "amount"), "899000");
    assert_eq!(attr_value(&res, "reward"), "100000");
    assert_eq!(attr_value(&res, "fee"), "101000");
    assert_eq!(attr_value(&res, "symbol"), "LUNC");
    assert_eq!(attr_value(&res, "src_chain"), THIS_CHAIN.to_string());
    assert_eq!(attr_value(&res, "dest_chain"), REMOTE_CHAIN.to_string());

    assert_eq!(
        query_tracked_balance(&app, &gateway_addr, NATIVE_DENOM),
        Uint128::new(899_000)
    );
    assert_eq!(
        query_tracked_fee(&app, &gateway_addr, NATIVE_DENOM),
        Uint128::new(101_000)
    );

    // Sender paid the gross amount; the contract custodies all of it
    let user_balance = app.wrap().query_balance(&user, NATIVE_DENOM).unwrap();
    assert_eq!(user_balance.amount, Uint128::new(10_000_000_000 - 1_000_000));
    let custodied = app
        .wrap()
        .query_balance(&gateway_addr, NATIVE_DENOM)
        .unwrap();
    assert_eq!(custodied.amount, Uint128::new(1_000_000));
}

/// Conservation: custodied >= balances + fees after every transfer.
#[test]
fn test_transfer_conservation() {
    let (mut app, gateway_addr, _owner, user) = setup();

    for amount in [500_000u128, 1_500_000, 2_000_000, 7_000_000] {
        app.execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &coins(amount, NATIVE_DENOM),
        )
        .unwrap();

        let custodied = app
            .wrap()
            .query_balance(&gateway_addr, NATIVE_DENOM)
            .unwrap()
            .amount;
        let tracked = query_tracked_balance(&app, &gateway_addr, NATIVE_DENOM)
            + query_tracked_fee(&app, &gateway_addr, NATIVE_DENOM);
        assert!(custodied >= tracked);
    }
}

/// At or above the curve threshold the ceiling rate applies.
#[test]
fn test_transfer_ceiling_rate() {
    let (mut app, gateway_addr, _owner, user) = setup();

    let res = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::new(100_000),
            },
            &coins(10_000_000, NATIVE_DENOM),
        )
        .unwrap();

    // 10.0 * 2000ppm = 0.02, plus the 0.1 carve
    assert_eq!(attr_value(&res, "fee"), "120000");
    assert_eq!(attr_value(&res, "amount"), "9880000");
}

#[test]
fn test_transfer_validation_errors() {
    let (mut app, gateway_addr, owner, user) = setup();

    // Disabled destination chain
    let err = app
        .execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: 9,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ChainNotEnabled { chain_id: 9 }
    );

    // No funds attached
    let err = app
        .execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NoFundsSent
    );

    // Below the configured minimum
    let err = app
        .execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &coins(499_999, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::BelowMinimumAmount {
            min_amount: Uint128::new(500_000)
        }
    );

    // Reward larger than the amount
    let err = app
        .execute_contract(
            user.clone(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::new(2_000_000),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::RewardExceedsAmount
    );

    // Fee carve plus reward cannot fit into the amount
    app.execute_contract(
        owner.clone(),
        gateway_addr.clone(),
        &ExecuteMsg::UpdateToken {
            chain_id: REMOTE_CHAIN,
            token: NATIVE_DENOM.to_string(),
            symbol: "LUNC".to_string(),
            min_amount: Uint128::zero(),
            claim_reward: Uint128::new(500_000),
            max_amount: Uint128::new(2_000_000),
            min_fee_ppm: 0,
            max_fee_ppm: 0,
            enabled: true,
            wrapped: false,
        },
        &[],
    )
    .unwrap();
    let err = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::new(600_000),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::FeeExceedsAmount
    );
}

/// A reward that exactly exhausts the amount after the carve is rejected,
/// not accepted with a zero-value payout left for the recipient.
#[test]
fn test_transfer_rejects_reward_consuming_net_amount() {
    let (mut app, gateway_addr, owner, user) = setup();

    app.execute_contract(
        owner,
        gateway_addr.clone(),
        &ExecuteMsg::UpdateToken {
            chain_id: REMOTE_CHAIN,
            token: NATIVE_DENOM.to_string(),
            symbol: "LUNC".to_string(),
            min_amount: Uint128::zero(),
            claim_reward: Uint128::new(1_000_000),
            max_amount: Uint128::new(2_000_000),
            min_fee_ppm: 0,
            max_fee_ppm: 0,
            enabled: true,
            wrapped: false,
        },
        &[],
    )
    .unwrap();

    let err = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::new(1_000_000),
            },
            &coins(2_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::FeeExceedsAmount
    );
}

#[test]
fn test_transfer_rejects_disabled_token() {
    let (mut app, gateway_addr, owner, user) = setup();

    app.execute_contract(
        owner,
        gateway_addr.clone(),
        &ExecuteMsg::UpdateToken {
            chain_id: REMOTE_CHAIN,
            token: NATIVE_DENOM.to_string(),
            symbol: "LUNC".to_string(),
            min_amount: Uint128::new(500_000),
            claim_reward: Uint128::new(100_000),
            max_amount: Uint128::new(2_000_000),
            min_fee_ppm: 1000,
            max_fee_ppm: 2000,
            enabled: false,
            wrapped: false,
        },
        &[],
    )
    .unwrap();

    let err = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::TokenNotEnabled {
            token: NATIVE_DENOM.to_string()
        }
    );
}

#[test]
fn test_transfer_paused() {
    let (mut app, gateway_addr, owner, user) = setup();

    app.execute_contract(owner, gateway_addr.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    let err = app
        .execute_contract(
            user,
            gateway_addr,
            &ExecuteMsg::TransferNative {
                dest_chain: REMOTE_CHAIN,
                recipient: "0xrecipient".to_string(),
                reward: Uint128::zero(),
            },
            &coins(1_000_000, NATIVE_DENOM),
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ContractPaused
    );
}

// ============================================================================
// Transfer Tests (CW20)
// ============================================================================

#[test]
fn test_transfer_cw20_custody() {
    let (mut app, gateway_addr, owner, user) = setup();

    let cw20_code = app.store_code(contract_cw20());
    let token_addr = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Test Token".to_string(),
                symbol: "TST".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::new(100_000_000),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "test-token",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner,
        gateway_addr.clone(),
        &ExecuteMsg::UpdateToken {
            chain_id: REMOTE_CHAIN,
            token: token_addr.to_string(),
            symbol: "TST".to_string(),
            min_amount: Uint128::new(500_000),
            claim_reward: Uint128::new(100_000),
            max_amount: Uint128::new(2_000_000),
            min_fee_ppm: 1000,
            max_fee_ppm: 2000,
            enabled: true,
            wrapped: false,
        },
        &[],
    )
    .unwrap();

    let res = app
        .execute_contract(
            user.clone(),
            token_addr.clone(),
            &Cw20ExecuteMsg::Send {
                contract: gateway_addr.to_string(),
                amount: Uint128::new(1_000_000),
                msg: to_json_binary(&ReceiveMsg::Bridge {
                    dest_chain: REMOTE_CHAIN,
                    recipient: "0xrecipient".to_string(),
                    reward: Uint128::new(100_000),
                })
                .unwrap(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(attr_value(&res, "amount"), "899000");
    assert_eq!(attr_value(&res, "fee"), "101000");

    assert_eq!(
        query_tracked_balance(&app, &gateway_addr, token_addr.as_str()),
        Uint128::new(899_000)
    );
    assert_eq!(
        query_tracked_fee(&app, &gateway_addr, token_addr.as_str()),
        Uint128::new(101_000)
    );

    // The gateway custodies the full gross amount
    let balance: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &token_addr,
            &cw20::Cw20QueryMsg::Balance {
                address: gateway_addr.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::new(1_000_000));
}

// ============================================================================
// Fee Simulation
// ============================================================================

#[test]
fn test_simulate_transfer_fee() {
    let (app, gateway_addr, _owner, _user) = setup();

    let sim: SimulateTransferFeeResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::SimulateTransferFee {
                chain_id: REMOTE_CHAIN,
                token: NATIVE_DENOM.to_string(),
                amount: Uint128::new(1_000_000),
                reward: Uint128::new(100_000),
            },
        )
        .unwrap();

    assert_eq!(sim.curve_fee, Uint128::new(1_000));
    assert_eq!(sim.reward_carve, Uint128::new(100_000));
    assert_eq!(sim.total_fee, Uint128::new(101_000));
    assert_eq!(sim.net_amount, Uint128::new(899_000));
}
