//! Inbound settlements: proof checks, replay protection, lockbox release
//! and user data delivery.

mod helpers;

use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{AppResponse, Executor};
use k256::ecdsa::SigningKey;

use adapter::hash::sha256;
use adapter::msg::{PastEventResponse, QueryMsg};

use helpers::{inbound_event, memo, prove, setup, setup_wrapped_only, BRIDGE_LIMIT};

/// 2.0 tokens in 18-decimal wei
const TWO_TOKENS_WEI: u128 = 2_000_000_000_000_000_000;

fn past_event(env: &helpers::TestEnv, preimage: &[u8]) -> PastEventResponse {
    env.app
        .wrap()
        .query_wasm_smart(
            &env.adapter,
            &QueryMsg::PastEvent {
                event_id: Binary::from(sha256(preimage).to_vec()),
            },
        )
        .unwrap()
}

fn has_attribute(res: &AppResponse, key: &str, value: &str) -> bool {
    res.events
        .iter()
        .flat_map(|e| e.attributes.iter())
        .any(|a| a.key == key && a.value == value)
}

// ============================================================================
// Wrapped Token Only
// ============================================================================

#[test]
fn test_settle_mints_wrapped_to_recipient() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    let res = env.settle(&operation, &metadata).unwrap();

    // 2.0000 at 4 decimals
    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::new(20_000));
    assert_eq!(env.nonce(), 0);
    assert!(has_attribute(&res, "action", "settle"));

    let record = past_event(&env, &metadata.preimage);
    assert!(record.processed);
    assert_eq!(record.height, Some(env.app.block_info().height));
}

#[test]
fn test_replayed_proof_is_rejected() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    env.settle(&operation, &metadata).unwrap();

    env.app.update_block(|block| block.height += 1);
    let err = env.settle(&operation, &metadata).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Event already processed"));
    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::new(20_000));
}

#[test]
fn test_dust_below_precision_settles_without_mint() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    // 10^13 wei is below one unit at 4 decimals
    let event = inbound_event(0, 10_000_000_000_000, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    env.settle(&operation, &metadata).unwrap();

    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::zero());
    assert!(past_event(&env, &metadata.preimage).processed);
}

#[test]
fn test_rate_limit_failure_leaves_event_unconsumed() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    env.app
        .execute_contract(
            env.owner.clone(),
            env.xtoken.clone(),
            &xerc20::msg::ExecuteMsg::SetLimits {
                bridge: env.adapter.to_string(),
                minting_limit: Uint128::new(10_000),
                burning_limit: Uint128::new(BRIDGE_LIMIT),
            },
            &[],
        )
        .unwrap();

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    let err = env.settle(&operation, &metadata).unwrap_err();
    assert!(err.root_cause().to_string().contains("Rate limit exceeded"));

    // The whole settlement reverted, so the proof can be retried later
    assert!(!past_event(&env, &metadata.preimage).processed);

    env.app
        .execute_contract(
            env.owner.clone(),
            env.xtoken.clone(),
            &xerc20::msg::ExecuteMsg::SetLimits {
                bridge: env.adapter.to_string(),
                minting_limit: Uint128::new(BRIDGE_LIMIT),
                burning_limit: Uint128::new(BRIDGE_LIMIT),
            },
            &[],
        )
        .unwrap();
    env.settle(&operation, &metadata).unwrap();
    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::new(20_000));
}

// ============================================================================
// Local Token Through the Lockbox
// ============================================================================

#[test]
fn test_settle_releases_local_token_through_lockbox() {
    let mut env = setup();
    let user = env.user.clone();
    let token = env.token.clone();
    let recipient = Addr::unchecked("terra1recipient");

    // Outbound deposit first so the lockbox holds custody
    env.send_swap(
        &user,
        &token,
        100_000,
        &memo(&user, "0x68bbed6a47194eff1cf514b50ea91895597fc91e", 0),
    )
    .unwrap();
    assert_eq!(env.balance(&env.token, &env.lockbox), Uint128::new(100_000));

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    env.settle(&operation, &metadata).unwrap();

    assert_eq!(env.balance(&env.token, &recipient), Uint128::new(20_000));
    assert_eq!(env.balance(&env.token, &env.lockbox), Uint128::new(80_000));
    assert_eq!(env.balance(&env.token, &env.adapter), Uint128::zero());
    assert_eq!(env.balance(&env.xtoken, &env.lockbox), Uint128::zero());
    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::zero());

    // Minted and burned within the settlement; only the outbound fee remains
    let info: TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.xtoken, &Cw20QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::new(175));
    assert_eq!(env.nonce(), 1);
}

#[test]
fn test_settle_without_custody_fails_atomically() {
    let mut env = setup();
    let recipient = Addr::unchecked("terra1recipient");

    // Nothing was ever deposited, so the lockbox cannot release
    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);
    assert!(env.settle(&operation, &metadata).is_err());
    assert!(!past_event(&env, &metadata.preimage).processed);
}

// ============================================================================
// User Data Delivery
// ============================================================================

#[test]
fn test_user_data_is_delivered_to_recipient() {
    let mut env = setup_wrapped_only();
    let receiver = env.deploy_receiver();

    let event = inbound_event(0, TWO_TOKENS_WEI, &receiver, b"hello");
    let (operation, metadata) = prove(&env.attestor, &event);
    env.settle(&operation, &metadata).unwrap();

    assert_eq!(env.balance(&env.xtoken, &receiver), Uint128::new(20_000));
    let delivery = env.last_delivery(&receiver).unwrap();
    assert_eq!(delivery.data.as_slice(), b"hello");
    assert_eq!(delivery.amount, Uint128::new(20_000));
    assert_eq!(delivery.token, env.xtoken.to_string());
    assert_eq!(
        delivery.event_id.as_slice(),
        sha256(&metadata.preimage).as_slice()
    );
}

#[test]
fn test_user_data_names_local_token_when_released_through_lockbox() {
    let mut env = setup();
    let user = env.user.clone();
    let token = env.token.clone();
    let receiver = env.deploy_receiver();

    env.send_swap(
        &user,
        &token,
        100_000,
        &memo(&user, "0x68bbed6a47194eff1cf514b50ea91895597fc91e", 0),
    )
    .unwrap();

    let event = inbound_event(0, TWO_TOKENS_WEI, &receiver, b"hello");
    let (operation, metadata) = prove(&env.attestor, &event);
    env.settle(&operation, &metadata).unwrap();

    assert_eq!(env.balance(&env.token, &receiver), Uint128::new(20_000));
    assert_eq!(env.balance(&env.xtoken, &receiver), Uint128::zero());

    let delivery = env.last_delivery(&receiver).unwrap();
    assert_eq!(delivery.token, env.token.to_string());
    assert_eq!(delivery.amount, Uint128::new(20_000));
    assert_eq!(delivery.data.as_slice(), b"hello");
}

#[test]
fn test_rejected_user_data_keeps_settlement() {
    let mut env = setup_wrapped_only();
    let receiver = env.deploy_receiver();

    let event = inbound_event(0, TWO_TOKENS_WEI, &receiver, b"reject");
    let (operation, metadata) = prove(&env.attestor, &event);
    let res = env.settle(&operation, &metadata).unwrap();

    assert!(has_attribute(&res, "user_data_delivery", "failed"));
    assert_eq!(env.balance(&env.xtoken, &receiver), Uint128::new(20_000));
    assert!(env.last_delivery(&receiver).is_none());
    assert!(past_event(&env, &metadata.preimage).processed);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_caller_must_be_sender() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");
    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&env.attestor, &event);

    let err = env
        .app
        .execute_contract(
            env.relayer.clone(),
            env.adapter.clone(),
            &adapter::msg::ExecuteMsg::Settle {
                caller: env.user.to_string(),
                operation,
                metadata,
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("did not sign this message"));
}

#[test]
fn test_unknown_token_is_rejected() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    let mut event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    event.token = [0xab; 32];
    let (operation, metadata) = prove(&env.attestor, &event);

    let err = env.settle(&operation, &metadata).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Unknown canonical token id"));
}

#[test]
fn test_proof_from_other_signer_is_rejected() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");
    let forger = SigningKey::from_slice(&[0x22; 32]).unwrap();

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (operation, metadata) = prove(&forger, &event);

    let err = env.settle(&operation, &metadata).unwrap_err();
    assert!(err.root_cause().to_string().contains("invalid signature"));
    assert_eq!(env.balance(&env.xtoken, &recipient), Uint128::zero());
}

#[test]
fn test_tampered_operation_is_rejected() {
    let mut env = setup_wrapped_only();
    let recipient = Addr::unchecked("terra1recipient");

    let event = inbound_event(0, TWO_TOKENS_WEI, &recipient, &[]);
    let (mut operation, metadata) = prove(&env.attestor, &event);
    operation.amount = Uint128::new(TWO_TOKENS_WEI * 10);

    let err = env.settle(&operation, &metadata).unwrap_err();
    assert!(err.root_cause().to_string().contains("amount mismatch"));
    assert!(!past_event(&env, &metadata.preimage).processed);
}
