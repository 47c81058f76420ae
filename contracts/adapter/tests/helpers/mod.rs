//! Shared cw-multi-test setup for the adapter integration tests.
//!
//! Deploys a plain cw20 local token (TKN), its xERC20 form (XTKN), the
//! lockbox pairing them and the adapter, and signs attested proofs with a
//! fixed test attestor key.

#![allow(dead_code)]

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Item;
use k256::ecdsa::SigningKey;

use adapter::event::{sender_id, SwapEvent};
use adapter::hash::sha256;
use adapter::msg::{ExecuteMsg, InstantiateMsg, Metadata, Operation, QueryMsg, StorageResponse};
use adapter::pam::PROTOCOL_EVM;
use common::msg::{UserDataDelivery, UserDataHookMsg};
use common::{AdapterHookMsg, TokenSymbol};

pub const LOCAL_CHAIN: [u8; 32] = [0x07; 32];
pub const ORIGIN_CHAIN: [u8; 32] = [0x01; 32];
pub const REMOTE_CHAIN: [u8; 32] = [0x02; 32];
pub const EMITTER: [u8; 32] = [0xe1; 32];
pub const TOPIC_ZERO: [u8; 32] = [0x70; 32];
pub const TOKEN_ID: [u8; 32] = [0xaa; 32];
pub const BLOCK_ID: [u8; 32] = [0xb1; 32];
pub const TX_ID: [u8; 32] = [0x7e; 32];

pub const DECIMALS: u8 = 4;
pub const MIN_FEE: u128 = 50;
pub const BRIDGE_LIMIT: u128 = 1_000_000_000;
pub const REMOTE_SENDER: &str = "0x68bbed6a47194eff1cf514b50ea91895597fc91e";

// ============================================================================
// Contracts
// ============================================================================

fn contract_adapter() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        adapter::contract::execute,
        adapter::contract::instantiate,
        adapter::contract::query,
    )
    .with_reply(adapter::contract::reply);
    Box::new(contract)
}

fn contract_lockbox() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        lockbox::contract::execute,
        lockbox::contract::instantiate,
        lockbox::contract::query,
    );
    Box::new(contract)
}

fn contract_xerc20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        xerc20::contract::execute,
        xerc20::contract::instantiate,
        xerc20::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// A settlement recipient that records delivered user data and rejects the
// payload "reject".

const LAST_DELIVERY: Item<UserDataDelivery> = Item::new("last_delivery");

fn receiver_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn receiver_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: UserDataHookMsg,
) -> StdResult<Response> {
    let UserDataHookMsg::ReceiveUserData(delivery) = msg;
    if delivery.data.as_slice() == b"reject" {
        return Err(StdError::generic_err("payload rejected"));
    }
    LAST_DELIVERY.save(deps.storage, &delivery)?;
    Ok(Response::new().add_attribute("action", "receive_user_data"))
}

fn receiver_query(deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    to_json_binary(&LAST_DELIVERY.may_load(deps.storage)?)
}

fn contract_receiver() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        receiver_execute,
        receiver_instantiate,
        receiver_query,
    ))
}

// ============================================================================
// Environment
// ============================================================================

pub struct TestEnv {
    pub app: App,
    pub adapter: Addr,
    pub lockbox: Addr,
    pub token: Addr,
    pub xtoken: Addr,
    pub owner: Addr,
    pub user: Addr,
    pub relayer: Addr,
    pub fee_manager: Addr,
    pub attestor: SigningKey,
}

/// Full deployment with a local token behind the lockbox.
pub fn setup() -> TestEnv {
    setup_with(true)
}

/// Deployment where the token has no local representation; settlements mint
/// the wrapped token straight to the recipient.
pub fn setup_wrapped_only() -> TestEnv {
    setup_with(false)
}

fn setup_with(with_local_token: bool) -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let relayer = Addr::unchecked("terra1relayer");
    let fee_manager = Addr::unchecked("terra1feemanager");

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Token".to_string(),
                symbol: "TKN".to_string(),
                decimals: DECIMALS,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::new(10_000_000),
                }],
                mint: Some(MinterResponse {
                    minter: owner.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "tkn",
            None,
        )
        .unwrap();

    let xerc20_code = app.store_code(contract_xerc20());
    let xtoken = app
        .instantiate_contract(
            xerc20_code,
            owner.clone(),
            &xerc20::msg::InstantiateMsg {
                name: "Wrapped Token".to_string(),
                symbol: "XTKN".to_string(),
                decimals: DECIMALS,
                initial_balances: vec![],
                max_supply: None,
                owner: owner.to_string(),
            },
            &[],
            "xtkn",
            None,
        )
        .unwrap();

    let lockbox_code = app.store_code(contract_lockbox());
    let lockbox = app
        .instantiate_contract(
            lockbox_code,
            owner.clone(),
            &lockbox::msg::InstantiateMsg {
                owner: owner.to_string(),
            },
            &[],
            "lockbox",
            None,
        )
        .unwrap();

    let adapter_code = app.store_code(contract_adapter());
    let adapter = app
        .instantiate_contract(
            adapter_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                chain_id: Binary::from(LOCAL_CHAIN.to_vec()),
                fee_manager: Some(fee_manager.to_string()),
            },
            &[],
            "adapter",
            None,
        )
        .unwrap();

    // xERC20: lockbox and adapter budgets
    app.execute_contract(
        owner.clone(),
        xtoken.clone(),
        &xerc20::msg::ExecuteMsg::SetLockbox {
            lockbox: lockbox.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        xtoken.clone(),
        &xerc20::msg::ExecuteMsg::SetLimits {
            bridge: adapter.to_string(),
            minting_limit: Uint128::new(BRIDGE_LIMIT),
            burning_limit: Uint128::new(BRIDGE_LIMIT),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        lockbox.clone(),
        &lockbox::msg::ExecuteMsg::Create {
            local_token: token.to_string(),
            wrapped_token: xtoken.to_string(),
        },
        &[],
    )
    .unwrap();

    // Adapter registry and attestation
    app.execute_contract(
        owner.clone(),
        adapter.clone(),
        &ExecuteMsg::Create {
            wrapped_token: xtoken.to_string(),
            wrapped_symbol: TokenSymbol::new("XTKN", DECIMALS),
            local_token: with_local_token.then(|| token.to_string()),
            local_symbol: TokenSymbol::new("TKN", DECIMALS),
            canonical_token_id: Binary::from(TOKEN_ID.to_vec()),
            min_fee: Uint128::new(MIN_FEE),
        },
        &[],
    )
    .unwrap();

    let attestor = SigningKey::from_slice(&[0x11; 32]).unwrap();
    app.execute_contract(
        owner.clone(),
        adapter.clone(),
        &ExecuteMsg::SetAttestorKey {
            public_key: Binary::from(
                attestor
                    .verifying_key()
                    .to_encoded_point(false)
                    .as_bytes()
                    .to_vec(),
            ),
            attestation: Binary::from(b"quote".to_vec()),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        adapter.clone(),
        &ExecuteMsg::SetOriginMapping {
            chain_id: Binary::from(ORIGIN_CHAIN.to_vec()),
            emitter: Binary::from(EMITTER.to_vec()),
            topic_zero: Binary::from(TOPIC_ZERO.to_vec()),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        adapter,
        lockbox,
        token,
        xtoken,
        owner,
        user,
        relayer,
        fee_manager,
        attestor,
    }
}

impl TestEnv {
    pub fn balance(&self, token: &Addr, address: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn nonce(&self) -> u64 {
        let res: StorageResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.adapter, &QueryMsg::Storage {})
            .unwrap();
        res.nonce
    }

    /// A fresh adapter with no registry entry.
    pub fn deploy_adapter(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_adapter());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &InstantiateMsg {
                    owner: self.owner.to_string(),
                    chain_id: Binary::from(LOCAL_CHAIN.to_vec()),
                    fee_manager: None,
                },
                &[],
                "adapter",
                None,
            )
            .unwrap()
    }

    pub fn deploy_cw20(&mut self, symbol: &str, decimals: u8) -> Addr {
        let code_id = self.app.store_code(contract_cw20());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: format!("{} Token", symbol),
                    symbol: symbol.to_string(),
                    decimals,
                    initial_balances: vec![],
                    mint: None,
                    marketing: None,
                },
                &[],
                symbol,
                None,
            )
            .unwrap()
    }

    pub fn deploy_receiver(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_receiver());
        self.app
            .instantiate_contract(code_id, self.owner.clone(), &Empty {}, &[], "receiver", None)
            .unwrap()
    }

    pub fn last_delivery(&self, receiver: &Addr) -> Option<UserDataDelivery> {
        self.app
            .wrap()
            .query_wasm_smart(receiver, &Empty {})
            .unwrap()
    }

    /// Sends `amount` of `token` from `from` to the adapter with a swap memo.
    pub fn send_swap(
        &mut self,
        from: &Addr,
        token: &Addr,
        amount: u128,
        memo: &str,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            from.clone(),
            token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.adapter.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(&AdapterHookMsg::Swap {
                    memo: memo.to_string(),
                })
                .unwrap(),
            },
            &[],
        )
    }

    /// Wraps local tokens through the lockbox for `from`.
    pub fn wrap(&mut self, from: &Addr, amount: u128) {
        self.app
            .execute_contract(
                from.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::Send {
                    contract: self.lockbox.to_string(),
                    amount: Uint128::new(amount),
                    msg: Binary::default(),
                },
                &[],
            )
            .unwrap();
    }

    pub fn settle(
        &mut self,
        operation: &Operation,
        metadata: &Metadata,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.relayer.clone(),
            self.adapter.clone(),
            &ExecuteMsg::Settle {
                caller: self.relayer.to_string(),
                operation: operation.clone(),
                metadata: metadata.clone(),
            },
            &[],
        )
    }
}

// ============================================================================
// Memos and Proofs
// ============================================================================

pub fn memo(sender: &Addr, recipient: &str, user_data_id: u64) -> String {
    format!(
        "{},0x{},{},{}",
        sender,
        hex::encode(REMOTE_CHAIN),
        recipient,
        user_data_id
    )
}

/// An inbound swap event of `amount` wei for `recipient`.
pub fn inbound_event(nonce: u64, amount: u128, recipient: &Addr, data: &[u8]) -> SwapEvent {
    SwapEvent {
        nonce,
        token: TOKEN_ID,
        destination_chain_id: LOCAL_CHAIN,
        amount: Uint128::new(amount),
        sender: sender_id(REMOTE_SENDER).unwrap(),
        recipient: recipient.as_bytes().to_vec(),
        data: data.to_vec(),
    }
}

pub fn operation_for(event: &SwapEvent) -> Operation {
    Operation {
        block_id: Binary::from(BLOCK_ID.to_vec()),
        tx_id: Binary::from(TX_ID.to_vec()),
        nonce: event.nonce,
        token: Binary::from(event.token.to_vec()),
        origin_chain_id: Binary::from(ORIGIN_CHAIN.to_vec()),
        destination_chain_id: Binary::from(event.destination_chain_id.to_vec()),
        amount: event.amount,
        sender: Binary::from(event.sender.to_vec()),
        recipient: String::from_utf8(event.recipient.clone()).unwrap(),
        data: Binary::from(event.data.clone()),
    }
}

pub fn preimage_for(event: &SwapEvent) -> Vec<u8> {
    let mut preimage = vec![0x01, PROTOCOL_EVM];
    preimage.extend_from_slice(&ORIGIN_CHAIN);
    preimage.extend_from_slice(&BLOCK_ID);
    preimage.extend_from_slice(&TX_ID);
    preimage.extend_from_slice(&EMITTER);
    preimage.extend_from_slice(&TOPIC_ZERO);
    preimage.extend_from_slice(&[0u8; 96]);
    preimage.extend_from_slice(&event.encode());
    preimage
}

pub fn sign(key: &SigningKey, preimage: &[u8]) -> Binary {
    let (signature, recovery_id) = key.sign_prehash_recoverable(&sha256(preimage)).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte());
    Binary::from(bytes)
}

/// Operation and attested proof for `event`.
pub fn prove(key: &SigningKey, event: &SwapEvent) -> (Operation, Metadata) {
    let preimage = preimage_for(event);
    let metadata = Metadata {
        signature: sign(key, &preimage),
        preimage: Binary::from(preimage),
    };
    (operation_for(event), metadata)
}
