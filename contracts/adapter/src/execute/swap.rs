//! Outbound transfer handlers.
//!
//! Local tokens are first wrapped through the lockbox, which mints the
//! wrapped form back to the adapter with the same `Swap` hook. Wrapped tokens
//! then take the return path: fee to the fee manager, burn of the net amount
//! and a self-call emitting the swap event for relayers.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, CosmosMsg, DepsMut, Env, Event, MessageInfo,
    Response, Storage, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::codec::{hex_encode_prefixed, to_bytes32};
use common::{to_wei, AdapterHookMsg, LockboxHookMsg, Xerc20ExecuteMsg};

use super::query_lockbox;
use crate::error::ContractError;
use crate::event::{sender_id, SwapEvent};
use crate::fee::calculate_fee;
use crate::memo::{parse_memo, Memo};
use crate::msg::ExecuteMsg;
use crate::state::{
    PendingDeposit, RegistryEntry, PENDING_DEPOSIT, REGISTRY, STORAGE, USER_DATA,
};

/// Entry point for every cw20 `Send` to the adapter.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let entry = REGISTRY
        .may_load(deps.storage)?
        .ok_or(ContractError::NotCreated)?;
    if wrapper.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let hook: AdapterHookMsg = from_json(&wrapper.msg)?;
    let sender = deps.api.addr_validate(&wrapper.sender)?;
    let token = info.sender;

    if entry.local_token.as_ref() == Some(&token) {
        let lockbox = query_lockbox(deps.as_ref(), &entry)?;
        return match hook {
            AdapterHookMsg::Swap { memo } => {
                if sender == lockbox {
                    return Err(ContractError::InvalidHook {
                        reason: "the lockbox can only release local tokens".to_string(),
                    });
                }
                deposit_local(deps, token, lockbox, sender, wrapper.amount, memo)
            }
            AdapterHookMsg::Release { recipient } => {
                if sender != lockbox {
                    return Err(ContractError::UnauthorizedRelease {
                        sender: sender.to_string(),
                    });
                }
                release(deps, token, recipient, wrapper.amount)
            }
        };
    }

    if token == entry.wrapped_token {
        return match hook {
            AdapterHookMsg::Swap { memo } => {
                let memo = parse_memo(&memo)?;
                let origin = deps.api.addr_validate(&memo.sender)?;

                let from_lockbox = match entry.local_token {
                    Some(_) => sender == query_lockbox(deps.as_ref(), &entry)?,
                    None => false,
                };
                if from_lockbox {
                    take_pending_deposit(deps.storage, &origin, wrapper.amount)?;
                } else if origin != sender {
                    return Err(ContractError::MemoSenderMismatch {
                        memo: memo.sender,
                        sender: sender.to_string(),
                    });
                }
                swap_out(deps, env, entry, origin, wrapper.amount, memo)
            }
            AdapterHookMsg::Release { .. } => Err(ContractError::InvalidHook {
                reason: "wrapped tokens cannot be released".to_string(),
            }),
        };
    }

    Err(ContractError::TokenNotRegistered {
        token: token.to_string(),
    })
}

/// Sends local tokens to the lockbox, which mints the wrapped form back to
/// the adapter carrying the original memo.
fn deposit_local(
    deps: DepsMut,
    local_token: Addr,
    lockbox: Addr,
    sender: Addr,
    amount: Uint128,
    memo: String,
) -> Result<Response, ContractError> {
    let parsed = parse_memo(&memo)?;
    if parsed.sender != sender.as_str() {
        return Err(ContractError::MemoSenderMismatch {
            memo: parsed.sender,
            sender: sender.to_string(),
        });
    }

    PENDING_DEPOSIT.save(
        deps.storage,
        &PendingDeposit {
            sender: sender.clone(),
            amount,
        },
    )?;

    let hook = LockboxHookMsg {
        recipient: None,
        msg: Some(to_json_binary(&AdapterHookMsg::Swap { memo })?),
    };
    let wrap = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: local_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: lockbox.to_string(),
            amount,
            msg: to_json_binary(&hook)?,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(wrap)
        .add_attribute("action", "deposit")
        .add_attribute("sender", sender)
        .add_attribute("token", local_token)
        .add_attribute("amount", amount))
}

/// A lockbox mint is only accepted as the second leg of a deposit made in
/// the same transaction.
fn take_pending_deposit(
    storage: &mut dyn Storage,
    origin: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    match PENDING_DEPOSIT.may_load(storage)? {
        Some(pending) if pending.sender == *origin && pending.amount == amount => {
            PENDING_DEPOSIT.remove(storage);
            Ok(())
        }
        _ => Err(ContractError::UnexpectedLockboxSwap),
    }
}

/// Last leg of a settlement into a chain with a local token.
fn release(
    deps: DepsMut,
    local_token: Addr,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: local_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "release")
        .add_attribute("token", local_token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn swap_out(
    deps: DepsMut,
    env: Env,
    entry: RegistryEntry,
    origin: Addr,
    amount: Uint128,
    memo: Memo,
) -> Result<Response, ContractError> {
    let mut storage = STORAGE.load(deps.storage)?;

    let fee = calculate_fee(amount, entry.min_fee);
    if amount < fee {
        return Err(ContractError::InsufficientAmount { amount, fee });
    }
    let net_amount = amount - fee;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !fee.is_zero() {
        let fee_manager = storage
            .fee_manager
            .clone()
            .ok_or(ContractError::FeeManagerNotSet)?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: entry.wrapped_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: fee_manager.to_string(),
                amount: fee,
            })?,
            funds: vec![],
        }));
    }

    let data = if memo.user_data_id == 0 {
        vec![]
    } else {
        let key = (&origin, memo.user_data_id);
        let payload = USER_DATA.may_load(deps.storage, key)?.ok_or(
            ContractError::UserDataNotFound {
                owner: origin.to_string(),
                id: memo.user_data_id,
            },
        )?;
        USER_DATA.remove(deps.storage, key);
        payload.to_vec()
    };

    if !net_amount.is_zero() {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: entry.wrapped_token.to_string(),
            msg: to_json_binary(&Xerc20ExecuteMsg::Burn { amount: net_amount })?,
            funds: vec![],
        }));
    }

    let nonce = storage.nonce;
    let event = SwapEvent {
        nonce,
        token: to_bytes32(&entry.canonical_token_id)?,
        destination_chain_id: memo.destination_chain_id,
        amount: to_wei(net_amount, entry.wrapped_symbol.precision)?,
        sender: sender_id(origin.as_str())?,
        recipient: memo.recipient.clone().into_bytes(),
        data,
    };
    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Swap {
            nonce,
            event_bytes: Binary::from(event.encode()),
        })?,
        funds: vec![],
    }));

    storage.nonce += 1;
    STORAGE.save(deps.storage, &storage)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "swap_out")
        .add_attribute("sender", origin)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute(
            "destination_chain_id",
            hex_encode_prefixed(&memo.destination_chain_id),
        )
        .add_attribute("recipient", memo.recipient)
        .add_attribute("amount", amount)
        .add_attribute("fee", fee)
        .add_attribute("net_amount", net_amount))
}

/// Emits the swap event relayers pick up. Self-call only, so the event is
/// recorded after the burn succeeded.
pub fn execute_swap(
    env: Env,
    info: MessageInfo,
    nonce: u64,
    event_bytes: Binary,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::NotSelf);
    }

    Ok(Response::new()
        .add_event(
            Event::new("swap")
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("event_bytes", hex::encode(event_bytes.as_slice())),
        )
        .add_attribute("action", "swap"))
}
