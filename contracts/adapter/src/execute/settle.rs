//! Incoming transfer handler.
//!
//! A relayer submits an [`Operation`] with its [`Metadata`] proof. Once the
//! proof authenticates and the event id has not been seen before, the amount
//! is minted to the recipient, through the lockbox when this chain has a
//! local token.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Reply, Response, SubMsg,
    WasmMsg,
};

use common::codec::hex_encode_prefixed;
use common::msg::{UserDataDelivery, UserDataHookMsg};
use common::{from_wei, AdapterHookMsg, LockboxHookMsg, Xerc20ExecuteMsg};

use super::{ensure_caller, query_lockbox};
use crate::error::ContractError;
use crate::msg::{Metadata, Operation};
use crate::pam::{authenticate, AuthContext};
use crate::state::{ATTESTOR, CONFIG, PAST_EVENTS, REGISTRY, USER_DATA_REPLY_ID};

pub fn execute_settle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    caller: String,
    operation: Operation,
    metadata: Metadata,
) -> Result<Response, ContractError> {
    let caller = ensure_caller(deps.as_ref(), &info, &caller)?;

    let entry = REGISTRY
        .may_load(deps.storage)?
        .ok_or(ContractError::NotCreated)?;
    if entry.canonical_token_id != operation.token {
        return Err(ContractError::UnknownToken);
    }

    let config = CONFIG.load(deps.storage)?;
    let ctx = AuthContext {
        local_chain_id: config.chain_id.to_vec(),
        attestor_key: ATTESTOR
            .may_load(deps.storage)?
            .map(|key| key.public_key.to_vec()),
    };
    let event_id = authenticate(deps.as_ref(), &ctx, &operation, &metadata)?;

    // Recorded before any value moves
    if PAST_EVENTS.has(deps.storage, &event_id) {
        return Err(ContractError::AlreadyProcessed {
            event_id: hex_encode_prefixed(&event_id),
        });
    }
    PAST_EVENTS.save(deps.storage, &event_id, &env.block.height)?;

    let recipient = deps.api.addr_validate(&operation.recipient)?;
    let amount = from_wei(operation.amount, entry.wrapped_symbol.precision)?;

    let mut res = Response::new()
        .add_attribute("action", "settle")
        .add_attribute("caller", caller)
        .add_attribute("event_id", hex_encode_prefixed(&event_id))
        .add_attribute("nonce", operation.nonce.to_string())
        .add_attribute(
            "origin_chain_id",
            hex_encode_prefixed(&operation.origin_chain_id),
        )
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount);

    if !amount.is_zero() {
        let mint = match &entry.local_token {
            Some(_) => {
                let lockbox = query_lockbox(deps.as_ref(), &entry)?;
                let hook = LockboxHookMsg {
                    recipient: None,
                    msg: Some(to_json_binary(&AdapterHookMsg::Release {
                        recipient: recipient.to_string(),
                    })?),
                };
                Xerc20ExecuteMsg::Mint {
                    recipient: lockbox.to_string(),
                    amount,
                    msg: Some(to_json_binary(&hook)?),
                }
            }
            None => Xerc20ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
                msg: None,
            },
        };
        res = res.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: entry.wrapped_token.to_string(),
            msg: to_json_binary(&mint)?,
            funds: vec![],
        }));
    }

    if !operation.data.is_empty() {
        // The token the recipient ends up holding
        let delivered_token = entry.local_token.as_ref().unwrap_or(&entry.wrapped_token);
        let delivery = UserDataHookMsg::ReceiveUserData(UserDataDelivery {
            event_id: Binary::from(event_id.to_vec()),
            origin_chain_id: operation.origin_chain_id.clone(),
            sender: operation.sender.clone(),
            token: delivered_token.to_string(),
            amount,
            data: operation.data.clone(),
        });
        res = res.add_submessage(SubMsg::reply_on_error(
            WasmMsg::Execute {
                contract_addr: recipient.to_string(),
                msg: to_json_binary(&delivery)?,
                funds: vec![],
            },
            USER_DATA_REPLY_ID,
        ));
    }

    Ok(res)
}

/// User data delivery is best effort; the settlement stands when the
/// recipient rejects it.
pub fn reply_user_data(msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        USER_DATA_REPLY_ID => Ok(Response::new()
            .add_attribute("action", "user_data_delivery")
            .add_attribute("user_data_delivery", "failed")),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}
