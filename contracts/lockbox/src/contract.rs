use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::symbol::query_token_info;
use common::{LockboxHookMsg, Xerc20ExecuteMsg};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerResponse, QueryMsg};
use crate::state::{
    LockboxPair, CONTRACT_NAME, CONTRACT_VERSION, OWNER, PAIRS, WRAPPED_TO_LOCAL,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Create {
            local_token,
            wrapped_token,
        } => execute_create(deps, info, local_token, wrapped_token),
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, info, wrapper),
    }
}

fn execute_create(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    wrapped_token: String,
) -> Result<Response, ContractError> {
    if info.sender != OWNER.load(deps.storage)? {
        return Err(ContractError::Unauthorized);
    }

    let local_token = deps.api.addr_validate(&local_token)?;
    let wrapped_token = deps.api.addr_validate(&wrapped_token)?;

    if PAIRS.has(deps.storage, &local_token) || WRAPPED_TO_LOCAL.has(deps.storage, &local_token) {
        return Err(ContractError::AlreadyRegistered {
            token: local_token.to_string(),
        });
    }
    if PAIRS.has(deps.storage, &wrapped_token)
        || WRAPPED_TO_LOCAL.has(deps.storage, &wrapped_token)
    {
        return Err(ContractError::AlreadyRegistered {
            token: wrapped_token.to_string(),
        });
    }

    let local_info = query_token_info(&deps.querier, &local_token)?;
    let wrapped_info = query_token_info(&deps.querier, &wrapped_token)?;
    if local_info.decimals != wrapped_info.decimals {
        return Err(ContractError::PrecisionMismatch {
            local: local_info.decimals,
            wrapped: wrapped_info.decimals,
        });
    }

    let pair = LockboxPair {
        local_token: local_token.clone(),
        wrapped_token: wrapped_token.clone(),
        decimals: local_info.decimals,
    };
    PAIRS.save(deps.storage, &local_token, &pair)?;
    WRAPPED_TO_LOCAL.save(deps.storage, &wrapped_token, &local_token)?;

    Ok(Response::new()
        .add_attribute("action", "create")
        .add_attribute("local_token", local_token)
        .add_attribute("wrapped_token", wrapped_token))
}

/// Dispatches on the token that called us: the local token is wrapped, the
/// wrapped token is unwrapped.
fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    if wrapper.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let hook: LockboxHookMsg = if wrapper.msg.is_empty() {
        LockboxHookMsg::default()
    } else {
        from_json(&wrapper.msg)?
    };

    let sender = deps.api.addr_validate(&wrapper.sender)?;
    let recipient = match hook.recipient {
        Some(recipient) => deps.api.addr_validate(&recipient)?,
        None => sender.clone(),
    };
    let token = info.sender;

    if let Some(pair) = PAIRS.may_load(deps.storage, &token)? {
        return deposit(pair, sender, recipient, wrapper.amount, hook.msg);
    }
    if let Some(local_token) = WRAPPED_TO_LOCAL.may_load(deps.storage, &token)? {
        return withdraw(token, local_token, sender, recipient, wrapper.amount, hook.msg);
    }

    Err(ContractError::TokenNotRegistered {
        token: token.to_string(),
    })
}

fn deposit(
    pair: LockboxPair,
    sender: Addr,
    recipient: Addr,
    amount: Uint128,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    let mint = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pair.wrapped_token.to_string(),
        msg: to_json_binary(&Xerc20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
            msg,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "deposit")
        .add_attribute("token", pair.local_token)
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn withdraw(
    wrapped_token: Addr,
    local_token: Addr,
    sender: Addr,
    recipient: Addr,
    amount: Uint128,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    let burn = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: wrapped_token.to_string(),
        msg: to_json_binary(&Xerc20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    });

    let release = match msg {
        Some(msg) => Cw20ExecuteMsg::Send {
            contract: recipient.to_string(),
            amount,
            msg,
        },
        None => Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    };
    let release = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: local_token.to_string(),
        msg: to_json_binary(&release)?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn)
        .add_message(release)
        .add_attribute("action", "withdraw")
        .add_attribute("token", local_token)
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        QueryMsg::Pair { token } => {
            let token = deps.api.addr_validate(&token)?;
            to_json_binary(&PAIRS.load(deps.storage, &token)?)
        }
        QueryMsg::PairByWrapped { wrapped_token } => {
            let wrapped_token = deps.api.addr_validate(&wrapped_token)?;
            let local_token = WRAPPED_TO_LOCAL.load(deps.storage, &wrapped_token)?;
            to_json_binary(&PAIRS.load(deps.storage, &local_token)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
