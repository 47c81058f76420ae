use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use super::ensure_not_frozen;
use crate::error::ContractError;

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    ensure_not_frozen(deps.storage, &info.sender)?;
    ensure_not_frozen(deps.storage, &recipient_addr)?;

    Ok(cw20_base::contract::execute_transfer(
        deps, env, info, recipient, amount,
    )?)
}

pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let contract_addr = deps.api.addr_validate(&contract)?;
    ensure_not_frozen(deps.storage, &info.sender)?;
    ensure_not_frozen(deps.storage, &contract_addr)?;

    Ok(cw20_base::contract::execute_send(
        deps, env, info, contract, amount, msg,
    )?)
}
