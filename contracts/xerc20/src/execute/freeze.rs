use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response, StdResult, Uint128};
use cw20_base::state::BALANCES;

use super::ensure_not_frozen;
use crate::error::ContractError;
use crate::state::{CONFIG, FROZEN};

fn ensure_freezer(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match config.freezing_account {
        None => Err(ContractError::FreezingAccountNotSet),
        Some(freezer) if freezer != info.sender => Err(ContractError::UnauthorizedFreezer),
        Some(_) => Ok(()),
    }
}

pub fn execute_freeze(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    ensure_freezer(deps.as_ref(), &info)?;

    let account_addr = deps.api.addr_validate(&account)?;
    ensure_not_frozen(deps.storage, &account_addr)?;
    FROZEN.save(deps.storage, &account_addr, &true)?;

    Ok(Response::new()
        .add_attribute("action", "freeze")
        .add_attribute("account", account_addr))
}

pub fn execute_unfreeze(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    ensure_freezer(deps.as_ref(), &info)?;

    let account_addr = deps.api.addr_validate(&account)?;
    if !FROZEN.has(deps.storage, &account_addr) {
        return Err(ContractError::NotFrozen { account });
    }
    FROZEN.remove(deps.storage, &account_addr);

    Ok(Response::new()
        .add_attribute("action", "unfreeze")
        .add_attribute("account", account_addr))
}

pub fn execute_pull_frozen(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_freezer(deps.as_ref(), &info)?;

    let account_addr = deps.api.addr_validate(&account)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if !FROZEN.has(deps.storage, &account_addr) {
        return Err(ContractError::NotFrozen { account });
    }
    ensure_not_frozen(deps.storage, &recipient_addr)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    BALANCES.update(
        deps.storage,
        &account_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_sub(amount)?)
        },
    )?;
    BALANCES.update(
        deps.storage,
        &recipient_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "pull_frozen")
        .add_attribute("from", account_addr)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}
