use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{BRIDGES, CONFIG};

fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Registers a bridge, or rebases an existing bridge's buckets onto new maxima.
pub fn execute_set_limits(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    bridge: String,
    minting_limit: Uint128,
    burning_limit: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let bridge_addr = deps.api.addr_validate(&bridge)?;
    let now = env.block.time.seconds();

    let mut limits = BRIDGES
        .may_load(deps.storage, &bridge_addr)?
        .unwrap_or_default();
    limits.minting.set_max(minting_limit, now);
    limits.burning.set_max(burning_limit, now);
    BRIDGES.save(deps.storage, &bridge_addr, &limits)?;

    Ok(Response::new()
        .add_attribute("action", "set_limits")
        .add_attribute("bridge", bridge_addr)
        .add_attribute("minting_limit", minting_limit)
        .add_attribute("burning_limit", burning_limit))
}

pub fn execute_set_lockbox(
    deps: DepsMut,
    info: MessageInfo,
    lockbox: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let lockbox_addr = deps.api.addr_validate(&lockbox)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.lockbox = Some(lockbox_addr.clone());
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_lockbox")
        .add_attribute("lockbox", lockbox_addr))
}

pub fn execute_set_freezing_account(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let account_addr = deps.api.addr_validate(&account)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.freezing_account = Some(account_addr.clone());
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_freezing_account")
        .add_attribute("account", account_addr))
}
