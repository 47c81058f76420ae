//! Bridge mint and burn.
//!
//! The lockbox is exempt from rate limits. Any other caller must be a
//! registered bridge and spends from its own minting or burning bucket.

use cosmwasm_std::{
    Addr, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdResult, Storage, Uint128,
};
use cw20::Cw20ReceiveMsg;
use cw20_base::state::{BALANCES, TOKEN_INFO};

use super::ensure_not_frozen;
use crate::error::ContractError;
use crate::state::{Config, BRIDGES, CONFIG};

#[derive(Clone, Copy)]
enum Direction {
    Minting,
    Burning,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Minting => "minting",
            Direction::Burning => "burning",
        }
    }
}

fn use_limit(
    storage: &mut dyn Storage,
    config: &Config,
    caller: &Addr,
    direction: Direction,
    amount: Uint128,
    now: u64,
) -> Result<(), ContractError> {
    if config.lockbox.as_ref() == Some(caller) {
        return Ok(());
    }

    let mut limits = BRIDGES
        .may_load(storage, caller)?
        .ok_or_else(|| ContractError::NotBridge {
            caller: caller.to_string(),
        })?;

    match direction {
        Direction::Minting => limits.minting.consume(amount, now, direction.as_str())?,
        Direction::Burning => limits.burning.consume(amount, now, direction.as_str())?,
    }
    BRIDGES.save(storage, caller, &limits)?;

    Ok(())
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    use_limit(
        deps.storage,
        &config,
        &info.sender,
        Direction::Minting,
        amount,
        env.block.time.seconds(),
    )?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    ensure_not_frozen(deps.storage, &recipient_addr)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    if let Some(cap) = token_info.get_cap() {
        if token_info.total_supply > cap {
            return Err(ContractError::CannotExceedCap);
        }
    }
    TOKEN_INFO.save(deps.storage, &token_info)?;

    BALANCES.update(
        deps.storage,
        &recipient_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    let mut response = Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender.as_str())
        .add_attribute("to", recipient_addr.as_str())
        .add_attribute("amount", amount);

    if let Some(msg) = msg {
        let notify: CosmosMsg = Cw20ReceiveMsg {
            sender: info.sender.to_string(),
            amount,
            msg,
        }
        .into_cosmos_msg(recipient_addr)?;
        response = response.add_message(notify);
    }

    Ok(response)
}

pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    ensure_not_frozen(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    use_limit(
        deps.storage,
        &config,
        &info.sender,
        Direction::Burning,
        amount,
        env.block.time.seconds(),
    )?;

    Ok(cw20_base::contract::execute_burn(deps, env, info, amount)?)
}
