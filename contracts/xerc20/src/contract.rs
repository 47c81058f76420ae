//! xERC20 Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw20::MinterResponse;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_freeze, execute_mint, execute_pull_frozen, execute_send,
    execute_set_freezing_account, execute_set_limits, execute_set_lockbox, execute_transfer,
    execute_unfreeze,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_bridge_limits, query_config, query_is_frozen, query_lockbox};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;

    // The cw20 minter entry is only used to carry the supply cap; minting
    // itself goes through the bridge checks in `execute_mint`.
    let ledger_msg = cw20_base::msg::InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: msg.initial_balances,
        mint: Some(MinterResponse {
            minter: owner.to_string(),
            cap: msg.max_supply,
        }),
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info, ledger_msg)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            lockbox: None,
            freezing_account: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, env, info, contract, amount, msg),
        ExecuteMsg::Mint {
            recipient,
            amount,
            msg,
        } => execute_mint(deps, env, info, recipient, amount, msg),
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::SetLimits {
            bridge,
            minting_limit,
            burning_limit,
        } => execute_set_limits(deps, env, info, bridge, minting_limit, burning_limit),
        ExecuteMsg::SetLockbox { lockbox } => execute_set_lockbox(deps, info, lockbox),
        ExecuteMsg::SetFreezingAccount { account } => {
            execute_set_freezing_account(deps, info, account)
        }
        ExecuteMsg::Freeze { account } => execute_freeze(deps, info, account),
        ExecuteMsg::Unfreeze { account } => execute_unfreeze(deps, info, account),
        ExecuteMsg::PullFrozen {
            account,
            recipient,
            amount,
        } => execute_pull_frozen(deps, info, account, recipient, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
        QueryMsg::Lockbox {} => to_json_binary(&query_lockbox(deps)?),
        QueryMsg::BridgeLimits { bridge } => {
            to_json_binary(&query_bridge_limits(deps, env, bridge)?)
        }
        QueryMsg::IsFrozen { account } => to_json_binary(&query_is_frozen(deps, account)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
