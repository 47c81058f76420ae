use cosmwasm_std::{Deps, Env, StdResult};
use common::LockboxResponse;

use crate::msg::{BridgeLimitsResponse, ConfigResponse, IsFrozenResponse};
use crate::state::{BRIDGES, CONFIG, FROZEN};

pub fn query_lockbox(deps: Deps) -> StdResult<LockboxResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(LockboxResponse {
        lockbox: config.lockbox,
    })
}

pub fn query_bridge_limits(deps: Deps, env: Env, bridge: String) -> StdResult<BridgeLimitsResponse> {
    let bridge = deps.api.addr_validate(&bridge)?;
    let limits = BRIDGES.may_load(deps.storage, &bridge)?.unwrap_or_default();
    let now = env.block.time.seconds();

    Ok(BridgeLimitsResponse {
        minting_max: limits.minting.max_limit,
        minting_current: limits.minting.effective_limit(now),
        burning_max: limits.burning.max_limit,
        burning_current: limits.burning.effective_limit(now),
        bridge,
    })
}

pub fn query_is_frozen(deps: Deps, account: String) -> StdResult<IsFrozenResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(IsFrozenResponse {
        frozen: FROZEN.may_load(deps.storage, &account)?.unwrap_or(false),
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        lockbox: config.lockbox,
        freezing_account: config.freezing_account,
    })
}
