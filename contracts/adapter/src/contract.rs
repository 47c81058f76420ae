//! xERC20 Adapter Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use common::codec::hex_encode_prefixed;

use crate::error::ContractError;
use crate::execute::{
    ensure_bytes32, execute_add_user_data, execute_create, execute_free_user_data,
    execute_receive, execute_set_attestor_key, execute_set_chain_id, execute_set_fee_manager,
    execute_set_origin_mapping, execute_settle, execute_swap, reply_user_data,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_attestor_key, query_calculate_fee, query_config, query_origin_mapping,
    query_past_event, query_registry, query_storage, query_user_data,
};
use crate::state::{AdapterStorage, Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STORAGE};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    ensure_bytes32("chain id", &msg.chain_id)?;
    let fee_manager = msg
        .fee_manager
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            chain_id: msg.chain_id.clone(),
        },
    )?;
    STORAGE.save(
        deps.storage,
        &AdapterStorage {
            nonce: 0,
            fee_manager,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("chain_id", hex_encode_prefixed(&msg.chain_id)))
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
        // Owner
        ExecuteMsg::Create {
            wrapped_token,
            wrapped_symbol,
            local_token,
            local_symbol,
            canonical_token_id,
            min_fee,
        } => execute_create(
            deps,
            info,
            wrapped_token,
            wrapped_symbol,
            local_token,
            local_symbol,
            canonical_token_id,
            min_fee,
        ),
        ExecuteMsg::SetFeeManager { fee_manager } => {
            execute_set_fee_manager(deps, info, fee_manager)
        }
        ExecuteMsg::SetChainId { chain_id } => execute_set_chain_id(deps, info, chain_id),
        ExecuteMsg::SetAttestorKey {
            public_key,
            attestation,
        } => execute_set_attestor_key(deps, env, info, public_key, attestation),
        ExecuteMsg::SetOriginMapping {
            chain_id,
            emitter,
            topic_zero,
        } => execute_set_origin_mapping(deps, info, chain_id, emitter, topic_zero),

        // User data
        ExecuteMsg::AddUserData { caller, payload } => {
            execute_add_user_data(deps, info, caller, payload)
        }
        ExecuteMsg::FreeUserData { caller } => execute_free_user_data(deps, info, caller),

        // Transfers
        ExecuteMsg::Settle {
            caller,
            operation,
            metadata,
        } => execute_settle(deps, env, info, caller, operation, metadata),
        ExecuteMsg::Swap { nonce, event_bytes } => execute_swap(env, info, nonce, event_bytes),
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, env, info, wrapper),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    reply_user_data(msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Registry {} => to_json_binary(&query_registry(deps)?),
        QueryMsg::Storage {} => to_json_binary(&query_storage(deps)?),
        QueryMsg::PastEvent { event_id } => to_json_binary(&query_past_event(deps, event_id)?),
        QueryMsg::OriginMapping { chain_id } => {
            to_json_binary(&query_origin_mapping(deps, chain_id)?)
        }
        QueryMsg::AttestorKey {} => to_json_binary(&query_attestor_key(deps)?),
        QueryMsg::UserData { owner, id } => to_json_binary(&query_user_data(deps, owner, id)?),
        QueryMsg::CalculateFee { amount } => {
            to_json_binary(&query_calculate_fee(deps, amount)?)
        }
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
