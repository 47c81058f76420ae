use cosmwasm_std::{to_json_binary, Binary, DepsMut, MessageInfo, Order, Response, StdResult};

use super::ensure_caller;
use crate::error::ContractError;
use crate::msg::AddUserDataResponse;
use crate::state::{USER_DATA, USER_DATA_NEXT_ID};

/// Stores `payload` under the next id of the caller. Ids start at 1 since a
/// memo id of 0 means "no user data".
pub fn execute_add_user_data(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let caller = ensure_caller(deps.as_ref(), &info, &caller)?;
    if payload.is_empty() {
        return Err(ContractError::EmptyUserData);
    }

    let id = USER_DATA_NEXT_ID
        .may_load(deps.storage, &caller)?
        .unwrap_or(1);
    USER_DATA.save(deps.storage, (&caller, id), &payload)?;
    USER_DATA_NEXT_ID.save(deps.storage, &caller, &(id + 1))?;

    Ok(Response::new()
        .set_data(to_json_binary(&AddUserDataResponse { id })?)
        .add_attribute("action", "add_user_data")
        .add_attribute("owner", caller)
        .add_attribute("user_data_id", id.to_string())
        .add_attribute("size", payload.len().to_string()))
}

/// Drops every payload the caller still holds. The id counter is kept so
/// freed ids are never reused.
pub fn execute_free_user_data(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
) -> Result<Response, ContractError> {
    let caller = ensure_caller(deps.as_ref(), &info, &caller)?;

    let ids = USER_DATA
        .prefix(&caller)
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<u64>>>()?;
    for id in &ids {
        USER_DATA.remove(deps.storage, (&caller, *id));
    }

    Ok(Response::new()
        .add_attribute("action", "free_user_data")
        .add_attribute("owner", caller)
        .add_attribute("freed", ids.len().to_string()))
}
