//! Execute handlers for the adapter contract.
//!
//! - `admin` - Registry creation and attestation configuration
//! - `user_data` - Payloads referenced by swap memos
//! - `swap` - Outbound transfers and the swap event
//! - `settle` - Proof-authenticated incoming transfers

mod admin;
mod settle;
mod swap;
mod user_data;

pub use admin::*;
pub use settle::*;
pub use swap::*;
pub use user_data::*;

use cosmwasm_std::{Addr, Binary, Deps, MessageInfo};

use common::{LockboxResponse, Xerc20QueryMsg};

use crate::error::ContractError;
use crate::state::{RegistryEntry, CONFIG};

pub(crate) fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Entry points taking an explicit `caller` act on behalf of that account
/// only when it is also the transaction sender.
pub(crate) fn ensure_caller(
    deps: Deps,
    info: &MessageInfo,
    caller: &str,
) -> Result<Addr, ContractError> {
    let caller = deps.api.addr_validate(caller)?;
    if info.sender != caller {
        return Err(ContractError::UnauthorizedCaller {
            expected: caller.to_string(),
            got: info.sender.to_string(),
        });
    }
    Ok(caller)
}

/// The lockbox currently configured on the wrapped token.
pub(crate) fn query_lockbox(deps: Deps, entry: &RegistryEntry) -> Result<Addr, ContractError> {
    let res: LockboxResponse = deps
        .querier
        .query_wasm_smart(&entry.wrapped_token, &Xerc20QueryMsg::Lockbox {})?;
    res.lockbox.ok_or(ContractError::LockboxNotSet)
}

pub(crate) fn ensure_bytes32(field: &str, value: &Binary) -> Result<(), ContractError> {
    if value.len() != 32 {
        return Err(ContractError::InvalidBytes32 {
            field: field.to_string(),
            got: value.len(),
        });
    }
    Ok(())
}
