//! Execute handlers for the xERC20 contract.
//!
//! - `ledger` - Transfer and Send, guarded by the freeze list
//! - `supply` - Rate-limited Mint and Burn
//! - `admin` - Bridge limits, lockbox and freezing account
//! - `freeze` - Freeze, Unfreeze and PullFrozen

mod admin;
mod freeze;
mod ledger;
mod supply;

pub use admin::*;
pub use freeze::*;
pub use ledger::*;
pub use supply::*;

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::FROZEN;

pub(crate) fn ensure_not_frozen(storage: &dyn Storage, account: &Addr) -> Result<(), ContractError> {
    if FROZEN.may_load(storage, account)?.unwrap_or(false) {
        return Err(ContractError::Frozen {
            account: account.to_string(),
        });
    }
    Ok(())
}
