//! Messages exchanged between the adapter, the lockbox and the xERC20 token.
//!
//! Hooks travel inside the `msg` field of a cw20 `Send` (or an xERC20 `Mint`)
//! and are decoded by the receiving contract's `Receive` handler.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};

/// Hook understood by the adapter's `Receive` handler.
#[cw_serde]
pub enum AdapterHookMsg {
    /// Start an outbound transfer. Memo: `sender,0x<64 hex>,recipient,user_data_id`.
    Swap { memo: String },
    /// Final leg of a settlement: forward the released tokens to `recipient`.
    Release { recipient: String },
}

/// Hook understood by the lockbox's `Receive` handler.
///
/// A local token deposit mints the wrapped token, a wrapped token deposit
/// releases the local token. `recipient` defaults to the cw20 sender and
/// `msg` is forwarded to the recipient as its own receive hook.
#[cw_serde]
#[derive(Default)]
pub struct LockboxHookMsg {
    pub recipient: Option<String>,
    pub msg: Option<Binary>,
}

/// The subset of the xERC20 execute interface other contracts call.
#[cw_serde]
pub enum Xerc20ExecuteMsg {
    /// Mint to `recipient`. With `msg` set the recipient is notified through a
    /// cw20 `Receive` carrying it.
    Mint {
        recipient: String,
        amount: Uint128,
        msg: Option<Binary>,
    },
    Burn {
        amount: Uint128,
    },
}

#[cw_serde]
pub enum Xerc20QueryMsg {
    Lockbox {},
}

#[cw_serde]
pub struct LockboxResponse {
    pub lockbox: Option<Addr>,
}

/// Delivered to a settlement recipient when the operation carries user data.
#[cw_serde]
pub enum UserDataHookMsg {
    ReceiveUserData(UserDataDelivery),
}

#[cw_serde]
pub struct UserDataDelivery {
    pub event_id: Binary,
    pub origin_chain_id: Binary,
    pub sender: Binary,
    pub token: String,
    pub amount: Uint128,
    pub data: Binary,
}
