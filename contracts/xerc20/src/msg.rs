//! Message types for the xERC20 contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20Coin;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Optional cap on total supply
    pub max_supply: Option<Uint128>,
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Ledger (cw20 compatible)
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    // ========================================================================
    // Bridge Supply
    // ========================================================================
    /// Lockbox or registered bridge only. `msg` notifies the recipient
    /// through a cw20 `Receive`.
    Mint {
        recipient: String,
        amount: Uint128,
        msg: Option<Binary>,
    },
    /// Lockbox or registered bridge only.
    Burn { amount: Uint128 },

    // ========================================================================
    // Owner
    // ========================================================================
    /// Registers `bridge` or updates its limits.
    SetLimits {
        bridge: String,
        minting_limit: Uint128,
        burning_limit: Uint128,
    },
    SetLockbox { lockbox: String },
    SetFreezingAccount { account: String },

    // ========================================================================
    // Freezing
    // ========================================================================
    Freeze { account: String },
    Unfreeze { account: String },
    /// Moves `amount` out of a frozen account.
    PullFrozen {
        account: String,
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(common::LockboxResponse)]
    Lockbox {},

    /// Limits as available at the current block time.
    #[returns(BridgeLimitsResponse)]
    BridgeLimits { bridge: String },

    #[returns(IsFrozenResponse)]
    IsFrozen { account: String },

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct BridgeLimitsResponse {
    pub bridge: Addr,
    pub minting_max: Uint128,
    pub minting_current: Uint128,
    pub burning_max: Uint128,
    pub burning_current: Uint128,
}

#[cw_serde]
pub struct IsFrozenResponse {
    pub frozen: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub lockbox: Option<Addr>,
    pub freezing_account: Option<Addr>,
}
