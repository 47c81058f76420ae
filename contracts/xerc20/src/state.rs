//! State definitions for the xERC20 contract
//!
//! Balances and token info live in the cw20-base storage (`token_info`,
//! `balance`); this module only adds the bridge bookkeeping on top.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use crate::rate_limit::RateLimit;

pub const CONTRACT_NAME: &str = "crates.io:xerc20";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Mints and burns without limits.
    pub lockbox: Option<Addr>,
    pub freezing_account: Option<Addr>,
}

/// Independent budgets of one bridge.
#[cw_serde]
#[derive(Default)]
pub struct BridgeLimits {
    pub minting: RateLimit,
    pub burning: RateLimit,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: bridge address
pub const BRIDGES: Map<&Addr, BridgeLimits> = Map::new("bridges");

pub const FROZEN: Map<&Addr, bool> = Map::new("frozen");
