use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:lockbox";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Item<Addr> = Item::new("owner");

#[cw_serde]
pub struct LockboxPair {
    pub local_token: Addr,
    pub wrapped_token: Addr,
    pub decimals: u8,
}

/// Key: local token. Written together with `WRAPPED_TO_LOCAL`.
pub const PAIRS: Map<&Addr, LockboxPair> = Map::new("pairs");

/// Key: wrapped token, Value: local token
pub const WRAPPED_TO_LOCAL: Map<&Addr, Addr> = Map::new("wrapped_to_local");
