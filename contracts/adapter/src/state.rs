//! State definitions for the adapter contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::TokenSymbol;

pub const CONTRACT_NAME: &str = "crates.io:xerc20-adapter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the best-effort user data delivery to a settlement recipient.
pub const USER_DATA_REPLY_ID: u64 = 1;

// ============================================================================
// Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// 32-byte id of the chain this adapter runs on
    pub chain_id: Binary,
}

/// Mutable singleton shared by outbound transfers.
#[cw_serde]
pub struct AdapterStorage {
    /// Nonce of the next outbound swap event
    pub nonce: u64,
    pub fee_manager: Option<Addr>,
}

/// The token pairing served by this adapter. Created once.
#[cw_serde]
pub struct RegistryEntry {
    /// `None` when the token has no representation on this chain
    pub local_token: Option<Addr>,
    pub local_symbol: TokenSymbol,
    pub canonical_token_id: Binary,
    pub wrapped_token: Addr,
    pub wrapped_symbol: TokenSymbol,
    /// Fee floor in wrapped token base units
    pub min_fee: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STORAGE: Item<AdapterStorage> = Item::new("storage");
pub const REGISTRY: Item<RegistryEntry> = Item::new("registry");

// ============================================================================
// Deposits
// ============================================================================

/// Local deposit in flight through the lockbox, consumed when the wrapped
/// tokens come back within the same transaction.
#[cw_serde]
pub struct PendingDeposit {
    pub sender: Addr,
    pub amount: Uint128,
}

pub const PENDING_DEPOSIT: Item<PendingDeposit> = Item::new("pending_deposit");

// ============================================================================
// Attestation
// ============================================================================

/// Expected emitter and topic for events from one origin chain.
#[cw_serde]
pub struct OriginMapping {
    pub emitter: Binary,
    pub topic_zero: Binary,
}

#[cw_serde]
pub struct AttestorKey {
    /// Compressed secp256k1 key (33 bytes)
    pub public_key: Binary,
    /// Stored as provided, not verified
    pub attestation: Binary,
    pub updated_at: Timestamp,
}

/// Key: 32-byte origin chain id
pub const ORIGIN_MAPPINGS: Map<&[u8], OriginMapping> = Map::new("origin_mappings");

pub const ATTESTOR: Item<AttestorKey> = Item::new("attestor");

/// Key: event id (sha256 of the preimage), Value: block height of settlement
pub const PAST_EVENTS: Map<&[u8], u64> = Map::new("past_events");

// ============================================================================
// User Data
// ============================================================================

/// Key: (owner, id)
pub const USER_DATA: Map<(&Addr, u64), Binary> = Map::new("user_data");

/// Key: owner, Value: id handed out by the next `AddUserData`
pub const USER_DATA_NEXT_ID: Map<&Addr, u64> = Map::new("user_data_next_id");
