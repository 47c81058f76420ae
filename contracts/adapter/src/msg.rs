//! Message types for the adapter contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw20::Cw20ReceiveMsg;

use common::TokenSymbol;

use crate::state::RegistryEntry;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// 32-byte id of this chain, matched against the destination of
    /// incoming events
    pub chain_id: Binary,
    pub fee_manager: Option<String>,
}

/// A cross-chain transfer observed on the origin chain, as claimed by the
/// relayer. Every field is checked against the attested event.
#[cw_serde]
pub struct Operation {
    pub block_id: Binary,
    pub tx_id: Binary,
    pub nonce: u64,
    /// Canonical token id
    pub token: Binary,
    pub origin_chain_id: Binary,
    pub destination_chain_id: Binary,
    /// 18-decimal amount
    pub amount: Uint128,
    /// 32-byte sender id on the origin chain
    pub sender: Binary,
    pub recipient: String,
    pub data: Binary,
}

/// Proof for an [`Operation`].
#[cw_serde]
pub struct Metadata {
    /// `version || protocol || origin chain || block id || tx id || payload`
    pub preimage: Binary,
    /// 65-byte secp256k1 signature `r || s || v` over sha256(preimage)
    pub signature: Binary,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Owner
    // ========================================================================
    /// Registers the token pairing. Allowed once.
    Create {
        wrapped_token: String,
        wrapped_symbol: TokenSymbol,
        local_token: Option<String>,
        local_symbol: TokenSymbol,
        canonical_token_id: Binary,
        min_fee: Uint128,
    },
    SetFeeManager {
        fee_manager: String,
    },
    SetChainId {
        chain_id: Binary,
    },
    SetAttestorKey {
        public_key: Binary,
        attestation: Binary,
    },
    SetOriginMapping {
        chain_id: Binary,
        emitter: Binary,
        topic_zero: Binary,
    },

    // ========================================================================
    // User Data
    // ========================================================================
    /// Stores a payload referenced by id from a swap memo. The id is returned
    /// in the response data.
    AddUserData {
        caller: String,
        payload: Binary,
    },
    /// Removes all of the caller's stored payloads.
    FreeUserData {
        caller: String,
    },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Completes an incoming transfer proven by `metadata`.
    Settle {
        caller: String,
        operation: Operation,
        metadata: Metadata,
    },
    /// Emits the outbound swap event. Only callable by the adapter itself.
    Swap {
        nonce: u64,
        event_bytes: Binary,
    },
    /// Hook: `common::AdapterHookMsg`
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(RegistryEntry)]
    Registry {},

    #[returns(StorageResponse)]
    Storage {},

    #[returns(PastEventResponse)]
    PastEvent { event_id: Binary },

    #[returns(OriginMappingResponse)]
    OriginMapping { chain_id: Binary },

    #[returns(AttestorKeyResponse)]
    AttestorKey {},

    #[returns(UserDataResponse)]
    UserData { owner: String, id: u64 },

    #[returns(CalculateFeeResponse)]
    CalculateFee { amount: Uint128 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub chain_id: Binary,
}

#[cw_serde]
pub struct StorageResponse {
    pub nonce: u64,
    pub fee_manager: Option<Addr>,
}

#[cw_serde]
pub struct PastEventResponse {
    pub processed: bool,
    pub height: Option<u64>,
}

#[cw_serde]
pub struct OriginMappingResponse {
    pub chain_id: Binary,
    pub emitter: Binary,
    pub topic_zero: Binary,
}

#[cw_serde]
pub struct AttestorKeyResponse {
    pub public_key: Binary,
    pub attestation: Binary,
    pub updated_at: Timestamp,
}

#[cw_serde]
pub struct UserDataResponse {
    pub owner: Addr,
    pub id: u64,
    pub payload: Binary,
}

#[cw_serde]
pub struct AddUserDataResponse {
    pub id: u64,
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub fee: Uint128,
    pub net_amount: Uint128,
}
