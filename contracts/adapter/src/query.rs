//! Query handlers for the adapter contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::fee::calculate_fee;
use crate::msg::{
    AttestorKeyResponse, CalculateFeeResponse, ConfigResponse, OriginMappingResponse,
    PastEventResponse, StorageResponse, UserDataResponse,
};
use crate::state::{
    RegistryEntry, ATTESTOR, CONFIG, ORIGIN_MAPPINGS, PAST_EVENTS, REGISTRY, STORAGE, USER_DATA,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        chain_id: config.chain_id,
    })
}

pub fn query_registry(deps: Deps) -> StdResult<RegistryEntry> {
    REGISTRY.load(deps.storage)
}

pub fn query_storage(deps: Deps) -> StdResult<StorageResponse> {
    let storage = STORAGE.load(deps.storage)?;
    Ok(StorageResponse {
        nonce: storage.nonce,
        fee_manager: storage.fee_manager,
    })
}

pub fn query_past_event(deps: Deps, event_id: Binary) -> StdResult<PastEventResponse> {
    let height = PAST_EVENTS.may_load(deps.storage, event_id.as_slice())?;
    Ok(PastEventResponse {
        processed: height.is_some(),
        height,
    })
}

pub fn query_origin_mapping(deps: Deps, chain_id: Binary) -> StdResult<OriginMappingResponse> {
    let mapping = ORIGIN_MAPPINGS.load(deps.storage, chain_id.as_slice())?;
    Ok(OriginMappingResponse {
        chain_id,
        emitter: mapping.emitter,
        topic_zero: mapping.topic_zero,
    })
}

pub fn query_attestor_key(deps: Deps) -> StdResult<AttestorKeyResponse> {
    let key = ATTESTOR.load(deps.storage)?;
    Ok(AttestorKeyResponse {
        public_key: key.public_key,
        attestation: key.attestation,
        updated_at: key.updated_at,
    })
}

pub fn query_user_data(deps: Deps, owner: String, id: u64) -> StdResult<UserDataResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let payload = USER_DATA.load(deps.storage, (&owner, id))?;
    Ok(UserDataResponse { owner, id, payload })
}

/// Fee charged on an outbound transfer of `amount` wrapped base units.
pub fn query_calculate_fee(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let entry = REGISTRY.load(deps.storage)?;
    let fee = calculate_fee(amount, entry.min_fee);
    let net_amount = amount.checked_sub(fee).map_err(|_| {
        StdError::generic_err(format!("amount {} does not cover fee {}", amount, fee))
    })?;
    Ok(CalculateFeeResponse { fee, net_amount })
}
