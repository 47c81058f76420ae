//! Owner-only handlers: registry creation, fee manager, chain id and the
//! attestation configuration.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use common::codec::{hex_encode_prefixed, is_all_zeros};
use common::symbol::check_symbol_is_valid;
use common::TokenSymbol;

use super::{ensure_bytes32, ensure_owner};
use crate::error::ContractError;
use crate::pam::compress_public_key;
use crate::state::{
    AttestorKey, OriginMapping, RegistryEntry, ATTESTOR, CONFIG, ORIGIN_MAPPINGS, REGISTRY,
    STORAGE,
};

/// Registers the single token pairing served by this adapter.
#[allow(clippy::too_many_arguments)]
pub fn execute_create(
    deps: DepsMut,
    info: MessageInfo,
    wrapped_token: String,
    wrapped_symbol: TokenSymbol,
    local_token: Option<String>,
    local_symbol: TokenSymbol,
    canonical_token_id: Binary,
    min_fee: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    if REGISTRY.exists(deps.storage) {
        return Err(ContractError::AlreadyCreated);
    }
    ensure_bytes32("canonical token id", &canonical_token_id)?;

    let wrapped_token = deps.api.addr_validate(&wrapped_token)?;
    check_symbol_is_valid(&deps.querier, &wrapped_token, &wrapped_symbol)?;

    let local_token = local_token
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;
    if let Some(token) = &local_token {
        check_symbol_is_valid(&deps.querier, token, &local_symbol)?;
        if local_symbol.precision != wrapped_symbol.precision {
            return Err(ContractError::PrecisionMismatch {
                local: local_symbol.precision,
                wrapped: wrapped_symbol.precision,
            });
        }
    }

    let entry = RegistryEntry {
        local_token,
        local_symbol,
        canonical_token_id,
        wrapped_token,
        wrapped_symbol,
        min_fee,
    };
    REGISTRY.save(deps.storage, &entry)?;

    let mut res = Response::new()
        .add_attribute("action", "create")
        .add_attribute("wrapped_token", entry.wrapped_token.as_str())
        .add_attribute("wrapped_symbol", entry.wrapped_symbol.to_string())
        .add_attribute("local_symbol", entry.local_symbol.to_string())
        .add_attribute(
            "canonical_token_id",
            hex_encode_prefixed(&entry.canonical_token_id),
        )
        .add_attribute("min_fee", entry.min_fee);
    if let Some(local_token) = &entry.local_token {
        res = res.add_attribute("local_token", local_token.as_str());
    }
    Ok(res)
}

pub fn execute_set_fee_manager(
    deps: DepsMut,
    info: MessageInfo,
    fee_manager: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let fee_manager = deps.api.addr_validate(&fee_manager)?;
    STORAGE.update(deps.storage, |mut storage| -> Result<_, ContractError> {
        storage.fee_manager = Some(fee_manager.clone());
        Ok(storage)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_manager")
        .add_attribute("fee_manager", fee_manager))
}

pub fn execute_set_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: Binary,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;
    ensure_bytes32("chain id", &chain_id)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.chain_id = chain_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_chain_id")
        .add_attribute("chain_id", hex_encode_prefixed(&config.chain_id)))
}

/// Replaces the attestor key. Uncompressed keys are stored compressed.
pub fn execute_set_attestor_key(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    public_key: Binary,
    attestation: Binary,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let compressed = compress_public_key(&public_key).ok_or(ContractError::InvalidPublicKey {
        len: public_key.len(),
    })?;
    let key = AttestorKey {
        public_key: Binary::from(compressed),
        attestation,
        updated_at: env.block.time,
    };
    ATTESTOR.save(deps.storage, &key)?;

    Ok(Response::new()
        .add_attribute("action", "set_attestor_key")
        .add_attribute("public_key", hex_encode_prefixed(&key.public_key)))
}

pub fn execute_set_origin_mapping(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: Binary,
    emitter: Binary,
    topic_zero: Binary,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    ensure_bytes32("chain id", &chain_id)?;
    ensure_bytes32("emitter", &emitter)?;
    ensure_bytes32("topic zero", &topic_zero)?;
    if is_all_zeros(&emitter) || is_all_zeros(&topic_zero) {
        return Err(ContractError::InvalidOrigin);
    }

    ORIGIN_MAPPINGS.save(
        deps.storage,
        chain_id.as_slice(),
        &OriginMapping {
            emitter: emitter.clone(),
            topic_zero: topic_zero.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_origin_mapping")
        .add_attribute("chain_id", hex_encode_prefixed(&chain_id))
        .add_attribute("emitter", hex_encode_prefixed(&emitter))
        .add_attribute("topic_zero", hex_encode_prefixed(&topic_zero)))
}
