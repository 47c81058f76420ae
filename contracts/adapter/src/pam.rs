//! Proof Authentication Module
//!
//! Decides whether a relayed [`Operation`] really happened on its origin
//! chain. The relayer supplies the attested event preimage and a secp256k1
//! signature over `sha256(preimage)` made by the registered attestor key.
//!
//! # Preimage Layout
//! - Byte 0:        version
//! - Byte 1:        protocol (`PROTOCOL_EVM` or `PROTOCOL_ACCOUNT`)
//! - Bytes 2-33:    origin chain id
//! - Bytes 34-65:   block id
//! - Bytes 66-97:   tx id
//! - Bytes 98-129:  emitter
//! - Bytes 130-161: topic zero
//! - Bytes 162-257: topics 1-3 (ignored)
//! - Bytes 258-..:  event data
//!
//! EVM event data is the raw [`SwapEvent`] layout. Account-based chains log
//! the event as `{"event_bytes":"<hex>"}`, which is unwrapped first.
//!
//! # Checks (in order, first failure wins)
//! 1. Context fields of the preimage equal the operation's
//! 2. The origin chain has a registered emitter/topic mapping
//! 3. `event_id = sha256(preimage)`
//! 4. The signature recovers to the attestor key
//! 5. Emitter and topic zero match the mapping
//! 6. Every decoded event field matches the operation

use cosmwasm_std::{Api, Deps, StdError, Uint128};
use thiserror::Error;

use common::codec::{extract, hex_decode, hex_encode_prefixed, is_all_zeros, CodecError, WORD};

use crate::event::SwapEvent;
use crate::hash::sha256;
use crate::msg::{Metadata, Operation};
use crate::state::ORIGIN_MAPPINGS;

pub const PROTOCOL_EVM: u8 = 0x01;
pub const PROTOCOL_ACCOUNT: u8 = 0x02;

const PROTOCOL_OFFSET: usize = 1;
const ORIGIN_CHAIN_OFFSET: usize = 2;
const BLOCK_ID_OFFSET: usize = 34;
const TX_ID_OFFSET: usize = 66;
const PAYLOAD_OFFSET: usize = 98;
const TOPIC_ZERO_OFFSET: usize = PAYLOAD_OFFSET + WORD;
const EVENT_DATA_OFFSET: usize = PAYLOAD_OFFSET + 5 * WORD;

/// `{"event_bytes":"`
const ACCOUNT_EVENT_PREFIX: usize = 16;
/// `"}`
const ACCOUNT_EVENT_SUFFIX: usize = 2;

pub const SIGNATURE_LEN: usize = 65;

#[derive(Error, Debug, PartialEq)]
pub enum PamError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("malformed event: {0}")]
    MalformedEvent(#[from] CodecError),

    #[error("preimage too short: {len} bytes")]
    MalformedPreimage { len: usize },

    #[error("unexpected {field} in proof context")]
    UnexpectedContext { field: String },

    #[error("unknown origin chain {chain_id}")]
    UnknownOrigin { chain_id: String },

    #[error("attestor key not set")]
    AttestorKeyNotSet,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("unexpected emitter")]
    UnexpectedEmitter,

    #[error("unexpected topic")]
    UnexpectedTopic,

    #[error("unsupported protocol {protocol}")]
    UnsupportedProtocol { protocol: u8 },

    #[error("nonce mismatch: event {event}, operation {operation}")]
    NonceMismatch { event: u64, operation: u64 },

    #[error("token mismatch")]
    TokenMismatch,

    #[error("destination chain mismatch")]
    DestinationChainMismatch,

    #[error("amount mismatch: event {event}, operation {operation}")]
    AmountMismatch { event: Uint128, operation: Uint128 },

    #[error("sender mismatch")]
    SenderMismatch,

    #[error("invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("recipient mismatch: event {event}, operation {operation}")]
    RecipientMismatch { event: String, operation: String },

    #[error("user data mismatch")]
    UserDataMismatch,
}

/// Deployment state the checks run against.
pub struct AuthContext {
    /// This chain's id; incoming events must target it
    pub local_chain_id: Vec<u8>,
    /// Compressed attestor key
    pub attestor_key: Option<Vec<u8>>,
}

/// Authenticates `operation` against `metadata` and returns its event id.
///
/// Read-only: recording the event id as consumed is up to the caller.
pub fn authenticate(
    deps: Deps,
    ctx: &AuthContext,
    operation: &Operation,
    metadata: &Metadata,
) -> Result<[u8; 32], PamError> {
    let preimage = metadata.preimage.as_slice();
    if preimage.len() < PAYLOAD_OFFSET {
        return Err(PamError::MalformedPreimage {
            len: preimage.len(),
        });
    }

    check_context(preimage, ORIGIN_CHAIN_OFFSET, &operation.origin_chain_id, "origin chain id")?;
    check_context(preimage, BLOCK_ID_OFFSET, &operation.block_id, "block id")?;
    check_context(preimage, TX_ID_OFFSET, &operation.tx_id, "tx id")?;

    let mapping = ORIGIN_MAPPINGS
        .may_load(deps.storage, operation.origin_chain_id.as_slice())?
        .ok_or_else(|| PamError::UnknownOrigin {
            chain_id: hex_encode_prefixed(&operation.origin_chain_id),
        })?;

    let event_id = sha256(preimage);

    let attestor_key = ctx
        .attestor_key
        .as_deref()
        .ok_or(PamError::AttestorKeyNotSet)?;
    let signer = recover_compressed_key(deps.api, &event_id, &metadata.signature)?;
    if signer != attestor_key {
        return Err(PamError::InvalidSignature);
    }

    if preimage.len() < EVENT_DATA_OFFSET {
        return Err(PamError::MalformedPreimage {
            len: preimage.len(),
        });
    }
    let emitter = &preimage[PAYLOAD_OFFSET..PAYLOAD_OFFSET + WORD];
    if is_all_zeros(emitter) || emitter != mapping.emitter.as_slice() {
        return Err(PamError::UnexpectedEmitter);
    }
    let topic_zero = &preimage[TOPIC_ZERO_OFFSET..TOPIC_ZERO_OFFSET + WORD];
    if is_all_zeros(topic_zero) || topic_zero != mapping.topic_zero.as_slice() {
        return Err(PamError::UnexpectedTopic);
    }

    let data = event_data(
        preimage[PROTOCOL_OFFSET],
        &preimage[EVENT_DATA_OFFSET..],
    )?;
    let event = SwapEvent::decode(&data)?;
    check_fields(deps.api, ctx, operation, &event)?;

    Ok(event_id)
}

fn check_context(
    preimage: &[u8],
    offset: usize,
    expected: &[u8],
    field: &str,
) -> Result<(), PamError> {
    if extract(preimage, offset, WORD)? != expected {
        return Err(PamError::UnexpectedContext {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn event_data(protocol: u8, raw: &[u8]) -> Result<Vec<u8>, PamError> {
    match protocol {
        PROTOCOL_EVM => Ok(raw.to_vec()),
        PROTOCOL_ACCOUNT => {
            let end = raw.len().saturating_sub(ACCOUNT_EVENT_SUFFIX);
            let inner = raw
                .get(ACCOUNT_EVENT_PREFIX..end)
                .ok_or(CodecError::OutOfBounds {
                    offset: ACCOUNT_EVENT_PREFIX,
                    len: ACCOUNT_EVENT_SUFFIX,
                    size: raw.len(),
                })?;
            let text = std::str::from_utf8(inner).map_err(|e| CodecError::InvalidHex {
                reason: e.to_string(),
            })?;
            Ok(hex_decode(text)?)
        }
        protocol => Err(PamError::UnsupportedProtocol { protocol }),
    }
}

fn check_fields(
    api: &dyn Api,
    ctx: &AuthContext,
    operation: &Operation,
    event: &SwapEvent,
) -> Result<(), PamError> {
    if event.nonce != operation.nonce {
        return Err(PamError::NonceMismatch {
            event: event.nonce,
            operation: operation.nonce,
        });
    }
    if event.token.as_slice() != operation.token.as_slice() {
        return Err(PamError::TokenMismatch);
    }
    if event.destination_chain_id.as_slice() != operation.destination_chain_id.as_slice()
        || event.destination_chain_id.as_slice() != ctx.local_chain_id.as_slice()
    {
        return Err(PamError::DestinationChainMismatch);
    }
    if event.amount != operation.amount {
        return Err(PamError::AmountMismatch {
            event: event.amount,
            operation: operation.amount,
        });
    }
    if event.sender.as_slice() != operation.sender.as_slice() {
        return Err(PamError::SenderMismatch);
    }

    let recipient =
        String::from_utf8(event.recipient.clone()).map_err(|e| PamError::InvalidRecipient {
            reason: e.to_string(),
        })?;
    api.addr_validate(&recipient)
        .map_err(|e| PamError::InvalidRecipient {
            reason: e.to_string(),
        })?;
    if recipient != operation.recipient {
        return Err(PamError::RecipientMismatch {
            event: recipient,
            operation: operation.recipient.clone(),
        });
    }

    if sha256(&event.data) != sha256(&operation.data) {
        return Err(PamError::UserDataMismatch);
    }

    Ok(())
}

/// Recovers the signer of `digest` as a compressed key. `signature` is
/// `r || s || v` with `v` in {0, 1, 27, 28}.
pub fn recover_compressed_key(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<Vec<u8>, PamError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(PamError::InvalidSignature);
    }
    let recovery_param = match signature[64] {
        v @ (0 | 1) => v,
        v @ (27 | 28) => v - 27,
        _ => return Err(PamError::InvalidSignature),
    };
    let uncompressed = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
        .map_err(|_| PamError::InvalidSignature)?;
    compress_public_key(&uncompressed).ok_or(PamError::InvalidSignature)
}

/// SEC1 compression. Accepts an already compressed (33 byte) or an
/// uncompressed (65 byte) key.
pub fn compress_public_key(key: &[u8]) -> Option<Vec<u8>> {
    match key {
        [0x02 | 0x03, ..] if key.len() == 33 => Some(key.to_vec()),
        [0x04, point @ ..] if point.len() == 64 => {
            let (x, y) = point.split_at(32);
            let mut compressed = Vec::with_capacity(33);
            compressed.push(0x02 | (y[31] & 1));
            compressed.extend_from_slice(x);
            Some(compressed)
        }
        _ => None,
    }
}
