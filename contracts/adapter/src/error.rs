//! Error types for the adapter contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use common::CodecError;

use crate::pam::PamError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    /// Proof authentication failed. The inner error names the failed gate.
    #[error("Unauthorized: {0}")]
    Pam(#[from] PamError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller {expected} did not sign this message (sender {got})")]
    UnauthorizedCaller { expected: String, got: String },

    #[error("Unauthorized: swap events can only be emitted by the adapter itself")]
    NotSelf,

    #[error("Unauthorized: only the lockbox can release tokens (sender {sender})")]
    UnauthorizedRelease { sender: String },

    #[error("Unauthorized: lockbox swap without a matching deposit")]
    UnexpectedLockboxSwap,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Registry already created")]
    AlreadyCreated,

    #[error("Registry not created")]
    NotCreated,

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Unknown canonical token id")]
    UnknownToken,

    #[error("Precision mismatch: local token has {local} decimals, wrapped token has {wrapped}")]
    PrecisionMismatch { local: u8, wrapped: u8 },

    #[error("Invalid {field}: expected 32 bytes, got {got}")]
    InvalidBytes32 { field: String, got: usize },

    #[error("Lockbox not set on the wrapped token")]
    LockboxNotSet,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Invalid memo: {reason}")]
    InvalidMemo { reason: String },

    #[error("Invalid destination chain id: {chain_id}")]
    InvalidChainId { chain_id: String },

    #[error("Memo sender {memo} does not match token sender {sender}")]
    MemoSenderMismatch { memo: String, sender: String },

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient amount: {amount} does not cover fee {fee}")]
    InsufficientAmount { amount: Uint128, fee: Uint128 },

    #[error("Fee manager not set")]
    FeeManagerNotSet,

    #[error("Invalid hook: {reason}")]
    InvalidHook { reason: String },

    // ========================================================================
    // User Data Errors
    // ========================================================================

    #[error("User data record not found: owner {owner}, id {id}")]
    UserDataNotFound { owner: String, id: u64 },

    #[error("User data payload is empty")]
    EmptyUserData,

    // ========================================================================
    // Attestation Config Errors
    // ========================================================================

    #[error("Invalid public key: expected a 33 or 65 byte secp256k1 key, got {len} bytes")]
    InvalidPublicKey { len: usize },

    #[error("Invalid origin mapping: emitter and topic must be non-zero")]
    InvalidOrigin,

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Event already processed: {event_id}")]
    AlreadyProcessed { event_id: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
