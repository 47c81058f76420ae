//! Error types for the xERC20 contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the freezing account can perform this action")]
    UnauthorizedFreezer,

    #[error("Unauthorized: {caller} is neither the lockbox nor a registered bridge")]
    NotBridge { caller: String },

    // ========================================================================
    // Rate Limit Errors
    // ========================================================================

    #[error("Rate limit exceeded: {direction} limit {available} available, {requested} requested")]
    LimitExceeded {
        direction: String,
        available: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Supply Errors
    // ========================================================================

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Minting cannot exceed the cap")]
    CannotExceedCap,

    // ========================================================================
    // Freezing Errors
    // ========================================================================

    #[error("Account is frozen: {account}")]
    Frozen { account: String },

    #[error("Account is not frozen: {account}")]
    NotFrozen { account: String },

    #[error("Freezing account is not set")]
    FreezingAccountNotSet,
}
