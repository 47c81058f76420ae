//! xERC20 - Wrapped Cross-Chain Token
//!
//! A cw20 token whose supply is controlled by two kinds of minters:
//!
//! # Lockbox
//! The configured lockbox mints and burns without limits, 1:1 against the
//! local token it holds in custody.
//!
//! # Bridges
//! Each registered bridge has an independent minting and burning budget that
//! refills linearly over 24 hours (see [`rate_limit`]).
//!
//! A freezing account can freeze holders; frozen balances can only be moved
//! by the freezing account through `PullFrozen`.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod rate_limit;
pub mod state;

pub use crate::error::ContractError;
pub use crate::rate_limit::{RateLimit, DURATION};
