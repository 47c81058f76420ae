//! Lockbox - custody of a local token against its xERC20 form.
//!
//! Sending the local token here mints the same amount of the wrapped token;
//! sending the wrapped token here burns it and releases the local token.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
