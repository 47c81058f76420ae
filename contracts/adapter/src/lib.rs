//! xERC20 Adapter - Cross-Chain Entry Point for One Token
//!
//! # Outbound
//! Users send the local token (wrapped through the lockbox on the way) or the
//! wrapped token with a `Swap { memo }` hook. The adapter takes its fee,
//! burns the rest and emits a `swap` event carrying the encoded transfer,
//! numbered by a monotonically increasing nonce.
//!
//! # Inbound
//! Relayers call `Settle` with the claimed operation and an attested proof.
//! The Proof Authentication Module ([`pam`]) checks the proof; each event id
//! settles at most once.

pub mod contract;
pub mod error;
pub mod event;
mod execute;
pub mod fee;
pub mod hash;
pub mod memo;
pub mod msg;
pub mod pam;
mod query;
pub mod state;

pub use crate::error::ContractError;
