//! Common - Shared Types and Utilities for the xERC20 Adapter Contracts
//!
//! This package provides the fixed-width byte codec used on the wire, amount
//! normalization to 18 decimals, token symbols and the hook messages the
//! adapter, lockbox and xERC20 contracts exchange.

pub mod codec;
pub mod msg;
pub mod symbol;
pub mod wei;

pub use codec::CodecError;
pub use msg::{AdapterHookMsg, LockboxHookMsg, LockboxResponse, Xerc20ExecuteMsg, Xerc20QueryMsg};
pub use symbol::TokenSymbol;
pub use wei::{from_wei, to_wei};
