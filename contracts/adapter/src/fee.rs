//! Bridge fee on outbound transfers.
//!
//! The fee is proportional with a floor:
//!
//! ```text
//! fee = max(min_fee, amount * FEE_BASIS_POINTS / FEE_BASIS_POINTS_DIVISOR)
//! ```
//!
//! `FEE_BASIS_POINTS / FEE_BASIS_POINTS_DIVISOR` is 0.175%. Amounts and the
//! floor are in the wrapped token's base units.

use cosmwasm_std::Uint128;

pub const FEE_BASIS_POINTS: u128 = 1_750;

pub const FEE_BASIS_POINTS_DIVISOR: u128 = 1_000_000;

/// Proportional part of the fee, rounded down.
pub fn calculate_fee_from_bps(amount: Uint128) -> Uint128 {
    amount.multiply_ratio(FEE_BASIS_POINTS, FEE_BASIS_POINTS_DIVISOR)
}

pub fn calculate_fee(amount: Uint128, min_fee: Uint128) -> Uint128 {
    calculate_fee_from_bps(amount).max(min_fee)
}
