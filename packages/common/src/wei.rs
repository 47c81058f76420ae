//! Conversion between token base units and the 18-decimal wire amount.

use cosmwasm_std::Uint128;

use crate::codec::CodecError;

/// Decimals of the amount carried in cross-chain events.
pub const WEI_DECIMALS: u8 = 18;

fn scale(precision: u8) -> Result<Uint128, CodecError> {
    if precision > WEI_DECIMALS {
        return Err(CodecError::InvalidPrecision { precision });
    }
    Ok(Uint128::new(10u128.pow(u32::from(WEI_DECIMALS - precision))))
}

/// `amount * 10^(18 - precision)`.
pub fn to_wei(amount: Uint128, precision: u8) -> Result<Uint128, CodecError> {
    amount
        .checked_mul(scale(precision)?)
        .map_err(|_| CodecError::Overflow { target: 128 })
}

/// `amount / 10^(18 - precision)`, rounding down.
pub fn from_wei(amount: Uint128, precision: u8) -> Result<Uint128, CodecError> {
    Ok(amount.checked_div(scale(precision)?).unwrap_or_default())
}
