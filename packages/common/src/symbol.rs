use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdError, StdResult};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::wei::WEI_DECIMALS;

/// Ticker and decimal precision of a fungible token.
#[cw_serde]
pub struct TokenSymbol {
    pub ticker: String,
    pub precision: u8,
}

impl TokenSymbol {
    pub fn new(ticker: impl Into<String>, precision: u8) -> Self {
        Self {
            ticker: ticker.into(),
            precision,
        }
    }

    pub fn matches(&self, info: &TokenInfoResponse) -> bool {
        self.ticker == info.symbol && self.precision == info.decimals
    }
}

impl std::fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.precision, self.ticker)
    }
}

pub fn query_token_info(querier: &QuerierWrapper, token: &Addr) -> StdResult<TokenInfoResponse> {
    querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})
}

/// Checks that the ledger at `token` reports exactly `symbol`.
pub fn check_symbol_is_valid(
    querier: &QuerierWrapper,
    token: &Addr,
    symbol: &TokenSymbol,
) -> StdResult<()> {
    if symbol.precision > WEI_DECIMALS {
        return Err(StdError::generic_err(format!(
            "precision {} exceeds {} decimals",
            symbol.precision, WEI_DECIMALS
        )));
    }
    let info = query_token_info(querier, token)?;
    if !symbol.matches(&info) {
        return Err(StdError::generic_err(format!(
            "symbol {} does not match token {} ({},{})",
            symbol, token, info.decimals, info.symbol
        )));
    }
    Ok(())
}
