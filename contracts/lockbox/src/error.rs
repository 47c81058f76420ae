use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Token already registered: {token}")]
    AlreadyRegistered { token: String },

    #[error("Precision mismatch: local token has {local} decimals, wrapped token has {wrapped}")]
    PrecisionMismatch { local: u8, wrapped: u8 },

    #[error("Amount must be greater than zero")]
    InvalidAmount,
}
