use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use cw20::Cw20ReceiveMsg;

use crate::state::LockboxPair;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a local token and its wrapped form. Owner only.
    Create {
        local_token: String,
        wrapped_token: String,
    },
    /// Hook: `common::LockboxHookMsg`, or empty for defaults.
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},

    #[returns(LockboxPair)]
    Pair { token: String },

    #[returns(LockboxPair)]
    PairByWrapped { wrapped_token: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}
