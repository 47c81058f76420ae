//! Transfer memo attached to outbound deposits.
//!
//! Format: `sender,0x<64 hex destination chain id>,recipient,user_data_id`.
//! Empty segments are ignored when splitting; `user_data_id` 0 means no data.

use crate::error::ContractError;
use common::codec::{hex_decode, is_hex_prefixed, to_bytes32};

#[derive(Debug, Clone, PartialEq)]
pub struct Memo {
    pub sender: String,
    pub destination_chain_id: [u8; 32],
    pub recipient: String,
    pub user_data_id: u64,
}

fn invalid(reason: &str) -> ContractError {
    ContractError::InvalidMemo {
        reason: reason.to_string(),
    }
}

pub fn parse_memo(memo: &str) -> Result<Memo, ContractError> {
    let parts: Vec<&str> = memo.split(',').filter(|p| !p.is_empty()).collect();
    let [sender, chain_id, recipient, user_data_id] = parts.as_slice() else {
        return Err(invalid("expected sender,chain_id,recipient,user_data_id"));
    };

    if !is_hex_prefixed(chain_id) || chain_id.len() != 66 {
        return Err(ContractError::InvalidChainId {
            chain_id: chain_id.to_string(),
        });
    }
    let destination_chain_id = hex_decode(chain_id)
        .and_then(|bytes| to_bytes32(&bytes))
        .map_err(|_| ContractError::InvalidChainId {
            chain_id: chain_id.to_string(),
        })?;

    let user_data_id = user_data_id
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid("user data id must be an unsigned integer"))?;

    Ok(Memo {
        sender: sender.trim().to_string(),
        destination_chain_id,
        recipient: recipient.trim().to_string(),
        user_data_id,
    })
}
