//! Wire format of the swap event.
//!
//! # Byte Layout
//! - Bytes 0-31:    nonce (u64, right-aligned)
//! - Bytes 32-63:   canonical token id
//! - Bytes 64-95:   destination chain id
//! - Bytes 96-127:  amount (u128, 18 decimals, right-aligned)
//! - Bytes 128-159: sender id
//! - Bytes 160-191: recipient length (right-aligned)
//! - Bytes 192-..:  recipient bytes, then user data up to the end

use cosmwasm_std::Uint128;

use bech32::{FromBase32, Variant};
use common::codec::{
    concat, decode_u128, decode_u64, encode_ascii_be32, encode_u128_be32, encode_u64_be32,
    extract, extract_bytes32, hex_decode, is_hex_prefixed, right_align_be32, CodecError, WORD,
};

const HEADER_LEN: usize = 6 * WORD;

#[derive(Debug, Clone, PartialEq)]
pub struct SwapEvent {
    pub nonce: u64,
    pub token: [u8; 32],
    pub destination_chain_id: [u8; 32],
    pub amount: Uint128,
    pub sender: [u8; 32],
    pub recipient: Vec<u8>,
    pub data: Vec<u8>,
}

impl SwapEvent {
    pub fn encode(&self) -> Vec<u8> {
        concat(
            HEADER_LEN + self.recipient.len() + self.data.len(),
            &[
                &encode_u64_be32(self.nonce)[..],
                &self.token[..],
                &self.destination_chain_id[..],
                &encode_u128_be32(self.amount.u128())[..],
                &self.sender[..],
                &encode_u64_be32(self.recipient.len() as u64)[..],
                &self.recipient[..],
                &self.data[..],
            ],
        )
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let nonce = decode_u64(extract(bytes, 0, WORD)?)?;
        let token = extract_bytes32(bytes, WORD)?;
        let destination_chain_id = extract_bytes32(bytes, 2 * WORD)?;
        let amount = decode_u128(extract(bytes, 3 * WORD, WORD)?)?;
        let sender = extract_bytes32(bytes, 4 * WORD)?;

        let recipient_len = decode_u128(extract(bytes, 5 * WORD, WORD)?)?;
        let recipient_len = usize::try_from(recipient_len)
            .map_err(|_| CodecError::Overflow { target: usize::BITS })?;
        let recipient = extract(bytes, HEADER_LEN, recipient_len)?.to_vec();
        let data = bytes[HEADER_LEN + recipient_len..].to_vec();

        Ok(Self {
            nonce,
            token,
            destination_chain_id,
            amount: Uint128::new(amount),
            sender,
            recipient,
            data,
        })
    }
}

/// 32-byte id of an account, right-aligned in the word so the address can be
/// rebuilt on the other side:
/// - bech32 (`terra1...`): the decoded 20 or 32 raw bytes
/// - `0x` hex: the decoded bytes
/// - anything else: its ASCII bytes, at most 32
pub fn sender_id(address: &str) -> Result<[u8; 32], CodecError> {
    if let Ok((_, data, Variant::Bech32)) = bech32::decode(address) {
        let raw = Vec::<u8>::from_base32(&data).map_err(|e| CodecError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })?;
        return right_align_be32(&raw);
    }
    if is_hex_prefixed(address) {
        return right_align_be32(&hex_decode(address)?);
    }
    encode_ascii_be32(address)
}
