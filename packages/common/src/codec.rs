//! Fixed-width byte codec shared by the adapter contracts.
//!
//! Every numeric or short identifier field that crosses chains is carried as a
//! 32-byte big-endian word, right-aligned with zero padding on the left:
//!
//! ```text
//! u64 7        -> 00 .. 00 00 00 00 00 00 00 07   (bytes 24-31 used)
//! u128 7       -> 00 .. 00 .. 00 00 00 07         (bytes 16-31 used)
//! ascii "abc"  -> 00 .. 00 61 62 63               (bytes 29-31 used)
//! ```

use thiserror::Error;

/// Width of one encoded word.
pub const WORD: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Value does not fit in {target} bits")]
    Overflow { target: u32 },

    #[error("Identifier is {got} bytes, at most 32 allowed")]
    TooLong { got: usize },

    #[error("Expected a 32-byte word, got {got} bytes")]
    InvalidWordLength { got: usize },

    #[error("Read of {len} bytes at offset {offset} is out of bounds (buffer is {size} bytes)")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },

    #[error("Invalid hex string: {reason}")]
    InvalidHex { reason: String },

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Precision {precision} exceeds 18 decimals")]
    InvalidPrecision { precision: u8 },
}

pub fn encode_u64_be32(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

pub fn encode_u128_be32(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Right-aligns the raw bytes of `value` in a 32-byte word.
pub fn encode_ascii_be32(value: &str) -> Result<[u8; 32], CodecError> {
    right_align_be32(value.as_bytes())
}

/// Right-aligns up to 32 bytes in a word, zero-padded on the left.
pub fn right_align_be32(bytes: &[u8]) -> Result<[u8; 32], CodecError> {
    if bytes.len() > WORD {
        return Err(CodecError::TooLong { got: bytes.len() });
    }
    let mut word = [0u8; 32];
    word[WORD - bytes.len()..].copy_from_slice(bytes);
    Ok(word)
}

/// Decodes a 32-byte word into a u64, rejecting values with non-zero high bytes.
pub fn decode_u64(word: &[u8]) -> Result<u64, CodecError> {
    let word = as_word(word)?;
    if word[..24].iter().any(|b| *b != 0) {
        return Err(CodecError::Overflow { target: 64 });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(buf))
}

/// Decodes a 32-byte word into a u128, rejecting values with non-zero high bytes.
pub fn decode_u128(word: &[u8]) -> Result<u128, CodecError> {
    let word = as_word(word)?;
    if word[..16].iter().any(|b| *b != 0) {
        return Err(CodecError::Overflow { target: 128 });
    }
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(buf))
}

fn as_word(bytes: &[u8]) -> Result<&[u8], CodecError> {
    if bytes.len() != WORD {
        return Err(CodecError::InvalidWordLength { got: bytes.len() });
    }
    Ok(bytes)
}

/// Concatenates `parts` in order. `size` is only a capacity hint.
pub fn concat(size: usize, parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Returns the `len` bytes starting at `offset`, or `OutOfBounds`.
pub fn extract(data: &[u8], offset: usize, len: usize) -> Result<&[u8], CodecError> {
    let end = offset.checked_add(len).ok_or(CodecError::OutOfBounds {
        offset,
        len,
        size: data.len(),
    })?;
    data.get(offset..end).ok_or(CodecError::OutOfBounds {
        offset,
        len,
        size: data.len(),
    })
}

pub fn extract_bytes32(data: &[u8], offset: usize) -> Result<[u8; 32], CodecError> {
    let slice = extract(data, offset, WORD)?;
    let mut word = [0u8; 32];
    word.copy_from_slice(slice);
    Ok(word)
}

pub fn to_bytes32(bytes: &[u8]) -> Result<[u8; 32], CodecError> {
    let word = as_word(bytes)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(word);
    Ok(out)
}

pub fn is_all_zeros(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

pub fn is_hex_prefixed(value: &str) -> bool {
    value.starts_with("0x") || value.starts_with("0X")
}

/// Strict hex decoding. An optional `0x` prefix is accepted; odd lengths and
/// non-hex characters are rejected.
pub fn hex_decode(value: &str) -> Result<Vec<u8>, CodecError> {
    let digits = if is_hex_prefixed(value) {
        &value[2..]
    } else {
        value
    };
    hex::decode(digits).map_err(|e| CodecError::InvalidHex {
        reason: e.to_string(),
    })
}

/// Lower-case hex with a `0x` prefix, used for attributes.
pub fn hex_encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
