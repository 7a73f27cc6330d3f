use crate::error::{MessageError, Result};
use sha3::{Digest, Keccak256};

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Lowercase hex with a `0x` prefix.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parses hex with or without a `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| MessageError::InvalidHex(format!("{}: {}", value, e)))
}

pub fn decode_hex_32(value: &str) -> Result<[u8; 32]> {
    let bytes = decode_hex(value)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| MessageError::InvalidHex(format!("expected 32 bytes, got {}", len)))
}
