use crate::utils::keccak256;

pub type MessageId = [u8; 32];

/// Keccak-256 over the whole encoded message, header and body.
pub fn message_id(encoded: &[u8]) -> MessageId {
    keccak256(encoded)
}
