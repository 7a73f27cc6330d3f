// version(1) | nonce(4) | origin(4) | sender(32) | destination(4) | recipient(32) | body

use crate::address::{from_canonical, to_canonical, Address, EvmAddress};
use crate::config::MessageConfig;
use crate::error::{MessageError, Result};
use crate::types::*;

pub fn encode(
    version: u8,
    nonce: u32,
    origin: u32,
    sender: &Address,
    destination: u32,
    recipient: &Address,
    body: &[u8],
) -> Vec<u8> {
    Message {
        version,
        nonce,
        origin,
        sender: to_canonical(sender),
        destination,
        recipient: to_canonical(recipient),
        body: body.to_vec(),
    }
    .to_vec()
}

/// Encodes with a deployment's injected version byte and payload limit.
#[derive(Debug, Clone)]
pub struct MessageEncoder {
    version: u8,
    max_body_len: Option<usize>,
}

impl MessageEncoder {
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            version: config.version,
            max_body_len: config.max_body_len,
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn encode(
        &self,
        nonce: u32,
        origin: u32,
        sender: &Address,
        destination: u32,
        recipient: &Address,
        body: &[u8],
    ) -> Result<Vec<u8>> {
        if let Some(max) = self.max_body_len {
            if body.len() > max {
                return Err(MessageError::PayloadTooLarge { len: body.len(), max });
            }
        }

        Ok(encode(self.version, nonce, origin, sender, destination, recipient, body))
    }
}

pub(crate) fn header(message: &[u8]) -> Result<&[u8; HEADER_LEN]> {
    message
        .get(..HEADER_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or(MessageError::InvalidMessageLength { len: message.len() })
}

pub(crate) fn read_u32(header: &[u8; HEADER_LEN], offset: usize) -> u32 {
    u32::from_be_bytes([
        header[offset], header[offset + 1], header[offset + 2], header[offset + 3]
    ])
}

pub(crate) fn read_32(header: &[u8; HEADER_LEN], offset: usize) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&header[offset..offset + 32]);
    bytes
}

pub fn version(message: &[u8]) -> Result<u8> {
    Ok(header(message)?[VERSION_OFFSET])
}

pub fn nonce(message: &[u8]) -> Result<u32> {
    Ok(read_u32(header(message)?, NONCE_OFFSET))
}

pub fn origin(message: &[u8]) -> Result<u32> {
    Ok(read_u32(header(message)?, ORIGIN_OFFSET))
}

pub fn sender(message: &[u8]) -> Result<[u8; 32]> {
    Ok(read_32(header(message)?, SENDER_OFFSET))
}

pub fn destination(message: &[u8]) -> Result<u32> {
    Ok(read_u32(header(message)?, DESTINATION_OFFSET))
}

pub fn recipient(message: &[u8]) -> Result<[u8; 32]> {
    Ok(read_32(header(message)?, RECIPIENT_OFFSET))
}

pub fn recipient_address(message: &[u8]) -> Result<EvmAddress> {
    recipient_native(message)
}

pub fn recipient_native<const N: usize>(message: &[u8]) -> Result<[u8; N]> {
    from_canonical(&recipient(message)?)
}

pub fn body(message: &[u8]) -> Result<&[u8]> {
    header(message)?;
    Ok(&message[BODY_OFFSET..])
}
