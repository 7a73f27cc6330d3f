use crate::codec;
use crate::error::Result;
use crate::id::{message_id, MessageId};
use crate::utils::to_hex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VERSION_OFFSET: usize = 0;
pub const NONCE_OFFSET: usize = 1;
pub const ORIGIN_OFFSET: usize = 5;
pub const SENDER_OFFSET: usize = 9;
pub const DESTINATION_OFFSET: usize = 41;
pub const RECIPIENT_OFFSET: usize = 45;
pub const BODY_OFFSET: usize = 77;

pub const HEADER_LEN: usize = BODY_OFFSET;

/// A message with its addresses already in canonical form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub version: u8,
    pub nonce: u32,
    pub origin: u32,
    #[serde(with = "hex_32")]
    pub sender: [u8; 32],
    pub destination: u32,
    #[serde(with = "hex_32")]
    pub recipient: [u8; 32],
    #[serde(with = "hex_bytes")]
    pub body: Vec<u8>,
}

impl Message {
    pub fn to_vec(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.body.len());

        bytes.push(self.version);
        bytes.extend_from_slice(&self.nonce.to_be_bytes());
        bytes.extend_from_slice(&self.origin.to_be_bytes());
        bytes.extend_from_slice(&self.sender);
        bytes.extend_from_slice(&self.destination.to_be_bytes());
        bytes.extend_from_slice(&self.recipient);
        bytes.extend_from_slice(&self.body);

        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header = codec::header(bytes)?;

        Ok(Message {
            version: header[VERSION_OFFSET],
            nonce: codec::read_u32(header, NONCE_OFFSET),
            origin: codec::read_u32(header, ORIGIN_OFFSET),
            sender: codec::read_32(header, SENDER_OFFSET),
            destination: codec::read_u32(header, DESTINATION_OFFSET),
            recipient: codec::read_32(header, RECIPIENT_OFFSET),
            body: bytes[BODY_OFFSET..].to_vec(),
        })
    }

    pub fn id(&self) -> MessageId {
        message_id(&self.to_vec())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message {{ id: {}, version: {}, nonce: {}, origin: {}, sender: {}, destination: {}, recipient: {}, body: {} bytes }}",
            to_hex(self.id()),
            self.version,
            self.nonce,
            self.origin,
            to_hex(self.sender),
            self.destination,
            to_hex(self.recipient),
            self.body.len(),
        )
    }
}

pub(crate) mod hex_32 {
    use crate::utils::{decode_hex_32, to_hex};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let value = String::deserialize(deserializer)?;
        decode_hex_32(&value).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod hex_bytes {
    use crate::utils::{decode_hex, to_hex};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(bytes))
    }

    /// Accepts a hex string or a plain array of byte values.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum HexOrBytes {
            Hex(String),
            Bytes(Vec<u8>),
        }

        match HexOrBytes::deserialize(deserializer)? {
            HexOrBytes::Hex(value) => decode_hex(&value).map_err(serde::de::Error::custom),
            HexOrBytes::Bytes(bytes) => Ok(bytes),
        }
    }
}
