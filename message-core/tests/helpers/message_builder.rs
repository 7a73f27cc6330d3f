#![allow(dead_code)]

use super::fixtures::*;
use message_core::address::Address;
use message_core::codec::encode;
use message_core::types::Message;

pub struct MessageBuilder {
    version: u8,
    nonce: u32,
    origin: u32,
    sender: Address,
    destination: u32,
    recipient: Address,
    body: Vec<u8>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            version: TEST_VERSION,
            nonce: TEST_NONCE,
            origin: REMOTE_DOMAIN,
            sender: Address::from(test_sender()),
            destination: LOCAL_DOMAIN,
            recipient: Address::from(test_recipient()),
            body: bytes32_body("message"),
        }
    }

    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn with_nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_domains(mut self, origin: u32, destination: u32) -> Self {
        self.origin = origin;
        self.destination = destination;
        self
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = sender;
        self
    }

    pub fn with_recipient(mut self, recipient: Address) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn with_body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        encode(
            self.version,
            self.nonce,
            self.origin,
            &self.sender,
            self.destination,
            &self.recipient,
            &self.body,
        )
    }

    pub fn build(&self) -> Message {
        Message {
            version: self.version,
            nonce: self.nonce,
            origin: self.origin,
            sender: self.sender.to_canonical(),
            destination: self.destination,
            recipient: self.recipient.to_canonical(),
            body: self.body.clone(),
        }
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
