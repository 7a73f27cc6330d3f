#![allow(dead_code)]

use message_core::address::EvmAddress;

pub const TEST_VERSION: u8 = 3;
pub const REMOTE_DOMAIN: u32 = 1000;
pub const LOCAL_DOMAIN: u32 = 2000;
pub const TEST_NONCE: u32 = 11;

pub const VECTORS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/message.json");

/// Encoding of the scenario message with the sender/recipient below and the
/// padded "message" body.
pub const SCENARIO_MESSAGE_HEX: &str = "030000000b000003e8000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266000007d000000000000000000000000070997970c51812dc3a010c7d01b50e0d17dc79c86d65737361676500000000000000000000000000000000000000000000000000";
pub const SCENARIO_ID_HEX: &str = "180dca6012baaaa3ba972ee2dfcaa2229183bee6038bff29a000777054ef90f4";
pub const SCENARIO_EMPTY_BODY_ID_HEX: &str = "93ca94bd724978a7d21708392de60ca15dc036ef2bfc0463b4e66fef572aaec6";

pub fn test_sender() -> EvmAddress {
    hex_20("f39fd6e51aad88f6f4ce6ab8827279cfffb92266")
}

pub fn test_recipient() -> EvmAddress {
    hex_20("70997970c51812dc3a010c7d01b50e0d17dc79c8")
}

/// "message" right-padded with zeros to 32 bytes.
pub fn bytes32_body(text: &str) -> Vec<u8> {
    let mut body = text.as_bytes().to_vec();
    body.resize(32, 0);
    body
}

pub fn hex_20(value: &str) -> EvmAddress {
    hex::decode(value).unwrap().try_into().unwrap()
}

pub fn hex_32(value: &str) -> [u8; 32] {
    hex::decode(value).unwrap().try_into().unwrap()
}
