use crate::address::Address;
use crate::codec::encode;
use crate::id::{message_id, MessageId};
use crate::types::{hex_32, hex_bytes};
use crate::utils::to_hex;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    pub origin: u32,
    #[serde(with = "hex_32")]
    pub sender: [u8; 32],
    pub destination: u32,
    #[serde(with = "hex_32")]
    pub recipient: [u8; 32],
    pub nonce: u32,
    #[serde(with = "hex_bytes")]
    pub body: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    #[serde(with = "hex_32")]
    pub id: MessageId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorMismatch {
    pub index: usize,
    pub expected: MessageId,
    pub actual: MessageId,
}

#[derive(Debug, Default)]
pub struct VectorReport {
    pub passed: usize,
    pub mismatches: Vec<VectorMismatch>,
}

impl VectorReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl TestVector {
    pub fn encode(&self, default_version: u8) -> Vec<u8> {
        encode(
            self.version.unwrap_or(default_version),
            self.nonce,
            self.origin,
            &Address::Canonical(self.sender),
            self.destination,
            &Address::Canonical(self.recipient),
            &self.body,
        )
    }
}

pub fn verify_vector(index: usize, vector: &TestVector, default_version: u8) -> Result<(), VectorMismatch> {
    let actual = message_id(&vector.encode(default_version));
    if actual == vector.id {
        Ok(())
    } else {
        Err(VectorMismatch {
            index,
            expected: vector.id,
            actual,
        })
    }
}

pub fn verify_vectors(vectors: &[TestVector], default_version: u8) -> VectorReport {
    let mut report = VectorReport::default();

    for (index, vector) in vectors.iter().enumerate() {
        match verify_vector(index, vector, default_version) {
            Ok(()) => report.passed += 1,
            Err(mismatch) => {
                tracing::warn!(
                    index,
                    expected = %to_hex(mismatch.expected),
                    actual = %to_hex(mismatch.actual),
                    "conformance vector mismatch"
                );
                report.mismatches.push(mismatch);
            }
        }
    }

    tracing::debug!(passed = report.passed, failed = report.mismatches.len(), "verified vectors");
    report
}

pub fn load_vectors(path: &str) -> Result<Vec<TestVector>> {
    let content = fs::read_to_string(path)?;
    let vectors: Vec<TestVector> = serde_json::from_str(&content)
        .map_err(|e| anyhow!("Invalid vector file {}: {}", path, e))?;
    Ok(vectors)
}

pub fn write_vectors(path: &str, vectors: &[TestVector]) -> Result<()> {
    let json = serde_json::to_string_pretty(vectors)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

const DOMAIN_PAIRS: [(u32, u32); 3] = [(1000, 2000), (2000, 1000), (0, u32::MAX)];
const NONCES: [u32; 3] = [0, 11, u32::MAX];

fn standard_bodies() -> [Vec<u8>; 3] {
    let mut padded = b"message".to_vec();
    padded.resize(32, 0);
    [Vec::new(), padded, (1..=16).collect()]
}

/// The standard vector set: every domain pair crossed with every nonce.
/// The last domain pair uses full-width 32-byte addresses.
pub fn generate_vectors(version: u8) -> Vec<TestVector> {
    let bodies = standard_bodies();
    let mut vectors = Vec::new();

    for (pair_index, (origin, destination)) in DOMAIN_PAIRS.iter().enumerate() {
        let (sender, recipient) = if pair_index == DOMAIN_PAIRS.len() - 1 {
            (Address::Canonical([0xab; 32]), Address::Canonical([0xcd; 32]))
        } else {
            (Address::from([0x11; 20]), Address::from([0x22; 20]))
        };

        for (nonce_index, nonce) in NONCES.iter().enumerate() {
            let body = bodies[(pair_index + nonce_index) % bodies.len()].clone();
            let encoded = encode(version, *nonce, *origin, &sender, *destination, &recipient, &body);

            vectors.push(TestVector {
                origin: *origin,
                sender: sender.to_canonical(),
                destination: *destination,
                recipient: recipient.to_canonical(),
                nonce: *nonce,
                body,
                version: Some(version),
                id: message_id(&encoded),
            });
        }
    }

    vectors
}
