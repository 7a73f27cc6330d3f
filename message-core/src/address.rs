use crate::error::{MessageError, Result};
use crate::utils::decode_hex;
use serde::{Deserialize, Serialize};

pub const CANONICAL_ADDRESS_LEN: usize = 32;
pub const EVM_ADDRESS_LEN: usize = 20;

pub type EvmAddress = [u8; EVM_ADDRESS_LEN];

/// Chain-native address bytes, between 1 and 32 of them. Only constructed through
/// [`Address::native`] so the width bound always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeAddress(Vec<u8>);

impl NativeAddress {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    Native(NativeAddress),
    Canonical([u8; 32]),
}

impl Address {
    pub fn native(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() || bytes.len() > CANONICAL_ADDRESS_LEN {
            return Err(MessageError::InvalidAddressLength { len: bytes.len() });
        }
        Ok(Address::Native(NativeAddress(bytes)))
    }

    /// 32 decoded bytes are taken as already canonical, anything shorter as native.
    pub fn from_hex(value: &str) -> Result<Self> {
        let bytes = decode_hex(value)?;
        match bytes.len() {
            CANONICAL_ADDRESS_LEN => {
                let mut canonical = [0u8; 32];
                canonical.copy_from_slice(&bytes);
                Ok(Address::Canonical(canonical))
            }
            _ => Address::native(bytes),
        }
    }

    pub fn to_canonical(&self) -> [u8; 32] {
        to_canonical(self)
    }
}

impl From<EvmAddress> for Address {
    fn from(address: EvmAddress) -> Self {
        Address::Native(NativeAddress(address.to_vec()))
    }
}

impl From<[u8; 32]> for Address {
    fn from(canonical: [u8; 32]) -> Self {
        Address::Canonical(canonical)
    }
}

pub fn to_canonical(address: &Address) -> [u8; 32] {
    match address {
        Address::Canonical(bytes) => *bytes,
        Address::Native(native) => {
            let mut result = [0u8; 32];
            result[CANONICAL_ADDRESS_LEN - native.width()..].copy_from_slice(native.as_bytes());
            result
        }
    }
}

pub fn from_canonical<const N: usize>(canonical: &[u8; 32]) -> Result<[u8; N]> {
    let bytes = narrow(canonical, N)?;
    let mut result = [0u8; N];
    result.copy_from_slice(bytes);
    Ok(result)
}

fn narrow(canonical: &[u8; 32], width: usize) -> Result<&[u8]> {
    if width > CANONICAL_ADDRESS_LEN {
        return Err(MessageError::InvalidAddressLength { len: width });
    }
    let (padding, native) = canonical.split_at(CANONICAL_ADDRESS_LEN - width);
    if padding.iter().any(|&b| b != 0) {
        return Err(MessageError::InvalidAddressPadding);
    }
    Ok(native)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Evm,
    Svm,
}

impl ChainType {
    pub fn native_address_len(self) -> usize {
        match self {
            ChainType::Evm => EVM_ADDRESS_LEN,
            ChainType::Svm => CANONICAL_ADDRESS_LEN,
        }
    }
}

pub fn native_from_canonical(chain_type: ChainType, canonical: &[u8; 32]) -> Result<Vec<u8>> {
    narrow(canonical, chain_type.native_address_len()).map(<[u8]>::to_vec)
}
