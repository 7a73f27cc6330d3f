use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Invalid message length: {len} bytes is shorter than the 77-byte header")]
    InvalidMessageLength { len: usize },

    #[error("Invalid address padding: non-zero bytes above the native address width")]
    InvalidAddressPadding,

    #[error("Invalid address length: {len} bytes does not fit in 32")]
    InvalidAddressLength { len: usize },

    #[error("Payload too large: {len} bytes exceeds limit of {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, MessageError>;
