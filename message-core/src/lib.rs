pub mod address;
pub mod batch;
pub mod codec;
pub mod config;
pub mod error;
pub mod id;
pub mod types;
pub mod utils;
pub mod vectors;

pub use address::*;
pub use codec::MessageEncoder;
pub use config::*;
pub use error::MessageError;
pub use id::*;
pub use types::*;
