pub mod fixtures;
pub mod message_builder;

pub use fixtures::*;
pub use message_builder::*;
