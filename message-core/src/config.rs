use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Protocol version used by current mailbox deployments.
pub const DEFAULT_VERSION: u8 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageConfig {
    #[serde(default = "default_version")]
    pub version: u8,
    #[serde(default)]
    pub max_body_len: Option<usize>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct ConfigFile {
    message: MessageConfig,
}

fn default_version() -> u8 {
    DEFAULT_VERSION
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MessageConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;

        tracing::debug!(
            path,
            version = config.message.version,
            max_body_len = ?config.message.max_body_len,
            "loaded message config"
        );

        Ok(config.message)
    }

    pub fn default_test_config() -> Self {
        Self {
            version: DEFAULT_VERSION,
            max_body_len: None,
            log_level: "info".to_string(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self::default_test_config()
    }
}
