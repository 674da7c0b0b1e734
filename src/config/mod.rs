#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::{ConfigProvider, DEFAULT_STORAGE_KEY};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_api_endpoint, validate_request_timeout, validate_storage_key, validate_storage_path,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.rocket-cart";

/// Resolved settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSettings {
    pub api_endpoint: String,
    pub storage_path: String,
    pub storage_key: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl ConfigProvider for CartSettings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CartSettings {
    fn validate(&self) -> Result<()> {
        validate_api_endpoint(&self.api_endpoint)?;
        validate_storage_path(&self.storage_path)?;
        validate_storage_key(&self.storage_key)?;
        validate_request_timeout(self.request_timeout_seconds)
    }
}
