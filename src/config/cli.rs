use crate::config::{CartSettings, TomlConfig};
use crate::domain::ProductId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart backed by a catalogue API and local storage")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL of the products/stock API")]
    pub api_endpoint: Option<String>,

    #[arg(long, global = true, help = "Directory holding the persisted cart")]
    pub storage_path: Option<String>,

    #[arg(long, global = true, help = "Key the cart is stored under")]
    pub storage_key: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds (none by default)")]
    pub request_timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl CliConfig {
    /// Loads the settings file when one is given, then applies the flags.
    pub fn resolve(&self) -> Result<(CartSettings, Option<TomlConfig>)> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        let base = file
            .clone()
            .map(TomlConfig::into_settings)
            .unwrap_or_default();
        Ok((self.apply_to(base), file))
    }

    pub fn apply_to(&self, mut settings: CartSettings) -> CartSettings {
        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(path) = &self.storage_path {
            settings.storage_path = path.clone();
        }
        if let Some(key) = &self.storage_key {
            settings.storage_key = key.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout_seconds = Some(timeout);
        }
        settings
    }
}
