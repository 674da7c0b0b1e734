pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{
    ApiClient, ConsoleNotifier, FileStore, MemoryStore, RecordingNotifier, TracingNotifier,
};
pub use crate::config::{CartSettings, TomlConfig};
pub use crate::core::{Cart, CartActor, CartContainer, CartHandle, DEFAULT_STORAGE_KEY};
pub use crate::domain::{CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::utils::error::{CartError, Result};
