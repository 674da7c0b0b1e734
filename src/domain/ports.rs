use crate::domain::model::{Product, ProductId, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value persistence, shaped after browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// `Ok(None)` when the catalogue has no such product.
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>>;
}

#[async_trait]
pub trait StockLookup: Send + Sync {
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock>;
}

pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
