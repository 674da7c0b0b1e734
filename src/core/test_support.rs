use crate::domain::{KeyValueStore, Product, ProductId, ProductLookup, Stock, StockLookup};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn product(id: ProductId) -> Product {
    Product {
        id,
        title: format!("Tênis {}", id),
        price: 139.9,
        image: String::new(),
        ..Product::default()
    }
}

/// In-memory catalogue serving both lookups.
#[derive(Clone, Default)]
pub struct StubCatalog {
    products: Arc<Mutex<HashMap<ProductId, Product>>>,
    stock: Arc<Mutex<HashMap<ProductId, u32>>>,
    offline: bool,
    latency: Option<Duration>,
}

impl StubCatalog {
    pub fn with(entries: &[(ProductId, u32)]) -> Self {
        let catalog = Self::default();
        for (id, available) in entries {
            catalog.products.lock().unwrap().insert(*id, product(*id));
            catalog.stock.lock().unwrap().insert(*id, *available);
        }
        catalog
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn respond(&self) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.offline {
            return Err(CartError::LookupError {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductLookup for StubCatalog {
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>> {
        self.respond().await?;
        let product = self.products.lock().unwrap().get(&id).cloned();
        Ok(product)
    }
}

#[async_trait]
impl StockLookup for StubCatalog {
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock> {
        self.respond().await?;
        let available = self.stock.lock().unwrap().get(&id).copied();
        available
            .map(|amount| Stock { id, amount })
            .ok_or_else(|| CartError::LookupError {
                message: format!("no stock record for {}", id),
            })
    }
}

/// Serves a fixed persisted value and refuses every write.
#[derive(Clone, Default)]
pub struct ReadOnlyStore {
    persisted: Option<String>,
}

impl ReadOnlyStore {
    pub fn holding(raw: impl Into<String>) -> Self {
        Self {
            persisted: Some(raw.into()),
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(self.persisted.clone())
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into())
    }
}
