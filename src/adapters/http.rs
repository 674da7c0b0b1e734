use crate::domain::{ConfigProvider, Product, ProductId, ProductLookup, Stock, StockLookup};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Catalogue API client serving both lookups:
/// `GET {base}/products/{id}` and `GET {base}/stock/{id}`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    fn stock_url(&self, id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, id)
    }
}

#[async_trait]
impl ProductLookup for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>> {
        let url = self.product_url(id);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let product = response.error_for_status()?.json::<Product>().await?;
        Ok(Some(product))
    }
}

#[async_trait]
impl StockLookup for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_stock(&self, id: ProductId) -> Result<Stock> {
        let url = self.stock_url(id);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        let stock = response.error_for_status()?.json::<Stock>().await?;
        Ok(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CartError;
    use httpmock::prelude::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3333/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.product_url(7), "http://localhost:3333/products/7");
        assert_eq!(client.stock_url(7), "http://localhost:3333/stock/7");
    }

    #[tokio::test]
    async fn test_fetch_product_parses_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/1");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "id": 1,
                        "title": "Tênis de Caminhada Leve Confortável",
                        "price": 179.9,
                        "image": "https://example.com/shoe.jpg"
                    }));
            })
            .await;

        let client = ApiClient::new(server.base_url(), None).unwrap();
        let product = client.fetch_product(1).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 179.9);
    }

    #[tokio::test]
    async fn test_fetch_product_not_found_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/42");
                then.status(404).json_body(serde_json::json!({}));
            })
            .await;

        let client = ApiClient::new(server.base_url(), None).unwrap();
        assert!(client.fetch_product(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_product_server_error_is_lookup_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/1");
                then.status(500);
            })
            .await;

        let client = ApiClient::new(server.base_url(), None).unwrap();
        let err = client.fetch_product(1).await.unwrap_err();
        assert!(matches!(err, CartError::LookupError { .. }));
    }

    #[tokio::test]
    async fn test_fetch_stock() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/3");
                then.status(200)
                    .json_body(serde_json::json!({ "id": 3, "amount": 2 }));
            })
            .await;

        let client = ApiClient::new(server.base_url(), None).unwrap();
        let stock = client.fetch_stock(3).await.unwrap();
        assert_eq!(stock, Stock { id: 3, amount: 2 });
    }

    #[tokio::test]
    async fn test_fetch_stock_missing_is_lookup_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/3");
                then.status(404);
            })
            .await;

        let client = ApiClient::new(server.base_url(), None).unwrap();
        assert!(matches!(
            client.fetch_stock(3).await,
            Err(CartError::LookupError { .. })
        ));
    }
}
