use crate::core::cart::Cart;
use crate::domain::{
    KeyValueStore, Notifier, ProductId, ProductLookup, StockLookup, UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};
use tokio::sync::watch;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Owns the shopper's cart and keeps the persisted copy in step with it.
///
/// Every mutating operation is a failure boundary: problems are logged,
/// handed to the [`Notifier`] and swallowed. Storage is written once per
/// successful operation, before the new cart is committed in memory and
/// published to subscribers.
pub struct CartContainer<P, S, K, N> {
    products: P,
    stock: S,
    store: K,
    notifier: N,
    storage_key: String,
    cart: Cart,
    publisher: watch::Sender<Cart>,
}

impl<P, S, K, N> CartContainer<P, S, K, N>
where
    P: ProductLookup,
    S: StockLookup,
    K: KeyValueStore,
    N: Notifier,
{
    /// Restores the cart stored under `storage_key`. Missing, unreadable or
    /// corrupt data yields an empty cart and is only logged.
    #[tracing::instrument(name = "cart_load", skip(products, stock, store, notifier, storage_key))]
    pub async fn load(
        products: P,
        stock: S,
        store: K,
        notifier: N,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();

        // restore, never fail
        let cart = match store.get(&storage_key).await {
            Ok(Some(raw)) => match Cart::from_json(&raw) {
                Ok(cart) => {
                    tracing::debug!(entries = cart.len(), "Restored persisted cart");
                    cart
                }
                Err(e) => {
                    tracing::warn!(key = %storage_key, error = %e, "Persisted cart is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %storage_key, "No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                tracing::warn!(key = %storage_key, error = %e, "Could not read persisted cart, starting empty");
                Cart::new()
            }
        };

        // initial value counts as seen for every later subscriber
        let (publisher, _) = watch::channel(cart.clone());

        Self {
            products,
            stock,
            store,
            notifier,
            storage_key,
            cart,
            publisher,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Receiver that always holds the latest committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.publisher.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) {
        let result = match self.next_after_add(product_id).await {
            Ok(next) => self.commit(next).await,
            Err(e) => Err(e),
        };
        self.settle("add_product", result);
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&mut self, product_id: ProductId) {
        let result = if self.cart.contains(product_id) {
            let next = self.cart.without(product_id);
            self.commit(next).await
        } else {
            Err(CartError::ProductRemovalError)
        };
        self.settle("remove_product", result);
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) {
        let result = match self.next_after_update(request).await {
            Ok(next) => self.commit(next).await,
            Err(e) => Err(e),
        };
        self.settle("update_product_amount", result);
    }

    async fn next_after_add(&self, product_id: ProductId) -> Result<Cart> {
        let product = self
            .products
            .fetch_product(product_id)
            .await?
            .ok_or(CartError::ProductAdditionError)?;
        // fresh snapshot, never cached
        let stock = self.stock.fetch_stock(product_id).await?;
        tracing::debug!(available = stock.amount, "Fetched stock");

        match self.cart.find(product_id) {
            Some(entry) if entry.amount >= stock.amount => Err(CartError::OutOfStockError),
            Some(entry) => Ok(self.cart.with_amount(product_id, entry.amount + 1)),
            None if stock.amount == 0 => Err(CartError::OutOfStockError),
            None => Ok(self.cart.with_appended(product)),
        }
    }

    async fn next_after_update(&self, request: UpdateProductAmount) -> Result<Cart> {
        if !self.cart.contains(request.product_id) || request.amount <= 0 {
            return Err(CartError::ProductUpdateError);
        }

        let stock = self.stock.fetch_stock(request.product_id).await?;
        tracing::debug!(available = stock.amount, "Fetched stock");

        match u32::try_from(request.amount) {
            Ok(amount) if amount <= stock.amount => {
                Ok(self.cart.with_amount(request.product_id, amount))
            }
            _ => Err(CartError::OutOfStockError),
        }
    }

    async fn commit(&mut self, next: Cart) -> Result<()> {
        // persist first: a failed write must leave memory and subscribers untouched
        let raw = next.to_json()?;
        self.store.set(&self.storage_key, &raw).await?;

        self.cart = next;
        self.publisher.send_replace(self.cart.clone());
        Ok(())
    }

    fn settle(&self, operation: &str, result: Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!(operation, entries = self.cart.len(), "Cart updated");
            }
            Err(e) => {
                if e.is_rule_violation() {
                    tracing::info!(operation, error = %e, "Cart operation rejected");
                } else {
                    tracing::warn!(operation, error = %e, category = ?e.category(), "Cart operation failed");
                }
                self.notifier.notify_error(&e.user_message());
            }
        }
    }
}
