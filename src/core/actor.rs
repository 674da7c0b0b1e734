//! # Cart actor
//!
//! Serializes cart operations. The [`CartActor`] owns the [`CartContainer`]
//! and drains a FIFO request queue one message at a time, so an operation
//! always starts from the cart left by the one before it. Callers talk to it
//! through the cloneable [`CartHandle`].

use crate::core::cart::Cart;
use crate::core::container::CartContainer;
use crate::domain::{
    KeyValueStore, Notifier, ProductId, ProductLookup, StockLookup, UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: oneshot::Sender<()>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: oneshot::Sender<()>,
    },
    UpdateProductAmount {
        request: UpdateProductAmount,
        respond_to: oneshot::Sender<()>,
    },
    GetCart {
        respond_to: oneshot::Sender<Cart>,
    },
    Shutdown,
}

pub struct CartActor<P, S, K, N> {
    receiver: mpsc::Receiver<CartRequest>,
    container: CartContainer<P, S, K, N>,
}

impl<P, S, K, N> CartActor<P, S, K, N>
where
    P: ProductLookup + 'static,
    S: StockLookup + 'static,
    K: KeyValueStore + 'static,
    N: Notifier + 'static,
{
    pub fn new(container: CartContainer<P, S, K, N>, buffer_size: usize) -> (Self, CartHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let handle = CartHandle {
            sender,
            updates: container.subscribe(),
        };
        (
            Self {
                receiver,
                container,
            },
            handle,
        )
    }

    /// Starts the actor on the tokio runtime.
    pub fn spawn(
        container: CartContainer<P, S, K, N>,
        buffer_size: usize,
    ) -> (CartHandle, JoinHandle<()>) {
        let (actor, handle) = Self::new(container, buffer_size);
        (handle, tokio::spawn(actor.run()))
    }

    #[tracing::instrument(name = "cart_actor", skip(self))]
    pub async fn run(mut self) {
        tracing::info!(entries = self.container.cart().len(), "Cart actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct {
                    product_id,
                    respond_to,
                } => {
                    self.container.add_product(product_id).await;
                    let _ = respond_to.send(());
                }
                CartRequest::RemoveProduct {
                    product_id,
                    respond_to,
                } => {
                    self.container.remove_product(product_id).await;
                    let _ = respond_to.send(());
                }
                CartRequest::UpdateProductAmount {
                    request,
                    respond_to,
                } => {
                    self.container.update_product_amount(request).await;
                    let _ = respond_to.send(());
                }
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(self.container.cart().clone());
                }
                CartRequest::Shutdown => {
                    tracing::info!("Cart actor shutting down");
                    break;
                }
            }
        }
        tracing::info!("Cart actor stopped");
    }
}

/// Front for a running [`CartActor`].
///
/// Operation outcomes are reported through the notifier, never returned. An
/// `Err` from these methods only means the actor is no longer running.
#[derive(Clone)]
pub struct CartHandle {
    sender: mpsc::Sender<CartRequest>,
    updates: watch::Receiver<Cart>,
}

impl CartHandle {
    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        tracing::debug!("Sending request");
        self.call(|respond_to| CartRequest::AddProduct {
            product_id,
            respond_to,
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        tracing::debug!("Sending request");
        self.call(|respond_to| CartRequest::RemoveProduct {
            product_id,
            respond_to,
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<()> {
        tracing::debug!("Sending request");
        self.call(|respond_to| CartRequest::UpdateProductAmount {
            request,
            respond_to,
        })
        .await
    }

    /// Cart as seen after every request queued before this one.
    pub async fn cart(&self) -> Result<Cart> {
        self.call(|respond_to| CartRequest::GetCart { respond_to })
            .await
    }

    /// Latest committed cart without queueing.
    pub fn snapshot(&self) -> Cart {
        self.updates.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.updates.clone()
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }

    async fn call<T>(&self, request: impl FnOnce(oneshot::Sender<T>) -> CartRequest) -> Result<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor dropped".to_string()))
    }
}
