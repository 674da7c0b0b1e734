pub mod actor;
pub mod cart;
pub mod container;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::ports::{
    ConfigProvider, KeyValueStore, Notifier, ProductLookup, StockLookup,
};
pub use crate::utils::error::Result;
pub use actor::{CartActor, CartHandle, CartRequest};
pub use cart::Cart;
pub use container::{CartContainer, DEFAULT_STORAGE_KEY};
