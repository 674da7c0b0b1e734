// Domain layer: cart models and the ports the container talks through.

pub mod model;
pub mod ports;

pub use model::{CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use ports::{ConfigProvider, KeyValueStore, Notifier, ProductLookup, StockLookup};
