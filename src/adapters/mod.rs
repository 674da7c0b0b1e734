// Adapters layer: concrete implementations of the domain ports (http, storage, notifications).

pub mod http;
pub mod notify;
pub mod storage;

pub use http::ApiClient;
pub use notify::{ConsoleNotifier, RecordingNotifier, TracingNotifier};
pub use storage::{FileStore, MemoryStore};
