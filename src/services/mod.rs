pub mod api_client;
pub mod storage;
pub mod tracking;

pub use api_client::{ApiClient, ShopApi};
pub use storage::{BrowserStore, KeyValueStore, MemoryStore};
pub use tracking::{TrackingContext, TrackingHeaders};
