pub mod config;
pub mod error;
pub mod grid;
pub mod storage;
pub mod store;
pub mod subscription;

pub use config::{AppConfig, StoreBackend};
pub use error::GwenError;
pub use grid::{Card, ClickOutcome, GatePrompt, GridView, VideoGrid};
pub use storage::SqliteStore;
pub use store::{KvStore, MemoryStore, StoreError, UnavailableStore};
pub use subscription::{subscribe_url, GateStatus, SubscriptionState, SUBSCRIBE_URL, SUBSCRIPTION_KEY};
