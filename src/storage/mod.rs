pub mod json_backend;
pub mod memory;
pub mod persistence;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

pub const THEME_KEY: &str = "expense-tracker-theme";
pub const TRANSACTIONS_KEY: &str = "expense-tracker-transactions";
pub const USER_KEY: &str = "expense-tracker-user";

/// String key-value store holding the persisted slices of application state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
pub use persistence::{PersistedState, PersistenceAdapter, SeedPolicy};
