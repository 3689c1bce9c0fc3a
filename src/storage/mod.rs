//! Persistent key-value stores the bearer token is read from.

use anyhow::Result;

use crate::config::types::{StorageConfig, StoreConfig};

pub mod env_store;
pub mod file_store;
pub mod memory_store;

use env_store::EnvStore;
use file_store::FileStore;
use memory_store::MemoryStore;

/// Key-value store holding opaque string values.
///
/// `get` on a missing key is `Ok(None)`, never an error.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns whether the key was present.
    fn remove(&self, key: &str) -> Result<bool>;

    fn kind(&self) -> &'static str;
}

pub fn build_store(cfg: &StorageConfig) -> Box<dyn TokenStore> {
    match &cfg.store {
        StoreConfig::File { path } => Box::new(FileStore::new(path)),
        StoreConfig::Env { prefix } => Box::new(EnvStore::new(prefix.clone().unwrap_or_default())),
        StoreConfig::Memory => Box::new(MemoryStore::new()),
    }
}

/// Empty stored values count as no token.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
