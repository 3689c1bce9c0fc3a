use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};

use crate::storage::TokenStore;
use crate::utils::constants::STORE_MEMORY;

/// In-process store, nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: RwLock::new(HashMap::from([(key.to_owned(), value.to_owned())])),
        }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.read().map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.inner.write().map_err(|_| anyhow!("memory store lock poisoned"))?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.inner.write().map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(map.remove(key).is_some())
    }

    fn kind(&self) -> &'static str {
        STORE_MEMORY
    }
}
