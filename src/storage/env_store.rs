use anyhow::{bail, Result};
use tracing::debug;

use crate::storage::TokenStore;
use crate::utils::constants::STORE_ENV;

/// Read-only store backed by process environment variables.
///
/// Key `token` with prefix `APP_` reads `APP_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    prefix: String,
}

impl EnvStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }
}

impl TokenStore for EnvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let name = self.var_name(key);
        debug!("env store: reading '{}'", name);
        match std::env::var(&name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => bail!("env store: variable '{}' is unreadable: {}", name, e),
        }
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        bail!("env store is read-only, export {} instead", self.var_name(key))
    }

    fn remove(&self, key: &str) -> Result<bool> {
        bail!("env store is read-only, unset {} instead", self.var_name(key))
    }

    fn kind(&self) -> &'static str {
        STORE_ENV
    }
}
