use serde::Deserialize;

use crate::config::settings::LoggingConfig;
use crate::utils::constants::{DEFAULT_BASE_PATH, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_TOKEN_KEY};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub client: ClientConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// HTTP client
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// scheme + host + optional port, e.g. `http://localhost:8080`
    pub origin: String,
    /// prefix every relative request path is resolved under
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    pub user_agent: Option<String>,
}

/// ================================
/// Persistent token store
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(flatten)]
    pub store: StoreConfig,
    /// key the bearer token is stored under
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::Memory,
            token_key: default_token_key(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// JSON object of string keys to string values on disk
    File { path: String },
    /// read-only, `<prefix><KEY>` environment variables
    Env {
        #[serde(default)]
        prefix: Option<String>,
    },
    Memory,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}
