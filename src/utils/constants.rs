//! Shared constants and invariants

pub const DEFAULT_BASE_PATH: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_CONFIG_PATH: &str = "api-client.yaml";

/// Authorization scheme label placed in front of the stored token
pub const BEARER_SCHEME: &str = "Bearer";

// Supported store types
pub const STORE_FILE: &str = "file";
pub const STORE_ENV: &str = "env";
pub const STORE_MEMORY: &str = "memory";
