//! # API Client Library
//!
//! Builds an HTTP client bound to a fixed base path and, when a bearer
//! token is present in a persistent key-value store, a default
//! `Authorization: Bearer <token>` header. The store is read once when
//! the client is constructed.
//!
//! Modules:
//! - `config` — YAML configuration, defaults and validation
//! - `storage` — file, env and in-memory token stores
//! - `client` — base path resolution and the `ApiClient` itself
//! - `utils` — logging setup, config loading, constants

pub mod config;
pub mod storage;
pub mod client;
pub mod utils;
#[cfg(test)]
mod tests;


pub use crate::client::{ApiClient, BasePath, ClientOptions};
pub use crate::config::types::ServiceConfig;
pub use crate::storage::TokenStore;
