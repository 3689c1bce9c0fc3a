//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - origin is an absolute http(s) URL without a path
//! - base path is rooted, token key and timeout are set
//! - file store path is present, logging level is known

use reqwest::Url;
use tracing::{error, info};

use crate::config::settings::LoggingConfig;
use crate::config::types::{ClientConfig, ServiceConfig, StorageConfig, StoreConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_client(&cfg.client, &mut errors);
    validate_storage(&cfg.storage, &mut errors);
    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_client(client: &ClientConfig, errors: &mut Vec<String>) {
    match Url::parse(&client.origin) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(format!(
                    "client.origin '{}' must use http or https, got '{}'",
                    client.origin,
                    url.scheme()
                ));
            }
            if url.cannot_be_a_base() || url.host_str().is_none() {
                errors.push(format!("client.origin '{}' has no host", client.origin));
            }
            if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
                errors.push(format!(
                    "client.origin '{}' must not carry a path, query or fragment; use client.base_path",
                    client.origin
                ));
            }
        }
        Err(e) => errors.push(format!("client.origin '{}' is not a valid URL: {}", client.origin, e)),
    }

    if !client.base_path.starts_with('/') {
        errors.push(format!(
            "client.base_path '{}' must start with '/'",
            client.base_path
        ));
    }
    if client.base_path.contains(['?', '#']) {
        errors.push(format!(
            "client.base_path '{}' must not contain a query or fragment",
            client.base_path
        ));
    }
    if client.timeout_ms == 0 {
        errors.push("client.timeout_ms must be greater than 0".to_string());
    }
    if let Some(user_agent) = &client.user_agent {
        if user_agent.trim().is_empty() {
            errors.push("client.user_agent must not be empty when set".to_string());
        }
    }
}

fn validate_storage(storage: &StorageConfig, errors: &mut Vec<String>) {
    if storage.token_key.is_empty() {
        errors.push("storage.token_key must not be empty".to_string());
    }
    match &storage.store {
        StoreConfig::File { path } if path.trim().is_empty() => {
            errors.push("storage.path must not be empty for type 'file'".to_string());
        }
        StoreConfig::Env { prefix: Some(prefix) }
            if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            errors.push(format!(
                "storage.prefix '{}' may contain only ASCII letters, digits and '_'",
                prefix
            ));
        }
        _ => {}
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "logging.level '{}' is not one of {:?}",
            logging.level, LOG_LEVELS
        ));
    }
}
