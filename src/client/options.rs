use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use reqwest::Url;

use crate::client::base_path::BasePath;
use crate::config::types::ClientConfig;
use crate::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;

/// Explicit construction input for [`crate::client::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub origin: Url,
    pub base_path: BasePath,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl ClientOptions {
    /// Origin with the default `/api` base path and timeout.
    pub fn new(origin: &str) -> Result<Self> {
        let origin = Url::parse(origin).map_err(|e| anyhow!("invalid origin '{}': {}", origin, e))?;
        if origin.cannot_be_a_base() {
            bail!("origin '{}' cannot be used as a base URL", origin);
        }
        Ok(Self {
            origin,
            base_path: BasePath::default(),
            timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            user_agent: None,
        })
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = BasePath::new(base_path);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl TryFrom<&ClientConfig> for ClientOptions {
    type Error = anyhow::Error;

    fn try_from(cfg: &ClientConfig) -> Result<Self> {
        let mut options = ClientOptions::new(&cfg.origin)?
            .with_base_path(&cfg.base_path)
            .with_timeout(Duration::from_millis(cfg.timeout_ms));
        if let Some(user_agent) = &cfg.user_agent {
            options = options.with_user_agent(user_agent.as_str());
        }
        Ok(options)
    }
}
