use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::auth::bearer_header;
use crate::client::base_path::is_absolute_url;
use crate::client::options::ClientOptions;
use crate::config::types::ServiceConfig;
use crate::storage::{build_store, non_empty, TokenStore};

/// HTTP client bound to one base path.
///
/// The bearer token is captured when the client is built. Store changes
/// made afterwards are not seen until the client is rebuilt or
/// [`ApiClient::set_bearer_token`] is called.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    options: ClientOptions,
    default_headers: HeaderMap,
}

impl ApiClient {
    /// Build from already resolved options and token. No I/O.
    ///
    /// A token that cannot be carried in an HTTP header is not attached;
    /// requests then go out without `Authorization`.
    pub fn new(options: ClientOptions, token: Option<String>) -> Result<Self> {
        let default_headers = default_headers(non_empty(token).as_deref());
        let http = build_http(&options, &default_headers)?;
        let client = Self { http, options, default_headers };
        info!(
            base_url = %client.base_url(),
            authorized = client.has_bearer_token(),
            "api client constructed"
        );
        Ok(client)
    }

    /// Reads `key` from `store` exactly once, then builds the client.
    pub fn from_store(options: ClientOptions, store: &dyn TokenStore, key: &str) -> Result<Self> {
        let token = store
            .get(key)
            .with_context(|| format!("cannot read '{}' from {} store", key, store.kind()))?;
        debug!("{} store: token '{}' present: {}", store.kind(), key, token.is_some());
        Self::new(options, token)
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let options = ClientOptions::try_from(&config.client)?;
        let store = build_store(&config.storage);
        Self::from_store(options, store.as_ref(), &config.storage.token_key)
    }

    /// Replaces (or with `None` drops) the default bearer header.
    pub fn set_bearer_token(&mut self, token: Option<&str>) -> Result<()> {
        let headers = default_headers(token.filter(|t| !t.is_empty()));
        self.http = build_http(&self.options, &headers)?;
        self.default_headers = headers;
        info!(authorized = self.has_bearer_token(), "api client default headers updated");
        Ok(())
    }

    pub fn has_bearer_token(&self) -> bool {
        self.default_headers.contains_key(AUTHORIZATION)
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Origin joined with the base path, e.g. `http://localhost:8080/api`.
    pub fn base_url(&self) -> Url {
        let mut url = self.options.origin.clone();
        url.set_path(self.options.base_path.as_str());
        url
    }

    /// Absolute URLs pass through, everything else lands under the base path.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let target = if is_absolute_url(path) {
            path.to_owned()
        } else {
            self.options.base_path.join(path)
        };
        self.options
            .origin
            .join(&target)
            .map_err(|e| anyhow!("cannot resolve '{}' against '{}': {}", path, self.base_url(), e))
    }

    /// Request carrying the default headers. A header set on the returned
    /// builder replaces the default of the same name for that request.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        match self.resolve(path) {
            Ok(url) => {
                debug!("{} {}", method, url);
                self.http.request(method, url)
            }
            Err(e) => {
                // reqwest reports the bad URL when the request is sent
                warn!("{}", e);
                self.http.request(method, path)
            }
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        send_json(self.get(path)).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        send_json(self.post(path).json(body)).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        send_json(self.put(path).json(body)).await
    }

    /// DELETE that only cares about the status.
    pub async fn delete_path(&self, path: &str) -> Result<StatusCode> {
        let response = self.delete(path).send().await?.error_for_status()?;
        Ok(response.status())
    }
}

fn default_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        match bearer_header(token) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => warn!("stored token not attached: {}", e),
        }
    }
    headers
}

fn build_http(options: &ClientOptions, headers: &HeaderMap) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(options.timeout)
        .default_headers(headers.clone());
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    builder.build().context("failed to build HTTP client")
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?.error_for_status()?;
    Ok(response.json::<T>().await?)
}
