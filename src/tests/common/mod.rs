// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use axum::{extract::Request, Json};

use crate::client::{ApiClient, ClientOptions};
use crate::storage::memory_store::MemoryStore;
use crate::storage::TokenStore;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Router answering every method and path with what it received:
/// `{"method": .., "path": .., "query": .., "authorization": [..]}`.
pub fn echo_router() -> Router {
    Router::new().fallback(|req: Request| async move {
        let authorization: Vec<String> = req
            .headers()
            .get_all("authorization")
            .iter()
            .map(|v| v.to_str().unwrap_or_default().to_owned())
            .collect();
        Json(json!({
            "method": req.method().as_str(),
            "path": req.uri().path(),
            "query": req.uri().query(),
            "authorization": authorization,
        }))
    })
}

pub async fn spawn_echo() -> (JoinHandle<()>, SocketAddr) {
    spawn_axum(echo_router()).await
}

pub fn client_for(addr: SocketAddr, token: Option<&str>) -> ApiClient {
    let options = ClientOptions::new(&format!("http://{}", addr)).unwrap();
    ApiClient::new(options, token.map(str::to_owned)).unwrap()
}

/// Store wrapper counting reads and writes.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl CountingStore {
    pub fn with_token(token: &str) -> Self {
        Self { inner: MemoryStore::with_entry("token", token), ..Default::default() }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TokenStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }

    fn kind(&self) -> &'static str {
        "counting"
    }
}
