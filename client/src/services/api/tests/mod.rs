//! # API Client Tests
//!
//! Façade tests against a stub `axum` backend bound to an ephemeral port, and
//! against an "offline" backend (a port that was bound and released).

mod fallback;
mod live;
mod session;

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use super::*;
use crate::config::ClientConfig;
use crate::session::{MemorySessionStore, Session};

/// Serve `router` on 127.0.0.1 and return the API base URL (`.../api`).
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{}/api", addr)
}

/// Base URL of a port nothing listens on.
pub fn offline_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Probe port has no address");
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn test_session() -> Session {
    Session::new(MemorySessionStore::new())
}

pub fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, test_session())
}

pub fn test_client_with_timeout(base_url: &str, timeout: Duration) -> ApiClient {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        request_timeout: timeout,
        ..ClientConfig::default()
    };
    ApiClient::from_config(&config, test_session())
}

pub fn offline_client() -> ApiClient {
    test_client(&offline_url())
}
