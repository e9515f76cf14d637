//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It only exists when the dev proxy is enabled and carries the pooled HTTP
//! client plus the backend origin requests are forwarded to.

use std::sync::Arc;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without trailing slash, e.g. `http://localhost:8000`.
    pub proxy_target: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(proxy_target: impl Into<Arc<str>>) -> Self {
        Self { http: reqwest::Client::new(), proxy_target: proxy_target.into() }
    }
}
