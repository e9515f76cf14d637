//! Dev proxy for `/api/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! During local development the client issues same-origin requests to
//! `/api/...`. This module forwards them to the configured backend origin,
//! keeping method, path, query and body, and streams the upstream body back
//! as it arrives so chat replies render incrementally. Nothing is buffered,
//! retried or timed out.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::CACHE_CONTROL, header::CONTENT_LANGUAGE];

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or the exchange broke before headers.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream response could not be re-assembled.
    #[error("response build failed: {0}")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "dev proxy request failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Backend URL for an incoming `/api/...` request.
pub fn upstream_url(target: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{target}{path_and_query}")
}

/// `ANY /api/{*path}`: forward to the backend and stream its reply.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.proxy_target, &uri);
    tracing::debug!(%method, %url, "proxying request");

    let mut request = state.http.request(method, &url).body(body);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await?;
    let mut response = Response::builder().status(upstream.status());
    for name in FORWARDED_RESPONSE_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            response = response.header(name, value.clone());
        }
    }

    Ok(response.body(Body::from_stream(upstream.bytes_stream()))?)
}

/// Check the backend's health endpoint once. Never fatal; the result is
/// only logged so a late-starting backend still works.
pub async fn probe_upstream(http: &reqwest::Client, target: &str) -> bool {
    let url = format!("{target}{}", client::config::HEALTH_ENDPOINT);
    match http.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            tracing::info!(%url, "dev proxy backend reachable");
            true
        }
        Ok(resp) => {
            tracing::warn!(%url, status = resp.status().as_u16(), "dev proxy backend health check failed");
            false
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "dev proxy backend unreachable");
            false
        }
    }
}
