//! Endpoint resolution for the completion service.
//!
//! DESIGN
//! ======
//! The base URL is fixed at build time from `STREAMCHAT_API_URL`. When it is
//! unset the client issues same-origin requests, which the dev server proxies
//! to the local backend and a hosted deployment routes itself. The same WASM
//! bundle therefore works against either backend without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Streaming chat completion endpoint.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Backend liveness endpoint.
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Base URL used when `STREAMCHAT_API_URL` was not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "";

/// Base URL of the completion service, resolved at build time.
pub fn api_base_url() -> &'static str {
    option_env!("STREAMCHAT_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Fully-qualified URL for a relative endpoint path.
pub fn api_url(endpoint: &str) -> String {
    join_url(api_base_url(), endpoint)
}

/// Prefix `endpoint` with `base`, collapsing the slash at the seam.
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return endpoint.to_owned();
    }
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}
