//! Dev server configuration parsed from environment variables.
//!
//! Recognized options:
//! - `PORT`: listen port, default 3000
//! - `STREAMCHAT_DEV_PROXY`: forward `/api/*` to the backend, default on
//! - `STREAMCHAT_DEV_PROXY_TARGET`: backend origin, default `http://localhost:8000`
//!
//! The client's own base URL (`STREAMCHAT_API_URL`) is fixed when the WASM
//! bundle is built and is not read here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DEV_PROXY_TARGET: &str = "http://localhost:8000";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid STREAMCHAT_DEV_PROXY: {0} (expected true/false)")]
    InvalidToggle(String),

    #[error("invalid STREAMCHAT_DEV_PROXY_TARGET: {0} (expected http:// or https:// origin)")]
    InvalidProxyTarget(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin that `/api/*` is forwarded to. `None` disables the proxy.
    pub dev_proxy_target: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let proxy_enabled = match std::env::var("STREAMCHAT_DEV_PROXY") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidToggle(raw))?,
            Err(_) => true,
        };

        let dev_proxy_target = if proxy_enabled {
            let raw = std::env::var("STREAMCHAT_DEV_PROXY_TARGET").unwrap_or_else(|_| DEFAULT_DEV_PROXY_TARGET.to_owned());
            Some(normalize_target(&raw)?)
        } else {
            None
        };

        Ok(Self { port, dev_proxy_target })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize_target(raw: &str) -> Result<String, ConfigError> {
    let target = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| target.strip_prefix(scheme).is_some_and(|host| !host.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidProxyTarget(raw.to_owned()));
    }
    Ok(target.to_owned())
}
