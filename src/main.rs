//! Development server for the streaming chat client.
//!
//! Serves the server-rendered Leptos shell and WASM assets, and forwards
//! `/api/*` to a local completion backend so the browser only ever talks to
//! one origin.

#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Load .env (if present)
    let _ = dotenvy::dotenv();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let proxy_state = config.dev_proxy_target.clone().map(state::AppState::new);
    match &proxy_state {
        Some(state) => {
            tracing::info!(backend = %state.proxy_target, "dev proxy enabled for /api/*");
            proxy::probe_upstream(&state.http, &state.proxy_target).await;
        }
        None => tracing::info!("dev proxy disabled"),
    }

    let app = match routes::app(proxy_state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "streamchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
