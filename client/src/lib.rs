//! # client
//!
//! Leptos + WASM frontend for the streaming chat session.
//!
//! This crate contains the chat page, its components, the in-memory session
//! and settings state, the endpoint resolver, and the HTTP transport that
//! reads the completion service's streamed reply chunk by chunk.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
