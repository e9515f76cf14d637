//! Networking modules for the chat completion exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request payload and error taxonomy, `decode` turns
//! byte chunks into text, `api` performs the HTTP call, and `dispatch`
//! drives one exchange against the session state.

pub mod api;
pub mod decode;
pub mod dispatch;
pub mod types;
