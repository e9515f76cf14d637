//! Wire payload and error types for the chat endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::settings::Settings;

/// JSON body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub developer_message: String,
    pub user_message: String,
    pub model: String,
    pub api_key: String,
}

impl ChatRequest {
    pub fn new(settings: &Settings, user_message: &str) -> Self {
        Self {
            developer_message: settings.developer_message.clone(),
            user_message: user_message.to_owned(),
            model: settings.model.as_str().to_owned(),
            api_key: settings.api_key.clone(),
        }
    }
}

/// Why an exchange failed. Logged for diagnostics only; the user always sees
/// the same message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request could not be built or sent.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("chat response error: status {0}")]
    Status(u16),

    /// The response carried no readable body stream.
    #[error("chat response has no readable body")]
    MissingBody,

    /// Reading a chunk from the body stream failed.
    #[error("chat stream read failed: {0}")]
    Read(String),

    /// HTTP is only available in the browser build.
    #[error("chat transport not available on server")]
    Unavailable,
}
