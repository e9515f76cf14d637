//! Chat settings edited in the settings panel.
//!
//! Held in memory for the lifetime of the tab. The only rule applied to these
//! values is the non-empty API key gate at submit time.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Developer message used until the user edits it.
pub const DEFAULT_DEVELOPER_MESSAGE: &str = "You are a helpful AI assistant.";

/// Completion models offered in the model select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-4.1-mini")]
    Gpt41Mini,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl Model {
    /// Every selectable model, in display order.
    pub const ALL: [Model; 3] = [Model::Gpt41Mini, Model::Gpt4, Model::Gpt35Turbo];

    /// Identifier sent to the completion service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gpt41Mini => "gpt-4.1-mini",
            Self::Gpt4 => "gpt-4",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gpt41Mini => "GPT-4.1 Mini",
            Self::Gpt4 => "GPT-4",
            Self::Gpt35Turbo => "GPT-3.5 Turbo",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a select value names no known model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == raw)
            .ok_or_else(|| UnknownModel(raw.to_owned()))
    }
}

/// Values sent alongside every chat request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub developer_message: String,
    pub model: Model,
}

impl Default for Settings {
    fn default() -> Self {
        Self { api_key: String::new(), developer_message: DEFAULT_DEVELOPER_MESSAGE.to_owned(), model: Model::default() }
    }
}

impl Settings {
    /// Whether a usable API key has been entered.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
