//! Conversation state for one chat session.
//!
//! DESIGN
//! ======
//! `SessionState` is the single owner of the message list, the composer
//! draft and the awaiting-response flag. Every mutation goes through the
//! methods below so that the submit gate, the placeholder reply and the
//! error path behave the same whether driven by the UI or by tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ChatRequest;
use crate::state::settings::Settings;
use crate::util::clock;

/// Text shown for every failed exchange, whatever the cause.
pub const ERROR_MESSAGE: &str =
    "Sorry, there was an error processing your request. Please check your API key and try again.";

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// A single conversation message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), content: content.into(), role, timestamp: clock::now_ms() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Role::Ai, content)
    }
}

/// State for the chat session: ordered messages, composer draft, in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub draft: String,
    pub awaiting_response: bool,
}

impl SessionState {
    /// Whether the current draft may be sent with `settings`.
    pub fn can_submit(&self, settings: &Settings) -> bool {
        !self.awaiting_response && !self.draft.trim().is_empty() && settings.has_api_key()
    }

    /// Whether the composer accepts input at all.
    pub fn composer_enabled(&self, settings: &Settings) -> bool {
        !self.awaiting_response && settings.has_api_key()
    }

    /// Turn the draft into a user message and the request payload for it.
    ///
    /// Returns `None` without touching any state when the draft or the API
    /// key is blank, or when a reply is still streaming.
    pub fn begin_submit(&mut self, settings: &Settings) -> Option<ChatRequest> {
        if !self.can_submit(settings) {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let request = ChatRequest::new(settings, &text);
        self.messages.push(Message::user(text));
        self.awaiting_response = true;
        Some(request)
    }

    /// Append the empty AI message that the streamed reply fills in.
    pub fn push_reply_placeholder(&mut self) -> String {
        let reply = Message::ai(String::new());
        let id = reply.id.clone();
        self.messages.push(reply);
        id
    }

    /// Replace the content of message `id`. Unknown ids are ignored.
    pub fn set_content(&mut self, id: &str, content: &str) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            content.clone_into(&mut msg.content);
        }
    }

    /// Append the generic failure message.
    pub fn push_error(&mut self) {
        self.messages.push(Message::ai(ERROR_MESSAGE));
    }

    /// Settle the current exchange, successful or not.
    pub fn finish(&mut self) {
        self.awaiting_response = false;
    }

    /// Drop the whole conversation.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
