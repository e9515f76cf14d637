//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the settings column and the conversation column while
//! reading/writing shared state from Leptos context providers.

pub mod chat_panel;
pub mod message_view;
pub mod settings_panel;
