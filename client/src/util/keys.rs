//! Composer keyboard handling.
//!
//! Plain Enter sends the draft, as does Enter with Alt, Ctrl or Meta.
//! Shift+Enter is left to the textarea so it inserts a line break. Key
//! presses that confirm an IME composition are never treated as a send.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use crate::net::dispatch::{SessionStore, prepare_submit};
use crate::net::types::ChatRequest;
use crate::state::settings::Settings;

/// Snapshot of a key press on the composer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    /// Part of an in-progress IME composition.
    pub composing: bool,
}

impl<'a> KeyPress<'a> {
    pub fn plain(key: &'a str) -> Self {
        Self { key, ..Self::default() }
    }

    pub fn shifted(key: &'a str) -> Self {
        Self { key, shift: true, ..Self::default() }
    }

    pub fn from_event(ev: &leptos::ev::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            composing: ev.is_composing(),
        }
    }
}

/// What the composer should do with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerKey {
    /// Send the draft; the default action must be suppressed.
    Submit,
    /// Shift+Enter. The textarea's default action inserts the line break.
    Newline,
    /// Not ours; let the textarea handle it.
    Ignore,
}

pub fn classify_key(press: KeyPress<'_>) -> ComposerKey {
    if press.composing || press.key != "Enter" {
        return ComposerKey::Ignore;
    }
    if press.shift { ComposerKey::Newline } else { ComposerKey::Submit }
}

/// Result of a keydown on the composer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The draft passed the gate and was recorded; the caller runs the exchange.
    Sent(ChatRequest),
    /// A send key the gate refused. Nothing changed.
    Refused,
    /// Leave the event to the textarea.
    Default,
}

impl KeyOutcome {
    /// Whether the browser's default action must be cancelled.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Default)
    }
}

/// Apply a composer keydown to the session.
pub fn on_composer_key<S: SessionStore>(store: &S, settings: &Settings, press: KeyPress<'_>) -> KeyOutcome {
    match classify_key(press) {
        ComposerKey::Submit => prepare_submit(store, settings).map_or(KeyOutcome::Refused, KeyOutcome::Sent),
        ComposerKey::Newline | ComposerKey::Ignore => KeyOutcome::Default,
    }
}
