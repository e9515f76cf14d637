//! Drives one chat exchange against the session state.
//!
//! DESIGN
//! ======
//! The dispatcher is generic over where the session lives (`SessionStore`)
//! and how bytes arrive (`ChatTransport`). The UI plugs in an
//! `RwSignal<SessionState>` and `HttpTransport`; tests plug in a
//! `RefCell` and a scripted stream.
//!
//! Each chunk is decoded and appended to an accumulator, and the reply
//! message is overwritten with the accumulator after every chunk, so the UI
//! re-renders between reads. There is no timeout and no cancellation: a
//! stalled stream keeps the session awaiting until it ends or errors.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::StreamExt;
use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::api::ChatTransport;
use super::decode::Utf8ChunkDecoder;
use super::types::{ChatError, ChatRequest};
use crate::state::session::SessionState;
use crate::state::settings::Settings;

/// Somewhere a `SessionState` can be read and mutated in place.
pub trait SessionStore {
    fn update_session(&self, f: impl FnOnce(&mut SessionState));
    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;
}

impl SessionStore for RwSignal<SessionState> {
    fn update_session(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }

    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.with_untracked(f)
    }
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn update_session(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut());
    }

    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.borrow())
    }
}

/// Apply the submit gate and, if it passes, record the user message.
pub fn prepare_submit<S: SessionStore>(store: &S, settings: &Settings) -> Option<ChatRequest> {
    if !store.read_session(|s| s.can_submit(settings)) {
        return None;
    }
    let mut request = None;
    store.update_session(|s| request = s.begin_submit(settings));
    request
}

/// Run one exchange to completion.
///
/// Failures are logged and collapse into a single error message. The
/// awaiting flag is cleared whatever the outcome.
pub async fn run_exchange<S, T>(store: &S, transport: &T, url: &str, request: ChatRequest)
where
    S: SessionStore,
    T: ChatTransport,
{
    if let Err(err) = stream_reply(store, transport, url, request).await {
        log::error!("chat exchange failed: {err}");
        store.update_session(SessionState::push_error);
    }
    store.update_session(SessionState::finish);
}

/// Submit the current draft. Returns `false` when the gate refused it and
/// no request was issued.
pub async fn submit<S, T>(store: &S, transport: &T, settings: &Settings, url: &str) -> bool
where
    S: SessionStore,
    T: ChatTransport,
{
    let Some(request) = prepare_submit(store, settings) else {
        return false;
    };
    run_exchange(store, transport, url, request).await;
    true
}

async fn stream_reply<S, T>(store: &S, transport: &T, url: &str, request: ChatRequest) -> Result<(), ChatError>
where
    S: SessionStore,
    T: ChatTransport,
{
    let mut chunks = transport.open(url.to_owned(), request).await?;

    let mut reply_id = String::new();
    store.update_session(|s| reply_id = s.push_reply_placeholder());

    let mut decoder = Utf8ChunkDecoder::default();
    let mut accumulated = String::new();
    while let Some(chunk) = chunks.next().await {
        accumulated.push_str(&decoder.decode(&chunk?));
        store.update_session(|s| s.set_content(&reply_id, &accumulated));
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        accumulated.push_str(&tail);
        store.update_session(|s| s.set_content(&reply_id, &accumulated));
    }
    Ok(())
}
