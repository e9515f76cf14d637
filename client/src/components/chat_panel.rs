//! Conversation column: message history, typing indicator and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting hands the draft to `net::dispatch`, which records the user
//! message synchronously and then streams the reply into the session from a
//! local task. The panel only re-renders from session state.

use leptos::prelude::*;

use crate::components::message_view::{MessageView, RoleIcon};
use crate::net::dispatch::prepare_submit;
use crate::net::types::ChatRequest;
use crate::state::session::{Role, SessionState};
use crate::state::settings::Settings;
use crate::util::keys::{KeyOutcome, KeyPress, on_composer_key};

/// Message list plus the input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = expect_context::<RwSignal<Settings>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        session.with(|s| {
            let _ = s.messages.len();
            let _ = s.messages.last().map(|m| m.content.len());
            let _ = s.awaiting_response;
        });

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_click = move |_| {
        if let Some(request) = prepare_submit(&session, &settings.get_untracked()) {
            spawn_exchange(session, request);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let outcome = on_composer_key(&session, &settings.get_untracked(), KeyPress::from_event(&ev, &key));
        if outcome.prevents_default() {
            ev.prevent_default();
        }
        if let KeyOutcome::Sent(request) = outcome {
            spawn_exchange(session, request);
        }
    };

    let can_send = move || session.with(|s| s.can_submit(&settings.get()));
    let composer_enabled = move || session.with(|s| s.composer_enabled(&settings.get()));

    view! {
        <section class="chat-panel card">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = session.with(|s| s.messages.clone());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                <p class="chat-panel__empty-title">"Start a conversation with AI"</p>
                                <p class="chat-panel__empty-hint">"Enter your message below to begin"</p>
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageView message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    session
                        .with(|s| s.awaiting_response)
                        .then(|| {
                            view! {
                                <div class="chat-message chat-message--ai">
                                    <RoleIcon role=Role::Ai/>
                                    <div class="typing-indicator">
                                        <span class="typing-dot"></span>
                                        <span class="typing-dot"></span>
                                        <span class="typing-dot"></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__composer">
                <div class="chat-panel__input-row">
                    <textarea
                        class="input-field chat-panel__input"
                        rows="1"
                        placeholder="Type your message..."
                        prop:value=move || session.with(|s| s.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.draft = value);
                        }
                        on:keydown=on_keydown
                        disabled=move || !composer_enabled()
                    ></textarea>
                    <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
                <Show when=move || !settings.with(Settings::has_api_key)>
                    <p class="chat-panel__hint">"Please enter your OpenAI API key in settings"</p>
                </Show>
            </div>
        </section>
    }
}

/// Stream the reply for an already recorded user message.
fn spawn_exchange(session: RwSignal<SessionState>, request: ChatRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let url = crate::config::api_url(crate::config::CHAT_ENDPOINT);
        crate::net::dispatch::run_exchange(&session, &crate::net::api::HttpTransport, &url, request).await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop((session, request));
}
