//! The chat page: settings column beside the conversation.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::settings_panel::SettingsPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"AI Chat Interface"</h1>
                <p class="chat-page__subtitle">"Experience real-time conversations with AI"</p>
            </header>
            <div class="chat-page__grid">
                <SettingsPanel/>
                <ChatPanel/>
            </div>
        </main>
    }
}
