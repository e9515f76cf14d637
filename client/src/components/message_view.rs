//! A single conversation entry.

#[cfg(test)]
#[path = "message_view_test.rs"]
mod message_view_test;

use leptos::prelude::*;

use crate::state::session::{Message, Role};
use crate::util::clock;

const USER_ICON: &[&str] = &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z"];

const BOT_ICON: &[&str] = &[
    "M12 8V4H8",
    "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
    "M2 14h2",
    "M20 14h2",
    "M15 13v2",
    "M9 13v2",
];

/// SVG path data for the avatar of `role`, on a 24x24 grid.
pub fn icon_paths(role: Role) -> &'static [&'static str] {
    match role {
        Role::User => USER_ICON,
        Role::Ai => BOT_ICON,
    }
}

/// Accessible name of the avatar.
pub fn icon_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Ai => "AI",
    }
}

#[component]
pub fn RoleIcon(role: Role) -> impl IntoView {
    view! {
        <div class="chat-message__avatar" title=icon_label(role)>
            <svg
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                {icon_paths(role).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
            </svg>
        </div>
    }
}

#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;
    let is_ai = !is_user;
    let time = clock::format_time(message.timestamp);

    view! {
        <div class="chat-message" class:chat-message--user=is_user class:chat-message--ai=is_ai>
            <RoleIcon role=message.role/>
            <div class="chat-message__body">
                <p class="chat-message__text">{message.content}</p>
                <p class="chat-message__time">{time}</p>
            </div>
        </div>
    }
}
