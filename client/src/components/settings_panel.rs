//! Settings column: API key, developer message, model and chat reset.
//!
//! Edits write straight into the in-memory `Settings`; nothing is validated
//! here beyond parsing the model select.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::settings::{Model, Settings};
use crate::state::ui::UiState;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = expect_context::<RwSignal<Settings>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_model_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Model>() {
        Ok(model) => settings.update(|s| s.model = model),
        Err(e) => leptos::logging::warn!("ignoring model selection: {e}"),
    };

    view! {
        <aside class="settings-panel card">
            <div class="settings-panel__header">
                <h2 class="settings-panel__title">"Settings"</h2>
                <button
                    class="btn btn--ghost settings-panel__toggle"
                    title="Toggle settings"
                    on:click=move |_| ui.update(UiState::toggle_settings)
                >
                    {move || if ui.with(|u| u.settings_open) { "Hide" } else { "Show" }}
                </button>
            </div>

            <Show when=move || ui.with(|u| u.settings_open)>
                <div class="settings-panel__fields">
                    <label class="settings-panel__field">
                        <span class="settings-panel__label">"OpenAI API Key"</span>
                        <input
                            class="input-field"
                            type="password"
                            placeholder="sk-..."
                            prop:value=move || settings.with(|s| s.api_key.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|s| s.api_key = value);
                            }
                        />
                    </label>

                    <label class="settings-panel__field">
                        <span class="settings-panel__label">"Developer Message"</span>
                        <textarea
                            class="input-field settings-panel__textarea"
                            rows="3"
                            placeholder="System instructions for the AI..."
                            prop:value=move || settings.with(|s| s.developer_message.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|s| s.developer_message = value);
                            }
                        ></textarea>
                    </label>

                    <label class="settings-panel__field">
                        <span class="settings-panel__label">"Model"</span>
                        <select
                            class="input-field"
                            prop:value=move || settings.with(|s| s.model.as_str())
                            on:change=on_model_change
                        >
                            {Model::ALL
                                .into_iter()
                                .map(|model| {
                                    view! {
                                        <option
                                            value=model.as_str()
                                            selected=move || settings.with(|s| s.model == model)
                                        >
                                            {model.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <button class="btn btn--secondary settings-panel__clear" on:click=move |_| {
                        session.update(SessionState::clear_messages);
                    }>
                        "Clear Chat"
                    </button>
                </div>
            </Show>
        </aside>
    }
}
