//! Local UI chrome state.
//!
//! Keeps presentation toggles out of `session` and `settings` so the panel
//! layout can change without touching conversation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Panel visibility for the chat page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the settings fields are rendered.
    pub settings_open: bool,
}

impl UiState {
    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }
}
