//! Application state definitions

use super::forms::SignupForm;

/// Top-level mutable state behind the rendered UI
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The signup form, the app's single view
    pub form: SignupForm,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the values/errors JSON panel is rendered
    pub show_preview: bool,
}

impl AppState {
    pub fn new(show_preview: bool) -> Self {
        Self {
            form: SignupForm::new(),
            status_message: None,
            show_preview,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
