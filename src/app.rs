//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FocusTarget, Form};
use crate::submit::{LogSubmitHandler, SubmitHandler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives validated submissions
    handler: Box<dyn SubmitHandler>,
    /// Event poll timeout from config
    poll_interval: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the logging submit handler
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        Ok(Self::with_handler(config, Box::new(LogSubmitHandler)))
    }

    /// Create an App with an explicit submit handler
    pub fn with_handler(config: TuiConfig, handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::new(config.show_preview()),
            handler,
            poll_interval: Duration::from_millis(config.poll_interval_ms()),
            quit: false,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let target = self.state.form.active_target();
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.blur_active();
                self.state.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.blur_active();
                self.state.form.prev_field();
            }
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Enter => self.activate(target),
            KeyCode::Char(' ') if !target.is_text() => self.activate(target),
            KeyCode::Char(c) => self.state.form.push_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Enter/Space on the focused control
    fn activate(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::GenderOption(gender) => self.state.form.select_gender(gender),
            FocusTarget::PreferenceOption(preference) => {
                self.state.form.toggle_preference(preference);
            }
            FocusTarget::PetType(index) => self.state.form.cycle_pet_type(index),
            FocusTarget::AddPet => self.state.form.add_pet(),
            FocusTarget::PetRemove(index) => self.state.form.remove_pet(index),
            FocusTarget::Submit => self.submit(),
            _ => {}
        }
    }

    /// Validate everything and hand a snapshot to the submit handler.
    ///
    /// The form resets to defaults only when the handler succeeds; validation
    /// failure leaves the values in place with every path touched so the
    /// inline messages show.
    fn submit(&mut self) {
        if self.state.form.submitting {
            return;
        }
        self.state.form.touch_all();
        self.state.form.revalidate();
        if !self.state.form.errors.is_empty() {
            let count = self.state.form.errors.len();
            self.state.set_status(format!("{count} field(s) need attention"));
            return;
        }

        self.state.form.submitting = true;
        let snapshot = self.state.form.values.clone();
        let result = self.handler.submit(&snapshot);
        self.state.form.submitting = false;

        match result {
            Ok(()) => {
                self.state.form.reset();
                self.state.set_status("Submitted!");
            }
            Err(err) => self.state.set_status(format!("Submission failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormValues, Gender, Preference};
    use crate::submit::{MockSubmitHandler, SubmitError};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(handler: Box<dyn SubmitHandler>) -> App {
        App::with_handler(TuiConfig::default(), handler)
    }

    fn focus(app: &mut App, target: FocusTarget) {
        let index = app
            .state
            .form
            .targets()
            .iter()
            .position(|t| *t == target)
            .expect("target present");
        app.state.form.set_active_field(index);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill_valid(app: &mut App) {
        focus(app, FocusTarget::LastName);
        type_str(app, "Doe");
        focus(app, FocusTarget::Email);
        type_str(app, "a@b.com");
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        type_str(&mut app, "Jane");
        assert_eq!(app.state.form.values.first_name, "Jane");
    }

    #[test]
    fn test_tab_moves_focus_and_marks_blur() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.form.active_target(), FocusTarget::LastName);
        assert!(app.state.form.touched.contains("firstName"));
    }

    #[test]
    fn test_space_toggles_focused_checkbox() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        focus(&mut app, FocusTarget::PreferenceOption(Preference::Toffee));
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.state.form.values.preferences, vec![Preference::Toffee]);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.state.form.values.preferences.is_empty());
    }

    #[test]
    fn test_space_types_into_text_field() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        type_str(&mut app, "a b");
        assert_eq!(app.state.form.values.first_name, "a b");
    }

    #[test]
    fn test_enter_selects_focused_radio() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        focus(&mut app, FocusTarget::GenderOption(Gender::Female));
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.values.gender, Gender::Female);
    }

    #[test]
    fn test_enter_on_add_pet_appends_row() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        focus(&mut app, FocusTarget::AddPet);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.values.pets.len(), 1);
    }

    #[test]
    fn test_enter_on_remove_deletes_row() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        app.state.form.add_pet();
        app.state.form.add_pet();
        focus(&mut app, FocusTarget::PetRemove(0));
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.values.pets.len(), 1);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = test_app(Box::new(MockSubmitHandler::new()));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_submit_with_valid_values_resets_form() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_submit()
            .withf(|values: &FormValues| {
                values.last_name == "Doe" && values.email == "a@b.com"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut app = test_app(Box::new(handler));
        fill_valid(&mut app);

        focus(&mut app, FocusTarget::Submit);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.state.form.values, FormValues::default());
        assert!(app.state.form.errors.is_empty());
        assert_eq!(app.state.status_message.as_deref(), Some("Submitted!"));
    }

    #[test]
    fn test_submit_with_pet_rows_requires_names() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().times(0);
        let mut app = test_app(Box::new(handler));
        fill_valid(&mut app);
        app.state.form.add_pet();

        focus(&mut app, FocusTarget::Submit);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(app.state.form.errors.contains_key("pets.0.name"));
        assert_ne!(app.state.form.values, FormValues::default());
    }

    #[test]
    fn test_blocked_submit_touches_everything() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().times(0);
        let mut app = test_app(Box::new(handler));

        focus(&mut app, FocusTarget::Submit);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(app.state.form.touched.contains("lastName"));
        assert!(app.state.form.touched.contains("email"));
        assert!(app
            .state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("need attention")));
    }

    #[test]
    fn test_handler_failure_keeps_values() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::Rejected("nope".to_string())));
        let mut app = test_app(Box::new(handler));
        fill_valid(&mut app);

        focus(&mut app, FocusTarget::Submit);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.state.form.values.last_name, "Doe");
        assert!(app
            .state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("Submission failed")));
        assert!(!app.state.form.submitting);
    }

    #[test]
    fn test_submit_shortcut_works_from_any_field() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = test_app(Box::new(handler));
        fill_valid(&mut app);

        focus(&mut app, FocusTarget::FirstName);
        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            platform::SUBMIT_MODIFIER,
        ))
        .unwrap();

        assert_eq!(app.state.status_message.as_deref(), Some("Submitted!"));
    }
}
