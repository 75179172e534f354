//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, Focus, StatusMessage};
use crate::validate::{self, ERROR_STATUS, SUCCESS_STATUS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config: {err}");
            TuiConfig::default()
        });
        Self::with_config(config)
    }

    /// Create an App with an explicit configuration
    pub fn with_config(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_gender = matches!(self.state.form.focus, Focus::Gender);

        match key.code {
            // Submit works from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('n') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.add_subject();
            }
            KeyCode::Char('d') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.remove_focused_subject();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.advance_focus(),
            KeyCode::BackTab | KeyCode::Up => self.retreat_focus(),
            KeyCode::F(2) => self.toggle_password_visibility(),
            KeyCode::Enter if matches!(self.state.form.focus, Focus::Submit) => self.submit(),
            KeyCode::Enter => self.advance_focus(),
            KeyCode::Right | KeyCode::Char(' ') if on_gender => {
                self.state.form.gender.select_next();
            }
            KeyCode::Left if on_gender => self.state.form.gender.select_prev(),
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Move focus forward, giving instant feedback for the field being left
    fn advance_focus(&mut self) {
        let left = self.state.form.focus;
        validate::validate_on_blur(&mut self.state.form, left);
        self.state.form.focus_next();
    }

    /// Move focus backward, giving instant feedback for the field being left
    fn retreat_focus(&mut self) {
        let left = self.state.form.focus;
        validate::validate_on_blur(&mut self.state.form, left);
        self.state.form.focus_prev();
    }

    /// Flip visibility of the focused password field; the other one is
    /// never affected
    fn toggle_password_visibility(&mut self) {
        match self.state.form.focus {
            Focus::Password => self.state.form.password.toggle_visibility(),
            Focus::ConfirmPassword => self.state.form.confirm_password.toggle_visibility(),
            _ => {}
        }
    }

    /// Append a subject entry and move focus to it
    fn add_subject(&mut self) {
        let form = &mut self.state.form;
        form.subjects.add_entry("");
        form.focus = Focus::Subject(form.subjects.len() - 1);
        tracing::debug!(count = form.subjects.len(), "subject entry added");
    }

    /// Remove the focused subject entry; the last remaining entry stays
    fn remove_focused_subject(&mut self) {
        let form = &mut self.state.form;
        let Focus::Subject(index) = form.focus else {
            return;
        };
        let Some(id) = form.subjects.get(index).map(|entry| entry.id()) else {
            return;
        };
        form.subjects.remove_entry(id);
        form.focus = Focus::Subject(index.min(form.subjects.len() - 1));
        tracing::debug!(count = form.subjects.len(), "subject entry removed");
    }

    /// Run the comprehensive submit-time validation and show the outcome
    fn submit(&mut self) {
        self.state.status = None;
        let failures = validate::run_submit(&mut self.state.form);
        if failures.is_empty() {
            self.state.status = Some(StatusMessage::success(SUCCESS_STATUS));
            self.state.form.reset();
            tracing::info!("registration accepted");
        } else {
            for failure in &failures {
                tracing::debug!(%failure, "validation failed");
            }
            self.state.status = Some(StatusMessage::error(ERROR_STATUS));
        }
    }
}
