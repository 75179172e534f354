//! Application state definitions

use super::form::RegistrationForm;

/// Visual style of the aggregate status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

/// The single summary line shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn error(text: &'static str) -> Self {
        Self {
            text,
            kind: StatusKind::Error,
        }
    }

    pub fn success(text: &'static str) -> Self {
        Self {
            text,
            kind: StatusKind::Success,
        }
    }
}

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The registration form being filled in
    pub form: RegistrationForm,
    /// Aggregate outcome line from the last submit attempt
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: RegistrationForm::new(),
            status: None,
        }
    }
}
