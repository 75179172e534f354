//! Form field value objects

/// A single text input: the raw value plus its validation error slot.
///
/// The error slot is written only by the field's validator — set to the
/// fixed message on a failed check, cleared on a passing one.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    pub error: Option<&'static str>,
}

impl TextField {
    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any displayed error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Display state for a password field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        };
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// A text field rendered masked or plain depending on its own toggle.
///
/// The toggle changes presentation only; the stored value is untouched.
#[derive(Debug, Clone, Default)]
pub struct PasswordField {
    pub input: TextField,
    pub visibility: Visibility,
}

impl PasswordField {
    /// Flip this field's visibility; other fields are unaffected
    pub fn toggle_visibility(&mut self) {
        self.visibility.toggle();
    }
}

/// Mutually exclusive gender options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Radio-group style selection: at most one option, none selected initially
#[derive(Debug, Clone, Default)]
pub struct GenderField {
    pub choice: Option<Gender>,
    pub error: Option<&'static str>,
}

impl GenderField {
    /// Select the next option, wrapping; starts at the first when empty
    pub fn select_next(&mut self) {
        self.choice = Some(match self.choice {
            None | Some(Gender::Other) => Gender::Male,
            Some(Gender::Male) => Gender::Female,
            Some(Gender::Female) => Gender::Other,
        });
    }

    /// Select the previous option, wrapping; starts at the last when empty
    pub fn select_prev(&mut self) {
        self.choice = Some(match self.choice {
            None | Some(Gender::Male) => Gender::Other,
            Some(Gender::Female) => Gender::Male,
            Some(Gender::Other) => Gender::Female,
        });
    }

    /// Clear the selection and any displayed error
    pub fn clear(&mut self) {
        self.choice = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod text_field {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let field = TextField::default();
            assert_eq!(field.value, "");
            assert!(field.error.is_none());
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut field = TextField::default();
            field.push_char('h');
            field.push_char('i');
            assert_eq!(field.value, "hi");
            field.pop_char();
            assert_eq!(field.value, "h");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut field = TextField::default();
            field.pop_char();
            assert_eq!(field.value, "");
        }

        #[test]
        fn test_clear_resets_value_and_error() {
            let mut field = TextField::default();
            field.push_char('x');
            field.error = Some("bad");
            field.clear();
            assert_eq!(field.value, "");
            assert!(field.error.is_none());
        }
    }

    mod visibility {
        use super::*;

        #[test]
        fn test_default_is_hidden() {
            assert_eq!(Visibility::default(), Visibility::Hidden);
        }

        #[test]
        fn test_toggle_twice_restores_state() {
            let mut visibility = Visibility::Hidden;
            visibility.toggle();
            assert_eq!(visibility, Visibility::Visible);
            visibility.toggle();
            assert_eq!(visibility, Visibility::Hidden);
        }

        #[test]
        fn test_toggle_keeps_value_intact() {
            let mut field = PasswordField::default();
            field.input.push_char('s');
            field.input.push_char('3');
            field.toggle_visibility();
            assert_eq!(field.input.value, "s3");
            assert_eq!(field.visibility, Visibility::Visible);
        }

        #[test]
        fn test_is_hidden() {
            assert!(Visibility::Hidden.is_hidden());
            assert!(!Visibility::Visible.is_hidden());
        }
    }

    mod gender_field {
        use super::*;

        #[test]
        fn test_default_has_no_choice() {
            let field = GenderField::default();
            assert!(field.choice.is_none());
            assert!(field.error.is_none());
        }

        #[test]
        fn test_select_next_cycles() {
            let mut field = GenderField::default();
            field.select_next();
            assert_eq!(field.choice, Some(Gender::Male));
            field.select_next();
            assert_eq!(field.choice, Some(Gender::Female));
            field.select_next();
            assert_eq!(field.choice, Some(Gender::Other));
            field.select_next();
            assert_eq!(field.choice, Some(Gender::Male));
        }

        #[test]
        fn test_select_prev_from_empty_starts_at_last() {
            let mut field = GenderField::default();
            field.select_prev();
            assert_eq!(field.choice, Some(Gender::Other));
        }

        #[test]
        fn test_clear() {
            let mut field = GenderField::default();
            field.select_next();
            field.error = Some("bad");
            field.clear();
            assert!(field.choice.is_none());
            assert!(field.error.is_none());
        }

        #[test]
        fn test_labels() {
            assert_eq!(Gender::Male.label(), "Male");
            assert_eq!(Gender::Female.label(), "Female");
            assert_eq!(Gender::Other.label(), "Other");
        }
    }
}
