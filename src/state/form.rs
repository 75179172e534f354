//! Registration form state and focus traversal

use super::field::{GenderField, PasswordField, TextField};
use super::subjects::SubjectList;
use crate::validate::FieldId;

/// Where keyboard input is currently directed.
///
/// `Subject` indexes into the dynamic subject list, so traversal is computed
/// against the current list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FirstName,
    LastName,
    UserId,
    Email,
    Phone,
    Age,
    BirthDate,
    Password,
    ConfirmPassword,
    Gender,
    Subject(usize),
    ProfilePicture,
    Submit,
}

impl Focus {
    /// Next focus position in fixed form order (wraps)
    pub fn next(self, subject_count: usize) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::UserId,
            Self::UserId => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Age,
            Self::Age => Self::BirthDate,
            Self::BirthDate => Self::Password,
            Self::Password => Self::ConfirmPassword,
            Self::ConfirmPassword => Self::Gender,
            Self::Gender => Self::Subject(0),
            Self::Subject(index) if index + 1 < subject_count => Self::Subject(index + 1),
            Self::Subject(_) => Self::ProfilePicture,
            Self::ProfilePicture => Self::Submit,
            Self::Submit => Self::FirstName,
        }
    }

    /// Previous focus position (wraps)
    pub fn prev(self, subject_count: usize) -> Self {
        match self {
            Self::FirstName => Self::Submit,
            Self::LastName => Self::FirstName,
            Self::UserId => Self::LastName,
            Self::Email => Self::UserId,
            Self::Phone => Self::Email,
            Self::Age => Self::Phone,
            Self::BirthDate => Self::Age,
            Self::Password => Self::BirthDate,
            Self::ConfirmPassword => Self::Password,
            Self::Gender => Self::ConfirmPassword,
            Self::Subject(0) => Self::Gender,
            Self::Subject(index) => Self::Subject(index - 1),
            Self::ProfilePicture => Self::Subject(subject_count.saturating_sub(1)),
            Self::Submit => Self::ProfilePicture,
        }
    }
}

/// The whole form's state: one owned struct passed to every handler,
/// rather than ambient globals.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: TextField,
    pub last_name: TextField,
    pub user_id: TextField,
    pub email: TextField,
    pub phone: TextField,
    pub age: TextField,
    pub birth_date: TextField,
    pub password: PasswordField,
    pub confirm_password: PasswordField,
    pub gender: GenderField,
    pub subjects: SubjectList,
    pub profile_picture: TextField,
    pub focus: Focus,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field lookup used by the validator table
    pub fn field(&self, id: FieldId) -> &TextField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::UserId => &self.user_id,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Age => &self.age,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Password => &self.password.input,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut TextField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::UserId => &mut self.user_id,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Age => &mut self.age,
            FieldId::BirthDate => &mut self.birth_date,
            FieldId::Password => &mut self.password.input,
        }
    }

    /// Move focus to the next form position
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.subjects.len());
    }

    /// Move focus to the previous form position
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.subjects.len());
    }

    /// Route a typed character to the focused input, if it takes text
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Gender | Focus::Submit => {}
            Focus::Subject(index) => {
                if let Some(entry) = self.subjects.get_mut(index) {
                    entry.value.push(c);
                }
            }
            _ => {
                if let Some(field) = self.focused_field_mut() {
                    field.push_char(c);
                }
            }
        }
    }

    /// Remove the last character from the focused input
    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Gender | Focus::Submit => {}
            Focus::Subject(index) => {
                if let Some(entry) = self.subjects.get_mut(index) {
                    entry.value.pop();
                }
            }
            _ => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop_char();
                }
            }
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::FirstName => Some(&mut self.first_name),
            Focus::LastName => Some(&mut self.last_name),
            Focus::UserId => Some(&mut self.user_id),
            Focus::Email => Some(&mut self.email),
            Focus::Phone => Some(&mut self.phone),
            Focus::Age => Some(&mut self.age),
            Focus::BirthDate => Some(&mut self.birth_date),
            Focus::Password => Some(&mut self.password.input),
            Focus::ConfirmPassword => Some(&mut self.confirm_password.input),
            Focus::ProfilePicture => Some(&mut self.profile_picture),
            Focus::Gender | Focus::Subject(_) | Focus::Submit => None,
        }
    }

    /// Clear every error slot before a comprehensive re-check
    pub fn clear_errors(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).error = None;
        }
        self.confirm_password.input.error = None;
        self.gender.error = None;
        self.subjects.error = None;
        self.profile_picture.error = None;
    }

    /// Reset to the initial state after a successful submission.
    ///
    /// Visibility toggles keep their current position.
    pub fn reset(&mut self) {
        let password_visibility = self.password.visibility;
        let confirm_visibility = self.confirm_password.visibility;
        *self = Self::default();
        self.password.visibility = password_visibility;
        self.confirm_password.visibility = confirm_visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Visibility;
    use pretty_assertions::assert_eq;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_traversal_visits_every_position_and_wraps() {
            let order = [
                Focus::FirstName,
                Focus::LastName,
                Focus::UserId,
                Focus::Email,
                Focus::Phone,
                Focus::Age,
                Focus::BirthDate,
                Focus::Password,
                Focus::ConfirmPassword,
                Focus::Gender,
                Focus::Subject(0),
                Focus::ProfilePicture,
                Focus::Submit,
            ];
            let mut focus = Focus::default();
            for expected in order {
                assert_eq!(focus, expected);
                focus = focus.next(1);
            }
            assert_eq!(focus, Focus::FirstName);
        }

        #[test]
        fn test_next_walks_all_subject_entries() {
            let mut focus = Focus::Gender;
            focus = focus.next(3);
            assert_eq!(focus, Focus::Subject(0));
            focus = focus.next(3);
            assert_eq!(focus, Focus::Subject(1));
            focus = focus.next(3);
            assert_eq!(focus, Focus::Subject(2));
            focus = focus.next(3);
            assert_eq!(focus, Focus::ProfilePicture);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            let count = 2;
            let mut focus = Focus::default();
            for _ in 0..14 {
                let advanced = focus.next(count);
                assert_eq!(advanced.prev(count), focus);
                focus = advanced;
            }
        }

        #[test]
        fn test_prev_from_picture_lands_on_last_subject() {
            assert_eq!(Focus::ProfilePicture.prev(3), Focus::Subject(2));
            assert_eq!(Focus::ProfilePicture.prev(1), Focus::Subject(0));
        }
    }

    mod input_routing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_chars_go_to_focused_field() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::Email;
            form.input_char('a');
            form.input_char('@');
            assert_eq!(form.email.value, "a@");
            assert_eq!(form.first_name.value, "");
        }

        #[test]
        fn test_chars_go_to_focused_subject_entry() {
            let mut form = RegistrationForm::new();
            form.subjects.add_entry("");
            form.focus = Focus::Subject(1);
            form.input_char('M');
            assert_eq!(form.subjects.get(1).unwrap().value, "M");
            assert_eq!(form.subjects.get(0).unwrap().value, "");
        }

        #[test]
        fn test_chars_ignored_on_gender_and_submit() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::Gender;
            form.input_char('x');
            form.focus = Focus::Submit;
            form.input_char('y');
            assert_eq!(form.first_name.value, "");
        }

        #[test]
        fn test_backspace_pops_from_focused_input() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::Password;
            form.input_char('a');
            form.input_char('b');
            form.backspace();
            assert_eq!(form.password.input.value, "a");
        }

        #[test]
        fn test_backspace_on_stale_subject_index_is_noop() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::Subject(5);
            form.backspace();
            assert_eq!(form.subjects.len(), 1);
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        fn filled_form() -> RegistrationForm {
            let mut form = RegistrationForm::new();
            form.first_name.value = "Ada".to_string();
            form.age.value = "30".to_string();
            form.age.error = Some("bad");
            form.password.input.value = "abc123!".to_string();
            form.gender.select_next();
            form.subjects.get_mut(0).unwrap().value = "Math".to_string();
            form.subjects.add_entry("Physics");
            form.profile_picture.value = "me.png".to_string();
            form.focus = Focus::Submit;
            form
        }

        #[test]
        fn test_reset_clears_values_errors_and_subjects() {
            let mut form = filled_form();
            form.reset();
            assert_eq!(form.first_name.value, "");
            assert!(form.age.error.is_none());
            assert_eq!(form.password.input.value, "");
            assert!(form.gender.choice.is_none());
            assert_eq!(form.subjects.len(), 1);
            assert_eq!(form.subjects.get(0).unwrap().value, "");
            assert_eq!(form.profile_picture.value, "");
            assert_eq!(form.focus, Focus::FirstName);
        }

        #[test]
        fn test_reset_preserves_visibility_toggles() {
            let mut form = filled_form();
            form.password.toggle_visibility();
            form.reset();
            assert_eq!(form.password.visibility, Visibility::Visible);
            assert_eq!(form.confirm_password.visibility, Visibility::Hidden);
        }

        #[test]
        fn test_clear_errors_leaves_values_alone() {
            let mut form = filled_form();
            form.confirm_password.input.error = Some("bad");
            form.gender.error = Some("bad");
            form.subjects.error = Some("bad");
            form.profile_picture.error = Some("bad");
            form.clear_errors();
            assert!(form.age.error.is_none());
            assert!(form.confirm_password.input.error.is_none());
            assert!(form.gender.error.is_none());
            assert!(form.subjects.error.is_none());
            assert!(form.profile_picture.error.is_none());
            assert_eq!(form.first_name.value, "Ada");
        }
    }
}
