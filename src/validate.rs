//! Field validation rules and the submit orchestrator
//!
//! Every tracked field pairs a pure predicate with its fixed error message
//! in [`VALIDATORS`]. Blur feedback looks up a single row; the submit path
//! iterates the whole table plus the structural checks, without
//! short-circuiting, so all applicable errors are displayed together.

use crate::state::{Focus, RegistrationForm};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").unwrap());

/// Special characters the password rule accepts
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

pub const FIRST_NAME_ERROR: &str = "First name should contain only letters.";
pub const LAST_NAME_ERROR: &str = "Last name should contain only letters.";
pub const USER_ID_ERROR: &str = "User ID must be at least 5 characters long.";
pub const EMAIL_ERROR: &str = "Enter a valid email address.";
pub const PHONE_ERROR: &str = "Enter a valid phone number (e.g., 123-456-7890).";
pub const AGE_ERROR: &str = "Age must be between 10 and 100.";
pub const BIRTH_DATE_ERROR: &str = "Date of Birth is required.";
pub const PASSWORD_ERROR: &str =
    "Password must be at least 6 chars and include a number & special char.";
pub const CONFIRM_PASSWORD_ERROR: &str = "Passwords do not match.";
pub const SUBJECTS_ERROR: &str = "Enter at least one subject to be uploaded.";
pub const GENDER_ERROR: &str = "Select your gender.";
pub const PROFILE_PICTURE_ERROR: &str = "Please upload a profile picture.";

pub const ERROR_STATUS: &str = "Please correct the errors above.";
pub const SUCCESS_STATUS: &str = "Registration successful! Thank you.";

/// Fields whose raw value is checked by a table validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    LastName,
    UserId,
    Email,
    Phone,
    Age,
    BirthDate,
    Password,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::UserId,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Age,
        FieldId::BirthDate,
        FieldId::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::UserId => "user_id",
            Self::Email => "email",
            Self::Phone => "phone_number",
            Self::Age => "age",
            Self::BirthDate => "date_of_birth",
            Self::Password => "password",
        }
    }
}

/// A pure pass/fail rule with its fixed on-screen message
pub struct Validator {
    pub field: FieldId,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Validation table, in submit order
pub const VALIDATORS: &[Validator] = &[
    Validator {
        field: FieldId::FirstName,
        check: letters_only,
        message: FIRST_NAME_ERROR,
    },
    Validator {
        field: FieldId::LastName,
        check: letters_only,
        message: LAST_NAME_ERROR,
    },
    Validator {
        field: FieldId::UserId,
        check: long_enough_user_id,
        message: USER_ID_ERROR,
    },
    Validator {
        field: FieldId::Email,
        check: well_formed_email,
        message: EMAIL_ERROR,
    },
    Validator {
        field: FieldId::Phone,
        check: well_formed_phone,
        message: PHONE_ERROR,
    },
    Validator {
        field: FieldId::Age,
        check: age_in_range,
        message: AGE_ERROR,
    },
    Validator {
        field: FieldId::BirthDate,
        check: present,
        message: BIRTH_DATE_ERROR,
    },
    Validator {
        field: FieldId::Password,
        check: strong_password,
        message: PASSWORD_ERROR,
    },
];

fn letters_only(value: &str) -> bool {
    NAME_PATTERN.is_match(value.trim())
}

fn long_enough_user_id(value: &str) -> bool {
    value.trim().chars().count() >= 5
}

fn well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn well_formed_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

fn age_in_range(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|age| (10.0..=100.0).contains(&age))
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn strong_password(value: &str) -> bool {
    value.chars().count() >= 6
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// One failed check, as recorded for logging
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: &'static str,
}

/// Run one table validator against its field, updating the error slot
fn apply(form: &mut RegistrationForm, validator: &Validator) -> bool {
    let field = form.field_mut(validator.field);
    if (validator.check)(&field.value) {
        field.error = None;
        true
    } else {
        field.error = Some(validator.message);
        false
    }
}

/// Instant feedback when focus leaves a field.
///
/// Only the simple value fields give blur feedback; the password rules and
/// the structural checks run on submit.
pub fn validate_on_blur(form: &mut RegistrationForm, focus: Focus) {
    let id = match focus {
        Focus::FirstName => FieldId::FirstName,
        Focus::LastName => FieldId::LastName,
        Focus::UserId => FieldId::UserId,
        Focus::Email => FieldId::Email,
        Focus::Phone => FieldId::Phone,
        Focus::Age => FieldId::Age,
        _ => return,
    };
    if let Some(validator) = VALIDATORS.iter().find(|v| v.field == id) {
        apply(form, validator);
    }
}

/// Comprehensive submit-time validation.
///
/// Clears all error slots, then runs every check regardless of earlier
/// failures and regardless of any blur-time results. Error slots are updated
/// in place; the returned list mirrors what is displayed. An empty list
/// means the submission is accepted.
pub fn run_submit(form: &mut RegistrationForm) -> Vec<ValidationFailure> {
    form.clear_errors();
    let mut failures = Vec::new();

    for validator in VALIDATORS {
        if !apply(form, validator) {
            failures.push(ValidationFailure {
                field: validator.field.name(),
                message: validator.message,
            });
        }
    }

    // Mismatch is only reported once the password itself is well formed
    if form.field(FieldId::Password).error.is_none()
        && form.password.input.value != form.confirm_password.input.value
    {
        form.confirm_password.input.error = Some(CONFIRM_PASSWORD_ERROR);
        failures.push(ValidationFailure {
            field: "confirm_password",
            message: CONFIRM_PASSWORD_ERROR,
        });
    }

    if form.subjects.non_empty_count() == 0 {
        form.subjects.error = Some(SUBJECTS_ERROR);
        failures.push(ValidationFailure {
            field: "subjects",
            message: SUBJECTS_ERROR,
        });
    }

    if form.gender.choice.is_none() {
        form.gender.error = Some(GENDER_ERROR);
        failures.push(ValidationFailure {
            field: "gender",
            message: GENDER_ERROR,
        });
    }

    if form.profile_picture.value.trim().is_empty() {
        form.profile_picture.error = Some(PROFILE_PICTURE_ERROR);
        failures.push(ValidationFailure {
            field: "profile_picture",
            message: PROFILE_PICTURE_ERROR,
        });
    }

    failures
}
