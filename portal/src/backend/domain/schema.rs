//! Declarative form schemas.
//!
//! Each registration form is described once as an ordered set of
//! [`FieldSpec`]s. Services validate a command by walking its schema and
//! pulling field values through the [`FormFields`] accessor, so the
//! constraint set is defined in exactly one place for any consumer,
//! whether that is the in-process UI or a future server-side check.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Permissive international phone pattern.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$").expect("phone pattern"));

pub const PHONE_MIN: usize = 7;
pub const PHONE_MAX: usize = 20;

/// Constraint attached to a single form field.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Required text with inclusive character-length bounds.
    Text { min: usize, max: usize },
    /// Optional text capped at `max` characters; absent passes.
    OptionalText { max: usize },
    /// Permissive email shape.
    Email,
    /// Phone number: 7-20 characters matching the permissive pattern.
    Phone,
    /// Integer within an inclusive range.
    IntRange { min: i64, max: i64 },
    /// Membership in a fixed choice set.
    OneOf { options: &'static [&'static str] },
    /// Multi-select with a minimum selection count.
    MinSelected { min: usize },
    /// Policy gate: must be exactly true to submit.
    Consent,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub constraint: Constraint,
}

/// One form's complete constraint set.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub form: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A field value as seen by the validator.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
    Int(i64),
    Choice(&'a str),
    Count(usize),
    Flag(bool),
    /// The form does not carry this field; always a validation error.
    Missing,
}

/// Accessor a form command implements so a schema can read its fields
/// by name.
pub trait FormFields {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// A single failed field, with a user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation. Submission is blocked while this
/// is non-empty; no storage write happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == name)
    }
}

impl FormSchema {
    /// Check every field of `form` against this schema. All failures are
    /// collected, not just the first.
    pub fn validate(&self, form: &dyn FormFields) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        for spec in self.fields {
            let value = form.field(spec.name);
            if let Some(message) = check(spec.constraint, value) {
                errors.push(FieldError {
                    field: spec.name,
                    message,
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            debug!(
                "{} validation failed on {} field(s)",
                self.form,
                errors.len()
            );
            Err(ValidationErrors { errors })
        }
    }
}

fn check(constraint: Constraint, value: FieldValue<'_>) -> Option<String> {
    match (constraint, value) {
        (Constraint::Text { min, max }, FieldValue::Text(s)) => {
            let len = s.chars().count();
            if len < min {
                Some(format!("must be at least {} characters", min))
            } else if len > max {
                Some(format!("must be at most {} characters", max))
            } else {
                None
            }
        }
        (Constraint::OptionalText { max }, FieldValue::OptionalText(opt)) => match opt {
            Some(s) if s.chars().count() > max => {
                Some(format!("must be at most {} characters", max))
            }
            _ => None,
        },
        (Constraint::Email, FieldValue::Text(s)) => {
            if is_valid_email(s) {
                None
            } else {
                Some("enter a valid email".to_string())
            }
        }
        (Constraint::Phone, FieldValue::Text(s)) => {
            let len = s.chars().count();
            if !(PHONE_MIN..=PHONE_MAX).contains(&len) {
                Some(format!(
                    "must be between {} and {} characters",
                    PHONE_MIN, PHONE_MAX
                ))
            } else if !PHONE_RE.is_match(s) {
                Some("enter a valid phone number".to_string())
            } else {
                None
            }
        }
        (Constraint::IntRange { min, max }, FieldValue::Int(n)) => {
            if n < min {
                Some(format!("must be at least {}", min))
            } else if n > max {
                Some(format!("must be at most {}", max))
            } else {
                None
            }
        }
        (Constraint::OneOf { options }, FieldValue::Choice(c)) => {
            if options.contains(&c) {
                None
            } else {
                Some(format!("must be one of: {}", options.join(", ")))
            }
        }
        (Constraint::MinSelected { min }, FieldValue::Count(n)) => {
            if n < min {
                Some(format!("select at least {}", min))
            } else {
                None
            }
        }
        (Constraint::Consent, FieldValue::Flag(true)) => None,
        (Constraint::Consent, FieldValue::Flag(false)) => Some("consent is required".to_string()),
        _ => Some("field is missing or has the wrong shape".to_string()),
    }
}

/// Permissive email shape: one `@`, a non-empty local part, a dotted
/// domain, no whitespace.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// The fixed choice sets used by the form schemas. Kept in sync with the
/// shared enums (see the tests below).
pub static BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub static GENDERS: [&str; 3] = ["male", "female", "other"];
pub static STAFF_ROLES: [&str; 5] = ["doctor", "nurse", "coordinator", "admin", "other"];
pub static ORG_TYPES: [&str; 2] = ["NGO", "Government"];

/// The four registration form schemas.
pub mod forms {
    use super::{Constraint, FieldSpec, FormSchema, BLOOD_GROUPS, GENDERS, ORG_TYPES, STAFF_ROLES};

    pub static DONOR_SIGNUP: FormSchema = FormSchema {
        form: "donor-signup",
        fields: &[
            FieldSpec { name: "fullName", constraint: Constraint::Text { min: 2, max: 100 } },
            FieldSpec { name: "email", constraint: Constraint::Email },
            FieldSpec { name: "phone", constraint: Constraint::Phone },
            FieldSpec { name: "age", constraint: Constraint::IntRange { min: 18, max: 100 } },
            FieldSpec { name: "gender", constraint: Constraint::OneOf { options: &GENDERS } },
            FieldSpec { name: "bloodGroup", constraint: Constraint::OneOf { options: &BLOOD_GROUPS } },
            FieldSpec { name: "address", constraint: Constraint::Text { min: 10, max: 300 } },
            FieldSpec { name: "organs", constraint: Constraint::MinSelected { min: 1 } },
            FieldSpec { name: "emergencyName", constraint: Constraint::Text { min: 2, max: 100 } },
            FieldSpec { name: "emergencyPhone", constraint: Constraint::Phone },
            FieldSpec { name: "consent", constraint: Constraint::Consent },
        ],
    };

    pub static RECIPIENT_SIGNUP: FormSchema = FormSchema {
        form: "recipient-signup",
        fields: &[
            FieldSpec { name: "fullName", constraint: Constraint::Text { min: 2, max: 100 } },
            FieldSpec { name: "email", constraint: Constraint::Email },
            FieldSpec { name: "phone", constraint: Constraint::Phone },
            FieldSpec { name: "age", constraint: Constraint::IntRange { min: 0, max: 120 } },
            FieldSpec { name: "gender", constraint: Constraint::OneOf { options: &GENDERS } },
            FieldSpec { name: "bloodGroup", constraint: Constraint::OneOf { options: &BLOOD_GROUPS } },
            FieldSpec { name: "address", constraint: Constraint::Text { min: 10, max: 300 } },
            FieldSpec { name: "needDetails", constraint: Constraint::Text { min: 10, max: 500 } },
            FieldSpec { name: "consent", constraint: Constraint::Consent },
        ],
    };

    pub static STAFF_SIGNUP: FormSchema = FormSchema {
        form: "staff-signup",
        fields: &[
            FieldSpec { name: "hospitalName", constraint: Constraint::Text { min: 2, max: 120 } },
            FieldSpec { name: "staffName", constraint: Constraint::Text { min: 2, max: 100 } },
            FieldSpec { name: "role", constraint: Constraint::OneOf { options: &STAFF_ROLES } },
            FieldSpec { name: "email", constraint: Constraint::Email },
            FieldSpec { name: "phone", constraint: Constraint::Phone },
            FieldSpec { name: "hospitalRegId", constraint: Constraint::Text { min: 3, max: 50 } },
            FieldSpec { name: "address", constraint: Constraint::Text { min: 10, max: 300 } },
            FieldSpec { name: "notes", constraint: Constraint::OptionalText { max: 500 } },
            FieldSpec { name: "consent", constraint: Constraint::Consent },
        ],
    };

    pub static ORGANIZATION_SIGNUP: FormSchema = FormSchema {
        form: "organization-signup",
        fields: &[
            FieldSpec { name: "orgType", constraint: Constraint::OneOf { options: &ORG_TYPES } },
            FieldSpec { name: "organizationName", constraint: Constraint::Text { min: 2, max: 120 } },
            FieldSpec { name: "registrationId", constraint: Constraint::Text { min: 3, max: 60 } },
            FieldSpec { name: "contactName", constraint: Constraint::Text { min: 2, max: 100 } },
            FieldSpec { name: "email", constraint: Constraint::Email },
            FieldSpec { name: "phone", constraint: Constraint::Phone },
            FieldSpec { name: "address", constraint: Constraint::Text { min: 10, max: 300 } },
            FieldSpec { name: "about", constraint: Constraint::OptionalText { max: 500 } },
            FieldSpec { name: "consent", constraint: Constraint::Consent },
        ],
    };
}
