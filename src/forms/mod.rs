//! Request payload validation.
//!
//! Create forms require every field; update forms are all-`Option` so rules
//! are skipped for fields the caller did not send. Validation never panics
//! and never stops at the first violation: callers get the full ordered
//! list of field errors and decide how to surface it.

use serde::Serialize;
use validator::{Validate, ValidationError};

pub mod client;
pub mod order;
pub mod restaurant;

/// A single field-level violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Runs the derive-generated rules and flattens the outcome into a list of
/// [`FieldError`]s sorted by field name, so the order is stable across
/// runs.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), Vec<FieldError>> {
    let errors = match form.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| FieldError {
                field: field.to_string(),
                message: violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    Err(field_errors)
}

/// Accepts internationally formatted phone numbers, e.g. `+34600111222`.
pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match phonenumber::parse(None, phone) {
        Ok(number) if phonenumber::is_valid(&number) => Ok(()),
        _ => Err(ValidationError::new("phone")),
    }
}
