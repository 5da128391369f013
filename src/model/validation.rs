//! Credential validation rules (pure).
//!
//! Both fields are always checked; there is no short-circuit between them.
//! Within a field the first failing rule wins, with [`ValidationRule::Required`]
//! checked before [`ValidationRule::TooShort`].

use crate::model::credentials::{Credentials, Field};
use std::fmt;

/// Minimum username length in characters, measured after trimming.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length in characters. Whitespace counts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A rule a field value can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// The value is empty (for the username: empty after trimming).
    Required,
    /// The value is non-empty but below the minimum length.
    TooShort,
}

/// A single failed rule on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Field that failed.
    pub field: Field,
    /// Rule that failed.
    pub rule: ValidationRule,
}

impl ValidationError {
    /// Create an error for `field` failing `rule`.
    pub fn new(field: Field, rule: ValidationRule) -> Self {
        Self { field, rule }
    }

    /// Human-readable message shown next to the field.
    pub fn message(&self) -> &'static str {
        match (self.field, self.rule) {
            (Field::Username, ValidationRule::Required) => "Please enter your username",
            (Field::Username, ValidationRule::TooShort) => {
                "Username must be at least 3 characters"
            }
            (Field::Password, ValidationRule::Required) => "Please enter your password",
            (Field::Password, ValidationRule::TooShort) => {
                "Password must be at least 6 characters"
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Outcome of validating one credential pair.
///
/// Errors are ordered username first, then password, with at most one
/// error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors, in field order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The error for `field`, if it failed.
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Validate a credential pair.
///
/// Pure function over the two input strings.
pub fn validate(credentials: &Credentials) -> ValidationResult {
    let errors = [
        (Field::Username, check_username(&credentials.username)),
        (Field::Password, check_password(&credentials.password)),
    ]
    .into_iter()
    .filter_map(|(field, failed)| failed.map(|rule| ValidationError::new(field, rule)))
    .collect();

    ValidationResult { errors }
}

fn check_username(raw: &str) -> Option<ValidationRule> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Some(ValidationRule::Required)
    } else if trimmed.chars().count() < MIN_USERNAME_LEN {
        Some(ValidationRule::TooShort)
    } else {
        None
    }
}

fn check_password(raw: &str) -> Option<ValidationRule> {
    if raw.is_empty() {
        Some(ValidationRule::Required)
    } else if raw.chars().count() < MIN_PASSWORD_LEN {
        Some(ValidationRule::TooShort)
    } else {
        None
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
