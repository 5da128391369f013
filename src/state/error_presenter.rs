//! Per-field error display state.
//!
//! Maps a [`ValidationResult`] onto the markings the view draws next to
//! each input. A field shows at most one message at a time.

use crate::model::{Field, ValidationError, ValidationResult};
use std::collections::HashMap;

/// Error markings currently shown on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPresenter {
    marks: HashMap<Field, ValidationError>,
}

impl ErrorPresenter {
    /// No fields marked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every field that failed in `result`.
    ///
    /// An existing marking on the same field is replaced, never duplicated,
    /// so presenting the same result twice leaves the same state as once.
    /// Fields absent from `result` keep whatever marking they had.
    pub fn present(&mut self, result: &ValidationResult) {
        for error in result.errors() {
            self.marks.remove(&error.field);
            self.marks.insert(error.field, *error);
        }
    }

    /// Remove every marking.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Remove the marking on one field.
    ///
    /// Returns true if the field was marked.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.marks.remove(&field).is_some()
    }

    /// The error shown on `field`.
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.marks.get(&field)
    }

    /// Message shown next to `field`.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.error_for(field).map(ValidationError::message)
    }

    /// Whether `field` is marked as errored.
    pub fn is_errored(&self, field: Field) -> bool {
        self.marks.contains_key(&field)
    }

    /// Number of messages currently displayed.
    pub fn message_count(&self) -> usize {
        self.marks.len()
    }

    /// True when nothing is marked.
    pub fn is_clear(&self) -> bool {
        self.marks.is_empty()
    }
}
