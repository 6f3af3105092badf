//! Form errors.

use thiserror::Error;

/// A rule failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name the field was registered under.
    pub field: String,
    /// The failing rule's message.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors returned from submitting a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more field rules rejected the current values.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    /// The submitted values could not be serialized.
    #[error("failed to serialize form values: {0}")]
    Serialize(#[from] serde_json::Error),
}
