//! Error types for captured forms.

use std::collections::HashMap;
use thiserror::Error;

use crate::value::TypeTag;

/// Errors raised while capturing or reading form values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No captured entry for the requested identifier.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The entry exists but was captured with a different expected type.
    #[error("type mismatch for field {field}: expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: TypeTag,
        actual: TypeTag,
    },

    /// The raw text does not parse as the expected number.
    #[error("failed to parse field {field}: {raw:?}")]
    ParseFailure { field: String, raw: String },

    /// The caller-supplied decode function rejected the raw value.
    #[error("custom decoder rejected field {field}: {message}")]
    CustomDecodeFailure { field: String, message: String },

    /// The entry was marked as failed when the form was captured.
    #[error("field {0} failed during capture")]
    CaptureFailed(String),

    /// A control could not be read out of the submission event.
    #[error("failed to extract field {field} from submission: {reason}")]
    ExtractionFailure { field: String, reason: String },
}

impl FormError {
    /// Returns the identifier of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) | Self::CaptureFailed(field) => field,
            Self::TypeMismatch { field, .. }
            | Self::ParseFailure { field, .. }
            | Self::CustomDecodeFailure { field, .. }
            | Self::ExtractionFailure { field, .. } => field,
        }
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field identifier.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records a read error under the field it refers to.
    pub fn push(&mut self, error: &FormError) {
        self.add(error.field(), error.to_string());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, messages) in fields {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
