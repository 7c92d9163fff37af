//! Error types for contact client operations

use thiserror::Error;

/// A single validation failure on one submitted field.
///
/// Errors are collected, never fail-fast, so a consumer can surface every
/// problem in one pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field {field} must be empty or a JSON object")]
    InvalidJsonObject { field: String },

    #[error("Field {field} must be empty or a JSON array")]
    InvalidJsonArray { field: String },

    #[error("Field {field} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Required field missing: {field}")]
    RequiredMissing { field: String },

    #[error("Field {field} is read-only for this caller")]
    ForbiddenMutation { field: String },
}

impl FieldError {
    /// Name of the field this error is attached to.
    pub fn field(&self) -> &str {
        match self {
            FieldError::InvalidJsonObject { field }
            | FieldError::InvalidJsonArray { field }
            | FieldError::OutOfRange { field, .. }
            | FieldError::RequiredMissing { field }
            | FieldError::ForbiddenMutation { field } => field,
        }
    }
}

/// Collected outcome of validating one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Empty report (valid submission).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when any read-only field was changed. A submission carrying one
    /// of these must be rejected wholesale, whatever else is valid.
    pub fn has_forbidden_mutation(&self) -> bool {
        self.errors
            .iter()
            .any(|e| matches!(e, FieldError::ForbiddenMutation { .. }))
    }

    /// All failures recorded against one field.
    pub fn errors_for(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field() == field).collect()
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the report carries no failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoIterator for ValidationReport {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Master error type for contact client operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Submission rejected with {} validation error(s)", .0.len())]
    Validation(ValidationReport),
}

/// Result type alias for contact client operations.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// TESTS
// =============================================================================
