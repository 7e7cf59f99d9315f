//! Error types for record serialization and reconstruction.

use thiserror::Error;

/// Errors that can occur while converting records to and from JSON.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The text was not valid JSON, or the value could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value was not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The object held a different number of fields than the constructor takes.
    #[error("expected {expected} field values, found {found}")]
    Arity { expected: usize, found: usize },

    /// A field value had the wrong JSON type for its position.
    #[error("field at position {position} should be {expected}")]
    FieldType {
        position: usize,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RecordError>;
