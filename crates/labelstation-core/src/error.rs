//! Error types for the label printing library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all label rendering and dispatch operations.
#[derive(Error, Debug)]
pub enum LabelError {
    /// The label template could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The output file could not be created or written
    #[error("Failed to render label to '{path}': {source}")]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The label record cannot be rendered safely
    #[error("Invalid label record field '{field}': {reason}")]
    InvalidRecord { field: String, reason: String },
    /// The print command could not be run or reported failure
    #[error("Failed to submit '{path}' to printer '{printer}': {reason}")]
    Submission {
        path: PathBuf,
        printer: String,
        reason: String,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating invalid record errors.
pub struct InvalidRecordBuilder {
    field: String,
}

impl InvalidRecordBuilder {
    /// Create a new invalid record error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LabelError {
        LabelError::InvalidRecord {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LabelError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a builder for record validation errors.
    pub fn invalid_record(field: impl Into<String>) -> InvalidRecordBuilder {
        InvalidRecordBuilder::new(field)
    }

    /// Creates a render error for the file at `path`.
    pub fn render(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TemplateRender {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for label operations
pub type Result<T> = std::result::Result<T, LabelError>;
