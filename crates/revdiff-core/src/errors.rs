//! Error taxonomy for the diff formatting core.
//!
//! Each variant maps to a stable `ERR_*` code usable for programmatic
//! handling and test assertions. Nothing here is fatal to a whole revision
//! render: a malformed change aborts only that change, unmapped fields are
//! not errors at all, and date parse failures degrade to the raw string.

use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors raised by the diff formatting core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    /// A change violates the kind/value-presence invariant
    #[error("Malformed change at path '{path}': {reason}")]
    MalformedChange { path: String, reason: String },

    /// A snapshot document handed to the diff engine is not a JSON object
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DiffError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::MalformedChange { .. } => "ERR_MALFORMED_CHANGE",
            DiffError::InvalidSnapshot { .. } => "ERR_INVALID_SNAPSHOT",
            DiffError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        DiffError::Serialization {
            message: err.to_string(),
        }
    }
}
