//! Error types for model conversion.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised when a structured value does not describe a CSP model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The value is well-formed but not shaped like a model (missing or
    /// mistyped field).
    #[error("{0}")]
    Shape(#[source] serde_json::Error),

    /// The model could not be encoded as a structured value.
    #[error("could not encode model: {0}")]
    Encode(#[source] serde_json::Error),

    /// An item that has no faithful intermediate-syntax form.
    #[error("{item} '{id}': {reason}")]
    Invalid {
        item: &'static str,
        id: SmolStr,
        reason: String,
    },
}

impl ModelError {
    pub(crate) fn invalid(item: &'static str, id: &str, reason: impl Into<String>) -> Self {
        ModelError::Invalid {
            item,
            id: id.into(),
            reason: reason.into(),
        }
    }
}
