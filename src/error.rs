//! Crate-level error type.

use thiserror::Error;

use crate::model::ModelError;
use crate::syntax::SyntaxError;

/// Errors that can occur while handling an operation.
///
/// Only [`OpsError::Syntax`] is a problem *in* the submitted document; every
/// other variant means the request could not be processed.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Malformed input, with a location in the submitted text.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Well-formed input that does not describe a CSP model.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Syntax tag not recognised.
    #[error("Unsupported syntax: {0}")]
    UnknownSyntax(String),
}
