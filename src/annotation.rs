//! Annotations and response envelopes.
//!
//! Every operation answers with a [`ResponseEnvelope`]. Problems found in the
//! submitted document travel as [`Annotation`]s whose coordinates always refer
//! to that document, never to the intermediate text handed to the reasoner.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base::Mark;

// ============================================================================
// ANNOTATION TYPES
// ============================================================================

/// Severity level of an annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A located message about the submitted document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Severity level.
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Line (0-indexed).
    pub row: usize,
    /// Column (0-indexed).
    pub column: usize,
    /// The message.
    pub text: String,
}

impl Annotation {
    /// Create a new error annotation.
    pub fn error(row: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            row,
            column,
            text: text.into(),
        }
    }

    /// Create a new warning annotation.
    pub fn warning(row: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            row,
            column,
            text: text.into(),
        }
    }

    /// Create an error annotation at a parser mark.
    pub fn error_at(mark: Mark, text: impl Into<String>) -> Self {
        Self::error(mark.line, mark.column, text)
    }
}

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Outcome of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Processed, nothing to report.
    Ok,
    /// Processed, the document has problems (at least one annotation).
    OkProblems,
    /// The request could not be processed at all.
    Error,
}

/// Uniform wrapper returned by every operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: Status,
    pub message: Option<String>,
    pub data: Option<Value>,
    pub annotations: Option<Vec<Annotation>>,
}

impl ResponseEnvelope {
    /// `OK` with every other field null.
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: None,
            data: None,
            annotations: None,
        }
    }

    /// `OK` carrying a message, optional payload, and an empty annotation list.
    pub fn ok_with(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: Status::Ok,
            message: Some(message.into()),
            data,
            annotations: Some(Vec::new()),
        }
    }

    /// `OK_PROBLEMS` with the given annotations.
    ///
    /// Callers guarantee `annotations` is non-empty.
    pub fn problems(annotations: Vec<Annotation>) -> Self {
        Self {
            status: Status::OkProblems,
            message: None,
            data: None,
            annotations: Some(annotations),
        }
    }

    /// `ERROR` with a message and an empty annotation list.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
            annotations: Some(Vec::new()),
        }
    }

    /// Annotations carried by this envelope (empty when null).
    pub fn annotations(&self) -> &[Annotation] {
        self.annotations.as_deref().unwrap_or(&[])
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
