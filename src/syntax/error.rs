//! Syntax error type shared by every adapter.

use thiserror::Error;

use crate::base::Mark;

/// A malformed document: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at line {} column {}", .mark.line + 1, .mark.column + 1)]
pub struct SyntaxError {
    /// Human-readable reason, without location prefix
    pub reason: String,
    /// 0-indexed location in the parsed text
    pub mark: Mark,
}

impl SyntaxError {
    pub fn new(reason: impl Into<String>, mark: Mark) -> Self {
        Self {
            reason: reason.into(),
            mark,
        }
    }

    /// Move the mark down by `lines`, for errors raised on a single line of a
    /// larger document.
    pub fn shifted(mut self, lines: usize) -> Self {
        self.mark.line += lines;
        self
    }
}
