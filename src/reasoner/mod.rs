//! The external reasoner.
//!
//! The reasoner only understands the intermediate syntax and is treated as a
//! black box: one document in, one [`ReasonerOutcome`] out. It is invoked
//! exactly once per request, never retried, never cancelled.

mod config;
mod local;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use config::ReasonerConfig;
pub use local::LocalReasoner;

/// Everything a reasoner run produced.
///
/// `error` is set when the reasoner rejected the document or could not run;
/// the detailed diagnostics are in `stderr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonerOutcome {
    pub error: Option<String>,
    pub stdout: String,
    pub stderr: String,
    pub is_satisfiable: bool,
}

impl ReasonerOutcome {
    /// A run that accepted the document.
    pub fn success(stdout: impl Into<String>, is_satisfiable: bool) -> Self {
        Self {
            error: None,
            stdout: stdout.into(),
            stderr: String::new(),
            is_satisfiable,
        }
    }

    /// A run that rejected the document.
    pub fn failure(error: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            stdout: String::new(),
            stderr: stderr.into(),
            is_satisfiable: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Failures to run the reasoner at all.
#[derive(Debug, Error)]
pub enum ReasonerError {
    /// Could not prepare the scratch directory or document.
    #[error("reasoner I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not start the reasoner process.
    #[error("could not start reasoner '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The run exceeded the configured timeout.
    #[error("reasoner timed out after {0} ms")]
    Timeout(u128),
}

/// Trait for reasoner backends.
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Solve an intermediate-syntax document.
    ///
    /// Transport failures are reported as an error outcome with empty
    /// `stderr`, never as a panic or a separate error channel.
    async fn solve(&self, document: &str) -> ReasonerOutcome;
}

#[async_trait]
impl<R: Reasoner + ?Sized> Reasoner for std::sync::Arc<R> {
    async fn solve(&self, document: &str) -> ReasonerOutcome {
        (**self).solve(document).await
    }
}
