//! Operations exposed to clients.
//!
//! Every operation terminates its own failures: the result is always a
//! [`ResponseEnvelope`] (or, for [`Operations::execute`], possibly the raw
//! reasoner report). Nothing here returns `Err` or panics on user input.
//!
//! ## Usage
//!
//! ```ignore
//! let ops = Operations::new(LocalReasoner::new(ReasonerConfig::from_env()));
//!
//! let syntax = ops.check("yaml", content);
//! let consistency = ops.check_consistency("yaml", content).await;
//! let json = ops.translate("yaml", "json", content);
//! ```

pub mod translate;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::annotation::{Annotation, ResponseEnvelope};
use crate::check::{ConsistencyChecker, Document};
use crate::error::OpsError;
use crate::reasoner::{Reasoner, ReasonerOutcome};
use crate::syntax::SyntaxTag;

/// Output requested from [`Operations::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecuteFormat {
    /// Envelope whose message wraps solver stdout in `<pre>`.
    #[default]
    Html,
    /// Raw reasoner report.
    Json,
}

/// Raw result of a reasoner run, plus the document it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonerReport {
    #[serde(flatten)]
    pub outcome: ReasonerOutcome,
    pub document: String,
}

/// Result of [`Operations::execute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExecuteResponse {
    Report(ReasonerReport),
    Envelope(ResponseEnvelope),
}

/// The operation surface, generic over the reasoner backend.
#[derive(Debug, Clone)]
pub struct Operations<R> {
    checker: ConsistencyChecker<R>,
}

impl<R: Reasoner> Operations<R> {
    pub fn new(reasoner: R) -> Self {
        Self {
            checker: ConsistencyChecker::new(reasoner),
        }
    }

    pub fn reasoner(&self) -> &R {
        self.checker.reasoner()
    }

    /// Syntax-only validation.
    pub fn check(&self, syntax: &str, content: &str) -> ResponseEnvelope {
        debug!("check: syntax={syntax}, {} bytes", content.len());
        if content.is_empty() {
            return ResponseEnvelope::ok();
        }
        let tag = match syntax.parse::<SyntaxTag>() {
            Ok(tag) => tag,
            Err(e) => return ResponseEnvelope::error(e.to_string()),
        };

        match tag.adapter().check(content) {
            Ok(()) => ResponseEnvelope::ok(),
            Err(OpsError::Syntax(e)) => {
                ResponseEnvelope::problems(vec![Annotation::error_at(e.mark, e.reason)])
            }
            Err(e) => ResponseEnvelope::error(format!("Error while checking: {e}")),
        }
    }

    /// Semantic validation through the reasoner, with locations mapped back
    /// onto `content`.
    pub async fn check_consistency(&self, syntax: &str, content: &str) -> ResponseEnvelope {
        debug!("check_consistency: syntax={syntax}, {} bytes", content.len());
        if content.is_empty() {
            return ResponseEnvelope::ok();
        }
        let tag = match syntax.parse::<SyntaxTag>() {
            Ok(tag) => tag,
            Err(e) => return ResponseEnvelope::error(e.to_string()),
        };
        self.checker.check(&Document::new(tag, content)).await
    }

    /// Convert `content` between syntaxes.
    pub fn translate(&self, source: &str, destination: &str, content: &str) -> ResponseEnvelope {
        translate::translate(source, destination, content)
    }

    /// Solve a YAML model.
    pub async fn execute(&self, content: &str, format: ExecuteFormat) -> ExecuteResponse {
        let document = Document::new(SyntaxTag::Yaml, content);
        let intermediate = match document.to_intermediate() {
            Ok(text) => text,
            Err(OpsError::Syntax(e)) => {
                return ExecuteResponse::Envelope(ResponseEnvelope::problems(vec![
                    Annotation::error_at(e.mark, e.reason),
                ]));
            }
            Err(e) => {
                return ExecuteResponse::Envelope(ResponseEnvelope::error(format!(
                    "Error while executing: {e}"
                )));
            }
        };

        let outcome = self.checker.reasoner().solve(&intermediate).await;

        if outcome.is_error() || format == ExecuteFormat::Json {
            return ExecuteResponse::Report(ReasonerReport {
                outcome,
                document: intermediate,
            });
        }

        let mut envelope = ResponseEnvelope::ok_with(
            format!("<pre>{}</pre>", outcome.stdout),
            Some(Value::String(content.to_string())),
        );
        envelope.annotations = None;
        ExecuteResponse::Envelope(envelope)
    }
}
