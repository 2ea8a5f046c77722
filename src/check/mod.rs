//! Consistency checking.
//!
//! The reasoner reports problems against lines of the intermediate document it
//! was given. Users submit YAML or JSON, whose statements may span several
//! lines or appear in another order, so there is no fixed line offset between
//! the two. Each reported line is mapped back by identity instead:
//!
//! ```text
//! stderr block ──► intermediate line N ──► Statement ──► id ──► first
//!                                                             original line
//!                                                             containing id
//! ```

pub mod stderr;

use tracing::{debug, trace};

use crate::annotation::{Annotation, ResponseEnvelope};
use crate::base::split_lines;
use crate::dummy::{from_intermediate, to_intermediate};
use crate::error::OpsError;
use crate::model::CspModel;
use crate::reasoner::{Reasoner, ReasonerOutcome};
use crate::syntax::SyntaxTag;

use stderr::{clean_message, error_blocks};

/// A submitted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub syntax: SyntaxTag,
    pub content: String,
}

impl Document {
    pub fn new(syntax: SyntaxTag, content: impl Into<String>) -> Self {
        Self {
            syntax,
            content: content.into(),
        }
    }

    /// The intermediate text to hand to the reasoner.
    pub fn to_intermediate(&self) -> Result<String, OpsError> {
        match self.syntax {
            SyntaxTag::Dummy => Ok(self.content.clone()),
            syntax => {
                let value = syntax.adapter().parse(&self.content)?;
                let model = CspModel::from_value(value)?;
                Ok(to_intermediate(&model))
            }
        }
    }
}

/// Runs documents through a reasoner and maps its complaints back onto them.
#[derive(Debug, Clone)]
pub struct ConsistencyChecker<R> {
    reasoner: R,
}

impl<R: Reasoner> ConsistencyChecker<R> {
    pub fn new(reasoner: R) -> Self {
        Self { reasoner }
    }

    pub fn reasoner(&self) -> &R {
        &self.reasoner
    }

    /// Check a document for consistency.
    ///
    /// Never fails: unreadable documents become `OK_PROBLEMS` (with the parse
    /// mark) or `ERROR`, reasoner complaints become `OK_PROBLEMS`.
    pub async fn check(&self, document: &Document) -> ResponseEnvelope {
        if document.content.is_empty() {
            return ResponseEnvelope::ok();
        }

        let intermediate = match document.to_intermediate() {
            Ok(text) => text,
            Err(OpsError::Syntax(e)) => {
                debug!("{} document does not parse: {e}", document.syntax);
                return ResponseEnvelope::problems(vec![Annotation::error_at(e.mark, e.reason)]);
            }
            Err(e) => {
                return ResponseEnvelope::error(format!("Error while checking consistency: {e}"));
            }
        };

        debug!(
            "submitting {} intermediate lines to the reasoner",
            intermediate.lines().count()
        );
        let outcome = self.reasoner.solve(&intermediate).await;

        if !outcome.is_error() {
            return ResponseEnvelope::ok();
        }

        let annotations = remap_errors(document, &intermediate, &outcome);
        ResponseEnvelope::problems(annotations)
    }
}

/// Turn a failed reasoner outcome into annotations on the original document.
///
/// Annotations follow the order of the stderr blocks. Blocks that cannot be
/// located contribute nothing; if no block could be located, a single
/// annotation at `(0, 0)` carries the whole message.
pub fn remap_errors(
    document: &Document,
    intermediate: &str,
    outcome: &ReasonerOutcome,
) -> Vec<Annotation> {
    let intermediate_lines = split_lines(intermediate);
    let original_lines = split_lines(&document.content);

    let mut annotations = Vec::new();
    for block in error_blocks(&outcome.stderr) {
        let Some(line) = block.line else {
            continue;
        };
        let row = match document.syntax {
            SyntaxTag::Dummy => Some(line),
            _ => locate_statement(line, &intermediate_lines, &original_lines),
        };
        match row {
            Some(row) => annotations.push(Annotation::error(row, 0, block.text())),
            None => trace!("no original line for intermediate line {line}"),
        }
    }

    if annotations.is_empty() {
        annotations.push(Annotation::error(0, 0, fallback_text(outcome)));
    }
    annotations
}

/// Original line holding the statement written on intermediate line `line`.
///
/// The first original line containing the statement's id wins.
fn locate_statement(
    line: usize,
    intermediate_lines: &[&str],
    original_lines: &[&str],
) -> Option<usize> {
    let text = intermediate_lines.get(line)?;
    let statement = match from_intermediate(text) {
        Ok(statement) => statement,
        Err(e) => {
            trace!("intermediate line {line} does not parse back: {e}");
            return None;
        }
    };
    let id = statement.id()?;
    trace!("intermediate line {line} is {} '{id}'", statement.kind());

    original_lines.iter().position(|l| l.contains(id))
}

fn fallback_text(outcome: &ReasonerOutcome) -> String {
    if !outcome.stderr.is_empty() {
        clean_message(&outcome.stderr)
    } else if let Some(error) = &outcome.error {
        clean_message(error)
    } else {
        String::new()
    }
}
