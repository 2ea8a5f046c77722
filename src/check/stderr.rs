//! Reasoner stderr wire format.
//!
//! Messages are separated by a blank line. A message may reference a line of
//! the submitted intermediate document as `<path>.dummy:<N>:` (1-based), and
//! may carry solver labels such as `dummy:` or `Dummy:` that mean nothing to
//! the user.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n").expect("valid regex literal"));

static LINE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\.dummy:([0-9]+):.*").expect("valid regex literal"));

static SOLVER_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S*\.dummy:[0-9][0-9.\-]*:?\s*|[dD]ummy:\s*").expect("valid regex literal")
});

/// One stderr message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock<'a> {
    /// Referenced intermediate line, converted to 0-based.
    pub line: Option<usize>,
    /// The message as the reasoner wrote it.
    pub raw: &'a str,
}

impl ErrorBlock<'_> {
    /// Message text for the user: labels removed, whitespace trimmed.
    pub fn text(&self) -> String {
        clean_message(self.raw)
    }
}

/// Split stderr into messages, in order. Empty blocks are kept; they simply
/// carry no line reference.
pub fn error_blocks(stderr: &str) -> impl Iterator<Item = ErrorBlock<'_>> {
    BLOCK_SEPARATOR.split(stderr).map(|raw| ErrorBlock {
        line: line_reference(raw),
        raw,
    })
}

/// 0-based intermediate line referenced by a message, if any.
///
/// Line `0` (never produced by a conforming reasoner) has no 0-based
/// equivalent and counts as no reference.
pub fn line_reference(message: &str) -> Option<usize> {
    let captures = LINE_REFERENCE.captures(message)?;
    let line: usize = captures.get(1)?.as_str().parse().ok()?;
    line.checked_sub(1)
}

/// Remove solver labels and location prefixes, then trim.
pub fn clean_message(message: &str) -> String {
    SOLVER_LABELS.replace_all(message, "").trim().to_string()
}
