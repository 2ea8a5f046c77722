//! Intermediate ("dummy") syntax: the reasoner's native input.
//!
//! One statement per line. The consistency checker relies on that invariant
//! to map a reasoner line number back to a single [`Statement`].
//!
//! ```text
//! int: p = 3;
//! var 0..10: x;
//! constraint c1: x > p;
//! solve satisfy;
//! ```

mod lexer;
mod parser;
mod writer;

pub use lexer::{Lexer, Token, TokenKind, tokenize};

use crate::base::split_lines;
use crate::model::{CspModel, Statement};
use crate::syntax::SyntaxError;

use parser::StatementParser;

/// Serialize a whole model, one statement per line, with a trailing newline.
pub fn to_intermediate(model: &CspModel) -> String {
    let mut out = String::new();
    for statement in model.statements() {
        out.push_str(&statement.to_string());
        out.push('\n');
    }
    out
}

/// Parse exactly one intermediate-syntax line.
pub fn from_intermediate(line: &str) -> Result<Statement, SyntaxError> {
    StatementParser::new(line).parse()
}

/// Parse a whole intermediate document. Blank and comment-only lines are
/// skipped; error marks refer to the document, not the line.
pub fn parse_document(text: &str) -> Result<CspModel, SyntaxError> {
    let mut model = CspModel::new();
    for (index, line) in split_lines(text).into_iter().enumerate() {
        if is_blank(line) {
            continue;
        }
        let statement = from_intermediate(line).map_err(|e| e.shifted(index))?;
        model.push(statement);
    }
    Ok(model)
}

fn is_blank(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('%')
}
