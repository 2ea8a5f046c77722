/// Position tracking for submitted documents
///
/// Every location reported back to a client is a 0-indexed line/column pair
/// in the coordinate space of the document the client actually sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
}

impl Mark {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Build a mark from the 1-indexed coordinates most parsers report.
    ///
    /// A zero on either axis (some parsers use it for "end of input") clamps
    /// to the first line/column instead of underflowing.
    pub fn from_one_based(line: usize, column: usize) -> Self {
        Self {
            line: line.saturating_sub(1),
            column: column.saturating_sub(1),
        }
    }

    /// Mark of a byte offset inside `text`.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Self {
            line,
            column: before[line_start..].chars().count(),
        }
    }
}

/// Split a document into lines on `\n` or `\r\n`.
///
/// A trailing newline yields a trailing empty line, so indices line up with
/// what an editor shows.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
