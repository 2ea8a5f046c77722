//! Foundation types shared by every layer.
//!
//! - [`Mark`] - 0-indexed line/column location
//! - [`split_lines`] - line splitting used by the remapping code
//!
//! This module has NO dependencies on other cspops modules.

mod position;

pub use position::{Mark, split_lines};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
