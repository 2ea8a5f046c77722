//! Surface syntaxes of a CSP model.
//!
//! - **yaml** - human-authored structured text
//! - **json** - tagged-data encoding
//! - **dummy** - the reasoner's intermediate syntax
//!
//! ## Architecture
//!
//! Every adapter converts between text and a structured
//! [`serde_json::Value`]. Adapters are purely structural: YAML and JSON accept
//! any well-formed document; only the intermediate adapter goes through the
//! [`CspModel`](crate::model::CspModel) because its text *is* the model.
//!
//! ```text
//! ┌────────┐   ┌────────┐   ┌────────┐
//! │  YAML  │   │  JSON  │   │ dummy  │
//! └───┬────┘   └───┬────┘   └───┬────┘
//!     ▼            ▼            ▼
//! ┌──────────────────────────────────┐
//! │        SyntaxAdapter trait        │
//! │  - parse(&str) -> Result<Value>   │
//! │  - serialize(&Value) -> String    │
//! └──────────────────────────────────┘
//! ```

mod dummy;
mod error;
mod json;
mod yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OpsError;

pub use dummy::Dummy;
pub use error::SyntaxError;
pub use json::Json;
pub use yaml::Yaml;

/// Trait for surface syntax adapters.
pub trait SyntaxAdapter: Send + Sync {
    /// Human-readable name of the syntax.
    fn name(&self) -> &'static str;

    /// File extension(s) for this syntax.
    fn extensions(&self) -> &'static [&'static str];

    /// Parse text into a structured value.
    ///
    /// Malformed text fails with [`OpsError::Syntax`] carrying the mark.
    fn parse(&self, text: &str) -> Result<Value, OpsError>;

    /// Serialize a structured value to text.
    fn serialize(&self, value: &Value) -> Result<String, OpsError>;

    /// Check that the text is well-formed without keeping the result.
    fn check(&self, text: &str) -> Result<(), OpsError> {
        self.parse(text).map(|_| ())
    }
}

/// Wire tag naming a surface syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxTag {
    Yaml,
    Json,
    Dummy,
}

impl SyntaxTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxTag::Yaml => "yaml",
            SyntaxTag::Json => "json",
            SyntaxTag::Dummy => "dummy",
        }
    }

    /// The adapter handling this syntax.
    pub fn adapter(&self) -> &'static dyn SyntaxAdapter {
        match self {
            SyntaxTag::Yaml => &Yaml,
            SyntaxTag::Json => &Json,
            SyntaxTag::Dummy => &Dummy,
        }
    }
}

impl FromStr for SyntaxTag {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(SyntaxTag::Yaml),
            "json" => Ok(SyntaxTag::Json),
            "dummy" => Ok(SyntaxTag::Dummy),
            other => Err(OpsError::UnknownSyntax(other.to_string())),
        }
    }
}

impl fmt::Display for SyntaxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drop the " at line L column C" suffix serde errors append to their message;
/// the location travels separately as a mark.
fn strip_location(message: &str) -> &str {
    match message.rfind(" at line ") {
        Some(index) => &message[..index],
        None => message,
    }
}
