//! JSON syntax support.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{SyntaxAdapter, SyntaxError, strip_location};
use crate::base::Mark;
use crate::error::OpsError;

/// JSON syntax handler. Output is indented with four spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl SyntaxAdapter for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse(&self, text: &str) -> Result<Value, OpsError> {
        serde_json::from_str(text).map_err(|e| {
            let mark = Mark::from_one_based(e.line(), e.column());
            OpsError::Syntax(SyntaxError::new(strip_location(&e.to_string()), mark))
        })
    }

    fn serialize(&self, value: &Value) -> Result<String, OpsError> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
