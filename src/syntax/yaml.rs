//! YAML syntax support.
//!
//! YAML is the human-authored syntax. Structure is preserved as-is; the
//! adapter does not check that the document describes a model.

use serde_json::Value;

use super::{SyntaxAdapter, SyntaxError, strip_location};
use crate::base::Mark;
use crate::error::OpsError;

/// YAML syntax handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl SyntaxAdapter for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn parse(&self, text: &str) -> Result<Value, OpsError> {
        serde_yaml::from_str(text).map_err(|e| OpsError::Syntax(syntax_error(&e)))
    }

    fn serialize(&self, value: &Value) -> Result<String, OpsError> {
        Ok(serde_yaml::to_string(value)?)
    }
}

fn syntax_error(err: &serde_yaml::Error) -> SyntaxError {
    let mark = err
        .location()
        .map(|loc| Mark::from_one_based(loc.line(), loc.column()))
        .unwrap_or_default();
    SyntaxError::new(strip_location(&err.to_string()), mark)
}
