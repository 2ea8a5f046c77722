//! Intermediate syntax adapter.
//!
//! Unlike YAML and JSON the intermediate text only exists as a model, so both
//! directions go through [`CspModel`].

use serde_json::Value;

use super::SyntaxAdapter;
use crate::dummy::{parse_document, to_intermediate};
use crate::error::OpsError;
use crate::model::CspModel;

/// Intermediate syntax handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dummy;

impl SyntaxAdapter for Dummy {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["dummy"]
    }

    fn parse(&self, text: &str) -> Result<Value, OpsError> {
        let model = parse_document(text)?;
        Ok(model.to_value()?)
    }

    fn serialize(&self, value: &Value) -> Result<String, OpsError> {
        let model = CspModel::from_value(value.clone())?;
        Ok(to_intermediate(&model))
    }

    fn check(&self, text: &str) -> Result<(), OpsError> {
        parse_document(text)?;
        Ok(())
    }
}
