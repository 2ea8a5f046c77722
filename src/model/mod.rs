//! Structured CSP model.
//!
//! The same model travels through all three surface syntaxes. YAML and JSON
//! encode it as a map with camel-case keys; the intermediate syntax writes one
//! [`Statement`] per line.
//!
//! ```yaml
//! parameters:
//!   - id: p
//!     type: int
//!     value: 3
//! variables:
//!   - id: x
//!     type: int
//!     range: { min: 0, max: 10 }
//! constraints:
//!   - id: c1
//!     expression: x > p
//! goal:
//!   id: satisfy
//! ```

mod error;
mod statement;
mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smol_str::SmolStr;

pub use error::ModelError;
pub use statement::{Statement, StatementKind};

/// A complete constraint satisfaction problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CspModel {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}

impl CspModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a structured value (from YAML or JSON) as a model.
    ///
    /// Items that could not be written as intermediate text and read back
    /// unchanged fail with [`ModelError::Invalid`].
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        // YAML `~` or an empty JSON document means an empty model.
        if value.is_null() {
            return Ok(Self::default());
        }
        let model: Self = serde_json::from_value(value).map_err(ModelError::Shape)?;
        validate::validate(&model)?;
        Ok(model)
    }

    pub fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(ModelError::Encode)
    }

    /// Append the contents of a parsed statement.
    ///
    /// A second goal replaces the first.
    pub fn push(&mut self, statement: Statement) {
        match statement {
            Statement::Parameters(items) => self.parameters.extend(items),
            Statement::Variables(items) => self.variables.extend(items),
            Statement::Constraints(items) => self.constraints.extend(items),
            Statement::Goal(goal) => self.goal = Some(goal),
        }
    }

    /// One statement per declared item, in intermediate-syntax order.
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        let parameters = self
            .parameters
            .iter()
            .map(|p| Statement::Parameters(vec![p.clone()]));
        let variables = self
            .variables
            .iter()
            .map(|v| Statement::Variables(vec![v.clone()]));
        let constraints = self
            .constraints
            .iter()
            .map(|c| Statement::Constraints(vec![c.clone()]));
        let goal = self.goal.iter().map(|g| Statement::Goal(g.clone()));

        parameters.chain(variables).chain(constraints).chain(goal)
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
            && self.variables.is_empty()
            && self.constraints.is_empty()
            && self.goal.is_none()
    }
}

/// Value domain of a parameter or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Int,
    Float,
    Bool,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Int => "int",
            Domain::Float => "float",
            Domain::Bool => "bool",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constant value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Literal {
    /// Render for a declaration of the given domain.
    ///
    /// Integral values declared as `float` keep a decimal point so they lex
    /// back as floats.
    pub fn render(&self, domain: Domain) -> String {
        match (self, domain) {
            (Literal::Int(i), Domain::Float) => format!("{i}.0"),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part (`1.0`, not `1`).
            Literal::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Inclusive bounds of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: Literal,
    pub max: Literal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: SmolStr,
    #[serde(rename = "type")]
    pub domain: Domain,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: SmolStr,
    #[serde(rename = "type")]
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: SmolStr,
    pub expression: String,
}

/// Solve directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Satisfy,
    Minimize,
    Maximize,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Satisfy => "satisfy",
            GoalKind::Minimize => "minimize",
            GoalKind::Maximize => "maximize",
        }
    }
}

/// The model's goal. Its identifier is the solve directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}
