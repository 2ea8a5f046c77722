//! Statements: one semantic unit of a model.
//!
//! A statement is externally tagged by its kind, e.g.
//! `{"constraints": [{"id": "c1", "expression": "x > 1"}]}` or
//! `{"goal": {"id": "satisfy"}}`. Goals are singular; every other kind is
//! list-valued.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Constraint, Goal, Parameter, Variable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Statement {
    Parameters(Vec<Parameter>),
    Variables(Vec<Variable>),
    Constraints(Vec<Constraint>),
    Goal(Goal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Parameters,
    Variables,
    Constraints,
    Goal,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Parameters => "parameters",
            StatementKind::Variables => "variables",
            StatementKind::Constraints => "constraints",
            StatementKind::Goal => "goal",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Parameters(_) => StatementKind::Parameters,
            Statement::Variables(_) => StatementKind::Variables,
            Statement::Constraints(_) => StatementKind::Constraints,
            Statement::Goal(_) => StatementKind::Goal,
        }
    }

    /// Stable identifier shared by every syntax the statement appears in.
    ///
    /// A goal is identified by its directive; list-valued kinds by their
    /// first element. `None` for an empty list.
    pub fn id(&self) -> Option<&str> {
        match self {
            Statement::Goal(goal) => Some(goal.id.as_str()),
            Statement::Parameters(items) => items.first().map(|p| p.id.as_str()),
            Statement::Variables(items) => items.first().map(|v| v.id.as_str()),
            Statement::Constraints(items) => items.first().map(|c| c.id.as_str()),
        }
    }
}
