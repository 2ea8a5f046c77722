//! Intermediate-syntax writer.

use std::fmt;

use crate::model::{Constraint, Domain, Goal, Parameter, Statement, Variable};

impl fmt::Display for Statement {
    /// One line per item; list-valued statements with several items span
    /// several lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Parameters(items) => write_lines(f, items, write_parameter),
            Statement::Variables(items) => write_lines(f, items, write_variable),
            Statement::Constraints(items) => write_lines(f, items, write_constraint),
            Statement::Goal(goal) => write_goal(f, goal),
        }
    }
}

fn write_lines<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    write_one: fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        write_one(f, item)?;
    }
    Ok(())
}

fn write_parameter(f: &mut fmt::Formatter<'_>, parameter: &Parameter) -> fmt::Result {
    write!(
        f,
        "{}: {} = {};",
        parameter.domain,
        parameter.id,
        parameter.value.render(parameter.domain)
    )
}

fn write_variable(f: &mut fmt::Formatter<'_>, variable: &Variable) -> fmt::Result {
    match (&variable.range, variable.domain) {
        (Some(range), Domain::Int | Domain::Float) => write!(
            f,
            "var {}..{}: {};",
            range.min.render(variable.domain),
            range.max.render(variable.domain),
            variable.id
        ),
        // Booleans have no meaningful bounds.
        _ => write!(f, "var {}: {};", variable.domain, variable.id),
    }
}

fn write_constraint(f: &mut fmt::Formatter<'_>, constraint: &Constraint) -> fmt::Result {
    write!(
        f,
        "constraint {}: {};",
        constraint.id,
        one_line(&constraint.expression)
    )
}

fn write_goal(f: &mut fmt::Formatter<'_>, goal: &Goal) -> fmt::Result {
    match &goal.expression {
        Some(expression) => write!(f, "solve {} {};", goal.id.as_str(), one_line(expression)),
        None => write!(f, "solve {};", goal.id.as_str()),
    }
}

/// Collapse line breaks and whitespace runs, as left by YAML block scalars.
fn one_line(expression: &str) -> String {
    expression.split_whitespace().collect::<Vec<_>>().join(" ")
}
