//! Checks that a model survives the trip through the intermediate syntax.
//!
//! Every item must come back from [`from_intermediate`](crate::dummy::from_intermediate)
//! as the same item, so that reasoner line numbers can be traced back to it.

use super::{CspModel, Domain, Goal, GoalKind, Literal, ModelError, Range};

/// Characters that end or split a statement in the intermediate syntax.
const RESERVED_ID_CHARS: &[char] = &[':', ';', '=', '%', '"'];

pub(super) fn validate(model: &CspModel) -> Result<(), ModelError> {
    for parameter in &model.parameters {
        check_id("parameter", &parameter.id)?;
        if !accepts(parameter.domain, parameter.value) {
            return Err(ModelError::invalid(
                "parameter",
                &parameter.id,
                format!("value {} is not {}", parameter.value, parameter.domain),
            ));
        }
    }

    for variable in &model.variables {
        check_id("variable", &variable.id)?;
        if let Some(range) = &variable.range {
            check_range(variable.domain, range)
                .map_err(|reason| ModelError::invalid("variable", &variable.id, reason))?;
        }
    }

    for constraint in &model.constraints {
        check_id("constraint", &constraint.id)?;
        check_expression(&constraint.expression)
            .map_err(|reason| ModelError::invalid("constraint", &constraint.id, reason))?;
    }

    if let Some(goal) = &model.goal {
        check_goal(goal).map_err(|reason| ModelError::invalid("goal", goal.id.as_str(), reason))?;
    }
    Ok(())
}

fn check_id(item: &'static str, id: &str) -> Result<(), ModelError> {
    if id.is_empty() {
        return Err(ModelError::invalid(item, id, "id is empty"));
    }
    if id.chars().any(|c| c.is_whitespace() || RESERVED_ID_CHARS.contains(&c)) {
        return Err(ModelError::invalid(
            item,
            id,
            "id must not contain whitespace, ':', ';', '=', '%' or '\"'",
        ));
    }
    Ok(())
}

/// Whether a literal can be declared with `domain`. Integers widen to floats.
fn accepts(domain: Domain, literal: Literal) -> bool {
    matches!(
        (domain, literal),
        (Domain::Bool, Literal::Bool(_))
            | (Domain::Int, Literal::Int(_))
            | (Domain::Float, Literal::Int(_) | Literal::Float(_))
    )
}

fn check_range(domain: Domain, range: &Range) -> Result<(), String> {
    match domain {
        Domain::Bool => Err("bool variables take no range".to_string()),
        _ if accepts(domain, range.min) && accepts(domain, range.max) => Ok(()),
        _ => Err(format!(
            "range {}..{} does not fit type {domain}",
            range.min, range.max
        )),
    }
}

fn check_expression(expression: &str) -> Result<(), String> {
    if expression.trim().is_empty() {
        Err("expression is empty".to_string())
    } else if expression.contains('%') {
        // `%` opens a comment in the intermediate syntax.
        Err("expression must not contain '%'".to_string())
    } else {
        Ok(())
    }
}

fn check_goal(goal: &Goal) -> Result<(), String> {
    match (goal.id, &goal.expression) {
        (GoalKind::Satisfy, None) => Ok(()),
        (GoalKind::Satisfy, Some(_)) => Err("satisfy takes no expression".to_string()),
        (_, Some(expression)) => check_expression(expression),
        (_, None) => Err(format!("{} needs an expression", goal.id.as_str())),
    }
}
