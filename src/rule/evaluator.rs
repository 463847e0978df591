// SPDX-License-Identifier: MIT

//! Recursive rule evaluator

use std::collections::HashMap;

use super::ast::{Node, RuleValue};
use super::operators;
use crate::error::RuleError;

/// Evaluate a rule AST against a record of named values
///
/// Operand leaves whose string matches a key in `data` resolve to the
/// record's value; any other operand evaluates to its own stored value, so
/// a lone leaf tree passes its value straight through. Operator nodes
/// evaluate both children, left first, with no short-circuiting, then apply
/// the table function; a symbol missing from the operator table evaluates
/// to `false` instead of failing.
pub fn evaluate_rule(
    node: &Node,
    data: &HashMap<String, RuleValue>,
) -> Result<RuleValue, RuleError> {
    match node {
        Node::Operand(value) => Ok(resolve_operand(value, data)),
        Node::Operator { op, left, right } => {
            let left_value = evaluate_child(left, data)?;
            let right_value = evaluate_child(right, data)?;

            match operators::lookup(op) {
                Some(spec) => (spec.apply)(&left_value, &right_value),
                None => Ok(RuleValue::Bool(false)),
            }
        }
    }
}

fn evaluate_child(
    child: &Option<Box<Node>>,
    data: &HashMap<String, RuleValue>,
) -> Result<RuleValue, RuleError> {
    match child {
        Some(node) => evaluate_rule(node, data),
        None => Err(RuleError::EmptyNode),
    }
}

fn resolve_operand(value: &RuleValue, data: &HashMap<String, RuleValue>) -> RuleValue {
    if let RuleValue::Str(name) = value {
        if let Some(bound) = data.get(name) {
            return bound.clone();
        }
    }
    value.clone()
}
