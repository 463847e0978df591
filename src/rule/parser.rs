//! Stack-based rule parser
//!
//! Parses rule strings like:
//! - `age 30 >`
//! - `"Sales"`
//! - `age > 30 AND department == "Sales"`
//!
//! This is not a precedence parser. Tokens are consumed left to right and
//! the last two stack entries become the children of the next operator
//! token; parentheses are stripped before tokenization and have no
//! structural effect. The node on top of the stack when tokens run out is
//! the result, and anything beneath it is discarded.

use super::ast::{Node, RuleValue};
use super::operators;
use crate::error::RuleError;

/// Split a rule string into tokens, stripping grouping parentheses
pub fn tokenize(rule_string: &str) -> Vec<String> {
    rule_string
        .replace('(', "")
        .replace(')', "")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Parse a rule string and return the root node of the corresponding AST
pub fn create_rule(rule_string: &str) -> Result<Node, RuleError> {
    let mut stack: Vec<Node> = Vec::new();

    for token in tokenize(rule_string) {
        if operators::is_operator(&token) {
            // The two most recent values become this operator's children,
            // the more recent one on the right. With fewer than two values
            // on the stack the node is pushed childless.
            let (left, right) = if stack.len() >= 2 {
                let right = stack.pop().map(Box::new);
                let left = stack.pop().map(Box::new);
                (left, right)
            } else {
                (None, None)
            };
            stack.push(Node::Operator {
                op: token.to_uppercase(),
                left,
                right,
            });
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            match token.parse::<i64>() {
                Ok(n) => stack.push(Node::operand(RuleValue::Int(n))),
                Err(_) => log::debug!("dropping out-of-range numeric token: {}", token),
            }
        } else if token.starts_with('"') && token.ends_with('"') {
            stack.push(Node::operand(RuleValue::Str(
                token.trim_matches('"').to_string(),
            )));
        } else if is_identifier(&token) {
            stack.push(Node::operand(RuleValue::Str(token)));
        } else {
            log::debug!("dropping unrecognized token: {}", token);
        }
    }

    match stack.pop() {
        Some(root) => {
            if !stack.is_empty() {
                log::debug!("discarding {} unconsumed stack entries", stack.len());
            }
            Ok(root)
        }
        None => Err(RuleError::InvalidRule),
    }
}

/// Combine multiple rule ASTs into one by chaining them with `AND`
///
/// Returns `None` for an empty input and the tree itself for a single
/// input. Multiple trees fold left to right, so the last rule ends up as
/// the right child of the root.
pub fn combine_rules(rules: Vec<Node>) -> Option<Node> {
    let mut iter = rules.into_iter();
    let mut combined = iter.next()?;
    for rule in iter {
        combined = Node::Operator {
            op: "AND".to_string(),
            left: Some(Box::new(combined)),
            right: Some(Box::new(rule)),
        };
    }
    Some(combined)
}

/// Bare field-name token: letter or underscore, then letters, digits, or
/// underscores
fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
