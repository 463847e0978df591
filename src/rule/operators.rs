// SPDX-License-Identifier: MIT

//! Fixed operator table
//!
//! Maps each recognized symbol to its category and binary function. Lookup
//! is case-insensitive; the canonical symbols are `AND`, `OR`, `>`, `<`,
//! `>=`, `<=`, `==`, `!=`. Anything else is not an operator.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::ast::RuleValue;
use crate::error::RuleError;

/// Operator category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCategory {
    /// `AND` / `OR` over the truthiness of both sides
    Logical,
    /// Ordering and equality over the evaluated values
    Comparison,
}

type BinaryFn = fn(&RuleValue, &RuleValue) -> Result<RuleValue, RuleError>;

/// Table entry: category plus the binary semantics
pub struct OpSpec {
    pub category: OpCategory,
    pub apply: BinaryFn,
}

/// Symbol -> operator specification
pub static OPERATORS: Lazy<HashMap<&'static str, OpSpec>> = Lazy::new(|| {
    HashMap::from([
        (
            "AND",
            OpSpec {
                category: OpCategory::Logical,
                apply: logical_and,
            },
        ),
        (
            "OR",
            OpSpec {
                category: OpCategory::Logical,
                apply: logical_or,
            },
        ),
        (
            ">",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_gt,
            },
        ),
        (
            "<",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_lt,
            },
        ),
        (
            ">=",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_gte,
            },
        ),
        (
            "<=",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_lte,
            },
        ),
        (
            "==",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_eq,
            },
        ),
        (
            "!=",
            OpSpec {
                category: OpCategory::Comparison,
                apply: cmp_neq,
            },
        ),
    ])
});

/// Look up a token in the operator table, case-insensitively
pub fn lookup(token: &str) -> Option<&'static OpSpec> {
    OPERATORS.get(token.to_uppercase().as_str())
}

/// Check whether a token names an operator
pub fn is_operator(token: &str) -> bool {
    lookup(token).is_some()
}

fn logical_and(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(left.truthy() && right.truthy()))
}

fn logical_or(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(left.truthy() || right.truthy()))
}

/// Natural ordering within one type; ordering across types is undefined
fn order(op: &'static str, left: &RuleValue, right: &RuleValue) -> Result<Ordering, RuleError> {
    match (left, right) {
        (RuleValue::Int(a), RuleValue::Int(b)) => Ok(a.cmp(b)),
        (RuleValue::Str(a), RuleValue::Str(b)) => Ok(a.cmp(b)),
        (RuleValue::Bool(a), RuleValue::Bool(b)) => Ok(a.cmp(b)),
        _ => Err(RuleError::type_mismatch(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn cmp_gt(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(order(">", left, right)? == Ordering::Greater))
}

fn cmp_lt(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(order("<", left, right)? == Ordering::Less))
}

fn cmp_gte(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(order(">=", left, right)? != Ordering::Less))
}

fn cmp_lte(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(
        order("<=", left, right)? != Ordering::Greater,
    ))
}

// Equality is structural: values of different types compare unequal
fn cmp_eq(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(left == right))
}

fn cmp_neq(left: &RuleValue, right: &RuleValue) -> Result<RuleValue, RuleError> {
    Ok(RuleValue::Bool(left != right))
}
