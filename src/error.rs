// SPDX-License-Identifier: MIT

//! Typed error handling for rulekit-rs
//!
//! All failures are local to the failing call: a bad rule string fails that
//! `create_rule`, a bad tree fails that `evaluate_rule`. Nothing is retried.

use thiserror::Error;

/// Top-level error type for rulekit-rs
#[derive(Debug, Error)]
pub enum RuleError {
    /// The token stream produced no AST nodes at all
    #[error("invalid rule string, could not form an AST")]
    InvalidRule,

    /// An operator node was evaluated with a missing child
    #[error("node cannot be empty")]
    EmptyNode,

    /// An ordered comparison was applied to values of different types
    #[error("type mismatch: cannot apply '{op}' to {left} and {right}")]
    TypeMismatch {
        op: String,
        left: &'static str,
        right: &'static str,
    },

    /// I/O errors while loading a rule-set file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors from rule-set files
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl RuleError {
    /// Create a type-mismatch error for an operator applied across types
    pub fn type_mismatch(op: impl Into<String>, left: &'static str, right: &'static str) -> Self {
        Self::TypeMismatch {
            op: op.into(),
            left,
            right,
        }
    }
}
