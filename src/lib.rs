// SPDX-License-Identifier: MIT

//! rulekit-rs - a small boolean rule engine
//!
//! Parses human-readable condition strings into an AST, combines multiple
//! ASTs with logical `AND`, and evaluates a tree against a record of named
//! scalar values:
//!
//! ```
//! use rulekit_rs::rule::{create_rule, evaluate_rule, RuleValue};
//! use std::collections::HashMap;
//!
//! let rule = create_rule("age 30 >").unwrap();
//! let mut record = HashMap::new();
//! record.insert("age".to_string(), RuleValue::Int(35));
//!
//! assert_eq!(evaluate_rule(&rule, &record).unwrap(), RuleValue::Bool(true));
//! ```

pub mod error;
pub mod loader;
pub mod rule;

pub use error::RuleError;
pub use rule::{combine_rules, create_rule, evaluate_rule, format_ast, print_ast, Node, RuleValue};
