// SPDX-License-Identifier: MIT

//! Rule parsing, combination, and evaluation
//!
//! This module is the whole engine:
//! - `create_rule` parses a rule string like `age > 30 AND department == "Sales"`
//!   into an AST with an explicit build stack
//! - `combine_rules` chains several ASTs together with `AND`
//! - `evaluate_rule` walks an AST against a record of named values
//! - `print_ast` / `format_ast` dump a tree for inspection

mod ast;
mod evaluator;
mod operators;
mod parser;
mod printer;

pub use ast::{Node, RuleValue};
pub use evaluator::evaluate_rule;
pub use operators::{is_operator, OpCategory};
pub use parser::{combine_rules, create_rule, tokenize};
pub use printer::{format_ast, print_ast};
