// SPDX-License-Identifier: MIT

//! Indented AST dump for debugging
//!
//! Pre-order walk, one `value` per line, two spaces of indent per depth
//! level. Absent children print nothing.

use std::fmt::Write;

use super::ast::Node;

/// Render the AST as an indented text dump
pub fn format_ast(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Print the AST to standard output
pub fn print_ast(node: &Node) {
    print!("{}", format_ast(node));
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    match node {
        Node::Operand(value) => {
            let _ = writeln!(out, "{}", value);
        }
        Node::Operator { op, left, right } => {
            let _ = writeln!(out, "{}", op);
            if let Some(left) = left {
                write_node(out, left, depth + 1);
            }
            if let Some(right) = right {
                write_node(out, right, depth + 1);
            }
        }
    }
}
