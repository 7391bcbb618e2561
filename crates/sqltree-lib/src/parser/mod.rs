//! Parser infrastructure for SQL.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators, aliases and casts wrap their
//!   left operand retroactively
//! - Explicit recovery sets: statement-level errors skip to the next statement keyword
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Unclosed delimiters are reported once, pointing at the opener
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod fields;
pub mod lexer;
pub mod printer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use fields::{Field, SyntaxNodeExt, field_of};
pub use printer::{JsonNode, ParsePrinter};

pub use core::Parser;

use crate::Diagnostics;

/// Parse result: the green tree and the diagnostics collected while building it.
///
/// The tree is always complete. Error nodes in the tree mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    green: rowan::GreenNode,
    diagnostics: Diagnostics,
    exec_fuel_consumed: u32,
}

impl Parse {
    pub(crate) fn new(
        green: rowan::GreenNode,
        diagnostics: Diagnostics,
        exec_fuel_consumed: u32,
    ) -> Self {
        Self {
            green,
            diagnostics,
            exec_fuel_consumed,
        }
    }

    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.green
    }

    /// Creates a navigable view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> ast::SourceFile {
        ast::SourceFile::cast(self.syntax()).expect("parser always produces SourceFile")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Parser steps spent, zero when exec fuel was unlimited.
    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// No errors were reported. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// One-line S-expression over named nodes, fields included.
    pub fn to_sexp(&self) -> String {
        let mut out = String::new();
        write_sexp(&self.syntax(), &mut out);
        out
    }
}

fn write_sexp(node: &SyntaxNode, out: &mut String) {
    out.push('(');
    out.push_str(node.kind().name());
    write_sexp_children(node, out);
    out.push(')');
}

fn write_sexp_children(node: &SyntaxNode, out: &mut String) {
    for child in node.children_with_tokens() {
        let kind = child.kind();
        if kind.is_trivia() {
            continue;
        }
        if !kind.is_named() {
            // Multi-word keywords are opaque leaves.
            if let Some(inner) = child.as_node()
                && !kind.is_multiword_keyword()
            {
                write_sexp_children(inner, out);
            }
            continue;
        }
        out.push(' ');
        if let Some(field) = field_of(&child) {
            out.push_str(field.as_str());
            out.push_str(": ");
        }
        match &child {
            rowan::NodeOrToken::Node(inner) => write_sexp(inner, out),
            rowan::NodeOrToken::Token(_) => {
                out.push('(');
                out.push_str(kind.name());
                out.push(')');
            }
        }
    }
}
