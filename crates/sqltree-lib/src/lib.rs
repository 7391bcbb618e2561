//! sqltree: lossless concrete syntax trees for a PostgreSQL/BigQuery SQL dialect.
//!
//! # Example
//!
//! ```
//! use sqltree_lib::parse;
//!
//! let parse = parse("SELECT a.b FROM t WHERE x > 0").expect("within limits");
//! assert!(parse.is_valid());
//! assert_eq!(
//!     parse.to_sexp(),
//!     "(source_file (select_statement (select_clause (select_clause_body (identifier))) \
//!      (from_clause (identifier)) (where_clause (comparison_operator (identifier) (number)))))"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod diagnostics;
pub mod parser;
pub mod trace;


pub use builder::{ParseBuilder, ParseConfig, Rule, UnknownRule, parse};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Field, Parse, SyntaxKind, SyntaxNode, SyntaxNodeExt, SyntaxToken};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Fatal errors. Syntax errors are not fatal: they are reported as
/// diagnostics next to a complete tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
