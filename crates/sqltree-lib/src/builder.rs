use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::parser::Parse;
use crate::parser::Parser;
use crate::parser::lexer::lex;
use crate::trace::{NoopTracer, Tracer};

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
const DEFAULT_RECURSION_LIMIT: u32 = 512;

/// Production parsed at the root of the tree.
///
/// The root node is `source_file` whichever rule is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// `(statement [;])*`
    #[default]
    SourceFile,
    /// A single statement with an optional `;`.
    Statement,
    Expression,
    CreateDomainStatement,
    CreateTypeStatement,
    CreateIndexStatement,
    /// One or more column constraints.
    ColumnConstraint,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::SourceFile,
        Rule::Statement,
        Rule::Expression,
        Rule::CreateDomainStatement,
        Rule::CreateTypeStatement,
        Rule::CreateIndexStatement,
        Rule::ColumnConstraint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::SourceFile => "source_file",
            Rule::Statement => "statement",
            Rule::Expression => "expression",
            Rule::CreateDomainStatement => "create_domain_statement",
            Rule::CreateTypeStatement => "create_type_statement",
            Rule::CreateIndexStatement => "create_index_statement",
            Rule::ColumnConstraint => "column_constraint",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Limits and entry rule of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub entry: Rule,
    /// `None` = unlimited.
    pub exec_fuel: Option<u32>,
    /// `None` = unlimited.
    pub recursion_limit: Option<u32>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            entry: Rule::SourceFile,
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

/// Configures and runs a parse.
///
/// ```
/// use sqltree_lib::{ParseBuilder, Rule};
///
/// let parse = ParseBuilder::new("a OR b AND c")
///     .entry(Rule::Expression)
///     .parse()
///     .expect("within limits");
/// assert!(parse.is_valid());
/// ```
pub struct ParseBuilder<'src> {
    source: &'src str,
    config: ParseConfig,
}

impl<'src> ParseBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            config: ParseConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn entry(mut self, rule: Rule) -> Self {
        self.config.entry = rule;
        self
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// Execution fuel never replenishes. It protects against large inputs.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting recursion. It protects against
    /// deeply nested input.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Returns `Err` only when a limit is exceeded; syntax errors live in the
    /// returned tree and its diagnostics.
    pub fn parse(self) -> Result<Parse> {
        self.parse_traced(&mut NoopTracer)
    }

    pub fn parse_traced<T: Tracer>(self, tracer: &mut T) -> Result<Parse> {
        let tokens = lex(self.source);
        let mut parser = Parser::new(self.source, tokens, tracer)
            .with_exec_fuel(self.config.exec_fuel)
            .with_recursion_fuel(self.config.recursion_limit);
        parser.parse_root(self.config.entry);
        let (green, diagnostics, exec_fuel_consumed) = parser.finish()?;
        Ok(Parse::new(green, diagnostics, exec_fuel_consumed))
    }
}

/// Parses `source` as a `source_file` with default limits.
pub fn parse(source: &str) -> Result<Parse> {
    ParseBuilder::new(source).parse()
}
