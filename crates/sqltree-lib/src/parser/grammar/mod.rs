//! Grammar productions for SQL.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Underscore-prefixed helper productions never open a node; their tokens
//! land in whichever node is open when they run.

mod constraints;
mod ddl;
mod dml;
mod expressions;
mod keywords;
mod literals;
mod select;

use crate::Rule;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{STATEMENT_FIRST, STATEMENT_RECOVERY};
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    /// Parses the whole input as `source_file`, with `rule` deciding what
    /// the root holds.
    pub(crate) fn parse_root(&mut self, rule: Rule) {
        self.start_node(SyntaxKind::SourceFile);

        match rule {
            Rule::SourceFile => self.parse_statements(),
            Rule::Statement => {
                self.parse_statement();
                self.eat_token(SyntaxKind::Semicolon);
                self.parse_trailing_input();
            }
            Rule::Expression => {
                self.parse_expr();
                self.parse_trailing_input();
            }
            Rule::CreateDomainStatement => {
                if self.at_keyword_seq(&[SyntaxKind::KwCreate, SyntaxKind::KwDomain]) {
                    self.parse_create_domain_statement();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`CREATE DOMAIN`");
                }
                self.parse_trailing_input();
            }
            Rule::CreateTypeStatement => {
                if self.at_keyword_seq(&[SyntaxKind::KwCreate, SyntaxKind::KwType]) {
                    self.parse_create_type_statement();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`CREATE TYPE`");
                }
                self.parse_trailing_input();
            }
            Rule::CreateIndexStatement => {
                if self.currently_is(SyntaxKind::KwCreate) {
                    self.parse_create_index_statement();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`CREATE INDEX`");
                }
                self.parse_trailing_input();
            }
            Rule::ColumnConstraint => {
                self.parse_column_constraints();
                self.parse_trailing_input();
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// `(statement [;])*`
    fn parse_statements(&mut self) {
        while !self.should_stop() {
            match self.current() {
                kind if STATEMENT_FIRST.contains(kind) => {
                    self.parse_statement();
                    self.eat_token(SyntaxKind::Semicolon);
                }
                SyntaxKind::Semicolon => {
                    self.error_and_bump_msg(
                        DiagnosticKind::UnexpectedToken,
                        "`;` without a statement",
                    );
                }
                SyntaxKind::Garbage => {
                    self.error_and_bump_msg(
                        DiagnosticKind::UnexpectedToken,
                        "unrecognized characters",
                    );
                }
                _ => {
                    self.error_recover(
                        DiagnosticKind::ExpectedStatement,
                        "statements start with `SELECT`, `WITH`, `UPDATE`, `SET`, `INSERT` or `CREATE`",
                        STATEMENT_RECOVERY,
                    );
                    self.eat_token(SyntaxKind::Semicolon);
                }
            }
        }
    }

    /// Dispatches on the statement's leading keyword(s).
    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            SyntaxKind::KwSelect | SyntaxKind::KwWith => self.parse_select_statement(),
            SyntaxKind::KwUpdate => self.parse_update_statement(),
            SyntaxKind::KwSet => self.parse_set_statement(),
            SyntaxKind::KwInsert => self.parse_insert_statement(),
            SyntaxKind::KwCreate => self.parse_create_statement(),
            _ => self.error(DiagnosticKind::ExpectedStatement),
        }
    }

    /// `CREATE` is resolved by the word after it.
    fn parse_create_statement(&mut self) {
        match self.peek_nth(1) {
            SyntaxKind::KwTable => self.parse_create_table_statement(),
            SyntaxKind::KwSchema => self.parse_create_schema_statement(),
            SyntaxKind::KwFunction | SyntaxKind::KwOr => self.parse_create_function_statement(),
            _ => self.error_recover(
                DiagnosticKind::ExpectedStatement,
                "`CREATE` must be followed by `TABLE`, `SCHEMA`, `FUNCTION` or `OR REPLACE`",
                STATEMENT_RECOVERY,
            ),
        }
    }

    /// Everything left after a fragment entry rule goes into one `ERROR` node.
    fn parse_trailing_input(&mut self) {
        if self.should_stop() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.error(DiagnosticKind::TrailingInput);
        while !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    /// `a, b, c`: runs `item` until no comma follows.
    pub(crate) fn parse_comma_separated(&mut self, item: fn(&mut Self)) {
        loop {
            item(self);
            if self.should_stop() || !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
    }
}
