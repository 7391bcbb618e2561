//! Column constraints.
//!
//! Column definitions in `CREATE TABLE` do not use these; they are reached
//! from `CREATE DOMAIN`, `CREATE INDEX`, constrained function types and the
//! `ColumnConstraint` entry rule.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CONSTRAINT_ACTIONS, DIRECTIONS};
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    /// One or more constraints back to back.
    pub(crate) fn parse_column_constraints(&mut self) {
        if !self.parse_column_constraint() {
            self.error_msg(DiagnosticKind::ExpectedToken, "column constraint");
            return;
        }
        while !self.should_stop() && self.parse_column_constraint() {}
    }

    /// Returns `false` without consuming when no constraint starts here.
    fn parse_column_constraint(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwNot | SyntaxKind::KwNull if self.at_null_constraint() => {
                self.parse_null_constraint();
            }
            SyntaxKind::KwCheck => self.parse_check_constraint(),
            SyntaxKind::KwUnique => self.parse_unique_constraint(),
            SyntaxKind::KwReferences => self.parse_references_constraint(),
            SyntaxKind::KwConstraint => {
                self.start_node(SyntaxKind::NamedConstraint);
                self.bump();
                self.expect_identifier("constraint name");
                self.finish_node();
            }
            kind if DIRECTIONS.contains(kind) => {
                self.start_node(SyntaxKind::DirectionConstraint);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwAutoIncrement => {
                self.start_node(SyntaxKind::AutoIncrementConstraint);
                self.bump();
                self.finish_node();
            }
            _ => return false,
        }
        true
    }

    pub(crate) fn at_null_constraint(&mut self) -> bool {
        self.currently_is(SyntaxKind::KwNull)
            || (self.currently_is(SyntaxKind::KwNot) && self.next_is(SyntaxKind::KwNull))
    }

    /// `[NOT] NULL`
    pub(crate) fn parse_null_constraint(&mut self) {
        self.start_node(SyntaxKind::NullConstraint);
        self.eat_token(SyntaxKind::KwNot);
        self.expect(SyntaxKind::KwNull, "`NULL`");
        self.finish_node();
    }

    /// `CHECK expr`
    pub(crate) fn parse_check_constraint(&mut self) {
        self.start_node(SyntaxKind::CheckConstraint);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    pub(crate) fn parse_unique_constraint(&mut self) {
        self.start_node(SyntaxKind::UniqueConstraint);
        self.bump();
        self.finish_node();
    }

    /// `REFERENCES table [( column, ... )] [on_update on_delete | on_delete on_update]`
    fn parse_references_constraint(&mut self) {
        self.start_node(SyntaxKind::ReferencesConstraint);
        self.bump();
        self.expect_identifier("referenced table");

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(|p| {
                p.expect_identifier("referenced column");
            });
            self.close_delimiter(SyntaxKind::ParenClose);
        }

        if self.at_keyword_seq(&[SyntaxKind::KwOn, SyntaxKind::KwUpdate]) {
            self.parse_referential_action(SyntaxKind::OnUpdateAction);
            self.parse_required_action(SyntaxKind::OnDeleteAction);
        } else if self.at_keyword_seq(&[SyntaxKind::KwOn, SyntaxKind::KwDelete]) {
            self.parse_referential_action(SyntaxKind::OnDeleteAction);
            self.parse_required_action(SyntaxKind::OnUpdateAction);
        }

        self.finish_node();
    }

    /// The second half of an action pair must be the other action.
    fn parse_required_action(&mut self, kind: SyntaxKind) {
        let word = match kind {
            SyntaxKind::OnUpdateAction => SyntaxKind::KwUpdate,
            _ => SyntaxKind::KwDelete,
        };
        if self.at_keyword_seq(&[SyntaxKind::KwOn, word]) {
            self.parse_referential_action(kind);
        } else {
            self.error_msg(
                DiagnosticKind::ExpectedToken,
                format!("`ON {}` to pair with the first action", word.name()),
            );
        }
    }

    /// `ON UPDATE action` / `ON DELETE action`
    fn parse_referential_action(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        if kind == SyntaxKind::OnUpdateAction {
            self.parse_keyword_seq(
                SyntaxKind::KwOnUpdate,
                &[SyntaxKind::KwOn, SyntaxKind::KwUpdate],
            );
        } else {
            self.parse_keyword_seq(
                SyntaxKind::KwOnDelete,
                &[SyntaxKind::KwOn, SyntaxKind::KwDelete],
            );
        }

        if self.currently_is_one_of(CONSTRAINT_ACTIONS) {
            self.bump();
        } else if self.at_keyword_seq(&[SyntaxKind::KwSet, SyntaxKind::KwNull]) {
            self.parse_keyword_seq(SyntaxKind::KwSetNull, &[SyntaxKind::KwSet, SyntaxKind::KwNull]);
        } else {
            self.error_msg(
                DiagnosticKind::ExpectedToken,
                "`RESTRICT`, `CASCADE` or `SET NULL`",
            );
        }
        self.finish_node();
    }
}
