use super::keywords::is_identifier_start;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    /// `UPDATE identifier SET a = expr, ... [WHERE expr]`
    pub(crate) fn parse_update_statement(&mut self) {
        self.start_node(SyntaxKind::UpdateStatement);
        self.bump();
        self.expect_identifier("table name after `UPDATE`");

        if self.currently_is(SyntaxKind::KwSet) {
            self.start_node(SyntaxKind::SetClause);
            self.bump();
            self.start_node(SyntaxKind::SetClauseBody);
            self.parse_comma_separated(Self::parse_assignment);
            self.finish_node();
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`SET`");
        }

        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }
        self.finish_node();
    }

    /// `identifier = expr`
    fn parse_assignment(&mut self) {
        if !self.at_identifier_start() {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "column to assign");
            return;
        }
        self.start_node(SyntaxKind::AssignmentExpression);
        self.parse_identifier();
        if self.expect(SyntaxKind::Equals, "`=` in assignment") {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `INSERT INTO identifier VALUES ( expr, ... )`
    pub(crate) fn parse_insert_statement(&mut self) {
        self.start_node(SyntaxKind::InsertStatement);
        self.bump();
        self.expect(SyntaxKind::KwInto, "`INTO` after `INSERT`");
        self.expect_identifier("table name");

        if self.currently_is(SyntaxKind::KwValues) {
            self.start_node(SyntaxKind::ValuesClause);
            self.bump();
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.push_delimiter(SyntaxKind::ParenOpen);
                self.bump();
                self.start_node(SyntaxKind::ValuesClauseBody);
                self.parse_comma_separated(Self::parse_expr);
                self.finish_node();
                self.close_delimiter(SyntaxKind::ParenClose);
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`(` after `VALUES`");
            }
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`VALUES`");
        }

        self.finish_node();
    }

    /// `SET [SESSION|LOCAL] identifier (= | TO) (expr | DEFAULT)`
    pub(crate) fn parse_set_statement(&mut self) {
        self.start_node(SyntaxKind::SetStatement);
        self.bump();

        if matches!(self.current(), SyntaxKind::KwSession | SyntaxKind::KwLocal)
            && is_identifier_start(self.peek_nth(1))
        {
            self.bump();
        }

        self.expect_identifier("setting name");

        match self.current() {
            SyntaxKind::Equals | SyntaxKind::KwTo => self.bump(),
            _ => self.error_msg(DiagnosticKind::ExpectedToken, "`=` or `TO`"),
        }

        if !self.eat_token(SyntaxKind::KwDefault) {
            self.parse_expr();
        }

        self.finish_node();
    }
}
