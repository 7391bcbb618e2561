//! Expressions: a Pratt loop over operands.
//!
//! Binding powers, loosest first. Every binary form is left-associative.
//!
//! | Construct                          | l_bp | r_bp |
//! |------------------------------------|------|------|
//! | `+` `~`                            | 2    | 3    |
//! | `[NOT] IN`, `IS [NOT] ...`         | 4    | 5    |
//! | `OR`                               | 8    | 9    |
//! | `AND`                              | 10   | 11   |
//! | prefix `NOT` (operand)             | 12   |      |
//! | `<` `<=` `<>` `=` `>` `>=`         | 14   | 15   |

use rowan::Checkpoint;

use super::keywords::is_identifier_start;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{COMPARISON_OPERATORS, NUMERIC_KEYWORDS, TIME_KEYWORDS};
use crate::trace::Tracer;

const NOT_OPERAND_BP: u8 = 12;

/// `DISTINCT FROM` takes everything but `+` / `~`.
const DISTINCT_FROM_OPERAND_BP: u8 = 3;

#[derive(Debug, Clone, Copy)]
enum Infix {
    Binary,
    Comparison,
    Boolean,
    In,
    Is,
}

impl<T: Tracer> Parser<'_, '_, T> {
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(0);
    }

    pub(crate) fn at_expression_start(&mut self) -> bool {
        match self.current() {
            SyntaxKind::ParenOpen
            | SyntaxKind::KwStruct
            | SyntaxKind::KwArray
            | SyntaxKind::BracketOpen
            | SyntaxKind::StringOpen
            | SyntaxKind::Integer
            | SyntaxKind::Float
            | SyntaxKind::KwNull
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse
            | SyntaxKind::QueryParameter
            | SyntaxKind::Star
            | SyntaxKind::Dollar
            | SyntaxKind::KwUnnest
            | SyntaxKind::KwNot => true,
            SyntaxKind::Plus | SyntaxKind::Minus => self.at_signed_float(),
            kind => is_identifier_start(kind),
        }
    }

    /// Returns the kind of the outermost operator node built, `None` for a
    /// bare operand.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8) -> Option<SyntaxKind> {
        if !self.enter_recursion() {
            return None;
        }

        let checkpoint = self.checkpoint();
        let mut top = None;
        if self.currently_is(SyntaxKind::KwNot) {
            self.start_node(SyntaxKind::BooleanExpression);
            self.bump();
            self.parse_operand_bp(NOT_OPERAND_BP, "after `NOT`");
            self.finish_node();
            top = Some(SyntaxKind::BooleanExpression);
        } else {
            self.parse_operand(checkpoint);
        }

        while !self.has_fatal_error() {
            let Some((l_bp, r_bp, infix)) = self.infix_op() else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let kind = match infix {
                Infix::Binary => SyntaxKind::BinaryExpression,
                Infix::Comparison => SyntaxKind::ComparisonOperator,
                Infix::Boolean => SyntaxKind::BooleanExpression,
                Infix::In => SyntaxKind::InExpression,
                Infix::Is => SyntaxKind::IsExpression,
            };
            self.start_node_at(checkpoint, kind);
            match infix {
                Infix::Binary | Infix::Comparison | Infix::Boolean => {
                    let op = self.current();
                    self.bump();
                    self.parse_operand_bp(r_bp, &format!("after `{}`", op.name()));
                }
                Infix::In => {
                    self.eat_token(SyntaxKind::KwNot);
                    self.expect(SyntaxKind::KwIn, "`IN`");
                    self.parse_tuple();
                }
                Infix::Is => {
                    self.bump();
                    self.parse_is_target();
                }
            }
            self.finish_node();
            top = Some(kind);
        }

        self.exit_recursion();
        top
    }

    /// Right-hand operand of an operator. Reports instead of descending when
    /// nothing expression-like follows.
    fn parse_operand_bp(&mut self, min_bp: u8, context: &str) {
        if self.at_expression_start() {
            self.parse_expr_bp(min_bp);
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, context);
        }
    }

    fn infix_op(&mut self) -> Option<(u8, u8, Infix)> {
        let op = match self.current() {
            SyntaxKind::Plus | SyntaxKind::Tilde => (2, 3, Infix::Binary),
            SyntaxKind::KwIn => (4, 5, Infix::In),
            SyntaxKind::KwNot if self.next_is(SyntaxKind::KwIn) => (4, 5, Infix::In),
            SyntaxKind::KwIs => (4, 5, Infix::Is),
            SyntaxKind::KwOr => (8, 9, Infix::Boolean),
            SyntaxKind::KwAnd => (10, 11, Infix::Boolean),
            kind if COMPARISON_OPERATORS.contains(kind) => (14, 15, Infix::Comparison),
            _ => return None,
        };
        Some(op)
    }

    /// `IS [NOT]` already consumed up to `NOT`: `NULL` | `TRUE` | `FALSE` | `DISTINCT FROM expr`
    fn parse_is_target(&mut self) {
        self.eat_token(SyntaxKind::KwNot);
        match self.current() {
            SyntaxKind::KwNull | SyntaxKind::KwTrue | SyntaxKind::KwFalse => self.bump(),
            SyntaxKind::KwDistinct => {
                self.start_node(SyntaxKind::DistinctFrom);
                self.parse_keyword_seq(
                    SyntaxKind::KwDistinctFrom,
                    &[SyntaxKind::KwDistinct, SyntaxKind::KwFrom],
                );
                self.parse_operand_bp(DISTINCT_FROM_OPERAND_BP, "after `DISTINCT FROM`");
                self.finish_node();
            }
            _ => self.error_msg(
                DiagnosticKind::ExpectedToken,
                "`NULL`, `TRUE`, `FALSE` or `DISTINCT FROM` after `IS`",
            ),
        }
    }

    /// `( expr, ... )` after `IN`
    fn parse_tuple(&mut self) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the `IN` list");
            return;
        }
        self.start_node(SyntaxKind::Tuple);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_comma_separated(Self::parse_expr);
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    fn parse_operand(&mut self, checkpoint: Checkpoint) {
        match self.current() {
            SyntaxKind::ParenOpen => self.parse_parenthesized(checkpoint),
            SyntaxKind::KwStruct => self.parse_struct(),
            SyntaxKind::KwArray | SyntaxKind::BracketOpen => self.parse_array(),
            SyntaxKind::StringOpen => {
                self.parse_string();
                self.parse_type_cast_suffix(checkpoint);
            }
            SyntaxKind::Integer | SyntaxKind::Float => self.parse_number(),
            SyntaxKind::Plus | SyntaxKind::Minus if self.at_signed_float() => self.parse_number(),
            kind if NUMERIC_KEYWORDS.contains(kind) => {
                if !self.parse_numeric_number() {
                    self.parse_identifier_expression(checkpoint);
                }
            }
            kind if TIME_KEYWORDS.contains(kind) && self.next_is(SyntaxKind::StringOpen) => {
                self.parse_time();
            }
            SyntaxKind::KwNull
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse
            | SyntaxKind::QueryParameter => self.bump(),
            SyntaxKind::Star => self.parse_asterisk_expression(),
            SyntaxKind::Dollar => self.parse_argument_reference(checkpoint),
            SyntaxKind::KwUnnest => self.parse_unnest_clause(),
            kind if is_identifier_start(kind) => self.parse_identifier_expression(checkpoint),
            _ => self.error(DiagnosticKind::ExpectedExpression),
        }
    }

    /// `(SELECT ...)` | `(expr)` | `(aliasable, ...)` as a struct
    ///
    /// A single unaliased element is a parenthesized expression and opens no
    /// node; a comma or an alias turns the whole group into a `struct`.
    fn parse_parenthesized(&mut self, checkpoint: Checkpoint) {
        if matches!(
            self.peek_nth(1),
            SyntaxKind::KwSelect | SyntaxKind::KwWith
        ) {
            self.parse_select_subexpression();
            return;
        }

        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.currently_is(SyntaxKind::ParenClose) {
            self.error_msg(DiagnosticKind::ExpectedExpression, "inside `()`");
            self.close_delimiter(SyntaxKind::ParenClose);
            return;
        }

        let aliased = self.parse_aliasable();
        if aliased || self.currently_is(SyntaxKind::Comma) {
            self.start_node_at(checkpoint, SyntaxKind::Struct);
            while !self.should_stop() && self.eat_token(SyntaxKind::Comma) {
                self.parse_aliasable();
            }
            self.close_delimiter(SyntaxKind::ParenClose);
            self.finish_node();
            return;
        }

        self.close_delimiter(SyntaxKind::ParenClose);
        self.parse_type_cast_suffix(checkpoint);
    }

    /// `( select_statement )`
    pub(crate) fn parse_select_subexpression(&mut self) {
        self.start_node(SyntaxKind::SelectSubexpression);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_select_statement();
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// `expr [[AS] identifier]`, wrapped in `alias` when a name follows.
    ///
    /// Returns whether an alias was parsed.
    pub(crate) fn parse_aliasable(&mut self) -> bool {
        let checkpoint = self.checkpoint();
        self.parse_expr();

        if self.currently_is(SyntaxKind::KwAs) {
            self.start_node_at(checkpoint, SyntaxKind::Alias);
            self.bump();
            self.expect_identifier("after `AS`");
            self.finish_node();
            return true;
        }
        if self.at_identifier_start() {
            self.start_node_at(checkpoint, SyntaxKind::Alias);
            self.parse_identifier();
            self.finish_node();
            return true;
        }
        false
    }

    /// `a.b.c`, each part an unquoted identifier, a quoted identifier or a
    /// contextual keyword.
    pub(crate) fn parse_identifier(&mut self) {
        self.start_node(SyntaxKind::Identifier);
        self.bump_identifier_part();
        while self.currently_is(SyntaxKind::Dot) && is_identifier_start(self.peek_nth(1)) {
            self.bump();
            self.bump_identifier_part();
        }
        self.finish_node();
    }

    pub(crate) fn expect_identifier(&mut self, context: &str) -> bool {
        if self.at_identifier_start() {
            self.parse_identifier();
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedIdentifier, context);
        false
    }

    /// Contextual keywords used as names become plain identifier tokens.
    pub(crate) fn bump_identifier_part(&mut self) {
        let kind = self.current();
        if kind.is_contextual_keyword() {
            self.bump_as(SyntaxKind::Id);
        } else {
            self.bump();
        }
    }

    /// Identifier followed by its postfix forms: call, `->>`, `[i]`, `::type`.
    fn parse_identifier_expression(&mut self, checkpoint: Checkpoint) {
        if self.at_qualified_asterisk() {
            self.parse_asterisk_expression();
            return;
        }

        self.parse_identifier();
        match self.current() {
            SyntaxKind::ParenOpen => {
                self.start_node_at(checkpoint, SyntaxKind::FunctionCall);
                self.parse_call_arguments();
                self.finish_node();
                self.parse_type_cast_suffix(checkpoint);
            }
            SyntaxKind::ArrowText => {
                self.start_node_at(checkpoint, SyntaxKind::FieldAccess);
                self.bump();
                if self.currently_is(SyntaxKind::StringOpen) {
                    self.parse_string();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedString, "after `->>`");
                }
                self.finish_node();
            }
            SyntaxKind::BracketOpen => self.parse_element_access_suffix(checkpoint),
            SyntaxKind::DoubleColon => self.parse_type_cast_suffix(checkpoint),
            _ => {}
        }
    }

    /// `( [expr, ...] )` of a function call.
    pub(crate) fn parse_call_arguments(&mut self) {
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        if !self.currently_is(SyntaxKind::ParenClose) {
            self.parse_comma_separated(Self::parse_expr);
        }
        self.close_delimiter(SyntaxKind::ParenClose);
    }

    fn parse_element_access_suffix(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ArrayElementAccess);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();
        self.parse_operand_bp(0, "as the element index");
        self.close_delimiter(SyntaxKind::BracketClose);
        self.finish_node();
    }

    /// `:: type`, at most once.
    fn parse_type_cast_suffix(&mut self, checkpoint: Checkpoint) {
        if !self.currently_is(SyntaxKind::DoubleColon) {
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::TypeCast);
        self.bump();
        self.parse_type();
        self.finish_node();
    }

    fn at_qualified_asterisk(&mut self) -> bool {
        let len = self.dotted_identifier_len(0);
        len > 0 && self.peek_nth(len) == SyntaxKind::Dot && self.peek_nth(len + 1) == SyntaxKind::Star
    }

    /// `*` | `t.*`
    ///
    /// A longer prefix (`s.t.*`) is still wrapped as one node, with an error
    /// on the second qualifier.
    fn parse_asterisk_expression(&mut self) {
        self.start_node(SyntaxKind::AsteriskExpression);
        let mut qualifiers = 0;
        loop {
            match self.current() {
                SyntaxKind::Star => {
                    self.bump();
                    break;
                }
                SyntaxKind::Dot => self.bump(),
                kind if is_identifier_start(kind) => {
                    qualifiers += 1;
                    if qualifiers == 2 {
                        self.error_msg(
                            DiagnosticKind::UnexpectedToken,
                            "`.*` takes a single qualifier",
                        );
                    }
                    self.bump_identifier_part();
                }
                _ => {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`*`");
                    break;
                }
            }
        }
        self.finish_node();
    }

    /// `$1`, optionally indexed: `$1[0]`
    fn parse_argument_reference(&mut self, checkpoint: Checkpoint) {
        self.start_node(SyntaxKind::ArgumentReference);
        self.bump();
        if !self.eat_token(SyntaxKind::Integer) {
            self.error_msg(DiagnosticKind::ExpectedNumber, "argument position after `$`");
        }
        self.finish_node();

        if self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_element_access_suffix(checkpoint);
        }
    }

    /// `UNNEST(array | name | call) [AS identifier] [WITH OFFSET [AS name]]`
    fn parse_unnest_clause(&mut self) {
        self.start_node(SyntaxKind::UnnestClause);

        self.start_node(SyntaxKind::UnnestOperator);
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_unnest_argument();
            self.close_delimiter(SyntaxKind::ParenClose);
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` after `UNNEST`");
        }
        self.finish_node();

        if self.eat_token(SyntaxKind::KwAs) {
            self.expect_identifier("after `AS`");
        }

        if self.at_keyword_seq(&[SyntaxKind::KwWith, SyntaxKind::KwOffset]) {
            self.start_node(SyntaxKind::UnnestWithoffset);
            self.parse_keyword_seq(
                SyntaxKind::KwWithOffset,
                &[SyntaxKind::KwWith, SyntaxKind::KwOffset],
            );
            if self.eat_token(SyntaxKind::KwAs) {
                if self.at_identifier_start() {
                    self.bump_identifier_part();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedIdentifier, "offset name after `AS`");
                }
            }
            self.finish_node();
        }

        self.finish_node();
    }

    /// A bare name stays a plain token; dotted names and calls get nodes.
    fn parse_unnest_argument(&mut self) {
        match self.current() {
            SyntaxKind::KwArray | SyntaxKind::BracketOpen => self.parse_array(),
            kind if is_identifier_start(kind) => {
                if !matches!(
                    self.peek_nth(1),
                    SyntaxKind::Dot | SyntaxKind::ParenOpen
                ) {
                    self.bump_identifier_part();
                    return;
                }
                let checkpoint = self.checkpoint();
                self.parse_identifier();
                if self.currently_is(SyntaxKind::ParenOpen) {
                    self.start_node_at(checkpoint, SyntaxKind::FunctionCall);
                    self.parse_call_arguments();
                    self.finish_node();
                }
            }
            _ => self.error_msg(
                DiagnosticKind::ExpectedExpression,
                "an array, a name or a function call inside `UNNEST`",
            ),
        }
    }
}
