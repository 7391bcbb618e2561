use super::keywords::is_identifier_start;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{NUMERIC_KEYWORDS, TIME_KEYWORDS};
use crate::parser::lexer::Token;
use crate::trace::Tracer;

/// Re-lexed string body holding exactly one integer or float.
fn is_lone_number(body: &[Token]) -> bool {
    let mut significant = body.iter().filter(|t| !t.kind.is_trivia());
    matches!(
        (significant.next(), significant.next()),
        (Some(t), None) if matches!(t.kind, SyntaxKind::Integer | SyntaxKind::Float)
    )
}

impl<T: Tracer> Parser<'_, '_, T> {
    /// `'...'`, `"..."`, `'''...'''`, `"""..."""`, with optional `b`/`r` prefixes.
    pub(crate) fn parse_string(&mut self) {
        self.assert_current(SyntaxKind::StringOpen);
        self.start_node(SyntaxKind::Str);
        self.bump();
        self.eat_token(SyntaxKind::StringContent);
        let closed = self.eat_token(SyntaxKind::StringClose);
        assert!(
            closed,
            "parse_string: lexer should only produce complete strings"
        );
        self.finish_node();
    }

    /// `+` / `-` glued to a float with a leading digit and a decimal point.
    pub(crate) fn at_signed_float(&mut self) -> bool {
        if !matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            return false;
        }
        if !self.next_is_adjacent(SyntaxKind::Float) {
            return false;
        }
        let float = self.raw_text(1);
        float.starts_with(|c: char| c.is_ascii_digit()) && float.contains('.')
    }

    /// `1`, `2.5`, `-2.5`
    pub(crate) fn parse_number(&mut self) {
        self.start_node(SyntaxKind::Number);
        if self.at_signed_float() {
            self.bump_merged(2, SyntaxKind::Float);
        } else {
            self.bump();
        }
        self.finish_node();
    }

    /// `NUMERIC '1.5'` and friends as a `number` wrapping `numeric`.
    ///
    /// Returns `false` without consuming anything when no quoted number
    /// follows; the keyword is then a plain name.
    pub(crate) fn parse_numeric_number(&mut self) -> bool {
        let Some((quote, body)) = self.string_body_at(1) else {
            return false;
        };
        if !is_lone_number(&body) {
            return false;
        }
        self.split_string_at(1, quote, body);

        self.start_node(SyntaxKind::Number);
        self.start_node(SyntaxKind::Numeric);
        self.bump();
        self.bump();
        self.bump();
        self.expect(quote, "closing quote of the numeric literal");
        self.finish_node();
        self.finish_node();
        true
    }

    /// `DATE '2020-01-01'`
    pub(crate) fn parse_time(&mut self) {
        self.start_node(SyntaxKind::Time);
        self.bump();
        self.parse_string();
        self.finish_node();
    }

    /// `[ARRAY[<type>]] [literal, ...]`
    pub(crate) fn parse_array(&mut self) {
        self.start_node(SyntaxKind::Array);

        if self.eat_token(SyntaxKind::KwArray) && self.eat_token(SyntaxKind::Less) {
            match self.current() {
                SyntaxKind::KwStruct => self.parse_type_struct(),
                SyntaxKind::Id => self.bump(),
                _ => self.error_msg(DiagnosticKind::ExpectedType, "array element type"),
            }
            self.expect(SyntaxKind::Greater, "`>` to close the element type");
        }

        if self.currently_is(SyntaxKind::BracketOpen) {
            self.push_delimiter(SyntaxKind::BracketOpen);
            self.bump();
            if !self.currently_is(SyntaxKind::BracketClose) {
                self.parse_comma_separated(Self::parse_literal);
            }
            self.close_delimiter(SyntaxKind::BracketClose);
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`[` to open the array");
        }

        self.finish_node();
    }

    /// Array element. Names stay bare tokens here.
    fn parse_literal(&mut self) {
        match self.current() {
            SyntaxKind::QueryParameter
            | SyntaxKind::KwNull
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse => self.bump(),
            SyntaxKind::KwArray | SyntaxKind::BracketOpen => self.parse_array(),
            SyntaxKind::KwStruct | SyntaxKind::ParenOpen => self.parse_struct(),
            SyntaxKind::StringOpen => self.parse_string(),
            SyntaxKind::Integer | SyntaxKind::Float => self.parse_number(),
            SyntaxKind::Plus | SyntaxKind::Minus if self.at_signed_float() => self.parse_number(),
            kind if TIME_KEYWORDS.contains(kind) && self.next_is(SyntaxKind::StringOpen) => {
                self.parse_time();
            }
            kind if NUMERIC_KEYWORDS.contains(kind) && self.parse_numeric_number() => {}
            kind if is_identifier_start(kind) => self.bump_identifier_part(),
            _ => self.error_msg(
                DiagnosticKind::ExpectedExpression,
                "array elements are literals or names",
            ),
        }
    }

    /// `[STRUCT[<...>]] ( aliasable, ... )`
    pub(crate) fn parse_struct(&mut self) {
        self.start_node(SyntaxKind::Struct);

        if self.currently_is(SyntaxKind::KwStruct) {
            self.parse_type_struct();
        }

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(|p| {
                p.parse_aliasable();
            });
            self.close_delimiter(SyntaxKind::ParenClose);
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the struct");
        }

        self.finish_node();
    }

    /// `STRUCT<[name] type, ...>`: raw words, nested `STRUCT<...>` allowed.
    fn parse_type_struct(&mut self) {
        self.assert_current(SyntaxKind::KwStruct);
        if !self.enter_recursion() {
            return;
        }
        self.bump();

        if self.eat_token(SyntaxKind::Less) {
            loop {
                if self.currently_is(SyntaxKind::KwStruct) {
                    self.parse_type_struct();
                } else if self.at_struct_word() {
                    self.bump();
                    if self.currently_is(SyntaxKind::KwStruct) {
                        self.parse_type_struct();
                    } else if self.at_struct_word() {
                        self.bump();
                    }
                } else {
                    self.error_msg(DiagnosticKind::ExpectedType, "struct field type");
                    break;
                }
                if self.should_stop() || !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.expect(SyntaxKind::Greater, "`>` to close `STRUCT<...>`");
        }

        self.exit_recursion();
    }

    fn at_struct_word(&mut self) -> bool {
        let kind = self.current();
        matches!(kind, SyntaxKind::Id | SyntaxKind::Integer)
            || (kind.is_keyword() && kind != SyntaxKind::KwStruct)
    }
}
