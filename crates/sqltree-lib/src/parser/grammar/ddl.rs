use super::keywords::is_identifier_start;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ARGMODES, DIRECTIONS, OPTIMIZER_HINTS, PARALLEL_LEVELS};
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    /// `type` (`name [( n )]`), then `[]` suffixes nesting into `array_type`.
    ///
    /// Returns `false` when no type starts here.
    pub(crate) fn parse_type(&mut self) -> bool {
        if !self.at_identifier_start() {
            self.error(DiagnosticKind::ExpectedType);
            return false;
        }

        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::Type);
        self.parse_identifier();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            if self.currently_is(SyntaxKind::Integer) {
                self.parse_number();
            } else {
                self.error_msg(DiagnosticKind::ExpectedNumber, "type length");
            }
            self.close_delimiter(SyntaxKind::ParenClose);
        }
        self.finish_node();

        while self.currently_is(SyntaxKind::BracketOpen) {
            self.start_node_at(checkpoint, SyntaxKind::ArrayType);
            self.push_delimiter(SyntaxKind::BracketOpen);
            self.bump();
            self.close_delimiter(SyntaxKind::BracketClose);
            self.finish_node();
        }
        true
    }

    /// `_type` optionally followed by `[NOT] NULL`, wrapped in `constrained_type`.
    fn parse_maybe_constrained_type(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.parse_type() {
            return;
        }
        if self.at_null_constraint() {
            self.start_node_at(checkpoint, SyntaxKind::ConstrainedType);
            self.parse_null_constraint();
            self.finish_node();
        }
    }

    fn parse_if_not_exists(&mut self) {
        if self.currently_is(SyntaxKind::KwIf) && self.next_is(SyntaxKind::KwNot) {
            self.parse_keyword_seq(
                SyntaxKind::KwIfNotExists,
                &[SyntaxKind::KwIf, SyntaxKind::KwNot, SyntaxKind::KwExists],
            );
        }
    }

    /// `CREATE TABLE [IF NOT EXISTS] name ( column, ... )`
    pub(crate) fn parse_create_table_statement(&mut self) {
        self.start_node(SyntaxKind::CreateTableStatement);
        self.parse_keyword_seq(
            SyntaxKind::KwCreateTable,
            &[SyntaxKind::KwCreate, SyntaxKind::KwTable],
        );
        self.parse_if_not_exists();
        self.expect_identifier("table name");

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::CreateTableParameters);
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(Self::parse_column_definition);
            self.close_delimiter(SyntaxKind::ParenClose);
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the column list");
        }

        self.finish_node();
    }

    /// `name type [DEFAULT value]*`
    fn parse_column_definition(&mut self) {
        if !self.at_identifier_start() {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "column name");
            return;
        }
        self.start_node(SyntaxKind::CreateTableColumnParameter);
        self.parse_identifier();
        self.parse_type();
        while !self.should_stop() && self.currently_is(SyntaxKind::KwDefault) {
            self.parse_column_default();
        }
        self.finish_node();
    }

    /// `DEFAULT (expr) | string | identifier | call`, any of them cast with `::`.
    fn parse_column_default(&mut self) {
        self.start_node(SyntaxKind::ColumnDefault);
        self.bump();
        let kind = self.current();
        if matches!(kind, SyntaxKind::ParenOpen | SyntaxKind::StringOpen)
            || is_identifier_start(kind)
        {
            // Operand only; casts ride along as a postfix.
            self.parse_expr_bp(u8::MAX);
        } else {
            self.error_msg(
                DiagnosticKind::ExpectedExpression,
                "default value: parenthesized expression, string, name or function call",
            );
        }
        self.finish_node();
    }

    /// `CREATE SCHEMA [IF NOT EXISTS] name`
    pub(crate) fn parse_create_schema_statement(&mut self) {
        self.start_node(SyntaxKind::CreateSchemaStatement);
        self.parse_keyword_seq(
            SyntaxKind::KwCreateSchema,
            &[SyntaxKind::KwCreate, SyntaxKind::KwSchema],
        );
        self.parse_if_not_exists();
        self.expect_identifier("schema name");
        self.finish_node();
    }

    /// `CREATE [OR REPLACE] FUNCTION name ( params ) RETURNS type hint*`
    pub(crate) fn parse_create_function_statement(&mut self) {
        self.start_node(SyntaxKind::CreateFunctionStatement);

        self.start_node(SyntaxKind::KwCreateOrReplaceFunction);
        self.bump();
        if self.eat_token(SyntaxKind::KwOr) {
            self.expect(SyntaxKind::KwReplace, "`REPLACE` after `OR`");
        }
        self.expect(SyntaxKind::KwFunction, "`FUNCTION`");
        self.finish_node();

        self.expect_identifier("function name");

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::CreateFunctionParameters);
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(Self::parse_function_parameter);
            self.close_delimiter(SyntaxKind::ParenClose);
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the parameter list");
        }

        if self.expect(SyntaxKind::KwReturns, "`RETURNS`") {
            self.parse_return_type();
        }

        while !self.should_stop() && self.parse_function_hint() {}

        self.finish_node();
    }

    /// `[argmode] [name] type [= default]`
    fn parse_function_parameter(&mut self) {
        self.start_node(SyntaxKind::CreateFunctionParameter);

        if self.currently_is_one_of(ARGMODES) && is_identifier_start(self.peek_nth(1)) {
            self.bump();
        }

        let name_len = self.dotted_identifier_len(0);
        if name_len > 0 && is_identifier_start(self.peek_nth(name_len)) {
            self.parse_identifier();
        }

        self.parse_maybe_constrained_type();

        if self.eat_token(SyntaxKind::Equals) {
            if self.at_expression_start() {
                self.start_node(SyntaxKind::ParamDefault);
                self.parse_expr();
                self.finish_node();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "default value after `=`");
            }
        }

        self.finish_node();
    }

    /// `SETOF type` | `type [NOT] NULL` | `type`
    fn parse_return_type(&mut self) {
        if self.currently_is(SyntaxKind::KwSetof) && is_identifier_start(self.peek_nth(1)) {
            self.start_node(SyntaxKind::Setof);
            self.bump();
            self.parse_maybe_constrained_type();
            self.finish_node();
            return;
        }
        self.parse_maybe_constrained_type();
    }

    /// One trailing hint of `CREATE FUNCTION`. Returns `false` when none starts here.
    fn parse_function_hint(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwLanguage => {
                self.bump();
                if self.currently_is(SyntaxKind::Id) || self.current().is_contextual_keyword() {
                    self.bump_as(SyntaxKind::LanguageName);
                } else {
                    self.error_msg(DiagnosticKind::ExpectedIdentifier, "language name");
                }
            }
            SyntaxKind::KwAs => self.parse_function_body(),
            kind if OPTIMIZER_HINTS.contains(kind) => {
                self.start_node(SyntaxKind::OptimizerHint);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwParallel => {
                self.start_node(SyntaxKind::ParallelHint);
                self.bump();
                if self.currently_is_one_of(PARALLEL_LEVELS) {
                    self.bump();
                } else {
                    self.error_msg(
                        DiagnosticKind::ExpectedToken,
                        "`SAFE`, `UNSAFE` or `RESTRICTED` after `PARALLEL`",
                    );
                }
                self.finish_node();
            }
            SyntaxKind::KwCalled => {
                self.start_node(SyntaxKind::NullHint);
                self.parse_keyword_seq(
                    SyntaxKind::KwCalledOnNullInput,
                    &[
                        SyntaxKind::KwCalled,
                        SyntaxKind::KwOn,
                        SyntaxKind::KwNull,
                        SyntaxKind::KwInput,
                    ],
                );
                self.finish_node();
            }
            SyntaxKind::KwReturns if self.next_is(SyntaxKind::KwNull) => {
                self.start_node(SyntaxKind::NullHint);
                self.parse_keyword_seq(
                    SyntaxKind::KwReturnsNullOnNullInput,
                    &[
                        SyntaxKind::KwReturns,
                        SyntaxKind::KwNull,
                        SyntaxKind::KwOn,
                        SyntaxKind::KwNull,
                        SyntaxKind::KwInput,
                    ],
                );
                self.finish_node();
            }
            SyntaxKind::KwStrict => {
                self.start_node(SyntaxKind::NullHint);
                self.bump();
                self.finish_node();
            }
            _ => return false,
        }
        true
    }

    /// `AS $$ select [;] $$` | `AS ' select [;] '`
    fn parse_function_body(&mut self) {
        let close = match self.peek_nth(1) {
            SyntaxKind::DollarDollar => SyntaxKind::DollarDollar,
            SyntaxKind::StringOpen => match self.string_body_at(1) {
                Some((SyntaxKind::SingleQuote, body)) => {
                    self.split_string_at(1, SyntaxKind::SingleQuote, body);
                    SyntaxKind::SingleQuote
                }
                _ => {
                    self.error_and_bump_msg(
                        DiagnosticKind::UnexpectedToken,
                        "function bodies are `$$ ... $$` or `' ... '`",
                    );
                    return;
                }
            },
            _ => {
                self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "`AS` must be followed by the function body",
                );
                return;
            }
        };

        self.start_node(SyntaxKind::FunctionBody);
        self.bump();
        self.push_delimiter(close);
        self.bump();

        if matches!(self.current(), SyntaxKind::KwSelect | SyntaxKind::KwWith) {
            self.parse_select_statement();
        } else {
            self.error_msg(DiagnosticKind::ExpectedStatement, "function body must be a query");
        }
        self.eat_token(SyntaxKind::Semicolon);

        if !self.currently_is(close) && !self.should_stop() {
            self.start_node(SyntaxKind::Error);
            self.error_msg(DiagnosticKind::UnexpectedToken, "inside the function body");
            while !self.currently_is(close) && !self.should_stop() {
                self.bump();
            }
            self.finish_node();
        }
        self.close_delimiter(close);

        self.finish_node();
    }

    /// `CREATE DOMAIN name [AS type (null | check constraint)*]`
    pub(crate) fn parse_create_domain_statement(&mut self) {
        self.start_node(SyntaxKind::CreateDomainStatement);
        self.parse_keyword_seq(
            SyntaxKind::KwCreateDomain,
            &[SyntaxKind::KwCreate, SyntaxKind::KwDomain],
        );
        self.expect_identifier("domain name");

        if self.eat_token(SyntaxKind::KwAs) {
            self.parse_type();
            loop {
                if self.at_null_constraint() {
                    self.parse_null_constraint();
                } else if self.currently_is(SyntaxKind::KwCheck) {
                    self.parse_check_constraint();
                } else {
                    break;
                }
            }
        }

        self.finish_node();
    }

    /// `CREATE TYPE name AS ( name type, ... )`
    pub(crate) fn parse_create_type_statement(&mut self) {
        self.start_node(SyntaxKind::CreateTypeStatement);
        self.parse_keyword_seq(
            SyntaxKind::KwCreateType,
            &[SyntaxKind::KwCreate, SyntaxKind::KwType],
        );
        self.expect_identifier("type name");
        self.expect(SyntaxKind::KwAs, "`AS` after the type name");

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::Parameters);
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(|p| {
                if !p.at_identifier_start() {
                    p.error_msg(DiagnosticKind::ExpectedIdentifier, "attribute name");
                    return;
                }
                p.start_node(SyntaxKind::Parameter);
                p.parse_identifier();
                p.parse_type();
                p.finish_node();
            });
            self.close_delimiter(SyntaxKind::ParenClose);
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the attribute list");
        }

        self.finish_node();
    }

    /// `CREATE [UNIQUE] INDEX name ON table [USING method] ( key, ... ) [WHERE expr]`
    pub(crate) fn parse_create_index_statement(&mut self) {
        self.start_node(SyntaxKind::CreateIndexStatement);
        self.bump();
        if self.currently_is(SyntaxKind::KwUnique) {
            self.parse_unique_constraint();
        }
        self.expect(SyntaxKind::KwIndex, "`INDEX`");
        self.expect_identifier("index name");
        self.expect(SyntaxKind::KwOn, "`ON` after the index name");
        self.expect_identifier("indexed table");

        if self.currently_is(SyntaxKind::KwUsing) {
            self.start_node(SyntaxKind::UsingClause);
            self.bump();
            self.expect_identifier("index method after `USING`");
            self.finish_node();
        }

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::IndexTableParameters);
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_comma_separated(|p| {
                let checkpoint = p.checkpoint();
                p.parse_expr();
                if p.currently_is_one_of(DIRECTIONS) {
                    p.start_node_at(checkpoint, SyntaxKind::OrderedExpression);
                    p.bump();
                    p.finish_node();
                }
            });
            self.close_delimiter(SyntaxKind::ParenClose);
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to open the key list");
        }

        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }

        self.finish_node();
    }
}
