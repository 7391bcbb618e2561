use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::DIRECTIONS;
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    /// `[cte] select [from] join* [where] [group by] [having] [qualify]
    /// [window] [order by] [limit]`
    pub(crate) fn parse_select_statement(&mut self) {
        self.start_node(SyntaxKind::SelectStatement);

        if self.currently_is(SyntaxKind::KwWith) {
            self.parse_cte_clause();
        }

        if self.currently_is(SyntaxKind::KwSelect) {
            self.parse_select_clause();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`SELECT`");
        }

        if self.currently_is(SyntaxKind::KwFrom) {
            self.parse_from_clause();
        }
        while !self.should_stop() && self.at_join_start() {
            self.parse_join_clause();
        }
        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }
        if self.currently_is(SyntaxKind::KwGroup) {
            self.parse_group_by_clause();
        }
        if self.currently_is(SyntaxKind::KwHaving) {
            self.parse_condition_clause(SyntaxKind::HavingClause);
        }
        if self.currently_is(SyntaxKind::KwQualify) {
            self.parse_condition_clause(SyntaxKind::QualifyClause);
        }
        if self.currently_is(SyntaxKind::KwWindow) {
            self.parse_window_clause();
        }
        if self.currently_is(SyntaxKind::KwOrder) {
            self.parse_order_by_clause();
        }
        if self.currently_is(SyntaxKind::KwLimit) {
            self.parse_limit_clause();
        }

        self.finish_node();
    }

    /// `WITH name AS [SELECT] body, ...`
    fn parse_cte_clause(&mut self) {
        self.start_node(SyntaxKind::CteClause);
        self.bump();
        self.parse_comma_separated(|p| {
            p.expect_identifier("CTE name");
            p.expect(SyntaxKind::KwAs, "`AS` after the CTE name");
            p.eat_token(SyntaxKind::KwSelect);
            p.parse_select_clause_body();
        });
        self.finish_node();
    }

    /// `SELECT [body]`
    fn parse_select_clause(&mut self) {
        self.start_node(SyntaxKind::SelectClause);
        self.bump();
        if self.at_expression_start() {
            self.parse_select_clause_body();
        }
        self.finish_node();
    }

    fn parse_select_clause_body(&mut self) {
        self.start_node(SyntaxKind::SelectClauseBody);
        self.parse_comma_separated(|p| {
            p.parse_aliasable();
        });
        self.finish_node();
    }

    /// `FROM aliasable, ...`
    fn parse_from_clause(&mut self) {
        self.start_node(SyntaxKind::FromClause);
        self.bump();
        self.parse_comma_separated(|p| {
            p.parse_aliasable();
        });
        self.finish_node();
    }

    fn at_join_start(&mut self) -> bool {
        matches!(
            self.current(),
            SyntaxKind::KwJoin
                | SyntaxKind::KwInner
                | SyntaxKind::KwLeft
                | SyntaxKind::KwRight
                | SyntaxKind::KwFull
        )
    }

    /// `[join_type] JOIN identifier ON expr`
    fn parse_join_clause(&mut self) {
        self.start_node(SyntaxKind::JoinClause);

        if !self.currently_is(SyntaxKind::KwJoin) {
            self.start_node(SyntaxKind::JoinType);
            if self.currently_is(SyntaxKind::KwInner) {
                self.bump();
            } else {
                self.bump();
                self.eat_token(SyntaxKind::KwOuter);
            }
            self.finish_node();
        }

        self.expect(SyntaxKind::KwJoin, "`JOIN`");
        self.expect_identifier("joined table");
        if self.expect(SyntaxKind::KwOn, "`ON` after the joined table") {
            self.parse_expr();
        }

        self.finish_node();
    }

    /// `WHERE expr`
    pub(crate) fn parse_where_clause(&mut self) {
        self.start_node(SyntaxKind::WhereClause);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    /// `GROUP BY body` | `GROUP BY ROLLUP ( body )`
    fn parse_group_by_clause(&mut self) {
        self.start_node(SyntaxKind::GroupByClause);
        self.parse_keyword_seq(SyntaxKind::KwGroupBy, &[SyntaxKind::KwGroup, SyntaxKind::KwBy]);

        if self.currently_is(SyntaxKind::KwRollup) && self.next_is(SyntaxKind::ParenOpen) {
            self.bump();
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_group_by_clause_body();
            self.close_delimiter(SyntaxKind::ParenClose);
        } else {
            self.parse_group_by_clause_body();
        }

        self.finish_node();
    }

    fn parse_group_by_clause_body(&mut self) {
        self.start_node(SyntaxKind::GroupByClauseBody);
        self.parse_comma_separated(Self::parse_expr);
        self.finish_node();
    }

    /// `HAVING cond` / `QUALIFY cond`. Any expression is kept in the tree;
    /// a non-boolean one draws a warning.
    fn parse_condition_clause(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        let keyword = self.current();
        self.bump();

        let start = self.current_span().start();
        let top = self.parse_expr_bp(0);

        if top != Some(SyntaxKind::BooleanExpression)
            && let Some(end) = self.last_non_trivia_end()
            && end > start
        {
            self.error_at(
                DiagnosticKind::NonBooleanCondition,
                TextRange::new(start, end),
                keyword.name(),
            );
        }

        self.finish_node();
    }

    /// `WINDOW name AS (name | window_specification)`
    fn parse_window_clause(&mut self) {
        self.start_node(SyntaxKind::WindowClause);
        self.bump();

        self.start_node(SyntaxKind::NamedWindowExpression);
        self.expect_identifier("window name");
        self.expect(SyntaxKind::KwAs, "`AS` after the window name");
        if self.at_identifier_start() {
            let checkpoint = self.checkpoint();
            self.parse_identifier();
            if self.at_keyword_seq(&[SyntaxKind::KwPartition, SyntaxKind::KwBy])
                || self.currently_is(SyntaxKind::KwOrder)
            {
                self.start_node_at(checkpoint, SyntaxKind::WindowSpecification);
                if self.currently_is(SyntaxKind::KwPartition) {
                    self.parse_keyword_seq(
                        SyntaxKind::KwPartitionBy,
                        &[SyntaxKind::KwPartition, SyntaxKind::KwBy],
                    );
                }
                if self.currently_is(SyntaxKind::KwOrder) {
                    self.parse_order_by_clause();
                }
                self.finish_node();
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "window definition");
        }
        self.finish_node();

        self.finish_node();
    }

    /// `ORDER BY expr [ASC|DESC], ...`
    fn parse_order_by_clause(&mut self) {
        self.start_node(SyntaxKind::OrderByClause);
        self.parse_keyword_seq(SyntaxKind::KwOrderBy, &[SyntaxKind::KwOrder, SyntaxKind::KwBy]);

        self.start_node(SyntaxKind::OrderByClauseBody);
        self.parse_comma_separated(|p| {
            p.parse_expr();
            if p.currently_is_one_of(DIRECTIONS) {
                p.bump();
            }
        });
        self.finish_node();

        self.finish_node();
    }

    /// `LIMIT n [OFFSET m]`
    fn parse_limit_clause(&mut self) {
        self.start_node(SyntaxKind::LimitClause);
        self.bump();
        if !self.eat_token(SyntaxKind::Integer) {
            self.error_msg(DiagnosticKind::ExpectedNumber, "row count after `LIMIT`");
        }
        if self.eat_token(SyntaxKind::KwOffset) && !self.eat_token(SyntaxKind::Integer) {
            self.error_msg(DiagnosticKind::ExpectedNumber, "row offset after `OFFSET`");
        }
        self.finish_node();
    }
}
