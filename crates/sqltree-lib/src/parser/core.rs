//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, lex_range, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::trace::Tracer;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src, 't, T: Tracer> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    tracer: &'t mut T,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src, 't, T: Tracer> Parser<'src, 't, T> {
    pub fn new(source: &'src str, tokens: Vec<Token>, tracer: &'t mut T) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            tracer,
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Returns the green tree, the diagnostics and the exec fuel consumed.
    pub(crate) fn finish(mut self) -> Result<(GreenNode, Diagnostics, u32), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok((self.builder.finish(), self.diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Current non-trivia kind. `Error` stands for end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// True once only trivia (or nothing) is left.
    pub(super) fn eof(&self) -> bool {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .all(|t| t.kind.is_trivia())
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if count == n {
                    return kind;
                }
                count += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Whether the raw token right after the current one is `kind` and touches it.
    pub(super) fn next_is_adjacent(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia_to_buffer();
        match (self.tokens.get(self.pos), self.tokens.get(self.pos + 1)) {
            (Some(cur), Some(next)) => next.kind == kind && cur.span.end() == next.span.start(),
            _ => false,
        }
    }

    /// Text of the raw token `lookahead` positions past the cursor, trivia included.
    pub(super) fn raw_text(&self, lookahead: usize) -> &'src str {
        self.tokens
            .get(self.pos + lookahead)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.tracer.trace_token(token.kind, text);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.tracer.trace_enter(kind);
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.tracer.trace_wrap(kind);
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.tracer.trace_exit();
        self.builder.finish_node();
    }

    /// Trivia ahead of the cursor stays outside any node wrapped at this point.
    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        let kind = self.nth_raw(0);
        self.bump_as(kind);
    }

    /// Consumes the current token under a different kind (`sql` after
    /// `LANGUAGE` becomes a `LanguageName` leaf).
    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.tracer.trace_token(kind, text);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    /// Consumes `count` adjacent raw tokens as one token of `kind`.
    pub(super) fn bump_merged(&mut self, count: usize, kind: SyntaxKind) {
        self.skip_trivia_to_buffer();
        assert!(
            self.pos + count <= self.tokens.len(),
            "bump_merged past end of input"
        );
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let start = self.tokens[self.pos].span.start();
        let end = self.tokens[self.pos + count - 1].span.end();
        let text = &self.source[TextRange::new(start, end)];
        self.tracer.trace_token(kind, text);
        self.builder.token(kind.into(), text);
        self.pos += count;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        false
    }

    /// Raw index of the `n`-th non-trivia token from the cursor.
    fn nth_index(&mut self, n: usize) -> Option<usize> {
        self.skip_trivia_to_buffer();
        self.tokens[self.pos..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(i, _)| self.pos + i)
    }

    /// Lexes the body of the `n`-th string ahead as SQL.
    ///
    /// Returns the quote kind and the body tokens, or `None` when that token is
    /// not a plain `'...'` / `"..."` string (prefixed and triple-quoted strings
    /// are never re-lexed).
    pub(super) fn string_body_at(&mut self, n: usize) -> Option<(SyntaxKind, Vec<Token>)> {
        let index = self.nth_index(n)?;
        let open = self.tokens[index];
        if open.kind != SyntaxKind::StringOpen {
            return None;
        }
        let quote = match token_text(self.source, &open) {
            "'" => SyntaxKind::SingleQuote,
            "\"" => SyntaxKind::DoubleQuote,
            _ => return None,
        };
        let next = self.tokens[index + 1];
        if next.kind != SyntaxKind::StringContent {
            return Some((quote, Vec::new()));
        }
        Some((quote, lex_range(self.source, next.span.into())))
    }

    /// Replaces the `n`-th string ahead by bare quote tokens around `body`.
    ///
    /// `quote` and `body` must come from [`Self::string_body_at`] with the same `n`.
    pub(super) fn split_string_at(&mut self, n: usize, quote: SyntaxKind, body: Vec<Token>) {
        let Some(index) = self.nth_index(n) else {
            return;
        };
        let open = self.tokens[index];
        let has_content = self.tokens[index + 1].kind == SyntaxKind::StringContent;
        let close_index = if has_content { index + 2 } else { index + 1 };
        let close = self.tokens[close_index];

        let mut replacement = Vec::with_capacity(body.len() + 2);
        replacement.push(Token::new(quote, open.span));
        replacement.extend(body);
        replacement.push(Token::new(quote, close.span));
        self.tokens.splice(index..=close_index, replacement);
    }

    pub(super) fn current_suppression_span(&mut self) -> TextRange {
        self.delimiter_stack
            .last()
            .map(|d| TextRange::new(d.span.start(), TextSize::from(self.source.len() as u32)))
            .unwrap_or_else(|| self.current_span())
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    fn get_error_ranges(&mut self) -> Option<(TextRange, TextRange)> {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return None;
        }
        let suppression = self.current_suppression_span();
        Some((range, suppression))
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        let builder = self
            .diagnostics
            .report(kind, range)
            .suppression_range(suppression);
        self.tracer.trace_diagnostic(kind, range, builder.text());
        builder.emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        let builder = self
            .diagnostics
            .report(kind, range)
            .message(message)
            .suppression_range(suppression);
        self.tracer.trace_diagnostic(kind, range, builder.text());
        builder.emit();
    }

    /// Reports at an explicit range, bypassing the one-per-position throttle.
    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        let builder = self.diagnostics.report(kind, range).message(message);
        self.tracer.trace_diagnostic(kind, range, builder.text());
        builder.emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Wraps tokens up to the recovery set in one `Error` node.
    ///
    /// At least one token is consumed, so callers looping on this make progress.
    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        recovery: TokenSet,
    ) {
        if self.should_stop() {
            self.error_msg(kind, message);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_msg(kind, message);
        self.bump();
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Consumes the closing delimiter matching the innermost open one, or
    /// reports it as unclosed.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind) -> bool {
        let open = self.pop_delimiter();
        if self.eat_token(close) {
            return true;
        }
        let Some(open) = open else {
            self.error_msg(DiagnosticKind::ExpectedToken, format!("`{}`", close.name()));
            return false;
        };
        let (kind, related) = match open.kind {
            SyntaxKind::BracketOpen => (DiagnosticKind::UnclosedBracket, "`[` opened here"),
            SyntaxKind::ParenOpen => (DiagnosticKind::UnclosedParen, "`(` opened here"),
            _ => (DiagnosticKind::UnclosedFunctionBody, "body opened here"),
        };
        self.error_unclosed_delimiter(kind, related, open.span);
        false
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        // Use full range for easier downstream error suppression
        let full_range = TextRange::new(open_range.start(), current.end());
        let builder = self
            .diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range);
        self.tracer.trace_diagnostic(kind, full_range, builder.text());
        builder.emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }
}
