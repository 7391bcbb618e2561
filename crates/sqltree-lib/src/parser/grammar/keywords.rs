use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::trace::Tracer;

/// Token that can start an identifier part: unquoted, backtick-quoted, or a
/// contextual keyword used as a name.
pub(crate) fn is_identifier_start(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::Id | SyntaxKind::QuotedId) || kind.is_contextual_keyword()
}

impl<T: Tracer> Parser<'_, '_, T> {
    /// `GROUP BY`, `IF NOT EXISTS`, ...: one anonymous node around the words.
    ///
    /// The first word must be current. Missing later words are reported but
    /// the node is still built.
    pub(crate) fn parse_keyword_seq(&mut self, kind: SyntaxKind, words: &[SyntaxKind]) {
        let Some((first, rest)) = words.split_first() else {
            return;
        };
        self.assert_current(*first);
        self.start_node(kind);
        self.bump();
        for word in rest {
            if !self.eat_token(*word) {
                self.error_msg(
                    DiagnosticKind::ExpectedToken,
                    format!("`{}` to complete `{}`", word.name(), kind.name()),
                );
                break;
            }
        }
        self.finish_node();
    }

    pub(crate) fn at_keyword_seq(&mut self, words: &[SyntaxKind]) -> bool {
        words
            .iter()
            .enumerate()
            .all(|(i, word)| self.peek_nth(i) == *word)
    }

    pub(crate) fn at_identifier_start(&mut self) -> bool {
        is_identifier_start(self.current())
    }

    /// Number of tokens spanned by the dotted identifier starting `n` tokens ahead.
    pub(crate) fn dotted_identifier_len(&mut self, n: usize) -> usize {
        if !is_identifier_start(self.peek_nth(n)) {
            return 0;
        }
        let mut len = 1;
        while self.peek_nth(n + len) == SyntaxKind::Dot
            && is_identifier_start(self.peek_nth(n + len + 1))
        {
            len += 2;
        }
        len
    }
}
