//! Lexer for SQL source.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable for malformed input.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Splits `StringLiteral` tokens into open + content + close
pub fn lex(source: &str) -> Vec<Token> {
    lex_range(source, 0..source.len())
}

/// Tokenizes `source[range]`, reporting spans relative to the whole source.
///
/// Used to re-lex the inside of a string whose content is SQL
/// (`AS '...'` function bodies, `NUMERIC '1.5'`).
pub fn lex_range(source: &str, range: Range<usize>) -> Vec<Token> {
    let base = range.start;
    let text = &source[range];
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(text);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(base + start..base + end),
                    ));
                }

                let span = lexer.span();
                let span = base + span.start..base + span.end;
                if kind == SyntaxKind::StringLiteral {
                    split_string_literal(source, span, &mut tokens);
                } else {
                    tokens.push(Token::new(kind, range_to_text_range(span)));
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(base + start..base + text.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Splits a string literal token into: open + content + close.
///
/// The opening token carries the `b`/`r` prefix letters. Triple-quoted strings
/// have three-character delimiters. Empty strings have no content token.
fn split_string_literal(source: &str, span: Range<usize>, tokens: &mut Vec<Token>) {
    let text = &source[span.clone()];
    let prefix_len = text
        .bytes()
        .take_while(|b| matches!(b, b'b' | b'B' | b'r' | b'R'))
        .count();
    let body = &text[prefix_len..];
    let quote_len = if body.starts_with("'''") || body.starts_with("\"\"\"") {
        3
    } else {
        1
    };

    let start = span.start;
    let end = span.end;
    let open_end = start + prefix_len + quote_len;
    let close_start = end - quote_len;

    tokens.push(Token::new(
        SyntaxKind::StringOpen,
        range_to_text_range(start..open_end),
    ));

    if close_start > open_end {
        tokens.push(Token::new(
            SyntaxKind::StringContent,
            range_to_text_range(open_end..close_start),
        ));
    }

    tokens.push(Token::new(
        SyntaxKind::StringClose,
        range_to_text_range(close_start..end),
    ));
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
