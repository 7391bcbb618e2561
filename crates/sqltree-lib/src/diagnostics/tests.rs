use rowan::TextRange;

use super::*;
use crate::Parse;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn unclosed_paren_carries_opening_span() {
    let parse = Parse::expect("SELECT (a");
    let filtered = parse.diagnostics().filtered();

    assert_eq!(filtered.len(), 1);
    let first = &filtered[0];
    assert_eq!(first.kind(), DiagnosticKind::UnclosedParen);
    assert_eq!(first.message(), "missing closing `)`");
    insta::assert_snapshot!(first.to_string(), @"error at 7..9: missing closing `)` (related: `(` opened here at 7..8)");
}

#[test]
fn unclosed_paren_renders_both_spans() {
    let src = "SELECT (a";
    let parse = Parse::expect(src);

    let result = parse.diagnostics().render_filtered(src);

    assert!(result.starts_with("error: missing closing `)`"));
    assert!(result.contains("1 | SELECT (a"));
    assert!(result.contains("`(` opened here"));
}

#[test]
fn rendered_path_is_shown() {
    let src = "SELECT a FROM";
    let parse = Parse::expect(src);

    let result = parse
        .diagnostics()
        .filtered_printer(src)
        .path("report.sql")
        .render();

    assert!(result.starts_with("error: expected an expression"));
    assert!(result.contains("report.sql"));
}

#[test]
fn colored_rendering_differs_from_plain() {
    let src = "SELECT a FROM";
    let parse = Parse::expect(src);

    let plain = parse.diagnostics().filtered_printer(src).render();
    let colored = parse
        .diagnostics()
        .filtered_printer(src)
        .colored(true)
        .render();

    assert!(!plain.contains('\x1b'));
    assert!(colored.contains('\x1b'));
}

#[test]
fn having_warning_renders_hint() {
    let src = "SELECT a FROM t GROUP BY a HAVING count(*) > 1";
    let parse = Parse::expect(src);
    let diagnostics = parse.diagnostics();

    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warning_count(), 1);

    let result = diagnostics.render(src);
    assert!(result.starts_with("warning: `HAVING` condition is not a boolean expression"));
    assert!(result.contains("e.g., `HAVING count(x) > 1 AND max(y) < 10`"));
}

#[test]
fn valid_parse_renders_nothing() {
    let src = "SELECT a FROM t WHERE a > 1;\n";
    let parse = Parse::expect(src);

    assert!(parse.diagnostics().is_empty());
    assert_eq!(parse.diagnostics().render(src), "");
}

#[test]
fn json_serialization_of_real_parse() {
    let parse = Parse::expect("SELECT (a");

    let filtered = parse.diagnostics().filtered();
    let json = serde_json::to_string_pretty(&filtered[0]).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "kind": "UnclosedParen",
      "severity": "error",
      "range": {
        "start": 7,
        "end": 9
      },
      "message": "missing closing `)`",
      "related": [
        {
          "range": {
            "start": 7,
            "end": 8
          },
          "message": "`(` opened here"
        }
      ]
    }
    "#);
}

#[test]
fn fix_renders_as_suggestion() {
    let src = "SELECT a FROM t GROUP BY a HAVING b";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NonBooleanCondition, range(34, 35))
        .message("HAVING")
        .fix("compare the value", "b > 0")
        .emit();

    let result = diagnostics.render(src);

    assert!(result.contains("compare the value"));
    assert!(result.contains("b > 0"));
}

#[test]
fn messages_compose_with_detail() {
    assert_eq!(
        DiagnosticKind::UnclosedParen.message(Some("inside `VALUES`")),
        "missing closing `)`; inside `VALUES`"
    );
    assert_eq!(
        DiagnosticKind::UnexpectedToken.message(Some("`;` without a statement")),
        "unexpected token: `;` without a statement"
    );
    assert_eq!(
        DiagnosticKind::ExpectedToken.message(Some("`SET`")),
        "expected `SET`"
    );
    assert_eq!(
        DiagnosticKind::NonBooleanCondition.message(Some("WHERE")),
        "`WHERE` condition is not a boolean expression"
    );
    assert_eq!(
        DiagnosticKind::ExpectedExpression.message(None),
        "expected an expression"
    );
}

#[test]
fn display_includes_default_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(18, 19))
        .emit();

    let first = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(first.to_string(), @"error at 18..19: expected a type (hint: e.g., `INT64`, `varchar(255)` or `text[]`)");
}

#[test]
fn delimiters_outrank_stray_tokens() {
    assert!(DiagnosticKind::UnclosedParen.suppresses(&DiagnosticKind::UnexpectedToken));
    assert!(DiagnosticKind::ExpectedExpression.suppresses(&DiagnosticKind::TrailingInput));
    assert!(!DiagnosticKind::UnclosedParen.suppresses(&DiagnosticKind::UnclosedParen));
    assert!(!DiagnosticKind::UnexpectedToken.suppresses(&DiagnosticKind::UnclosedBracket));
}

// === Cascade filtering ===

#[test]
fn unclosed_paren_hides_cascade_inside_it() {
    let src = "SELECT f(a, (b";
    let parse = Parse::expect(src);

    let filtered = parse.diagnostics().filtered();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::UnclosedParen);
    assert_eq!(filtered[0].range(), range(12, 14));
}

#[test]
fn disjoint_errors_both_survive() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(7, 9))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(20, 21))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn stray_token_inside_unclosed_paren_is_dropped() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(7, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(12, 13))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::UnclosedParen);
}

#[test]
fn trailing_input_yields_to_any_primary_error() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(25, 26))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn missing_operand_beats_unclosed_paren_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(7, 12))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(7, 8))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn widened_suppression_range_covers_later_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(2, 3))
        .suppression_range(range(0, 30))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(10, 12))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn render_filtered_skips_suppressed() {
    let src = "SELECT (a, b, c, d e";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(7, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(19, 20))
        .message("`e` after a list item")
        .emit();

    let result = diagnostics.render_filtered(src);
    assert!(result.contains("missing closing `)`"));
    assert!(!result.contains("`e` after a list item"));
}
