use crate::Parse;

#[test]
fn missing_paren() {
    let parse = Parse::expect("SELECT (a");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 7..9: missing closing `)` (related: `(` opened here at 7..8)");
    insta::assert_snapshot!(parse.printer().dump(), @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
    ");
}

#[test]
fn missing_bracket() {
    let res = Parse::expect_invalid("SELECT [1, 2");

    insta::assert_snapshot!(res, @"error at 7..12: missing closing `]` (related: `[` opened here at 7..8)");
}

#[test]
fn nested_unclosed_reports_once() {
    let res = Parse::expect_invalid("SELECT f(a, (b");

    insta::assert_snapshot!(res, @"error at 12..14: missing closing `)` (related: `(` opened here at 12..13)");
}

#[test]
fn unterminated_function_body() {
    let input = "CREATE FUNCTION f(x INT64) RETURNS INT64 AS $$ SELECT x";

    let res = Parse::expect_invalid(input);

    insta::assert_snapshot!(res, @"error at 44..55: unterminated function body (related: body opened here at 44..46) (hint: function bodies end with the same `$$` or `'`)");
}

