use crate::{Parse, Rule};

#[test]
fn stray_semicolon_between_statements() {
    let parse = Parse::expect("SELECT 1; ; SELECT 2");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 10..11: unexpected token: `;` without a statement");
    insta::assert_snapshot!(parse.printer().dump(), @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (number)
      (ERROR)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (number)
    ");
}

#[test]
fn unknown_statement_is_skipped() {
    let parse = Parse::expect("DROP TABLE t; SELECT 1");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 0..4: expected a statement: statements start with `SELECT`, `WITH`, `UPDATE`, `SET`, `INSERT` or `CREATE`");
    insta::assert_snapshot!(parse.printer().dump(), @r"
    (source_file)
      (ERROR)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (number)
    ");
}

#[test]
fn create_without_known_object() {
    let res = Parse::expect_invalid("CREATE VIEW v");

    insta::assert_snapshot!(res, @"error at 0..6: expected a statement: `CREATE` must be followed by `TABLE`, `SCHEMA`, `FUNCTION` or `OR REPLACE`");
}

#[test]
fn unrecognized_characters() {
    let res = Parse::expect_invalid("SELECT 1 ^ 2");

    insta::assert_snapshot!(res, @r"
    error at 9..10: unexpected token: unrecognized characters
    error at 11..12: expected a statement: statements start with `SELECT`, `WITH`, `UPDATE`, `SET`, `INSERT` or `CREATE`
    ");
}

#[test]
fn trailing_input_after_fragment() {
    let res = Parse::expect_invalid_rule(Rule::Expression, "a b");

    insta::assert_snapshot!(res, @"error at 2..3: unexpected input after the end of the fragment");
}

#[test]
fn stray_token_inside_function_body() {
    let input = "CREATE FUNCTION f(x INT64) RETURNS INT64 AS $$ SELECT x ) $$";

    let res = Parse::expect_invalid(input);

    insta::assert_snapshot!(res, @"error at 56..57: unexpected token: inside the function body");
}

#[test]
fn tree_keeps_every_byte() {
    let input = "SELECT 1 ^ 2; DROP x; SELECT (a";

    let parse = Parse::expect(input);

    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), input);
}
