use crate::Parse;
use indoc::indoc;

#[test]
fn projection_with_aliases() {
    let input = "SELECT a, b AS c, d e FROM t";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
            (alias)
              (identifier)
              (identifier)
            (alias)
              (identifier)
              (identifier)
        (from_clause)
          (identifier)
    ");
}

#[test]
fn empty_projection() {
    let res = Parse::expect_valid_tree("SELECT");

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
    ");
}

#[test]
fn empty_projection_before_from() {
    let res = Parse::expect_valid_tree("SELECT FROM t");

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
        (from_clause)
          (identifier)
    ");
}

#[test]
fn asterisks() {
    let input = "SELECT *, t.* FROM t";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (asterisk_expression)
            (asterisk_expression)
        (from_clause)
          (identifier)
    ");
}

#[test]
fn asterisk_takes_one_qualifier() {
    let res = Parse::expect_invalid("SELECT s.t.* FROM t");

    insta::assert_snapshot!(res, @"error at 9..10: unexpected token: `.*` takes a single qualifier");
}

#[test]
fn from_list_with_aliases() {
    let input = "SELECT a FROM t AS x, `proj.ds.u` y";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (alias)
            (identifier)
            (identifier)
          (alias)
            (identifier)
            (identifier)
    ");
}

#[test]
fn joins() {
    let input = indoc! {r#"
    SELECT a
    FROM t
    INNER JOIN u ON t.id = u.id
    LEFT OUTER JOIN v ON TRUE
    JOIN w ON w.ok
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (join_clause)
          (join_type)
          (identifier)
          (comparison_operator)
            (identifier)
            operator: "="
            (identifier)
        (join_clause)
          (join_type)
          (identifier)
          (TRUE)
        (join_clause)
          (identifier)
          (identifier)
    "#);
}

#[test]
fn where_group_by_having() {
    let input = indoc! {r#"
    SELECT a, count(*)
    FROM t
    WHERE a > 1
    GROUP BY a
    HAVING NOT count(*) = 0
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
            (function_call)
              function: (identifier)
              arguments: (asterisk_expression)
        (from_clause)
          (identifier)
        (where_clause)
          (comparison_operator)
            (identifier)
            operator: ">"
            (number)
        (group_by_clause)
          (group_by_clause_body)
            (identifier)
        (having_clause)
          (boolean_expression)
            (comparison_operator)
              (function_call)
                function: (identifier)
                arguments: (asterisk_expression)
              operator: "="
              (number)
    "#);
}

#[test]
fn group_by_rollup() {
    let input = "SELECT a FROM t GROUP BY ROLLUP (a, b)";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (group_by_clause)
          (group_by_clause_body)
            (identifier)
            (identifier)
    ");
}

#[test]
fn rollup_without_parens_is_a_name() {
    let input = "SELECT a FROM t GROUP BY rollup";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (group_by_clause)
          (group_by_clause_body)
            (identifier)
    ");
}

#[test]
fn non_boolean_having_warns() {
    let input = "SELECT a FROM t GROUP BY a HAVING count(*) > 1";

    let parse = Parse::expect_valid(input);

    assert!(parse.diagnostics().has_warnings());
    insta::assert_snapshot!(parse.dump_diagnostics(), @"warning at 34..46: `HAVING` condition is not a boolean expression (hint: e.g., `HAVING count(x) > 1 AND max(y) < 10`)");
}

#[test]
fn qualify_order_by_limit() {
    let input = indoc! {r#"
    SELECT a
    FROM t
    QUALIFY a = 1 OR b = 2
    ORDER BY a DESC, b
    LIMIT 10 OFFSET 5
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (qualify_clause)
          (boolean_expression)
            (comparison_operator)
              (identifier)
              operator: "="
              (number)
            (comparison_operator)
              (identifier)
              operator: "="
              (number)
        (order_by_clause)
          (order_by_clause_body)
            (identifier)
            (identifier)
        (limit_clause)
    "#);
}

#[test]
fn named_window() {
    let input = "SELECT a FROM t WINDOW w AS base";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (window_clause)
          (named_window_expression)
            (identifier)
            (identifier)
    ");
}

#[test]
fn window_specification_takes_the_order_by() {
    let input = "SELECT a FROM t WINDOW w AS base PARTITION BY ORDER BY a";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
        (from_clause)
          (identifier)
        (window_clause)
          (named_window_expression)
            (identifier)
            (window_specification)
              (identifier)
              (order_by_clause)
                (order_by_clause_body)
                  (identifier)
    ");
}

#[test]
fn subquery_in_projection() {
    let input = "SELECT (SELECT 1) AS x";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (alias)
              (select_subexpression)
                (select_statement)
                  (select_clause)
                    (select_clause_body)
                      (number)
              (identifier)
    ");
}

#[test]
fn cte_with_and_without_select() {
    let with_select = Parse::expect_valid("WITH t AS SELECT 1 SELECT * FROM t");
    let without_select = Parse::expect_valid("WITH t AS 1 SELECT * FROM t");

    assert_eq!(with_select.to_sexp(), without_select.to_sexp());
    insta::assert_snapshot!(without_select.printer().dump(), @r"
    (source_file)
      (select_statement)
        (cte_clause)
          (identifier)
          (select_clause_body)
            (number)
        (select_clause)
          (select_clause_body)
            (asterisk_expression)
        (from_clause)
          (identifier)
    ");
}

#[test]
fn statements_with_and_without_terminators() {
    let input = indoc! {r#"
    SELECT 1;
    SELECT 2
    SELECT 3;
    "#};

    let parse = Parse::expect_valid(input);

    assert_eq!(parse.root().statements().count(), 3);
}

#[test]
fn spans_in_dump() {
    let parse = Parse::expect_valid("SELECT a");

    let res = parse.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    (source_file) [0..8]
      (select_statement) [0..8]
        (select_clause) [0..8]
          (select_clause_body) [7..8]
            (identifier) [7..8]
    ");
}
