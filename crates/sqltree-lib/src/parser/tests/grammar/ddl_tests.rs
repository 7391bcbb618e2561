use crate::{Parse, Rule};
use indoc::indoc;

#[test]
fn create_table() {
    let input = indoc! {r#"
    CREATE TABLE IF NOT EXISTS s.t (
      id INT64 DEFAULT next_id(),
      name VARCHAR(255),
      tags TEXT[] DEFAULT '{}'::TEXT[]
    )
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (create_table_statement)
        (identifier)
        (create_table_parameters)
          (create_table_column_parameter)
            name: (identifier)
            type: (type)
              (identifier)
            (column_default)
              (function_call)
                function: (identifier)
          (create_table_column_parameter)
            name: (identifier)
            type: (type)
              (identifier)
              (number)
          (create_table_column_parameter)
            name: (identifier)
            type: (array_type)
              (type)
                (identifier)
            (column_default)
              (type_cast)
                (string)
                  content: "{}"
                type: (array_type)
                  (type)
                    (identifier)
    "#);
}

#[test]
fn column_defaults_chain() {
    let input = "CREATE TABLE t (a INT DEFAULT (1) DEFAULT x)";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (create_table_statement)
        (identifier)
        (create_table_parameters)
          (create_table_column_parameter)
            name: (identifier)
            type: (type)
              (identifier)
            (column_default)
              (number)
            (column_default)
              (identifier)
    ");
}

#[test]
fn nested_array_type() {
    let input = "CREATE TABLE t (grid INT[][])";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (create_table_statement)
        (identifier)
        (create_table_parameters)
          (create_table_column_parameter)
            name: (identifier)
            type: (array_type)
              (array_type)
                (type)
                  (identifier)
    ");
}

#[test]
fn create_schema() {
    let res = Parse::expect_valid_tree("CREATE SCHEMA IF NOT EXISTS analytics");

    insta::assert_snapshot!(res, @r"
    (source_file)
      (create_schema_statement)
        (identifier)
    ");
}

#[test]
fn create_function_with_hints() {
    let input = indoc! {r#"
    CREATE FUNCTION add(IN a INT64, b INT64 NOT NULL)
    RETURNS INT64
    IMMUTABLE PARALLEL SAFE STRICT
    AS 'SELECT a + b'
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (create_function_statement)
        (identifier)
        (create_function_parameters)
          (create_function_parameter)
            argmode: "IN"
            (identifier)
            (type)
              (identifier)
          (create_function_parameter)
            (identifier)
            (constrained_type)
              (type)
                (identifier)
              (null_constraint)
                (NULL)
        (type)
          (identifier)
        (optimizer_hint)
        (parallel_hint)
        (null_hint)
        (function_body)
          (select_statement)
            (select_clause)
              (select_clause_body)
                (binary_expression)
                  (identifier)
                  (identifier)
    "#);
}

#[test]
fn quoted_body_is_relexed() {
    let parse = Parse::expect_valid("CREATE FUNCTION f(INT64) RETURNS INT64 AS 'SELECT 1'");

    let body = parse
        .syntax()
        .descendants()
        .find(|n| n.kind() == crate::SyntaxKind::FunctionBody)
        .unwrap();
    insta::assert_snapshot!(format!("{body:#?}"), @r#"
    FunctionBody@39..52
      KwAs@39..41 "AS"
      Whitespace@41..42 " "
      SingleQuote@42..43 "'"
      SelectStatement@43..51
        SelectClause@43..51
          KwSelect@43..49 "SELECT"
          Whitespace@49..50 " "
          SelectClauseBody@50..51
            Number@50..51
              Integer@50..51 "1"
      SingleQuote@51..52 "'"
    "#);
}

#[test]
fn null_hints() {
    let input = indoc! {r#"
    CREATE FUNCTION f(x INT64) RETURNS INT64
    CALLED ON NULL INPUT
    RETURNS NULL ON NULL INPUT
    VOLATILE
    LANGUAGE plpgsql
    "#};

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (create_function_statement)
        (identifier)
        (create_function_parameters)
          (create_function_parameter)
            (identifier)
            (type)
              (identifier)
        (type)
          (identifier)
        (null_hint)
        (null_hint)
        (optimizer_hint)
        (language)
    ");
}

#[test]
fn parameter_argmodes() {
    let input = "CREATE FUNCTION f(OUT r INT64, INOUT INT64, VARIADIC xs INT64[]) RETURNS INT64";

    let parse = Parse::expect_valid(input);

    let argmodes: Vec<_> = parse
        .syntax()
        .descendants()
        .filter_map(|n| crate::parser::ast::CreateFunctionParameter::cast(n))
        .map(|p| p.argmode().map(|t| t.text().to_string()))
        .collect();
    assert_eq!(
        argmodes,
        [
            Some("OUT".to_string()),
            Some("INOUT".to_string()),
            Some("VARIADIC".to_string())
        ]
    );
}

#[test]
fn create_domain() {
    let input = "CREATE DOMAIN posint AS INT64 NOT NULL CHECK VALUE > 0";

    let res = Parse::expect_valid_rule_tree(Rule::CreateDomainStatement, input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (create_domain_statement)
        (identifier)
        (type)
          (identifier)
        (null_constraint)
          (NULL)
        (check_constraint)
          (comparison_operator)
            (identifier)
            operator: ">"
            (number)
    "#);
}

#[test]
fn create_type() {
    let input = "CREATE TYPE pair AS (a INT64, b TEXT[])";

    let res = Parse::expect_valid_rule_tree(Rule::CreateTypeStatement, input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (create_type_statement)
        (identifier)
        (parameters)
          (parameter)
            (identifier)
            (type)
              (identifier)
          (parameter)
            (identifier)
            (array_type)
              (type)
                (identifier)
    ");
}

#[test]
fn create_index() {
    let input = "CREATE UNIQUE INDEX idx ON s.t USING btree (lower(name) DESC, id) WHERE id > 0";

    let res = Parse::expect_valid_rule_tree(Rule::CreateIndexStatement, input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (create_index_statement)
        (unique_constraint)
        name: (identifier)
        table: (identifier)
        (using_clause)
          type: (identifier)
        (index_table_parameters)
          (ordered_expression)
            (function_call)
              function: (identifier)
              arguments: (identifier)
            order: "DESC"
          (identifier)
        (where_clause)
          (comparison_operator)
            (identifier)
            operator: ">"
            (number)
    "#);
}

#[test]
fn fragment_statements_are_not_statements() {
    let res = Parse::expect_invalid("CREATE DOMAIN d AS INT64");

    insta::assert_snapshot!(res, @"error at 0..6: expected a statement: `CREATE` must be followed by `TABLE`, `SCHEMA`, `FUNCTION` or `OR REPLACE`");
}
