use crate::Parse;

#[test]
fn update_with_where() {
    let input = "UPDATE t SET a = 1, b = 'x' WHERE id = 2";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (update_statement)
        (identifier)
        (set_clause)
          (set_clause_body)
            (assigment_expression)
              (identifier)
              (number)
            (assigment_expression)
              (identifier)
              (string)
                content: "x"
        (where_clause)
          (comparison_operator)
            (identifier)
            operator: "="
            (number)
    "#);
}

#[test]
fn update_assigns_expressions() {
    let input = "UPDATE s.t SET total = total + 1";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (update_statement)
        (identifier)
        (set_clause)
          (set_clause_body)
            (assigment_expression)
              (identifier)
              (binary_expression)
                (identifier)
                (number)
    ");
}

#[test]
fn insert_values() {
    let input = "INSERT INTO s.t VALUES (a + 1, NULL)";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (insert_statement)
        (identifier)
        (values_clause)
          (values_clause_body)
            (binary_expression)
              (identifier)
              (number)
            (NULL)
    ");
}

#[test]
fn set_with_scope() {
    let input = "SET SESSION search_path TO DEFAULT";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (set_statement)
        scope: "SESSION"
        (identifier)
    "#);
}

#[test]
fn set_local_with_equals() {
    let input = "SET LOCAL tz = 'UTC'";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (set_statement)
        scope: "LOCAL"
        (identifier)
        (string)
          content: "UTC"
    "#);
}

#[test]
fn scope_word_as_setting_name() {
    let parse = Parse::expect_valid("SET session = 1");

    insta::assert_snapshot!(parse.printer().dump(), @r"
    (source_file)
      (set_statement)
        (identifier)
        (number)
    ");
    let Some(crate::parser::ast::Statement::Set(set)) = parse.root().statements().next() else {
        panic!("expected a set statement");
    };
    assert!(set.scope().is_none());
}
