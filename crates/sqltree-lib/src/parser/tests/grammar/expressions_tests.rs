use crate::{Parse, Rule};

fn tree(src: &str) -> String {
    Parse::expect_valid_rule_tree(Rule::Expression, src)
}

#[test]
fn and_binds_tighter_than_or() {
    insta::assert_snapshot!(tree("a OR b AND c"), @r"
    (source_file)
      (boolean_expression)
        (identifier)
        (boolean_expression)
          (identifier)
          (identifier)
    ");

    insta::assert_snapshot!(tree("a AND b OR c"), @r"
    (source_file)
      (boolean_expression)
        (boolean_expression)
          (identifier)
          (identifier)
        (identifier)
    ");
}

#[test]
fn not_wraps_a_comparison() {
    insta::assert_snapshot!(tree("NOT a = 1"), @r#"
    (source_file)
      (boolean_expression)
        (comparison_operator)
          (identifier)
          operator: "="
          (number)
    "#);
}

#[test]
fn not_as_right_operand() {
    insta::assert_snapshot!(tree("a = 1 AND NOT b"), @r#"
    (source_file)
      (boolean_expression)
        (comparison_operator)
          (identifier)
          operator: "="
          (number)
        (boolean_expression)
          (identifier)
    "#);
}

#[test]
fn comparisons_are_left_associative() {
    insta::assert_snapshot!(tree("a < b = c"), @r#"
    (source_file)
      (comparison_operator)
        (comparison_operator)
          (identifier)
          operator: "<"
          (identifier)
        operator: "="
        (identifier)
    "#);
}

#[test]
fn every_comparison_operator() {
    for op in ["<", "<=", "<>", "=", ">", ">="] {
        let parse = Parse::expect_valid_rule(Rule::Expression, &format!("a {op} b"));
        assert_eq!(
            parse.to_sexp(),
            "(source_file (comparison_operator (identifier) (identifier)))",
            "operator {op}"
        );
    }
}

#[test]
fn binary_operators() {
    insta::assert_snapshot!(tree("a + b ~ c"), @r"
    (source_file)
      (binary_expression)
        (binary_expression)
          (identifier)
          (identifier)
        (identifier)
    ");
}

#[test]
fn in_and_not_in() {
    insta::assert_snapshot!(tree("x NOT IN (1, 'a')"), @r#"
    (source_file)
      (in_expression)
        (identifier)
        (tuple)
          elements: (number)
          elements: (string)
            content: "a"
    "#);

    insta::assert_snapshot!(tree("x IN (y)"), @r"
    (source_file)
      (in_expression)
        (identifier)
        (tuple)
          elements: (identifier)
    ");
}

#[test]
fn is_null_then_and() {
    insta::assert_snapshot!(tree("x IS NOT NULL AND y"), @r"
    (source_file)
      (boolean_expression)
        (is_expression)
          (identifier)
          (NULL)
        (identifier)
    ");
}

#[test]
fn is_distinct_from() {
    insta::assert_snapshot!(tree("a IS DISTINCT FROM b"), @r"
    (source_file)
      (is_expression)
        (identifier)
        (distinct_from)
          (identifier)
    ");
}

#[test]
fn call_with_cast() {
    insta::assert_snapshot!(tree("f(a, 1)::INT64"), @r"
    (source_file)
      (type_cast)
        (function_call)
          function: (identifier)
          arguments: (identifier)
          arguments: (number)
        type: (type)
          (identifier)
    ");
}

#[test]
fn call_without_arguments() {
    insta::assert_snapshot!(tree("now()"), @r"
    (source_file)
      (function_call)
        function: (identifier)
    ");
}

#[test]
fn parenthesized_cast() {
    insta::assert_snapshot!(tree("(a)::TEXT"), @r"
    (source_file)
      (type_cast)
        (identifier)
        type: (type)
          (identifier)
    ");
}

#[test]
fn parentheses_leave_no_node() {
    let plain = Parse::expect_valid_rule(Rule::Expression, "a AND b");
    let grouped = Parse::expect_valid_rule(Rule::Expression, "(a) AND ((b))");

    assert_eq!(plain.to_sexp(), grouped.to_sexp());
}

#[test]
fn field_access() {
    insta::assert_snapshot!(tree("payload->>'name'"), @r#"
    (source_file)
      (field_access)
        (identifier)
        (string)
          content: "name"
    "#);
}

#[test]
fn element_access() {
    insta::assert_snapshot!(tree("tags[0]"), @r"
    (source_file)
      (array_element_access)
        (identifier)
        (number)
    ");
}

#[test]
fn argument_reference_with_index() {
    insta::assert_snapshot!(tree("$2[1]"), @r"
    (source_file)
      (array_element_access)
        (argument_reference)
        (number)
    ");
}

#[test]
fn struct_from_parenthesized_list() {
    insta::assert_snapshot!(tree("(1 AS a, 'x')"), @r#"
    (source_file)
      (struct)
        (alias)
          (number)
          (identifier)
        (string)
          content: "x"
    "#);
}

#[test]
fn typed_struct() {
    insta::assert_snapshot!(tree("STRUCT<a INT64, b STRUCT<c STRING>>(1, 'x')"), @r#"
    (source_file)
      (struct)
        (number)
        (string)
          content: "x"
    "#);
}

#[test]
fn unnest_over_call() {
    insta::assert_snapshot!(tree("UNNEST(split(s))"), @r"
    (source_file)
      (unnest_clause)
        (unnest_operator)
          (function_call)
            function: (identifier)
            arguments: (identifier)
    ");
}

#[test]
fn unnest_over_bare_name() {
    insta::assert_snapshot!(tree("UNNEST(arr) AS x"), @r"
    (source_file)
      (unnest_clause)
        (unnest_operator)
        (identifier)
    ");
}

#[test]
fn contextual_keywords_as_names() {
    let parse = Parse::expect_valid_rule(Rule::Expression, "date.type = partition");

    insta::assert_snapshot!(parse.printer().raw(true).dump(), @r#"
    SourceFile
      ComparisonOperator
        Identifier
          Id "date"
          Dot "."
          Id "type"
        Equals "="
        Identifier
          Id "partition"
    "#);
}
