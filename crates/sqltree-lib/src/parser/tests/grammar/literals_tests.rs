use crate::{Parse, Rule};

#[test]
fn numbers() {
    let input = "SELECT 1, 2.5, -2.5, +3.0, .5, 1e10";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (number)
            (number)
            (number)
            (number)
            (number)
            (number)
    ");
}

#[test]
fn signed_float_is_one_token() {
    let parse = Parse::expect_valid_rule(Rule::Expression, "-2.5");

    insta::assert_snapshot!(parse.printer().raw(true).dump(), @r#"
    SourceFile
      Number
        Float "-2.5"
    "#);
}

#[test]
fn strings() {
    let input = r#"SELECT 'a', "b", '''c''', b'd', r"e", ''"#;

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (string)
              content: "a"
            (string)
              content: "b"
            (string)
              content: "c"
            (string)
              content: "d"
            (string)
              content: "e"
            (string)
    "#);
}

#[test]
fn string_tokens() {
    let parse = Parse::expect_valid_rule(Rule::Expression, "br'x'");

    insta::assert_snapshot!(parse.printer().raw(true).with_spans(true).dump(), @r#"
    SourceFile [0..5]
      Str [0..5]
        StringOpen [0..3] "br'"
        StringContent [3..4] "x"
        StringClose [4..5] "'"
    "#);
}

#[test]
fn time_literals() {
    let input = "SELECT DATE '2020-01-01', timestamp '2020-01-01 00:00:00'";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (time)
              (string)
                content: "2020-01-01"
            (time)
              (string)
                content: "2020-01-01 00:00:00"
    "#);
}

#[test]
fn numeric_literals() {
    let input = r#"SELECT NUMERIC '1.5', bignumeric "10""#;

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (number)
              (numeric)
            (number)
              (numeric)
    ");
}

#[test]
fn numeric_tokens() {
    let parse = Parse::expect_valid_rule(Rule::Expression, "NUMERIC '1.5'");

    insta::assert_snapshot!(parse.printer().raw(true).dump(), @r#"
    SourceFile
      Number
        Numeric
          KwNumeric "NUMERIC"
          SingleQuote "'"
          Float "1.5"
          SingleQuote "'"
    "#);
}

#[test]
fn numeric_keyword_without_number_is_a_name() {
    let input = "SELECT numeric, decimal FROM t";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (identifier)
            (identifier)
        (from_clause)
          (identifier)
    ");
}

#[test]
fn null_true_false_and_parameters() {
    let input = "SELECT NULL, true, False, @p, @@sys";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (NULL)
            (TRUE)
            (FALSE)
            (query_parameter)
            (query_parameter)
    ");
}

#[test]
fn arrays() {
    let input = "SELECT [1, 'a', NULL], ARRAY<INT64>[1, 2], ARRAY[], [[1], [2]]";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r#"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (array)
              (number)
              (string)
                content: "a"
              (NULL)
            (array)
              (number)
              (number)
            (array)
            (array)
              (array)
                (number)
              (array)
                (number)
    "#);
}

#[test]
fn array_names_stay_bare() {
    let input = "SELECT [a, b]";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (array)
    ");
}

#[test]
fn array_of_structs() {
    let input = "SELECT ARRAY<STRUCT<x INT64>>[(1), STRUCT(2)]";

    let res = Parse::expect_valid_tree(input);

    insta::assert_snapshot!(res, @r"
    (source_file)
      (select_statement)
        (select_clause)
          (select_clause_body)
            (array)
              (struct)
                (number)
              (struct)
                (number)
    ");
}
