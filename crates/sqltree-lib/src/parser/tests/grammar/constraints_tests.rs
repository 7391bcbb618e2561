use crate::{Parse, Rule};

fn tree(src: &str) -> String {
    Parse::expect_valid_rule_tree(Rule::ColumnConstraint, src)
}

#[test]
fn every_constraint_kind() {
    let input = "NOT NULL UNIQUE CHECK x > 0 CONSTRAINT pk ASC AUTO_INCREMENT";

    insta::assert_snapshot!(tree(input), @r#"
    (source_file)
      (null_constraint)
        (NULL)
      (unique_constraint)
      (check_constraint)
        (comparison_operator)
          (identifier)
          operator: ">"
          (number)
      (named_constraint)
        (identifier)
      (direction_constraint)
      (auto_increment_constraint)
    "#);
}

#[test]
fn references_with_both_actions() {
    let input = "REFERENCES s.t (a, b) ON DELETE CASCADE ON UPDATE SET NULL";

    insta::assert_snapshot!(tree(input), @r#"
    (source_file)
      (references_constraint)
        (identifier)
        (identifier)
        (identifier)
        (on_delete_action)
          action: "CASCADE"
        (on_update_action)
          action: "SET NULL"
    "#);
}

#[test]
fn references_update_first() {
    let input = "REFERENCES t ON UPDATE RESTRICT ON DELETE SET NULL";

    insta::assert_snapshot!(tree(input), @r#"
    (source_file)
      (references_constraint)
        (identifier)
        (on_update_action)
          action: "RESTRICT"
        (on_delete_action)
          action: "SET NULL"
    "#);
}

#[test]
fn references_without_actions() {
    insta::assert_snapshot!(tree("REFERENCES t"), @r"
    (source_file)
      (references_constraint)
        (identifier)
    ");
}

#[test]
fn lone_action_needs_its_pair() {
    let res = Parse::expect_invalid_rule(Rule::ColumnConstraint, "REFERENCES t ON DELETE CASCADE");

    insta::assert_snapshot!(res, @"error at 30..30: expected `ON UPDATE` to pair with the first action");
}

#[test]
fn nullable() {
    insta::assert_snapshot!(tree("NULL DESC"), @r"
    (source_file)
      (null_constraint)
        (NULL)
      (direction_constraint)
    ");
}

#[test]
fn not_a_constraint() {
    let res = Parse::expect_invalid_rule(Rule::ColumnConstraint, "PRIMARY KEY");

    insta::assert_snapshot!(res, @"error at 0..7: expected column constraint");
}
