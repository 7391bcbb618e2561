use crate::Parse;

#[test]
fn from_without_source() {
    let res = Parse::expect_invalid("SELECT a FROM");

    insta::assert_snapshot!(res, @"error at 13..13: expected an expression");
}

#[test]
fn comparison_without_right_operand() {
    let res = Parse::expect_invalid("SELECT a FROM t WHERE a =");

    insta::assert_snapshot!(res, @"error at 25..25: expected an expression: after `=`");
}

#[test]
fn update_without_set() {
    let res = Parse::expect_invalid("UPDATE t a = 1");

    insta::assert_snapshot!(res, @"error at 9..10: expected `SET`");
}

#[test]
fn insert_without_values() {
    let res = Parse::expect_invalid("INSERT INTO t (1)");

    insta::assert_snapshot!(res, @"error at 14..15: expected `VALUES`");
}

#[test]
fn limit_without_number() {
    let res = Parse::expect_invalid("SELECT a FROM t LIMIT x");

    insta::assert_snapshot!(res, @"error at 22..23: expected a number: row count after `LIMIT`");
}

#[test]
fn column_without_type() {
    let res = Parse::expect_invalid("CREATE TABLE t (id)");

    insta::assert_snapshot!(res, @"error at 18..19: expected a type (hint: e.g., `INT64`, `varchar(255)` or `text[]`)");
}

#[test]
fn is_without_operand() {
    let res = Parse::expect_invalid("SELECT x IS 5");

    insta::assert_snapshot!(res, @"error at 12..13: expected `NULL`, `TRUE`, `FALSE` or `DISTINCT FROM` after `IS`");
}

#[test]
fn parallel_without_mode() {
    let res = Parse::expect_invalid("CREATE FUNCTION f(x INT64) RETURNS INT64 PARALLEL");

    insta::assert_snapshot!(res, @"error at 49..49: expected `SAFE`, `UNSAFE` or `RESTRICTED` after `PARALLEL`");
}
