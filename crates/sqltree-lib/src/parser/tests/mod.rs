mod grammar;
mod recovery;

use crate::{Parse, ParseBuilder, Rule};

impl Parse {
    #[track_caller]
    pub fn expect(src: &str) -> Self {
        ParseBuilder::new(src).parse().unwrap()
    }

    #[track_caller]
    pub fn expect_rule(rule: Rule, src: &str) -> Self {
        ParseBuilder::new(src).entry(rule).parse().unwrap()
    }

    #[track_caller]
    pub fn expect_valid(src: &str) -> Self {
        Self::expect_valid_rule(Rule::SourceFile, src)
    }

    #[track_caller]
    pub fn expect_valid_rule(rule: Rule, src: &str) -> Self {
        let parse = Self::expect_rule(rule, src);
        if !parse.is_valid() {
            panic!(
                "Expected valid parse, got error:\n{}",
                parse.dump_diagnostics()
            );
        }

        parse
    }

    #[track_caller]
    pub fn expect_valid_tree(src: &str) -> String {
        Self::expect_valid(src).printer().dump()
    }

    #[track_caller]
    pub fn expect_valid_rule_tree(rule: Rule, src: &str) -> String {
        Self::expect_valid_rule(rule, src).printer().dump()
    }

    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        Self::expect_invalid_rule(Rule::SourceFile, src)
    }

    #[track_caller]
    pub fn expect_invalid_rule(rule: Rule, src: &str) -> String {
        let parse = Self::expect_rule(rule, src);
        if parse.is_valid() {
            panic!(
                "Expected invalid parse, got valid:\n{}",
                parse.printer().dump()
            );
        }

        parse.dump_diagnostics()
    }

    /// One line per diagnostic that survives cascade filtering.
    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics()
            .filtered()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
