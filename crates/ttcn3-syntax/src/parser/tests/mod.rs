mod grammar;
mod recovery;

use crate::Tree;

#[track_caller]
pub fn expect_valid(src: &str) -> String {
    let tree = crate::parse("", src);
    if tree.diagnostics().has_errors() {
        panic!(
            "Expected valid input, got error:\n{}",
            tree.diagnostics().printer().source(src).render()
        );
    }
    tree.dump()
}

#[track_caller]
pub fn expect_invalid(src: &str) -> String {
    let tree = parse_invalid(src);
    tree.diagnostics().printer().render()
}

/// Parses input that must produce at least one error.
#[track_caller]
pub fn parse_invalid(src: &str) -> Tree {
    let tree = crate::parse("", src);
    if !tree.diagnostics().has_errors() {
        panic!("Expected invalid input, got valid:\n{}", tree.dump());
    }
    tree
}
