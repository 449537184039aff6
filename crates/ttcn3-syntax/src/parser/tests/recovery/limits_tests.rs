use crate::kind::Kind;
use crate::parser::Parser;

fn nested_parens(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn deeply_nested_expressions_hit_recursion_limit() {
    let input = nested_parens(10);
    let tree = Parser::new(&input).with_recursion_limit(8).parse();

    insta::assert_snapshot!(tree.diagnostics().printer().render(), @r"
    error at 8..9: nesting too deep
    error at 21..21: expected ')'
    ");
    assert!(tree.events().iter().any(|e| e.kind() == Kind::Error));
}

#[test]
fn default_limit_accepts_moderate_nesting() {
    let input = nested_parens(64);
    let tree = Parser::new(&input).parse();

    assert!(tree.diagnostics().is_empty(), "{}", tree.diagnostics());
}

#[test]
fn recursion_limit_reported_once() {
    let input = format!("{} {}", nested_parens(20), nested_parens(20));
    let tree = Parser::new(&input).with_recursion_limit(4).parse();

    let count = tree
        .diagnostics()
        .iter()
        .filter(|d| d.kind() == crate::DiagnosticKind::RecursionLimit)
        .count();
    assert_eq!(count, 1);
}
