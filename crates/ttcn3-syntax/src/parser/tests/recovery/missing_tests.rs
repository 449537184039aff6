use crate::parser::tests::{expect_invalid, parse_invalid};

#[test]
fn missing_semicolon_between_definitions() {
    let input = "module M { const integer x := 1 const integer y := 2 }";

    insta::assert_snapshot!(expect_invalid(input), @"error at 32..37: expected ';'");
}

#[test]
fn unclosed_module() {
    let input = "module M { const integer x := 1";

    insta::assert_snapshot!(expect_invalid(input), @"error at 31..31: expected '}'");
}

#[test]
fn unclosed_call() {
    let tree = parse_invalid("f(1");

    insta::assert_snapshot!(tree.diagnostics().to_string(), @"error at 3..3: expected ')'");
    insta::assert_snapshot!(tree.dump(), @r#"
    Root
      CallExpr
        Identifier "f"
        ParenExpr
          LParen "("
          Integer "1"
    "#);
}

#[test]
fn missing_expression() {
    let tree = parse_invalid("x := ;");

    insta::assert_snapshot!(tree.diagnostics().to_string(), @"error at 5..6: expected expression");
    insta::assert_snapshot!(tree.dump(), @r#"
    Root
      BinaryExpr
        Identifier "x"
        Assign ":="
      Semicolon ";"
    "#);
}

#[test]
fn missing_name() {
    insta::assert_snapshot!(expect_invalid("const integer := 1"), @"error at 14..16: expected identifier");
}
