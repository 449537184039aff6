use crate::parser::tests::{expect_invalid, parse_invalid};

#[test]
fn statement_in_module_body() {
    let tree = parse_invalid("module M { x := 1 }");

    insta::assert_snapshot!(tree.diagnostics().to_string(), @"error at 11..12: expected module definition");
    insta::assert_snapshot!(tree.dump(), @r#"
    Root
      Module
        KwModule "module"
        Name "M"
        LBrace "{"
        Error
          Identifier "x"
          Assign ":="
          Integer "1"
        RBrace "}"
    "#);
}

#[test]
fn unknown_token_in_expression() {
    let tree = parse_invalid("x := $");

    insta::assert_snapshot!(tree.diagnostics().to_string(), @"error at 5..6: unknown token");
    insta::assert_snapshot!(tree.dump(), @r#"
    Root
      BinaryExpr
        Identifier "x"
        Assign ":="
        Error
          Unknown "$"
    "#);
}

#[test]
fn malformed_literal() {
    insta::assert_snapshot!(expect_invalid("x := 0h"), @"error at 5..7: malformed token");
}

#[test]
fn select_without_case() {
    let tree = parse_invalid("select (x) { foo }");

    insta::assert_snapshot!(tree.diagnostics().to_string(), @"error at 13..16: expected 'case'");
    insta::assert_snapshot!(tree.dump(), @r#"
    Root
      SelectStmt
        KwSelect "select"
        ParenExpr
          LParen "("
          Identifier "x"
          RParen ")"
        LBrace "{"
        Error
          Identifier "foo"
        RBrace "}"
    "#);
}

#[test]
fn external_constant() {
    let input = "module M { external const integer x; }";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 11..19: external constants are not supported anymore"
    );
}

#[test]
fn type_without_definition() {
    insta::assert_snapshot!(expect_invalid("module M { type ; }"), @"error at 16..17: expected type definition");
}

#[test]
fn range_loop_with_assignment() {
    insta::assert_snapshot!(expect_invalid("for (x := 1 in xs) {}"), @"error at 12..14: unexpected token 'in'");
}

#[test]
fn unknown_port_attribute() {
    insta::assert_snapshot!(
        expect_invalid("type port P message { foo }"),
        @"error at 22..25: expected port attribute"
    );
}

#[test]
fn annotated_rendering() {
    let input = "module M { x := 1 }";
    let tree = parse_invalid(input);
    let rendered = tree.diagnostics().printer().source(input).path("m.ttcn3").render();

    assert!(rendered.contains("expected module definition"));
    assert!(rendered.contains("m.ttcn3"));
}
