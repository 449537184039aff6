use crate::parser::tests::expect_valid;

#[test]
fn binary_precedence() {
    insta::assert_snapshot!(expect_valid("1 + 2 * 3"), @r#"
    Root
      BinaryExpr
        Integer "1"
        Plus "+"
        BinaryExpr
          Integer "2"
          Star "*"
          Integer "3"
    "#);
}

#[test]
fn binary_is_left_associative() {
    insta::assert_snapshot!(expect_valid("1 - 2 - 3"), @r#"
    Root
      BinaryExpr
        BinaryExpr
          Integer "1"
          Minus "-"
          Integer "2"
        Minus "-"
        Integer "3"
    "#);
}

#[test]
fn logical_operators() {
    insta::assert_snapshot!(expect_valid("a or b and not c == d"), @r#"
    Root
      BinaryExpr
        Identifier "a"
        KwOr "or"
        BinaryExpr
          Identifier "b"
          KwAnd "and"
          BinaryExpr
            UnaryExpr
              KwNot "not"
              Identifier "c"
            EqEq "=="
            Identifier "d"
    "#);
}

#[test]
fn unary_minus() {
    insta::assert_snapshot!(expect_valid("-x"), @r#"
    Root
      UnaryExpr
        Minus "-"
        Identifier "x"
    "#);
}

#[test]
fn dash_before_closing_token_is_a_literal() {
    insta::assert_snapshot!(expect_valid("f(-)"), @r#"
    Root
      CallExpr
        Identifier "f"
        ParenExpr
          LParen "("
          Minus "-"
          RParen ")"
    "#);
}

#[test]
fn selectors_indexes_and_calls() {
    insta::assert_snapshot!(expect_valid("a.b[0](1, x)"), @r#"
    Root
      CallExpr
        IndexExpr
          SelectorExpr
            Identifier "a"
            Dot "."
            Identifier "b"
          LBracket "["
          Integer "0"
          RBracket "]"
        ParenExpr
          LParen "("
          Integer "1"
          Comma ","
          Identifier "x"
          RParen ")"
    "#);
}

#[test]
fn type_arguments() {
    insta::assert_snapshot!(expect_valid("f<integer>(1)"), @r#"
    Root
      CallExpr
        ParametrizedIdent
          Identifier "f"
          TypeArgs
            Lt "<"
            Identifier "integer"
            Gt ">"
        ParenExpr
          LParen "("
          Integer "1"
          RParen ")"
    "#);
}

#[test]
fn less_than_is_not_type_arguments() {
    insta::assert_snapshot!(expect_valid("a < b"), @r#"
    Root
      BinaryExpr
        Identifier "a"
        Lt "<"
        Identifier "b"
    "#);
}

#[test]
fn length_and_ifpresent() {
    insta::assert_snapshot!(expect_valid("x length(1 .. 2) ifpresent"), @r#"
    Root
      UnaryExpr
        LengthExpr
          Identifier "x"
          KwLength "length"
          ParenExpr
            LParen "("
            BinaryExpr
              Integer "1"
              DotDot ".."
              Integer "2"
            RParen ")"
        KwIfpresent "ifpresent"
    "#);
}

#[test]
fn redirect() {
    insta::assert_snapshot!(expect_valid("p.receive(t) -> value v sender s"), @r#"
    Root
      RedirectExpr
        CallExpr
          SelectorExpr
            Identifier "p"
            Dot "."
            Identifier "receive"
          ParenExpr
            LParen "("
            Identifier "t"
            RParen ")"
        Arrow "->"
        KwValue "value"
        Identifier "v"
        KwSender "sender"
        Identifier "s"
    "#);
}

#[test]
fn composite_literal() {
    insta::assert_snapshot!(expect_valid("x := { a := 1, [0] := 2 }"), @r#"
    Root
      BinaryExpr
        Identifier "x"
        Assign ":="
        CompositeLiteral
          LBrace "{"
          BinaryExpr
            Identifier "a"
            Assign ":="
            Integer "1"
          Comma ","
          BinaryExpr
            IndexExpr
              LBracket "["
              Integer "0"
              RBracket "]"
            Assign ":="
            Integer "2"
          RBrace "}"
    "#);
}

#[test]
fn any_component() {
    insta::assert_snapshot!(expect_valid("any component.running"), @r#"
    Root
      SelectorExpr
        Ident
          KwAny "any"
          KwComponent "component"
        Dot "."
        Identifier "running"
    "#);
}

#[test]
fn value_keywords() {
    insta::assert_snapshot!(expect_valid("v := omit"), @r#"
    Root
      BinaryExpr
        Identifier "v"
        Assign ":="
        KwOmit "omit"
    "#);
}
