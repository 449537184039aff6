use indoc::indoc;

use crate::parser::tests::expect_valid;

#[test]
fn if_else_chain() {
    insta::assert_snapshot!(expect_valid("if (x) { y := 1 } else if (z) {} else {}"), @r#"
    Root
      IfStmt
        KwIf "if"
        ParenExpr
          LParen "("
          Identifier "x"
          RParen ")"
        Block
          LBrace "{"
          BinaryExpr
            Identifier "y"
            Assign ":="
            Integer "1"
          RBrace "}"
        KwElse "else"
        IfStmt
          KwIf "if"
          ParenExpr
            LParen "("
            Identifier "z"
            RParen ")"
          Block
            LBrace "{"
            RBrace "}"
          KwElse "else"
          Block
            LBrace "{"
            RBrace "}"
    "#);
}

#[test]
fn classic_for() {
    insta::assert_snapshot!(expect_valid("for (var integer i := 0; i < 10; i := i + 1) {}"), @r#"
    Root
      ForStmt
        KwFor "for"
        LParen "("
        ValueDecl
          KwVar "var"
          RefSpec
            Identifier "integer"
          Declarator
            Name "i"
            Assign ":="
            Integer "0"
        Semicolon ";"
        BinaryExpr
          Identifier "i"
          Lt "<"
          Integer "10"
        Semicolon ";"
        BinaryExpr
          Identifier "i"
          Assign ":="
          BinaryExpr
            Identifier "i"
            Plus "+"
            Integer "1"
        RParen ")"
        Block
          LBrace "{"
          RBrace "}"
    "#);
}

#[test]
fn range_for() {
    insta::assert_snapshot!(expect_valid("for (x in xs) {}"), @r#"
    Root
      ForRangeStmt
        KwFor "for"
        LParen "("
        Identifier "x"
        KwIn "in"
        Identifier "xs"
        RParen ")"
        Block
          LBrace "{"
          RBrace "}"
    "#);
}

#[test]
fn while_and_do_while() {
    insta::assert_snapshot!(expect_valid("while (c) { continue }"), @r#"
    Root
      WhileStmt
        KwWhile "while"
        ParenExpr
          LParen "("
          Identifier "c"
          RParen ")"
        Block
          LBrace "{"
          BranchStmt
            KwContinue "continue"
          RBrace "}"
    "#);
    insta::assert_snapshot!(expect_valid("do {} while (c)"), @r#"
    Root
      DoWhileStmt
        KwDo "do"
        Block
          LBrace "{"
          RBrace "}"
        KwWhile "while"
        ParenExpr
          LParen "("
          Identifier "c"
          RParen ")"
    "#);
}

#[test]
fn alt_with_guards() {
    let input = indoc! {"
        alt {
            [] t.timeout { break }
            [else] {}
        }
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      AltStmt
        KwAlt "alt"
        Block
          LBrace "{"
          AltGuard
            LBracket "["
            RBracket "]"
            SelectorExpr
              Identifier "t"
              Dot "."
              Identifier "timeout"
            Block
              LBrace "{"
              BranchStmt
                KwBreak "break"
              RBrace "}"
          AltGuard
            LBracket "["
            KwElse "else"
            RBracket "]"
            Block
              LBrace "{"
              RBrace "}"
          RBrace "}"
    "#);
}

#[test]
fn select_case() {
    insta::assert_snapshot!(expect_valid("select (x) { case (1) {} case else {} }"), @r#"
    Root
      SelectStmt
        KwSelect "select"
        ParenExpr
          LParen "("
          Identifier "x"
          RParen ")"
        LBrace "{"
        CaseClause
          KwCase "case"
          ParenExpr
            LParen "("
            Integer "1"
            RParen ")"
          Block
            LBrace "{"
            RBrace "}"
        CaseClause
          KwCase "case"
          KwElse "else"
          Block
            LBrace "{"
            RBrace "}"
        RBrace "}"
    "#);
}

#[test]
fn call_statement() {
    insta::assert_snapshot!(expect_valid("p.call(s) { [] p.getreply {} }"), @r#"
    Root
      CallStmt
        CallExpr
          SelectorExpr
            Identifier "p"
            Dot "."
            Identifier "call"
          ParenExpr
            LParen "("
            Identifier "s"
            RParen ")"
        Block
          LBrace "{"
          AltGuard
            LBracket "["
            RBracket "]"
            SelectorExpr
              Identifier "p"
              Dot "."
              Identifier "getreply"
            Block
              LBrace "{"
              RBrace "}"
          RBrace "}"
    "#);
}

#[test]
fn labels_and_goto() {
    insta::assert_snapshot!(expect_valid("{ label L; goto L }"), @r#"
    Root
      Block
        LBrace "{"
        BranchStmt
          KwLabel "label"
          Name "L"
        Semicolon ";"
        BranchStmt
          KwGoto "goto"
          Identifier "L"
        RBrace "}"
    "#);
}

#[test]
fn semicolon_optional_after_block() {
    let input = indoc! {"
        function f() {
            if (a) {} x := 1
        }
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      ModuleDef
        FuncDecl
          KwFunction "function"
          Name "f"
          FormalPars
            LParen "("
            RParen ")"
          Block
            LBrace "{"
            IfStmt
              KwIf "if"
              ParenExpr
                LParen "("
                Identifier "a"
                RParen ")"
              Block
                LBrace "{"
                RBrace "}"
            BinaryExpr
              Identifier "x"
              Assign ":="
              Integer "1"
            RBrace "}"
    "#);
}

#[test]
fn timer_declaration_in_block() {
    insta::assert_snapshot!(expect_valid("{ timer t := 1.0; t.start }"), @r#"
    Root
      Block
        LBrace "{"
        ValueDecl
          RefSpec
            KwTimer "timer"
          Declarator
            Name "t"
            Assign ":="
            Float "1.0"
        Semicolon ";"
        SelectorExpr
          Identifier "t"
          Dot "."
          Identifier "start"
        RBrace "}"
    "#);
}
