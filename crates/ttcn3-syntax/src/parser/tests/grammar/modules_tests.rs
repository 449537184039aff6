use indoc::indoc;

use crate::parser::tests::expect_valid;

#[test]
fn module_with_constant() {
    let input = "module M { const integer x := 1; }";

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      Module
        KwModule "module"
        Name "M"
        LBrace "{"
        ModuleDef
          ValueDecl
            KwConst "const"
            RefSpec
              Identifier "integer"
            Declarator
              Name "x"
              Assign ":="
              Integer "1"
        Semicolon ";"
        RBrace "}"
    "#);
}

#[test]
fn module_with_attributes() {
    let input = r#"module M {} with { extension "e"; variant (a) "v" }"#;

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      Module
        KwModule "module"
        Name "M"
        LBrace "{"
        RBrace "}"
        WithSpec
          KwWith "with"
          LBrace "{"
          WithStmt
            KwExtension "extension"
            String "\"e\""
          Semicolon ";"
          WithStmt
            KwVariant "variant"
            WithQualifiers
              LParen "("
              Identifier "a"
              RParen ")"
            String "\"v\""
          RBrace "}"
    "#);
}

#[test]
fn import_all_except() {
    let input = "import from A all except { const x; function all }";

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      ModuleDef
        ImportDecl
          KwImport "import"
          KwFrom "from"
          Identifier "A"
          ImportSpec
            KwAll "all"
            ExceptSpec
              KwExcept "except"
              LBrace "{"
              ImportSpec
                KwConst "const"
                Identifier "x"
              Semicolon ";"
              ImportSpec
                KwFunction "function"
                KwAll "all"
              RBrace "}"
    "#);
}

#[test]
fn import_specs() {
    let input = "import from B { type T, U; group G except { const all } }";

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      ModuleDef
        ImportDecl
          KwImport "import"
          KwFrom "from"
          Identifier "B"
          LBrace "{"
          ImportSpec
            KwType "type"
            Identifier "T"
            Comma ","
            Identifier "U"
          Semicolon ";"
          ImportSpec
            KwGroup "group"
            Identifier "G"
            ExceptSpec
              KwExcept "except"
              LBrace "{"
              ImportSpec
                KwConst "const"
                KwAll "all"
              RBrace "}"
          RBrace "}"
    "#);
}

#[test]
fn function_declaration() {
    let input = indoc! {"
        function f(in integer a, out T b) runs on C return boolean {
            return true
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
            FormalPar
              KwIn "in"
              RefSpec
                Identifier "integer"
              Name "a"
            Comma ","
            FormalPar
              KwOut "out"
              RefSpec
                Identifier "T"
              Name "b"
            RParen ")"
          RunsOnSpec
            KwRuns "runs"
            KwOn "on"
            RefSpec
              Identifier "C"
          ReturnSpec
            KwReturn "return"
            RefSpec
              Identifier "boolean"
          Block
            LBrace "{"
            ReturnStmt
              KwReturn "return"
              KwTrue "true"
            RBrace "}"
    "#);
}

#[test]
fn testcase_with_system() {
    insta::assert_snapshot!(expect_valid("testcase tc() runs on C system S {}"), @r#"
    Root
      ModuleDef
        FuncDecl
          KwTestcase "testcase"
          Name "tc"
          FormalPars
            LParen "("
            RParen ")"
          RunsOnSpec
            KwRuns "runs"
            KwOn "on"
            RefSpec
              Identifier "C"
          SystemSpec
            KwSystem "system"
            RefSpec
              Identifier "S"
          Block
            LBrace "{"
            RBrace "}"
    "#);
}

#[test]
fn external_function() {
    insta::assert_snapshot!(expect_valid("external function ef(integer x) return integer;"), @r#"
    Root
      ModuleDef
        FuncDecl
          KwExternal "external"
          KwFunction "function"
          Name "ef"
          FormalPars
            LParen "("
            FormalPar
              RefSpec
                Identifier "integer"
              Name "x"
            RParen ")"
          ReturnSpec
            KwReturn "return"
            RefSpec
              Identifier "integer"
      Semicolon ";"
    "#);
}

#[test]
fn signature() {
    insta::assert_snapshot!(expect_valid("signature S(in integer x) return boolean exception (E)"), @r#"
    Root
      ModuleDef
        SignatureDecl
          KwSignature "signature"
          Name "S"
          FormalPars
            LParen "("
            FormalPar
              KwIn "in"
              RefSpec
                Identifier "integer"
              Name "x"
            RParen ")"
          ReturnSpec
            KwReturn "return"
            RefSpec
              Identifier "boolean"
          KwException "exception"
          ParenExpr
            LParen "("
            Identifier "E"
            RParen ")"
    "#);
}

#[test]
fn template_declaration() {
    let input = "template R t(integer p) modifies base := { f := p }";

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      ModuleDef
        TemplateDecl
          RestrictionSpec
            KwTemplate "template"
          RefSpec
            Identifier "R"
          Name "t"
          FormalPars
            LParen "("
            FormalPar
              RefSpec
                Identifier "integer"
              Name "p"
            RParen ")"
          KwModifies "modifies"
          Identifier "base"
          Assign ":="
          CompositeLiteral
            LBrace "{"
            BinaryExpr
              Identifier "f"
              Assign ":="
              Identifier "p"
            RBrace "}"
    "#);
}

#[test]
fn restricted_template() {
    insta::assert_snapshot!(expect_valid("template (present) integer t := ?"), @r#"
    Root
      ModuleDef
        TemplateDecl
          RestrictionSpec
            KwTemplate "template"
            LParen "("
            KwPresent "present"
            RParen ")"
          RefSpec
            Identifier "integer"
          Name "t"
          Assign ":="
          Question "?"
    "#);
}

#[test]
fn module_parameter_group() {
    insta::assert_snapshot!(expect_valid("modulepar { integer a := 1; charstring b }"), @r#"
    Root
      ModuleDef
        ModuleParGroup
          KwModulepar "modulepar"
          LBrace "{"
          ValueDecl
            RefSpec
              Identifier "integer"
            Declarator
              Name "a"
              Assign ":="
              Integer "1"
          Semicolon ";"
          ValueDecl
            RefSpec
              KwCharstring "charstring"
            Declarator
              Name "b"
          RBrace "}"
    "#);
}

#[test]
fn group() {
    insta::assert_snapshot!(expect_valid("group G { const integer x := 1 }"), @r#"
    Root
      ModuleDef
        GroupDecl
          KwGroup "group"
          Name "G"
          LBrace "{"
          ModuleDef
            ValueDecl
              KwConst "const"
              RefSpec
                Identifier "integer"
              Declarator
                Name "x"
                Assign ":="
                Integer "1"
          RBrace "}"
    "#);
}

#[test]
fn control_part() {
    insta::assert_snapshot!(expect_valid("control { var integer v; execute(tc()) }"), @r#"
    Root
      ModuleDef
        ControlPart
          KwControl "control"
          Block
            LBrace "{"
            ValueDecl
              KwVar "var"
              RefSpec
                Identifier "integer"
              Declarator
                Name "v"
            Semicolon ";"
            CallExpr
              Identifier "execute"
              ParenExpr
                LParen "("
                CallExpr
                  Identifier "tc"
                  ParenExpr
                    LParen "("
                    RParen ")"
                RParen ")"
            RBrace "}"
    "#);
}

#[test]
fn comments_are_dropped_from_dump() {
    let input = indoc! {"
        // leading
        module M { /* inner */ }
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      Module
        KwModule "module"
        Name "M"
        LBrace "{"
        RBrace "}"
    "#);
}
