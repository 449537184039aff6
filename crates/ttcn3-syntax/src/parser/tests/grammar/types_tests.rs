use crate::parser::tests::expect_valid;

#[test]
fn record_type() {
    insta::assert_snapshot!(expect_valid("type record R { integer a, charstring b optional }"), @r#"
    Root
      ModuleDef
        StructTypeDecl
          KwType "type"
          KwRecord "record"
          Name "R"
          LBrace "{"
          Field
            RefSpec
              Identifier "integer"
            Name "a"
          Comma ","
          Field
            RefSpec
              KwCharstring "charstring"
            Name "b"
            KwOptional "optional"
          RBrace "}"
    "#);
}

#[test]
fn union_type() {
    insta::assert_snapshot!(expect_valid("type union U { integer a }"), @r#"
    Root
      ModuleDef
        StructTypeDecl
          KwType "type"
          KwUnion "union"
          Name "U"
          LBrace "{"
          Field
            RefSpec
              Identifier "integer"
            Name "a"
          RBrace "}"
    "#);
}

#[test]
fn nested_type_specs() {
    let input = "type record R { record { integer a } inner, record of integer xs }";

    insta::assert_snapshot!(expect_valid(input), @r#"
    Root
      ModuleDef
        StructTypeDecl
          KwType "type"
          KwRecord "record"
          Name "R"
          LBrace "{"
          Field
            StructSpec
              KwRecord "record"
              LBrace "{"
              Field
                RefSpec
                  Identifier "integer"
                Name "a"
              RBrace "}"
            Name "inner"
          Comma ","
          Field
            ListSpec
              KwRecord "record"
              KwOf "of"
              RefSpec
                Identifier "integer"
            Name "xs"
          RBrace "}"
    "#);
}

#[test]
fn list_subtype_with_length() {
    insta::assert_snapshot!(expect_valid("type record length(2) of integer L"), @r#"
    Root
      ModuleDef
        SubTypeDecl
          KwType "type"
          Field
            ListSpec
              KwRecord "record"
              LengthExpr
                KwLength "length"
                ParenExpr
                  LParen "("
                  Integer "2"
                  RParen ")"
              KwOf "of"
              RefSpec
                Identifier "integer"
            Name "L"
    "#);
}

#[test]
fn constrained_subtype() {
    insta::assert_snapshot!(expect_valid(r#"type charstring C ("a" .. "z") length(1)"#), @r#"
    Root
      ModuleDef
        SubTypeDecl
          KwType "type"
          Field
            RefSpec
              KwCharstring "charstring"
            Name "C"
            ParenExpr
              LParen "("
              BinaryExpr
                String "\"a\""
                DotDot ".."
                String "\"z\""
              RParen ")"
            LengthExpr
              KwLength "length"
              ParenExpr
                LParen "("
                Integer "1"
                RParen ")"
    "#);
}

#[test]
fn enumerated_type() {
    insta::assert_snapshot!(expect_valid("type enumerated E { a, b(2) }"), @r#"
    Root
      ModuleDef
        EnumTypeDecl
          KwType "type"
          KwEnumerated "enumerated"
          Name "E"
          LBrace "{"
          Identifier "a"
          Comma ","
          CallExpr
            Identifier "b"
            ParenExpr
              LParen "("
              Integer "2"
              RParen ")"
          RBrace "}"
    "#);
}

#[test]
fn map_type() {
    insta::assert_snapshot!(expect_valid("type map from charstring to integer M"), @r#"
    Root
      ModuleDef
        MapTypeDecl
          KwType "type"
          MapSpec
            KwMap "map"
            KwFrom "from"
            RefSpec
              KwCharstring "charstring"
            KwTo "to"
            RefSpec
              Identifier "integer"
          Name "M"
    "#);
}

#[test]
fn behaviour_type() {
    insta::assert_snapshot!(expect_valid("type function F(integer x) return integer"), @r#"
    Root
      ModuleDef
        BehaviourTypeDecl
          KwType "type"
          KwFunction "function"
          Name "F"
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
    "#);
}

#[test]
fn port_type() {
    insta::assert_snapshot!(expect_valid("type port P message { inout integer; map param (in T x) }"), @r#"
    Root
      ModuleDef
        PortTypeDecl
          KwType "type"
          KwPort "port"
          Name "P"
          KwMessage "message"
          LBrace "{"
          PortAttribute
            KwInout "inout"
            Identifier "integer"
          Semicolon ";"
          PortMapAttribute
            KwMap "map"
            KwParam "param"
            FormalPars
              LParen "("
              FormalPar
                KwIn "in"
                RefSpec
                  Identifier "T"
                Name "x"
              RParen ")"
          RBrace "}"
    "#);
}

#[test]
fn component_type() {
    insta::assert_snapshot!(expect_valid("type component C extends B { var integer x; timer t }"), @r#"
    Root
      ModuleDef
        ComponentTypeDecl
          KwType "type"
          KwComponent "component"
          Name "C"
          KwExtends "extends"
          Identifier "B"
          Block
            LBrace "{"
            ValueDecl
              KwVar "var"
              RefSpec
                Identifier "integer"
              Declarator
                Name "x"
            Semicolon ";"
            ValueDecl
              RefSpec
                KwTimer "timer"
              Declarator
                Name "t"
            RBrace "}"
    "#);
}

#[test]
fn array_definitions() {
    insta::assert_snapshot!(expect_valid("var integer a[2][3]"), @r#"
    Root
      ModuleDef
        ValueDecl
          KwVar "var"
          RefSpec
            Identifier "integer"
          Declarator
            Name "a"
            ArrayDef
              LBracket "["
              Integer "2"
              RBracket "]"
            ArrayDef
              LBracket "["
              Integer "3"
              RBracket "]"
    "#);
}
