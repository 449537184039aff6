use indoc::indoc;

use crate::kind::Kind;
use crate::scanner::Scanner;

fn scan(input: &str) -> String {
    let mut scanner = Scanner::new(input);
    let mut out = Vec::new();
    loop {
        let token = scanner.scan();
        out.push(format!(
            "[{}:{}): {:?}",
            u32::from(token.span.start()),
            u32::from(token.span.end()),
            token.kind
        ));
        if token.kind == Kind::Eof {
            break;
        }
    }
    out.join("\n")
}

#[test]
fn empty_and_whitespace() {
    insta::assert_snapshot!(scan(""), @"[0:0): Eof");
    insta::assert_snapshot!(scan("\t "), @"[2:2): Eof");
}

#[test]
fn comments() {
    insta::assert_snapshot!(scan("///**/\n/**///"), @r"
    [0:7): Comment
    [7:11): Comment
    [11:13): Comment
    [13:13): Eof
    ");
}

#[test]
fn unterminated_block_comment() {
    insta::assert_snapshot!(scan("/* foo"), @r"
    [0:6): Unterminated
    [6:6): Eof
    ");
}

#[test]
fn preprocessor_lines() {
    insta::assert_snapshot!(scan("#"), @r"
    [0:1): Preproc
    [1:1): Eof
    ");
    insta::assert_snapshot!(scan("#foo bar\n"), @r"
    [0:9): Preproc
    [9:9): Eof
    ");
}

#[test]
fn identifiers() {
    insta::assert_snapshot!(scan("_ f1o"), @r"
    [0:1): Identifier
    [2:5): Identifier
    [5:5): Eof
    ");
    insta::assert_snapshot!(scan("%definitionId"), @r"
    [0:13): Identifier
    [13:13): Eof
    ");
}

#[test]
fn keywords_are_identifiers() {
    insta::assert_snapshot!(scan("module"), @r"
    [0:6): Identifier
    [6:6): Eof
    ");
}

#[test]
fn integers() {
    insta::assert_snapshot!(scan("0"), @r"
    [0:1): Integer
    [1:1): Eof
    ");
    insta::assert_snapshot!(scan("00"), @r"
    [0:2): Malformed
    [2:2): Eof
    ");
    insta::assert_snapshot!(scan("0h"), @r"
    [0:2): Malformed
    [2:2): Eof
    ");
}

#[test]
fn modifiers() {
    insta::assert_snapshot!(scan("@foo"), @r"
    [0:4): Modifier
    [4:4): Eof
    ");
    insta::assert_snapshot!(scan("@"), @r"
    [0:1): Unknown
    [1:1): Eof
    ");
}

#[test]
fn floats() {
    insta::assert_snapshot!(scan("0.0 0.01 1E2 1e+2 1.2e-2"), @r"
    [0:3): Float
    [4:8): Float
    [9:12): Float
    [13:17): Float
    [18:24): Float
    [24:24): Eof
    ");
}

#[test]
fn malformed_floats() {
    insta::assert_snapshot!(scan("0.0e 0.0h 0.0e-"), @r"
    [0:4): Malformed
    [5:9): Malformed
    [10:15): Malformed
    [15:15): Eof
    ");
}

#[test]
fn range_is_not_a_float() {
    insta::assert_snapshot!(scan("1..2"), @r"
    [0:1): Integer
    [1:3): DotDot
    [3:4): Integer
    [4:4): Eof
    ");
}

#[test]
fn strings() {
    insta::assert_snapshot!(scan(r#""foo" "" """""#), @r"
    [0:5): String
    [6:8): String
    [9:13): String
    [13:13): Eof
    ");
    insta::assert_snapshot!(scan(r#""\\" "\"""#), @r"
    [0:4): String
    [5:9): String
    [9:9): Eof
    ");
}

#[test]
fn unterminated_strings() {
    insta::assert_snapshot!(scan("\""), @r"
    [0:1): Unterminated
    [1:1): Eof
    ");
    insta::assert_snapshot!(scan("\"\"\""), @r"
    [0:3): Unterminated
    [3:3): Eof
    ");
    insta::assert_snapshot!(scan("\"\\\""), @r"
    [0:3): Unterminated
    [3:3): Eof
    ");
}

#[test]
fn bitstrings() {
    insta::assert_snapshot!(scan("''b ''hex '1?00 0101'B"), @r"
    [0:3): Bitstring
    [4:9): Bitstring
    [10:22): Bitstring
    [22:22): Eof
    ");
    insta::assert_snapshot!(scan("'/**/ 'hex"), @r"
    [0:10): Bitstring
    [10:10): Eof
    ");
}

#[test]
fn malformed_bitstrings() {
    insta::assert_snapshot!(scan("''"), @r"
    [0:2): Malformed
    [2:2): Eof
    ");
    insta::assert_snapshot!(scan("''4"), @r"
    [0:3): Malformed
    [3:3): Eof
    ");
    insta::assert_snapshot!(scan("'"), @r"
    [0:1): Unterminated
    [1:1): Eof
    ");
}

#[test]
fn multi_character_operators() {
    insta::assert_snapshot!(scan("!= -> .. :: := << <= <@ == => >= >> @>"), @r"
    [0:2): Ne
    [3:5): Arrow
    [6:8): DotDot
    [9:11): ColonColon
    [12:14): Assign
    [15:17): Shl
    [18:20): Le
    [21:23): Rol
    [24:26): EqEq
    [27:29): FatArrow
    [30:32): Ge
    [33:35): Shr
    [36:38): Ror
    [38:38): Eof
    ");
}

#[test]
fn unknown_runs_are_coalesced() {
    insta::assert_snapshot!(scan("a $$ b"), @r"
    [0:1): Identifier
    [2:4): Unknown
    [5:6): Identifier
    [6:6): Eof
    ");
}

#[test]
fn line_table() {
    let input = indoc! {"
        a
        /* b
        c */
        d
    "};
    let (tokens, lines) = Scanner::lex(input);
    assert_eq!(tokens.len(), 3);
    assert_eq!(lines, vec![0, 2, 7, 12, 14]);
}
