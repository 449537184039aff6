use rowan::TextRange;

use super::*;

fn at(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}

#[test]
fn fallback_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedIdentifier, at(4, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 4..5: expected identifier");
}

#[test]
fn detail_fills_the_template() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndefinedIdentifier, at(4, 7))
        .message("foo")
        .emit();
    diagnostics
        .report(DiagnosticKind::IgnoredAttribute, at(9, 16))
        .message("display")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnsupportedConstruct, at(20, 23))
        .message("port map")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 4..7: undefined identifier `foo`
    warning at 9..16: `display` attribute has no effect
    error at 20..23: unsupported construct: port map
    ");
}

#[test]
fn unlocated() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_unlocated(DiagnosticKind::UnknownReference)
        .message("[0x0014] ref: unknown reference: placeholder was never bound")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.range(), None);
    assert!(diag.related().is_empty());
    insta::assert_snapshot!(
        diagnostics.to_string(),
        @"error: [0x0014] ref: unknown reference: placeholder was never bound"
    );
}

#[test]
fn summary_counts_the_rest() {
    let mut diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.to_string(), "");

    diagnostics.report(DiagnosticKind::UnknownToken, at(0, 1)).emit();
    diagnostics.report(DiagnosticKind::UnknownToken, at(2, 3)).emit();
    insta::assert_snapshot!(
        diagnostics.to_string(),
        @"error at 0..1: unknown token (and 1 more error)"
    );

    diagnostics.report(DiagnosticKind::UnknownToken, at(4, 5)).emit();
    insta::assert_snapshot!(
        diagnostics.to_string(),
        @"error at 0..1: unknown token (and 2 more errors)"
    );
}

#[test]
fn related_location_in_plain_output() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::Redefinition, at(27, 28))
        .message("x")
        .related_to("first defined here", at(12, 13))
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.related()[0].range(), at(12, 13));
    assert_eq!(diag.related()[0].message(), "first defined here");
    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"error at 27..28: `x` is already defined (related: first defined here at 12..13)"
    );
}

#[test]
fn related_location_annotated() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, at(0, 5))
        .message("expected ')'")
        .related_to("unclosed '('", at(6, 7))
        .emit();

    let result = diagnostics.printer().source("while (x {}").render();
    insta::assert_snapshot!(result, @r"
    error: expected ')'
      |
    1 | while (x {}
      | ^^^^^ - unclosed '('
    ");
}

#[test]
fn annotated_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndefinedIdentifier, at(0, 6))
        .message("foobar")
        .emit();

    let result = diagnostics
        .printer()
        .source("foobar := 1")
        .path("test.ttcn3")
        .render();
    insta::assert_snapshot!(result, @r"
    error: undefined identifier `foobar`
     --> test.ttcn3:1:1
      |
    1 | foobar := 1
      | ^^^^^^
    ");
}

#[test]
fn empty_range_marks_one_character() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingSemicolon, TextRange::empty(6.into()))
        .emit();

    let result = diagnostics.printer().source("x := 1 y := 2").render();
    insta::assert_snapshot!(result, @r"
    error: expected ';'
      |
    1 | x := 1 y := 2
      |       ^
    ");
}

#[test]
fn unlocated_annotated() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_unlocated(DiagnosticKind::UnknownReference)
        .message("dangling reference")
        .emit();

    let result = diagnostics.printer().source("f()").render();
    insta::assert_snapshot!(result, @"error: dangling reference");
}

#[test]
fn colored_output() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnknownToken, at(0, 1)).emit();

    let result = diagnostics.printer().source("$").colored(true).render();
    assert!(result.contains("unknown token"));
    assert!(result.contains('\x1b'));
}

#[test]
fn nothing_to_print() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.printer().source("x := 1").render().is_empty());
    assert!(diagnostics.printer().render().is_empty());
}

#[test]
fn counts_by_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnknownToken, at(0, 1)).emit();
    diagnostics
        .report(DiagnosticKind::IgnoredAttribute, at(1, 2))
        .message("display")
        .emit();

    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
    assert!(diagnostics.has_warnings());

    let mut later = Diagnostics::new();
    later
        .report_unlocated(DiagnosticKind::UnknownReference)
        .emit();
    diagnostics.extend(later);
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.error_count(), 2);
}

#[test]
fn only_ignored_attributes_warn() {
    assert_eq!(
        DiagnosticKind::IgnoredAttribute.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        DiagnosticKind::UndefinedIdentifier.default_severity(),
        Severity::Error
    );
    assert_eq!(
        DiagnosticKind::UnknownReference.default_severity(),
        Severity::Error
    );
}

#[test]
fn messages_without_detail() {
    assert_eq!(
        DiagnosticKind::UnterminatedLiteral.message(None),
        "unterminated literal"
    );
    assert_eq!(DiagnosticKind::Redefinition.message(None), "redefinition");
    assert_eq!(
        DiagnosticKind::UnexpectedToken.message(Some("expected '}'")),
        "expected '}'"
    );
}
