//! Test helpers: compile snippets and render the output as text.

use ttcn3_syntax::{Diagnostics, Tree};

use crate::Compiler;

#[track_caller]
pub fn parse_valid(src: &str) -> Tree {
    let tree = ttcn3_syntax::parse("", src);
    if tree.diagnostics().has_errors() {
        panic!(
            "Expected valid input, got error:\n{}",
            tree.diagnostics().printer().source(src).render()
        );
    }
    tree
}

/// Compiles without envelope or line information.
#[track_caller]
pub fn compile_bare(src: &str) -> (Vec<u8>, Diagnostics) {
    let tree = parse_valid(src);
    Compiler::new().with_line_info(false).compile(&tree)
}

/// One decoded instruction per line.
pub fn listing(bytes: &[u8]) -> String {
    t3xf::instructions(bytes)
        .map(|instr| match instr {
            Ok(instr) => instr.to_string(),
            Err(err) => format!("!! {err}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Instruction listing of input that must compile cleanly.
#[track_caller]
pub fn expect_ops(src: &str) -> String {
    let (bytes, diagnostics) = compile_bare(src);
    if !diagnostics.is_empty() {
        panic!(
            "Expected clean compilation, got:\n{}",
            diagnostics.printer().source(src).render()
        );
    }
    listing(&bytes)
}

/// Plain diagnostics of input that must fail to compile cleanly.
#[track_caller]
pub fn expect_diagnostics(src: &str) -> String {
    let (_, diagnostics) = compile_bare(src);
    if diagnostics.is_empty() {
        panic!("Expected diagnostics, got none");
    }
    diagnostics.printer().render()
}
