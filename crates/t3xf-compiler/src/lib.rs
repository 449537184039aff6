//! Code generation from TTCN-3 syntax trees to T3XF bytecode.
//!
//! The [`Compiler`] walks a [`Tree`](ttcn3_syntax::Tree) produced by
//! `ttcn3-syntax`, resolves names through a chain of lexical scopes and emits
//! postfix instructions through a [`t3xf::Encoder`]. Definitions may be used
//! before they appear in their module; such uses are emitted as placeholders
//! and bound once the definition has been compiled.
//!
//! # Example
//!
//! ```
//! let tree = ttcn3_syntax::parse("", "1 + 2 * 3");
//! let (bytes, diagnostics) = t3xf_compiler::Compiler::new()
//!     .with_line_info(false)
//!     .compile(&tree);
//! assert!(diagnostics.is_empty());
//!
//! let ops: Vec<String> = t3xf::instructions(&bytes)
//!     .map(|i| i.unwrap().to_string())
//!     .collect();
//! assert_eq!(ops, ["natlong 1", "natlong 2", "natlong 3", "mul", "add"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod compiler;
mod declarations;
mod expressions;
mod scope;
mod statements;
mod types;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod scope_tests;

pub use compiler::Compiler;
pub use ttcn3_syntax::{Diagnostic, DiagnosticKind, Diagnostics};

/// Errors for callers that only want a usable buffer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] ttcn3_syntax::Error),

    #[error("compilation failed with {count} errors: {0}", count = .0.error_count())]
    Compile(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses and compiles one source unit with default settings.
///
/// Fails with the diagnostics of the first stage that reports errors.
/// Warnings do not fail the compilation.
pub fn compile(name: &str, source: &str) -> Result<Vec<u8>> {
    let tree = ttcn3_syntax::parse(name, source).into_result()?;
    let (bytes, diagnostics) = Compiler::new().compile(&tree);
    if diagnostics.has_errors() {
        return Err(Error::Compile(diagnostics));
    }
    Ok(bytes)
}
