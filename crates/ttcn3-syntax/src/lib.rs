//! TTCN-3 syntax: scanner, flat event-log syntax tree and parser.
//!
//! # Example
//!
//! ```
//! let tree = ttcn3_syntax::parse("example.ttcn3", "module M { const integer x := 1 }");
//! assert!(!tree.diagnostics().has_errors());
//!
//! let module = tree.root().first_child().unwrap();
//! assert_eq!(module.kind(), ttcn3_syntax::Kind::Module);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod kind;
pub mod parser;
pub mod scanner;
pub mod tree;

#[cfg(test)]
mod scanner_tests;

pub use diagnostics::{
    Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, RelatedInfo, Severity,
};
pub use kind::{Kind, TokenSet};
pub use parser::{DEFAULT_RECURSION_LIMIT, Parser};
pub use scanner::{Scanner, Token};
pub use tree::{Builder, Event, Node, Position, Span, Tree, tokenize};

/// Errors for callers that need a clean tree.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("parsing failed with {count} errors: {0}", count = .0.error_count())]
    Syntax(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses one source unit. Syntax errors are collected in the tree.
pub fn parse(name: &str, source: &str) -> Tree {
    let tree = Parser::new(source).with_name(name).parse();
    tracing::debug!(
        file = name,
        events = tree.events().len(),
        diagnostics = tree.diagnostics().len(),
        "parsed"
    );
    tree
}

impl Tree {
    /// Returns the tree if parsing reported no errors. Warnings are allowed.
    pub fn into_result(self) -> Result<Tree> {
        if self.diagnostics().has_errors() {
            return Err(Error::Syntax(self.diagnostics().clone()));
        }
        Ok(self)
    }
}
