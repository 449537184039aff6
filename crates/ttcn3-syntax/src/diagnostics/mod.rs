//! Diagnostics collected while scanning, parsing and compiling.
//!
//! Problems never abort a pass. They are accumulated here and returned next
//! to whatever output could still be produced.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use std::fmt;
use std::slice;

use rowan::TextRange;

pub use message::{Diagnostic, DiagnosticKind, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

/// Diagnostics in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

/// A diagnostic being assembled. Nothing is recorded until [`emit`].
///
/// [`emit`]: DiagnosticBuilder::emit
#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    sink: &'a mut Diagnostics,
    diagnostic: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic at `range` carrying the kind's fallback message.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        self.start(kind, Some(range))
    }

    /// Starts a diagnostic that points nowhere in the source, such as a
    /// reference that failed to resolve while assembling.
    pub fn report_unlocated(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        self.start(kind, None)
    }

    fn start(&mut self, kind: DiagnosticKind, range: Option<TextRange>) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostic: Diagnostic::new(kind, range),
            sink: self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.0.iter().filter(|d| d.severity() == severity).count()
    }

    /// Appends the diagnostics of a later pass.
    pub fn extend(&mut self, later: Diagnostics) {
        self.0.extend(later.0);
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Summarises the collection as one message: the first diagnostic, followed
/// by the number of the remaining ones.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        match rest.len() {
            0 => Ok(()),
            1 => f.write_str(" (and 1 more error)"),
            n => write!(f, " (and {n} more errors)"),
        }
    }
}

impl DiagnosticBuilder<'_> {
    /// Replaces the fallback message with the kind's template filled in with
    /// `detail`.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.diagnostic.message = self.diagnostic.kind.message(Some(&detail));
        self
    }

    /// Points at a second location, e.g. the earlier definition of a name.
    pub fn related_to(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.diagnostic.related.push(RelatedInfo::new(range, message));
        self
    }

    pub fn emit(self) {
        self.sink.0.push(self.diagnostic);
    }
}
