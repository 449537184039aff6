//! Text rendering for a diagnostics collection.

use std::fmt::{self, Write};
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::message::{Diagnostic, Severity};
use super::Diagnostics;

/// Prints one diagnostic per line, or, once a source text is attached,
/// annotated excerpts of that text.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Text the diagnostic ranges point into.
    pub fn source(self, source: &'s str) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// File name shown in the `-->` header of annotated output.
    pub fn path(self, path: &'s str) -> Self {
        Self {
            path: Some(path),
            ..self
        }
    }

    pub fn colored(self, colored: bool) -> Self {
        Self { colored, ..self }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.source {
                Some(source) => {
                    let groups = annotate(diag, source, self.path);
                    write!(w, "{}", renderer.render(&groups))?;
                }
                None => write!(w, "{diag}")?,
            }
        }
        Ok(())
    }
}

fn annotate<'a>(diag: &'a Diagnostic, source: &'a str, path: Option<&'a str>) -> Vec<Group<'a>> {
    let title = level(diag.severity()).primary_title(diag.message.as_str());
    let Some(range) = diag.range else {
        return vec![Group::with_title(title)];
    };

    let primary = AnnotationKind::Primary
        .span(span_in(range, source))
        .label(diag.message.as_str());
    let mut snippet = Snippet::source(source).line_start(1).annotation(primary);
    if let Some(path) = path {
        snippet = snippet.path(path);
    }
    for related in &diag.related {
        snippet = snippet.annotation(
            AnnotationKind::Context
                .span(span_in(related.range, source))
                .label(related.message.as_str()),
        );
    }
    vec![title.element(snippet)]
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte span of `range` within `source`. Empty ranges widen to the next byte
/// so they stay visible; ranges reaching past the end are clamped.
fn span_in(range: TextRange, source: &str) -> Range<usize> {
    let len = source.len();
    let start = usize::from(range.start()).min(len);
    let end = usize::from(range.end()).min(len);
    if start < end {
        start..end
    } else {
        start..(start + 1).min(len)
    }
}
