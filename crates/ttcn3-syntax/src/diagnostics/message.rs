use std::fmt;

use rowan::TextRange;

/// Diagnostic kinds ordered by pipeline stage, earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Scanner output the parser could not accept
    UnterminatedLiteral,
    MalformedToken,
    UnknownToken,

    // Syntax
    RecursionLimit,
    ExpectedIdentifier,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedModuleDefinition,
    ExpectedTypeDefinition,
    MissingSemicolon,
    UnexpectedToken,
    UnsupportedSyntax,

    // Scope resolution
    UndefinedIdentifier,
    Redefinition,

    // Code generation
    UnsupportedConstruct,
    InvalidArgument,
    IgnoredAttribute,

    // Relocation, known only when the buffer is assembled
    UnknownReference,
}

impl DiagnosticKind {
    pub fn default_severity(self) -> Severity {
        match self {
            Self::IgnoredAttribute => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Message used when the reporter gives no detail.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::UnterminatedLiteral => "unterminated literal",
            Self::MalformedToken => "malformed token",
            Self::UnknownToken => "unknown token",

            Self::RecursionLimit => "nesting too deep",
            Self::ExpectedIdentifier => "expected identifier",
            Self::ExpectedExpression => "expected expression",
            Self::ExpectedStatement => "expected statement",
            Self::ExpectedModuleDefinition => "expected module definition",
            Self::ExpectedTypeDefinition => "expected type definition",
            Self::MissingSemicolon => "expected ';'",
            Self::UnexpectedToken => "unexpected token",
            Self::UnsupportedSyntax => "unsupported syntax",

            Self::UndefinedIdentifier => "undefined identifier",
            Self::Redefinition => "redefinition",

            Self::UnsupportedConstruct => "unsupported construct",
            Self::InvalidArgument => "invalid argument",
            Self::IgnoredAttribute => "attribute has no effect",

            Self::UnknownReference => "unknown reference",
        }
    }

    /// Message for a diagnostic of this kind. Kinds about a name quote the
    /// detail; the rest append it to the fallback or use it verbatim.
    pub fn message(self, detail: Option<&str>) -> String {
        let Some(detail) = detail else {
            return self.fallback_message().to_owned();
        };
        match self {
            Self::UndefinedIdentifier => format!("undefined identifier `{detail}`"),
            Self::Redefinition => format!("`{detail}` is already defined"),
            Self::IgnoredAttribute => format!("`{detail}` attribute has no effect"),
            Self::UnexpectedToken
            | Self::UnsupportedSyntax
            | Self::InvalidArgument
            | Self::UnknownReference => detail.to_owned(),
            _ => format!("{}: {detail}", self.fallback_message()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// A secondary location attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// `None` for problems without a source location, such as relocation
    /// failures.
    pub(crate) range: Option<TextRange>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: Option<TextRange>) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_owned(),
            related: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }
}

struct Span(TextRange);

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", u32::from(self.0.start()), u32::from(self.0.end()))
    }
}

/// `error at 4..7: message`, followed by any related locations.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity())?;
        if let Some(range) = self.range {
            write!(f, " at {}", Span(range))?;
        }
        write!(f, ": {}", self.message)?;
        for related in &self.related {
            write!(f, " (related: {} at {})", related.message, Span(related.range))?;
        }
        Ok(())
    }
}
