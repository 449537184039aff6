//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{TextRange, TextSize};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::kind::{Kind, TokenSet};
use crate::scanner::{Scanner, Token};
use crate::tree::{Builder, Checkpoint, Tree};

pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

/// Lookaheads allowed between two consumed tokens.
const FUEL: u32 = 256;

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: Builder,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: Cell<u32>,
    name: String,
    lines: Vec<u32>,
    recursion_limit: u32,
    recursion_exceeded: bool,
}

impl<'src> Parser<'src> {
    /// Scans `source` and resolves keywords. Parsing starts with [`Parser::parse`].
    pub fn new(source: &'src str) -> Self {
        let (mut tokens, lines) = Scanner::lex(source);
        for token in &mut tokens {
            if token.kind == Kind::Identifier
                && let Some(keyword) = Kind::keyword(token.text(source))
            {
                token.kind = keyword;
            }
        }

        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: Builder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            debug_fuel: Cell::new(FUEL),
            name: String::new(),
            lines,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            recursion_exceeded: false,
        }
    }

    /// File name recorded in the tree and its spans.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Tree {
        self.parse_root();
        self.drain_trivia();
        let diagnostics = std::mem::take(&mut self.diagnostics);
        self.builder
            .finish(self.name, self.source, self.lines)
            .with_diagnostics(diagnostics)
    }

    /// First significant token at or after the cursor; trivia passed over
    /// is buffered for the next node.
    fn current_token(&mut self) -> Option<Token> {
        self.skip_trivia_to_buffer();
        self.tokens.get(self.pos).copied()
    }

    pub(super) fn current(&mut self) -> Kind {
        self.ensure_progress();
        self.current_token().map_or(Kind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        match self.current_token() {
            Some(token) => token.span,
            None => TextRange::empty(self.eof_offset()),
        }
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        let source = self.source;
        self.current_token().map_or("", |t| t.text(source))
    }

    fn refuel(&self) {
        self.debug_fuel.set(FUEL);
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: Kind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Kind of the `n`th significant token from the cursor; 0 is the current one.
    pub(super) fn peek_nth(&mut self, n: usize) -> Kind {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .filter(|kind| !kind.is_trivia())
            .nth(n)
            .unwrap_or(Kind::Eof)
    }

    pub(super) fn next_is(&mut self, kind: Kind) -> bool {
        self.peek_nth(1) == kind
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while let Some(&token) = self.tokens.get(self.pos)
            && token.kind.is_trivia()
        {
            self.trivia_buffer.push(token);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            self.builder.push_token(token.kind, token.span);
        }
    }

    pub(super) fn start_node(&mut self, kind: Kind) {
        self.drain_trivia();
        self.builder.push(kind);
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: Kind) {
        self.builder.push_at(checkpoint, kind);
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.pop();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.bump_as(None);
    }

    /// Consumes the current token, recording it as `kind`. Used to turn
    /// identifiers in declaring position into `Name` tokens.
    pub(super) fn bump_remap(&mut self, kind: Kind) {
        self.bump_as(Some(kind));
    }

    fn bump_as(&mut self, remap: Option<Kind>) {
        let Some(token) = self.current_token() else {
            panic!("bump past the last token");
        };
        self.refuel();
        self.drain_trivia();
        self.report_lexical(token);
        self.builder.push_token(remap.unwrap_or(token.kind), token.span);
        self.pos += 1;
    }

    fn report_lexical(&mut self, token: Token) {
        let kind = match token.kind {
            Kind::Unknown => DiagnosticKind::UnknownToken,
            Kind::Malformed => DiagnosticKind::MalformedToken,
            Kind::Unterminated => DiagnosticKind::UnterminatedLiteral,
            _ => return,
        };
        self.last_diagnostic_pos = Some(token.span.start());
        self.diagnostics.report(kind, token.span).emit();
    }

    pub(super) fn eat_token(&mut self, kind: Kind) -> bool {
        let found = self.currently_is(kind);
        if found {
            self.bump();
        }
        found
    }

    /// Consumes `kind` or reports `expected {what}` without consuming.
    pub(super) fn expect(&mut self, kind: Kind, what: &str) -> bool {
        let found = self.eat_token(kind);
        if !found {
            self.error_msg(DiagnosticKind::UnexpectedToken, format!("expected {what}"));
        }
        found
    }

    /// One syntax error per offset; the first one wins.
    fn should_report(&mut self, pos: TextSize) -> bool {
        self.last_diagnostic_pos.replace(pos) != Some(pos)
    }

    pub(super) fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(Kind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Lexical error tokens report themselves when consumed.
    fn error_range(&mut self) -> Option<TextRange> {
        if matches!(
            self.current(),
            Kind::Unknown | Kind::Malformed | Kind::Unterminated
        ) {
            return None;
        }
        let range = self.current_span();
        self.should_report(range.start()).then_some(range)
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let Some(range) = self.error_range() else {
            return;
        };
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let Some(range) = self.error_range() else {
            return;
        };
        self.diagnostics.report(kind, range).message(message).emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    /// Wraps tokens in an `Error` node until one of `recovery` (or EOF) is
    /// reached. Nothing is consumed if the current token already recovers.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, recovery: TokenSet) {
        self.recover_with(recovery, |p| p.error(kind));
    }

    /// Like [`Parser::error_recover`], reported as an unexpected token with
    /// a custom message.
    pub(super) fn error_recover_msg(&mut self, message: &str, recovery: TokenSet) {
        self.recover_with(recovery, |p| {
            p.error_msg(DiagnosticKind::UnexpectedToken, message)
        });
    }

    fn recover_with(&mut self, recovery: TokenSet, report: impl FnOnce(&mut Self)) {
        if self.currently_is_one_of(recovery) || self.eof() {
            report(self);
            return;
        }

        self.start_node(Kind::Error);
        report(self);
        while !self.currently_is_one_of(recovery) && !self.eof() {
            self.bump();
        }
        self.finish_node();
    }

    /// Returns false once the nesting limit is reached. The caller must then
    /// call [`Parser::bail_out`] instead of descending.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        self.refuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.refuel();
    }

    /// Puts the rest of the input into one `Error` node.
    pub(super) fn bail_out(&mut self) {
        if !self.recursion_exceeded {
            self.recursion_exceeded = true;
            let range = self.current_span();
            tracing::debug!(limit = self.recursion_limit, "recursion limit reached");
            self.diagnostics
                .report(DiagnosticKind::RecursionLimit, range)
                .emit();
        }
        if self.eof() {
            return;
        }
        self.start_node(Kind::Error);
        self.drain_trivia();
        for token in &self.tokens[self.pos..] {
            self.builder.push_token(token.kind, token.span);
        }
        self.pos = self.tokens.len();
        self.finish_node();
    }
}
