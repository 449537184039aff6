//! Grammar productions for TTCN-3.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! The top level accepts modules as well as bare definitions, statements and
//! expressions, so snippets can be parsed without a surrounding module.

mod expressions;
mod module;
mod statements;
mod types;

use crate::diagnostics::DiagnosticKind;
use crate::kind::Kind::{self, *};
use crate::kind::TokenSet;
use crate::kind::token_sets::{EXPR_START, MODULE_DEF_START, STMT_KEYWORDS, STMT_START};
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn parse_root(&mut self) {
        self.start_node(Root);

        loop {
            match self.current() {
                Eof => break,
                Comma | Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let before = self.pos;
            self.parse_top_level();
            if self.pos == before {
                self.error_and_bump(DiagnosticKind::ExpectedStatement);
            }
        }

        self.drain_trivia();
        self.finish_node();
    }

    fn parse_top_level(&mut self) {
        let kind = self.current();
        match kind {
            KwModule => self.parse_module(),
            KwTestcase if self.next_is(Dot) => self.parse_stmt(),
            KwTimer | KwPort => self.parse_stmt(),
            _ if MODULE_DEF_START.contains(kind) => self.parse_module_def(),
            _ if STMT_KEYWORDS.contains(kind) || kind == Identifier => self.parse_stmt(),
            _ if EXPR_START.contains(kind) => self.parse_expr(),
            _ => self.error_and_bump(DiagnosticKind::ExpectedStatement),
        }
    }

    /// Identifier in declaring position, recorded as a `Name` token.
    pub(super) fn parse_name(&mut self) {
        match self.current() {
            Identifier | KwAddress => self.bump_remap(Name),
            _ => self.error(DiagnosticKind::ExpectedIdentifier),
        }
    }

    /// Semicolons are optional before `}` and after a construct ending in `}`.
    pub(super) fn expect_semi(&mut self) {
        if self.eat_token(Semicolon) {
            return;
        }
        if matches!(self.current(), RBrace | Eof) || self.last_significant() == Some(RBrace) {
            return;
        }
        self.error(DiagnosticKind::MissingSemicolon);
    }

    fn last_significant(&self) -> Option<Kind> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.kind)
    }

    /// `{ ... }` list of items, each followed by an optional `;`.
    pub(super) fn parse_braced_items(&mut self, mut item: impl FnMut(&mut Self)) {
        self.expect(LBrace, "'{'");
        loop {
            match self.current() {
                RBrace | Eof => break,
                Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }
            let before = self.pos;
            item(self);
            self.expect_semi();
            if self.pos == before {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
        }
        self.expect(RBrace, "'}'");
    }

    /// Comma separated list; stops at the first item not followed by `,`.
    pub(super) fn parse_comma_list(&mut self, mut item: impl FnMut(&mut Self)) {
        loop {
            item(self);
            if !self.eat_token(Comma) {
                break;
            }
        }
    }

    /// Comma separated list of expressions up to `close`, which is not
    /// consumed. Empty lists are allowed.
    pub(super) fn parse_expr_list(&mut self, close: Kind) {
        while !self.currently_is(close) && !self.eof() {
            let before = self.pos;
            self.parse_expr();
            if self.pos == before || !self.eat_token(Comma) {
                break;
            }
        }
    }

    /// Recovers to the next synchronization point unless already there.
    pub(super) fn recover_to_stmt(&mut self, kind: DiagnosticKind) {
        self.error_recover(kind, STMT_START);
    }

    pub(super) fn eat_one_of(&mut self, set: TokenSet) -> bool {
        if self.currently_is_one_of(set) {
            self.bump();
            true
        } else {
            false
        }
    }
}
