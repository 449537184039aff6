//! Statements and blocks.

use crate::diagnostics::DiagnosticKind;
use crate::kind::Kind::*;
use crate::kind::token_sets::{EXPR_START, STMT_START};
use crate::parser::Parser;

impl Parser<'_> {
    /// `{ stmt; ... }`
    pub(super) fn parse_block(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }
        self.start_node(Block);
        self.parse_braced_items(Self::parse_stmt);
        self.finish_node();
        self.exit_recursion();
    }

    pub(super) fn parse_stmt(&mut self) {
        match self.current() {
            KwTemplate => self.parse_template_decl(),
            KwVar | KwConst | KwPort => self.parse_value_decl(),
            KwTimer if self.next_is(Identifier) => self.parse_value_decl(),
            KwRepeat | KwBreak | KwContinue => {
                self.start_node(BranchStmt);
                self.bump();
                self.finish_node();
            }
            KwLabel => {
                self.start_node(BranchStmt);
                self.bump();
                self.parse_name();
                self.finish_node();
            }
            KwGoto => {
                self.start_node(BranchStmt);
                self.bump();
                self.parse_ident();
                self.finish_node();
            }
            KwReturn => {
                self.start_node(ReturnStmt);
                self.bump();
                if !self.currently_is_one_of(STMT_START) && !self.eof() {
                    self.parse_expr();
                }
                self.finish_node();
            }
            KwSelect => self.parse_select(),
            KwAlt | KwInterleave => {
                self.start_node(AltStmt);
                self.bump();
                self.eat_token(Modifier);
                self.parse_block();
                self.finish_node();
            }
            LBracket => self.parse_alt_guard(),
            KwFor => self.parse_for(),
            KwWhile => {
                self.start_node(WhileStmt);
                self.bump();
                self.parse_paren_expr();
                self.parse_block();
                self.finish_node();
            }
            KwDo => {
                self.start_node(DoWhileStmt);
                self.bump();
                self.parse_block();
                self.expect(KwWhile, "'while'");
                self.parse_paren_expr();
                self.finish_node();
            }
            KwIf => self.parse_if(),
            LBrace => self.parse_block(),
            kind if EXPR_START.contains(kind) => self.parse_simple_stmt(),
            _ => self.recover_to_stmt(DiagnosticKind::ExpectedStatement),
        }
    }

    /// `if (c) { } [else if (c) { }]* [else { }]`
    fn parse_if(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }
        self.start_node(IfStmt);
        self.bump();
        self.parse_paren_expr();
        self.parse_block();
        if self.eat_token(KwElse) {
            if self.currently_is(KwIf) {
                self.parse_if();
            } else {
                self.parse_block();
            }
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// `select [union] (tag) { case (..) { } ... case else { } }`
    fn parse_select(&mut self) {
        self.start_node(SelectStmt);
        self.bump();
        self.eat_token(KwUnion);
        self.parse_paren_expr();
        self.expect(LBrace, "'{'");
        while !self.currently_is(RBrace) && !self.eof() {
            if !self.currently_is(KwCase) {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected 'case'");
                self.bump_as_error();
                continue;
            }
            self.start_node(CaseClause);
            self.bump();
            if !self.eat_token(KwElse) {
                self.parse_paren_expr();
            }
            self.parse_block();
            self.finish_node();
        }
        self.expect(RBrace, "'}'");
        self.finish_node();
    }

    /// `[else] { }` or `[guard] event [{ }]`
    fn parse_alt_guard(&mut self) {
        self.start_node(AltGuard);
        self.bump();
        if self.eat_token(KwElse) {
            self.expect(RBracket, "']'");
            self.parse_block();
            self.finish_node();
            return;
        }
        if !self.currently_is(RBracket) {
            self.parse_expr();
        }
        self.expect(RBracket, "']'");
        self.parse_expr();
        if self.currently_is(LBrace) {
            self.parse_block();
        }
        self.finish_node();
    }

    /// Classic `for (init; cond; post) { }` or range `for (x in list) { }`.
    /// The node kind is decided after the initializer.
    fn parse_for(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump();
        self.expect(LParen, "'('");

        let init = self.pos;
        if self.currently_is(KwVar) {
            self.parse_value_decl();
        } else {
            self.parse_expr();
        }

        if self.currently_is(KwIn) {
            let assigned = self.has_assignment(init);
            self.start_node_at(checkpoint, ForRangeStmt);
            if assigned {
                self.error_msg(DiagnosticKind::UnexpectedToken, "unexpected token 'in'");
            }
            self.bump();
            self.parse_expr();
        } else {
            self.start_node_at(checkpoint, ForStmt);
            self.expect(Semicolon, "';'");
            self.parse_expr();
            self.expect(Semicolon, "';'");
            self.parse_expr();
        }
        self.expect(RParen, "')'");
        self.parse_block();
        self.finish_node();
    }

    /// Expression statement; `p.call(..) { ... }` becomes a `CallStmt`.
    fn parse_simple_stmt(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_expr();
        if self.currently_is(LBrace) && self.ends_with_call_operation() {
            self.start_node_at(checkpoint, CallStmt);
            self.parse_block();
            self.finish_node();
        }
    }

    /// Whether the tokens consumed so far end in `.call(..)`.
    fn ends_with_call_operation(&self) -> bool {
        let mut consumed = self.tokens[..self.pos]
            .iter()
            .rev()
            .filter(|t| !t.kind.is_trivia());
        if consumed.next().map(|t| t.kind) != Some(RParen) {
            return false;
        }
        let mut depth = 1;
        for token in consumed.by_ref() {
            match token.kind {
                RParen => depth += 1,
                LParen => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                break;
            }
        }
        match (consumed.next(), consumed.next()) {
            (Some(name), Some(dot)) => {
                depth == 0
                    && name.kind == Identifier
                    && name.text(self.source) == "call"
                    && dot.kind == Dot
            }
            _ => false,
        }
    }

    /// Whether the tokens from index `from` up to the cursor bind a value
    /// with `:=` outside any brackets.
    fn has_assignment(&self, from: usize) -> bool {
        let mut depth = 0i32;
        for token in &self.tokens[from..self.pos] {
            match token.kind {
                LParen | LBracket | LBrace => depth += 1,
                RParen | RBracket | RBrace => depth -= 1,
                Assign if depth == 0 => return true,
                _ => {}
            }
        }
        false
    }
}
