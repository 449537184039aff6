//! Expressions: binary operators by precedence climbing, unary prefixes,
//! postfix clauses and operands.

use crate::diagnostics::DiagnosticKind;
use crate::kind::Kind::{self, *};
use crate::kind::token_sets::{
    AFTER_DASH_LITERAL, EXPR_START, OPERAND_START, SEQ_RECOVERY, STMT_START, VALUE_KEYWORDS,
};
use crate::parser::Parser;

/// Binding power of an infix operator; higher binds tighter.
pub(crate) fn precedence(kind: Kind) -> Option<u8> {
    let prec = match kind {
        Assign => 1,
        Colon => 2,
        FatArrow => 3,
        DotDot => 4,
        Excl => 5,
        KwOr => 6,
        KwXor => 7,
        KwAnd => 8,
        KwNot => 9,
        EqEq | Ne => 10,
        Lt | Le | Gt | Ge => 11,
        Shr | Shl | Ror | Rol => 12,
        KwOr4b => 13,
        KwXor4b => 14,
        KwAnd4b => 15,
        KwNot4b => 16,
        Plus | Minus | Amp => 17,
        Star | Slash | KwRem | KwMod => 18,
        _ => return None,
    };
    Some(prec)
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }
        self.parse_binary(1);
        self.exit_recursion();
    }

    /// Left-associative: the right operand binds at least one level tighter.
    fn parse_binary(&mut self, min_prec: u8) {
        let checkpoint = self.checkpoint();
        self.parse_unary();
        while let Some(prec) = precedence(self.current()) {
            if prec < min_prec {
                break;
            }
            self.start_node_at(checkpoint, BinaryExpr);
            self.bump();
            self.parse_binary(prec + 1);
            self.finish_node();
        }
    }

    fn parse_unary(&mut self) {
        match self.current() {
            Minus if AFTER_DASH_LITERAL.contains(self.peek_nth(1)) => self.bump(),
            Plus | Minus | Excl | KwNot | KwNot4b => {
                if !self.enter_recursion() {
                    self.bail_out();
                    return;
                }
                self.start_node(UnaryExpr);
                self.bump();
                self.parse_unary();
                self.finish_node();
                self.exit_recursion();
            }
            ColonColon => {
                self.start_node(BinaryExpr);
                self.bump();
                self.parse_unary();
                self.finish_node();
            }
            _ => self.parse_postfix(),
        }
    }

    /// Trailing clauses, in this order: `length(..)`, `ifpresent`,
    /// `to`/`from`, `-> redirect`, `value`, `param(..)`, `alive`.
    fn parse_postfix(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary();

        if self.currently_is(KwLength) {
            self.start_node_at(checkpoint, LengthExpr);
            self.bump();
            self.parse_paren_expr();
            self.finish_node();
        }
        if self.currently_is(KwIfpresent) {
            self.start_node_at(checkpoint, UnaryExpr);
            self.bump();
            self.finish_node();
        }
        if self.currently_is(KwTo) || self.currently_is(KwFrom) {
            self.start_node_at(checkpoint, BinaryExpr);
            self.bump();
            self.parse_expr();
            self.finish_node();
        }
        if self.currently_is(Arrow) {
            self.start_node_at(checkpoint, RedirectExpr);
            self.parse_redirect();
            self.finish_node();
        }
        if self.currently_is(KwValue) {
            self.start_node_at(checkpoint, ValueExpr);
            self.bump();
            self.parse_expr();
            self.finish_node();
        }
        if self.currently_is(KwParam) {
            self.start_node_at(checkpoint, ParamExpr);
            self.bump();
            self.parse_paren_expr();
            self.finish_node();
        }
        if self.currently_is(KwAlive) {
            self.start_node_at(checkpoint, UnaryExpr);
            self.bump();
            self.finish_node();
        }
    }

    /// `-> [value ..] [param ..] [sender ..] [@index [value] ..] [timestamp ..]`
    fn parse_redirect(&mut self) {
        self.assert_current(Arrow);
        self.bump();
        if self.eat_token(KwValue) {
            self.parse_comma_list(Self::parse_expr);
        }
        if self.eat_token(KwParam) {
            self.parse_comma_list(Self::parse_expr);
        }
        if self.eat_token(KwSender) {
            self.parse_primary();
        }
        if self.currently_is(Modifier) && self.current_text() == "@index" {
            self.bump();
            self.eat_token(KwValue);
            self.parse_primary();
        }
        if self.eat_token(KwTimestamp) {
            self.parse_primary();
        }
    }

    /// Operand followed by selectors, indexes and calls.
    pub(crate) fn parse_primary(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_operand();
        loop {
            match self.current() {
                Dot => {
                    self.start_node_at(checkpoint, SelectorExpr);
                    self.bump();
                    self.parse_selector();
                    self.finish_node();
                }
                LBracket => {
                    self.start_node_at(checkpoint, IndexExpr);
                    self.parse_index();
                    self.finish_node();
                }
                LParen => {
                    self.start_node_at(checkpoint, CallExpr);
                    self.parse_paren_expr();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    /// Field or operation name after `.`. Keywords such as `alive` or
    /// `timeout`-style operations are accepted.
    fn parse_selector(&mut self) {
        let kind = self.current();
        if kind == Identifier || kind.is_keyword() {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
    }

    /// `[expr]` or `[-]`.
    fn parse_index(&mut self) {
        self.assert_current(LBracket);
        self.bump();
        if self.currently_is(Minus) && self.next_is(RBracket) {
            self.bump();
        } else {
            self.parse_expr();
        }
        self.expect(RBracket, "']'");
    }

    /// `( expr, ... )`
    pub(crate) fn parse_paren_expr(&mut self) {
        self.start_node(ParenExpr);
        self.expect(LParen, "'('");
        self.parse_expr_list(RParen);
        self.expect(RParen, "')'");
        self.finish_node();
    }

    fn parse_operand(&mut self) {
        let kind = self.current();
        match kind {
            KwAny | KwAll => match self.peek_nth(1) {
                KwComponent | KwPort | KwTimer => {
                    self.start_node(Ident);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                KwFrom => {
                    self.start_node(FromExpr);
                    self.bump();
                    self.bump();
                    self.parse_primary();
                    self.finish_node();
                }
                _ => self.bump(),
            },
            KwUniversal => {
                self.start_node(Ident);
                self.bump();
                self.expect(KwCharstring, "'charstring'");
                self.finish_node();
            }
            KwAddress | KwCharstring | KwMap | KwMtc | KwSystem | KwTestcase | KwTimer
            | KwUnmap => self.bump(),
            Identifier => self.parse_ref(),
            Integer | Float | String | Bitstring | Question | Star | Malformed | Unterminated => {
                self.bump()
            }
            _ if VALUE_KEYWORDS.contains(kind) => self.bump(),
            LParen => self.parse_paren_expr(),
            LBracket => {
                self.start_node(IndexExpr);
                self.parse_index();
                self.finish_node();
            }
            LBrace => {
                self.start_node(CompositeLiteral);
                self.bump();
                self.parse_expr_list(RBrace);
                self.expect(RBrace, "'}'");
                self.finish_node();
            }
            KwModifies => {
                self.start_node(ModifiesExpr);
                self.bump();
                self.parse_primary();
                self.expect(Assign, "':='");
                self.parse_expr();
                self.finish_node();
            }
            KwRegexp => {
                self.start_node(RegexpExpr);
                self.bump();
                self.eat_token(Modifier);
                self.parse_paren_expr();
                self.finish_node();
            }
            KwPattern => {
                self.start_node(PatternExpr);
                self.bump();
                self.eat_token(Modifier);
                self.parse_expr();
                self.finish_node();
            }
            KwDecmatch => {
                self.start_node(DecmatchExpr);
                self.bump();
                if self.currently_is(LParen) {
                    self.parse_paren_expr();
                }
                if self.currently_is_one_of(EXPR_START) {
                    self.parse_expr();
                }
                self.finish_node();
            }
            Modifier if self.current_text() == "@decoded" => {
                self.start_node(DecodedExpr);
                self.bump();
                if self.currently_is(LParen) {
                    self.parse_paren_expr();
                }
                self.parse_primary();
                self.finish_node();
            }
            _ if kind == Comma || kind == Eof || STMT_START.contains(kind) || SEQ_RECOVERY.contains(kind) => {
                self.error(DiagnosticKind::ExpectedExpression);
            }
            _ => self.error_and_bump(DiagnosticKind::ExpectedExpression),
        }
    }

    /// Identifier, with type arguments when `<...>` parses as such.
    fn parse_ref(&mut self) {
        if self.next_is(Lt) && self.type_args_ahead() {
            self.start_node(ParametrizedIdent);
            self.bump();
            self.parse_type_args();
            self.finish_node();
        } else {
            self.bump();
        }
    }

    /// `< type, ... >`
    fn parse_type_args(&mut self) {
        self.start_node(TypeArgs);
        self.assert_current(Lt);
        self.bump();
        self.parse_comma_list(Self::parse_primary);
        self.expect(Gt, "'>'");
        self.finish_node();
    }

    /// Decides whether `ident <` opens type arguments or is a comparison.
    ///
    /// Accepted shape: type references (`T`, `a.b`, `T[-]`, `address`,
    /// `charstring`, `universal charstring`) separated by commas, closed by
    /// `>` that is not followed by an operand.
    fn type_args_ahead(&self) -> bool {
        let mut kinds = self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .skip(2);
        loop {
            match kinds.next() {
                Some(Identifier | KwAddress | KwCharstring) => {}
                Some(KwUniversal) if kinds.next() == Some(KwCharstring) => {}
                _ => return false,
            }
            loop {
                match kinds.next() {
                    Some(Dot) => {
                        if kinds.next() != Some(Identifier) {
                            return false;
                        }
                    }
                    Some(LBracket) => {
                        if kinds.next() != Some(Minus) || kinds.next() != Some(RBracket) {
                            return false;
                        }
                    }
                    Some(Comma) => break,
                    Some(Gt) => return !OPERAND_START.contains(kinds.next().unwrap_or(Eof)),
                    _ => return false,
                }
            }
        }
    }
}
