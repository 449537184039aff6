//! Blocks and control flow.

use t3xf::Opcode;
use ttcn3_syntax::{Kind, Node};

use crate::compiler::{Codegen, after, elements, operands};

impl<'t> Codegen<'t> {
    /// `SKIP` when empty, otherwise `SCAN stmts BLOCK` in a new scope.
    pub(crate) fn block(&mut self, n: Node<'t>) {
        let stmts: Vec<_> = operands(n).collect();
        if stmts.is_empty() {
            self.op(Opcode::SKIP);
            return;
        }

        self.scopes.push();
        self.op(Opcode::SCAN);
        for stmt in stmts {
            self.node(stmt);
        }
        self.op(Opcode::BLOCK);
        self.scopes.pop();
    }

    pub(crate) fn return_stmt(&mut self, n: Node<'t>) {
        if let Some(result) = after(n, Kind::KwReturn) {
            self.node(result);
        }
        self.op(Opcode::RETURN);
    }

    /// `cond then [else] IF|IFELSE`
    pub(crate) fn if_stmt(&mut self, n: Node<'t>) {
        if let Some(cond) = n.child_by_kind(Kind::ParenExpr) {
            self.node(cond);
        }
        if let Some(then) = n.child_by_kind(Kind::Block) {
            self.node(then);
        }
        match after(n, Kind::KwElse) {
            Some(otherwise) => {
                self.node(otherwise);
                self.op(Opcode::IFELSE);
            }
            None => {
                self.op(Opcode::IF);
            }
        }
    }

    /// `SCAN cond BLOCK body WHILE`
    pub(crate) fn while_stmt(&mut self, n: Node<'t>) {
        self.condition(n.child_by_kind(Kind::ParenExpr));
        if let Some(body) = n.child_by_kind(Kind::Block) {
            self.node(body);
        }
        self.op(Opcode::WHILE);
    }

    /// `body SCAN cond BLOCK DOWHILE`
    pub(crate) fn do_while_stmt(&mut self, n: Node<'t>) {
        if let Some(body) = n.child_by_kind(Kind::Block) {
            self.node(body);
        }
        self.condition(n.child_by_kind(Kind::ParenExpr));
        self.op(Opcode::DOWHILE);
    }

    fn condition(&mut self, cond: Option<Node<'t>>) {
        self.op(Opcode::SCAN);
        if let Some(cond) = cond {
            self.node(cond);
        }
        self.op(Opcode::BLOCK);
    }

    /// `SCAN init BLOCK SCAN cond BLOCK SCAN post BLOCK body FOR`, with the
    /// loop variable scoped to the statement.
    pub(crate) fn for_stmt(&mut self, n: Node<'t>) {
        let mut clauses: [Vec<Node<'t>>; 3] = Default::default();
        let mut clause = 0;
        for child in elements(n)
            .skip_while(|c| c.kind() != Kind::LParen)
            .skip(1)
            .take_while(|c| c.kind() != Kind::RParen)
        {
            if child.kind() == Kind::Semicolon {
                clause += 1;
            } else if let Some(nodes) = clauses.get_mut(clause) {
                nodes.push(child);
            }
        }

        self.scopes.push();
        for nodes in clauses {
            self.op(Opcode::SCAN);
            for node in nodes {
                self.node(node);
            }
            self.op(Opcode::BLOCK);
        }
        if let Some(body) = n.child_by_kind(Kind::Block) {
            self.node(body);
        }
        self.op(Opcode::FOR);
        self.scopes.pop();
    }

    pub(crate) fn branch_stmt(&mut self, n: Node<'t>) {
        let Some(keyword) = elements(n).next() else {
            return;
        };
        match keyword.kind() {
            Kind::KwBreak => self.op(Opcode::BREAK),
            Kind::KwContinue => self.op(Opcode::CONTINUE),
            Kind::KwRepeat => self.op(Opcode::REPEAT),
            _ => {
                self.unsupported(n, &format!("`{}` statement", keyword.text()));
                return;
            }
        };
    }
}
