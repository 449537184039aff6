//! Expressions and literals, in postfix order.

use t3xf::{Argument, BinaryString, Opcode};
use ttcn3_syntax::{DiagnosticKind, Kind, Node};

use crate::compiler::{Codegen, elements, operands};

impl<'t> Codegen<'t> {
    /// `X Y op`; assignments are `Y X ASSIGN`.
    pub(crate) fn binary_expr(&mut self, n: Node<'t>) {
        let parts: Vec<_> = elements(n).collect();
        let [x, op, y] = parts[..] else {
            self.unsupported(n, "operator form");
            return;
        };

        if op.kind() == Kind::Assign {
            self.node(y);
            self.node(x);
            self.op(Opcode::ASSIGN);
            return;
        }

        let Some(opcode) = binary_opcode(op.kind()) else {
            self.unsupported(op, &format!("operator `{}`", op.text()));
            return;
        };
        self.node(x);
        self.node(y);
        self.op(opcode);
    }

    pub(crate) fn unary_expr(&mut self, n: Node<'t>) {
        let parts: Vec<_> = elements(n).collect();
        let [first, second] = parts[..] else {
            self.unsupported(n, "operator form");
            return;
        };

        match (first.kind(), second.kind()) {
            (_, Kind::KwIfpresent) => {
                self.node(first);
                self.op(Opcode::IFPRESENT);
            }
            (_, Kind::KwAlive) => self.unsupported(second, "operator `alive`"),
            (Kind::Minus, Kind::KwInfinity) => {
                self.op(Opcode::INFINITYN);
            }
            (Kind::Minus, _) => {
                self.node(second);
                self.op(Opcode::NEG);
            }
            (Kind::Plus, _) => self.node(second),
            (Kind::KwNot, _) => {
                self.node(second);
                self.op(Opcode::NOT);
            }
            _ => self.unsupported(first, &format!("operator `{}`", first.text())),
        }
    }

    /// Arguments left to right, then the callee.
    pub(crate) fn call_expr(&mut self, n: Node<'t>) {
        let callee = elements(n).next();
        if let Some(args) = n.child_by_kind(Kind::ParenExpr) {
            self.children(args);
        }
        if let Some(callee) = callee {
            self.node(callee);
        }
    }

    /// `MARK elements VLIST`
    pub(crate) fn composite_literal(&mut self, n: Node<'t>) {
        self.op(Opcode::MARK);
        for elem in operands(n) {
            self.node(elem);
        }
        self.op(Opcode::VLIST);
    }

    pub(crate) fn literal(&mut self, n: Node<'t>) {
        let text = n.text();
        let opcode = match n.kind() {
            Kind::Integer => {
                match text.parse::<i32>() {
                    Ok(value) => self.emit(Opcode::NATLONG, Argument::Int(i64::from(value))),
                    Err(_) => self.emit(Opcode::ISTR, Argument::from(text)),
                };
                return;
            }
            Kind::Float => {
                match text.parse::<f64>() {
                    Ok(value) => {
                        self.emit(Opcode::IEEE754DP, Argument::Float(value));
                    }
                    Err(_) => self.invalid(n, "float"),
                }
                return;
            }
            Kind::String => {
                self.emit(Opcode::UTF8, Argument::Str(unquote(text)));
                return;
            }
            Kind::Bitstring => {
                match binary_string(text) {
                    Some((opcode, value)) => {
                        self.emit(opcode, Argument::Binary(value));
                    }
                    None => self.invalid(n, "binary string"),
                }
                return;
            }
            Kind::KwNotANumber => {
                self.emit(Opcode::IEEE754DP, Argument::Float(f64::NAN));
                return;
            }
            Kind::KwTrue => Opcode::TRUE,
            Kind::KwFalse => Opcode::FALSE,
            Kind::KwNull => Opcode::NULL,
            Kind::Question => Opcode::ANY,
            Kind::Star => Opcode::ANYN,
            Kind::KwOmit => Opcode::OMIT,
            Kind::KwError => Opcode::ERROR,
            Kind::KwFail => Opcode::FAIL,
            Kind::KwInconc => Opcode::INCONC,
            Kind::KwPass => Opcode::PASS,
            Kind::KwNone => Opcode::NONE,
            Kind::KwInfinity => Opcode::INFINITYP,
            kind => {
                self.unsupported(n, &format!("{kind:?}"));
                return;
            }
        };
        self.op(opcode);
    }

    fn invalid(&mut self, n: Node<'t>, what: &str) {
        let message = format!("invalid {what} {}", n.text());
        self.report(DiagnosticKind::InvalidArgument, n.range(), message);
    }
}

fn binary_opcode(kind: Kind) -> Option<Opcode> {
    let opcode = match kind {
        Kind::Plus => Opcode::ADD,
        Kind::Minus => Opcode::SUB,
        Kind::Star => Opcode::MUL,
        Kind::Slash => Opcode::DIV,
        Kind::KwMod => Opcode::MOD,
        Kind::KwRem => Opcode::REM,
        Kind::EqEq => Opcode::EQ,
        Kind::Ne => Opcode::NE,
        Kind::Lt => Opcode::LT,
        Kind::Gt => Opcode::GT,
        Kind::Le => Opcode::LE,
        Kind::Ge => Opcode::GE,
        Kind::KwAnd => Opcode::AND,
        Kind::KwOr => Opcode::OR,
        Kind::KwXor => Opcode::XOR,
        Kind::Amp => Opcode::CAT,
        Kind::Shl => Opcode::SHL,
        Kind::Shr => Opcode::SHR,
        Kind::Rol => Opcode::ROL,
        Kind::Ror => Opcode::ROR,
        Kind::DotDot => Opcode::RANGE,
        _ => return None,
    };
    Some(opcode)
}

/// Strips the quotes of a string literal and collapses doubled quotes.
fn unquote(text: &str) -> String {
    let inner = text.strip_prefix('"').unwrap_or(text);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}

/// `'0101'B`, `'a0f'H` or `'00ff'O`.
fn binary_string(text: &str) -> Option<(Opcode, BinaryString)> {
    let rest = text.strip_prefix('\'')?;
    let (digits, suffix) = rest.rsplit_once('\'')?;
    let digits: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
    match suffix {
        "B" | "b" => Some((Opcode::BITS, BinaryString::from_bits(&digits)?)),
        "H" | "h" => Some((Opcode::NIBBLES, BinaryString::from_hex(&digits)?)),
        "O" | "o" => Some((Opcode::OCTETS, BinaryString::from_octets(&digits)?)),
        _ => None,
    }
}
