//! Type declarations and type specs.

use t3xf::Opcode;
use ttcn3_syntax::{Kind, Node};

use crate::compiler::{Codegen, has, operands, text};

impl<'t> Codegen<'t> {
    /// `[with] struct NAME TYPE{,W}`
    pub(crate) fn struct_type_decl(&mut self, n: Node<'t>) {
        self.scopes.push();
        let opcode = self.type_attributes(n);
        if let Some(pars) = n.child_by_kind(Kind::TypeFormalPars) {
            self.unsupported(pars, "type parameters");
        }
        self.struct_body(n);

        let name = n.child_by_kind(Kind::Name);
        self.name(text(name));
        let addr = self.op(opcode);
        self.scopes.pop();
        self.define(name, addr);
    }

    /// `[with] field-type NAME TYPE{,W}`
    pub(crate) fn sub_type_decl(&mut self, n: Node<'t>) {
        self.scopes.push();
        let opcode = self.type_attributes(n);
        let field = n.child_by_kind(Kind::Field);
        if let Some(field) = field {
            self.node(field);
        }

        let name = field.and_then(|f| f.child_by_kind(Kind::Name));
        self.name(text(name));
        let addr = self.op(opcode);
        self.scopes.pop();
        self.define(name, addr);
    }

    fn type_attributes(&mut self, n: Node<'t>) -> Opcode {
        match n.child_by_kind(Kind::WithSpec) {
            Some(with) => {
                self.node(with);
                Opcode::TYPEW
            }
            None => Opcode::TYPE,
        }
    }

    /// The type of a field with its constraints, then its array dimensions.
    pub(crate) fn field(&mut self, n: Node<'t>) {
        if let Some(pars) = n.child_by_kind(Kind::TypeFormalPars) {
            self.unsupported(pars, "type parameters");
        }
        match type_spec(n) {
            Some(ty) => {
                let constraint = n.child_by_kind(Kind::ParenExpr);
                let length = n.child_by_kind(Kind::LengthExpr);
                self.nested_type(ty, constraint, length);
            }
            None => self.unsupported(n, "field without type"),
        }
        self.array_defs(n);
    }

    pub(crate) fn struct_spec(&mut self, n: Node<'t>) {
        self.scopes.push();
        self.struct_body(n);
        self.scopes.pop();
    }

    /// `SCAN (field NAME FIELD|FIELDO|IFIELD)* BLOCK` or `SKIP`, then
    /// `RECORD`, `SET` or `UNION`.
    fn struct_body(&mut self, n: Node<'t>) {
        let kind = n
            .children()
            .map(|c| c.kind())
            .find(|k| matches!(k, Kind::KwRecord | Kind::KwSet | Kind::KwUnion));
        let fields: Vec<_> = n.children().filter(|c| c.kind() == Kind::Field).collect();

        if fields.is_empty() {
            self.op(Opcode::SKIP);
        } else {
            self.op(Opcode::SCAN);
            for field in fields {
                self.node(field);
                let name = text(field.child_by_kind(Kind::Name));
                self.name(name);
                if has(field, Kind::KwOptional) {
                    self.op(Opcode::FIELDO);
                } else if kind == Some(Kind::KwUnion) {
                    let index = self.field_index(name);
                    self.op_with(Opcode::IFIELD, index);
                } else {
                    self.op(Opcode::FIELD);
                }
            }
            self.op(Opcode::BLOCK);
        }

        match kind {
            Some(Kind::KwRecord) => self.op(Opcode::RECORD),
            Some(Kind::KwSet) => self.op(Opcode::SET),
            _ => self.op(Opcode::UNION),
        };
    }

    /// Lowers a type with value and length constraints.
    ///
    /// For `record of` and `set of` the constraints apply to the element
    /// type; the list's own length follows as a separate subtype.
    pub(crate) fn nested_type(
        &mut self,
        ty: Node<'t>,
        constraint: Option<Node<'t>>,
        length: Option<Node<'t>>,
    ) {
        if ty.kind() == Kind::ListSpec {
            match type_spec(ty) {
                Some(element) => self.nested_type(element, constraint, length),
                None => self.unsupported(ty, "list without element type"),
            }
            if has(ty, Kind::KwSet) {
                self.op(Opcode::SETOF);
            } else {
                self.op(Opcode::RECORDOF);
            }
            if let Some(list_length) = ty.child_by_kind(Kind::LengthExpr) {
                self.op(Opcode::ANY);
                self.length(list_length);
                self.op(Opcode::SUBTYPE);
            }
            return;
        }

        self.node(ty);
        if constraint.is_none() && length.is_none() {
            return;
        }

        match constraint.map(|c| operands(c).collect::<Vec<_>>()) {
            None => {
                self.op(Opcode::ANY);
            }
            Some(values) if values.len() == 1 => self.node(values[0]),
            Some(values) => {
                self.op(Opcode::MARK);
                for value in values {
                    self.node(value);
                }
                self.op(Opcode::COLLECT);
            }
        }
        if let Some(length) = length {
            self.length(length);
        }
        self.op(Opcode::SUBTYPE);
    }

    /// `sizes LENGTH`
    fn length(&mut self, n: Node<'t>) {
        if let Some(sizes) = n.child_by_kind(Kind::ParenExpr) {
            self.children(sizes);
        }
        self.op(Opcode::LENGTH);
    }

    /// `SCAN size BLOCK ARRAY` per dimension, innermost first.
    pub(crate) fn array_defs(&mut self, n: Node<'t>) {
        let dims: Vec<_> = n.children().filter(|c| c.kind() == Kind::ArrayDef).collect();
        for dim in dims.into_iter().rev() {
            self.op(Opcode::SCAN);
            self.children(dim);
            self.op(Opcode::BLOCK);
            self.op(Opcode::ARRAY);
        }
    }
}

/// The type spec child of a field or list spec.
fn type_spec(n: Node<'_>) -> Option<Node<'_>> {
    n.children().find(|c| {
        matches!(
            c.kind(),
            Kind::RefSpec
                | Kind::StructSpec
                | Kind::ListSpec
                | Kind::MapSpec
                | Kind::EnumSpec
                | Kind::BehaviourSpec
        )
    })
}
