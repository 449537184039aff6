//! Compiler configuration, code generation state and node dispatch.

use indexmap::IndexMap;
use rowan::TextRange;
use t3xf::{Argument, EncodeErrorKind, Encoder, Opcode, Reference};
use ttcn3_syntax::{DiagnosticKind, Diagnostics, Kind, Node, Tree};

use crate::scope::{Binding, Defined, Scopes};

/// Compiles syntax trees to T3XF bytecode.
///
/// A `Compiler` only holds settings; every call to [`Compiler::compile`]
/// starts from a fresh scope chain and encoder.
#[derive(Debug, Clone)]
pub struct Compiler {
    file_name: Option<String>,
    line_info: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            file_name: None,
            line_info: true,
        }
    }

    /// Name recorded in the `SOURCE` envelope around the output. Defaults to
    /// the tree name; an empty name leaves the output unwrapped.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Emit a `LINE` instruction whenever the source line changes.
    pub fn with_line_info(mut self, enabled: bool) -> Self {
        self.line_info = enabled;
        self
    }

    /// Compiles `tree` and assembles the buffer.
    ///
    /// The buffer is returned even when diagnostics contain errors; it is
    /// only safe to execute if they don't.
    pub fn compile(&self, tree: &Tree) -> (Vec<u8>, Diagnostics) {
        let file_name = self.file_name.as_deref().unwrap_or(tree.name());
        let mut codegen = Codegen::new(tree, self.line_info);
        codegen.root(tree.root(), file_name);
        let instructions = codegen.encoder.len();
        let (bytes, diagnostics) = codegen.finish();

        tracing::debug!(
            file = tree.name(),
            instructions,
            bytes = bytes.len(),
            diagnostics = diagnostics.len(),
            "compiled"
        );
        (bytes, diagnostics)
    }
}

/// Placeholder reference emitted for a name that was not compiled yet.
#[derive(Debug)]
struct Placeholder {
    name: String,
    range: Option<TextRange>,
    /// The name was not found at all; already reported.
    undefined: bool,
}

/// State of one compilation.
pub(crate) struct Codegen<'t> {
    tree: &'t Tree,
    encoder: Encoder,
    pub(crate) scopes: Scopes,
    diagnostics: Diagnostics,
    line_info: bool,
    last_line: u32,
    /// Range of the node being compiled, used to locate encoder errors.
    range: Option<TextRange>,
    /// Union alternative names to their index, shared by the whole file.
    fields: IndexMap<String, usize>,
    /// Placeholders by byte offset.
    placeholders: IndexMap<u32, Placeholder>,
}

impl<'t> Codegen<'t> {
    pub(crate) fn new(tree: &'t Tree, line_info: bool) -> Self {
        Self {
            tree,
            encoder: Encoder::new(),
            scopes: Scopes::new(),
            diagnostics: Diagnostics::new(),
            line_info,
            last_line: 0,
            range: None,
            fields: IndexMap::new(),
            placeholders: IndexMap::new(),
        }
    }

    fn root(&mut self, root: Node<'t>, file_name: &str) {
        self.mark_line(root);
        let envelope = !file_name.is_empty();
        if envelope {
            self.op(Opcode::SCAN);
        }
        for child in elements(root) {
            if !matches!(child.kind(), Kind::Semicolon | Kind::Comma) {
                self.node(child);
            }
        }
        if envelope {
            self.op(Opcode::BLOCK);
            self.name(file_name);
            self.op(Opcode::SOURCE);
        }
    }

    /// Assembles the buffer and reports every reference left unbound.
    pub(crate) fn finish(mut self) -> (Vec<u8>, Diagnostics) {
        let (bytes, errors) = self.encoder.assemble();
        for err in errors {
            let placeholder = u32::try_from(err.offset)
                .ok()
                .and_then(|offset| self.placeholders.get(&offset));
            match (placeholder, &err.kind) {
                (Some(p), EncodeErrorKind::UnboundReference) if p.undefined => {}
                (Some(p), EncodeErrorKind::UnboundReference) => {
                    let message = format!("`{}` is declared but was never compiled", p.name);
                    match p.range {
                        Some(range) => self
                            .diagnostics
                            .report(DiagnosticKind::UnknownReference, range)
                            .message(message)
                            .emit(),
                        None => self
                            .diagnostics
                            .report_unlocated(DiagnosticKind::UnknownReference)
                            .message(message)
                            .emit(),
                    }
                }
                _ => self
                    .diagnostics
                    .report_unlocated(DiagnosticKind::UnknownReference)
                    .message(err.to_string())
                    .emit(),
            }
        }
        (bytes, self.diagnostics)
    }

    /// Compiles one node, dispatching on its kind.
    pub(crate) fn node(&mut self, n: Node<'t>) {
        self.mark_line(n);
        let range = n.range().or(self.range);
        let saved = std::mem::replace(&mut self.range, range);

        match n.kind() {
            Kind::Module => self.module(n),
            Kind::ModuleDef => self.module_def(n),
            Kind::ControlPart => self.control_part(n),
            Kind::FuncDecl => self.func_decl(n),
            Kind::ValueDecl => self.value_decl(n),
            Kind::ModuleParGroup => self.module_par_group(n),
            Kind::WithSpec => self.with_spec(n),
            Kind::WithStmt => self.with_stmt(n),
            Kind::FormalPars => self.formal_pars(n),
            Kind::FormalPar => self.formal_par(n),
            Kind::RestrictionSpec => self.restriction(n),
            Kind::ReturnSpec => self.return_spec(n),

            Kind::StructTypeDecl => self.struct_type_decl(n),
            Kind::SubTypeDecl => self.sub_type_decl(n),
            Kind::Field => self.field(n),
            Kind::StructSpec => self.struct_spec(n),
            Kind::ListSpec => self.nested_type(n, None, None),
            Kind::RefSpec => self.children(n),

            Kind::Block => self.block(n),
            Kind::ReturnStmt => self.return_stmt(n),
            Kind::IfStmt => self.if_stmt(n),
            Kind::WhileStmt => self.while_stmt(n),
            Kind::DoWhileStmt => self.do_while_stmt(n),
            Kind::ForStmt => self.for_stmt(n),
            Kind::BranchStmt => self.branch_stmt(n),

            Kind::BinaryExpr => self.binary_expr(n),
            Kind::UnaryExpr => self.unary_expr(n),
            Kind::ParenExpr => self.children(n),
            Kind::CallExpr => self.call_expr(n),
            Kind::CompositeLiteral => self.composite_literal(n),
            Kind::Identifier | Kind::KwCharstring | Kind::KwTimer => self.ident(n),
            kind if kind.is_literal() || matches!(kind, Kind::Question | Kind::Star) => {
                self.literal(n)
            }

            // Already reported by the parser.
            kind if kind.is_error() => {}

            kind => self.unsupported(n, &format!("{kind:?}")),
        }

        self.range = saved;
    }

    /// Compiles the expression children of `n`, skipping punctuation.
    pub(crate) fn children(&mut self, n: Node<'t>) {
        for child in operands(n) {
            self.node(child);
        }
    }

    fn mark_line(&mut self, n: Node<'t>) {
        if !self.line_info {
            return;
        }
        let line = self.tree.position(n.pos()).line;
        if line != 0 && line != self.last_line {
            self.last_line = line;
            self.emit(Opcode::LINE, Argument::Int(i64::from(line)));
        }
    }

    /// Encodes one instruction and returns its index, or `None` when the
    /// encoder rejected it. Encoder errors are reported at the node being
    /// compiled.
    pub(crate) fn emit(&mut self, opcode: Opcode, arg: Argument) -> Option<usize> {
        match self.encoder.encode(opcode, arg) {
            Ok(index) => Some(index),
            Err(err) => {
                self.report(DiagnosticKind::InvalidArgument, self.range, err.to_string());
                None
            }
        }
    }

    pub(crate) fn op(&mut self, opcode: Opcode) -> Option<usize> {
        self.emit(opcode, Argument::None)
    }

    pub(crate) fn name(&mut self, name: &str) -> Option<usize> {
        self.emit(Opcode::NAME, Argument::from(name))
    }

    /// Instruction with a small immediate, such as a field index.
    pub(crate) fn op_with(&mut self, opcode: Opcode, value: usize) -> Option<usize> {
        let Ok(value) = i64::try_from(value) else {
            self.report(
                DiagnosticKind::InvalidArgument,
                self.range,
                format!("{opcode}: argument too large: {value}"),
            );
            return None;
        };
        self.emit(opcode, Argument::Int(value))
    }

    pub(crate) fn reference(&mut self, target: usize) -> Option<usize> {
        let target = self.target(target)?;
        self.emit(Opcode::REF, Argument::Reference(target))
    }

    /// Reference to the instruction with index `target`.
    fn target(&mut self, target: usize) -> Option<Reference> {
        match u32::try_from(target) {
            Ok(index) => Some(Reference(index)),
            Err(_) => {
                self.report(
                    DiagnosticKind::InvalidArgument,
                    self.range,
                    format!("reference target out of range: {target}"),
                );
                None
            }
        }
    }

    /// Emits the use of a name.
    pub(crate) fn ident(&mut self, n: Node<'t>) {
        let name = n.text();
        match self.scopes.lookup(name) {
            Some(Binding::Builtin(opcode)) => {
                self.op(opcode);
            }
            Some(Binding::Resolved(opcode, target)) => {
                tracing::trace!(name = %name, target = target.0, "resolved");
                self.emit(opcode, Argument::Reference(target));
            }
            Some(Binding::Pending) => {
                if let Some(site) = self.placeholder(name, n.range(), false) {
                    tracing::trace!(name = %name, site, "forward reference");
                    self.scopes.add_site(name, site);
                }
            }
            None => {
                self.report(DiagnosticKind::UndefinedIdentifier, n.range(), name);
                self.placeholder(name, n.range(), true);
            }
        }
    }

    fn placeholder(&mut self, name: &str, range: Option<TextRange>, undefined: bool) -> Option<usize> {
        let site = match self.encoder.encode_placeholder(Opcode::REF) {
            Ok(site) => site,
            Err(err) => {
                self.report(DiagnosticKind::InvalidArgument, range, err.to_string());
                return None;
            }
        };
        let offset = self.encoder.offset_of(site).unwrap_or_default();
        self.placeholders.insert(
            offset,
            Placeholder {
                name: name.to_string(),
                range,
                undefined,
            },
        );
        Some(site)
    }

    /// Resolves `name` in the innermost scope to a reference to `target` and
    /// binds the placeholders that were waiting for it.
    ///
    /// A missing target means its instruction was rejected; the name stays
    /// undefined.
    pub(crate) fn define(&mut self, name: Option<Node<'t>>, target: Option<usize>) {
        let Some(name) = name else {
            return;
        };
        self.define_as(name.text(), name.range(), target);
    }

    pub(crate) fn define_as(
        &mut self,
        name: &str,
        range: Option<TextRange>,
        target: Option<usize>,
    ) {
        let Some(target) = target else {
            return;
        };
        let Some(reference) = self.target(target) else {
            return;
        };
        match self.scopes.define(name, Opcode::REF, reference, range) {
            Defined::Fresh => {
                tracing::trace!(name = %name, target, "defined");
            }
            Defined::Forward(sites) => {
                for site in sites {
                    tracing::trace!(name = %name, site, target, "binding forward reference");
                    if let Err(err) = self.encoder.bind(site, reference) {
                        self.report(DiagnosticKind::InvalidArgument, range, err.to_string());
                    }
                }
            }
            Defined::Duplicate(first) => {
                let Some(range) = range else {
                    return;
                };
                let mut report = self
                    .diagnostics
                    .report(DiagnosticKind::Redefinition, range)
                    .message(name);
                if let Some(first) = first {
                    report = report.related_to("first defined here", first);
                }
                report.emit();
            }
        }
    }

    /// Index of a union alternative name, assigned on first use.
    pub(crate) fn field_index(&mut self, name: &str) -> usize {
        let next = self.fields.len();
        *self.fields.entry(name.to_string()).or_insert(next)
    }

    pub(crate) fn unsupported(&mut self, n: Node<'t>, what: &str) {
        self.report(DiagnosticKind::UnsupportedConstruct, n.range(), what);
    }

    pub(crate) fn report(&mut self, kind: DiagnosticKind, range: Option<TextRange>, msg: impl Into<String>) {
        match range {
            Some(range) => self.diagnostics.report(kind, range).message(msg).emit(),
            None => self.diagnostics.report_unlocated(kind).message(msg).emit(),
        }
    }
}

/// Children that carry meaning: everything except trivia.
pub(crate) fn elements<'t>(n: Node<'t>) -> impl Iterator<Item = Node<'t>> + 't {
    n.children().filter(|child| !child.kind().is_trivia())
}

/// Operand children of a list-like node, without brackets and separators.
pub(crate) fn operands<'t>(n: Node<'t>) -> impl Iterator<Item = Node<'t>> + 't {
    elements(n).filter(|child| {
        !matches!(
            child.kind(),
            Kind::LParen
                | Kind::RParen
                | Kind::LBrace
                | Kind::RBrace
                | Kind::LBracket
                | Kind::RBracket
                | Kind::Comma
                | Kind::Semicolon
        )
    })
}

/// First element after the token of kind `kind`.
pub(crate) fn after<'t>(n: Node<'t>, kind: Kind) -> Option<Node<'t>> {
    elements(n).skip_while(|child| child.kind() != kind).nth(1)
}

/// Text of an optional name, empty when the parser could not find one.
pub(crate) fn text<'t>(name: Option<Node<'t>>) -> &'t str {
    name.map_or("", |name| name.text())
}

/// Whether `n` has a direct child of kind `kind`.
pub(crate) fn has(n: Node<'_>, kind: Kind) -> bool {
    n.child_by_kind(kind).is_some()
}
