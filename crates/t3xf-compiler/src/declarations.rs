//! Modules, behaviours, value declarations, attributes and parameters.

use t3xf::Opcode;
use ttcn3_syntax::{DiagnosticKind, Kind, Node};

use crate::compiler::{Codegen, after, elements, has, text};

/// How the declarators of a `ValueDecl` are lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Var,
    Const,
    ModulePar,
}

impl<'t> Codegen<'t> {
    /// `[with] SCAN defs BLOCK NAME MODULE`, then `M` is defined in the
    /// enclosing scope.
    pub(crate) fn module(&mut self, n: Node<'t>) {
        self.scopes.push();
        self.declare_definitions(n);

        let mut opcode = Opcode::MODULE;
        if let Some(with) = n.child_by_kind(Kind::WithSpec) {
            opcode = Opcode::MODULEW;
            self.node(with);
        }
        self.op(Opcode::SCAN);
        for def in n.children().filter(|c| c.kind() == Kind::ModuleDef) {
            self.node(def);
        }
        self.op(Opcode::BLOCK);

        let name = n.child_by_kind(Kind::Name);
        self.name(text(name));
        let addr = self.op(opcode);
        self.scopes.pop();
        self.define(name, addr);
    }

    /// Registers every definition name of a module or group as unresolved,
    /// so definitions can be used before they are compiled.
    fn declare_definitions(&mut self, n: Node<'t>) {
        for def in n.children().filter(|c| c.kind() == Kind::ModuleDef) {
            let Some(decl) = definition(def) else {
                continue;
            };
            match decl.kind() {
                Kind::GroupDecl => self.declare_definitions(decl),
                Kind::ValueDecl => self.declare_declarators(decl),
                Kind::ModuleParGroup => {
                    for value in decl.children().filter(|c| c.kind() == Kind::ValueDecl) {
                        self.declare_declarators(value);
                    }
                }
                Kind::SubTypeDecl => {
                    if let Some(field) = decl.child_by_kind(Kind::Field) {
                        self.declare(field.child_by_kind(Kind::Name));
                    }
                }
                Kind::ImportDecl | Kind::FriendDecl | Kind::ControlPart => {}
                _ => self.declare(decl.child_by_kind(Kind::Name)),
            }
        }
    }

    fn declare_declarators(&mut self, decl: Node<'t>) {
        for declarator in decl.children().filter(|c| c.kind() == Kind::Declarator) {
            self.declare(declarator.child_by_kind(Kind::Name));
        }
    }

    fn declare(&mut self, name: Option<Node<'t>>) {
        let Some(name) = name else {
            return;
        };
        if self.scopes.declare(name.text(), name.range()) {
            tracing::trace!(name = %name.text(), "declared");
        }
    }

    pub(crate) fn module_def(&mut self, n: Node<'t>) {
        if let Some(decl) = definition(n) {
            self.node(decl);
        }
    }

    /// `[with] body CONTROL`, defined as `control`.
    pub(crate) fn control_part(&mut self, n: Node<'t>) {
        let mut opcode = Opcode::CONTROL;
        if let Some(with) = n.child_by_kind(Kind::WithSpec) {
            opcode = Opcode::CONTROLW;
            self.node(with);
        }
        if let Some(body) = n.child_by_kind(Kind::Block) {
            self.node(body);
        }
        let addr = self.op(opcode);
        self.define_as("control", n.range(), addr);
    }

    pub(crate) fn func_decl(&mut self, n: Node<'t>) {
        if has(n, Kind::KwExternal) {
            return self.external_function(n);
        }
        match n.children().map(|c| c.kind()).find(|k| k.is_keyword()) {
            Some(Kind::KwFunction) => self.function(n),
            Some(Kind::KwTestcase) => self.testcase(n),
            Some(Kind::KwAltstep) => self.altstep(n),
            _ => self.unsupported(n, "behaviour"),
        }
    }

    /// `[runs on] [return] params body NAME FUNCTION{,B,V,VB}`
    fn function(&mut self, n: Node<'t>) {
        self.scopes.push();
        self.reject(n, Kind::WithSpec, "attributes on functions");
        self.reject(n, Kind::MtcSpec, "mtc clause");

        let runs_on = n.child_by_kind(Kind::RunsOnSpec);
        let ret = n.child_by_kind(Kind::ReturnSpec);
        let opcode = match (runs_on, ret) {
            (None, None) => Opcode::FUNCTION,
            (Some(runs_on), None) => {
                self.component(runs_on);
                Opcode::FUNCTIONB
            }
            (None, Some(ret)) => {
                self.node(ret);
                Opcode::FUNCTIONV
            }
            (Some(runs_on), Some(ret)) => {
                self.component(runs_on);
                self.node(ret);
                Opcode::FUNCTIONVB
            }
        };

        self.params(n);
        self.body(n);
        self.finish_behaviour(n, opcode);
    }

    /// `[return] [with] params NAME FUNCTIONX{,V,W,VW}`
    fn external_function(&mut self, n: Node<'t>) {
        self.scopes.push();
        self.reject(n, Kind::MtcSpec, "mtc clause");
        self.reject(n, Kind::RunsOnSpec, "runs on clause on external functions");

        let ret = n.child_by_kind(Kind::ReturnSpec);
        let with = n.child_by_kind(Kind::WithSpec);
        let opcode = match (ret, with) {
            (None, None) => Opcode::FUNCTIONX,
            (None, Some(with)) => {
                self.node(with);
                Opcode::FUNCTIONXW
            }
            (Some(ret), None) => {
                self.node(ret);
                Opcode::FUNCTIONXV
            }
            (Some(ret), Some(with)) => {
                self.node(ret);
                self.node(with);
                Opcode::FUNCTIONXVW
            }
        };

        self.params(n);
        self.finish_behaviour(n, opcode);
    }

    /// `[system] runs-on params body NAME TESTCASE{,S}`
    fn testcase(&mut self, n: Node<'t>) {
        self.scopes.push();

        let mut opcode = Opcode::TESTCASE;
        if let Some(system) = n.child_by_kind(Kind::SystemSpec) {
            opcode = Opcode::TESTCASES;
            self.component(system);
        }
        match n.child_by_kind(Kind::RunsOnSpec) {
            Some(runs_on) => self.component(runs_on),
            None => self.unsupported(n, "testcase without runs on clause"),
        }

        self.params(n);
        self.body(n);
        self.finish_behaviour(n, opcode);
    }

    /// `[runs on] [with] params body NAME ALTSTEP{,B,W,BW}`
    fn altstep(&mut self, n: Node<'t>) {
        self.scopes.push();
        self.reject(n, Kind::MtcSpec, "mtc clause");

        let runs_on = n.child_by_kind(Kind::RunsOnSpec);
        let with = n.child_by_kind(Kind::WithSpec);
        let opcode = match (runs_on, with) {
            (None, None) => Opcode::ALTSTEP,
            (None, Some(with)) => {
                self.node(with);
                Opcode::ALTSTEPW
            }
            (Some(runs_on), None) => {
                self.component(runs_on);
                Opcode::ALTSTEPB
            }
            (Some(runs_on), Some(with)) => {
                self.component(runs_on);
                self.node(with);
                Opcode::ALTSTEPBW
            }
        };

        self.params(n);
        self.body(n);
        self.finish_behaviour(n, opcode);
    }

    /// Component type of a `runs on` or `system` clause.
    fn component(&mut self, spec: Node<'t>) {
        if let Some(ty) = spec.child_by_kind(Kind::RefSpec) {
            self.node(ty);
        }
    }

    fn params(&mut self, n: Node<'t>) {
        self.reject(n, Kind::TypeFormalPars, "type parameters");
        match n.child_by_kind(Kind::FormalPars) {
            Some(pars) => self.node(pars),
            None => {
                self.op(Opcode::SKIP);
            }
        }
    }

    fn body(&mut self, n: Node<'t>) {
        match n.child_by_kind(Kind::Block) {
            Some(body) => self.node(body),
            None => self.unsupported(n, "behaviour without body"),
        }
    }

    /// `NAME op`, then leaves the behaviour scope and defines its name.
    fn finish_behaviour(&mut self, n: Node<'t>, opcode: Opcode) {
        let name = n.child_by_kind(Kind::Name);
        self.name(text(name));
        let addr = self.op(opcode);
        self.scopes.pop();
        self.define(name, addr);
    }

    fn reject(&mut self, n: Node<'t>, kind: Kind, what: &str) {
        if let Some(child) = n.child_by_kind(kind) {
            self.unsupported(child, what);
        }
    }

    pub(crate) fn value_decl(&mut self, n: Node<'t>) {
        let kind = match elements(n).next().map(|c| c.kind()) {
            Some(Kind::KwConst) => ValueKind::Const,
            Some(Kind::KwModulepar) => ValueKind::ModulePar,
            _ => ValueKind::Var,
        };
        self.declarators(n, kind);
    }

    pub(crate) fn module_par_group(&mut self, n: Node<'t>) {
        self.reject(n, Kind::WithSpec, "attributes on module parameters");
        for decl in n.children().filter(|c| c.kind() == Kind::ValueDecl) {
            self.declarators(decl, ValueKind::ModulePar);
        }
    }

    fn declarators(&mut self, n: Node<'t>, kind: ValueKind) {
        for declarator in n.children().filter(|c| c.kind() == Kind::Declarator) {
            match kind {
                ValueKind::Var => self.var(n, declarator),
                ValueKind::Const => self.constant(n, declarator),
                ValueKind::ModulePar => self.module_par(n, declarator),
            }
        }
    }

    /// `type [dims] NAME VAR`, then `value REF(var) ASSIGN` for an initial value.
    fn var(&mut self, decl: Node<'t>, declarator: Node<'t>) {
        self.reject(decl, Kind::WithSpec, "attributes on variables");
        self.value_type(decl, declarator);

        let name = declarator.child_by_kind(Kind::Name);
        self.name(text(name));
        self.reject(decl, Kind::Modifier, "modifiers");
        let addr = self.op(Opcode::VAR);
        if let Some(value) = after(declarator, Kind::Assign) {
            self.node(value);
            if let Some(addr) = addr {
                self.reference(addr);
            }
            self.op(Opcode::ASSIGN);
        }
        self.define(name, addr);
    }

    /// `[with] SCAN value BLOCK type [dims] NAME CONST{,W}`
    fn constant(&mut self, decl: Node<'t>, declarator: Node<'t>) {
        let mut opcode = Opcode::CONST;
        if let Some(with) = decl.child_by_kind(Kind::WithSpec) {
            opcode = Opcode::CONSTW;
            self.node(with);
        }

        match after(declarator, Kind::Assign) {
            Some(value) => self.scoped(value),
            None => self.unsupported(declarator, "constant without value"),
        }

        self.value_type(decl, declarator);
        let name = declarator.child_by_kind(Kind::Name);
        self.name(text(name));
        self.reject(decl, Kind::Modifier, "modifiers");
        let addr = self.op(opcode);
        self.define(name, addr);
    }

    /// `[SCAN default BLOCK] type [dims] NAME MPAR{,D}`
    fn module_par(&mut self, decl: Node<'t>, declarator: Node<'t>) {
        let mut opcode = Opcode::MPAR;
        if let Some(value) = after(declarator, Kind::Assign) {
            opcode = Opcode::MPARD;
            self.scoped(value);
        }
        self.reject(decl, Kind::WithSpec, "attributes on module parameters");
        self.reject(decl, Kind::Modifier, "modifiers");

        self.value_type(decl, declarator);
        let name = declarator.child_by_kind(Kind::Name);
        self.name(text(name));
        let addr = self.op(opcode);
        self.define(name, addr);
    }

    fn value_type(&mut self, decl: Node<'t>, declarator: Node<'t>) {
        if let Some(ty) = decl.child_by_kind(Kind::RefSpec) {
            self.node(ty);
        }
        self.array_defs(declarator);
    }

    /// `SCAN n BLOCK`
    pub(crate) fn scoped(&mut self, n: Node<'t>) {
        self.op(Opcode::SCAN);
        self.node(n);
        self.op(Opcode::BLOCK);
    }

    /// `SCAN attrs BLOCK`
    pub(crate) fn with_spec(&mut self, n: Node<'t>) {
        self.op(Opcode::SCAN);
        for stmt in n.children().filter(|c| c.kind() == Kind::WithStmt) {
            self.node(stmt);
        }
        self.op(Opcode::BLOCK);
    }

    /// `value EXTENSION`, `value ENCODE` or `value VARIANT`.
    pub(crate) fn with_stmt(&mut self, n: Node<'t>) {
        let mut strings = n.children().filter(|c| c.kind() == Kind::String);
        if let Some(value) = strings.next() {
            self.node(value);
        }
        if let Some(extra) = strings.next() {
            self.unsupported(extra, "dotted attribute values");
        }

        for ignored in elements(n).filter(|c| {
            matches!(c.kind(), Kind::KwOverride | Kind::Modifier | Kind::WithQualifiers)
        }) {
            self.report(DiagnosticKind::IgnoredAttribute, ignored.range(), ignored.text());
        }

        let Some(keyword) = elements(n).next() else {
            return;
        };
        match keyword.kind() {
            Kind::KwExtension => {
                self.op(Opcode::EXTENSION);
            }
            Kind::KwEncode => {
                self.op(Opcode::ENCODE);
            }
            Kind::KwVariant => {
                self.op(Opcode::VARIANT);
            }
            kind if kind.is_error() => {}
            _ => self.unsupported(keyword, &format!("`{}` attributes", keyword.text())),
        }
    }

    /// `SKIP` without parameters, `SCAN pars BLOCK` otherwise.
    pub(crate) fn formal_pars(&mut self, n: Node<'t>) {
        let pars: Vec<_> = n.children().filter(|c| c.kind() == Kind::FormalPar).collect();
        if pars.is_empty() {
            self.op(Opcode::SKIP);
            return;
        }
        self.op(Opcode::SCAN);
        for par in pars {
            self.node(par);
        }
        self.op(Opcode::BLOCK);
    }

    /// `type [restriction] NAME IN|OUT|INOUT`
    pub(crate) fn formal_par(&mut self, n: Node<'t>) {
        if let Some(ty) = n.child_by_kind(Kind::RefSpec) {
            self.node(ty);
        }
        if let Some(restriction) = n.child_by_kind(Kind::RestrictionSpec) {
            self.node(restriction);
        }
        self.reject(n, Kind::ArrayDef, "array parameters");
        if let Some(default) = after(n, Kind::Assign) {
            self.unsupported(default, "default parameter values");
        }

        let name = n.child_by_kind(Kind::Name);
        self.name(text(name));
        let direction = match elements(n).next().map(|c| c.kind()) {
            Some(Kind::KwOut) => Opcode::OUT,
            Some(Kind::KwInout) => Opcode::INOUT,
            _ => Opcode::IN,
        };
        let addr = self.op(direction);
        self.define(name, addr);
    }

    /// `PERMITT`, or `PERMITO`/`PERMITP` for `omit` and `present`.
    pub(crate) fn restriction(&mut self, n: Node<'t>) {
        let opcode = if has(n, Kind::KwOmit) {
            Opcode::PERMITO
        } else if has(n, Kind::KwPresent) {
            Opcode::PERMITP
        } else {
            Opcode::PERMITT
        };
        self.op(opcode);
    }

    /// `type [restriction]`
    pub(crate) fn return_spec(&mut self, n: Node<'t>) {
        if let Some(ty) = n.child_by_kind(Kind::RefSpec) {
            self.node(ty);
        }
        if let Some(restriction) = n.child_by_kind(Kind::RestrictionSpec) {
            self.node(restriction);
        }
    }
}

/// The declaration inside a `ModuleDef`, past any visibility keyword.
fn definition(def: Node<'_>) -> Option<Node<'_>> {
    def.children().find(|c| !c.is_token())
}
