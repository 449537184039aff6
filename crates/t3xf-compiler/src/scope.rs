//! Lexical scopes and the built-in universe.

use std::sync::LazyLock;

use indexmap::IndexMap;
use rowan::TextRange;
use t3xf::{Opcode, Reference};

/// Built-in names, shared read-only by every compilation.
static UNIVERSE: LazyLock<IndexMap<&'static str, Opcode>> = LazyLock::new(|| {
    IndexMap::from([
        ("log", Opcode::LOG),
        ("integer", Opcode::INTEGER),
        ("float", Opcode::FLOAT),
        ("bitstring", Opcode::BITSTRING),
        ("hexstring", Opcode::HEXSTRING),
        ("octetstring", Opcode::OCTETSTRING),
        ("boolean", Opcode::BOOLEAN),
        ("charstring", Opcode::CHARSTRING),
        ("timer", Opcode::TIMER),
    ])
});

/// Opcode of a built-in name.
pub(crate) fn builtin(name: &str) -> Option<Opcode> {
    UNIVERSE.get(name).copied()
}

/// A named entity visible in one scope.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Symbol {
    /// Declared ahead of its definition. `sites` are the placeholder
    /// instructions waiting for it.
    Unresolved {
        declared_at: Option<TextRange>,
        sites: Vec<usize>,
    },
    Resolved {
        declared_at: Option<TextRange>,
        opcode: Opcode,
        target: Reference,
    },
}

/// What a use of a name compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
    /// A bare opcode, for built-ins.
    Builtin(Opcode),
    /// An instruction pointing at the defining instruction.
    Resolved(Opcode, Reference),
    /// Declared but not compiled yet.
    Pending,
}

/// Outcome of [`Scopes::define`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Defined {
    Fresh,
    /// The name was declared ahead; these placeholder sites must be bound.
    Forward(Vec<usize>),
    /// Already defined in the innermost scope. The first definition stays.
    Duplicate(Option<TextRange>),
}

#[derive(Debug, Default)]
struct Scope {
    symbols: IndexMap<String, Symbol>,
}

/// Chain of scopes, innermost last. The bottom scope holds file-level names
/// such as modules; the universe sits below it and is never modified.
#[derive(Debug)]
pub(crate) struct Scopes {
    stack: Vec<Scope>,
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

impl Scopes {
    pub fn new() -> Self {
        Self {
            stack: vec![Scope::default()],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self) {
        self.stack.push(Scope::default());
    }

    pub fn pop(&mut self) {
        assert!(self.stack.len() > 1, "pop of the file scope");
        self.stack.pop();
    }

    fn innermost(&mut self) -> &mut Scope {
        self.stack.last_mut().expect("file scope is never popped")
    }

    /// Registers `name` as unresolved in the innermost scope. Returns false
    /// if the name is already present there.
    pub fn declare(&mut self, name: &str, declared_at: Option<TextRange>) -> bool {
        let scope = self.innermost();
        if scope.symbols.contains_key(name) {
            return false;
        }
        scope.symbols.insert(
            name.to_string(),
            Symbol::Unresolved {
                declared_at,
                sites: Vec::new(),
            },
        );
        true
    }

    /// Resolves `name` in the innermost scope.
    pub fn define(
        &mut self,
        name: &str,
        opcode: Opcode,
        target: Reference,
        declared_at: Option<TextRange>,
    ) -> Defined {
        let resolved = Symbol::Resolved {
            declared_at,
            opcode,
            target,
        };
        let scope = self.innermost();
        match scope.symbols.get_mut(name) {
            None => {
                scope.symbols.insert(name.to_string(), resolved);
                Defined::Fresh
            }
            Some(Symbol::Resolved { declared_at, .. }) => Defined::Duplicate(*declared_at),
            Some(symbol @ Symbol::Unresolved { .. }) => {
                let Symbol::Unresolved { sites, .. } = std::mem::replace(symbol, resolved) else {
                    unreachable!()
                };
                Defined::Forward(sites)
            }
        }
    }

    /// Looks `name` up from the innermost scope outwards, then in the
    /// universe.
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        for scope in self.stack.iter().rev() {
            match scope.symbols.get(name) {
                Some(Symbol::Resolved { opcode, target, .. }) => {
                    return Some(Binding::Resolved(*opcode, *target));
                }
                Some(Symbol::Unresolved { .. }) => return Some(Binding::Pending),
                None => {}
            }
        }
        builtin(name).map(Binding::Builtin)
    }

    /// Records a placeholder waiting for the nearest unresolved `name`.
    pub fn add_site(&mut self, name: &str, site: usize) -> bool {
        for scope in self.stack.iter_mut().rev() {
            match scope.symbols.get_mut(name) {
                Some(Symbol::Unresolved { sites, .. }) => {
                    sites.push(site);
                    return true;
                }
                Some(Symbol::Resolved { .. }) => return false,
                None => {}
            }
        }
        false
    }
}
