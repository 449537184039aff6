use rowan::{TextRange, TextSize};
use t3xf::{Opcode, Reference};

use crate::scope::{Binding, Defined, Scopes, builtin};

fn range(start: u32, end: u32) -> Option<TextRange> {
    Some(TextRange::new(TextSize::from(start), TextSize::from(end)))
}

#[test]
fn universe_names() {
    assert_eq!(builtin("integer"), Some(Opcode::INTEGER));
    assert_eq!(builtin("log"), Some(Opcode::LOG));
    assert_eq!(builtin("timer"), Some(Opcode::TIMER));
    assert_eq!(builtin("verdicttype"), None);
}

#[test]
fn lookup_falls_back_to_universe() {
    let scopes = Scopes::new();
    assert_eq!(scopes.lookup("boolean"), Some(Binding::Builtin(Opcode::BOOLEAN)));
    assert_eq!(scopes.lookup("x"), None);
}

#[test]
fn definitions_shadow_universe() {
    let mut scopes = Scopes::new();
    scopes.define("integer", Opcode::REF, Reference(3), None);
    assert_eq!(
        scopes.lookup("integer"),
        Some(Binding::Resolved(Opcode::REF, Reference(3)))
    );
}

#[test]
fn inner_scope_shadows_outer() {
    let mut scopes = Scopes::new();
    scopes.define("x", Opcode::REF, Reference(1), None);
    scopes.push();
    scopes.define("x", Opcode::REF, Reference(2), None);
    assert_eq!(scopes.lookup("x"), Some(Binding::Resolved(Opcode::REF, Reference(2))));

    scopes.pop();
    assert_eq!(scopes.lookup("x"), Some(Binding::Resolved(Opcode::REF, Reference(1))));
}

#[test]
fn popped_names_are_gone() {
    let mut scopes = Scopes::new();
    scopes.push();
    scopes.define("x", Opcode::REF, Reference(1), None);
    assert_eq!(scopes.depth(), 2);

    scopes.pop();
    assert_eq!(scopes.depth(), 1);
    assert_eq!(scopes.lookup("x"), None);
}

#[test]
#[should_panic(expected = "pop of the file scope")]
fn file_scope_cannot_be_popped() {
    let mut scopes = Scopes::new();
    scopes.pop();
}

#[test]
fn declared_names_are_pending() {
    let mut scopes = Scopes::new();
    assert!(scopes.declare("f", range(0, 1)));
    assert!(!scopes.declare("f", range(5, 6)));
    assert_eq!(scopes.lookup("f"), Some(Binding::Pending));
}

#[test]
fn define_returns_waiting_sites() {
    let mut scopes = Scopes::new();
    scopes.declare("f", range(0, 1));
    scopes.push();
    assert!(scopes.add_site("f", 4));
    assert!(scopes.add_site("f", 9));
    scopes.pop();

    let defined = scopes.define("f", Opcode::REF, Reference(12), range(0, 1));
    assert_eq!(defined, Defined::Forward(vec![4, 9]));
    assert_eq!(
        scopes.lookup("f"),
        Some(Binding::Resolved(Opcode::REF, Reference(12)))
    );
    assert!(!scopes.add_site("f", 20));
}

#[test]
fn duplicate_keeps_first_definition() {
    let mut scopes = Scopes::new();
    assert_eq!(
        scopes.define("x", Opcode::REF, Reference(1), range(0, 1)),
        Defined::Fresh
    );
    assert_eq!(
        scopes.define("x", Opcode::REF, Reference(2), range(10, 11)),
        Defined::Duplicate(range(0, 1))
    );
    assert_eq!(scopes.lookup("x"), Some(Binding::Resolved(Opcode::REF, Reference(1))));
}

#[test]
fn add_site_without_declaration() {
    let mut scopes = Scopes::new();
    assert!(!scopes.add_site("nowhere", 0));
}
