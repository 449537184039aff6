//! Flat, skip-indexed syntax tree.
//!
//! A [`Tree`] stores its structure as an append-only log of [`Event`]s. A node
//! is an `Open` event, its children, and the matching `Close` event. Both
//! bracket events know the distance to their partner (`skip`) and to the
//! enclosing node's `Open` (`parent`), so navigation never allocates.
//!
//! Nodes opened at a checkpoint are only placed when the builder finishes,
//! so wrapping a long chain stays linear.
//!
//! [`Node`] is a copyable handle: a reference to the owning tree plus an
//! event index.

use std::cmp::Reverse;
use std::fmt::{self, Write as _};

use rowan::{TextRange, TextSize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::kind::Kind;
use crate::scanner::Scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Token { kind: Kind, range: TextRange },
    /// `parent` is the relative offset of the enclosing `Open`; `skip` the
    /// offset of the matching `Close`.
    Open { kind: Kind, parent: i32, skip: i32 },
    /// `skip` is the (negative) offset of the matching `Open`.
    Close { kind: Kind, parent: i32, skip: i32 },
}

impl Event {
    pub fn kind(&self) -> Kind {
        match *self {
            Event::Token { kind, .. } | Event::Open { kind, .. } | Event::Close { kind, .. } => {
                kind
            }
        }
    }

}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Token { kind, range } => write!(f, "{kind:?} {range:?}"),
            Event::Open { kind, parent, skip } => {
                write!(f, "enter {kind:?}: parent={parent} skip={skip}")
            }
            Event::Close { kind, parent, skip } => {
                write!(f, "exit {kind:?}: parent={parent} skip={skip}")
            }
        }
    }
}

/// Position in the event log where a node may be opened retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Records events for one tree.
#[derive(Debug, Default)]
pub struct Builder {
    events: Vec<Event>,
    /// Kinds of the nodes still open, innermost last.
    open: Vec<Kind>,
    /// Nodes opened at a checkpoint, by raw position, in creation order.
    wraps: Vec<(usize, Kind)>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node. Must be balanced by [`Builder::pop`].
    pub fn push(&mut self, kind: Kind) {
        self.open.push(kind);
        self.events.push(Event::Open {
            kind,
            parent: 0,
            skip: 0,
        });
    }

    pub fn push_token(&mut self, kind: Kind, range: TextRange) {
        self.events.push(Event::Token { kind, range });
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.events.len())
    }

    /// Opens a node that starts at `checkpoint`, adopting every event recorded
    /// since.
    pub fn push_at(&mut self, checkpoint: Checkpoint, kind: Kind) {
        assert!(
            checkpoint.0 <= self.events.len(),
            "checkpoint is past the end of the log"
        );
        self.wraps.push((checkpoint.0, kind));
        self.open.push(kind);
    }

    /// Closes the innermost open node.
    ///
    /// Panics if no node is open.
    pub fn pop(&mut self) {
        let kind = self.open.pop().expect("pop without matching push");
        self.events.push(Event::Close {
            kind,
            parent: 0,
            skip: 0,
        });
    }

    /// Panics if a node is still open.
    pub fn finish(self, name: impl Into<String>, source: impl Into<String>, lines: Vec<u32>) -> Tree {
        assert!(self.open.is_empty(), "unbalanced push/pop");
        let mut events = place_wraps(self.events, self.wraps);
        link(&mut events);
        Tree {
            name: name.into(),
            source: source.into(),
            events,
            lines,
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Inserts the `Open` events of checkpoint wraps in one pass. Of two wraps at
/// the same position the later one encloses the earlier.
fn place_wraps(events: Vec<Event>, wraps: Vec<(usize, Kind)>) -> Vec<Event> {
    if wraps.is_empty() {
        return events;
    }
    let mut wraps = wraps.into_iter().enumerate().collect::<Vec<_>>();
    wraps.sort_by_key(|&(seq, (at, _))| (at, Reverse(seq)));
    let mut wraps = wraps.into_iter().map(|(_, wrap)| wrap).peekable();

    let mut placed = Vec::with_capacity(events.len() + wraps.len());
    for (i, event) in events.into_iter().enumerate() {
        while let Some((_, kind)) = wraps.next_if(|&(at, _)| at == i) {
            placed.push(Event::Open {
                kind,
                parent: 0,
                skip: 0,
            });
        }
        placed.push(event);
    }
    debug_assert!(wraps.next().is_none(), "wrap without a closing event");
    placed
}

/// Fills in `parent` and `skip` of every bracket event.
fn link(events: &mut [Event]) {
    let mut open = Vec::new();
    for i in 0..events.len() {
        match events[i] {
            Event::Open { kind, .. } => {
                let parent = open.last().map_or(0, |&p: &usize| p as i32 - i as i32);
                events[i] = Event::Open {
                    kind,
                    parent,
                    skip: 0,
                };
                open.push(i);
            }
            Event::Close { kind, .. } => {
                let start = open.pop().expect("close without matching open");
                let Event::Open { parent, .. } = events[start] else {
                    unreachable!("open stack entry is not an Open event");
                };
                let skip = (i - start) as i32;
                events[start] = Event::Open { kind, parent, skip };
                events[i] = Event::Close {
                    kind,
                    parent: start as i32 + parent - i as i32,
                    skip: -skip,
                };
            }
            Event::Token { .. } => {}
        }
    }
}

/// One parsed source unit.
#[derive(Debug, Clone)]
pub struct Tree {
    name: String,
    source: String,
    events: Vec<Event>,
    lines: Vec<u32>,
    diagnostics: Diagnostics,
}

impl Tree {
    pub(crate) fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The first node of the log, normally `Root`.
    ///
    /// Panics on an empty tree.
    pub fn root(&self) -> Node<'_> {
        assert!(!self.events.is_empty(), "tree has no root");
        Node {
            tree: self,
            index: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Line/column of a byte offset. Invalid for `None`.
    pub fn position(&self, offset: Option<TextSize>) -> Position {
        let Some(offset) = offset else {
            return Position::default();
        };
        let offset = u32::from(offset);
        let line = self.lines.partition_point(|&start| start <= offset);
        if line == 0 {
            return Position::default();
        }
        Position {
            line: line as u32,
            column: offset - self.lines[line - 1] + 1,
        }
    }

    /// Indented structure without trivia.
    pub fn dump(&self) -> String {
        self.dump_impl(false)
    }

    pub fn dump_with_trivia(&self) -> String {
        self.dump_impl(true)
    }

    fn dump_impl(&self, trivia: bool) -> String {
        let mut out = String::new();
        if !self.events.is_empty() {
            self.dump_node(self.root(), 0, trivia, &mut out);
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn dump_node(&self, node: Node<'_>, depth: usize, trivia: bool, out: &mut String) {
        let indent = "  ".repeat(depth);
        if node.is_token() {
            if !trivia && node.kind().is_trivia() {
                return;
            }
            writeln!(out, "{indent}{:?} {:?}", node.kind(), node.text()).expect("String write never fails");
            return;
        }
        writeln!(out, "{indent}{:?}", node.kind()).expect("String write never fails");
        for child in node.children() {
            self.dump_node(child, depth + 1, trivia, out);
        }
    }
}

/// Handle to one event of a [`Tree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t Tree,
    index: usize,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind(), self.index)
    }
}

impl<'t> Node<'t> {
    fn event(&self) -> Event {
        self.tree.events[self.index]
    }

    fn at(&self, index: usize) -> Node<'t> {
        Node {
            tree: self.tree,
            index,
        }
    }

    /// Index into the event log; stable for the lifetime of the tree.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    pub fn kind(&self) -> Kind {
        self.event().kind()
    }

    pub fn is_token(&self) -> bool {
        matches!(self.event(), Event::Token { .. })
    }

    /// Offset of the matching `Close`, zero for tokens.
    fn skip(&self) -> usize {
        match self.event() {
            Event::Open { skip, .. } => skip as usize,
            _ => 0,
        }
    }

    pub fn parent(&self) -> Option<Node<'t>> {
        if self.index == 0 {
            return None;
        }
        if let Event::Open { parent, .. } = self.event() {
            return Some(self.at((self.index as i32 + parent) as usize));
        }
        let events = &self.tree.events;
        for i in self.index + 1..events.len() {
            match events[i] {
                Event::Open { parent, .. } => return Some(self.at((i as i32 + parent) as usize)),
                Event::Close { skip, .. } => return Some(self.at((i as i32 + skip) as usize)),
                Event::Token { .. } => {}
            }
        }
        None
    }

    pub fn first_child(&self) -> Option<Node<'t>> {
        if self.is_token() {
            return None;
        }
        self.sibling_at(self.index + 1)
    }

    pub fn next(&self) -> Option<Node<'t>> {
        if self.index == 0 {
            return None;
        }
        self.sibling_at(self.index + self.skip() + 1)
    }

    fn sibling_at(&self, index: usize) -> Option<Node<'t>> {
        match self.tree.events.get(index)? {
            Event::Close { .. } => None,
            _ => Some(self.at(index)),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'t>> + use<'t> {
        std::iter::successors(self.first_child(), Node::next)
    }

    /// First direct child of the given kind.
    pub fn child_by_kind(&self, kind: Kind) -> Option<Node<'t>> {
        self.children().find(|child| child.kind() == kind)
    }

    /// Every token of the subtree, trivia included.
    pub fn tokens(&self) -> impl Iterator<Item = Node<'t>> + use<'t> {
        let node = *self;
        (self.index..=self.index + self.skip())
            .map(move |i| node.at(i))
            .filter(Node::is_token)
    }

    /// First non-trivia token of a node; a token is its own first token.
    pub fn first_token(&self) -> Option<Node<'t>> {
        if self.is_token() {
            return Some(*self);
        }
        self.tokens().find(|token| !token.kind().is_trivia())
    }

    pub fn last_token(&self) -> Option<Node<'t>> {
        if self.is_token() {
            return Some(*self);
        }
        (self.index + 1..self.index + self.skip())
            .rev()
            .map(|i| self.at(i))
            .find(|node| node.is_token() && !node.kind().is_trivia())
    }

    /// Byte range from the first to the last significant token. `None` for
    /// nodes without any.
    pub fn range(&self) -> Option<TextRange> {
        let first = self.first_token()?.event();
        let last = self.last_token()?.event();
        match (first, last) {
            (Event::Token { range: a, .. }, Event::Token { range: b, .. }) => Some(a.cover(b)),
            _ => None,
        }
    }

    pub fn pos(&self) -> Option<TextSize> {
        self.range().map(|r| r.start())
    }

    pub fn end(&self) -> Option<TextSize> {
        self.range().map(|r| r.end())
    }

    pub fn len(&self) -> usize {
        self.range().map_or(0, |r| usize::from(r.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn text(&self) -> &'t str {
        match self.range() {
            Some(range) => &self.tree.source[range],
            None => "",
        }
    }

    pub fn span(&self) -> Span<'t> {
        Span {
            file: &self.tree.name,
            begin: self.tree.position(self.pos()),
            end: self.tree.position(self.end()),
        }
    }

    /// Depth-first traversal. `f` is called with each node on entry; if it
    /// returns true the children are visited, and for non-terminals `f` is
    /// called once more with `None` when the subtree is left.
    pub fn inspect(&self, f: &mut impl FnMut(Option<Node<'t>>) -> bool) {
        if !f(Some(*self)) {
            return;
        }
        if self.is_token() {
            return;
        }
        for child in self.children() {
            child.inspect(f);
        }
        f(None);
    }

    /// Deepest node whose byte range contains `offset`.
    pub fn find_descendant(&self, offset: TextSize) -> Option<Node<'t>> {
        let mut found = None;
        self.inspect(&mut |node| {
            let Some(node) = node else {
                return false;
            };
            match node.range() {
                Some(range) if range.start() <= offset && offset < range.end() => {
                    found = Some(node);
                    true
                }
                _ => false,
            }
        });
        found
    }

    /// Diagnostics located within this node. The root also returns the
    /// unlocated ones.
    pub fn errors(&self) -> Vec<&'t Diagnostic> {
        let diagnostics = self.tree.diagnostics.iter();
        if self.index == 0 {
            return diagnostics.collect();
        }
        let Some(range) = self.range() else {
            return Vec::new();
        };
        diagnostics
            .filter(|d| d.range().is_some_and(|r| range.contains_range(r)))
            .collect()
    }
}

/// One-based line and column. Zero means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("-");
        }
        write!(f, "{}", self.line)?;
        if self.column > 0 {
            write!(f, ":{}", self.column)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'t> {
    pub file: &'t str,
    pub begin: Position,
    pub end: Position,
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file.is_empty() {
            write!(f, "{}:", self.file)?;
        }
        write!(f, "{}", self.begin)?;
        if self.end.is_valid() && self.end != self.begin {
            write!(f, "-{}", self.end)?;
        }
        Ok(())
    }
}

/// Builds a flat `Root` holding every token of `source`, trivia included.
pub fn tokenize(name: &str, source: &str) -> Tree {
    let mut scanner = Scanner::new(source);
    let mut builder = Builder::new();
    builder.push(Kind::Root);
    loop {
        let token = scanner.scan();
        if token.kind == Kind::Eof {
            break;
        }
        builder.push_token(token.kind, token.span);
    }
    builder.pop();
    let lines = scanner.lines().to_vec();
    builder.finish(name, source, lines)
}
