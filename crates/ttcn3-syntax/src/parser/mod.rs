//! Recursive-descent parser for TTCN-3.
//!
//! # Architecture
//!
//! The parser writes a flat event log (see [`crate::tree`]) instead of
//! allocating nodes:
//!
//! - All tokens are scanned up front; keywords are resolved before parsing
//! - Trivia buffering: comments are flushed into the log before the next node opens
//! - Checkpoint-based wrapping: binary operators and postfix clauses
//!   retroactively wrap their left operand
//! - Explicit recovery sets: statement keywords and closing brackets are
//!   synchronization points
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree:
//!
//! 1. Unexpected tokens get wrapped in `Kind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. `Malformed`, `Unterminated` and `Unknown` tokens stay in the tree and are
//!    reported when consumed
//! 4. On recursion limit, remaining input goes into a single Error node

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
