//! Self-checks of the grammar code. Input can never trip them, so they are
//! left out of coverage.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use crate::kind::Kind;

impl Parser<'_> {
    /// Panics when a rule keeps looking at the same token without consuming
    /// it. Bumping refuels.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(fuel > 0, "parser is stuck: too many lookaheads");
        self.debug_fuel.set(fuel - 1);
    }

    /// Rules that start at a known token are only entered after the caller
    /// dispatched on it.
    #[inline]
    pub(super) fn assert_current(&mut self, kind: Kind) {
        let found = self.current();
        assert_eq!(found, kind, "rule for {kind:?} entered at {found:?}");
    }
}
