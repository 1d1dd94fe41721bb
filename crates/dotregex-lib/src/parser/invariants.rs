//! Parser assertions. Kept apart so coverage tools can skip them.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_, '_> {
    /// Loops that may skip over malformed input burn `debug_fuel`; `consume` refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(
            fuel > 0,
            "regex parser stalled at char {} without consuming",
            self.lexer.position
        );
        self.debug_fuel.set(fuel - 1);
    }

    /// Top-level alternation only returns on end of input; a stray `)` is eaten as text.
    #[inline]
    pub(super) fn assert_at_end_of_input(&self) {
        let len = self.lexer.text().len();
        assert!(
            self.current.kind == SyntaxKind::EndOfFile && self.current.start == len,
            "top-level sequence stopped at {:?} ({}..{}) before the end of a {len}-char pattern",
            self.current.kind,
            self.current.start,
            self.current.end,
        );
    }
}
