//! Scan primitives shared by the containment, equality, replace, and split
//! operations.
//!
//! Everything here is written against the [`Cursor`] contract alone, so one
//! implementation serves zero-terminated buffers, views, and owned buffers
//! in any width combination.

use crate::chartype::UnitEq;
use crate::cursor::Cursor;
use crate::span::Span;

/// Returns `true` if `prefix` matches at the current position of `text`.
///
/// Both cursors advance in lockstep while their units compare equal; the
/// match succeeds when the prefix cursor reaches its end first or together
/// with the text cursor. An empty prefix matches anything, including an
/// empty text.
pub fn prefix_matches<TC, PC, C>(mut text: TC, mut prefix: PC, comparer: &C) -> bool
where
    TC: Cursor,
    PC: Cursor,
    C: UnitEq<TC::Unit, PC::Unit>,
{
    while !text.at_end() && !prefix.at_end() {
        if !comparer.eq_units(text.value(), prefix.value()) {
            break;
        }
        text.advance();
        prefix.advance();
    }
    prefix.at_end()
}

/// Returns `true` if both cursors run out at the same step with all units
/// equal.
pub fn full_match<AC, BC, C>(mut lhs: AC, mut rhs: BC, comparer: &C) -> bool
where
    AC: Cursor,
    BC: Cursor,
    C: UnitEq<AC::Unit, BC::Unit>,
{
    while !lhs.at_end() && !rhs.at_end() {
        if !comparer.eq_units(lhs.value(), rhs.value()) {
            break;
        }
        lhs.advance();
        rhs.advance();
    }
    lhs.at_end() && rhs.at_end()
}

/// Finds the first occurrence of `pattern` at or after the position of
/// `text`.
///
/// Returns the span of the occurrence, or an empty span positioned at the
/// text's end when there is none; success is therefore `!result.is_empty()`
/// for any non-empty pattern. An empty pattern reports a match at the
/// starting position.
///
/// The search tries every position with a fresh pattern cursor, which is
/// O(text × pattern) in the worst case. There is deliberately no
/// precomputed skip table: typical operands are short, the trial loop stops
/// early on zero-terminated input without ever computing its length, and
/// the greedy left-to-right matching the callers pin their behavior on
/// falls out directly.
pub fn find_forward<TC, PC, C>(mut text: TC, pattern: &PC, comparer: &C) -> Span
where
    TC: Cursor + Clone,
    PC: Cursor + Clone,
    C: UnitEq<TC::Unit, PC::Unit>,
{
    let mut probe = text.clone();
    let mut pat = pattern.clone();
    loop {
        if text.at_end() {
            break;
        }
        while !probe.at_end() && !pat.at_end() {
            if !comparer.eq_units(probe.value(), pat.value()) {
                break;
            }
            probe.advance();
            pat.advance();
        }
        // Either the whole pattern matched here, or the text ran out while
        // comparing; both end the search.
        if pat.at_end() || probe.at_end() {
            break;
        }
        text.advance();
        probe = text.clone();
        pat = pattern.clone();
    }
    if pat.at_end() {
        Span::new(text.position(), probe.position())
    } else {
        Span::empty_at(probe.position())
    }
}
