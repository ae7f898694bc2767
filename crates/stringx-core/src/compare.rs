//! Equality, prefix, suffix, and containment checks.
//!
//! Each operation comes in three forms: the `_by` form taking any
//! [`UnitEq`] (closures included), the default form binding exact
//! comparison, and the `i`-prefixed form binding ASCII case folding. The
//! two texts may use different unit widths.

use crate::chartype::{Exact, FoldCase, UnitEq};
use crate::cursor::Cursor;
use crate::scan::{find_forward, full_match, prefix_matches};
use crate::text::Text;

/// Returns `true` if the two texts contain equal units, by `comparer`.
pub fn equals_by<A, B, C>(lhs: &A, rhs: &B, comparer: C) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
    C: UnitEq<A::Unit, B::Unit>,
{
    full_match(lhs.cursor(), rhs.cursor(), &comparer)
}

/// Returns `true` if the two texts are exactly equal.
#[inline]
pub fn equals<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    equals_by(lhs, rhs, Exact)
}

/// Returns `true` if the two texts are equal ignoring ASCII case.
#[inline]
pub fn iequals<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    equals_by(lhs, rhs, FoldCase)
}

/// Returns `true` if `text` starts with `prefix`, by `comparer`.
///
/// An empty prefix matches every text.
pub fn starts_with_by<A, B, C>(text: &A, prefix: &B, comparer: C) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
    C: UnitEq<A::Unit, B::Unit>,
{
    prefix_matches(text.cursor(), prefix.cursor(), &comparer)
}

/// Returns `true` if `text` starts with `prefix`.
#[inline]
pub fn starts_with<A, B>(text: &A, prefix: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    starts_with_by(text, prefix, Exact)
}

/// Returns `true` if `text` starts with `prefix` ignoring ASCII case.
#[inline]
pub fn istarts_with<A, B>(text: &A, prefix: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    starts_with_by(text, prefix, FoldCase)
}

/// Returns `true` if `text` ends with `ending`, by `comparer`.
///
/// Runs the prefix scan over reverse cursors; for zero-terminated input
/// this costs the length scan needed to find the end first. An empty ending
/// matches every text.
pub fn ends_with_by<A, B, C>(text: &A, ending: &B, comparer: C) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
    C: UnitEq<A::Unit, B::Unit>,
{
    prefix_matches(text.rev_cursor(), ending.rev_cursor(), &comparer)
}

/// Returns `true` if `text` ends with `ending`.
#[inline]
pub fn ends_with<A, B>(text: &A, ending: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    ends_with_by(text, ending, Exact)
}

/// Returns `true` if `text` ends with `ending` ignoring ASCII case.
#[inline]
pub fn iends_with<A, B>(text: &A, ending: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    ends_with_by(text, ending, FoldCase)
}

/// Returns `true` if `needle` occurs anywhere in `text`, by `comparer`.
///
/// An empty needle is contained in every text, the empty text included.
pub fn contains_by<A, B, C>(text: &A, needle: &B, comparer: C) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
    C: UnitEq<A::Unit, B::Unit>,
{
    let pattern = needle.cursor();
    if pattern.at_end() {
        return true;
    }
    !find_forward(text.cursor(), &pattern, &comparer).is_empty()
}

/// Returns `true` if `needle` occurs anywhere in `text`.
#[inline]
pub fn contains<A, B>(text: &A, needle: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    contains_by(text, needle, Exact)
}

/// Returns `true` if `needle` occurs anywhere in `text` ignoring ASCII
/// case.
#[inline]
pub fn icontains<A, B>(text: &A, needle: &B) -> bool
where
    A: Text + ?Sized,
    B: Text + ?Sized,
{
    contains_by(text, needle, FoldCase)
}
