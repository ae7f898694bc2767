//! Substring replacement.
//!
//! Matching is greedy, left-to-right, and non-overlapping: each match
//! consumes its full pattern length before the search resumes, so
//! `"aaaa aaaa"` with pattern `"aa"` and replacement `"123"` becomes
//! `"123123 123123"`. An empty pattern is rejected up front, since it would
//! match at every position.

use crate::chartype::{Exact, FoldCase, UnitEq};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::scan::find_forward;
use crate::text::Text;
use crate::unit::CodeUnit;

/// The scan-and-append loop shared by the copy and in-place variants.
///
/// Walks `text`, appending either the literal unit or, at each match, the
/// replacement, and advancing past the matched span.
fn replace_scan<TC, PC, RC, C>(
    out: &mut Vec<TC::Unit>,
    mut text: TC,
    pattern: &PC,
    replacement: &RC,
    comparer: &C,
) where
    TC: Cursor + Clone,
    PC: Cursor + Clone,
    RC: Cursor + Clone,
    C: UnitEq<TC::Unit, PC::Unit>,
{
    while !text.at_end() {
        let mut probe = text.clone();
        let mut pat = pattern.clone();
        while !probe.at_end() && !pat.at_end() {
            if !comparer.eq_units(probe.value(), pat.value()) {
                break;
            }
            probe.advance();
            pat.advance();
        }
        if pat.at_end() {
            let mut rep = replacement.clone();
            while !rep.at_end() {
                out.push(rep.value().cast());
                rep.advance();
            }
            text = probe;
        } else {
            out.push(text.value());
            text.advance();
        }
    }
}

/// Replaces every occurrence of `pattern` in `text` with `replacement`,
/// matching by `comparer`, and returns the modified copy.
///
/// Fails with [`Error::EmptyPattern`] before scanning if `pattern` is
/// empty.
pub fn replace_all_copy_by<T, P, R, C>(
    text: &T,
    pattern: &P,
    replacement: &R,
    comparer: C,
) -> Result<Vec<T::Unit>>
where
    T: Text + ?Sized,
    P: Text + ?Sized,
    R: Text + ?Sized,
    C: UnitEq<T::Unit, P::Unit>,
{
    let pat = pattern.cursor();
    if pat.at_end() {
        return Err(Error::EmptyPattern);
    }
    let mut out = Vec::with_capacity(text.len_units());
    replace_scan(&mut out, text.cursor(), &pat, &replacement.cursor(), &comparer);
    Ok(out)
}

/// Replaces every occurrence of `pattern` with `replacement`, returning the
/// modified copy.
#[inline]
pub fn replace_all_copy<T, P, R>(text: &T, pattern: &P, replacement: &R) -> Result<Vec<T::Unit>>
where
    T: Text + ?Sized,
    P: Text + ?Sized,
    R: Text + ?Sized,
{
    replace_all_copy_by(text, pattern, replacement, Exact)
}

/// Replaces every occurrence of `pattern` with `replacement`, matching
/// ignoring ASCII case, and returns the modified copy.
#[inline]
pub fn ireplace_all_copy<T, P, R>(text: &T, pattern: &P, replacement: &R) -> Result<Vec<T::Unit>>
where
    T: Text + ?Sized,
    P: Text + ?Sized,
    R: Text + ?Sized,
{
    replace_all_copy_by(text, pattern, replacement, FoldCase)
}

/// Replaces every occurrence of `pattern` in `text` with `replacement` in
/// place, matching by `comparer`.
///
/// Locates the first match, splits the buffer into head and tail around it,
/// truncates to the head, appends the replacement, then runs the copying
/// scan over the saved tail. The tail copy is an accepted cost: the
/// replacement may be longer or shorter than the pattern, so the buffer
/// cannot be rewritten in a single pass.
///
/// Fails with [`Error::EmptyPattern`] before any mutation if `pattern` is
/// empty.
pub fn replace_all_in_place_by<U, P, R, C>(
    text: &mut Vec<U>,
    pattern: &P,
    replacement: &R,
    comparer: C,
) -> Result<()>
where
    U: CodeUnit,
    P: Text + ?Sized,
    R: Text + ?Sized,
    C: UnitEq<U, P::Unit>,
{
    let pat = pattern.cursor();
    if pat.at_end() {
        return Err(Error::EmptyPattern);
    }
    let first = find_forward(text.cursor(), &pat, &comparer);
    if first.is_empty() {
        return Ok(());
    }
    let tail: Vec<U> = text[first.end..].to_vec();
    text.truncate(first.start);
    let mut rep = replacement.cursor();
    while !rep.at_end() {
        text.push(rep.value().cast());
        rep.advance();
    }
    replace_scan(text, tail.cursor(), &pat, &replacement.cursor(), &comparer);
    Ok(())
}

/// Replaces every occurrence of `pattern` with `replacement` in place.
#[inline]
pub fn replace_all_in_place<U, P, R>(text: &mut Vec<U>, pattern: &P, replacement: &R) -> Result<()>
where
    U: CodeUnit,
    P: Text + ?Sized,
    R: Text + ?Sized,
{
    replace_all_in_place_by(text, pattern, replacement, Exact)
}

/// Replaces every occurrence of `pattern` with `replacement` in place,
/// matching ignoring ASCII case.
#[inline]
pub fn ireplace_all_in_place<U, P, R>(text: &mut Vec<U>, pattern: &P, replacement: &R) -> Result<()>
where
    U: CodeUnit,
    P: Text + ?Sized,
    R: Text + ?Sized,
{
    replace_all_in_place_by(text, pattern, replacement, FoldCase)
}
