//! Trimming from the start, the end, or both.
//!
//! One forward scan and one reverse scan bracket the kept section; what
//! happens with that section depends on the variant. The borrowing forms
//! (`trim`, `trim_start`, `trim_end`) narrow to a zero-copy subslice, the
//! `_copy` forms materialize an owned buffer, and the `_in_place` forms
//! compact the buffer itself with an overlap-safe shift.

use crate::chartype::{IsSpace, UnitPred};
use crate::cursor::Cursor;
use crate::span::Span;
use crate::text::{EditText, Text};

/// Locates the section of `text` that survives trimming.
fn trim_bounds<T, P>(text: &T, predicate: &P, from_start: bool, from_end: bool) -> Span
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    let mut fwd = text.cursor();
    if from_start {
        while !fwd.at_end() && predicate.test(fwd.value()) {
            fwd.advance();
        }
    }
    if fwd.at_end() {
        // Everything trimmed away (or the text was empty).
        return Span::empty_at(fwd.position());
    }
    let mut rev = text.rev_cursor();
    if from_end {
        while !rev.at_end() && predicate.test(rev.value()) {
            rev.advance();
        }
    }
    Span::new(fwd.position(), rev.position())
}

/// The section of `text` left after trimming units matching `predicate`
/// from both ends, as a zero-copy subslice.
pub fn trim_by<'a, T, P>(text: &'a T, predicate: P) -> &'a [T::Unit]
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_bounds(text, &predicate, true, true).of(text.storage())
}

/// The section of `text` left after trimming ASCII whitespace from both
/// ends, as a zero-copy subslice.
#[inline]
pub fn trim<T: Text + ?Sized>(text: &T) -> &[T::Unit] {
    trim_by(text, IsSpace)
}

/// Like [`trim_by`], trimming only the start.
pub fn trim_start_by<'a, T, P>(text: &'a T, predicate: P) -> &'a [T::Unit]
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_bounds(text, &predicate, true, false).of(text.storage())
}

/// Like [`trim`], trimming only the start.
#[inline]
pub fn trim_start<T: Text + ?Sized>(text: &T) -> &[T::Unit] {
    trim_start_by(text, IsSpace)
}

/// Like [`trim_by`], trimming only the end.
pub fn trim_end_by<'a, T, P>(text: &'a T, predicate: P) -> &'a [T::Unit]
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_bounds(text, &predicate, false, true).of(text.storage())
}

/// Like [`trim`], trimming only the end.
#[inline]
pub fn trim_end<T: Text + ?Sized>(text: &T) -> &[T::Unit] {
    trim_end_by(text, IsSpace)
}

/// Owned copy of `text` trimmed on both ends by `predicate`.
#[inline]
pub fn trim_copy_by<T, P>(text: &T, predicate: P) -> Vec<T::Unit>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_by(text, predicate).to_vec()
}

/// Owned copy of `text` with ASCII whitespace trimmed on both ends.
#[inline]
pub fn trim_copy<T: Text + ?Sized>(text: &T) -> Vec<T::Unit> {
    trim(text).to_vec()
}

/// Owned copy of `text` trimmed at the start by `predicate`.
#[inline]
pub fn trim_start_copy_by<T, P>(text: &T, predicate: P) -> Vec<T::Unit>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_start_by(text, predicate).to_vec()
}

/// Owned copy of `text` with ASCII whitespace trimmed at the start.
#[inline]
pub fn trim_start_copy<T: Text + ?Sized>(text: &T) -> Vec<T::Unit> {
    trim_start(text).to_vec()
}

/// Owned copy of `text` trimmed at the end by `predicate`.
#[inline]
pub fn trim_end_copy_by<T, P>(text: &T, predicate: P) -> Vec<T::Unit>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_end_by(text, predicate).to_vec()
}

/// Owned copy of `text` with ASCII whitespace trimmed at the end.
#[inline]
pub fn trim_end_copy<T: Text + ?Sized>(text: &T) -> Vec<T::Unit> {
    trim_end(text).to_vec()
}

fn trim_in_place_bounds<T, P>(text: &mut T, predicate: &P, from_start: bool, from_end: bool)
where
    T: EditText + ?Sized,
    P: UnitPred<T::Unit>,
{
    let bounds = trim_bounds(text, predicate, from_start, from_end);
    text.retain_span(bounds);
}

/// Trims `text` in place on both ends by `predicate`, shifting the kept
/// units to the front of the buffer.
#[inline]
pub fn trim_in_place_by<T, P>(text: &mut T, predicate: P)
where
    T: EditText + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_in_place_bounds(text, &predicate, true, true);
}

/// Trims ASCII whitespace from both ends of `text` in place.
#[inline]
pub fn trim_in_place<T: EditText + ?Sized>(text: &mut T) {
    trim_in_place_by(text, IsSpace);
}

/// Trims `text` in place at the start by `predicate`.
#[inline]
pub fn trim_start_in_place_by<T, P>(text: &mut T, predicate: P)
where
    T: EditText + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_in_place_bounds(text, &predicate, true, false);
}

/// Trims ASCII whitespace from the start of `text` in place.
#[inline]
pub fn trim_start_in_place<T: EditText + ?Sized>(text: &mut T) {
    trim_start_in_place_by(text, IsSpace);
}

/// Trims `text` in place at the end by `predicate`.
#[inline]
pub fn trim_end_in_place_by<T, P>(text: &mut T, predicate: P)
where
    T: EditText + ?Sized,
    P: UnitPred<T::Unit>,
{
    trim_in_place_bounds(text, &predicate, false, true);
}

/// Trims ASCII whitespace from the end of `text` in place.
#[inline]
pub fn trim_end_in_place<T: EditText + ?Sized>(text: &mut T) {
    trim_end_in_place_by(text, IsSpace);
}
