//! Materialization and character-wise conversion.
//!
//! `copy`/`copy_into` move any sequence shape into an owned buffer of any
//! unit width; the `character_convert_*` functions apply a converter to
//! every unit, with the copying form supporting one-to-many expansion and
//! the in-place form restricted to unit-for-unit rewrites.

use crate::chartype::{Converted, ToLower, ToUpper, UnitExpand, UnitMap};
use crate::cursor::{Cursor, CursorMut};
use crate::text::{Sink, Text, TextMut};
use crate::unit::CodeUnit;

/// Copies a sequence into a freshly created sink.
///
/// Each source unit is widened to its code value and narrowed to the
/// target width, so this also converts between unit widths:
///
/// ```
/// let wide: Vec<u16> = stringx_core::copy("Hello");
/// assert_eq!(wide, [72u16, 101, 108, 108, 111]);
/// ```
#[inline]
pub fn copy<S, T>(source: &S) -> T
where
    S: Text + ?Sized,
    T: Sink + Default,
{
    let mut target = T::default();
    copy_into(&mut target, source, false);
    target
}

/// Copies a sequence into `target`, clearing it first when `clear_target`
/// is set. Returns `target` for chaining.
pub fn copy_into<'t, T, S>(target: &'t mut T, source: &S, clear_target: bool) -> &'t mut T
where
    T: Sink,
    S: Text + ?Sized,
{
    if clear_target {
        target.clear_units();
    }
    let mut cur = source.cursor();
    while !cur.at_end() {
        target.push_unit(cur.value().cast());
        cur.advance();
    }
    target
}

/// Applies `converter` to every unit of `source`, collecting the results.
///
/// The converter may expand one unit into several (see
/// [`crate::chartype::Expanding`]); plain closures and the case converters
/// produce exactly one unit per input.
pub fn character_convert_copy<S, X>(source: &S, converter: X) -> Vec<S::Unit>
where
    S: Text + ?Sized,
    X: UnitExpand<S::Unit>,
{
    let mut out = Vec::with_capacity(source.len_units());
    let mut cur = source.cursor();
    while !cur.at_end() {
        converter.expand(cur.value()).push_onto(&mut out);
        cur.advance();
    }
    out
}

/// Rewrites every unit of `text` in place.
///
/// Only unit-for-unit converters are accepted: an in-place rewrite cannot
/// grow the sequence, which makes this a narrower contract than
/// [`character_convert_copy`].
pub fn character_convert_in_place<T, M>(text: &mut T, converter: M)
where
    T: TextMut + ?Sized,
    M: UnitMap<T::Unit>,
{
    let mut cur = text.cursor_mut();
    while !cur.at_end() {
        let unit = cur.value();
        cur.set(converter.map(unit));
        cur.advance();
    }
}

/// ASCII lower-cased copy of a sequence.
#[inline]
pub fn to_lower_copy<S: Text + ?Sized>(source: &S) -> Vec<S::Unit> {
    character_convert_copy(source, ToLower)
}

/// ASCII upper-cased copy of a sequence.
#[inline]
pub fn to_upper_copy<S: Text + ?Sized>(source: &S) -> Vec<S::Unit> {
    character_convert_copy(source, ToUpper)
}

/// ASCII lower-cases a sequence in place.
#[inline]
pub fn to_lower_in_place<T: TextMut + ?Sized>(text: &mut T) {
    character_convert_in_place(text, ToLower);
}

/// ASCII upper-cases a sequence in place.
#[inline]
pub fn to_upper_in_place<T: TextMut + ?Sized>(text: &mut T) {
    character_convert_in_place(text, ToUpper);
}
