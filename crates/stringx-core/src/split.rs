//! Lazy splitting into sections between separators.
//!
//! Two cursor variants share one protocol: [`TokenSplit`] finds a
//! (possibly multi-unit) separator sequence, [`CharSplit`] ends a section
//! at any single unit matching a predicate. Both borrow the text and the
//! separator for their whole lifetime and yield zero-copy sections.
//!
//! A freshly constructed cursor already rests on the first section. The
//! terminal state lags one step behind text exhaustion: the "no separator
//! found" result consumed during one advance is what terminates the next
//! one. That lag is what makes a separator at the very end of the text
//! produce a trailing empty section in keep-all mode: splitting `"ab,"` on
//! `","` yields `"ab"` and then `""`. Once terminal, a cursor is sticky and
//! keeps reporting an empty section.

use crate::chartype::{Exact, FoldCase, UnitEq, UnitPred};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::scan::find_forward;
use crate::span::Span;
use crate::text::Text;

/// Whether zero-length sections are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// Report every section, empty sections included.
    KeepAll,
    /// Skip zero-length sections, e.g. between adjacent separators.
    SkipEmpty,
}

/// A lazy split cursor over a text with a separator token sequence.
///
/// Holds only borrows of the text and separator; both must outlive the
/// cursor and stay unmodified while it is in use.
#[derive(Debug)]
pub struct TokenSplit<'t, 's, T, S, C>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
{
    text: &'t T,
    separator: &'s S,
    comparer: C,
    /// Where the next section starts: one past the last found separator.
    next_start: usize,
    /// The last separator search already hit the end of the text.
    sep_at_end: bool,
    section: Span,
    mode: SplitMode,
    done: bool,
}

impl<'t, 's, T, S, C> TokenSplit<'t, 's, T, S, C>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
    C: UnitEq<T::Unit, S::Unit>,
{
    /// Creates a split cursor resting on the first section.
    ///
    /// Fails with [`Error::EmptySeparator`] if `separator` has no units.
    pub fn new(text: &'t T, separator: &'s S, mode: SplitMode, comparer: C) -> Result<Self> {
        if separator.cursor().at_end() {
            return Err(Error::EmptySeparator);
        }
        let text_empty = text.cursor().at_end();
        let mut split = TokenSplit {
            text,
            separator,
            comparer,
            next_start: 0,
            sep_at_end: text_empty,
            section: Span::empty_at(0),
            mode,
            done: false,
        };
        // An empty text must still yield its one empty section in keep-all
        // mode; stepping here would consume it.
        if !text_empty || mode == SplitMode::SkipEmpty {
            split.step();
        }
        Ok(split)
    }

    fn step(&mut self) {
        while !self.done {
            // Terminal lags one advance behind the failed separator search.
            self.done = self.sep_at_end;
            let from = self.next_start;
            let sep = self.separator.cursor();
            let found = find_forward(self.text.cursor_at(from), &sep, &self.comparer);
            self.sep_at_end = found.is_empty();
            self.next_start = found.end;
            self.section = Span::new(from, found.start);
            if self.mode == SplitMode::SkipEmpty && self.section.is_empty() {
                continue;
            }
            break;
        }
    }

    /// The current section.
    #[inline]
    pub fn section(&self) -> &'t [T::Unit] {
        self.section.of(self.text.storage())
    }

    /// The current section as a span into the text's storage.
    #[inline]
    pub fn section_span(&self) -> Span {
        self.section
    }

    /// Returns `true` once every section has been produced.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.done
    }

    /// Moves to the next section. Once terminal this is a no-op and the
    /// section stays empty.
    #[inline]
    pub fn advance(&mut self) {
        self.step();
    }

    /// Advances `count` times, stopping early at the terminal state.
    ///
    /// Returns `true` if the cursor still rests on a section.
    pub fn advance_by(&mut self, count: usize) -> bool {
        for _ in 0..count {
            if self.done {
                break;
            }
            self.step();
        }
        !self.done
    }

    /// Advances to the last section.
    ///
    /// Returns `true` if the cursor rests on it, `false` if there is none
    /// (skip-empty mode with nothing but empty sections). Calling this
    /// again once there is idempotent.
    pub fn advance_to_last(&mut self) -> bool
    where
        C: Clone,
    {
        if !self.done {
            match self.mode {
                SplitMode::KeepAll => {
                    while !self.done && !self.sep_at_end {
                        self.step();
                    }
                }
                SplitMode::SkipEmpty => {
                    // The cursor only learns a section was last by stepping
                    // into the terminal state, so overshoot and back up.
                    let mut previous = self.clone();
                    while !self.done {
                        previous = self.clone();
                        self.step();
                    }
                    *self = previous;
                }
            }
        }
        !self.done
    }
}

impl<'t, 's, T, S, C> Clone for TokenSplit<'t, 's, T, S, C>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
    C: Clone,
{
    fn clone(&self) -> Self {
        TokenSplit {
            text: self.text,
            separator: self.separator,
            comparer: self.comparer.clone(),
            next_start: self.next_start,
            sep_at_end: self.sep_at_end,
            section: self.section,
            mode: self.mode,
            done: self.done,
        }
    }
}

impl<'t, 's, T, S, C> Iterator for TokenSplit<'t, 's, T, S, C>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
    C: UnitEq<T::Unit, S::Unit>,
{
    type Item = &'t [T::Unit];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let section = self.section();
        self.step();
        Some(section)
    }
}

/// A lazy split cursor ending sections at any unit matching a predicate.
#[derive(Debug)]
pub struct CharSplit<'t, T, P>
where
    T: Text + ?Sized,
{
    text: &'t T,
    is_separator: P,
    /// Position of the last found separator unit (or the text end).
    pos: usize,
    /// The last separator search already hit the end of the text.
    sep_at_end: bool,
    /// The first section has not been scanned past its separator yet.
    is_start: bool,
    section: Span,
    mode: SplitMode,
    done: bool,
}

impl<'t, T, P> CharSplit<'t, T, P>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    /// Creates a split cursor resting on the first section.
    pub fn new(text: &'t T, is_separator: P, mode: SplitMode) -> Self {
        let text_empty = text.cursor().at_end();
        let mut split = CharSplit {
            text,
            is_separator,
            pos: 0,
            sep_at_end: text_empty,
            is_start: true,
            section: Span::empty_at(0),
            mode,
            done: false,
        };
        if !text_empty || mode == SplitMode::SkipEmpty {
            split.step();
        }
        split
    }

    fn step(&mut self) {
        while !self.done {
            self.done = self.sep_at_end;
            if !self.done && !self.is_start {
                // Step over the separator unit itself.
                self.pos += 1;
            } else {
                self.is_start = false;
            }
            let start = self.pos;
            let mut cur = self.text.cursor_at(self.pos);
            while !cur.at_end() && !self.is_separator.test(cur.value()) {
                cur.advance();
            }
            self.pos = cur.position();
            self.sep_at_end = cur.at_end();
            self.section = Span::new(start, self.pos);
            if self.mode == SplitMode::SkipEmpty && self.section.is_empty() {
                continue;
            }
            break;
        }
    }

    /// The current section.
    #[inline]
    pub fn section(&self) -> &'t [T::Unit] {
        self.section.of(self.text.storage())
    }

    /// The current section as a span into the text's storage.
    #[inline]
    pub fn section_span(&self) -> Span {
        self.section
    }

    /// Returns `true` once every section has been produced.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.done
    }

    /// Moves to the next section. Once terminal this is a no-op and the
    /// section stays empty.
    #[inline]
    pub fn advance(&mut self) {
        self.step();
    }

    /// Advances `count` times, stopping early at the terminal state.
    ///
    /// Returns `true` if the cursor still rests on a section.
    pub fn advance_by(&mut self, count: usize) -> bool {
        for _ in 0..count {
            if self.done {
                break;
            }
            self.step();
        }
        !self.done
    }

    /// Advances to the last section.
    ///
    /// Returns `true` if the cursor rests on it, `false` if there is none.
    pub fn advance_to_last(&mut self) -> bool
    where
        P: Clone,
    {
        if !self.done {
            match self.mode {
                SplitMode::KeepAll => {
                    while !self.done && !self.sep_at_end {
                        self.step();
                    }
                }
                SplitMode::SkipEmpty => {
                    let mut previous = self.clone();
                    while !self.done {
                        previous = self.clone();
                        self.step();
                    }
                    *self = previous;
                }
            }
        }
        !self.done
    }
}

impl<'t, T, P> Clone for CharSplit<'t, T, P>
where
    T: Text + ?Sized,
    P: Clone,
{
    fn clone(&self) -> Self {
        CharSplit {
            text: self.text,
            is_separator: self.is_separator.clone(),
            pos: self.pos,
            sep_at_end: self.sep_at_end,
            is_start: self.is_start,
            section: self.section,
            mode: self.mode,
            done: self.done,
        }
    }
}

impl<'t, T, P> Iterator for CharSplit<'t, T, P>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    type Item = &'t [T::Unit];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let section = self.section();
        self.step();
        Some(section)
    }
}

/// Creates a [`TokenSplit`] with a caller-supplied comparer.
#[inline]
pub fn split_token_iter_by<'t, 's, T, S, C>(
    text: &'t T,
    separator: &'s S,
    mode: SplitMode,
    comparer: C,
) -> Result<TokenSplit<'t, 's, T, S, C>>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
    C: UnitEq<T::Unit, S::Unit>,
{
    TokenSplit::new(text, separator, mode, comparer)
}

/// Creates a [`TokenSplit`] matching separators exactly.
#[inline]
pub fn split_token_iter<'t, 's, T, S>(
    text: &'t T,
    separator: &'s S,
    mode: SplitMode,
) -> Result<TokenSplit<'t, 's, T, S, Exact>>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
{
    TokenSplit::new(text, separator, mode, Exact)
}

/// Creates a [`TokenSplit`] matching separators ignoring ASCII case.
#[inline]
pub fn isplit_token_iter<'t, 's, T, S>(
    text: &'t T,
    separator: &'s S,
    mode: SplitMode,
) -> Result<TokenSplit<'t, 's, T, S, FoldCase>>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
{
    TokenSplit::new(text, separator, mode, FoldCase)
}

/// Creates a [`CharSplit`] with a separator predicate.
#[inline]
pub fn split_iter<'t, T, P>(text: &'t T, is_separator: P, mode: SplitMode) -> CharSplit<'t, T, P>
where
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    CharSplit::new(text, is_separator, mode)
}

/// Creates a [`CharSplit`] separating at any unit of `separator_chars`.
#[inline]
pub fn split_chars_iter<'t, 's, T, S>(
    text: &'t T,
    separator_chars: &'s S,
    mode: SplitMode,
) -> CharSplit<'t, T, crate::chartype::AnyOf<'s, S>>
where
    T: Text + ?Sized,
    S: Text + ?Sized,
{
    CharSplit::new(text, crate::chartype::AnyOf::new(separator_chars), mode)
}

/// Splits `text` at `separator` into `out`, matching by `comparer`.
///
/// Sections convert through `From<&[U]>`, so both owned (`Vec<U>`) and
/// borrowed (`&[U]`) section containers work. `out` is cleared first unless
/// `clear` is `false`, in which case sections are appended.
pub fn split_token<'t, O, T, S, C>(
    out: &mut Vec<O>,
    text: &'t T,
    separator: &S,
    mode: SplitMode,
    comparer: C,
    clear: bool,
) -> Result<()>
where
    O: From<&'t [T::Unit]>,
    T: Text + ?Sized,
    S: Text + ?Sized,
    C: UnitEq<T::Unit, S::Unit>,
{
    if clear {
        out.clear();
    }
    for section in TokenSplit::new(text, separator, mode, comparer)? {
        out.push(O::from(section));
    }
    Ok(())
}

/// Splits `text` at any unit matching `is_separator` into `out`.
pub fn split<'t, O, T, P>(
    out: &mut Vec<O>,
    text: &'t T,
    is_separator: P,
    mode: SplitMode,
    clear: bool,
) where
    O: From<&'t [T::Unit]>,
    T: Text + ?Sized,
    P: UnitPred<T::Unit>,
{
    if clear {
        out.clear();
    }
    for section in CharSplit::new(text, is_separator, mode) {
        out.push(O::from(section));
    }
}

/// Splits `text` at any unit contained in `separator_chars` into `out`.
#[inline]
pub fn split_chars<'t, O, T, S>(
    out: &mut Vec<O>,
    text: &'t T,
    separator_chars: &S,
    mode: SplitMode,
    clear: bool,
) where
    O: From<&'t [T::Unit]>,
    T: Text + ?Sized,
    S: Text + ?Sized,
{
    split(out, text, crate::chartype::AnyOf::new(separator_chars), mode, clear);
}
