//! # stringx-core
//!
//! Generic string algorithms over heterogeneous character sequences.
//!
//! The operations missing from a minimal string type (containment, prefix
//! and suffix checks, case conversion, trimming, replacement, splitting,
//! joining), implemented once and usable with three shapes of sequence:
//!
//! - owned growable buffers (`Vec<U>`, and `String` as a `u8` source),
//! - fixed views (`[U]`, `[U; N]`, `str`),
//! - zero-terminated buffers ([`ZStr`], [`ZStrMut`]), where the length is
//!   unknown until a sentinel scan finds it,
//!
//! over 8-, 16-, and 32-bit code units, mixed freely between the two sides
//! of an operation. Everything works at the code-unit level; there is no
//! code-point or grapheme awareness, and the shipped predicates and
//! converters implement C-locale/ASCII semantics with closures or custom
//! impls taking over from there.
//!
//! The unifying mechanism is the terminated-cursor contract in [`cursor`]:
//! each shape adapts into a cursor that knows how its sequence ends
//! (sentinel value or explicit bound), and every algorithm is written once
//! against that contract. Scans over zero-terminated input stop at the
//! first mismatch without ever computing the length.
//!
//! ```
//! use stringx_core as sx;
//!
//! assert!(sx::starts_with("Hello World", "Hello"));
//! assert!(sx::icontains("Hello World", "WORLD"));
//!
//! let replaced = sx::replace_all_copy("aaaa aaaa", "aa", "123").unwrap();
//! assert_eq!(replaced, b"123123 123123");
//!
//! let mut sections: Vec<Vec<u8>> = Vec::new();
//! sx::split_token(&mut sections, "a,b,,c", ",", sx::SplitMode::KeepAll, sx::Exact, true)
//!     .unwrap();
//! assert_eq!(sections, [&b"a"[..], b"b", b"", b"c"]);
//!
//! let mut joined: Vec<u8> = Vec::new();
//! sx::join(&mut joined, &sections, ",", true);
//! assert_eq!(joined, b"a,b,,c");
//! ```

#![deny(unsafe_code)]

pub mod chartype;
pub mod compare;
pub mod convert;
pub mod cursor;
pub mod error;
pub mod join;
pub mod replace;
pub mod scan;
pub mod span;
pub mod split;
pub mod text;
pub mod trim;
pub mod unit;

// Re-export the public surface.
pub use chartype::{
    AnyOf, Converted, Exact, Expanding, FoldCase, IsSpace, ToLower, ToUpper, UnitEq, UnitExpand,
    UnitMap, UnitPred,
};
pub use compare::{
    contains, contains_by, ends_with, ends_with_by, equals, equals_by, icontains, iends_with,
    iequals, istarts_with, starts_with, starts_with_by,
};
pub use convert::{
    character_convert_copy, character_convert_in_place, copy, copy_into, to_lower_copy,
    to_lower_in_place, to_upper_copy, to_upper_in_place,
};
pub use cursor::{BoundCursor, BoundCursorMut, Cursor, CursorMut, RevCursor, ZeroCursor, ZeroCursorMut};
pub use error::{Error, Result};
pub use join::join;
pub use replace::{
    ireplace_all_copy, ireplace_all_in_place, replace_all_copy, replace_all_copy_by,
    replace_all_in_place, replace_all_in_place_by,
};
pub use scan::{find_forward, full_match, prefix_matches};
pub use span::Span;
pub use split::{
    CharSplit, SplitMode, TokenSplit, isplit_token_iter, split, split_chars, split_chars_iter,
    split_iter, split_token, split_token_iter, split_token_iter_by,
};
pub use text::{EditText, Sink, Text, TextMut, ZStr, ZStrMut, string_length};
pub use trim::{
    trim, trim_by, trim_copy, trim_copy_by, trim_end, trim_end_by, trim_end_copy, trim_end_copy_by,
    trim_end_in_place, trim_end_in_place_by, trim_in_place, trim_in_place_by, trim_start,
    trim_start_by, trim_start_copy, trim_start_copy_by, trim_start_in_place,
    trim_start_in_place_by,
};
pub use unit::CodeUnit;
