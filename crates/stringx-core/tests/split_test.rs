//! Predicate- and character-set splitting.

use stringx_core::{AnyOf, IsSpace, SplitMode, ZStr, split, split_chars, split_chars_iter, split_iter};

fn collect_chars(text: &str, set: &str, mode: SplitMode) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = Vec::new();
    split_chars(&mut out, text, set, mode, true);
    out
}

fn expect_sections(got: Vec<Vec<u8>>, expect: &[&str]) {
    let expect: Vec<Vec<u8>> = expect.iter().map(|s| s.as_bytes().to_vec()).collect();
    assert_eq!(got, expect);
}

#[test]
fn test_split_on_whitespace_predicate() {
    let mut out: Vec<Vec<u8>> = Vec::new();
    split(&mut out, "Hello World", IsSpace, SplitMode::KeepAll, true);
    expect_sections(out, &["Hello", "World"]);

    let mut out: Vec<Vec<u8>> = Vec::new();
    split(&mut out, "one\ttwo\nthree", IsSpace, SplitMode::KeepAll, true);
    expect_sections(out, &["one", "two", "three"]);
}

#[test]
fn test_split_adjacent_separators() {
    expect_sections(
        collect_chars(" a  b ", " ", SplitMode::KeepAll),
        &["", "a", "", "b", ""],
    );
    expect_sections(collect_chars(" a  b ", " ", SplitMode::SkipEmpty), &["a", "b"]);
    expect_sections(collect_chars("::", ":", SplitMode::KeepAll), &["", "", ""]);
    expect_sections(collect_chars("::", ":", SplitMode::SkipEmpty), &[]);
}

#[test]
fn test_split_separator_set() {
    expect_sections(
        collect_chars("a,b;c d", ",; ", SplitMode::KeepAll),
        &["a", "b", "c", "d"],
    );
    expect_sections(collect_chars("a", ",; ", SplitMode::KeepAll), &["a"]);
}

#[test]
fn test_split_empty_text() {
    expect_sections(collect_chars("", ",", SplitMode::KeepAll), &[""]);
    expect_sections(collect_chars("", ",", SplitMode::SkipEmpty), &[]);
}

#[test]
fn test_split_no_separator_found() {
    expect_sections(
        collect_chars("Hello World", ",", SplitMode::KeepAll),
        &["Hello World"],
    );
}

#[test]
fn test_split_closure_predicate() {
    let mut out: Vec<Vec<u8>> = Vec::new();
    split(&mut out, "a1b2c3", |u: u8| u.is_ascii_digit(), SplitMode::KeepAll, true);
    expect_sections(out, &["a", "b", "c", ""]);
}

#[test]
fn test_split_protocol() {
    let mut it = split_iter("a,b", |u: u8| u == b',', SplitMode::KeepAll);
    assert!(!it.at_end());
    assert_eq!(it.section(), b"a");
    it.advance();
    assert_eq!(it.section(), b"b");
    it.advance();
    assert!(it.at_end());
    assert_eq!(it.section(), b"");
    it.advance();
    assert!(it.at_end());
}

#[test]
fn test_split_advance_by_and_to_last() {
    let mut it = split_chars_iter("a,b,c", ",", SplitMode::KeepAll);
    assert!(it.advance_by(2));
    assert_eq!(it.section(), b"c");
    assert!(!it.advance_by(1));

    let mut it = split_chars_iter("a,b,c", ",", SplitMode::KeepAll);
    assert!(it.advance_to_last());
    assert_eq!(it.section(), b"c");
    assert!(it.advance_to_last());
    assert_eq!(it.section(), b"c");

    // Trailing separator: keep-all rests on the empty tail, skip-empty on "b".
    let mut it = split_chars_iter("a,b,", ",", SplitMode::KeepAll);
    assert!(it.advance_to_last());
    assert_eq!(it.section(), b"");

    let mut it = split_chars_iter("a,b,", ",", SplitMode::SkipEmpty);
    assert!(it.advance_to_last());
    assert_eq!(it.section(), b"b");

    let mut it = split_chars_iter(",,,", ",", SplitMode::SkipEmpty);
    assert!(!it.advance_to_last());
}

#[test]
fn test_split_append_mode() {
    let mut out: Vec<Vec<u8>> = vec![b"seed".to_vec()];
    split_chars(&mut out, "x y", " ", SplitMode::KeepAll, false);
    expect_sections(out, &["seed", "x", "y"]);
}

#[test]
fn test_split_borrowed_sections() {
    let text = "alpha beta";
    let mut out: Vec<&[u8]> = Vec::new();
    split(&mut out, text, IsSpace, SplitMode::KeepAll, true);
    assert_eq!(out, [&b"alpha"[..], b"beta"]);
}

#[test]
fn test_split_zero_terminated_text() {
    let z = ZStr::new(b"a b\0c d");
    let mut out: Vec<Vec<u8>> = Vec::new();
    split(&mut out, &z, IsSpace, SplitMode::KeepAll, true);
    expect_sections(out, &["a", "b"]);
}

#[test]
fn test_split_wide_text() {
    let wide: Vec<u32> = stringx_core::copy("a b\tc");
    let mut out: Vec<Vec<u32>> = Vec::new();
    split(&mut out, &wide, IsSpace, SplitMode::KeepAll, true);
    let expect: [Vec<u32>; 3] = [
        stringx_core::copy("a"),
        stringx_core::copy("b"),
        stringx_core::copy("c"),
    ];
    assert_eq!(out, expect);
}

#[test]
fn test_split_any_of_borrowed_set() {
    let set = String::from("-+");
    let pred = AnyOf::new(&set);
    let mut out: Vec<Vec<u8>> = Vec::new();
    split(&mut out, "a-b+c", pred, SplitMode::KeepAll, true);
    expect_sections(out, &["a", "b", "c"]);
}
