//! Joining a container of sequences with a separator.

use crate::convert::copy_into;
use crate::text::{Sink, Text};

/// Appends every item of `items` to `target`, inserting `separator`
/// between consecutive items. The separator may be empty. `target` is
/// cleared first unless `clear_target` is `false`. Returns `target` for
/// chaining.
///
/// Items and separator may use any unit width; units are converted to the
/// target's width like [`crate::convert::copy`] does.
pub fn join<'t, T, I, S>(target: &'t mut T, items: I, separator: &S, clear_target: bool) -> &'t mut T
where
    T: Sink,
    I: IntoIterator,
    I::Item: Text,
    S: Text + ?Sized,
{
    if clear_target {
        target.clear_units();
    }
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            copy_into(target, separator, false);
        }
        copy_into(target, &item, false);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_basic() {
        let mut out: Vec<u8> = Vec::new();
        join(&mut out, ["Hello", "World"], " ", true);
        assert_eq!(out, b"Hello World");
    }

    #[test]
    fn test_join_container_of_owned() {
        let parts: Vec<Vec<u8>> = vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];
        let mut out: Vec<u8> = Vec::new();
        join(&mut out, &parts, ", ", true);
        assert_eq!(out, b"a, b, c");
    }

    #[test]
    fn test_join_empty_separator_and_items() {
        let mut out: Vec<u8> = Vec::new();
        join(&mut out, ["a", "b"], "", true);
        assert_eq!(out, b"ab");

        join(&mut out, [""; 3], "-", true);
        assert_eq!(out, b"--");

        let none: [&str; 0] = [];
        join(&mut out, none, "-", true);
        assert_eq!(out, b"");
    }

    #[test]
    fn test_join_append_mode() {
        let mut out: Vec<u8> = b"head:".to_vec();
        join(&mut out, ["x", "y"], ",", false);
        assert_eq!(out, b"head:x,y");
    }

    #[test]
    fn test_join_width_conversion() {
        let wide_parts: Vec<Vec<u16>> =
            vec![crate::convert::copy("one"), crate::convert::copy("two")];
        let mut out: Vec<u8> = Vec::new();
        join(&mut out, &wide_parts, " and ", true);
        assert_eq!(out, b"one and two");
    }
}
