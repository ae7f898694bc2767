//! The two recoverable fault conditions.
//!
//! Both are argument-validation failures raised before any scanning or
//! mutation starts; every other contract violation (missing sentinel,
//! cursor advanced past its end, spans applied to the wrong storage) is
//! deliberately unchecked on the release path and surfaces, if at all, as a
//! slice-bounds panic.

use thiserror::Error;

/// Errors returned by the fallible entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `replace_all` was given an empty pattern, which would match at every
    /// position.
    #[error("the pattern to replace must not be empty")]
    EmptyPattern,

    /// A token split was given an empty separator, which would produce
    /// infinitely many empty sections.
    #[error("the split separator token must not be empty")]
    EmptySeparator,
}

/// Result alias for the fallible entry points.
pub type Result<T> = core::result::Result<T, Error>;
