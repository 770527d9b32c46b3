//! Case folding applied before comparison
//!
//! Every metric carries a `case_sensitive` flag. When it is off, both inputs
//! are lowercased with Unicode rules before any counting or indexing happens,
//! so lengths are measured on the folded text.

use smallvec::SmallVec;
use std::borrow::Cow;

/// Code points of a sequence, inline for typical lengths
pub(crate) type Chars = SmallVec<[char; 64]>;

/// Lowercase `s` unless the comparison is case sensitive.
#[inline]
#[must_use]
pub fn fold_case(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Fold both inputs with the same setting
#[inline]
#[must_use]
pub fn fold_pair<'a>(a: &'a str, b: &'a str, case_sensitive: bool) -> (Cow<'a, str>, Cow<'a, str>) {
    (fold_case(a, case_sensitive), fold_case(b, case_sensitive))
}

/// Collect the code points of `s`
#[inline]
pub(crate) fn chars(s: &str) -> Chars {
    s.chars().collect()
}
