//! N-gram generation and multiset intersection
//!
//! N-grams are windows of a fixed number of code points. The multiset
//! intersection consumes matched entries so a repeated n-gram is only counted
//! as often as it occurs on the rarer side; the set-similarity metrics in
//! [`token_set`](super::token_set) are built on it.
//!
//! # N-gram Size
//!
//! A size of 0 is coerced to 1. A sequence shorter than the size yields no
//! n-grams at all.
//!
//! # Complexity
//! - Time: O(m+n) n-gram extractions, each O(size)
//! - Space: O(m) for the first sequence's multiset

use super::normalize::chars;
use ahash::AHashMap;

/// Frequency map from n-gram to occurrence count
pub type NgramMap = AHashMap<String, usize>;

/// Coerce an n-gram size of 0 to 1.
#[inline]
fn coerce_size(size: usize) -> usize {
    size.max(1)
}

#[inline]
fn windows(chars: &[char], size: usize) -> impl Iterator<Item = String> + '_ {
    chars.windows(size).map(|w| w.iter().collect())
}

fn profile(chars: &[char], size: usize) -> (NgramMap, usize) {
    let mut map = NgramMap::new();
    let mut total = 0usize;
    for gram in windows(chars, size) {
        *map.entry(gram).or_insert(0) += 1;
        total += 1;
    }
    (map, total)
}

/// Result of a multiset n-gram intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramIntersection {
    /// N-grams found in both sequences with their shared multiplicity
    pub common: NgramMap,
    /// Sum of the values in `common`
    pub common_count: usize,
    /// Number of n-grams in the first sequence
    pub total_a: usize,
    /// Number of n-grams in the second sequence
    pub total_b: usize,
}

impl NgramIntersection {
    /// Raw n-gram count of both sequences, common or not
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total_a + self.total_b
    }
}

/// Extract the n-grams of `s` in input order.
///
/// ```
/// use strmetric::algorithms::ngrams;
///
/// assert_eq!(ngrams("abbcd", 2), vec!["ab", "bb", "bc", "cd"]);
/// assert!(ngrams("ab", 3).is_empty());
/// ```
#[must_use]
pub fn ngrams(s: &str, size: usize) -> Vec<String> {
    let size = coerce_size(size);
    let chars = chars(s);
    windows(&chars, size).collect()
}

/// Number of n-grams `ngrams(s, size)` would produce
#[must_use]
pub fn ngram_count(s: &str, size: usize) -> usize {
    let size = coerce_size(size);
    let len = s.chars().count();
    if len < size {
        0
    } else {
        len - size + 1
    }
}

/// Frequency map of the n-grams of `s`, with the total number of n-grams.
#[must_use]
pub fn ngram_map(s: &str, size: usize) -> (NgramMap, usize) {
    let size = coerce_size(size);
    profile(&chars(s), size)
}

/// Multiset intersection of the n-grams of `a` and `b`.
///
/// ```
/// use strmetric::algorithms::ngram_intersection;
///
/// let result = ngram_intersection("ababc", "ababd", 2);
/// assert_eq!(result.common_count, 3);
/// assert_eq!(result.common["ab"], 2);
/// assert_eq!(result.total(), 8);
/// ```
#[must_use]
pub fn ngram_intersection(a: &str, b: &str, size: usize) -> NgramIntersection {
    intersect_chars(&chars(a), &chars(b), coerce_size(size))
}

/// Intersection on pre-collected code points; `size` must already be >= 1.
pub(crate) fn intersect_chars(a: &[char], b: &[char], size: usize) -> NgramIntersection {
    // `remaining` is owned by this call and drained as b's n-grams match
    let (mut remaining, total_a) = profile(a, size);

    let mut common = NgramMap::new();
    let mut common_count = 0usize;
    let mut total_b = 0usize;

    for gram in windows(b, size) {
        total_b += 1;
        if let Some(count) = remaining.get_mut(&gram) {
            if *count > 0 {
                *count -= 1;
                common_count += 1;
                *common.entry(gram).or_insert(0) += 1;
            }
        }
    }

    NgramIntersection {
        common,
        common_count,
        total_a,
        total_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, usize)]) -> NgramMap {
        entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_ngrams() {
        assert_eq!(ngrams("abbcd", 2), vec!["ab", "bb", "bc", "cd"]);
        assert_eq!(ngrams("abbcd", 3), vec!["abb", "bbc", "bcd"]);
        assert_eq!(ngrams("abcdef", 0), vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(ngrams("abcdef", 6), vec!["abcdef"]);
        assert!(ngrams("abcdef", 7).is_empty());
        assert!(ngrams("", 0).is_empty());
        assert!(ngrams("", 1).is_empty());
    }

    #[test]
    fn test_ngrams_unicode() {
        assert_eq!(ngrams("ñañ", 2), vec!["ña", "añ"]);
    }

    #[test]
    fn test_ngram_count() {
        assert_eq!(ngram_count("", 0), 0);
        assert_eq!(ngram_count("abbabb", 0), 6);
        assert_eq!(ngram_count("abbabb", 2), 5);
        assert_eq!(ngram_count("abbabb", 6), 1);
        assert_eq!(ngram_count("abbabb", 7), 0);
    }

    #[test]
    fn test_ngram_map() {
        assert_eq!(
            ngram_map("abbcabb", 2),
            (map(&[("ab", 2), ("bb", 2), ("bc", 1), ("ca", 1)]), 6)
        );
        assert_eq!(ngram_map("abbabb", 0), (map(&[("a", 2), ("b", 4)]), 6));
        assert_eq!(
            ngram_map("abbabb", 3),
            (map(&[("abb", 2), ("bba", 1), ("bab", 1)]), 4)
        );
        assert_eq!(ngram_map("abbabb", 7), (NgramMap::new(), 0));
        assert_eq!(ngram_map("", 1), (NgramMap::new(), 0));
    }

    #[test]
    fn test_intersection() {
        let result = ngram_intersection("ababc", "ababd", 2);
        assert_eq!(result.common, map(&[("ab", 2), ("ba", 1)]));
        assert_eq!(result.common_count, 3);
        assert_eq!(result.total(), 8);
    }

    #[test]
    fn test_intersection_consumes_duplicates() {
        let result = ngram_intersection("ababbaa", "aabbaa", 0);
        assert_eq!(result.common, map(&[("a", 4), ("b", 2)]));
        assert_eq!(result.common_count, 6);
        assert_eq!((result.total_a, result.total_b), (7, 6));

        let result = ngram_intersection("aabbaa", "ababbaa", 2);
        assert_eq!(result.common, map(&[("aa", 1), ("ab", 1), ("ba", 1), ("bb", 1)]));
        assert_eq!(result.common_count, 4);
        assert_eq!((result.total_a, result.total_b), (5, 6));
    }

    #[test]
    fn test_intersection_size_exceeds_one_side() {
        let result = ngram_intersection("ababbaa", "aabbaa", 7);
        assert!(result.common.is_empty());
        assert_eq!(result.common_count, 0);
        assert_eq!((result.total_a, result.total_b), (1, 0));

        let result = ngram_intersection("ababbaa", "aabbaa", 8);
        assert_eq!(result, NgramIntersection::default());
    }

    #[test]
    fn test_intersection_empty() {
        assert_eq!(ngram_intersection("", "", 1), NgramIntersection::default());
        assert_eq!(ngram_intersection("", "ab", 1).total_b, 2);
    }
}
