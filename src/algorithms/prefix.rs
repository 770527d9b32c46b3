//! Common prefix of two sequences, measured in code points

/// Longest common prefix of `a` and `b`.
///
/// The result borrows from `a` and always ends on a code point boundary.
///
/// ```
/// use strmetric::algorithms::common_prefix;
///
/// assert_eq!(common_prefix("aab", "aaab"), "aa");
/// assert_eq!(common_prefix("a", "b"), "");
/// ```
#[must_use]
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for ((idx, ac), bc) in a.char_indices().zip(b.chars()) {
        if ac != bc {
            break;
        }
        end = idx + ac.len_utf8();
    }
    &a[..end]
}

/// Number of code points in the common prefix, stopping at `cap`
#[inline]
#[must_use]
pub fn common_prefix_len(a: &str, b: &str, cap: usize) -> usize {
    a.chars()
        .zip(b.chars())
        .take(cap)
        .take_while(|(ac, bc)| ac == bc)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("", ""), "");
        assert_eq!(common_prefix("a", ""), "");
        assert_eq!(common_prefix("", "b"), "");
        assert_eq!(common_prefix("a", "b"), "");
        assert_eq!(common_prefix("ab", "aab"), "a");
        assert_eq!(common_prefix("aab", "ab"), "a");
        assert_eq!(common_prefix("aab", "aaab"), "aa");
        assert_eq!(common_prefix("aaab", "aab"), "aa");
        assert_eq!(common_prefix("abc", "abcdef"), "abc");
    }

    #[test]
    fn test_common_prefix_unicode() {
        assert_eq!(common_prefix("caf\u{00e9}s", "caf\u{00e9}"), "caf\u{00e9}");
        assert_eq!(common_prefix("\u{00e9}a", "\u{00e9}b"), "\u{00e9}");
    }

    #[test]
    fn test_common_prefix_len_cap() {
        assert_eq!(common_prefix_len("charm", "charmed", 4), 4);
        assert_eq!(common_prefix_len("charm", "charmed", 10), 5);
        assert_eq!(common_prefix_len("sort", "shirt", 4), 1);
    }
}
