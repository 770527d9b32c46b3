//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! # Windowing Conventions
//!
//! Two conventions are available through [`JaroWindow`] and they produce
//! different scores:
//!
//! - [`JaroWindow::Original`]: half-width `max(len_a, len_b) / 2`. Matching
//!   runs independently in both directions, so the two matched sets can
//!   differ in size and the score is not guaranteed to be symmetric.
//! - [`JaroWindow::Standard`]: half-width `max(len_a, len_b) / 2 - 1`
//!   (at least 0). The shorter sequence is matched once into the longer one.
//!
//! [`classic_jaro_similarity`] keeps the first-generation window (half-width
//! `max / 2 - 1` with an exclusive upper bound) for callers that need those
//! exact scores.

use super::normalize::{chars, fold_pair};
use super::prefix::common_prefix_len;
use super::StringMetric;
use crate::error::MetricError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

type Matched = SmallVec<[char; 64]>;

/// Match window convention used by [`Jaro`] and [`JaroWinkler`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JaroWindow {
    /// Half-width `max_len / 2`, independent matching in both directions
    #[default]
    Original,
    /// Half-width `max(0, max_len / 2 - 1)`, single pass from the shorter side
    Standard,
}

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window width
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jaro {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Match window convention
    pub window: JaroWindow,
}

impl Default for Jaro {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            window: JaroWindow::Original,
        }
    }
}

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: JaroWindow) -> Self {
        self.window = window;
        self
    }
}

impl StringMetric for Jaro {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let (a, b) = fold_pair(a, b, self.case_sensitive);
        jaro_with_window(&a, &b, self.window)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
///
/// # Parameters
/// - `threshold`: Jaro scores below it are returned without the prefix bonus
///   (default 0.0, always apply)
/// - `prefix_weight`: How much to boost prefix matches (0.0-0.25, typically 0.1)
/// - `max_prefix_length`: Maximum prefix length to consider (typically 4)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinkler {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Minimum Jaro score for the prefix bonus to apply
    pub threshold: f64,
    /// Match window convention of the underlying Jaro score
    pub window: JaroWindow,
    /// Prefix weight (typically 0.1)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            threshold: 0.0,
            window: JaroWindow::Original,
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: JaroWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        if !(0.0..=0.25).contains(&weight) {
            tracing::warn!(weight, "prefix_weight clamped to [0.0, 0.25]");
        }
        self.prefix_weight = weight.clamp(0.0, 0.25); // Max 0.25 to keep score <= 1.0
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }

    /// Check the settings `compare` would otherwise clamp or take on trust.
    pub fn validate(&self) -> Result<(), MetricError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MetricError::InvalidThreshold(self.threshold));
        }
        if !(0.0..=0.25).contains(&self.prefix_weight) {
            return Err(MetricError::InvalidPrefixWeight(self.prefix_weight));
        }
        Ok(())
    }
}

impl StringMetric for JaroWinkler {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let (a, b) = fold_pair(a, b, self.case_sensitive);

        let jaro_sim = jaro_with_window(&a, &b, self.window);
        if jaro_sim < self.threshold {
            return jaro_sim;
        }

        // Fields are public, so a weight set directly is clamped here too
        let prefix_weight = self.prefix_weight.clamp(0.0, 0.25);
        let prefix_len = common_prefix_len(&a, &b, self.max_prefix_length);

        jaro_sim + (prefix_len as f64 * prefix_weight * (1.0 - jaro_sim))
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Calculate Jaro similarity with the original window convention.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    jaro_with_window(a, b, JaroWindow::Original)
}

/// Calculate Jaro-Winkler similarity with default parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    JaroWinkler::new().compare(a, b)
}

/// Case-sensitive Jaro similarity with an explicit window convention
#[must_use]
pub fn jaro_with_window(a: &str, b: &str, window: JaroWindow) -> f64 {
    let a_chars = chars(a);
    let b_chars = chars(b);

    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }
    if a_chars == b_chars {
        return 1.0;
    }

    match window {
        JaroWindow::Original => jaro_original(&a_chars, &b_chars),
        JaroWindow::Standard => jaro_standard(&a_chars, &b_chars),
    }
}

// ============================================================================
// Original convention
// ============================================================================

/// Characters of `a` matched in `b` within `limit` positions on either side.
/// Each position of `b` is consumed by at most one match.
fn matching_chars(a: &[char], b: &[char], limit: usize) -> Matched {
    let mut b_used: SmallVec<[bool; 64]> = smallvec::smallvec![false; b.len()];
    let mut common = Matched::new();

    for (i, &ac) in a.iter().enumerate() {
        let start = i.saturating_sub(limit);
        let end = (i + limit + 1).min(b.len());

        for j in start..end {
            if b_used[j] || ac != b[j] {
                continue;
            }
            common.push(b[j]);
            b_used[j] = true;
            break;
        }
    }

    common
}

/// Pairwise differences between two matched sequences, up to the shorter one
fn transpositions(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).filter(|(ac, bc)| ac != bc).count()
}

/// Independent matching in both directions, combined into one score
fn two_way_score(a: &[char], b: &[char], a_matches: &[char], b_matches: &[char]) -> f64 {
    let a_count = a_matches.len();
    let b_count = b_matches.len();
    if a_count == 0 || b_count == 0 {
        return 0.0;
    }

    // Half the transpositions, rounded down
    let half = transpositions(a_matches, b_matches) / 2;

    (a_count as f64 / a.len() as f64
        + b_count as f64 / b.len() as f64
        + (a_count - half) as f64 / a_count as f64)
        / 3.0
}

fn jaro_original(a: &[char], b: &[char]) -> f64 {
    let limit = a.len().max(b.len()) / 2;
    let a_matches = matching_chars(a, b, limit);
    let b_matches = matching_chars(b, a, limit);
    two_way_score(a, b, &a_matches, &b_matches)
}

// ============================================================================
// Standard convention
// ============================================================================

/// Match the shorter sequence into the longer one.
/// Returns the match count and the number of half transpositions.
fn standard_matches(a: &[char], b: &[char]) -> (usize, usize) {
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

    let range = (longer.len() / 2).saturating_sub(1);

    let mut shorter_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; shorter.len()];
    let mut longer_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; longer.len()];
    let mut matches = 0usize;

    for (i, &sc) in shorter.iter().enumerate() {
        let start = i.saturating_sub(range);
        let end = (i + range + 1).min(longer.len());

        for j in start..end {
            if longer_matched[j] || sc != longer[j] {
                continue;
            }
            shorter_matched[i] = true;
            longer_matched[j] = true;
            matches += 1;
            break;
        }
    }

    let shorter_seq = shorter
        .iter()
        .zip(shorter_matched.iter())
        .filter_map(|(&c, &m)| m.then_some(c));
    let longer_seq = longer
        .iter()
        .zip(longer_matched.iter())
        .filter_map(|(&c, &m)| m.then_some(c));

    let half_transpositions = shorter_seq.zip(longer_seq).filter(|(s, l)| s != l).count();

    (matches, half_transpositions)
}

fn jaro_standard(a: &[char], b: &[char]) -> f64 {
    let (matches, half_transpositions) = standard_matches(a, b);
    if matches == 0 {
        return 0.0;
    }

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - half_transpositions as f64 / 2.0) / m) / 3.0
}

// ============================================================================
// Classic variant
// ============================================================================

/// Matching with half-width `max / 2 - 1` and an exclusive upper bound.
/// The half-width is -1 when the longer sequence has a single code point.
fn classic_matching_chars(a: &[char], b: &[char], limit: isize) -> Matched {
    let mut b_used: SmallVec<[bool; 64]> = smallvec::smallvec![false; b.len()];
    let mut common = Matched::new();
    let b_len = b.len() as isize;

    for (i, &ac) in a.iter().enumerate() {
        let i = i as isize;
        let start = (i - limit).max(0);
        let end = (i + limit).min(b_len);

        for j in start..end {
            let j = j as usize;
            if b_used[j] || ac != b[j] {
                continue;
            }
            common.push(b[j]);
            b_used[j] = true;
            break;
        }
    }

    common
}

/// Jaro similarity with the first-generation window.
///
/// ```
/// use strmetric::algorithms::classic_jaro_similarity;
///
/// assert!((classic_jaro_similarity("sort", "shirt") - 0.6167).abs() < 0.001);
/// ```
#[must_use]
pub fn classic_jaro_similarity(a: &str, b: &str) -> f64 {
    let a_chars = chars(a);
    let b_chars = chars(b);

    if a_chars.is_empty() && b_chars.is_empty() {
        return 1.0;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }
    if a_chars == b_chars {
        return 1.0;
    }

    let limit = (a_chars.len().max(b_chars.len()) / 2) as isize - 1;
    let a_matches = classic_matching_chars(&a_chars, &b_chars, limit);
    let b_matches = classic_matching_chars(&b_chars, &a_chars, limit);
    two_way_score(&a_chars, &b_chars, &a_matches, &b_matches)
}

/// Jaro-Winkler on top of [`classic_jaro_similarity`], always applying the
/// prefix bonus (weight 0.1, prefix capped at 4).
#[must_use]
pub fn classic_jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let jaro_sim = classic_jaro_similarity(a, b);
    let prefix_len = common_prefix_len(a, b, 4);
    jaro_sim + (0.1 * prefix_len as f64 * (1.0 - jaro_sim))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    fn standard() -> Jaro {
        Jaro::new().with_window(JaroWindow::Standard)
    }

    #[test]
    fn test_jaro_basic() {
        let jaro = Jaro::new();
        assert_eq!(jaro.compare("", ""), 1.0);
        assert_eq!(jaro.compare("test", ""), 0.0);
        assert_eq!(jaro.compare("", "test"), 0.0);
        assert_eq!(jaro.compare("a", "b"), 0.0);
        assert_eq!(jaro.compare("abc", "abc"), 1.0);
    }

    #[test]
    fn test_jaro_original() {
        let mut jaro = Jaro::new();
        assert!(approx_eq(jaro.compare("sort", "shirt"), 0.78));
        assert!(approx_eq(jaro.compare("sort", "report"), 0.64));
        assert!(approx_eq(jaro.compare("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro.compare("DWAYNE", "DUANE"), 0.822));

        jaro.case_sensitive = false;
        assert!(approx_eq(jaro.compare("sort", "SHIRT"), 0.78));
    }

    #[test]
    fn test_jaro_standard() {
        let jaro = standard();
        assert!(approx_eq(jaro.compare("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro.compare("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro.compare("hello", "hallo"), 0.866));
        assert!(approx_eq(jaro.compare("sort", "shirt"), 0.783));
        assert_eq!(jaro.compare("a", "b"), 0.0);
    }

    #[test]
    fn test_conventions_differ() {
        // Two code points: the standard window has width 0, the original 1
        let original = Jaro::new().compare("ab", "ba");
        let standard = standard().compare("ab", "ba");
        assert!(approx_eq(original, 0.833));
        assert_eq!(standard, 0.0);
    }

    #[test]
    fn test_standard_symmetric_for_unequal_lengths() {
        let jaro = standard();
        assert_eq!(jaro.compare("DWAYNE", "DUANE"), jaro.compare("DUANE", "DWAYNE"));
    }

    #[test]
    fn test_jaro_unicode() {
        let score = jaro_similarity("cafe", "caf\u{00e9}");
        assert!(approx_eq(score, 0.833));
        assert_eq!(jaro_similarity("日本語", "日本語"), 1.0);
    }

    #[test]
    fn test_jaro_winkler() {
        let mut jw = JaroWinkler::new();
        assert_eq!(jw.compare("", ""), 1.0);
        assert_eq!(jw.compare("test", ""), 0.0);
        assert!(approx_eq(jw.compare("sort", "shirt"), 0.80));
        assert!(approx_eq(jw.compare("charm", "charmed"), 0.94));

        jw.case_sensitive = false;
        assert!(approx_eq(jw.compare("sort", "SHIRT"), 0.80));
    }

    #[test]
    fn test_jaro_winkler_boost() {
        let jaro = jaro_similarity("MARTHA", "MARHTA");
        let jaro_winkler = jaro_winkler_similarity("MARTHA", "MARHTA");
        assert!(jaro_winkler > jaro);
        assert!(approx_eq(jaro_winkler, 0.961));
    }

    #[test]
    fn test_jaro_winkler_threshold() {
        let jw = JaroWinkler::new().with_threshold(0.8);
        // Jaro 0.78 is below the threshold, no bonus
        assert!(approx_eq(jw.compare("sort", "shirt"), 0.783));
        // Jaro 0.905 passes
        assert!(approx_eq(jw.compare("charm", "charmed"), 0.943));
    }

    #[test]
    fn test_jaro_winkler_prefix_weight_clamped() {
        let jw = JaroWinkler::new().with_prefix_weight(0.5);
        assert_eq!(jw.prefix_weight, 0.25);

        let mut raw = JaroWinkler::new();
        raw.prefix_weight = 0.5;
        assert!(raw.compare("charm", "charmed") <= 1.0);
        assert_eq!(raw.validate(), Err(MetricError::InvalidPrefixWeight(0.5)));
    }

    #[test]
    fn test_jaro_winkler_validate_threshold() {
        assert!(JaroWinkler::new().validate().is_ok());
        assert_eq!(
            JaroWinkler::new().with_threshold(1.5).validate(),
            Err(MetricError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn test_classic_variant() {
        assert!(approx_eq(classic_jaro_similarity("sort", "shirt"), 0.62));
        assert!(approx_eq(classic_jaro_winkler_similarity("sort", "shirt"), 0.655));
        assert_eq!(classic_jaro_similarity("", ""), 1.0);
        assert_eq!(classic_jaro_similarity("a", ""), 0.0);
        assert_eq!(classic_jaro_similarity("ab", "ab"), 1.0);
        // Single code point windows are empty
        assert_eq!(classic_jaro_similarity("a", "b"), 0.0);
    }
}
