//! Smith-Waterman-Gotoh local alignment similarity
//!
//! Scores the best local alignment of the two sequences under a pluggable
//! [`Substitution`] function and a linear gap penalty, then scales the score by
//! the best score attainable for the shorter sequence.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n) using two rolling rows

use super::normalize::{chars, fold_pair};
use super::StringMetric;
use crate::error::MetricError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Scoring of aligned character pairs.
pub trait Substitution: fmt::Debug + Send + Sync {
    /// Score of aligning `a[a_idx]` with `b[b_idx]`
    fn compare(&self, a: &[char], a_idx: usize, b: &[char], b_idx: usize) -> f64;

    /// Highest score `compare` can return
    fn max(&self) -> f64;

    /// Lowest score `compare` can return
    fn min(&self) -> f64;
}

/// Substitution returning one value for equal characters and another for
/// different ones. `match_value` must be greater than `mismatch_value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMismatch {
    /// Score of equal characters
    pub match_value: f64,
    /// Score of unequal characters
    pub mismatch_value: f64,
}

impl Default for MatchMismatch {
    fn default() -> Self {
        Self {
            match_value: 1.0,
            mismatch_value: -2.0,
        }
    }
}

impl MatchMismatch {
    #[must_use]
    pub fn new(match_value: f64, mismatch_value: f64) -> Self {
        Self {
            match_value,
            mismatch_value,
        }
    }
}

impl Substitution for MatchMismatch {
    #[inline]
    fn compare(&self, a: &[char], a_idx: usize, b: &[char], b_idx: usize) -> f64 {
        if a[a_idx] == b[b_idx] {
            self.match_value
        } else {
            self.mismatch_value
        }
    }

    fn max(&self) -> f64 {
        self.match_value
    }

    fn min(&self) -> f64 {
        self.mismatch_value
    }
}

/// Smith-Waterman-Gotoh similarity calculator
///
/// # Parameters
/// - `case_sensitive`: compare without lowercasing (default `true`)
/// - `gap_penalty`: score added per gap, expected to be <= 0 (default -0.5)
/// - `substitution`: pair scoring; `None` falls back to
///   `MatchMismatch { match_value: 1.0, mismatch_value: -2.0 }`
#[derive(Debug, Clone)]
pub struct SmithWatermanGotoh {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Score penalty for character insertions or deletions. Positive values
    /// are not rejected by `compare`; the score is clamped to [0.0, 1.0].
    pub gap_penalty: f64,
    /// Substitution scoring function
    pub substitution: Option<Arc<dyn Substitution>>,
}

impl Default for SmithWatermanGotoh {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            gap_penalty: -0.5,
            substitution: Some(Arc::new(MatchMismatch::default())),
        }
    }
}

impl SmithWatermanGotoh {
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
    pub fn with_gap_penalty(mut self, gap_penalty: f64) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    #[must_use]
    pub fn with_substitution<S: Substitution + 'static>(mut self, substitution: S) -> Self {
        self.substitution = Some(Arc::new(substitution));
        self
    }

    /// Check the settings `compare` takes on trust.
    pub fn validate(&self) -> Result<(), MetricError> {
        if self.gap_penalty > 0.0 {
            return Err(MetricError::PositiveGapPenalty(self.gap_penalty));
        }
        if let Some(substitution) = &self.substitution {
            let (min, max) = (substitution.min(), substitution.max());
            if min > max {
                return Err(MetricError::InvalidSubstitution { min, max });
            }
        }
        Ok(())
    }

    /// Raw local alignment score: the maximum over all DP cells.
    fn alignment_score(&self, a: &[char], b: &[char], substitution: &dyn Substitution) -> f64 {
        let gap = self.gap_penalty;
        let n = b.len();

        // Index 0 of each row is the zero boundary column
        let mut prev: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];
        let mut curr: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];
        let mut best = 0.0f64;

        for i in 0..a.len() {
            for j in 0..n {
                let cell = 0.0f64
                    .max(prev[j + 1] + gap)
                    .max(curr[j] + gap)
                    .max(prev[j] + substitution.compare(a, i, b, j));
                curr[j + 1] = cell;
                best = best.max(cell);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        best
    }
}

impl StringMetric for SmithWatermanGotoh {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let (a, b) = fold_pair(a, b, self.case_sensitive);
        let a_chars = chars(&a);
        let b_chars = chars(&b);

        let (m, n) = (a_chars.len(), b_chars.len());
        if m == 0 && n == 0 {
            return 1.0;
        }
        if m == 0 || n == 0 {
            return 0.0;
        }

        let default_substitution;
        let substitution: &dyn Substitution = match &self.substitution {
            Some(substitution) => substitution.as_ref(),
            None => {
                tracing::debug!("no substitution function set, using default match/mismatch");
                default_substitution = MatchMismatch::default();
                &default_substitution
            }
        };

        let max_distance = m.min(n) as f64 * substitution.max().max(self.gap_penalty);
        if max_distance <= 0.0 {
            return 0.0;
        }

        // A positive gap penalty can push the raw score past max_distance
        (self.alignment_score(&a_chars, &b_chars, substitution) / max_distance).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "smith_waterman_gotoh"
    }
}

/// Smith-Waterman-Gotoh similarity with default options.
#[inline]
#[must_use]
pub fn smith_waterman_gotoh_similarity(a: &str, b: &str) -> f64 {
    SmithWatermanGotoh::new().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_empty_inputs() {
        let swg = SmithWatermanGotoh::new();
        assert_eq!(swg.compare("", ""), 1.0);
        assert_eq!(swg.compare("test", ""), 0.0);
        assert_eq!(swg.compare("", "test"), 0.0);
    }

    #[test]
    fn test_default_options() {
        assert!(approx_eq(
            smith_waterman_gotoh_similarity("a pink kitten", "a kitten"),
            0.875
        ));
        assert_eq!(smith_waterman_gotoh_similarity("kitten", "kitten"), 1.0);
    }

    #[test]
    fn test_missing_substitution_uses_default() {
        let mut swg = SmithWatermanGotoh::new();
        swg.substitution = None;
        assert!(approx_eq(swg.compare("a pink kitten", "a kitten"), 0.875));
    }

    #[test]
    fn test_custom_options() {
        let mut swg = SmithWatermanGotoh::new();
        swg.case_sensitive = false;
        swg.gap_penalty = -0.1;
        swg.substitution = Some(Arc::new(MatchMismatch::new(1.0, -0.5)));
        assert!(approx_eq(swg.compare("a pink kitten", "A KITTEN"), 0.94));
    }

    #[test]
    fn test_local_alignment_ignores_flanks() {
        // The shorter sequence aligns fully inside the longer one
        assert_eq!(smith_waterman_gotoh_similarity("xxabcxx", "abc"), 1.0);
        assert_eq!(smith_waterman_gotoh_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_match_mismatch() {
        let m = MatchMismatch::new(2.0, 1.0);
        assert_eq!(m.compare(&['a'], 0, &['b'], 0), 1.0);
        assert_eq!(m.compare(&['a'], 0, &['a'], 0), 2.0);
        assert_eq!(m.min(), 1.0);
        assert_eq!(m.max(), 2.0);
    }

    #[test]
    fn test_non_positive_scale_is_zero() {
        let swg = SmithWatermanGotoh::new().with_substitution(MatchMismatch::new(0.0, -1.0));
        assert_eq!(swg.compare("abc", "abc"), 0.0);
    }

    #[test]
    fn test_positive_gap_penalty_clamped() {
        let swg = SmithWatermanGotoh::new().with_gap_penalty(0.5);
        assert_eq!(swg.compare("abcdef", "x"), 1.0);
        assert!(swg.validate().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(SmithWatermanGotoh::new().validate().is_ok());
        assert_eq!(
            SmithWatermanGotoh::new().with_gap_penalty(0.5).validate(),
            Err(MetricError::PositiveGapPenalty(0.5))
        );
        assert_eq!(
            SmithWatermanGotoh::new()
                .with_substitution(MatchMismatch::new(-1.0, 1.0))
                .validate(),
            Err(MetricError::InvalidSubstitution { min: 1.0, max: -1.0 })
        );
    }
}
