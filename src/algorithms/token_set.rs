//! N-gram set similarity: Jaccard, Sorensen-Dice and Overlap Coefficient
//!
//! All three fold case (when configured), intersect the two n-gram multisets
//! and combine the common count with the per-side totals. An n-gram size of 0
//! is coerced to 2.
//!
//! # Complexity
//! - Time: O(m+n) n-gram extractions
//! - Space: O(m) for the first sequence's multiset

use super::ngram::{intersect_chars, NgramIntersection};
use super::normalize::{chars, fold_pair};
use super::StringMetric;
use crate::error::MetricError;
use serde::{Deserialize, Serialize};

/// Default n-gram size for the set metrics
pub const DEFAULT_NGRAM_SIZE: usize = 2;

#[inline]
fn coerce_size(ngram_size: usize) -> usize {
    if ngram_size == 0 {
        tracing::debug!("ngram_size 0 coerced to {}", DEFAULT_NGRAM_SIZE);
        DEFAULT_NGRAM_SIZE
    } else {
        ngram_size
    }
}

/// Outcome of the shared preamble of the set metrics
enum Prepared {
    /// Score decided before counting n-grams
    Done(f64),
    /// Intersection, code point lengths of both sides and the n-gram size used
    Counted {
        result: NgramIntersection,
        a_len: usize,
        b_len: usize,
        size: usize,
    },
}

/// Fold, handle the empty and identical cases, and intersect.
fn prepare(a: &str, b: &str, case_sensitive: bool, ngram_size: usize) -> Prepared {
    let (a, b) = fold_pair(a, b, case_sensitive);
    let (a_chars, b_chars) = (chars(&a), chars(&b));

    if a_chars.is_empty() && b_chars.is_empty() {
        return Prepared::Done(1.0);
    }
    if a_chars == b_chars {
        return Prepared::Done(1.0);
    }

    let size = coerce_size(ngram_size);
    let result = intersect_chars(&a_chars, &b_chars, size);
    Prepared::Counted {
        result,
        a_len: a_chars.len(),
        b_len: b_chars.len(),
        size,
    }
}

fn check_size(ngram_size: usize) -> Result<(), MetricError> {
    if ngram_size == 0 {
        return Err(MetricError::InvalidNgramSize(ngram_size));
    }
    Ok(())
}

macro_rules! ngram_metric {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Whether the comparison is case sensitive
            pub case_sensitive: bool,
            /// Size (in code points) of the compared n-grams
            pub ngram_size: usize,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    case_sensitive: true,
                    ngram_size: DEFAULT_NGRAM_SIZE,
                }
            }
        }

        impl $name {
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
            pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
                self.ngram_size = ngram_size;
                self
            }

            /// Reject an n-gram size that `compare` would coerce.
            pub fn validate(&self) -> Result<(), MetricError> {
                check_size(self.ngram_size)
            }
        }
    };
}

ngram_metric!(
    /// Jaccard index over n-gram multisets: `common / (total - common)`
    Jaccard
);

ngram_metric!(
    /// Sorensen-Dice coefficient over n-gram multisets: `2 * common / total`
    SorensenDice
);

ngram_metric!(
    /// Overlap coefficient over n-gram multisets: `common / min(total_a, total_b)`.
    ///
    /// A sequence fully contained in the other scores 1.0 regardless of the
    /// size difference.
    OverlapCoefficient
);

impl StringMetric for Jaccard {
    fn compare(&self, a: &str, b: &str) -> f64 {
        match prepare(a, b, self.case_sensitive, self.ngram_size) {
            Prepared::Done(score) => score,
            Prepared::Counted { result, .. } => {
                let union = result.total() - result.common_count;
                if union == 0 {
                    return 0.0;
                }
                result.common_count as f64 / union as f64
            }
        }
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

impl StringMetric for SorensenDice {
    fn compare(&self, a: &str, b: &str) -> f64 {
        match prepare(a, b, self.case_sensitive, self.ngram_size) {
            Prepared::Done(score) => score,
            Prepared::Counted {
                result,
                a_len,
                b_len,
                size,
            } => {
                // No n-grams on one side
                if a_len < size || b_len < size {
                    return 0.0;
                }
                2.0 * result.common_count as f64 / result.total() as f64
            }
        }
    }

    fn name(&self) -> &'static str {
        "sorensen_dice"
    }
}

impl StringMetric for OverlapCoefficient {
    fn compare(&self, a: &str, b: &str) -> f64 {
        match prepare(a, b, self.case_sensitive, self.ngram_size) {
            Prepared::Done(score) => score,
            Prepared::Counted { result, .. } => {
                let smaller = result.total_a.min(result.total_b);
                if smaller == 0 {
                    return 0.0;
                }
                result.common_count as f64 / smaller as f64
            }
        }
    }

    fn name(&self) -> &'static str {
        "overlap_coefficient"
    }
}

/// Jaccard similarity of bigram multisets.
#[inline]
#[must_use]
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    Jaccard::new().compare(a, b)
}

/// Sorensen-Dice similarity of bigram multisets.
#[inline]
#[must_use]
pub fn sorensen_dice_similarity(a: &str, b: &str) -> f64 {
    SorensenDice::new().compare(a, b)
}

/// Overlap coefficient of bigram multisets.
#[inline]
#[must_use]
pub fn overlap_coefficient(a: &str, b: &str) -> f64 {
    OverlapCoefficient::new().compare(a, b)
}
