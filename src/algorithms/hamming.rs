//! Hamming distance implementation
//!
//! Counts positions where code points differ.
//!
//! # Length Mismatch Behavior
//!
//! Hamming distance is only defined for sequences of equal length. For
//! unequal lengths the [`LengthPolicy`] decides:
//!
//! - **`Truncate`** (default): compare up to the shorter length; the surplus
//!   is ignored.
//! - **`Penalize`**: every surplus position counts as a mismatch and the
//!   longer length is the denominator.
//!
//! Use [`Hamming::strict_distance`] to get an error instead.
//!
//! # Complexity
//! - Time: O(n) where n is the sequence length
//! - Space: O(n) for character vectors

use super::normalize::{chars, fold_pair};
use super::StringMetric;
use crate::error::MetricError;
use serde::{Deserialize, Serialize};

/// How [`Hamming`] treats sequences of different length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Compare the common-length prefix only
    #[default]
    Truncate,
    /// Count the length difference as mismatches
    Penalize,
}

/// Hamming distance calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hamming {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Treatment of unequal lengths
    pub length_policy: LengthPolicy,
}

impl Default for Hamming {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            length_policy: LengthPolicy::Truncate,
        }
    }
}

impl Hamming {
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
    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    /// Number of differing positions under the configured length policy.
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        self.measure(a, b).0
    }

    /// Distance that refuses sequences of different length.
    pub fn strict_distance(&self, a: &str, b: &str) -> Result<usize, MetricError> {
        let (a, b) = fold_pair(a, b, self.case_sensitive);
        let (a_chars, b_chars) = (chars(&a), chars(&b));
        if a_chars.len() != b_chars.len() {
            return Err(MetricError::UnequalLength {
                left: a_chars.len(),
                right: b_chars.len(),
            });
        }
        Ok(mismatches(&a_chars, &b_chars))
    }

    /// Distance and similarity together
    fn measure(&self, a: &str, b: &str) -> (usize, f64) {
        let (a, b) = fold_pair(a, b, self.case_sensitive);
        let (a_chars, b_chars) = (chars(&a), chars(&b));

        let shorter = a_chars.len().min(b_chars.len());
        let longer = a_chars.len().max(b_chars.len());
        if longer == 0 {
            return (0, 1.0);
        }

        let differing = mismatches(&a_chars, &b_chars);
        match self.length_policy {
            LengthPolicy::Truncate => {
                if shorter == 0 {
                    return (0, 0.0);
                }
                (differing, (shorter - differing) as f64 / shorter as f64)
            }
            LengthPolicy::Penalize => {
                let distance = differing + (longer - shorter);
                (distance, 1.0 - distance as f64 / longer as f64)
            }
        }
    }
}

impl StringMetric for Hamming {
    fn compare(&self, a: &str, b: &str) -> f64 {
        self.measure(a, b).1
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Differing positions up to the shorter length
#[inline]
fn mismatches(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).filter(|(ac, bc)| ac != bc).count()
}

/// Calculate Hamming distance between two strings.
/// Returns None if strings have different lengths.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    Hamming::new().strict_distance(a, b).ok()
}
