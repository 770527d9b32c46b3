//! Levenshtein (edit) distance implementation
//!
//! Minimum total cost of insertions, deletions and substitutions turning one
//! sequence into the other, with a configurable cost per operation.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are the code point counts
//! - Space: O(min(m,n)) using a single rolling DP row

use super::normalize::{chars, fold_pair};
use super::StringMetric;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Levenshtein distance calculator with per-operation costs
///
/// # Parameters
/// - `case_sensitive`: compare without lowercasing (default `true`)
/// - `insert_cost`, `delete_cost`, `replace_cost`: operation costs (default 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Levenshtein {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Cost of inserting a character into the first sequence
    pub insert_cost: usize,
    /// Cost of deleting a character from the first sequence
    pub delete_cost: usize,
    /// Cost of replacing a character
    pub replace_cost: usize,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            insert_cost: 1,
            delete_cost: 1,
            replace_cost: 1,
        }
    }
}

impl Levenshtein {
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
    pub fn with_costs(mut self, insert_cost: usize, delete_cost: usize, replace_cost: usize) -> Self {
        self.insert_cost = insert_cost;
        self.delete_cost = delete_cost;
        self.replace_cost = replace_cost;
        self
    }

    /// Edit distance between `a` and `b`. 0 means identical.
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        self.distance_and_similarity(a, b).0
    }

    /// Edit distance and normalized similarity in one pass.
    ///
    /// ```
    /// use strmetric::algorithms::Levenshtein;
    ///
    /// let (distance, similarity) = Levenshtein::new().distance_and_similarity("book", "brick");
    /// assert_eq!(distance, 3);
    /// assert!((similarity - 0.4).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn distance_and_similarity(&self, a: &str, b: &str) -> (usize, f64) {
        let (a, b) = fold_pair(a, b, self.case_sensitive);
        let a_chars = chars(&a);
        let b_chars = chars(&b);

        let (m, n) = (a_chars.len(), b_chars.len());
        if m == 0 && n == 0 {
            return (0, 1.0);
        }
        if m == 0 {
            return (self.insert_cost.saturating_mul(n), 0.0);
        }
        if n == 0 {
            return (self.delete_cost.saturating_mul(m), 0.0);
        }

        let distance = self.dp_distance(&a_chars, &b_chars);
        let similarity = 1.0 - distance as f64 / m.max(n) as f64;
        (distance, similarity.clamp(0.0, 1.0))
    }

    /// Single-row DP over the shorter sequence. Costs saturate at `usize::MAX`.
    ///
    /// Turning `b` into `a` mirrors turning `a` into `b` with insert and delete
    /// costs swapped, so the shorter side always spans the row.
    fn dp_distance(&self, a: &[char], b: &[char]) -> usize {
        let (source, target, insert_cost, delete_cost) = if b.len() <= a.len() {
            (a, b, self.insert_cost, self.delete_cost)
        } else {
            (b, a, self.delete_cost, self.insert_cost)
        };
        let n_target = target.len();

        let mut row: SmallVec<[usize; 64]> = (0..=n_target).map(|j| j.saturating_mul(insert_cost)).collect();

        for (i, &sc) in source.iter().enumerate() {
            let mut prev = row[0];
            row[0] = (i + 1).saturating_mul(delete_cost);

            for j in 0..n_target {
                let cost = if sc == target[j] { 0 } else { self.replace_cost };
                let deletion = row[j + 1].saturating_add(delete_cost);
                let insertion = row[j].saturating_add(insert_cost);
                let substitution = prev.saturating_add(cost);

                prev = row[j + 1];
                row[j + 1] = substitution.min(deletion).min(insertion);
            }
        }

        row[n_target]
    }
}

impl StringMetric for Levenshtein {
    fn compare(&self, a: &str, b: &str) -> f64 {
        self.distance_and_similarity(a, b).1
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance with unit costs.
#[inline]
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    Levenshtein::new().distance(a, b)
}

/// Normalized Levenshtein similarity with unit costs.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    Levenshtein::new().compare(a, b)
}
