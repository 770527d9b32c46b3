//! Scoring many comparisons with one metric
//!
//! Inputs at or above [`PARALLEL_THRESHOLD`] items are scored with rayon;
//! smaller inputs stay sequential. Every comparison is independent, so both
//! paths return identical results in input order.

use crate::algorithms::StringMetric;
use crate::error::MetricError;
use rayon::prelude::*;

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is faster
/// due to the overhead of thread pool coordination.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A scored candidate returned by [`extract`]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The candidate text
    pub text: String,
    /// Similarity to the query
    pub score: f64,
    /// Position of the candidate in the input
    pub index: usize,
}

/// Similarity of `query` to each of `choices`, in input order.
pub fn compare_many<M, S>(query: &str, choices: &[S], metric: &M) -> Vec<f64>
where
    M: StringMetric + ?Sized,
    S: AsRef<str> + Sync,
{
    let parallel = choices.len() >= PARALLEL_THRESHOLD;
    tracing::debug!(metric = metric.name(), count = choices.len(), parallel, "compare_many");

    if parallel {
        choices
            .par_iter()
            .map(|s| metric.compare(query, s.as_ref()))
            .collect()
    } else {
        choices
            .iter()
            .map(|s| metric.compare(query, s.as_ref()))
            .collect()
    }
}

/// Similarity of each `left[i]` to `right[i]`.
///
/// Returns [`MetricError::LengthMismatch`] when the slices differ in length.
pub fn compare_pairs<M, S, T>(left: &[S], right: &[T], metric: &M) -> Result<Vec<f64>, MetricError>
where
    M: StringMetric + ?Sized,
    S: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    if left.len() != right.len() {
        return Err(MetricError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let parallel = left.len() >= PARALLEL_THRESHOLD;
    tracing::debug!(metric = metric.name(), count = left.len(), parallel, "compare_pairs");

    let scores = if parallel {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| metric.compare(a.as_ref(), b.as_ref()))
            .collect()
    } else {
        left.iter()
            .zip(right.iter())
            .map(|(a, b)| metric.compare(a.as_ref(), b.as_ref()))
            .collect()
    };
    Ok(scores)
}

/// Best matches for `query` among `choices`.
///
/// Keeps candidates scoring at least `min_similarity`, sorted by descending
/// score (ties keep input order), truncated to `limit`.
///
/// ```
/// use strmetric::algorithms::JaroWinkler;
/// use strmetric::batch::extract;
///
/// let results = extract("appel", &["apple", "apply", "banana"], &JaroWinkler::new(), 2, 0.5);
/// assert_eq!(results[0].text, "apple");
/// assert_eq!(results.len(), 2);
/// ```
pub fn extract<M, S>(
    query: &str,
    choices: &[S],
    metric: &M,
    limit: usize,
    min_similarity: f64,
) -> Vec<MatchResult>
where
    M: StringMetric + ?Sized,
    S: AsRef<str> + Sync,
{
    let scores = compare_many(query, choices, metric);

    let mut results: Vec<MatchResult> = scores
        .into_iter()
        .enumerate()
        .filter(|&(_, score)| score >= min_similarity)
        .map(|(index, score)| MatchResult {
            text: choices[index].as_ref().to_string(),
            score,
            index,
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    results.truncate(limit);
    results
}
