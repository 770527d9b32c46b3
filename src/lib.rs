//! strmetric - String similarity metrics behind one comparison contract
//!
//! Every metric implements [`StringMetric`], so the algorithm can be chosen at
//! runtime and passed to [`similarity`] without changing the call site.
//!
//! # Features
//! - Levenshtein with configurable insert/delete/replace costs
//! - Smith-Waterman-Gotoh local alignment with pluggable substitution scoring
//! - Jaro and Jaro-Winkler with two windowing conventions
//! - Hamming with an explicit policy for unequal lengths
//! - Jaccard, Sorensen-Dice and Overlap Coefficient over n-gram multisets
//! - Serde-deserializable metric selection and parallel batch scoring
//!
//! All lengths and indices are Unicode code points, never bytes.
//!
//! # Example
//! ```
//! use strmetric::algorithms::{JaroWinkler, Levenshtein, SorensenDice};
//! use strmetric::{similarity, StringMetric};
//!
//! let metrics: Vec<Box<dyn StringMetric>> = vec![
//!     Box::new(Levenshtein::new()),
//!     Box::new(JaroWinkler::new()),
//!     Box::new(SorensenDice::new()),
//! ];
//! for metric in &metrics {
//!     let score = similarity("night", "nacht", metric.as_ref());
//!     assert!((0.0..=1.0).contains(&score));
//! }
//! ```

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod error;

pub use algorithms::{common_prefix, StringMetric};
pub use config::MetricConfig;
pub use error::MetricError;

/// Similarity of `a` and `b` under `metric`, between 0.0 and 1.0.
///
/// ```
/// use strmetric::algorithms::Levenshtein;
/// use strmetric::similarity;
///
/// assert_eq!(similarity("", "", &Levenshtein::new()), 1.0);
/// assert!((similarity("book", "brick", &Levenshtein::new()) - 0.4).abs() < 1e-9);
/// ```
#[inline]
pub fn similarity<M: StringMetric + ?Sized>(a: &str, b: &str, metric: &M) -> f64 {
    metric.compare(a, b)
}
