//! Core string similarity algorithms
//!
//! Each algorithm is a configurable struct implementing [`StringMetric`],
//! plus standalone functions for the common default configurations.

pub mod hamming;
pub mod jaro;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;
pub mod prefix;
pub mod smith_waterman;
pub mod token_set;

pub use hamming::*;
pub use jaro::*;
pub use levenshtein::*;
pub use ngram::*;
pub use normalize::{fold_case, fold_pair};
pub use prefix::*;
pub use smith_waterman::*;
pub use token_set::*;

/// Uniform comparison contract shared by every metric.
///
/// `compare` returns a value between 0.0 (completely different) and 1.0
/// (identical). Two empty inputs always compare as 1.0.
pub trait StringMetric: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> f64;

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}
