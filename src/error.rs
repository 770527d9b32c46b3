//! Error type for the strict (fallible) entry points.
//!
//! Comparisons themselves never fail: invalid settings are coerced to their
//! defaults. `MetricError` is only produced by validation, metric lookup by
//! name, strict Hamming and the pairwise batch helper.

use thiserror::Error;

/// Errors reported by validation and the fallible helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// No metric is registered under this name
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// N-gram size must be at least 1
    #[error("ngram_size must be at least 1, got {0}")]
    InvalidNgramSize(usize),

    /// Smith-Waterman-Gotoh gap penalty above zero
    #[error("gap_penalty should not be positive, got {0}")]
    PositiveGapPenalty(f64),

    /// Substitution function whose minimum exceeds its maximum
    #[error("substitution min ({min}) is greater than max ({max})")]
    InvalidSubstitution { min: f64, max: f64 },

    /// Jaro-Winkler threshold outside [0.0, 1.0]
    #[error("threshold must be in range [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// Jaro-Winkler prefix weight outside [0.0, 0.25]
    #[error("prefix_weight must be in range [0.0, 0.25], got {0}")]
    InvalidPrefixWeight(f64),

    /// Hamming distance requested on sequences of different length
    #[error("sequences have different lengths: {left} and {right}")]
    UnequalLength { left: usize, right: usize },

    /// Pairwise batch inputs of different size
    #[error("inputs must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}
