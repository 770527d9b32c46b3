//! Runtime metric selection
//!
//! [`MetricConfig`] names a metric family together with its settings. It can
//! be deserialized from any serde format, parsed from a bare metric name, and
//! turned into a boxed [`StringMetric`] so the algorithm becomes a runtime
//! value.
//!
//! ```
//! use strmetric::config::MetricConfig;
//! use strmetric::similarity;
//!
//! let metric = "jaro-winkler".parse::<MetricConfig>().unwrap().build();
//! assert!(similarity("charm", "charmed", metric.as_ref()) > 0.9);
//! ```

use crate::algorithms::{
    Hamming, Jaccard, Jaro, JaroWinkler, Levenshtein, MatchMismatch, OverlapCoefficient,
    SmithWatermanGotoh, SorensenDice, StringMetric,
};
use crate::error::MetricError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Serializable settings of [`SmithWatermanGotoh`].
///
/// The substitution is limited to [`MatchMismatch`]; custom substitution
/// functions are set on the metric directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmithWatermanGotohConfig {
    /// Whether the comparison is case sensitive
    pub case_sensitive: bool,
    /// Score penalty for character insertions or deletions
    pub gap_penalty: f64,
    /// Substitution scoring
    pub substitution: MatchMismatch,
}

impl Default for SmithWatermanGotohConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            gap_penalty: -0.5,
            substitution: MatchMismatch::default(),
        }
    }
}

impl From<SmithWatermanGotohConfig> for SmithWatermanGotoh {
    fn from(config: SmithWatermanGotohConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
            gap_penalty: config.gap_penalty,
            substitution: Some(Arc::new(config.substitution)),
        }
    }
}

/// A metric family and its settings.
///
/// Serialized with a `"metric"` tag, e.g.
/// `{"metric": "sorensen_dice", "ngram_size": 3}`. Omitted fields take the
/// family defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricConfig {
    Hamming(Hamming),
    Jaccard(Jaccard),
    Jaro(Jaro),
    JaroWinkler(JaroWinkler),
    Levenshtein(Levenshtein),
    OverlapCoefficient(OverlapCoefficient),
    SmithWatermanGotoh(SmithWatermanGotohConfig),
    SorensenDice(SorensenDice),
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::Levenshtein(Levenshtein::default())
    }
}

impl MetricConfig {
    /// Names accepted by [`FromStr`], in canonical form
    pub const NAMES: [&'static str; 8] = [
        "hamming",
        "jaccard",
        "jaro",
        "jaro_winkler",
        "levenshtein",
        "overlap_coefficient",
        "smith_waterman_gotoh",
        "sorensen_dice",
    ];

    /// Canonical name of the configured family
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamming(_) => "hamming",
            Self::Jaccard(_) => "jaccard",
            Self::Jaro(_) => "jaro",
            Self::JaroWinkler(_) => "jaro_winkler",
            Self::Levenshtein(_) => "levenshtein",
            Self::OverlapCoefficient(_) => "overlap_coefficient",
            Self::SmithWatermanGotoh(_) => "smith_waterman_gotoh",
            Self::SorensenDice(_) => "sorensen_dice",
        }
    }

    /// Instantiate the configured metric.
    #[must_use]
    pub fn build(&self) -> Box<dyn StringMetric> {
        match *self {
            Self::Hamming(m) => Box::new(m),
            Self::Jaccard(m) => Box::new(m),
            Self::Jaro(m) => Box::new(m),
            Self::JaroWinkler(m) => Box::new(m),
            Self::Levenshtein(m) => Box::new(m),
            Self::OverlapCoefficient(m) => Box::new(m),
            Self::SmithWatermanGotoh(config) => Box::new(SmithWatermanGotoh::from(config)),
            Self::SorensenDice(m) => Box::new(m),
        }
    }

    /// Strict check of settings that comparisons would otherwise coerce.
    pub fn validate(&self) -> Result<(), MetricError> {
        match self {
            Self::Hamming(_) | Self::Jaro(_) | Self::Levenshtein(_) => Ok(()),
            Self::Jaccard(m) => m.validate(),
            Self::OverlapCoefficient(m) => m.validate(),
            Self::SorensenDice(m) => m.validate(),
            Self::JaroWinkler(m) => m.validate(),
            Self::SmithWatermanGotoh(config) => SmithWatermanGotoh::from(*config).validate(),
        }
    }
}

impl FromStr for MetricConfig {
    type Err = MetricError;

    /// Default configuration for a metric name. Case, `-` and `_` are ignored,
    /// so `"Jaro-Winkler"`, `"jaro_winkler"` and `"jarowinkler"` are equal.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let config = match key.as_str() {
            "hamming" => Self::Hamming(Hamming::default()),
            "jaccard" => Self::Jaccard(Jaccard::default()),
            "jaro" => Self::Jaro(Jaro::default()),
            "jarowinkler" => Self::JaroWinkler(JaroWinkler::default()),
            "levenshtein" => Self::Levenshtein(Levenshtein::default()),
            "overlap" | "overlapcoefficient" => Self::OverlapCoefficient(OverlapCoefficient::default()),
            "smithwatermangotoh" | "swg" => Self::SmithWatermanGotoh(SmithWatermanGotohConfig::default()),
            "sorensendice" | "dice" => Self::SorensenDice(SorensenDice::default()),
            _ => return Err(MetricError::UnknownMetric(name.to_string())),
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{JaroWindow, LengthPolicy};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_parse_names() {
        for name in MetricConfig::NAMES {
            let config: MetricConfig = name.parse().unwrap();
            assert_eq!(config.name(), name);
            assert_eq!(config.build().name(), name);
        }
        assert_eq!(
            "Jaro-Winkler".parse::<MetricConfig>().unwrap(),
            MetricConfig::JaroWinkler(JaroWinkler::default())
        );
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "cosine".parse::<MetricConfig>(),
            Err(MetricError::UnknownMetric("cosine".to_string()))
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: MetricConfig =
            serde_json::from_str(r#"{"metric": "sorensen_dice", "ngram_size": 3, "case_sensitive": false}"#)
                .unwrap();
        assert_eq!(
            config,
            MetricConfig::SorensenDice(SorensenDice::new().with_ngram_size(3).with_case_sensitive(false))
        );
        assert!(approx_eq(config.build().compare("night", "ALRIGHT"), 0.5));
    }

    #[test]
    fn test_deserialize_enums() {
        let config: MetricConfig =
            serde_json::from_str(r#"{"metric": "jaro", "window": "standard"}"#).unwrap();
        assert_eq!(config, MetricConfig::Jaro(Jaro::new().with_window(JaroWindow::Standard)));

        let config: MetricConfig =
            serde_json::from_str(r#"{"metric": "hamming", "length_policy": "penalize"}"#).unwrap();
        assert!(approx_eq(config.build().compare("once", "one"), 0.5));
        assert_eq!(
            config,
            MetricConfig::Hamming(Hamming::new().with_length_policy(LengthPolicy::Penalize))
        );
    }

    #[test]
    fn test_smith_waterman_config() {
        let config: MetricConfig = serde_json::from_str(
            r#"{
                "metric": "smith_waterman_gotoh",
                "case_sensitive": false,
                "gap_penalty": -0.1,
                "substitution": {"match_value": 1.0, "mismatch_value": -0.5}
            }"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert!(approx_eq(config.build().compare("a pink kitten", "A KITTEN"), 0.94));
    }

    #[test]
    fn test_validate() {
        let config = MetricConfig::Jaccard(Jaccard::new().with_ngram_size(0));
        assert_eq!(config.validate(), Err(MetricError::InvalidNgramSize(0)));

        let config = MetricConfig::SmithWatermanGotoh(SmithWatermanGotohConfig {
            gap_penalty: 1.0,
            ..Default::default()
        });
        assert_eq!(config.validate(), Err(MetricError::PositiveGapPenalty(1.0)));

        assert!(MetricConfig::default().validate().is_ok());
    }
}
