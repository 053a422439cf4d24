//! Matcher configuration.
//!
//! The defaults reproduce the historical matcher exactly. The threshold,
//! boost and discount were picked by hand and are exposed so they can be
//! tuned without code changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MatchError, Result};
use crate::scoring::DEFAULT_PHONETIC_BOOST;

/// Tunable constants of the matching pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum score for a candidate to count as a direct match
    pub acceptance_threshold: f64,
    /// Added to the score when any query word and name word sound alike
    pub phonetic_boost: f64,
    /// Multiplier applied to matches recovered through token sub-queries
    pub decomposition_discount: f64,
    /// Shortest first/last token (in chars) worth a sub-query
    pub min_token_chars: usize,
    /// Retry with first/last tokens when a multi-word query finds nothing
    pub decompose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.4,
            phonetic_boost: DEFAULT_PHONETIC_BOOST,
            decomposition_discount: 0.9,
            min_token_chars: 3,
            decompose: true,
        }
    }
}

impl MatchConfig {
    /// Load a JSON config; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `acceptance_threshold` and `phonetic_boost` lie in [0, 1]
    /// - `decomposition_discount` lies in (0, 1]
    /// - `min_token_chars` is at least 1
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(MatchError::Config(format!(
                "acceptance_threshold must be within [0, 1], got {}",
                self.acceptance_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.phonetic_boost) {
            return Err(MatchError::Config(format!(
                "phonetic_boost must be within [0, 1], got {}",
                self.phonetic_boost
            )));
        }
        if !(self.decomposition_discount > 0.0 && self.decomposition_discount <= 1.0) {
            return Err(MatchError::Config(format!(
                "decomposition_discount must be within (0, 1], got {}",
                self.decomposition_discount
            )));
        }
        if self.min_token_chars == 0 {
            return Err(MatchError::Config(
                "min_token_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_historical_constants() {
        let config = MatchConfig::default();
        assert!((config.acceptance_threshold - 0.4).abs() < f64::EPSILON);
        assert!((config.phonetic_boost - 0.4).abs() < f64::EPSILON);
        assert!((config.decomposition_discount - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.min_token_chars, 3);
        assert!(config.decompose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let config = MatchConfig {
            acceptance_threshold: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("acceptance_threshold"));
    }

    #[test]
    fn nan_threshold_rejected() {
        let config = MatchConfig {
            acceptance_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_boost_rejected() {
        let config = MatchConfig {
            phonetic_boost: -0.1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("phonetic_boost"));
    }

    #[test]
    fn zero_discount_rejected() {
        let config = MatchConfig {
            decomposition_discount: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("decomposition_discount"));
    }

    #[test]
    fn zero_token_length_rejected() {
        let config = MatchConfig {
            min_token_chars: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_token_chars"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"acceptance_threshold": 0.55}"#).unwrap();
        assert!((config.acceptance_threshold - 0.55).abs() < f64::EPSILON);
        assert_eq!(config.min_token_chars, 3);
        assert!(config.decompose);
    }
}
