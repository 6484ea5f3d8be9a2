//! Configuration types

use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which key-length estimate the pipeline accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    /// Index-of-Coincidence sweep (always yields a length >= 1)
    #[default]
    Friedman,
    /// GCD of repeat distances, falling back to Friedman when it reports 0
    Kasiski,
}

impl FromStr for Estimator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "friedman" => Ok(Estimator::Friedman),
            "kasiski" => Ok(Estimator::Kasiski),
            _ => Err(ConfigError::InvalidValue {
                key: "estimator".into(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimator::Friedman => write!(f, "friedman"),
            Estimator::Kasiski => write!(f, "kasiski"),
        }
    }
}

/// Largest key length the pipeline accepts, forced or swept
pub const KEY_LENGTH_LIMIT: usize = 1024;

/// Tunables of the cryptanalysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Window length for the Kasiski recurrence search
    pub min_word_length: usize,
    /// Exclusive upper bound of the Friedman candidate sweep
    pub max_key_length: usize,
    /// Index of Coincidence of the expected plaintext language
    pub english_ic: f64,
    /// Estimator whose key length is accepted
    pub estimator: Estimator,
    /// Forces the key length, bypassing both estimators
    pub key_length: Option<usize>,
    /// How many recurring words the report keeps
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            max_key_length: 20,
            english_ic: 0.067,
            estimator: Estimator::Friedman,
            key_length: None,
            top_words: 5,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(ConfigError::Invalid("min_word_length must be at least 1".into()));
        }
        // The Friedman sweep covers [2, max_key_length).
        if self.max_key_length < 3 {
            return Err(ConfigError::Invalid(format!(
                "max_key_length must be at least 3, got {}",
                self.max_key_length
            )));
        }
        if self.max_key_length > KEY_LENGTH_LIMIT + 1 {
            return Err(ConfigError::Invalid(format!(
                "max_key_length must be at most {}, got {}",
                KEY_LENGTH_LIMIT + 1,
                self.max_key_length
            )));
        }
        if !(self.english_ic > 0.0 && self.english_ic <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "english_ic must lie in (0, 1], got {}",
                self.english_ic
            )));
        }
        match self.key_length {
            Some(0) => return Err(ConfigError::Invalid("key_length must be at least 1".into())),
            Some(n) if n > KEY_LENGTH_LIMIT => {
                return Err(ConfigError::Invalid(format!(
                    "key_length must be at most {}, got {}",
                    KEY_LENGTH_LIMIT, n
                )))
            }
            _ => {}
        }
        Ok(())
    }
}

/// Presentation settings for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit reports as JSON
    pub json: bool,
    /// Characters of plaintext shown in text reports (0 = everything)
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            preview_chars: 200,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptanConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

impl CryptanConfig {
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CryptanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.max_key_length, 20);
        assert_eq!(config.analysis.english_ic, 0.067);
        assert_eq!(config.analysis.estimator, Estimator::Friedman);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut analysis = AnalysisConfig::default();
        analysis.min_word_length = 0;
        assert!(analysis.validate().is_err());

        let mut analysis = AnalysisConfig::default();
        analysis.max_key_length = 2;
        assert!(analysis.validate().is_err());

        let mut analysis = AnalysisConfig::default();
        analysis.english_ic = 0.0;
        assert!(analysis.validate().is_err());

        let mut analysis = AnalysisConfig::default();
        analysis.key_length = Some(0);
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_key_lengths() {
        let mut analysis = AnalysisConfig::default();
        analysis.key_length = Some(KEY_LENGTH_LIMIT);
        assert!(analysis.validate().is_ok());

        analysis.key_length = Some(usize::MAX);
        assert!(matches!(analysis.validate(), Err(ConfigError::Invalid(_))));

        let mut analysis = AnalysisConfig::default();
        analysis.max_key_length = KEY_LENGTH_LIMIT + 1;
        assert!(analysis.validate().is_ok());

        analysis.max_key_length = usize::MAX;
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_estimator_from_str() {
        assert_eq!("Kasiski".parse::<Estimator>().unwrap(), Estimator::Kasiski);
        assert_eq!(" friedman ".parse::<Estimator>().unwrap(), Estimator::Friedman);
        assert!("babbage".parse::<Estimator>().is_err());
    }
}
