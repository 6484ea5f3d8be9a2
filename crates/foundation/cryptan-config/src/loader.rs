//! Config file and environment loading
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML.
//! Missing fields keep their defaults.

use crate::{ConfigError, CryptanConfig, Estimator, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_MIN_WORD_LENGTH: &str = "CRYPTAN_MIN_WORD_LENGTH";
pub const ENV_MAX_KEY_LENGTH: &str = "CRYPTAN_MAX_KEY_LENGTH";
pub const ENV_ENGLISH_IC: &str = "CRYPTAN_ENGLISH_IC";
pub const ENV_ESTIMATOR: &str = "CRYPTAN_ESTIMATOR";
pub const ENV_KEY_LENGTH: &str = "CRYPTAN_KEY_LENGTH";

impl CryptanConfig {
    /// Default location (~/.config/cryptan/config.yaml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cryptan").join("config.yaml"))
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Defaults, then the file, then `CRYPTAN_*` variables, then validation.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_MIN_WORD_LENGTH) {
            self.analysis.min_word_length = parse_var(ENV_MIN_WORD_LENGTH, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_KEY_LENGTH) {
            self.analysis.max_key_length = parse_var(ENV_MAX_KEY_LENGTH, &v)?;
        }
        if let Some(v) = lookup(ENV_ENGLISH_IC) {
            self.analysis.english_ic = parse_var(ENV_ENGLISH_IC, &v)?;
        }
        if let Some(v) = lookup(ENV_ESTIMATOR) {
            self.analysis.estimator = Estimator::from_str(&v)?;
        }
        if let Some(v) = lookup(ENV_KEY_LENGTH) {
            self.analysis.key_length = Some(parse_var(ENV_KEY_LENGTH, &v)?);
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "analysis:\n  max_key_length: 12\n  estimator: kasiski").unwrap();

        let config = CryptanConfig::from_file(file.path()).unwrap();
        assert_eq!(config.analysis.max_key_length, 12);
        assert_eq!(config.analysis.estimator, Estimator::Kasiski);
        assert_eq!(config.analysis.min_word_length, 3);
        assert_eq!(config.output.preview_chars, 200);
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"output": {{"json": true}}}}"#).unwrap();

        let config = CryptanConfig::from_file(file.path()).unwrap();
        assert!(config.output.json);
        assert_eq!(config.analysis.english_ic, 0.067);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(matches!(CryptanConfig::load(Some(&missing)), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_overrides() {
        let mut config = CryptanConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (ENV_MAX_KEY_LENGTH, "8"),
                (ENV_ESTIMATOR, "kasiski"),
                (ENV_KEY_LENGTH, "4"),
            ]))
            .unwrap();

        assert_eq!(config.analysis.max_key_length, 8);
        assert_eq!(config.analysis.estimator, Estimator::Kasiski);
        assert_eq!(config.analysis.key_length, Some(4));
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let mut config = CryptanConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_MIN_WORD_LENGTH, "-3")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = CryptanConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: CryptanConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
