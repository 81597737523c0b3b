use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::grammar::GrammarConfig;
use self::output::{LogFormat, OutputConfig, OutputFormat};

pub mod dictionary;
pub mod grammar;
pub mod output;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub grammar: GrammarConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load from a JSON file (defaults when `path` is `None`), then apply
    /// environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply `NIHONGO_*` overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("NIHONGO_DATASET") {
            self.dictionary.dataset_path = Some(path);
        }

        if let Some(value) = lookup("NIHONGO_MAX_MATCHES") {
            self.dictionary.max_reverse_matches = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "NIHONGO_MAX_MATCHES",
                    value,
                })?;
        }

        if let Some(value) = lookup("NIHONGO_CONTEXT_RADIUS") {
            self.grammar.context_radius = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "NIHONGO_CONTEXT_RADIUS",
                    value,
                })?;
        }

        if let Some(value) = lookup("NIHONGO_OUTPUT") {
            self.output.format =
                OutputFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                    key: "NIHONGO_OUTPUT",
                    value,
                })?;
        }

        if let Some(value) = lookup("NIHONGO_LOG_FORMAT") {
            self.output.log_format =
                LogFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                    key: "NIHONGO_LOG_FORMAT",
                    value,
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.dictionary.enabled);
        assert_eq!(config.dictionary.max_reverse_matches, 3);
        assert_eq!(config.grammar.context_radius, 15);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.normalize_input);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "grammar": { "context_radius": 4 } }"#).unwrap();
        assert_eq!(config.grammar.context_radius, 4);
        assert!(config.grammar.enabled);
        assert_eq!(config.dictionary.max_reverse_matches, 3);
    }

    #[test]
    fn test_output_format_from_json() {
        let config: Config =
            serde_json::from_str(r#"{ "output": { "format": "json", "log_format": "json" } }"#)
                .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.log_format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("NIHONGO_DATASET", "/tmp/kanji.json"),
                ("NIHONGO_MAX_MATCHES", "5"),
                ("NIHONGO_OUTPUT", "JSON"),
            ]))
            .unwrap();

        assert_eq!(
            config.dictionary.dataset_path.as_deref(),
            Some("/tmp/kanji.json")
        );
        assert_eq!(config.dictionary.max_reverse_matches, 5);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup(&[("NIHONGO_CONTEXT_RADIUS", "wide")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "NIHONGO_CONTEXT_RADIUS",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/nihongo.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
