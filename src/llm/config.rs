use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key configured (set API_KEY or OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("Invalid API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Connection settings for the completion endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub api_url: String,
    pub temperature: f32,
    /// `None` leaves the HTTP client's own default in place.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlays `MODEL`, `API_KEY` (or `OPENAI_API_KEY`), `API_URL` and
    /// `TEMPERATURE` on top of the current values.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("MODEL") {
            self.model = model;
        }
        if let Some(key) = lookup("API_KEY").or_else(|| lookup("OPENAI_API_KEY")) {
            self.api_key = key;
        }
        if let Some(url) = lookup("API_URL") {
            self.api_url = url;
        }
        if let Some(raw) = lookup("TEMPERATURE") {
            self.temperature = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "TEMPERATURE",
                value: raw.clone(),
            })?;
        }
        Ok(self)
    }

    /// Defaults, then the optional TOML file, then the process environment
    /// (after loading `.env`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        let config = base.apply_env(|name| std::env::var(name).ok())?;
        config.validate_url()?;
        Ok(config)
    }

    pub fn validate_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })
    }

    /// Checked right before the first oracle call so prompt previews work
    /// without credentials.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.api_key.trim().is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_fixed_model_and_temperature() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-4");
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.request_timeout_seconds.is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"gpt-4o\"\ntemperature = 0.2").unwrap();

        let config = Config::from_toml_file(file.path())
            .unwrap()
            .apply_env(env(&[("MODEL", "local-llama"), ("OPENAI_API_KEY", "sk-test")]))
            .unwrap();

        assert_eq!(config.model, "local-llama");
        assert_eq!(config.api_key, "sk-test");
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn api_key_takes_precedence_over_openai_key() {
        let config = Config::default()
            .apply_env(env(&[("API_KEY", "primary"), ("OPENAI_API_KEY", "fallback")]))
            .unwrap();
        assert_eq!(config.require_api_key().unwrap(), "primary");
    }

    #[test]
    fn bad_temperature_is_reported() {
        let err = Config::default()
            .apply_env(env(&[("TEMPERATURE", "warm")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "TEMPERATURE", .. }));
    }

    #[test]
    fn missing_key_and_bad_url_are_errors() {
        let config = Config {
            api_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(config.require_api_key(), Err(ConfigError::MissingApiKey)));
        assert!(matches!(config.validate_url(), Err(ConfigError::InvalidUrl { .. })));
    }
}
