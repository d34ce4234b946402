//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths come from Leptos' own configuration
//! (`[package.metadata.leptos]`, overridable with `LEPTOS_*` variables).

/// Toggles response compression (default: on)
pub const COMPRESSION_VAR: &str = "GONEPAL_COMPRESSION";

/// Toggles per-request tracing spans (default: off)
pub const REQUEST_LOG_VAR: &str = "GONEPAL_REQUEST_LOG";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean flag, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses with brotli/gzip
    pub compression: bool,

    /// Wrap every request in a tracing span
    pub request_log: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            compression: flag(COMPRESSION_VAR, lookup(COMPRESSION_VAR), defaults.compression)?,
            request_log: flag(REQUEST_LOG_VAR, lookup(REQUEST_LOG_VAR), defaults.request_log)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            request_log: false,
        }
    }
}

fn flag(var: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(!config.request_log);
    }

    #[test]
    fn test_flags_parse_common_spellings() {
        let config = Config::from_lookup(lookup(&[
            (COMPRESSION_VAR, "off"),
            (REQUEST_LOG_VAR, "YES"),
        ]))
        .unwrap();

        assert!(!config.compression);
        assert!(config.request_log);

        let config =
            Config::from_lookup(lookup(&[(COMPRESSION_VAR, "0"), (REQUEST_LOG_VAR, " true ")]))
                .unwrap();
        assert!(!config.compression);
        assert!(config.request_log);
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, "")])).unwrap();
        assert!(config.compression);
    }

    #[test]
    fn test_invalid_flag_is_an_error() {
        let err = Config::from_lookup(lookup(&[(REQUEST_LOG_VAR, "maybe")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                var: REQUEST_LOG_VAR,
                value: "maybe".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "GONEPAL_REQUEST_LOG must be a boolean flag, got \"maybe\""
        );
    }
}
