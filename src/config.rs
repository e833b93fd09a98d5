//! Runtime configuration read from `EARLY_BIRD_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::blueprint::{BlueprintStore, FileStore};
use crate::catalog::DEFAULT_LOW_CALORIE_THRESHOLD;

pub const LOG_VAR: &str = "EARLY_BIRD_LOG";
pub const DATA_DIR_VAR: &str = "EARLY_BIRD_DATA_DIR";
pub const LOW_CALORIE_THRESHOLD_VAR: &str = "EARLY_BIRD_LOW_CALORIE_THRESHOLD";
pub const CHANNEL_BUFFER_VAR: &str = "EARLY_BIRD_CHANNEL_BUFFER";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Where blueprints are persisted. `None` keeps them in memory.
    pub data_dir: Option<PathBuf>,
    pub low_calorie_threshold: u32,
    /// Capacity of the session request queue.
    pub channel_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_dir: None,
            low_calorie_threshold: DEFAULT_LOW_CALORIE_THRESHOLD,
            channel_buffer: 32,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let channel_buffer = parse_or(
            CHANNEL_BUFFER_VAR,
            lookup(CHANNEL_BUFFER_VAR),
            defaults.channel_buffer,
        )?;
        if channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: CHANNEL_BUFFER_VAR,
                value: channel_buffer.to_string(),
            });
        }

        Ok(Self {
            log_level: lookup(LOG_VAR).unwrap_or(defaults.log_level),
            data_dir: lookup(DATA_DIR_VAR).map(PathBuf::from),
            low_calorie_threshold: parse_or(
                LOW_CALORIE_THRESHOLD_VAR,
                lookup(LOW_CALORIE_THRESHOLD_VAR),
                defaults.low_calorie_threshold,
            )?,
            channel_buffer,
        })
    }

    pub fn blueprint_store(&self) -> BlueprintStore {
        match &self.data_dir {
            Some(dir) => BlueprintStore::new(FileStore::new(dir)),
            None => BlueprintStore::in_memory(),
        }
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (LOG_VAR, "debug"),
            (DATA_DIR_VAR, "/var/lib/early-bird"),
            (LOW_CALORIE_THRESHOLD_VAR, " 200 "),
            (CHANNEL_BUFFER_VAR, "8"),
        ])
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/early-bird")));
        assert_eq!(config.low_calorie_threshold, 200);
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = config_from(&[(DATA_DIR_VAR, ""), (LOW_CALORIE_THRESHOLD_VAR, "  ")]).unwrap();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.low_calorie_threshold, DEFAULT_LOW_CALORIE_THRESHOLD);
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            config_from(&[(LOW_CALORIE_THRESHOLD_VAR, "lots")]),
            Err(ConfigError::InvalidValue {
                key: LOW_CALORIE_THRESHOLD_VAR,
                value: "lots".to_string(),
            })
        );
        assert!(config_from(&[(CHANNEL_BUFFER_VAR, "0")]).is_err());
        assert!(config_from(&[(CHANNEL_BUFFER_VAR, "-1")]).is_err());
    }
}
