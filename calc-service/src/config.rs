//! Configuration for the calculator service

use history_ledger::LedgerConfig;
use serde::{Deserialize, Serialize};

/// Calculator service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// History ledger configuration
    pub history: LedgerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "Calculator Web API".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            history: LedgerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.history.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config {
            history: LedgerConfig::from_env()?,
            ..Config::default()
        };

        if let Ok(name) = std::env::var("CALC_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(filter) = std::env::var("CALC_LOG_FILTER") {
            config.logging.filter = filter;
        }

        if let Ok(json) = std::env::var("CALC_LOG_JSON") {
            config.logging.json = parse_flag(&json).ok_or_else(|| {
                crate::Error::Config(format!("Invalid CALC_LOG_JSON '{}'", json))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
