//! Configuration for the history ledger

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of retained entries
pub const DEFAULT_CAPACITY: usize = 100;

/// Ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Maximum number of retained entries; oldest are evicted first
    pub capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LedgerConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LedgerConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = LedgerConfig::default();

        if let Ok(capacity) = std::env::var("CALC_HISTORY_CAPACITY") {
            config.capacity = capacity.trim().parse().map_err(|e| {
                Error::Config(format!("Invalid CALC_HISTORY_CAPACITY '{}': {}", capacity, e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}
