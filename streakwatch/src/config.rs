//! Configuration for streakwatch.

use serde::{Deserialize, Serialize};

use crate::types::{EngineError, Result};

/// Log levels accepted by [`GeneralConfig::log_level`].
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakwatchConfig {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Display configuration
    pub display: DisplayConfig,
    /// General settings
    pub general: GeneralConfig,
}

impl StreakwatchConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| EngineError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| EngineError::ConfigError(e.to_string()))
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        let level = self.general.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(EngineError::ConfigError(format!(
                "unknown log level {:?}",
                self.general.log_level
            )));
        }
        if self.engine.table_id.trim().is_empty() {
            return Err(EngineError::ConfigError("table_id must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Table this engine tracks
    pub table_id: String,
    /// Seed for the tie-break random source (entropy when absent)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            table_id: uuid::Uuid::new_v4().to_string(),
            seed: None,
        }
    }
}

/// How results are rendered by drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Include the frequency table in text output
    pub show_frequencies: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_frequencies: true,
            format: OutputFormat::Text,
        }
    }
}

/// General configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
