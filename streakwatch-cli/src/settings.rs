//! Config file loading and CLI overrides.

use std::path::Path;

use streakwatch::{OutputFormat, StreakwatchConfig};
use tracing::info;

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub table_id: Option<String>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

/// Load config from `path` if it exists, otherwise defaults, then apply overrides.
pub fn load(path: &Path, overrides: Overrides) -> anyhow::Result<StreakwatchConfig> {
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        StreakwatchConfig::from_yaml(&content)?
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        StreakwatchConfig::default()
    };

    if let Some(seed) = overrides.seed {
        config.engine.seed = Some(seed);
    }
    if let Some(table_id) = overrides.table_id {
        config.engine.table_id = table_id;
    }
    if let Some(format) = overrides.format {
        config.display.format = format;
    }
    if let Some(level) = overrides.log_level {
        config.general.log_level = level;
    }

    config.validate()?;
    Ok(config)
}
