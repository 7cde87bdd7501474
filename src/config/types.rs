//! Configuration Types
//!
//! Default pipeline parameters for the CLI. The library itself takes
//! explicit [`crate::explorer::ExplorerOptions`]; configuration only
//! decides what the CLI passes when flags are omitted.

use serde::{Deserialize, Serialize};

use crate::types::{ExplorerView, Theme};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Explorer pipeline defaults
    pub explorer: ExplorerConfig,

    /// Logging settings
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            explorer: ExplorerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `WikiGraphError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if let Some(depth) = self.explorer.max_depth
            && depth > 32
        {
            return Err(crate::types::WikiGraphError::Config(format!(
                "explorer.max_depth must be at most 32, got {}",
                depth
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.as_str()) {
            return Err(crate::types::WikiGraphError::Config(format!(
                "log.level must be one of {}, got '{}'",
                valid_levels.join(", "),
                self.log.level
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Explorer Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Default depth ceiling when the CLI flag is omitted.
    /// Absent means no limit.
    pub max_depth: Option<u32>,

    /// Default view when the CLI flag is omitted
    pub view: ExplorerView,

    /// Default theme when the CLI flag is omitted
    pub theme: Theme,
}

// =============================================================================
// Logging Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level emitted when RUST_LOG is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.explorer.view, ExplorerView::Architecture);
        assert_eq!(config.explorer.theme, Theme::Light);
        assert!(config.explorer.max_depth.is_none());
    }

    #[test]
    fn test_excessive_depth_rejected() {
        let mut config = Config::default();
        config.explorer.max_depth = Some(100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = Config::default();
        config.log.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
