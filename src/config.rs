//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use marubatsu_core::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "marubatsu.toml";

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Glyph drawn for Maru's marks.
    #[serde(default = "default_maru_glyph")]
    maru_glyph: String,

    /// Glyph drawn for Batsu's marks.
    #[serde(default = "default_batsu_glyph")]
    batsu_glyph: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_maru_glyph() -> String {
    "O".to_string()
}

fn default_batsu_glyph() -> String {
    "X".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("marubatsu.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maru_glyph: default_maru_glyph(),
            batsu_glyph: default_batsu_glyph(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(maru = %config.maru_glyph, batsu = %config.batsu_glyph, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, otherwise the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(player) = Player::iter().find(|&player| self.glyph(player).trim().is_empty()) {
            return Err(ConfigError::new(format!("Glyph for {:?} must not be blank", player)));
        }
        if self.maru_glyph == self.batsu_glyph {
            return Err(ConfigError::new(format!(
                "Both players cannot share the glyph {:?}",
                self.maru_glyph
            )));
        }
        Ok(())
    }

    /// Glyph for `player`'s marks.
    pub fn glyph(&self, player: Player) -> &str {
        match player {
            Player::Maru => &self.maru_glyph,
            Player::Batsu => &self.batsu_glyph,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml("maru_glyph = \"◯\"\nlog_filter = \"debug\"").unwrap();
        assert_eq!(config.glyph(Player::Maru), "◯");
        assert_eq!(config.glyph(Player::Batsu), "X");
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_rejects_shared_glyph() {
        let err = AppConfig::from_toml("maru_glyph = \"X\"").unwrap_err();
        assert!(err.message.contains("share"));
    }

    #[test]
    fn test_rejects_blank_glyph() {
        let err = AppConfig::from_toml("batsu_glyph = \"  \"").unwrap_err();
        assert!(err.message.contains("Batsu"));
        assert!(err.message.contains("blank"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = AppConfig::from_toml("maru_glyph = ").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }
}
