//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::journal::DEFAULT_MOOD_ORDER;
use crate::storage::DEFAULT_LOG_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the journal keeps its files
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,

    #[serde(default = "default_mood_order")]
    pub mood_order: Vec<String>,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_music_dir() -> PathBuf {
    PathBuf::from("music")
}

fn default_mood_order() -> Vec<String> {
    DEFAULT_MOOD_ORDER.iter().map(|s| s.to_string()).collect()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            assets_dir: default_assets_dir(),
            music_dir: default_music_dir(),
            mood_order: default_mood_order(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("moodlog").join("config.toml")),
            Some(PathBuf::from("./moodlog.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("MOODLOG_LOG_PATH") {
            self.journal.log_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("MOODLOG_ASSETS_DIR") {
            self.journal.assets_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MOODLOG_MUSIC_DIR") {
            self.journal.music_dir = PathBuf::from(dir);
        }

        if let Ok(level) = std::env::var("MOODLOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MOODLOG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Moodlog Configuration
#
# Environment variables override these settings:
# - MOODLOG_LOG_PATH
# - MOODLOG_ASSETS_DIR
# - MOODLOG_MUSIC_DIR
# - MOODLOG_LOG_LEVEL
# - MOODLOG_LOG_FORMAT

[journal]
# Mood log file (relative paths resolve against the working directory)
log_path = "mood_log.txt"

# Directory with one image per mood (joy.png, anger.png, ...)
assets_dir = "images"

# Directory with .mp3, .wav or .ogg background music
music_dir = "music"

# Display order for known moods; other moods follow in file order
mood_order = ["joy", "neutral", "sadness", "anger", "annoyed", "anxiety", "fear"]

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();

        assert_eq!(config.journal.log_path, PathBuf::from("mood_log.txt"));
        assert_eq!(config.journal.assets_dir, PathBuf::from("images"));
        assert_eq!(config.journal.mood_order.len(), 7);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[journal]\nlog_path = \"/tmp/moods.txt\"\n").unwrap();

        assert_eq!(config.journal.log_path, PathBuf::from("/tmp/moods.txt"));
        assert_eq!(config.journal.music_dir, PathBuf::from("music"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[journal\nlog_path = 3").unwrap();
        assert!(matches!(Config::load(&bad).unwrap_err(), ConfigError::Parse { .. }));
    }
}
