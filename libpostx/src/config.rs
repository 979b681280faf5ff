//! Configuration management for postx
//!
//! Configuration is optional: with no file present every value takes its
//! default. Credentials never live here; see [`crate::credentials`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::platforms::x::DEFAULT_API_BASE;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub x: XConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct XConfig {
    /// Base URL of the X API
    pub api_base: String,
}

impl Default for XConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("POST_ON_X_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::InvalidValue("no config directory".to_string()))?;

    Ok(config_dir.join("post-on-x").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostxError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.x.api_base, "https://api.x.com");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[x]
api_base = "http://localhost:8080"

[logging]
format = "json"
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.x.api_base, "http://localhost:8080");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.x.api_base, DEFAULT_API_BASE);
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[x\napi_base = ").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(
            result,
            Err(PostxError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_from_missing_path_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(
            result,
            Err(PostxError::Config(ConfigError::ReadError(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_load_honors_env_path_and_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::env::set_var("POST_ON_X_CONFIG", &path);
        assert_eq!(Config::load().unwrap(), Config::default());

        fs::write(&path, "[x]\napi_base = \"http://127.0.0.1:1\"\n").unwrap();
        assert_eq!(Config::load().unwrap().x.api_base, "http://127.0.0.1:1");

        std::env::remove_var("POST_ON_X_CONFIG");
    }

    #[test]
    #[serial]
    fn test_config_path_expands_tilde() {
        std::env::set_var("POST_ON_X_CONFIG", "~/post-on-x-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("POST_ON_X_CONFIG");

        assert!(path.ends_with("post-on-x-test/config.toml"));
        if let Some(home) = dirs::home_dir() {
            assert!(!path.starts_with("~"));
            assert!(path.starts_with(home));
        }
    }

    #[test]
    #[serial]
    fn test_config_path_defaults_to_config_dir() {
        std::env::remove_var("POST_ON_X_CONFIG");
        if let Some(config_dir) = dirs::config_dir() {
            let path = resolve_config_path().unwrap();
            assert_eq!(path, config_dir.join("post-on-x").join("config.toml"));
        }
    }
}
