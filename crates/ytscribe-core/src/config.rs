//! Configuration management for ytscribe.
//!
//! The config file doubles as the persisted credential slot: the API key
//! lives under the `vd_user_openai_api_key` key next to the other settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{APP_NAME, DEFAULT_ENDPOINT, TargetLanguage};

/// Configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// The persisted API key. Stored as entered, never cleared by the app.
    #[serde(
        rename = "vd_user_openai_api_key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    api_key: Option<String>,

    /// Transcription service endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,

    /// Target language preselected in the console (language code or "auto")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Config {
    /// Retrieves the stored API key, if set.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Overwrites the stored API key.
    pub fn set_api_key(&mut self, key: &str) {
        self.api_key = Some(key.to_owned());
    }

    /// Returns the transcription endpoint, falling back to the default.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Overrides the transcription endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = Some(endpoint.into());
    }

    /// Returns the preselected target language.
    ///
    /// Unknown codes fall back to auto-detect rather than failing the load.
    pub fn language(&self) -> TargetLanguage {
        match self.language.as_deref() {
            Some(code) => code.parse().unwrap_or_else(|_| {
                debug!(code, "ignoring unknown language in config");
                TargetLanguage::Auto
            }),
            None => TargetLanguage::Auto,
        }
    }
}

/// Manages loading and saving the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` with the default configuration directory.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Creates a `ConfigManager` for an explicit config file path.
    pub fn with_config_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Creates a new `ConfigManager` inside the given directory.
    /// Useful for testing with temporary directories.
    pub fn with_config_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::with_config_path(dir.as_ref().join(format!("{}.toml", APP_NAME)))
    }

    /// Determines the default path to the configuration file using `dirs::config_dir`.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to retrieve configuration directory")?;
        Ok(config_dir.join(APP_NAME).join(format!("{}.toml", APP_NAME)))
    }

    /// Loads the configuration from the config file or returns the default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file at {:?}", self.config_path))?;
        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file at {:?}", self.config_path))?;

        Ok(config)
    }

    /// Saves the configuration to the config file, only writing non-default fields.
    pub fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self
            .config_path
            .parent()
            .with_context(|| format!("Failed to get parent directory of {:?}", self.config_path))?;

        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory at {:?}", config_dir))?;

        let serialized =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, serialized)
            .with_context(|| format!("Failed to write config file at {:?}", self.config_path))?;

        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_default_config() {
        let temp = tempdir().expect("Failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp.path());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.language(), TargetLanguage::Auto);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = tempdir().expect("Failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp.path());

        let mut config = Config::default();
        config.set_api_key("sk-test");
        config.set_endpoint("http://127.0.0.1:9000/transcribe");
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.api_key(), Some("sk-test"));
        assert_eq!(loaded.endpoint(), "http://127.0.0.1:9000/transcribe");
    }

    #[test]
    fn test_key_is_stored_under_slot_name() {
        let temp = tempdir().expect("Failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp.path());

        let mut config = Config::default();
        config.set_api_key("sk-abc");
        manager.save(&config).unwrap();

        let raw = fs::read_to_string(manager.config_path()).unwrap();
        assert!(raw.contains("vd_user_openai_api_key = \"sk-abc\""));
        assert!(!raw.contains("endpoint"));
    }

    #[test]
    fn test_save_creates_config_file() {
        let temp = tempdir().expect("Failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp.path().join("nested"));

        manager.save(&Config::default()).unwrap();

        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_language_from_config() {
        let config: Config = toml::from_str("language = \"es\"").unwrap();
        assert_eq!(config.language(), TargetLanguage::Spanish);

        let config: Config = toml::from_str("language = \"klingon\"").unwrap();
        assert_eq!(config.language(), TargetLanguage::Auto);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = tempdir().expect("Failed to create temp dir");
        let manager = ConfigManager::with_config_dir(temp.path());
        fs::write(manager.config_path(), "vd_user_openai_api_key = [").unwrap();

        assert!(manager.load().is_err());
    }
}
