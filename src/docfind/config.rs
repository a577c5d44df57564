use crate::error::{DirectoryError, Result};
use crate::source::DEFAULT_SOURCE_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

/// Overrides the config directory; used by tests and portable installs.
pub const CONFIG_DIR_ENV: &str = "DOCFIND_CONFIG_DIR";

/// Configuration for docfind, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Where doctors are fetched from: an http(s) URL or a JSON file path
    #[serde(default = "default_source")]
    pub source: String,

    /// Base URL that shareable filter links are built on
    #[serde(default = "default_page_url")]
    pub page_url: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            page_url: default_page_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Source,
    PageUrl,
}

impl ConfigKey {
    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "source" => Ok(ConfigKey::Source),
            "page-url" => Ok(ConfigKey::PageUrl),
            other => Err(DirectoryError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::Source => "source",
            ConfigKey::PageUrl => "page-url",
        }
    }
}

impl DirectoryConfig {
    /// Default config directory, honouring [`CONFIG_DIR_ENV`].
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "docfind", "docfind")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| DirectoryError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DirectoryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::Source => &self.source,
            ConfigKey::PageUrl => &self.page_url,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DirectoryError::Config(format!(
                "{} cannot be empty",
                key.name()
            )));
        }
        match key {
            ConfigKey::Source => self.source = value.to_string(),
            ConfigKey::PageUrl => {
                url::Url::parse(value).map_err(|e| {
                    DirectoryError::Config(format!("Invalid page-url '{}': {}", value, e))
                })?;
                self.page_url = value.to_string();
            }
        }
        Ok(())
    }
}
