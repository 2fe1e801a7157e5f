//! Configuration for the search trigger view

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_APP_URL: &str = "http://localhost:8501";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_SEARCH_PATH: &str = "/api/search-flight";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Which external action the single control performs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Open the flight search app in a new browser tab
    #[default]
    Launch,
    /// POST to the backend search endpoint and show the text it returns
    Search,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Launch => write!(f, "launch"),
            SearchMode::Search => write!(f, "search"),
        }
    }
}

/// Colour scheme for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Action performed on activation
    pub mode: SearchMode,

    /// Address opened in launch mode
    pub app_url: String,

    /// Base address of the search backend
    pub backend_url: String,

    /// Path of the search endpoint, joined onto `backend_url`
    pub search_path: String,

    /// Upper bound on a single search request
    pub request_timeout_secs: u64,

    pub theme: ThemeChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            app_url: DEFAULT_APP_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: ThemeChoice::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Write {
                    path: parent.display().to_string(),
                    source,
                })?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.display().to_string(),
                source,
            })?;

        Ok(())
    }

    /// Default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("flightdeck").join("config.toml")
        } else {
            PathBuf::from(".").join("flightdeck.toml")
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.app_url)
            .map_err(|e| ConfigError::Invalid(format!("app_url {:?}: {}", self.app_url, e)))?;

        let backend = Url::parse(&self.backend_url).map_err(|e| {
            ConfigError::Invalid(format!("backend_url {:?}: {}", self.backend_url, e))
        })?;
        if backend.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "backend_url {:?} cannot be used as a base address",
                self.backend_url
            )));
        }

        if !self.search_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "search_path {:?} must start with '/'",
                self.search_path
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full address of the search endpoint
    pub fn search_url(&self) -> Result<Url, ConfigError> {
        let base = Url::parse(&self.backend_url).map_err(|e| {
            ConfigError::Invalid(format!("backend_url {:?}: {}", self.backend_url, e))
        })?;
        base.join(&self.search_path).map_err(|e| {
            ConfigError::Invalid(format!("search_path {:?}: {}", self.search_path, e))
        })
    }
}
