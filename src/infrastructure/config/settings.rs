//! Application configuration.
//!
//! Loaded from a TOML file with every section optional. The backend URL can
//! be overridden with `SCHOOLDESK_API_URL`, which is how a `.env` file
//! (loaded by the binary through `dotenvy`) points the client elsewhere.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [storage]
//! dir = "/var/lib/schooldesk"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "SCHOOLDESK_API_URL";

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "schooldesk.toml";

/// Backend connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are resolved against.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
        }
    }
}

/// Durable state location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding persisted auth and layout state.
    ///
    /// Defaults to the platform data directory (e.g.
    /// `~/.local/share/schooldesk`).
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured directory, or the platform default.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("schooldesk")
        })
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Parse configuration from TOML content, apply environment overrides
    /// and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file; defaults are still
    /// validated after environment overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Initialize tracing from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.base_url",
            }
            .into());
        }
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        self.logging.validate()?;
        Ok(())
    }
}
