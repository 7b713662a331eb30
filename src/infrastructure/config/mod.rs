//! Configuration loading and validation.

pub mod logging;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::{ApiConfig, Config, StorageConfig, API_URL_ENV, DEFAULT_CONFIG_PATH};
