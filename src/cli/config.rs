//! `schooldesk config check`

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::{Config, API_URL_ENV};

/// Validate configuration without contacting the backend.
pub fn check(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Configuration");
    if path.exists() {
        output::ok(&format!("{} is valid", path.display()));
    } else {
        output::warn(&format!("{} not found; using defaults", path.display()));
    }
    output::key_value("API base URL", &config.api.base_url);
    if std::env::var(API_URL_ENV).is_ok() {
        output::note(&format!("  (overridden by {API_URL_ENV})"));
    }
    output::key_value("Storage", config.storage.resolve_dir().display());
    output::key_value("Log level", &config.logging.level);
    output::key_value("Log format", &config.logging.format);
    Ok(())
}
