//! ConfigStore - Local Configuration Storage
//!
//! Loads and saves the console configuration as TOML in the platform
//! config directory. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::fs::get_or_create_config_dir;

const CONFIG_FILE: &str = "config.toml";

fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load the console configuration, falling back to defaults when no file
/// has been written yet
pub fn load_app_config() -> Result<AppConfig> {
    read_config(&config_path()?)
}

/// Persist the console configuration
pub fn save_app_config(config: &AppConfig) -> Result<()> {
    write_config(&config_path()?, config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config.sanitized())
}

fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
