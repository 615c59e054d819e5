//! ConfigStore - Local Configuration Storage
//!
//! Loads the TOML settings file from the platform data directory, falling
//! back to defaults when the file does not exist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

const APP_DIR: &str = "artic-gui";
const CONFIG_FILE: &str = "settings.toml";

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join(APP_DIR);

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the settings file from the data directory
pub fn load_config<T: DeserializeOwned + Default>() -> Result<T> {
    load_config_from(&app_data_dir()?.join(CONFIG_FILE))
}

/// Save the settings file to the data directory
pub fn save_config<T: Serialize>(config: &T) -> Result<()> {
    save_config_to(&app_data_dir()?.join(CONFIG_FILE), config)
}

fn load_config_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

fn save_config_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config: AppConfig =
            load_config_from(&dir.path().join("settings.toml")).expect("load should succeed");
        assert_eq!(config.table.page_size, 12);
        assert_eq!(config.api.base_url, "https://api.artic.edu/api/v1");
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");

        let mut config = AppConfig::default();
        config.table.page_size = 25;
        config.api.timeout_secs = 10;

        save_config_to(&path, &config).expect("save should succeed");
        let loaded: AppConfig = load_config_from(&path).expect("load should succeed");

        assert_eq!(loaded.table.page_size, 25);
        assert_eq!(loaded.api.timeout_secs, 10);
    }
}
