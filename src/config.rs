// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "RECEIVER_CONFIG";

/// Optional on-disk settings. Every key may be omitted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amqp_addr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_seconds: Option<u64>,
}

/// Locates the configuration file, if any.
///
/// An explicit `RECEIVER_CONFIG` path must exist. Otherwise the working
/// directory and then the home directory are searched, and finding nothing
/// is not an error.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(explicit);
        if !path.exists() {
            return Err(anyhow!(
                "{} points to {}, which does not exist",
                CONFIG_PATH_VAR,
                path.display()
            ));
        }
        return Ok(Some(path));
    }

    let locations = [
        ("Current directory", Path::new("receiver.json")),
        ("Current directory (alternative)", Path::new("config/receiver.json")),
    ];

    for (location_name, path) in locations.iter() {
        if path.exists() {
            debug!("Found config file in {}: {}", location_name, path.display());
            return Ok(Some(path.to_path_buf()));
        }
    }

    if let Some(home_dir) = home::home_dir() {
        let home_config = home_dir.join(".receiver.json");
        if home_config.exists() {
            debug!("Found config file in home directory: {}", home_config.display());
            return Ok(Some(home_config));
        }
    }

    Ok(None)
}

pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Config file {} contains invalid JSON or unknown keys", path.display()))
}

/// Writes `config` as pretty JSON, creating parent directories as needed.
pub fn write_config_file(path: &Path, config: &FileConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .context("Failed to serialize configuration")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    fs::write(path, json)
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;

    info!("Created configuration file at: {}", path.display());
    Ok(())
}
