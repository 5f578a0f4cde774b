mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::WeightConfig;

/// Get the config directory path (~/.config/aem/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("aem"))
}

/// Get the default config file path (~/.config/aem/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/aem/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error; built-in defaults are used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Load a standalone weights file (the same keys as the `weights:` section)
pub fn load_weights(path: &Path) -> Result<WeightConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse weights: invalid YAML in {}", path.display()))
}

/// Pick the weights to score with: a weights file wins over the config file,
/// which wins over the built-in defaults.
pub fn effective_weights(config: &Config, weights_file: Option<&Path>) -> Result<WeightConfig> {
    match weights_file {
        Some(path) => load_weights(path),
        None => Ok(config.weights.unwrap_or_default()),
    }
}
