//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::SiftConfig;
use std::path::Path;
use tracing::debug;

/// Name of the configuration file inside a project directory.
pub const CONFIG_FILE: &str = "sift.toml";

/// Loads and validates `sift.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<SiftConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    debug!(path = %config_path.display(), "loading snapshot configuration");
    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `sift.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<SiftConfig, ConfigError> {
    let config: SiftConfig = toml::from_str(content)?;
    validate_config(&config)?;
    debug!(
        properties = config.properties.len(),
        default_compare = ?config.snapshot.default_compare,
        "snapshot configuration loaded"
    );
    Ok(config)
}

fn validate_config(config: &SiftConfig) -> Result<(), ConfigError> {
    if config.snapshot.default_file_type.trim().is_empty() {
        return Err(ConfigError::BlankDefaultFileType);
    }
    for (name, property) in &config.properties {
        if name.trim().is_empty() {
            return Err(ConfigError::BlankPropertyName);
        }
        if let Some(file_type) = &property.file_type {
            if file_type.trim().is_empty() {
                return Err(ConfigError::BlankFileType(name.clone()));
            }
        }
    }
    Ok(())
}
