use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ConfigValues};
use crate::ports::ConfigSource;

/// Charm options read from a local YAML mapping.
#[derive(Debug, Clone)]
pub struct YamlConfigFile {
    path: PathBuf,
}

impl YamlConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for YamlConfigFile {
    fn load(&self) -> Result<ConfigValues, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::config_error(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(ConfigValues::new());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}
