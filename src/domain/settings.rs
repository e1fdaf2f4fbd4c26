//! Operator settings: names and paths of the managed daemon.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

pub const DEFAULT_DAEMON_NAME: &str = "snmpd";
pub const DEFAULT_PACKAGE: &str = "snmpd";
pub const DEFAULT_SERVICE: &str = "snmpd.service";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/snmp/snmpd.conf";
pub const DEFAULT_TEMPLATE_NAME: &str = "snmpd.conf";
pub const TEMPLATES_DIR: &str = "templates";

/// Names and paths the lifecycle handlers operate on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OperatorSettings {
    /// Name used in status messages.
    pub daemon_name: String,
    pub package: String,
    pub service: String,
    /// Rendered configuration file.
    pub config_path: PathBuf,
    pub template_dir: PathBuf,
    pub template_name: String,
}

impl Default for OperatorSettings {
    fn default() -> Self {
        Self::for_charm_dir(&charm_dir())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    operator: OperatorSettings,
}

impl OperatorSettings {
    /// Default settings with templates looked up under `<charm_dir>/templates`.
    pub fn for_charm_dir(charm_dir: &Path) -> Self {
        Self {
            daemon_name: DEFAULT_DAEMON_NAME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            template_dir: charm_dir.join(TEMPLATES_DIR),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    /// Parse and validate settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let file: SettingsFile = toml::from_str(content)?;
        file.operator.validate()?;
        Ok(file.operator)
    }

    /// Load settings from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let names = [
            ("daemon_name", self.daemon_name.as_str()),
            ("package", self.package.as_str()),
            ("service", self.service.as_str()),
            ("template_name", self.template_name.as_str()),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("operator.{field} must not be empty")));
            }
        }
        if self.config_path.as_os_str().is_empty() {
            return Err(AppError::config_error("operator.config_path must not be empty"));
        }
        if self.template_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("operator.template_dir must not be empty"));
        }
        Ok(())
    }

    pub fn installing_message(&self) -> String {
        format!("Installing {}", self.daemon_name)
    }

    pub fn configuring_message(&self) -> String {
        format!("Configuring {}", self.daemon_name)
    }

    pub fn ready_message(&self) -> String {
        format!("{} installed/configured", self.daemon_name)
    }
}

/// Charm root as exported by the agent, falling back to the working directory.
pub fn charm_dir() -> PathBuf {
    ["CHARM_DIR", "JUJU_CHARM_DIR"]
        .iter()
        .filter_map(|key| env::var_os(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
