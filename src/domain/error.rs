use std::io;

use thiserror::Error;

/// Library-wide error type for snmpd-operator.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required charm configuration key was not supplied.
    #[error("Missing charm config option '{key}'")]
    ConfigKeyMissing { key: String },

    /// A charm configuration key holds something other than a string.
    #[error("Charm config option '{key}' must be a string, got {found}")]
    ConfigValueType { key: String, found: String },

    /// Hook name is not one of the lifecycle events this operator handles.
    #[error("Unknown lifecycle event '{0}': must be one of install, config-changed, stop")]
    UnknownEvent(String),

    /// Package has no install candidate in any configured source.
    #[error("Package '{package}' not found in package cache or on system")]
    PackageNotFound { package: String },

    /// Package installation failed for any other reason.
    #[error("Could not install package '{package}': {message}")]
    PackageInstall { package: String, message: String },

    /// Package index update failed.
    #[error("Package cache update failed: {details}")]
    PackageCache { details: String },

    /// Named template is absent from the template directory.
    #[error("Template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: String },

    /// Template source could not be parsed.
    #[error("Template '{name}' is malformed: {reason}")]
    TemplateSyntax { name: String, reason: String },

    /// Template parsed but failed while rendering.
    #[error("Failed to render template '{name}': {reason}")]
    TemplateRender { name: String, reason: String },

    /// Service manager command exited unsuccessfully.
    #[error("Failed to {action} service '{service}': {details}")]
    ServiceCommand { action: String, service: String, details: String },

    /// A hook tool (status-set, config-get) failed.
    #[error("Hook tool '{tool}' failed: {details}")]
    HookTool { tool: String, details: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Install-phase failures that the install hook logs and moves past.
    pub fn is_package_failure(&self) -> bool {
        matches!(
            self,
            AppError::PackageNotFound { .. }
                | AppError::PackageInstall { .. }
                | AppError::PackageCache { .. }
        )
    }
}
