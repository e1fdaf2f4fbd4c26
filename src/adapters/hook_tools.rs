//! Juju hook tools: `status-set` and `config-get`.

use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, ConfigValues, UnitStatus};
use crate::ports::{ConfigSource, StatusReporter};

fn run_tool(tool: &str, args: &[&str]) -> Result<String, AppError> {
    debug!(tool, args = ?args, "running hook tool");

    let output = Command::new(tool).args(args).output().map_err(|e| AppError::HookTool {
        tool: tool.to_string(),
        details: format!("Failed to execute {}: {}", tool, e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::HookTool {
            tool: tool.to_string(),
            details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Publishes workload status through `status-set`.
#[derive(Debug, Clone, Default)]
pub struct StatusSetCommand;

impl StatusSetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for StatusSetCommand {
    fn set_status(&self, status: &UnitStatus) -> Result<(), AppError> {
        run_tool("status-set", &[status.kind(), status.message()]).map(|_| ())
    }
}

/// Reads charm options through `config-get --format=json`.
#[derive(Debug, Clone, Default)]
pub struct ConfigGetCommand;

impl ConfigGetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for ConfigGetCommand {
    fn load(&self) -> Result<ConfigValues, AppError> {
        let stdout = run_tool("config-get", &["--format=json", "--all"])?;
        parse_config_json(&stdout)
    }
}

fn parse_config_json(content: &str) -> Result<ConfigValues, AppError> {
    if content.is_empty() {
        return Ok(ConfigValues::new());
    }
    serde_json::from_str(content).map_err(|e| AppError::ParseError {
        what: "config-get output".to_string(),
        details: e.to_string(),
    })
}
