use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ServiceManager;

/// Service manager backed by `systemctl`.
#[derive(Debug, Clone, Default)]
pub struct SystemctlAdapter;

impl SystemctlAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, action: &str, service: &str) -> Result<(), AppError> {
        debug!(action, service, "running systemctl");

        let output = Command::new("systemctl").args([action, service]).output().map_err(|e| {
            AppError::ServiceCommand {
                action: action.to_string(),
                service: service.to_string(),
                details: format!("Failed to execute systemctl: {}", e),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ServiceCommand {
                action: action.to_string(),
                service: service.to_string(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }
        Ok(())
    }
}

impl ServiceManager for SystemctlAdapter {
    fn start(&self, service: &str) -> Result<(), AppError> {
        self.run("start", service)
    }

    fn stop(&self, service: &str) -> Result<(), AppError> {
        self.run("stop", service)
    }

    fn restart(&self, service: &str) -> Result<(), AppError> {
        self.run("restart", service)
    }

    fn is_active(&self, service: &str) -> Result<bool, AppError> {
        // Non-zero exit just means "not active"; only a spawn failure is an error.
        let status = Command::new("systemctl")
            .args(["is-active", "--quiet", service])
            .status()
            .map_err(|e| AppError::ServiceCommand {
                action: "is-active".to_string(),
                service: service.to_string(),
                details: format!("Failed to execute systemctl: {}", e),
            })?;
        Ok(status.success())
    }
}
