use std::process::{Command, Output};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::PackageManager;

/// Package manager backed by `apt-get` and `apt-cache`.
#[derive(Debug, Clone, Default)]
pub struct AptCommandAdapter;

impl AptCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<Output, String> {
        debug!(command = %format!("{} {}", program, args.join(" ")), "running package command");

        Command::new(program)
            .args(args)
            .env("DEBIAN_FRONTEND", "noninteractive")
            .output()
            .map_err(|e| format!("Failed to execute {}: {}", program, e))
    }
}

impl PackageManager for AptCommandAdapter {
    fn update_cache(&self) -> Result<(), AppError> {
        let output = self
            .output("apt-get", &["update", "--error-on=any"])
            .map_err(|details| AppError::PackageCache { details })?;

        if !output.status.success() {
            return Err(AppError::PackageCache { details: failure_details(&output) });
        }
        Ok(())
    }

    fn add_package(&self, name: &str) -> Result<(), AppError> {
        let candidate = self.output("apt-cache", &["show", name]).map_err(|message| {
            AppError::PackageInstall { package: name.to_string(), message }
        })?;
        if !candidate.status.success() || candidate.stdout.is_empty() {
            return Err(AppError::PackageNotFound { package: name.to_string() });
        }

        let output = self
            .output("apt-get", &["install", "--yes", "--quiet", name])
            .map_err(|message| AppError::PackageInstall { package: name.to_string(), message })?;

        if !output.status.success() {
            return Err(classify_install_failure(name, &failure_details(&output)));
        }
        Ok(())
    }
}

/// Map `apt-get install` stderr onto the package error taxonomy.
fn classify_install_failure(package: &str, details: &str) -> AppError {
    let not_found = details.contains("Unable to locate package")
        || details.contains("has no installation candidate");
    if not_found {
        AppError::PackageNotFound { package: package.to_string() }
    } else {
        AppError::PackageInstall { package: package.to_string(), message: details.to_string() }
    }
}

fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        match output.status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    } else {
        stderr
    }
}
