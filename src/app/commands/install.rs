use tracing::{error, info};

use crate::app::AppContext;
use crate::app::commands::render::write_config;
use crate::domain::{AppError, UnitStatus};
use crate::ports::{ConfigSource, PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Handle the `install` hook: install the package, render config, restart.
///
/// Package failures are logged and skipped so an already-installed daemon can
/// still be configured.
pub fn execute<P, S, R, T>(
    ctx: &AppContext<P, S, R, T>,
    source: &impl ConfigSource,
) -> Result<(), AppError>
where
    P: PackageManager,
    S: ServiceManager,
    R: StatusReporter,
    T: TemplateRenderer,
{
    let settings = ctx.settings();
    ctx.set_status(UnitStatus::maintenance(settings.installing_message()))?;

    match install_package(ctx.packages(), &settings.package) {
        Ok(()) => info!(package = %settings.package, "package installed"),
        Err(err) if err.is_package_failure() => log_package_failure(&err),
        Err(err) => return Err(err),
    }

    ctx.set_status(UnitStatus::maintenance(settings.configuring_message()))?;
    write_config(ctx, source)?;
    ctx.services().restart(&settings.service)?;

    ctx.set_status(UnitStatus::active(settings.ready_message()))
}

fn install_package(packages: &impl PackageManager, package: &str) -> Result<(), AppError> {
    packages.update_cache()?;
    packages.add_package(package)
}

fn log_package_failure(err: &AppError) {
    match err {
        AppError::PackageNotFound { package } => {
            error!("{} package not found in package cache or on system", package)
        }
        AppError::PackageInstall { package, message } => {
            error!("could not install {} package. Reason: {}", package, message)
        }
        other => error!("package cache update failed: {}", other),
    }
}
