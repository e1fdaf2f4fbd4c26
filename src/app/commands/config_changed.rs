use crate::app::AppContext;
use crate::app::commands::render::write_config;
use crate::domain::{AppError, UnitStatus};
use crate::ports::{ConfigSource, PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Handle the `config-changed` hook: re-render config and restart.
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
    ctx.set_status(UnitStatus::maintenance(settings.configuring_message()))?;

    write_config(ctx, source)?;
    ctx.services().restart(&settings.service)?;

    ctx.set_status(UnitStatus::active(settings.ready_message()))
}
