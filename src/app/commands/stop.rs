use crate::app::AppContext;
use crate::domain::{AppError, UnitStatus};
use crate::ports::{PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Status message after the `stop` hook.
///
/// Reported as `active` for compatibility with existing deployments.
pub const STOPPED_MESSAGE: &str = "Service stopped.";

/// Handle the `stop` hook.
pub fn execute<P, S, R, T>(ctx: &AppContext<P, S, R, T>) -> Result<(), AppError>
where
    P: PackageManager,
    S: ServiceManager,
    R: StatusReporter,
    T: TemplateRenderer,
{
    ctx.services().stop(&ctx.settings().service)?;
    ctx.set_status(UnitStatus::active(STOPPED_MESSAGE))
}
