//! Routes lifecycle hooks to their handlers.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::{config_changed, install, stop};
use crate::domain::{AppError, LifecycleEvent};
use crate::ports::{ConfigSource, PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Environment variable naming the hook being dispatched, e.g. `hooks/install`.
pub const DISPATCH_PATH_ENV: &str = "JUJU_DISPATCH_PATH";

/// Run the handler for `event` to completion.
pub fn dispatch<P, S, R, T>(
    ctx: &AppContext<P, S, R, T>,
    source: &impl ConfigSource,
    event: LifecycleEvent,
) -> Result<(), AppError>
where
    P: PackageManager,
    S: ServiceManager,
    R: StatusReporter,
    T: TemplateRenderer,
{
    info!(event = %event, "handling hook");
    match event {
        LifecycleEvent::Install => install::execute(ctx, source),
        LifecycleEvent::ConfigChanged => config_changed::execute(ctx, source),
        LifecycleEvent::Stop => stop::execute(ctx),
    }
}

/// Resolve the hook named by a dispatch path.
///
/// `Ok(None)` means the hook exists but this operator has nothing to do for it.
pub fn resolve_dispatch_path(path: Option<&str>) -> Result<Option<LifecycleEvent>, AppError> {
    let path = path.map(str::trim).filter(|p| !p.is_empty()).ok_or_else(|| {
        AppError::config_error(format!(
            "{} is not set; not running under a hook",
            DISPATCH_PATH_ENV
        ))
    })?;

    let event = LifecycleEvent::from_dispatch_path(path);
    if event.is_none() {
        info!(path, "no handler for hook, ignoring");
    }
    Ok(event)
}
