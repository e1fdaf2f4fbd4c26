//! Config rendering shared by the install and config-changed handlers.

use std::fs;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, CharmConfig, OperatorSettings, SnmpdAttributes};
use crate::ports::{ConfigSource, PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Render the daemon configuration for the current option values.
pub fn render_config<T: TemplateRenderer>(
    renderer: &T,
    settings: &OperatorSettings,
    source: &impl ConfigSource,
) -> Result<String, AppError> {
    let config = CharmConfig::from_values(&source.load()?)?;
    let attributes = SnmpdAttributes::build(&config);
    renderer.render(&settings.template_dir, &settings.template_name, &attributes)
}

/// Render the configuration and overwrite the file at the configured path.
pub fn write_config<P, S, R, T>(
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
    let contents = render_config(ctx.renderer(), settings, source)?;

    if let Some(parent) = settings.config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&settings.config_path, contents.as_bytes())?;

    info!(path = %settings.config_path.display(), bytes = contents.len(), "wrote config");
    Ok(())
}
