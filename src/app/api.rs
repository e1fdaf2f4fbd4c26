//! API Facade for the application.
//!
//! Wires the command-line adapters into an `AppContext` and runs handlers.

use std::path::Path;

use crate::adapters::{
    AptCommandAdapter, ConfigGetCommand, MinijinjaTemplateRenderer, StatusSetCommand,
    SystemctlAdapter, YamlConfigFile,
};
use crate::app::AppContext;
use crate::app::commands::render;
use crate::app::commands::service::{self, ServiceAction};
use crate::app::dispatcher::{self, DISPATCH_PATH_ENV};
use crate::domain::{AppError, LifecycleEvent, OperatorSettings};
use crate::ports::ConfigSource;

type HostContext =
    AppContext<AptCommandAdapter, SystemctlAdapter, StatusSetCommand, MinijinjaTemplateRenderer>;

fn create_context(settings: OperatorSettings) -> HostContext {
    AppContext::new(
        settings,
        AptCommandAdapter::new(),
        SystemctlAdapter::new(),
        StatusSetCommand::new(),
        MinijinjaTemplateRenderer::new(),
    )
}

fn with_config_source<F, O>(config_file: Option<&Path>, f: F) -> Result<O, AppError>
where
    F: FnOnce(&dyn ConfigSource) -> Result<O, AppError>,
{
    match config_file {
        Some(path) => f(&YamlConfigFile::new(path)),
        None => f(&ConfigGetCommand::new()),
    }
}

/// Run the handler for one lifecycle event against the host.
///
/// Options come from `config-get` unless `config_file` points at a YAML file.
pub fn run_hook(
    event: LifecycleEvent,
    settings: OperatorSettings,
    config_file: Option<&Path>,
) -> Result<(), AppError> {
    let ctx = create_context(settings);
    with_config_source(config_file, |source| dispatcher::dispatch(&ctx, &source, event))
}

/// Run the hook named by `JUJU_DISPATCH_PATH`.
///
/// Returns the handled event, or `None` when the hook was ignored.
pub fn dispatch_from_env(
    settings: OperatorSettings,
    config_file: Option<&Path>,
) -> Result<Option<LifecycleEvent>, AppError> {
    let path = std::env::var(DISPATCH_PATH_ENV).ok();
    match dispatcher::resolve_dispatch_path(path.as_deref())? {
        Some(event) => {
            run_hook(event, settings, config_file)?;
            Ok(Some(event))
        }
        None => Ok(None),
    }
}

/// Render the configuration without touching the host.
pub fn render_preview(
    settings: &OperatorSettings,
    config_file: Option<&Path>,
) -> Result<String, AppError> {
    let renderer = MinijinjaTemplateRenderer::new();
    with_config_source(config_file, |source| render::render_config(&renderer, settings, &source))
}

/// Start, stop or restart the managed service.
pub fn control_service(
    settings: &OperatorSettings,
    action: ServiceAction,
) -> Result<(), AppError> {
    service::control(&SystemctlAdapter::new(), &settings.service, action)
}

/// Whether the managed service is running.
pub fn service_is_active(settings: &OperatorSettings) -> Result<bool, AppError> {
    service::is_active(&SystemctlAdapter::new(), &settings.service)
}
