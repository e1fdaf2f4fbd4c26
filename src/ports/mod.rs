mod config_source;
mod package_manager;
mod service_manager;
mod status_reporter;
mod template_renderer;

pub use config_source::ConfigSource;
pub use package_manager::PackageManager;
pub use service_manager::ServiceManager;
pub use status_reporter::StatusReporter;
pub use template_renderer::TemplateRenderer;
