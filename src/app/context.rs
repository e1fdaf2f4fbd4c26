use crate::domain::{AppError, OperatorSettings, UnitStatus};
use crate::ports::{PackageManager, ServiceManager, StatusReporter, TemplateRenderer};

/// Application context holding the collaborators a hook handler drives.
pub struct AppContext<P, S, R, T>
where
    P: PackageManager,
    S: ServiceManager,
    R: StatusReporter,
    T: TemplateRenderer,
{
    settings: OperatorSettings,
    packages: P,
    services: S,
    status: R,
    renderer: T,
}

impl<P, S, R, T> AppContext<P, S, R, T>
where
    P: PackageManager,
    S: ServiceManager,
    R: StatusReporter,
    T: TemplateRenderer,
{
    /// Create a new application context.
    pub fn new(
        settings: OperatorSettings,
        packages: P,
        services: S,
        status: R,
        renderer: T,
    ) -> Self {
        Self { settings, packages, services, status, renderer }
    }

    pub fn settings(&self) -> &OperatorSettings {
        &self.settings
    }

    pub fn packages(&self) -> &P {
        &self.packages
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    pub fn status(&self) -> &R {
        &self.status
    }

    pub fn renderer(&self) -> &T {
        &self.renderer
    }

    /// Publish a status transition.
    pub fn set_status(&self, status: UnitStatus) -> Result<(), AppError> {
        tracing::info!(kind = status.kind(), reason = status.message(), "unit status");
        self.status.set_status(&status)
    }
}
